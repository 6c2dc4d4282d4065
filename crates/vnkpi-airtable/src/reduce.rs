use crate::record::Record;
use std::collections::HashSet;

/// Keep the first record seen for each KPI name, dropping records without one.
///
/// `records` are expected newest-first (the fetcher asks Airtable to sort by `date`
/// descending), so the survivor for each name is its newest row. The order is not checked here.
/// Output order is the order in which each name first appears.
pub fn latest_per_kpi<I>(records: I) -> Vec<Record>
where
    I: IntoIterator<Item = Record>,
{
    let mut seen: HashSet<String> = HashSet::new();
    let mut latest = Vec::new();

    for record in records {
        let Some(kpi) = record.kpi() else {
            continue;
        };
        // older duplicates lose
        if seen.insert(kpi.into_owned()) {
            latest.push(record);
        }
    }

    latest
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::{json, Value};

    fn records(rows: Value) -> Vec<Record> {
        serde_json::from_value(rows).unwrap()
    }

    #[test]
    fn newest_row_per_kpi_is_kept() {
        let input = records(json!([
            {"kpi": "Revenue", "date": "2024-03-31", "v": 100},
            {"kpi": "Revenue", "date": "2023-12-31", "v": 90},
            {"kpi": "Margin", "date": "2024-03-31", "v": 0.2}
        ]));
        let expected = records(json!([
            {"kpi": "Revenue", "date": "2024-03-31", "v": 100},
            {"kpi": "Margin", "date": "2024-03-31", "v": 0.2}
        ]));
        assert_eq!(latest_per_kpi(input), expected);
    }

    #[test]
    fn rows_without_kpi_are_dropped() {
        let input = records(json!([{"date": "2024-01-01", "v": 5}]));
        assert_eq!(latest_per_kpi(input), Vec::<Record>::new());
    }

    #[test]
    fn missing_kpi_does_not_consume_a_slot() {
        let input = records(json!([
            {"kpi": "", "date": "2024-03-31"},
            {"date": "2024-03-31"},
            {"kpi": null, "date": "2024-03-31"},
            {"kpi": "EPS", "date": "2023-12-31", "v": 1},
            {"kpi": "EPS", "date": "2023-09-30", "v": 2}
        ]));
        let expected = records(json!([{"kpi": "EPS", "date": "2023-12-31", "v": 1}]));
        assert_eq!(latest_per_kpi(input), expected);
    }

    #[test]
    fn empty_in_empty_out() {
        assert_eq!(latest_per_kpi(Vec::new()), Vec::<Record>::new());
    }

    #[test]
    fn order_follows_first_occurrence() {
        let input = records(json!([
            {"kpi": "C", "date": "2024-03-31"},
            {"kpi": "A", "date": "2024-03-31"},
            {"kpi": "C", "date": "2023-12-31"},
            {"kpi": "B", "date": "2023-12-31"},
            {"kpi": "A", "date": "2023-12-31"}
        ]));
        let names: Vec<String> = latest_per_kpi(input)
            .iter()
            .filter_map(|r| r.kpi().map(|k| k.into_owned()))
            .collect();
        assert_eq!(names, vec!["C", "A", "B"]);
    }

    #[test]
    fn reducing_twice_changes_nothing() {
        let input = records(json!([
            {"kpi": "Revenue", "date": "2024-03-31"},
            {"kpi": "ROE", "date": "2024-03-31"},
            {"kpi": "Revenue", "date": "2023-12-31"},
            {"date": "2023-12-31"},
            {"kpi": "ROE", "date": "2023-06-30"}
        ]));
        let once = latest_per_kpi(input);
        let twice = latest_per_kpi(once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn survivor_has_the_max_date_for_sorted_input() {
        // dates are ISO strings, so lexicographic order is chronological
        let mut input = records(json!([
            {"kpi": "A", "date": "2022-12-31", "n": 1},
            {"kpi": "B", "date": "2024-06-30", "n": 2},
            {"kpi": "A", "date": "2024-03-31", "n": 3},
            {"kpi": "B", "date": "2023-03-31", "n": 4},
            {"kpi": "A", "date": "2023-09-30", "n": 5}
        ]));
        let date = |r: &Record| r.get("date").and_then(Value::as_str).unwrap_or_default().to_string();
        input.sort_by_key(|r| std::cmp::Reverse(date(r)));

        for kept in latest_per_kpi(input.clone()) {
            let newest = input
                .iter()
                .filter(|r| r.kpi() == kept.kpi())
                .map(date)
                .max()
                .unwrap();
            assert_eq!(date(&kept), newest);
        }
    }
}
