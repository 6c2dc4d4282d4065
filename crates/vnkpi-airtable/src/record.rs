use crate::error::TickerError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::borrow::Cow;
use utoipa::openapi::schema::{AdditionalProperties, ObjectBuilder, Schema};
use utoipa::openapi::RefOr;

////////////////////////////////////////////////////////////////////////////////////////////////////
//
// Ticker
//
////////////////////////////////////////////////////////////////////////////////////////////////////

/// Stock ticker symbol, always uppercase, never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Ticker(String);

impl Ticker {
    pub fn parse(raw: &str) -> Result<Self, TickerError> {
        if raw.is_empty() {
            return Err(TickerError::Empty);
        }
        Ok(Self(raw.to_uppercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Ticker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for Ticker {
    type Err = TickerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////
//
// Record
//
////////////////////////////////////////////////////////////////////////////////////////////////////

/// One row of the KPI table: the `fields` object of an Airtable record, as received.
///
/// ```json
/// {
///     "Ticker": "FPT",
///     "kpi": "Revenue",
///     "date": "2024-03-31",
///     "value": 100
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(Map<String, Value>);

impl Record {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_fields(self) -> Map<String, Value> {
        self.0
    }

    /// The dedup key: the `kpi` field, if it names something.
    ///
    /// Non-empty strings are used as-is; numbers and booleans by their JSON text. `null`, `""`,
    /// arrays, objects and an absent field are all missing.
    pub fn kpi(&self) -> Option<Cow<'_, str>> {
        match self.0.get("kpi")? {
            Value::String(name) if !name.is_empty() => Some(Cow::Borrowed(name)),
            Value::Number(n) => Some(Cow::Owned(n.to_string())),
            Value::Bool(b) => Some(Cow::Owned(b.to_string())),
            _ => None,
        }
    }
}

impl From<Map<String, Value>> for Record {
    fn from(fields: Map<String, Value>) -> Self {
        Self(fields)
    }
}

impl utoipa::PartialSchema for Record {
    fn schema() -> RefOr<Schema> {
        RefOr::T(Schema::Object(
            ObjectBuilder::new()
                .description(Some(
                    "Airtable record fields; at least `date`, usually `kpi`, passed through as stored.",
                ))
                .additional_properties(Some(AdditionalProperties::<Schema>::FreeForm(true)))
                .build(),
        ))
    }
}

impl utoipa::ToSchema for Record {
    fn name() -> Cow<'static, str> {
        Cow::Borrowed("Record")
    }
}
