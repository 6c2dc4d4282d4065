use crate::config::{AirtableConfig, PAGE_SIZE};
use crate::error::FetchError;
use crate::record::{Record, Ticker};
use crate::reduce::latest_per_kpi;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::Client;
use serde::Deserialize;
use std::future::Future;
use tracing::{debug, trace};

/// Body of Airtable's "list records" endpoint; only the fields are kept.
///
/// ```json
/// {
///     "records": [
///         { "id": "rec...", "createdTime": "...", "fields": { "kpi": "Revenue", ... } },
///         // ...
///     ]
/// }
/// ```
#[derive(Deserialize, Debug)]
struct ListRecords {
    #[serde(default)]
    records: Vec<AirtableRecord>,
}

#[derive(Deserialize, Debug)]
struct AirtableRecord {
    #[serde(default)]
    fields: Record,
}

/// `reqwest::Client` configured for Airtable: the request timeout comes from `config`.
pub fn build_client(config: &AirtableConfig) -> Result<Client, FetchError> {
    reqwest::ClientBuilder::new()
        .timeout(config.timeout)
        .build()
        .map_err(FetchError::Client)
}

/// `https://api.airtable.com/v0/{base}/{table}`
pub fn records_url(config: &AirtableConfig) -> String {
    format!("{}/{}/{}", config.api_url, config.base_id, config.table_id)
}

/// Airtable formula matching rows of `ticker`, e.g. `{Ticker}='FPT'`.
///
/// Backslashes and single quotes are escaped so the ticker cannot leave the string literal.
pub fn filter_formula(ticker: &Ticker) -> String {
    let escaped = ticker.as_str().replace('\\', "\\\\").replace('\'', "\\'");
    format!("{{Ticker}}='{escaped}'")
}

pub trait ClientAirtableExt {
    fn airtable_records(
        &self,
        config: &AirtableConfig,
        ticker: &Ticker,
    ) -> impl Future<Output = Result<Vec<Record>, FetchError>> + Send;
}

/// Add-on methods for [`reqwest::Client`].
///
/// [`reqwest::Client`]: https://docs.rs/reqwest/latest/reqwest/struct.Client.html
impl ClientAirtableExt for Client {
    /// GET one page of `ticker`'s rows, newest `date` first, in the order Airtable returns them.
    ///
    /// Exactly one request is sent; nothing is retried.
    async fn airtable_records(
        &self,
        config: &AirtableConfig,
        ticker: &Ticker,
    ) -> Result<Vec<Record>, FetchError> {
        let url = records_url(config);
        let page_size = PAGE_SIZE.to_string();
        let params = [
            ("filterByFormula", filter_formula(ticker)),
            ("sort[0][field]", "date".to_string()),
            ("sort[0][direction]", "desc".to_string()),
            ("pageSize", page_size),
        ];
        trace!("GET {url} {params:?}");

        let response = self
            .get(&url)
            .bearer_auth(&config.token)
            .header(CONTENT_TYPE, "application/json")
            .query(&params)
            .send()
            .await
            .map_err(FetchError::Unavailable)?;

        let status = response.status();
        debug!("Airtable status for {ticker}: {status}");

        if !status.is_success() {
            // the body is forwarded as-is; an unreadable body is forwarded as empty
            let body = response.text().await.unwrap_or_default();
            return Err(FetchError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        let page: ListRecords = response.json().await.map_err(FetchError::Decode)?;
        trace!("{} records fetched for {ticker}", page.records.len());

        Ok(page.records.into_iter().map(|r| r.fields).collect())
    }
}

/// Fetch `ticker`'s rows and keep the newest one per KPI name.
pub async fn fetch_latest_kpis(
    client: &Client,
    config: &AirtableConfig,
    ticker: &Ticker,
) -> Result<Vec<Record>, FetchError> {
    let records = client.airtable_records(config, ticker).await?;
    let fetched = records.len();
    let latest = latest_per_kpi(records);
    debug!("{ticker}: {fetched} rows reduced to {} KPIs", latest.len());
    Ok(latest)
}
