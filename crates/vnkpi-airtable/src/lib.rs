pub mod client_ext;
pub mod config;
pub mod error;
pub mod record;
pub mod reduce;

pub use crate::client_ext::{build_client, fetch_latest_kpis, ClientAirtableExt as Airtable};
pub use crate::config::AirtableConfig;
pub use crate::error::{ConfigError, FetchError, TickerError};
pub use crate::record::{Record, Ticker};
pub use crate::reduce::latest_per_kpi;
