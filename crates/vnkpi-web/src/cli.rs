use clap::{Parser, ValueEnum};

#[derive(Parser, Debug)]
#[command(version, about = "Serve the latest KPI rows per ticker from Airtable", long_about = None)]
pub struct Cli {
    /// Address to bind the HTTP server to
    #[arg(long, env = "KPI_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Port to bind the HTTP server to
    #[arg(long, env = "KPI_PORT", default_value_t = 8080)]
    pub port: u16,

    /// Sets the level of tracing
    #[arg(long, default_value = "info", ignore_case = true)]
    pub trace: TraceLevel,
}

#[derive(ValueEnum, Copy, Clone, Debug, PartialEq, Eq)]
pub enum TraceLevel {
    DEBUG,
    INFO,
    WARN,
    ERROR,
}

impl From<TraceLevel> for tracing::Level {
    fn from(level: TraceLevel) -> Self {
        match level {
            TraceLevel::DEBUG => tracing::Level::DEBUG,
            TraceLevel::INFO => tracing::Level::INFO,
            TraceLevel::WARN => tracing::Level::WARN,
            TraceLevel::ERROR => tracing::Level::ERROR,
        }
    }
}
