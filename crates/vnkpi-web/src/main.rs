use actix_web::{middleware::Logger, web, App, HttpServer};
use anyhow::{Context, Result};
use clap::Parser;
use dotenv::dotenv;
use tracing::{debug, info, Level};
use tracing_subscriber::FmtSubscriber;
use vnkpi_airtable::{build_client, AirtableConfig};
use vnkpi_web::{cli::Cli, configure, AppState};

fn preprocess(trace_level: Level) -> Result<()> {
    // `try_init` also forwards actix-web's `log` records into tracing
    FmtSubscriber::builder()
        .with_max_level(trace_level)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to set tracing subscriber: {e}"))
}

#[actix_web::main]
async fn main() -> Result<()> {
    dotenv().ok();
    let cli = Cli::parse();
    preprocess(cli.trace.into())?;
    debug!("Command line input recorded: {cli:#?}");

    // fail fast: no token, no server
    let config = AirtableConfig::from_env().context("invalid Airtable configuration")?;
    let client = build_client(&config)?;
    let state = web::Data::new(AppState { client, config });

    info!("Serving VN KPI API on {}:{}", cli.host, cli.port);
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(state.clone())
            .configure(configure)
    })
    .bind((cli.host.as_str(), cli.port))?
    .run()
    .await?;

    Ok(())
}
