//! COVID-19 case dashboard server.
//!
//! Loads the CSV export once at startup, renders the page and serves the
//! dashboard over HTTP. Any load error is fatal; the process exits with
//! context before binding the listener.

use anyhow::Context;
use clap::Parser;
use covid_dashboard::server;
use covid_data::CovidDataset;
use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "covid-dashboard",
    version,
    about = "Interactive web dashboard for COVID-19 case data"
)]
struct Opt {
    /// Path to the OWID-style CSV export to serve
    #[arg(long, default_value = "owid-covid-data.csv")]
    data: PathBuf,

    /// Address to bind the dashboard server
    #[arg(long, default_value = "127.0.0.1:8050")]
    addr: SocketAddr,

    /// Enable debug-level logging
    #[arg(long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let opt = Opt::parse();

    let default_level = if opt.debug { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let dataset = CovidDataset::from_csv_path(&opt.data)
        .with_context(|| format!("failed to load dataset from {}", opt.data.display()))?;

    server::serve(opt.addr, dataset).await
}
