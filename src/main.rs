mod app;
mod auth;
mod config;
mod error;
mod events;
mod forms;
mod metrics;
mod models;
mod session;
mod state;
mod ui;

use crate::app::App;
use crate::config::Config;
use anyhow::Result;
use clap::{App as ClapApp, Arg};

#[tokio::main]
async fn main() -> Result<()> {
    let args = ClapApp::new(env!("CARGO_PKG_NAME"))
        .version(env!("CARGO_PKG_VERSION"))
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .arg(
            Arg::with_name("config")
                .short("c")
                .long("config")
                .value_name("FILE")
                .help("Path to a configuration file")
                .takes_value(true),
        )
        .get_matches();

    let mut config = Config::new();
    config.load(args.value_of("config"))?;
    App::start(config).await
}
