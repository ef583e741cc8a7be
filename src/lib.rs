pub mod api;
pub mod cli;
pub mod config;
pub mod database;
pub mod ledger;
pub mod services;
pub mod standings;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use log::info;

use crate::cli::Command;
use crate::config::settings::AppConfig;
use crate::services::server::ServerService;

pub fn interpret() -> Command {
    let cli = Cli::parse();
    cli.command
}

pub fn handle_serve(port: u16) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let config = AppConfig::new();
        let service = ServerService::new(port, config);
        service.run().await
    })
}

pub fn handle_setup() -> Result<()> {
    let db_path = database::database_path();
    let pool = database::create_pool(&db_path)?;
    let conn = database::get_connection(&pool)?;
    database::setup::apply_schema(&conn)?;
    info!("Database ready at {db_path}");
    Ok(())
}
