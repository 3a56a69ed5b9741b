use crate::config::cli::Args;
use crate::error::Result;
use reqwest::Client;
use std::time::Duration;
use tracing::info;

pub mod cli;
pub mod tables;

pub use tables::{EngineTables, DEFAULT_TABLES};

pub struct Config {
    pub args: Args,
    pub tables: EngineTables,
    pub http_client: Client,
}

impl Config {
    pub fn from_args(args: Args) -> Result<Self> {
        let tables = EngineTables::load(args.tables_file.as_deref())?;

        let http_client = Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(concat!("artistpulse/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            args,
            tables,
            http_client,
        })
    }

    pub fn ensure_directories(&self) -> Result<()> {
        if !self.args.output_dir.exists() {
            std::fs::create_dir_all(&self.args.output_dir)?;
        }

        info!("Output dir exists");
        Ok(())
    }
}
