use anyhow::{Context, Result, bail};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use crate::ingestion::fetch::FetchClient;
use crate::storage::backend::FileBackend;
use crate::storage::store::CounterStore;

/// Runtime configuration for a word counter node.
#[derive(Clone, Debug)]
pub struct Config {
    pub bind_addr: SocketAddr,
    /// Snapshot file; `None` keeps counters in memory only.
    pub data_path: Option<PathBuf>,
    pub fetch_timeout: Duration,
    pub fetch_attempts: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 5000)),
            data_path: None,
            fetch_timeout: Duration::from_secs(10),
            fetch_attempts: 3,
        }
    }
}

impl Config {
    /// Builds a config from command-line arguments (including the program name).
    ///
    /// Recognized flags: `--bind <addr:port>`, `--data <path>`, `--fetch-timeout-ms <n>`,
    /// `--fetch-attempts <n>`. Unknown arguments are ignored.
    pub fn from_args(args: &[String]) -> Result<Self> {
        let mut config = Config::default();

        let mut i = 1;
        while i < args.len() {
            match args[i].as_str() {
                "--bind" => {
                    let value = flag_value(args, i)?;
                    config.bind_addr = value
                        .parse()
                        .with_context(|| format!("invalid --bind address '{}'", value))?;
                    i += 2;
                }
                "--data" => {
                    config.data_path = Some(PathBuf::from(flag_value(args, i)?));
                    i += 2;
                }
                "--fetch-timeout-ms" => {
                    let value = flag_value(args, i)?;
                    let millis: u64 = value
                        .parse()
                        .with_context(|| format!("invalid --fetch-timeout-ms '{}'", value))?;
                    config.fetch_timeout = Duration::from_millis(millis);
                    i += 2;
                }
                "--fetch-attempts" => {
                    let value = flag_value(args, i)?;
                    config.fetch_attempts = value
                        .parse()
                        .with_context(|| format!("invalid --fetch-attempts '{}'", value))?;
                    if config.fetch_attempts == 0 {
                        bail!("--fetch-attempts must be at least 1");
                    }
                    i += 2;
                }
                _ => {
                    i += 1;
                }
            }
        }

        Ok(config)
    }

    /// Opens the counter store described by this config.
    pub fn open_store(&self) -> crate::error::Result<Arc<CounterStore>> {
        match &self.data_path {
            Some(path) => CounterStore::with_backend(FileBackend::new(path)),
            None => Ok(CounterStore::in_memory()),
        }
    }

    pub fn fetch_client(&self) -> FetchClient {
        FetchClient::new(self.fetch_timeout, self.fetch_attempts)
    }
}

fn flag_value(args: &[String], i: usize) -> Result<&str> {
    match args.get(i + 1) {
        Some(value) => Ok(value.as_str()),
        None => bail!("{} requires a value", args[i]),
    }
}
