//! Emits one record per level using `LOG_LEVEL`, `LOG_FORMAT` and `LOG_OUT`.
//!
//! `LOG_LEVEL=debug LOG_FORMAT=json cargo run --bin svclog-demo`

use std::io;

use anyhow::{Context, Result};
use svclog::{e, f, LogSettings};

fn main() -> Result<()> {
    let config = LogSettings::from_env()
        .into_config()
        .context("invalid logger settings")?;
    svclog::alter_default_logger(config);
    svclog::install_log_bridge(svclog::default_logger().config().min_level())
        .context("log backend already installed")?;

    let tx_id = svclog::new_transaction_id();
    svclog::debug(&tx_id, "cache warmed", &[f("entries", 1024)]);
    svclog::info(&tx_id, "request accepted", &[f("path", "/orders"), f("id", 123)]);
    svclog::warn(&tx_id, "slow upstream", &[f("elapsed_ms", 1500)]);

    let err = io::Error::new(io::ErrorKind::TimedOut, "upstream timed out");
    svclog::error(&tx_id, "request failed", &[e(&err)]);

    log::info!("bridged record from the log facade");
    Ok(())
}
