//! # Thrift by Musk storefront
//!
//! Command-line entry point. See [`thrift_boutique::cli`] for the commands.

use clap::Parser;
use store_runtime::tracing::setup_tracing;
use thrift_boutique::cli::{self, Cli};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    setup_tracing();
    cli::run(Cli::parse()).await
}
