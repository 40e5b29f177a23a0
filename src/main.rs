//! adjust-collector
//!
//! adjust.com の KPI を収集して Vertica にロード

// coverage_nightly cfg が設定されている場合のみ coverage_attribute を有効化
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

use anyhow::Result;
use clap::Parser;

use adjust_collector::adapter::config::Config;
use adjust_collector::driver::{Args, DefaultWorkflow};

#[cfg_attr(coverage_nightly, coverage(off))]
#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    // Load configuration
    let config = Config::load(&args.config)?;

    // Create workflow with injected dependencies
    let workflow = DefaultWorkflow::new(config)?;

    workflow.execute(args).await?;
    Ok(())
}
