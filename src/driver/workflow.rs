//! Workflow Orchestration
//!
//! 接続 → 収集 → CSV出力 → ロード のオーケストレーション

use anyhow::{Context, Result};
use log::info;
use std::path::PathBuf;
use std::sync::Arc;

use crate::adapter::adjust::client::HttpKpiClient;
use crate::adapter::config::Config;
use crate::adapter::repositories::adjust_report_repository::AdjustReportRepository;
use crate::adapter::repositories::csv_output_repository::CsvOutputRepository;
use crate::adapter::vertica::OdbcConnector;
use crate::application::use_cases::load_warehouse::{LoadSummary, LoadWarehouseUseCase};
use crate::application::use_cases::merge_reports::MergeReportsUseCase;
use crate::application::use_cases::write_report::WriteReportUseCase;
use crate::domain::entities::load_plan::ReplaceStrategy;
use crate::domain::repositories::output_repository::OutputRepository;
use crate::domain::repositories::report_repository::ReportRepository;
use crate::domain::repositories::warehouse::{WarehouseConnector, WarehouseCursor};
use crate::domain::services::load_statements::LoadStatements;

use super::cli::Args;

/// 1回の実行結果
#[derive(Debug, Clone)]
pub struct RunSummary {
    /// 全アプリ合計の行数
    pub rows_collected: usize,
    /// 書き出したCSVのパス
    pub data_file: PathBuf,
    /// ロード結果（dry-run では `None`）
    pub load: Option<LoadSummary>,
}

/// Production workflow type
pub type DefaultWorkflow =
    CollectWorkflow<AdjustReportRepository<HttpKpiClient>, CsvOutputRepository, OdbcConnector>;

/// Adjust 収集ワークフロー
pub struct CollectWorkflow<R, O, W>
where
    R: ReportRepository,
    O: OutputRepository,
    W: WarehouseConnector,
{
    config: Config,
    merge_use_case: MergeReportsUseCase<R>,
    write_use_case: WriteReportUseCase<O>,
    connector: Arc<W>,
}

impl DefaultWorkflow {
    /// Create a new workflow instance with dependency injection
    pub fn new(config: Config) -> Result<Self> {
        let client = Arc::new(HttpKpiClient::new()?);
        let report_repo = Arc::new(AdjustReportRepository::new(client));
        let output_repo = Arc::new(CsvOutputRepository::new());
        let connector = Arc::new(OdbcConnector::new(config.vertica.dsn.clone()));

        Ok(Self::with_components(
            config,
            report_repo,
            output_repo,
            connector,
        ))
    }
}

impl<R, O, W> CollectWorkflow<R, O, W>
where
    R: ReportRepository,
    O: OutputRepository,
    W: WarehouseConnector,
{
    /// Build a workflow from explicit components
    pub fn with_components(
        config: Config,
        report_repository: Arc<R>,
        output_repository: Arc<O>,
        connector: Arc<W>,
    ) -> Self {
        Self {
            config,
            merge_use_case: MergeReportsUseCase::new(report_repository),
            write_use_case: WriteReportUseCase::new(output_repository),
            connector,
        }
    }

    /// Execute the collect-and-load workflow
    pub async fn execute(&self, args: Args) -> Result<RunSummary> {
        info!("Starting Adjust collector...");
        info!("Dry run: {}", args.dry_run);

        println!("✓ Using configuration: {}", args.config.display());
        println!("  Apps: {}", self.config.collect_config().app_names().join(", "));
        println!("  Table: {}", self.config.vertica.table);
        println!("  Load path: {}", self.config.load_dir().display());

        // 収集前に接続を確立して、接続できない場合はAPIを呼ばない
        let cursor = if args.dry_run {
            None
        } else {
            let cursor = self
                .connector
                .connect()
                .await
                .context("Failed to connect to the warehouse")?;
            println!("✓ Connected to Vertica");
            Some(cursor)
        };

        let table = self
            .merge_use_case
            .execute(&self.config.collect_config())
            .await?;
        println!("✓ Collected {} rows", table.len());

        let load_dir = self.config.load_dir();
        let data_file = self.write_use_case.execute(&table, &load_dir).await?;
        println!("✓ Wrote {}", data_file.display());

        let load_config = self.config.load_config(data_file.clone());

        let load = match cursor {
            None => {
                println!("✓ Dry-run mode (not loading)");
                let (replace, copy) = match load_config.strategy {
                    ReplaceStrategy::Truncate => (
                        LoadStatements::truncate(&load_config.table),
                        LoadStatements::copy_from_local(&load_config.table, &load_config.files),
                    ),
                    ReplaceStrategy::Transactional => (
                        LoadStatements::delete_all(&load_config.table),
                        LoadStatements::copy_from_local_no_commit(
                            &load_config.table,
                            &load_config.files,
                        ),
                    ),
                };
                println!("  Would execute:");
                println!("    {}", replace);
                println!("    {}", copy);
                None
            }
            Some(cursor) => {
                let cursor: Arc<dyn WarehouseCursor> = Arc::from(cursor);
                let use_case = LoadWarehouseUseCase::new(cursor);
                let summary = use_case.execute(&load_config).await?;
                println!(
                    "✓ Loaded {} ({} strategy)",
                    summary.table, summary.strategy
                );
                Some(summary)
            }
        };

        println!("✓ Collection complete!");

        Ok(RunSummary {
            rows_collected: table.len(),
            data_file,
            load,
        })
    }
}
