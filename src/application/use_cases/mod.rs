//! # Use Cases
//!
//! アプリケーションのビジネスフロー（ユースケース）
//!
//! ## ユースケース
//!
//! - **MergeReportsUseCase**: 全アプリのレポート取得と連結
//! - **WriteReportUseCase**: CSVファイルへの出力
//! - **LoadWarehouseUseCase**: ウェアハウステーブルの全件入れ替え

pub mod load_warehouse;
pub mod merge_reports;
pub mod write_report;
