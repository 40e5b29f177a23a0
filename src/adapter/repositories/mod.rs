//! Repository Implementations
//!
//! Domain層のRepositoryトレイトの実装

pub mod adjust_report_repository;
pub mod csv_output_repository;
