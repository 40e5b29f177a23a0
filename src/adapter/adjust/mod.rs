//! Adjust KPI API Adapter Modules
//!
//! Adjust の KPI レポート取得のためのアダプターモジュール

pub mod client;
pub mod error;
pub mod parser;
pub mod url;

pub use client::{HttpKpiClient, KpiClient};
pub use error::FetchError;
