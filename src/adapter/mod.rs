//! Adapter Layer
//!
//! 外部システム（Adjust API, Vertica, ファイルシステム）との統合

pub mod adjust;
pub mod config;
pub mod repositories;
pub mod vertica;
