//! # Data Transfer Objects
//!
//! ユースケースに渡す設定情報

pub mod collect_config;
pub mod load_config;
