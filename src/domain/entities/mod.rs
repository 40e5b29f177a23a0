//! # Domain Entities
//!
//! ビジネスエンティティとバリューオブジェクトを定義するモジュール
//!
//! ## エンティティ
//!
//! - **ReportRow**: KPIレポートの1行
//! - **ReportTable**: レポート行のコレクション（バリューオブジェクト）
//! - **LoadFiles / ReplaceStrategy**: ウェアハウスへのロード計画

pub mod load_plan;
pub mod report_row;
pub mod report_table;
