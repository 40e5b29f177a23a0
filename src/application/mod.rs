//! # Application Layer
//!
//! アプリケーション固有のビジネスフロー（ユースケース）
//!
//! ## 特徴
//!
//! - Domain層のエンティティとサービスを組み合わせて収集→出力→ロードを実現
//! - Repository traitに依存（Adjust API や Vertica の実装には依存しない）
//!
//! ## 構成要素
//!
//! - **dto**: Data Transfer Object（収集設定・ロード設定）
//! - **use_cases**: ユースケース

pub mod dto;
pub mod use_cases;
