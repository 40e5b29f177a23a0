//! # adjust-collector
//!
//! adjust.com から DAU/WAU/MAU とインストール数を取得し、Vertica にロードするツール
//!
//! 以下の4層で構成されています：
//!
//! - **Domain層**: レポート行・テーブル、Repository trait、ロードSQLの組み立て
//! - **Application層**: 取得・連結、CSV出力、全件入れ替えのユースケース
//! - **Adapter層**: Adjust API (reqwest)、CSVファイル、Vertica (ODBC)、YAML設定
//! - **Driver層**: CLI、依存性注入

// coverage_nightly cfg が設定されている場合のみ coverage_attribute を有効化
// カバレッジ計測時に外部サービス依存コードを除外するために使用
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

// Domain層（純粋なビジネスロジック）
pub mod domain;

// Application層（ユースケース）
pub mod application;

// Adapter層（Infrastructure）
pub mod adapter;

// Driver層（Presentation）
pub mod driver;
