//! # Warehouse Traits
//!
//! 分析用ウェアハウスへのSQL実行を抽象化

use anyhow::Result;
use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

/// ウェアハウスのカーソル
///
/// 1本の接続上で文を1つずつ実行する
#[cfg_attr(test, automock)]
#[async_trait]
pub trait WarehouseCursor: Send + Sync {
    /// SQLを実行し、ドライバが返した影響行数を返す
    async fn execute(&self, sql: &str) -> Result<Option<u64>>;

    /// 自動コミットを止めてトランザクションを開始
    async fn begin(&self) -> Result<()>;

    /// トランザクションをコミット
    async fn commit(&self) -> Result<()>;

    /// トランザクションをロールバック
    async fn rollback(&self) -> Result<()>;
}

/// ウェアハウス接続のファクトリ
#[async_trait]
pub trait WarehouseConnector: Send + Sync {
    async fn connect(&self) -> Result<Box<dyn WarehouseCursor>>;
}
