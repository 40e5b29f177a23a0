//! ODBC connection factory

use anyhow::Result;
use async_trait::async_trait;
use log::info;

use crate::domain::repositories::warehouse::{WarehouseConnector, WarehouseCursor};

/// Connects to Vertica through an ODBC data source name
pub struct OdbcConnector {
    dsn: String,
}

impl OdbcConnector {
    pub fn new(dsn: impl Into<String>) -> Self {
        Self { dsn: dsn.into() }
    }

    pub fn dsn(&self) -> &str {
        &self.dsn
    }

    pub fn connection_string(&self) -> String {
        format!("DSN={};", self.dsn)
    }
}

#[cfg_attr(coverage_nightly, coverage(off))]
#[async_trait]
impl WarehouseConnector for OdbcConnector {
    async fn connect(&self) -> Result<Box<dyn WarehouseCursor>> {
        #[cfg(feature = "odbc")]
        {
            let cursor = super::odbc_cursor::OdbcCursor::connect(&self.connection_string()).await?;
            info!("Database connection established (DSN={})", self.dsn);
            Ok(Box::new(cursor))
        }

        #[cfg(not(feature = "odbc"))]
        {
            info!("ODBC support is disabled; cannot connect to DSN={}", self.dsn);
            anyhow::bail!(
                "adjust-collector was built without ODBC support; \
                 rebuild with `--features odbc` (requires unixODBC and the Vertica driver)"
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connection_string() {
        let connector = OdbcConnector::new("vertica");
        assert_eq!(connector.connection_string(), "DSN=vertica;");
        assert_eq!(connector.dsn(), "vertica");
    }

    #[cfg(not(feature = "odbc"))]
    #[tokio::test]
    async fn test_connect_without_odbc_feature() {
        let result = OdbcConnector::new("vertica").connect().await;

        let message = result.err().unwrap().to_string();
        assert!(message.contains("--features odbc"));
    }
}
