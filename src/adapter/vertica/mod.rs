//! Vertica Adapter Modules
//!
//! ODBC経由のVertica接続

pub mod connector;
#[cfg(feature = "odbc")]
pub mod odbc_cursor;

pub use connector::OdbcConnector;
