//! # Domain Services
//!
//! エンティティに属さないビジネスルール
//!
//! - **LoadStatements**: ウェアハウスへのロードSQLの組み立て

pub mod load_statements;
