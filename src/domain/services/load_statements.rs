//! # Load Statements Service
//!
//! ウェアハウスに発行するSQL文の組み立て

use std::path::Path;

use crate::domain::entities::load_plan::LoadFiles;

/// ロード用SQL文のビルダー
pub struct LoadStatements;

impl LoadStatements {
    /// テーブルを空にする（Vertica では暗黙的にコミットされる）
    pub fn truncate(table: &str) -> String {
        format!("TRUNCATE TABLE {}", table)
    }

    /// トランザクション内で全行を削除する
    pub fn delete_all(table: &str) -> String {
        format!("DELETE FROM {}", table)
    }

    /// ローカルファイルからのバルクロード文
    ///
    /// ヘッダー行をスキップし、不正行と例外をサイドカーファイルへ書き出す。
    /// 致命的なエラーが1件でもあればロード全体を中止する。
    /// 成功時には Vertica が暗黙的にコミットする。
    pub fn copy_from_local(table: &str, files: &LoadFiles) -> String {
        format!(
            "COPY {table} FROM LOCAL '{data}' DELIMITER ',' SKIP 1 \
             REJECTED DATA '{rejects}' EXCEPTIONS '{exceptions}' ABORT ON ERROR DIRECT",
            table = table,
            data = quote_path(&files.data_file),
            rejects = quote_path(&files.reject_file),
            exceptions = quote_path(&files.exception_file),
        )
    }

    /// `copy_from_local` の `NO COMMIT` 版
    ///
    /// 開いているトランザクションを確定しないため、明示的な COMMIT/ROLLBACK が必要。
    pub fn copy_from_local_no_commit(table: &str, files: &LoadFiles) -> String {
        format!("{} NO COMMIT", Self::copy_from_local(table, files))
    }
}

/// 文字列リテラル用にシングルクォートを二重化
fn quote_path(path: &Path) -> String {
    path.to_string_lossy().replace('\'', "''")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn files(dir: &str) -> LoadFiles {
        LoadFiles::new(PathBuf::from(dir).join("output.csv"), Path::new(dir))
    }

    #[test]
    fn test_truncate() {
        assert_eq!(
            LoadStatements::truncate("adjust_daily_active_users"),
            "TRUNCATE TABLE adjust_daily_active_users"
        );
    }

    #[test]
    fn test_delete_all() {
        assert_eq!(LoadStatements::delete_all("t"), "DELETE FROM t");
    }

    #[test]
    fn test_copy_from_local() {
        let sql =
            LoadStatements::copy_from_local("adjust_daily_active_users", &files("/tmp/adjust"));

        assert_eq!(
            sql,
            "COPY adjust_daily_active_users FROM LOCAL '/tmp/adjust/output.csv' \
             DELIMITER ',' SKIP 1 REJECTED DATA '/tmp/adjust/rejects' \
             EXCEPTIONS '/tmp/adjust/exceptions' ABORT ON ERROR DIRECT"
        );
    }

    #[test]
    fn test_copy_from_local_no_commit() {
        let sql = LoadStatements::copy_from_local_no_commit("t", &files("/tmp/adjust"));

        assert!(sql.starts_with("COPY t FROM LOCAL '/tmp/adjust/output.csv'"));
        assert!(sql.ends_with("ABORT ON ERROR DIRECT NO COMMIT"));
        assert!(!LoadStatements::copy_from_local("t", &files("/tmp/adjust")).contains("NO COMMIT"));
    }

    #[test]
    fn test_copy_from_local_escapes_quotes() {
        let sql = LoadStatements::copy_from_local("t", &files("/tmp/it's"));

        assert!(sql.contains("FROM LOCAL '/tmp/it''s/output.csv'"));
        assert!(sql.contains("REJECTED DATA '/tmp/it''s/rejects'"));
    }
}
