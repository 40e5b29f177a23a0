//! # ReportTable Value Object
//!
//! 複数アプリ分のレポート行をまとめたバリューオブジェクト

use super::report_row::ReportRow;

/// レポートテーブル
///
/// 行の順序はアプリの取得順、各アプリ内ではAPIの返却順を保つ。
/// 重複排除は行わない。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReportTable {
    rows: Vec<ReportRow>,
}

impl ReportTable {
    /// 新しいテーブルを作成
    pub fn new(rows: Vec<ReportRow>) -> Self {
        Self { rows }
    }

    /// テーブル内の行数を返す
    #[inline]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// テーブルが空かどうかを返す
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// 行への参照を返す
    pub fn rows(&self) -> &[ReportRow] {
        &self.rows
    }

    /// 行の所有権を移動して返す
    pub fn into_rows(self) -> Vec<ReportRow> {
        self.rows
    }

    /// 別のテーブルを末尾に連結
    pub fn append(&mut self, other: ReportTable) {
        self.rows.extend(other.rows);
    }

    /// テーブルを順番に連結して1つにする
    pub fn concat(tables: impl IntoIterator<Item = ReportTable>) -> Self {
        let mut merged = Self::default();
        for table in tables {
            merged.append(table);
        }
        merged
    }

    /// 指定アプリの行数を返す
    pub fn count_for_app(&self, app: &str) -> usize {
        self.rows.iter().filter(|row| row.app == app).count()
    }
}

impl From<Vec<ReportRow>> for ReportTable {
    fn from(rows: Vec<ReportRow>) -> Self {
        Self::new(rows)
    }
}

impl From<ReportTable> for Vec<ReportRow> {
    fn from(table: ReportTable) -> Self {
        table.into_rows()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn create_rows(app: &str, count: usize) -> Vec<ReportRow> {
        (0..count)
            .map(|i| {
                ReportRow::new(
                    NaiveDate::from_ymd_opt(2024, 1, 1 + i as u32).unwrap(),
                    "ios",
                    Some(i as u64),
                    None,
                    None,
                    Some(1),
                    app,
                )
            })
            .collect()
    }

    #[test]
    fn test_report_table_empty() {
        let table = ReportTable::default();
        assert_eq!(table.len(), 0);
        assert!(table.is_empty());
    }

    #[test]
    fn test_append_preserves_order() {
        let mut table = ReportTable::new(create_rows("firefox", 2));
        table.append(ReportTable::new(create_rows("focus", 3)));

        assert_eq!(table.len(), 5);
        let apps: Vec<&str> = table.rows().iter().map(|r| r.app.as_str()).collect();
        assert_eq!(apps, vec!["firefox", "firefox", "focus", "focus", "focus"]);
    }

    #[test]
    fn test_concat() {
        let merged = ReportTable::concat(vec![
            ReportTable::new(create_rows("a", 3)),
            ReportTable::default(),
            ReportTable::new(create_rows("b", 5)),
        ]);

        assert_eq!(merged.len(), 8);
        assert_eq!(merged.count_for_app("a"), 3);
        assert_eq!(merged.count_for_app("b"), 5);
        assert_eq!(merged.rows()[3].app, "b");
    }

    #[test]
    fn test_concat_keeps_duplicates() {
        let rows = create_rows("a", 1);
        let merged = ReportTable::concat(vec![
            ReportTable::new(rows.clone()),
            ReportTable::new(rows),
        ]);

        assert_eq!(merged.len(), 2);
        assert_eq!(merged.rows()[0], merged.rows()[1]);
    }

    #[test]
    fn test_from_and_into_vec() {
        let table: ReportTable = create_rows("a", 2).into();
        let rows: Vec<ReportRow> = table.into();
        assert_eq!(rows.len(), 2);
    }
}
