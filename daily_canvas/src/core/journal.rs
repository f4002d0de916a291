//! Journal note naming.

use chrono::NaiveDate;

/// Path of the journal note for `date`: `<journal_dir><YYYY-MM-DD>.md`.
///
/// `journal_dir` is a raw prefix; no separator is inserted.
pub fn journal_path(journal_dir: &str, date: NaiveDate) -> String {
    format!("{}{}.md", journal_dir, date.format("%Y-%m-%d"))
}
