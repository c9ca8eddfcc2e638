//! Plain-text account statement rendering and export.
//!
//! The statement is a fixed-width table of the currently displayed
//! transactions. Rendering is pure; writing the file is the only side
//! effect, and neither touches application state.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Local;
use color_eyre::Result;

use crate::constants::CURRENCY_PREFIX;
use crate::domain::Transaction;

const DATE_WIDTH: usize = 12;
const TYPE_WIDTH: usize = 10;
const AMOUNT_WIDTH: usize = 16;
const STATUS_WIDTH: usize = 10;

/// Renders transactions into a tabular statement document.
///
/// The first line is always the header row; an empty input produces the
/// header row and nothing else.
#[must_use]
pub fn render_statement(transactions: &[&Transaction]) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{:<DATE_WIDTH$}{:<TYPE_WIDTH$}{:<AMOUNT_WIDTH$}{:<STATUS_WIDTH$}",
        "Date", "Type", "Amount", "Status"
    ));

    for txn in transactions {
        let amount = format!("{CURRENCY_PREFIX} {}", txn.amount);
        out.push('\n');
        out.push_str(&format!(
            "{:<DATE_WIDTH$}{:<TYPE_WIDTH$}{:<AMOUNT_WIDTH$}{:<STATUS_WIDTH$}",
            txn.date,
            txn.kind.label(),
            amount,
            txn.status.label()
        ));
    }

    out.push('\n');
    out
}

/// Renders and writes a statement file into `dir`, returning its path.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_statement(transactions: &[&Transaction], dir: &Path) -> Result<PathBuf> {
    let stamp = Local::now().format("%Y%m%d-%H%M%S");
    let path = dir.join(format!("carlosphere-statement-{stamp}.txt"));
    fs::write(&path, render_statement(transactions))?;
    Ok(path)
}

/// Directory statements are exported to: the user's download directory
/// when one exists, otherwise the home directory, otherwise the current
/// working directory.
#[must_use]
pub fn statement_dir() -> PathBuf {
    dirs::download_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{TxnKind, TxnStatus};

    fn txn(date: &str, kind: TxnKind, amount: &str, status: TxnStatus) -> Transaction {
        Transaction {
            date: date.to_string(),
            kind,
            amount: amount.to_string(),
            status,
            counterpart: "Mary Smith".to_string(),
        }
    }

    #[test]
    fn test_empty_statement_is_header_only() {
        let rendered = render_statement(&[]);
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].starts_with("Date"));
    }

    #[test]
    fn test_statement_has_one_row_per_transaction() {
        let a = txn("2025-01-01", TxnKind::Credit, "100.00", TxnStatus::Completed);
        let b = txn("2025-01-02", TxnKind::Sent, "50.00", TxnStatus::Pending);
        let rendered = render_statement(&[&a, &b]);
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[1].contains("credit"));
        assert!(lines[1].contains("KES 100.00"));
        assert!(lines[2].contains("sent"));
        assert!(lines[2].contains("pending"));
    }

    #[test]
    fn test_amounts_are_currency_prefixed() {
        let a = txn("2025-01-01", TxnKind::Debit, "1,250.00", TxnStatus::Failed);
        let rendered = render_statement(&[&a]);
        assert!(rendered.contains("KES 1,250.00"));
        assert!(rendered.contains("failed"));
    }

    #[test]
    fn test_write_statement_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let a = txn("2025-01-01", TxnKind::Credit, "10.00", TxnStatus::Completed);

        let path = write_statement(&[&a], dir.path()).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("Date"));
        assert!(content.contains("credit"));
    }
}
