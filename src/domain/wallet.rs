//! Wallet data types: balance snapshot, transactions, and filtering.

use serde::{Deserialize, Serialize};

use crate::constants::{CURRENCY_PREFIX, MASKED_BALANCE};

// ============================================================================
// Transaction Kind
// ============================================================================

/// Direction/kind of a wallet transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TxnKind {
    Credit,
    Debit,
    Sent,
    Received,
}

impl TxnKind {
    /// Lowercase label as shown in the UI and matched by search.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Credit => "credit",
            Self::Debit => "debit",
            Self::Sent => "sent",
            Self::Received => "received",
        }
    }

    /// Returns `true` for kinds that add money to the wallet.
    #[must_use]
    pub const fn is_inflow(self) -> bool {
        matches!(self, Self::Credit | Self::Received)
    }
}

// ============================================================================
// Transaction Status
// ============================================================================

/// Settlement status of a transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TxnStatus {
    Pending,
    Completed,
    Failed,
}

impl TxnStatus {
    /// Lowercase label as shown in the UI.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Completed => "completed",
            Self::Failed => "failed",
        }
    }
}

// ============================================================================
// Transaction
// ============================================================================

/// A single wallet transaction. Immutable once fetched; the list is only
/// ever replaced wholesale by a fresh snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Transaction date as supplied by the backend.
    pub date: String,
    /// Direction/kind of the transaction.
    #[serde(rename = "type")]
    pub kind: TxnKind,
    /// Decimal amount string, without currency prefix.
    pub amount: String,
    /// Settlement status.
    pub status: TxnStatus,
    /// The other party (sender or recipient name).
    pub counterpart: String,
}

impl Transaction {
    /// Signed, currency-prefixed amount for display, e.g. `+KES 5,000.00`.
    #[must_use]
    pub fn signed_amount(&self) -> String {
        let sign = if self.kind.is_inflow() { '+' } else { '-' };
        format!("{sign}{CURRENCY_PREFIX} {}", self.amount)
    }
}

// ============================================================================
// Wallet Snapshot
// ============================================================================

/// The wallet state as last fetched from the backend. Balance and
/// transaction list always come from the same fetch; the snapshot is
/// swapped atomically so the two never disagree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletSnapshot {
    /// Decimal balance string, without currency prefix.
    pub balance: String,
    /// Full account number.
    #[serde(alias = "accountNumber")]
    pub account_number: String,
    /// Transactions, newest first as returned by the backend.
    pub transactions: Vec<Transaction>,
}

impl WalletSnapshot {
    /// Account number masked down to its last four digits, e.g. `•••• 4521`.
    #[must_use]
    pub fn masked_account(&self) -> String {
        let digits: String = self
            .account_number
            .chars()
            .rev()
            .take(4)
            .collect::<Vec<_>>()
            .into_iter()
            .rev()
            .collect();
        format!("\u{2022}\u{2022}\u{2022}\u{2022} {digits}")
    }
}

/// Balance line for the dashboard card: `KES <balance>` when visible,
/// `KES ••••••` when hidden.
#[must_use]
pub fn balance_line(balance: &str, visible: bool) -> String {
    if visible {
        format!("{CURRENCY_PREFIX} {balance}")
    } else {
        format!("{CURRENCY_PREFIX} {MASKED_BALANCE}")
    }
}

// ============================================================================
// Filtering
// ============================================================================

/// Kind filter applied to the transaction list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KindFilter {
    /// Show every transaction.
    #[default]
    All,
    /// Only credits.
    Credit,
    /// Only debits.
    Debit,
}

impl KindFilter {
    /// Display label for the filter control.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Credit => "credit",
            Self::Debit => "debit",
        }
    }

    /// Cycles to the next filter.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::All => Self::Credit,
            Self::Credit => Self::Debit,
            Self::Debit => Self::All,
        }
    }

    const fn matches(self, kind: TxnKind) -> bool {
        match self {
            Self::All => true,
            Self::Credit => matches!(kind, TxnKind::Credit),
            Self::Debit => matches!(kind, TxnKind::Debit),
        }
    }
}

/// Filters transactions by kind and by a case-insensitive substring match
/// against the kind label. Pure: the source list is never mutated and
/// relative order is preserved.
#[must_use]
pub fn filter_transactions<'a>(
    transactions: &'a [Transaction],
    filter: KindFilter,
    search: &str,
) -> Vec<&'a Transaction> {
    let needle = search.trim().to_lowercase();
    transactions
        .iter()
        .filter(|txn| filter.matches(txn.kind))
        .filter(|txn| needle.is_empty() || txn.kind.label().contains(&needle))
        .collect()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn txn(kind: TxnKind, amount: &str) -> Transaction {
        Transaction {
            date: "2025-01-01".to_string(),
            kind,
            amount: amount.to_string(),
            status: TxnStatus::Completed,
            counterpart: "John Doe".to_string(),
        }
    }

    #[test]
    fn test_filter_credit_preserves_order() {
        let txns = vec![
            txn(TxnKind::Credit, "1.00"),
            txn(TxnKind::Debit, "2.00"),
            txn(TxnKind::Credit, "3.00"),
        ];

        let filtered = filter_transactions(&txns, KindFilter::Credit, "");
        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered[0].amount, "1.00");
        assert_eq!(filtered[1].amount, "3.00");
        // Source untouched.
        assert_eq!(txns.len(), 3);
    }

    #[test]
    fn test_search_matches_kind_label_substring() {
        let txns = vec![txn(TxnKind::Credit, "1.00"), txn(TxnKind::Debit, "2.00")];

        let filtered = filter_transactions(&txns, KindFilter::All, "bit");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].kind, TxnKind::Debit);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let txns = vec![txn(TxnKind::Received, "5.00"), txn(TxnKind::Sent, "1.00")];

        let filtered = filter_transactions(&txns, KindFilter::All, "RECEIVED");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].kind, TxnKind::Received);
    }

    #[test]
    fn test_empty_search_matches_everything() {
        let txns = vec![txn(TxnKind::Sent, "1.00"), txn(TxnKind::Received, "2.00")];
        assert_eq!(filter_transactions(&txns, KindFilter::All, "").len(), 2);
    }

    #[rstest]
    #[case(true, "KES 100.00")]
    #[case(false, "KES \u{2022}\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}")]
    fn test_balance_line_visibility(#[case] visible: bool, #[case] expected: &str) {
        assert_eq!(balance_line("100.00", visible), expected);
    }

    #[test]
    fn test_signed_amount_direction() {
        assert_eq!(txn(TxnKind::Received, "5,000.00").signed_amount(), "+KES 5,000.00");
        assert_eq!(txn(TxnKind::Sent, "1,250.00").signed_amount(), "-KES 1,250.00");
        assert_eq!(txn(TxnKind::Credit, "10.00").signed_amount(), "+KES 10.00");
        assert_eq!(txn(TxnKind::Debit, "10.00").signed_amount(), "-KES 10.00");
    }

    #[test]
    fn test_masked_account_keeps_last_four() {
        let snapshot = WalletSnapshot {
            balance: "0.00".to_string(),
            account_number: "00114521".to_string(),
            transactions: Vec::new(),
        };
        assert_eq!(snapshot.masked_account(), "\u{2022}\u{2022}\u{2022}\u{2022} 4521");
    }

    #[test]
    fn test_snapshot_accepts_camel_case_account_number() {
        let json = r#"{"balance":"100.00","accountNumber":"AC1","transactions":[]}"#;
        let snapshot: WalletSnapshot = serde_json::from_str(json).unwrap();
        assert_eq!(snapshot.account_number, "AC1");
    }

    #[test]
    fn test_transaction_wire_format() {
        let json = r#"{"date":"2025-01-02","type":"received","amount":"5,000.00","status":"pending","counterpart":"John Doe"}"#;
        let parsed: Transaction = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.kind, TxnKind::Received);
        assert_eq!(parsed.status, TxnStatus::Pending);
    }
}
