//! Wallet data cache: last-fetched snapshot plus dashboard view state.
//!
//! The snapshot is replaced wholesale on every successful refresh; a failed
//! refresh leaves the previous snapshot on screen. An in-flight flag keeps
//! a second refresh from racing an outstanding one.

use crate::domain::{KindFilter, Transaction, WalletSnapshot, balance_line, filter_transactions};

/// Cached wallet state for the current session.
#[derive(Debug, Default)]
pub struct WalletCache {
    /// Last successfully fetched snapshot, if any.
    snapshot: Option<WalletSnapshot>,

    // === Dashboard view state ===
    /// Whether the balance renders or is masked.
    pub show_balance: bool,
    /// Active kind filter.
    pub kind_filter: KindFilter,
    /// Transaction search text (matched against kind labels).
    pub search: String,
    /// Whether the search input has focus.
    pub search_focused: bool,
    /// Selected row in the filtered transaction list.
    pub selected: usize,

    // === In-flight guards ===
    refreshing: bool,
    /// A transfer/request/deposit is outstanding.
    pub submitting_action: bool,
}

impl WalletCache {
    #[must_use]
    pub fn new() -> Self {
        Self {
            show_balance: true,
            ..Self::default()
        }
    }

    /// The cached snapshot, if one has been fetched this session.
    #[must_use]
    pub fn snapshot(&self) -> Option<&WalletSnapshot> {
        self.snapshot.as_ref()
    }

    /// Returns `true` if a refresh is currently outstanding.
    #[must_use]
    pub const fn is_refreshing(&self) -> bool {
        self.refreshing
    }

    /// Claims the refresh guard. Returns `false` (and does nothing) when a
    /// refresh is already outstanding.
    pub fn begin_refresh(&mut self) -> bool {
        if self.refreshing {
            return false;
        }
        self.refreshing = true;
        true
    }

    /// Releases the refresh guard and, on success, swaps in the new
    /// snapshot. Balance and transactions always arrive together.
    pub fn finish_refresh(&mut self, snapshot: Option<WalletSnapshot>) {
        self.refreshing = false;
        if let Some(snapshot) = snapshot {
            self.snapshot = Some(snapshot);
            self.clamp_selection();
        }
    }

    /// Drops all cached data and view state (logout).
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    // ========================================================================
    // Dashboard View
    // ========================================================================

    pub fn toggle_balance(&mut self) {
        self.show_balance = !self.show_balance;
    }

    pub fn cycle_filter(&mut self) {
        self.kind_filter = self.kind_filter.next();
        self.clamp_selection();
    }

    /// Balance text for the card, respecting the visibility toggle.
    #[must_use]
    pub fn balance_display(&self) -> String {
        let balance = self
            .snapshot
            .as_ref()
            .map_or("0.00", |s| s.balance.as_str());
        balance_line(balance, self.show_balance)
    }

    /// Transactions passing the active filter and search, newest first.
    #[must_use]
    pub fn filtered(&self) -> Vec<&Transaction> {
        self.snapshot.as_ref().map_or_else(Vec::new, |s| {
            filter_transactions(&s.transactions, self.kind_filter, &self.search)
        })
    }

    pub fn select_next(&mut self) {
        let count = self.filtered().len();
        if count > 0 && self.selected + 1 < count {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub(crate) fn clamp_selection(&mut self) {
        let count = self.filtered().len();
        if self.selected >= count {
            self.selected = count.saturating_sub(1);
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{TxnKind, TxnStatus};

    fn snapshot(balance: &str, kinds: &[TxnKind]) -> WalletSnapshot {
        WalletSnapshot {
            balance: balance.to_string(),
            account_number: "AC1".to_string(),
            transactions: kinds
                .iter()
                .map(|&kind| Transaction {
                    date: "2025-01-01".to_string(),
                    kind,
                    amount: "1.00".to_string(),
                    status: TxnStatus::Completed,
                    counterpart: "X".to_string(),
                })
                .collect(),
        }
    }

    #[test]
    fn test_refresh_guard_rejects_second_refresh() {
        let mut cache = WalletCache::new();
        assert!(cache.begin_refresh());
        assert!(!cache.begin_refresh());

        cache.finish_refresh(None);
        assert!(cache.begin_refresh());
    }

    #[test]
    fn test_failed_refresh_keeps_stale_snapshot() {
        let mut cache = WalletCache::new();
        cache.begin_refresh();
        cache.finish_refresh(Some(snapshot("100.00", &[TxnKind::Credit])));

        cache.begin_refresh();
        cache.finish_refresh(None);

        assert_eq!(cache.snapshot().unwrap().balance, "100.00");
    }

    #[test]
    fn test_snapshot_replaced_wholesale() {
        let mut cache = WalletCache::new();
        cache.begin_refresh();
        cache.finish_refresh(Some(snapshot("100.00", &[TxnKind::Credit, TxnKind::Debit])));
        cache.begin_refresh();
        cache.finish_refresh(Some(snapshot("50.00", &[TxnKind::Sent])));

        let snap = cache.snapshot().unwrap();
        assert_eq!(snap.balance, "50.00");
        assert_eq!(snap.transactions.len(), 1);
    }

    #[test]
    fn test_balance_display_respects_visibility() {
        let mut cache = WalletCache::new();
        cache.begin_refresh();
        cache.finish_refresh(Some(snapshot("100.00", &[])));

        assert_eq!(cache.balance_display(), "KES 100.00");
        cache.toggle_balance();
        assert_eq!(
            cache.balance_display(),
            "KES \u{2022}\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}"
        );
    }

    #[test]
    fn test_filtered_applies_kind_filter() {
        let mut cache = WalletCache::new();
        cache.begin_refresh();
        cache.finish_refresh(Some(snapshot(
            "10.00",
            &[TxnKind::Credit, TxnKind::Debit, TxnKind::Credit],
        )));

        cache.kind_filter = KindFilter::Credit;
        assert_eq!(cache.filtered().len(), 2);
    }

    #[test]
    fn test_selection_clamped_when_filter_shrinks_list() {
        let mut cache = WalletCache::new();
        cache.begin_refresh();
        cache.finish_refresh(Some(snapshot(
            "10.00",
            &[TxnKind::Debit, TxnKind::Debit, TxnKind::Credit],
        )));
        cache.selected = 2;

        cache.kind_filter = KindFilter::Credit;
        cache.cycle_filter(); // -> Debit
        assert!(cache.selected < 2);
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut cache = WalletCache::new();
        cache.begin_refresh();
        cache.finish_refresh(Some(snapshot("10.00", &[TxnKind::Credit])));
        cache.toggle_balance();

        cache.reset();
        assert!(cache.snapshot().is_none());
        assert!(cache.show_balance);
        assert!(!cache.is_refreshing());
    }
}
