//! Lifecycle of the remove-liquidity button, derived from observable state.
//!
//! The view owns only two pieces of state (the optimistic `confirming` flag
//! and the recorded pending hash); everything else is read from upstream.
//! This module keeps the derivation pure so it can be exercised without a
//! rendering harness.

/// The derived stage of a removal attempt.
///
/// `Succeeded` is inferred from "a hash was recorded and the liquidity
/// balance has since read zero", not from an on-chain receipt check.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::EnumIs)]
pub enum RemovalStage {
    Idle,
    Confirming,
    Pending,
    Succeeded,
}

/// Derives the stage from the two owned flags and the two upstream reads.
pub fn stage(
    confirming: bool,
    has_pending_hash: bool,
    removal_tx_pending: bool,
    liquidity_is_zero: bool,
) -> RemovalStage {
    if has_pending_hash && liquidity_is_zero {
        return RemovalStage::Succeeded;
    }
    if has_pending_hash && removal_tx_pending {
        return RemovalStage::Pending;
    }
    if confirming {
        return RemovalStage::Confirming;
    }
    RemovalStage::Idle
}

impl RemovalStage {
    pub fn button_label(&self) -> &'static str {
        match self {
            RemovalStage::Succeeded => "Success",
            RemovalStage::Pending => "Removing…",
            RemovalStage::Idle | RemovalStage::Confirming => "Remove",
        }
    }

    /// The button is clickable only while idle with something to remove.
    pub fn disables_button(&self, liquidity_is_zero: bool) -> bool {
        !self.is_idle() || liquidity_is_zero
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_with_liquidity_is_clickable() {
        let stage = stage(false, false, false, false);
        assert_eq!(stage, RemovalStage::Idle);
        assert_eq!(stage.button_label(), "Remove");
        assert!(!stage.disables_button(false));
    }

    #[test]
    fn submission_disables_synchronously() {
        // The confirming flag flips before any network response arrives.
        let stage = stage(true, false, false, false);
        assert_eq!(stage, RemovalStage::Confirming);
        assert_eq!(stage.button_label(), "Remove");
        assert!(stage.disables_button(false));
    }

    #[test]
    fn rejection_rolls_back_to_idle() {
        // After a rejected submission the confirming flag is cleared and no
        // hash was recorded; with liquidity still nonzero the button is live.
        let stage = stage(false, false, false, false);
        assert!(!stage.disables_button(false));
    }

    #[test]
    fn recorded_hash_shows_the_pending_indicator() {
        let stage = stage(true, true, true, false);
        assert_eq!(stage, RemovalStage::Pending);
        assert_eq!(stage.button_label(), "Removing…");
        assert!(stage.disables_button(false));
    }

    #[test]
    fn mined_but_balance_not_yet_zero_stays_disabled() {
        // The poller reports the transaction mined before the balance read
        // catches up; the lingering confirming flag keeps the button locked.
        let stage = stage(true, true, false, false);
        assert_eq!(stage, RemovalStage::Confirming);
        assert!(stage.disables_button(false));
    }

    #[test]
    fn hash_plus_zero_balance_is_terminal_success() {
        let derived = stage(true, true, false, true);
        assert_eq!(derived, RemovalStage::Succeeded);
        assert_eq!(derived.button_label(), "Success");
        assert!(derived.disables_button(true));

        // Idempotent: re-deriving from the same inputs stays succeeded,
        // whatever the poller reports.
        assert_eq!(stage(true, true, true, true), RemovalStage::Succeeded);
        assert_eq!(stage(false, true, false, true), RemovalStage::Succeeded);
    }

    #[test]
    fn zero_balance_without_a_hash_is_just_empty() {
        // Nothing to remove and nothing submitted: disabled, default label.
        let stage = stage(false, false, false, true);
        assert_eq!(stage, RemovalStage::Idle);
        assert_eq!(stage.button_label(), "Remove");
        assert!(stage.disables_button(true));
    }
}
