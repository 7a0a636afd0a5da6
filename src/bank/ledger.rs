//! Account balances - the single source of truth for money.
//!
//! The ledger does not police its own balances: callers check
//! [`AccountLedger::withdrawable`] before applying a debit.

use crate::bank::AccountId;
use crate::config::{ACCOUNT_COUNT, INITIAL_BALANCES};
use crate::error::InsufficientFunds;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AccountLedger {
    balances: [i64; ACCOUNT_COUNT],
}

impl AccountLedger {
    pub const fn new(balances: [i64; ACCOUNT_COUNT]) -> Self {
        Self { balances }
    }

    /// Ledger seeded from [`INITIAL_BALANCES`].
    pub const fn from_config() -> Self {
        Self::new(INITIAL_BALANCES)
    }

    pub fn balance(&self, account: AccountId) -> i64 {
        self.balances[account.index()]
    }

    pub fn balances(&self) -> &[i64; ACCOUNT_COUNT] {
        &self.balances
    }

    /// Add `delta` (negative for a debit) to the account.
    pub fn apply_delta(&mut self, account: AccountId, delta: i64) {
        let balance = &mut self.balances[account.index()];
        *balance = balance.saturating_add(delta);
    }

    /// Balance left after withdrawing `amount`, if it stays non-negative.
    pub fn withdrawable(
        &self,
        account: AccountId,
        amount: u32,
    ) -> Result<i64, InsufficientFunds> {
        let remaining = self.balance(account) - i64::from(amount);
        if remaining < 0 {
            Err(InsufficientFunds {
                shortfall: remaining,
            })
        } else {
            Ok(remaining)
        }
    }

    /// Move `amount` between two accounts. Source and destination may be
    /// the same account, which nets to zero.
    pub fn transfer(&mut self, from: AccountId, to: AccountId, amount: u32) {
        self.apply_delta(from, -i64::from(amount));
        self.apply_delta(to, i64::from(amount));
    }

    /// Sum of all balances.
    pub fn total(&self) -> i64 {
        self.balances.iter().sum()
    }
}

impl Default for AccountLedger {
    fn default() -> Self {
        Self::from_config()
    }
}
