//! Transaction state machine.
//!
//! ```text
//!   Idle ──select──▶ Composing(op) ──A──▶ AwaitingTag(op, amount)
//!    ▲                   │ A (empty)          │ tag (credit/debit)
//!    │◀──────────────────┘                    │ tag (transfer) ──▶ AwaitingSecondTag
//!    │◀──────────── commit / decline ─────────┘                         │ tag
//!    │◀──────────────────────────────── commit ─────────────────────────┘
//!    └◀─────── C from any non-idle phase
//! ```
//!
//! Every handler returns the [`View`] to draw, or `None` when the screen
//! should stay as it is. A staged transaction never expires on its own.

use crate::bank::amount::AmountEntry;
use crate::bank::ledger::AccountLedger;
use crate::bank::AccountId;
use crate::error::{Error, InsufficientFunds};
use crate::input::Key;
use crate::ui::View;

/// The kind of transaction being staged.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Operation {
    Credit,
    Debit,
    Transfer,
}

impl Operation {
    /// Caption shown while the transaction is staged.
    pub fn label(self) -> &'static str {
        match self {
            Operation::Credit => "CREDIT",
            Operation::Debit => "DEBIT",
            Operation::Transfer => "TRANSFER",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Phase {
    Idle,
    /// Digits are being entered.
    Composing(Operation),
    /// Amount confirmed; waiting for the operand tag.
    AwaitingTag { operation: Operation, amount: u32 },
    /// Transfer source accepted; waiting for the destination tag.
    AwaitingSecondTag { amount: u32, source: AccountId },
}

pub struct TransactionMachine {
    phase: Phase,
    entry: AmountEntry,
}

impl TransactionMachine {
    pub const fn new() -> Self {
        Self {
            phase: Phase::Idle,
            entry: AmountEntry::new(),
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn amount(&self) -> &AmountEntry {
        &self.entry
    }

    /// Handle one debounced key press.
    pub fn on_key(&mut self, key: Key, ledger: &AccountLedger) -> Option<View> {
        match (self.phase, key) {
            (Phase::Idle, Key::Select(operation)) => {
                info!("{} started", operation);
                self.entry.clear();
                self.phase = Phase::Composing(operation);
                Some(self.composing_view(operation))
            }
            (Phase::Idle, _) => None,
            (_, Key::Cancel) => {
                info!("transaction cancelled in {}", self.phase);
                self.reset();
                Some(View::scoreboard(ledger))
            }
            (Phase::Composing(operation), Key::Digit(digit)) => {
                match self.entry.push_digit(digit) {
                    Ok(()) => Some(self.composing_view(operation)),
                    Err(e) => {
                        debug!("digit {} ignored: {}", digit, e);
                        None
                    }
                }
            }
            (Phase::Composing(operation), Key::Backspace) => self
                .entry
                .backspace()
                .then(|| self.composing_view(operation)),
            (Phase::Composing(operation), Key::Confirm) => match self.entry.confirm() {
                Ok(amount) => {
                    info!("{} of {} awaiting tag", operation, amount);
                    self.phase = Phase::AwaitingTag { operation, amount };
                    Some(self.composing_view(operation))
                }
                Err(e) => {
                    debug!("confirm aborted: {}", e);
                    self.reset();
                    Some(View::scoreboard(ledger))
                }
            },
            _ => None,
        }
    }

    /// Handle a tag already resolved to `account`. Mutations of the ledger
    /// happen entirely inside this call.
    pub fn on_tag(&mut self, account: AccountId, ledger: &mut AccountLedger) -> Option<View> {
        match self.phase {
            Phase::Idle => Some(View::balance(ledger, account)),
            Phase::Composing(_) => None,
            Phase::AwaitingTag {
                operation: Operation::Credit,
                amount,
            } => {
                ledger.apply_delta(account, i64::from(amount));
                info!("credited {} to P{}", amount, account.number());
                self.reset();
                Some(View::balance(ledger, account))
            }
            Phase::AwaitingTag {
                operation: Operation::Debit,
                amount,
            } => match ledger.withdrawable(account, amount) {
                Ok(_) => {
                    ledger.apply_delta(account, -i64::from(amount));
                    info!("debited {} from P{}", amount, account.number());
                    self.reset();
                    Some(View::balance(ledger, account))
                }
                Err(declined) => Some(self.decline(account, declined)),
            },
            Phase::AwaitingTag {
                operation: Operation::Transfer,
                amount,
            } => match ledger.withdrawable(account, amount) {
                Ok(remaining) => {
                    info!("transfer of {} from P{} staged", amount, account.number());
                    self.phase = Phase::AwaitingSecondTag {
                        amount,
                        source: account,
                    };
                    Some(View::TransferPreview {
                        source: account,
                        amount,
                        remaining,
                    })
                }
                Err(declined) => Some(self.decline(account, declined)),
            },
            Phase::AwaitingSecondTag { amount, source } => {
                match ledger.withdrawable(source, amount) {
                    Ok(_) => {
                        ledger.transfer(source, account, amount);
                        info!(
                            "transferred {} from P{} to P{}",
                            amount,
                            source.number(),
                            account.number()
                        );
                        self.reset();
                        Some(View::balance(ledger, account))
                    }
                    Err(declined) => Some(self.decline(source, declined)),
                }
            }
        }
    }

    /// Drop whatever is staged and return to idle.
    pub fn reset(&mut self) {
        self.phase = Phase::Idle;
        self.entry.clear();
    }

    fn decline(&mut self, account: AccountId, declined: InsufficientFunds) -> View {
        warn!("P{} declined: {}", account.number(), Error::from(declined));
        self.reset();
        View::InsufficientFunds {
            account,
            shortfall: declined.shortfall,
        }
    }

    fn composing_view(&self, operation: Operation) -> View {
        View::Composing {
            operation,
            amount: self.entry.clone(),
        }
    }
}

impl Default for TransactionMachine {
    fn default() -> Self {
        Self::new()
    }
}
