//! Banking core - ledger, tag directory, amount entry and the
//! transaction state machine.
//!
//! [`Bank`] bundles them into the one context object the firmware
//! creates at startup. Whoever owns the `Bank` owns all shared money
//! state, so every call to [`Bank::apply`] is a complete critical
//! section: a tag either commits its whole effect or changes nothing.

pub mod amount;
pub mod ledger;
pub mod machine;
pub mod tags;


use crate::config::ACCOUNT_COUNT;
use crate::error::Result;
use crate::input::Input;
use crate::ui::View;

pub use amount::AmountEntry;
pub use ledger::AccountLedger;
pub use machine::{Operation, Phase, TransactionMachine};
pub use tags::{TagDirectory, TagId};

/// Index of a player account, guaranteed to be below [`ACCOUNT_COUNT`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AccountId(u8);

impl AccountId {
    pub const fn new(index: usize) -> Option<Self> {
        if index < ACCOUNT_COUNT {
            Some(Self(index as u8))
        } else {
            None
        }
    }

    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// 1-based number printed for players.
    pub const fn number(self) -> usize {
        self.0 as usize + 1
    }

    pub fn all() -> impl Iterator<Item = AccountId> {
        (0..ACCOUNT_COUNT).filter_map(AccountId::new)
    }
}

/// The terminal's state: money, tag bindings and the staged transaction.
pub struct Bank {
    ledger: AccountLedger,
    directory: TagDirectory,
    machine: TransactionMachine,
}

impl Bank {
    pub fn new(ledger: AccountLedger, directory: TagDirectory) -> Self {
        Self {
            ledger,
            directory,
            machine: TransactionMachine::new(),
        }
    }

    /// Bank built from the compile-time tables in [`crate::config`].
    pub fn from_config() -> Result<Self> {
        Ok(Self::new(
            AccountLedger::from_config(),
            TagDirectory::from_config()?,
        ))
    }

    /// Feed one input through the state machine.
    ///
    /// Returns the view to render, or `None` if the display should not
    /// change. Unregistered tags are ignored in every phase.
    pub fn apply(&mut self, input: &Input) -> Option<View> {
        match input {
            Input::Key(key) => self.machine.on_key(*key, &self.ledger),
            Input::Tag(tag) => match self.directory.resolve(tag) {
                Some(account) => self.machine.on_tag(account, &mut self.ledger),
                None => {
                    debug!("unregistered tag {}", tag.as_str());
                    None
                }
            },
        }
    }

    /// Full balance overview, drawn at power-on.
    pub fn scoreboard(&self) -> View {
        View::scoreboard(&self.ledger)
    }

    pub fn ledger(&self) -> &AccountLedger {
        &self.ledger
    }

    pub fn directory(&self) -> &TagDirectory {
        &self.directory
    }

    pub fn phase(&self) -> Phase {
        self.machine.phase()
    }

    pub fn amount(&self) -> &AmountEntry {
        self.machine.amount()
    }
}
