//! User interface - what the OLED shows.
//!
//! The state machine describes the screen as a [`View`]: an owned
//! snapshot taken inside the same critical section as the transition
//! that produced it. [`render::render`] then draws it on any
//! [`Surface`] in one clear → draw → present pass.
//!
//! ## Screens
//!
//! - **Scoreboard**: every player's balance, one per line
//! - **Balance**: one player's balance in large type
//! - **Composing**: the operation and the amount being entered
//! - **TransferPreview**: the source's balance after the pending transfer
//! - **InsufficientFunds**: the negative balance a debit would have left

pub mod render;

use crate::bank::{AccountId, AccountLedger, AmountEntry, Operation};
use crate::config::ACCOUNT_COUNT;

pub use render::render;

/// Screens (views) the terminal can show.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum View {
    Scoreboard {
        balances: [i64; ACCOUNT_COUNT],
    },
    Balance {
        account: AccountId,
        balance: i64,
    },
    Composing {
        operation: Operation,
        amount: AmountEntry,
    },
    TransferPreview {
        source: AccountId,
        amount: u32,
        remaining: i64,
    },
    InsufficientFunds {
        account: AccountId,
        shortfall: i64,
    },
}

impl View {
    pub fn scoreboard(ledger: &AccountLedger) -> Self {
        View::Scoreboard {
            balances: *ledger.balances(),
        }
    }

    pub fn balance(ledger: &AccountLedger, account: AccountId) -> Self {
        View::Balance {
            account,
            balance: ledger.balance(account),
        }
    }
}

/// Minimal monochrome text surface (implemented by the SSD1306 wrapper).
///
/// `scale` multiplies the base 8-pixel glyph cell; coordinates are the
/// top-left corner of the text in pixels.
pub trait Surface {
    type Error;

    /// Blank the frame buffer.
    fn clear(&mut self);

    fn draw_text(&mut self, x: i32, y: i32, scale: u8, text: &str) -> Result<(), Self::Error>;

    /// Flush the frame buffer to the panel.
    fn present(&mut self) -> Result<(), Self::Error>;
}
