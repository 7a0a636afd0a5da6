//! Unified error type for tagbank.
//!
//! We avoid `alloc` - all error variants carry only fixed-size data.
//! Implements `defmt::Format` (behind the `defmt` feature) for efficient
//! on-target logging.

use core::fmt;

/// Top-level error type used across the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    // Transactions
    /// The scanned tag is not bound to any account.
    UnknownTag,

    /// A debit or transfer source would go negative.
    InsufficientFunds(InsufficientFunds),

    /// Confirm was pressed before any digit was entered.
    EmptyAmount,

    /// The amount buffer already holds the maximum number of digits.
    BufferFull,

    /// A non-digit value was offered to the amount buffer.
    NotADigit,

    // Tags / configuration
    /// The reader returned a UID longer than we can represent.
    TagTooLong,

    /// A tag binding names an account index outside the ledger.
    UnboundAccount,

    /// A tag binding is not in canonical decimal form.
    MalformedTag,

    // Hardware
    /// Keypad scan failed.
    Keypad,

    /// RFID reader transaction failed (not "no tag present").
    Rfid,

    /// I²C transaction to the display failed.
    Display,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnknownTag => f.write_str("unknown tag"),
            Error::InsufficientFunds(e) => {
                write!(f, "insufficient funds (would leave {})", e.shortfall)
            }
            Error::EmptyAmount => f.write_str("no amount entered"),
            Error::BufferFull => f.write_str("amount buffer full"),
            Error::NotADigit => f.write_str("not a decimal digit"),
            Error::TagTooLong => f.write_str("tag identifier too long"),
            Error::UnboundAccount => f.write_str("tag bound to a nonexistent account"),
            Error::MalformedTag => f.write_str("tag binding is not a canonical decimal"),
            Error::Keypad => f.write_str("keypad read failed"),
            Error::Rfid => f.write_str("rfid read failed"),
            Error::Display => f.write_str("display write failed"),
        }
    }
}

/// A rejected debit. `shortfall` is the balance the debit would have
/// left behind, so it is always negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InsufficientFunds {
    pub shortfall: i64,
}

// Convenience conversions

impl From<InsufficientFunds> for Error {
    fn from(e: InsufficientFunds) -> Self {
        Error::InsufficientFunds(e)
    }
}

pub type Result<T> = core::result::Result<T, Error>;
