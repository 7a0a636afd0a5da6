//! Host-testable library for tagbank.
//!
//! Everything that decides *what* the terminal does lives here: the
//! ledger, the tag directory, the transaction state machine, input edge
//! detection and screen layout. None of it touches hardware, so it runs
//! on the host as well as on the RP2040.
//!
//! Usage: `cargo test`
//!
//! Note: The embedded binary uses main.rs with #![no_std] and #![no_main]
//! and supplies the keypad, MFRC522 and SSD1306 drivers behind the
//! [`input::KeypadDriver`], [`input::TagReader`] and [`ui::Surface`]
//! traits.

#![cfg_attr(not(test), no_std)]

#[macro_use]
mod fmt;

pub mod bank;
pub mod config;
pub mod error;
pub mod input;
pub mod ui;

pub use bank::{AccountId, Bank};
pub use error::{Error, Result};
pub use input::{Input, Key};
pub use ui::{Surface, View};

// ═══════════════════════════════════════════════════════════════════════════
// Unit Tests - configuration sanity
// ═══════════════════════════════════════════════════════════════════════════
