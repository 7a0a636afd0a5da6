//! Bounded digit buffer used while staging a transaction amount.

use heapless::String;

use crate::config::{AMOUNT_CONFIRM_MARKER, AMOUNT_MAX_DIGITS};
use crate::error::{Error, Result};

/// Preview text: the digits plus the confirm marker.
pub type AmountPreview = String<{ AMOUNT_MAX_DIGITS + 1 }>;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AmountEntry {
    digits: String<AMOUNT_MAX_DIGITS>,
    confirmed: bool,
}

impl AmountEntry {
    pub const fn new() -> Self {
        Self {
            digits: String::new(),
            confirmed: false,
        }
    }

    /// Append one decimal digit while composing.
    pub fn push_digit(&mut self, digit: u8) -> Result<()> {
        if digit > 9 {
            return Err(Error::NotADigit);
        }
        if self.confirmed {
            return Err(Error::BufferFull);
        }
        self.digits
            .push(char::from(b'0' + digit))
            .map_err(|_| Error::BufferFull)
    }

    /// Drop the last digit. The final remaining digit is never erased;
    /// returns `false` when nothing changed.
    pub fn backspace(&mut self) -> bool {
        if self.confirmed || self.digits.len() <= 1 {
            return false;
        }
        self.digits.pop().is_some()
    }

    /// Lock the amount in and return its value.
    pub fn confirm(&mut self) -> Result<u32> {
        if self.digits.is_empty() {
            return Err(Error::EmptyAmount);
        }
        self.confirmed = true;
        Ok(self.value())
    }

    /// Numeric value of the digits entered so far. Only digits are ever
    /// stored, so this cannot fail.
    pub fn value(&self) -> u32 {
        self.digits
            .bytes()
            .fold(0, |acc, b| acc * 10 + u32::from(b - b'0'))
    }

    pub fn digits(&self) -> &str {
        self.digits.as_str()
    }

    pub fn len(&self) -> usize {
        self.digits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    pub fn is_confirmed(&self) -> bool {
        self.confirmed
    }

    /// Digits, followed by the confirm marker once confirmed.
    pub fn preview(&self) -> AmountPreview {
        let mut out = AmountPreview::new();
        let _ = out.push_str(&self.digits);
        if self.confirmed {
            let _ = out.push(AMOUNT_CONFIRM_MARKER);
        }
        out
    }

    pub fn clear(&mut self) {
        self.digits.clear();
        self.confirmed = false;
    }
}
