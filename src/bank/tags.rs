//! Tag identifiers and the static tag → account directory.
//!
//! A tag is identified by the decimal rendering of its UID bytes read as
//! a little-endian unsigned integer. MFRC522 UIDs are 4, 7 or 10 bytes;
//! anything up to 16 bytes fits in a `u128`.

use core::fmt::Write;

use heapless::String;

use crate::bank::AccountId;
use crate::config::TAG_BINDINGS;
use crate::error::{Error, Result};

/// Longest UID we accept from a reader.
pub const MAX_UID_BYTES: usize = 16;

/// `u128::MAX` has 39 decimal digits.
const TAG_ID_CAPACITY: usize = 40;

/// Canonical (decimal) tag identifier.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TagId(String<TAG_ID_CAPACITY>);

impl TagId {
    /// Convert raw UID bytes (little-endian) to the canonical identifier.
    pub fn from_uid(uid: &[u8]) -> Result<Self> {
        if uid.len() > MAX_UID_BYTES {
            return Err(Error::TagTooLong);
        }
        let mut le = [0u8; MAX_UID_BYTES];
        le[..uid.len()].copy_from_slice(uid);
        Ok(Self::from_value(u128::from_le_bytes(le)))
    }

    pub fn from_value(value: u128) -> Self {
        let mut s = String::new();
        // 39 digits always fit.
        let _ = write!(s, "{}", value);
        Self(s)
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

/// `true` for non-empty ASCII digits without a leading zero (except "0").
fn is_canonical_decimal(s: &str) -> bool {
    !s.is_empty()
        && s.len() < TAG_ID_CAPACITY
        && s.bytes().all(|b| b.is_ascii_digit())
        && (s == "0" || !s.starts_with('0'))
}

/// Read-only tag → account table.
#[derive(Clone, Copy, Debug)]
pub struct TagDirectory {
    bindings: &'static [(&'static str, usize)],
}

impl TagDirectory {
    /// Validate a binding table. Every entry must be a canonical decimal
    /// identifier bound to an existing account.
    pub fn new(bindings: &'static [(&'static str, usize)]) -> Result<Self> {
        for &(tag, index) in bindings {
            if !is_canonical_decimal(tag) {
                return Err(Error::MalformedTag);
            }
            AccountId::new(index).ok_or(Error::UnboundAccount)?;
        }
        Ok(Self { bindings })
    }

    /// Directory built from [`TAG_BINDINGS`].
    pub fn from_config() -> Result<Self> {
        Self::new(TAG_BINDINGS)
    }

    /// Account bound to `tag`; the first matching entry wins.
    pub fn resolve(&self, tag: &TagId) -> Option<AccountId> {
        self.bindings
            .iter()
            .find(|(id, _)| *id == tag.as_str())
            .and_then(|&(_, index)| AccountId::new(index))
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}
