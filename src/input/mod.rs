//! Input side of the terminal - keypad and RFID.
//!
//! Hardware drivers implement [`KeypadDriver`] and [`TagReader`]. The
//! polling tasks run each raw sample through a sampler, which turns a
//! level signal into one [`Input`] per absent → present edge. Inputs
//! from both tasks are funnelled to the single owner of the
//! [`crate::bank::Bank`].

pub mod keys;
pub mod sampler;

use heapless::Vec;

use crate::bank::tags::MAX_UID_BYTES;
use crate::bank::TagId;
use crate::error::Result;

pub use keys::Key;
pub use sampler::{EdgeDetector, KeypadSampler, TagSampler};

/// UID bytes exactly as the reader returned them.
pub type RawUid = Vec<u8, MAX_UID_BYTES>;

/// Events delivered to the bank.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Input {
    Key(Key),
    Tag(TagId),
}

/// Keypad hardware. `poll` reports the key currently held, if any, and
/// should return promptly.
pub trait KeypadDriver {
    fn poll(&mut self) -> Result<Option<Key>>;
}

/// RFID hardware. `poll` reports the UID of a tag in the field, if any,
/// and should return promptly.
pub trait TagReader {
    fn poll(&mut self) -> Result<Option<RawUid>>;
}
