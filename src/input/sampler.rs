//! Edge detection for polled inputs.
//!
//! Drivers report levels ("key 5 is down", "tag X is in the field").
//! A sampler fires once when the level goes from absent to present and
//! stays quiet until the driver reports absent again, so a held key or a
//! tag resting on the reader triggers exactly one transaction step.
//!
//! A failed read carries no information about the level, so it leaves
//! the edge state untouched; the next poll is the retry.

use crate::bank::TagId;
use crate::input::{Input, KeypadDriver, TagReader};

/// Absent → present edge detector.
#[derive(Clone, Debug)]
pub struct EdgeDetector<T> {
    present: Option<T>,
}

impl<T: Clone> EdgeDetector<T> {
    pub const fn new() -> Self {
        Self { present: None }
    }

    /// Record a sample; returns it only if the previous sample was absent.
    pub fn update(&mut self, sample: Option<T>) -> Option<T> {
        let rising = self.present.is_none();
        self.present = sample.clone();
        if rising {
            sample
        } else {
            None
        }
    }

    pub fn is_present(&self) -> bool {
        self.present.is_some()
    }
}

impl<T: Clone> Default for EdgeDetector<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Turns keypad polls into key presses.
#[derive(Default)]
pub struct KeypadSampler {
    edge: EdgeDetector<crate::input::Key>,
}

impl KeypadSampler {
    pub const fn new() -> Self {
        Self {
            edge: EdgeDetector::new(),
        }
    }

    /// Poll the keypad once.
    pub fn poll<K: KeypadDriver + ?Sized>(&mut self, keypad: &mut K) -> Option<Input> {
        match keypad.poll() {
            Ok(sample) => self.edge.update(sample).map(|key| {
                info!("Key pressed: {}", key.symbol());
                Input::Key(key)
            }),
            Err(e) => {
                warn!("keypad poll failed: {}", e);
                None
            }
        }
    }
}

/// Turns reader polls into tag scans.
#[derive(Default)]
pub struct TagSampler {
    edge: EdgeDetector<TagId>,
}

impl TagSampler {
    pub const fn new() -> Self {
        Self {
            edge: EdgeDetector::new(),
        }
    }

    /// Poll the reader once.
    pub fn poll<R: TagReader + ?Sized>(&mut self, reader: &mut R) -> Option<Input> {
        let sample = match reader.poll() {
            Ok(Some(uid)) => match TagId::from_uid(&uid) {
                Ok(tag) => Some(tag),
                Err(e) => {
                    warn!("unusable uid ({} bytes): {}", uid.len(), e);
                    return None;
                }
            },
            Ok(None) => None,
            Err(e) => {
                warn!("rfid poll failed: {}", e);
                return None;
            }
        };

        self.edge.update(sample).map(|tag| {
            info!("Tag detected: {}", tag.as_str());
            Input::Tag(tag)
        })
    }
}
