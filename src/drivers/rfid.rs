//! MFRC522 RFID reader.
//!
//! Each poll wakes any tag in the field (WUPA), runs anticollision to
//! read its UID, then halts it. Halted tags still answer the next WUPA,
//! so a tag resting on the reader reports the same UID every poll and
//! the sampler's edge detection keeps it from re-triggering.

use defmt::debug;
use mfrc522::comm::Interface;
use mfrc522::{Initialized, Mfrc522};
use tagbank::input::{RawUid, TagReader};
use tagbank::{Error, Result};

pub struct Mfrc522Reader<COMM: Interface> {
    chip: Mfrc522<COMM, Initialized>,
}

impl<E, COMM> Mfrc522Reader<COMM>
where
    COMM: Interface<Error = E>,
{
    /// Reset and configure the chip. Fails if the MFRC522 does not answer.
    pub fn init(comm: COMM) -> Result<Self> {
        let mut chip = Mfrc522::new(comm).init().map_err(|_| Error::Rfid)?;
        match chip.version() {
            Ok(version) => debug!("MFRC522 version {=u8:#x}", version),
            Err(_) => return Err(Error::Rfid),
        }
        Ok(Self { chip })
    }
}

impl<E, COMM> TagReader for Mfrc522Reader<COMM>
where
    COMM: Interface<Error = E>,
{
    fn poll(&mut self) -> Result<Option<RawUid>> {
        let atqa = match self.chip.wupa() {
            Ok(atqa) => atqa,
            // Nobody answered: no tag in the field.
            Err(mfrc522::Error::Timeout) => return Ok(None),
            Err(_) => return Err(Error::Rfid),
        };

        let uid = self.chip.select(&atqa).map_err(|_| Error::Rfid)?;
        let raw = RawUid::from_slice(uid.as_bytes()).map_err(|_| Error::TagTooLong)?;
        let _ = self.chip.hlta();
        Ok(Some(raw))
    }
}
