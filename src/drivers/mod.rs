//! Hardware drivers - firmware only.
//!
//! Each driver implements one of the library's hardware seams:
//!
//! - **Keypad**: 4×4 membrane matrix on GPIO → [`tagbank::input::KeypadDriver`]
//! - **RFID**: MFRC522 over SPI0 → [`tagbank::input::TagReader`]
//! - **Display**: SSD1306 128×64 OLED over I²C0 → [`tagbank::ui::Surface`]

pub mod keypad;
pub mod oled;
pub mod rfid;
