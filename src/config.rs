//! Application-wide constants and compile-time configuration.
//!
//! All hardware pin assignments, timing parameters, and game tables
//! live here so they can be tuned in one place. Nothing is
//! reconfigurable at runtime.

// Accounts

/// Number of player accounts on the terminal.
pub const ACCOUNT_COUNT: usize = 8;

/// Starting balance of every player.
pub const INITIAL_BALANCE: i64 = 1500;

/// Balance table loaded into the ledger at power-on.
pub const INITIAL_BALANCES: [i64; ACCOUNT_COUNT] = [INITIAL_BALANCE; ACCOUNT_COUNT];

/// Tag identifier (decimal form of the little-endian UID) → account index.
///
/// Replace with the UIDs of your own tags; the firmware logs every
/// unregistered tag it sees at debug level.
pub const TAG_BINDINGS: &[(&str, usize)] = &[
    ("2749215331", 0),
    ("1667286819", 1),
    ("3532519459", 2),
    ("585402915", 3),
    ("1122859811", 4),
    ("3839226659", 5),
    ("1935722275", 6),
    ("2472593187", 7),
];

// Amount entry

/// Maximum digits accepted while composing an amount.
pub const AMOUNT_MAX_DIGITS: usize = 4;

/// Appended to the amount preview once it has been confirmed.
pub const AMOUNT_CONFIRM_MARKER: char = '=';

// Display (SSD1306 128×64)

pub const DISPLAY_WIDTH: u32 = 128;
pub const DISPLAY_HEIGHT: u32 = 64;

/// I²C address of the OLED controller.
pub const DISPLAY_I2C_ADDR: u8 = 0x3C;

/// Height of one text line at scale 1 (pixels).
pub const GLYPH_SIZE: i32 = 8;

/// Balances with at least this many digits are drawn at the reduced scale.
pub const LARGE_BALANCE_DIGITS: usize = 6;

/// Font scale for a single balance that fits the screen width.
pub const BALANCE_SCALE: u8 = 3;

/// Font scale for balances with `LARGE_BALANCE_DIGITS` or more digits.
pub const LARGE_BALANCE_SCALE: u8 = 2;

// Polling cadence

/// Keypad matrix scan period (ms).
pub const KEYPAD_POLL_MS: u64 = 10;

/// Key debounce time (ms).
pub const KEY_DEBOUNCE_MS: u64 = 30;

/// RFID reader poll period (ms).
pub const RFID_POLL_MS: u64 = 50;

/// Depth of the input channel shared by both polling tasks.
pub const INPUT_QUEUE_DEPTH: usize = 8;

// Keypad (4×4 membrane)

/// Symbols by `[row][column]`, matching the printed keypad.
pub const KEYPAD_LAYOUT: [[char; 4]; 4] = [
    ['1', '2', '3', 'A'],
    ['4', '5', '6', 'B'],
    ['7', '8', '9', 'C'],
    ['*', '0', '#', 'D'],
];

// GPIO pin assignments (Raspberry Pi Pico)
//
// These are logical names; actual `embassy_rp::peripherals::*` types are
// selected in `main.rs`. Adjust for your own wiring.
//
//   Keypad rows      → GP13, GP12, GP11, GP10
//   Keypad columns   → GP9, GP8, GP3, GP2
//   OLED SDA / SCL   → GP0 / GP1 (I2C0)
//   MFRC522 SCK      → GP6 (SPI0)
//   MFRC522 MISO     → GP4
//   MFRC522 MOSI     → GP7
//   MFRC522 CS       → GP5
//   MFRC522 RST      → GP22

/// SPI clock for the MFRC522 (Hz).
pub const RFID_SPI_FREQUENCY: u32 = 1_000_000;

/// I²C clock for the OLED (Hz).
pub const DISPLAY_I2C_FREQUENCY: u32 = 400_000;
