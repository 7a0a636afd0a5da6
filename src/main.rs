//! tagbank - RFID banking terminal firmware for the Raspberry Pi Pico.
//!
//! Players tap RFID tags on an MFRC522 reader to check, credit, debit or
//! transfer play money. Amounts are entered on a 4×4 keypad and balances
//! are shown on a 128×64 SSD1306 OLED.
//!
//! Build:  cargo build --release --features embedded --target thumbv6m-none-eabi
//! Flash:  cargo run --release --features embedded

#![no_std]
#![no_main]

mod drivers;
mod tasks;

use defmt::{error, info, unwrap, warn};
use embassy_executor::Spawner;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::i2c::{self, I2c};
use embassy_rp::spi::{self, Spi};
use embassy_sync::channel::Channel;
use embassy_time::Delay;
use embedded_hal_bus::spi::ExclusiveDevice;
use mfrc522::comm::blocking::spi::SpiInterface;
use static_cell::StaticCell;
use tagbank::config::{DISPLAY_I2C_FREQUENCY, RFID_SPI_FREQUENCY};
use tagbank::Bank;
use {defmt_rtt as _, panic_probe as _};

use crate::drivers::keypad::MatrixKeypad;
use crate::drivers::oled::Oled;
use crate::drivers::rfid::Mfrc522Reader;
use crate::tasks::InputChannel;

static INPUTS: StaticCell<InputChannel> = StaticCell::new();

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let p = embassy_rp::init(Default::default());
    info!("tagbank starting");

    let bank = match Bank::from_config() {
        Ok(bank) => bank,
        Err(e) => {
            error!("bad tag table: {}", e);
            return;
        }
    };

    let inputs = INPUTS.init(Channel::new());

    // - OLED: I2C0, SDA=GP0, SCL=GP1 ----------------------------
    let mut i2c_config = i2c::Config::default();
    i2c_config.frequency = DISPLAY_I2C_FREQUENCY;
    let i2c = I2c::new_blocking(p.I2C0, p.PIN_1, p.PIN_0, i2c_config);
    let screen = Oled::init(i2c);

    unwrap!(spawner.spawn(tasks::teller_task(bank, screen, inputs.receiver())));

    // - Keypad: rows GP13..GP10, columns GP9, GP8, GP3, GP2 -------
    let rows = [
        Output::new(p.PIN_13, Level::Low),
        Output::new(p.PIN_12, Level::Low),
        Output::new(p.PIN_11, Level::Low),
        Output::new(p.PIN_10, Level::Low),
    ];
    let columns = [
        Input::new(p.PIN_9, Pull::Down),
        Input::new(p.PIN_8, Pull::Down),
        Input::new(p.PIN_3, Pull::Down),
        Input::new(p.PIN_2, Pull::Down),
    ];
    let keypad = MatrixKeypad::new(rows, columns);

    unwrap!(spawner.spawn(tasks::keypad_task(keypad, inputs.sender())));

    // - RFID: SPI0, SCK=GP6, MOSI=GP7, MISO=GP4, CS=GP5, RST=GP22 -
    let mut spi_config = spi::Config::default();
    spi_config.frequency = RFID_SPI_FREQUENCY;
    let spi = Spi::new_blocking(p.SPI0, p.PIN_6, p.PIN_7, p.PIN_4, spi_config);
    let cs = Output::new(p.PIN_5, Level::High);
    let reset = Output::new(p.PIN_22, Level::High);
    let device = match ExclusiveDevice::new(spi, cs, Delay) {
        Ok(device) => device,
        Err(never) => match never {},
    };

    match Mfrc522Reader::init(SpiInterface::new(device)) {
        Ok(reader) => {
            unwrap!(spawner.spawn(tasks::rfid_task(reader, reset, inputs.sender())));
        }
        // Keypad and display keep working; tags just go unread.
        Err(e) => warn!("RFID reader unavailable: {}", e),
    }

    info!("tagbank ready");
}
