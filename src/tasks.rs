//! Embassy tasks - firmware only.
//!
//! The keypad and RFID tasks poll their drivers and push edge-detected
//! [`Input`]s into one channel. The teller task is the only owner of the
//! [`Bank`]: it takes inputs one at a time, applies them and redraws the
//! screen, so no two transaction steps can interleave.

use defmt::{debug, info, warn};
use embassy_rp::gpio::Output;
use embassy_rp::i2c::I2c;
use embassy_rp::peripherals::{I2C0, SPI0};
use embassy_rp::spi::{Blocking, Spi};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::{Channel, Receiver, Sender};
use embassy_time::{Delay, Duration, Timer};
use embedded_hal_bus::spi::ExclusiveDevice;
use mfrc522::comm::blocking::spi::SpiInterface;
use tagbank::config::{INPUT_QUEUE_DEPTH, KEYPAD_POLL_MS, KEY_DEBOUNCE_MS, RFID_POLL_MS};
use tagbank::input::{KeypadDriver, KeypadSampler, TagSampler};
use tagbank::ui::render;
use tagbank::{Bank, Input, View};

use crate::drivers::keypad::MatrixKeypad;
use crate::drivers::oled::Oled;
use crate::drivers::rfid::Mfrc522Reader;

pub type InputChannel = Channel<CriticalSectionRawMutex, Input, INPUT_QUEUE_DEPTH>;
pub type InputSender = Sender<'static, CriticalSectionRawMutex, Input, INPUT_QUEUE_DEPTH>;
pub type InputReceiver = Receiver<'static, CriticalSectionRawMutex, Input, INPUT_QUEUE_DEPTH>;

pub type RfidSpi = ExclusiveDevice<Spi<'static, SPI0, Blocking>, Output<'static>, Delay>;
pub type Reader = Mfrc522Reader<SpiInterface<RfidSpi>>;
pub type Screen = Oled<I2c<'static, I2C0, embassy_rp::i2c::Blocking>>;

/// Scan the keypad; a press is forwarded once it survives the debounce
/// delay. Holding a key sends it only once.
#[embassy_executor::task]
pub async fn keypad_task(mut keypad: MatrixKeypad<'static>, tx: InputSender) -> ! {
    let mut sampler = KeypadSampler::new();

    loop {
        if let Some(Input::Key(key)) = sampler.poll(&mut keypad) {
            Timer::after(Duration::from_millis(KEY_DEBOUNCE_MS)).await;

            if keypad.poll() == Ok(Some(key)) {
                tx.send(Input::Key(key)).await;
            } else {
                debug!("bounce on {}", key.symbol());
            }
        }

        Timer::after(Duration::from_millis(KEYPAD_POLL_MS)).await;
    }
}

/// Poll the reader; a tag entering the field is forwarded once.
#[embassy_executor::task]
pub async fn rfid_task(mut reader: Reader, _reset: Output<'static>, tx: InputSender) -> ! {
    let mut sampler = TagSampler::new();

    loop {
        if let Some(input) = sampler.poll(&mut reader) {
            tx.send(input).await;
        }

        Timer::after(Duration::from_millis(RFID_POLL_MS)).await;
    }
}

/// Own the bank, apply inputs in arrival order and keep the screen current.
#[embassy_executor::task]
pub async fn teller_task(mut bank: Bank, mut screen: Screen, rx: InputReceiver) -> ! {
    info!("teller ready");
    show(&bank.scoreboard(), &mut screen);

    loop {
        let input = rx.receive().await;
        if let Some(view) = bank.apply(&input) {
            show(&view, &mut screen);
        }
    }
}

fn show(view: &View, screen: &mut Screen) {
    if let Err(e) = render(view, screen) {
        warn!("display update failed: {}", e);
    }
}
