//! Integration tests for tagbank host-testable logic.
//!
//! These wire scripted drivers through the samplers into a [`Bank`] and
//! render every returned view on a recording surface, the same path the
//! firmware's tasks take.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::thread;

use tagbank::bank::{AccountLedger, Phase, TagDirectory, TagId};
use tagbank::config::{ACCOUNT_COUNT, INITIAL_BALANCE, INITIAL_BALANCES, TAG_BINDINGS};
use tagbank::input::{KeypadDriver, KeypadSampler, RawUid, TagReader, TagSampler};
use tagbank::ui::render;
use tagbank::{AccountId, Bank, Error, Input, Key, Surface, View};

// ═══════════════════════════════════════════════════════════════════════════
// Test doubles
// ═══════════════════════════════════════════════════════════════════════════

/// Keypad that replays one level sample per poll, then reads idle.
#[derive(Default)]
struct FakeKeypad {
    samples: VecDeque<Result<Option<Key>, Error>>,
}

impl KeypadDriver for FakeKeypad {
    fn poll(&mut self) -> Result<Option<Key>, Error> {
        self.samples.pop_front().unwrap_or(Ok(None))
    }
}

/// Reader that replays one level sample per poll, then reads an empty field.
#[derive(Default)]
struct FakeReader {
    samples: VecDeque<Result<Option<RawUid>, Error>>,
}

impl TagReader for FakeReader {
    fn poll(&mut self) -> Result<Option<RawUid>, Error> {
        self.samples.pop_front().unwrap_or(Ok(None))
    }
}

/// Keeps the text of the last presented frame.
#[derive(Default)]
struct Screen {
    drawing: Vec<String>,
    shown: Vec<String>,
    frames: usize,
}

impl Surface for Screen {
    type Error = Error;

    fn clear(&mut self) {
        self.drawing.clear();
    }

    fn draw_text(&mut self, _x: i32, _y: i32, _scale: u8, text: &str) -> Result<(), Error> {
        self.drawing.push(text.to_string());
        Ok(())
    }

    fn present(&mut self) -> Result<(), Error> {
        self.shown = self.drawing.clone();
        self.frames += 1;
        Ok(())
    }
}

/// UID bytes the reader would return for the tag bound to `index`.
fn uid_for(index: usize) -> RawUid {
    let (tag, _) = TAG_BINDINGS
        .iter()
        .find(|(_, account)| *account == index)
        .expect("account has a tag");
    let value: u32 = tag.parse().expect("tag fits in four bytes");
    RawUid::from_slice(&value.to_le_bytes()).unwrap()
}

fn unknown_uid() -> RawUid {
    RawUid::from_slice(&[0xDE, 0xAD, 0xBE, 0xEF, 0x01, 0x02, 0x03]).unwrap()
}

fn account(index: usize) -> AccountId {
    AccountId::new(index).unwrap()
}

/// A bank plus both drivers and the screen, stepped like the firmware.
struct Terminal {
    bank: Bank,
    keypad: FakeKeypad,
    reader: FakeReader,
    keys: KeypadSampler,
    tags: TagSampler,
    screen: Screen,
}

impl Terminal {
    fn with_balances(balances: &[(usize, i64)]) -> Self {
        let mut table = INITIAL_BALANCES;
        for &(index, balance) in balances {
            table[index] = balance;
        }
        let bank = Bank::new(
            AccountLedger::new(table),
            TagDirectory::from_config().unwrap(),
        );
        let mut screen = Screen::default();
        render(&bank.scoreboard(), &mut screen).unwrap();

        Self {
            bank,
            keypad: FakeKeypad::default(),
            reader: FakeReader::default(),
            keys: KeypadSampler::new(),
            tags: TagSampler::new(),
            screen,
        }
    }

    /// One poll of each driver, in keypad-then-reader order.
    fn step(&mut self) {
        let inputs = [
            self.keys.poll(&mut self.keypad),
            self.tags.poll(&mut self.reader),
        ];
        for input in inputs.into_iter().flatten() {
            if let Some(view) = self.bank.apply(&input) {
                render(&view, &mut self.screen).unwrap();
            }
        }
    }

    fn run_until_idle(&mut self) {
        while !self.keypad.samples.is_empty() || !self.reader.samples.is_empty() {
            self.step();
        }
        self.step();
    }

    /// Press and release each key in turn.
    fn press(&mut self, symbols: &str) {
        for symbol in symbols.chars() {
            let key = Key::from_symbol(symbol).expect("keypad symbol");
            self.keypad.samples.push_back(Ok(Some(key)));
            self.keypad.samples.push_back(Ok(None));
        }
        self.run_until_idle();
    }

    /// Hold a tag in the field for a few polls, then remove it.
    fn tap(&mut self, uid: RawUid) {
        for _ in 0..3 {
            self.reader.samples.push_back(Ok(Some(uid.clone())));
        }
        self.reader.samples.push_back(Ok(None));
        self.run_until_idle();
    }

    fn balance(&self, index: usize) -> i64 {
        self.bank.ledger().balance(account(index))
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Scenarios
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn power_on_shows_scoreboard() {
    let t = Terminal::with_balances(&[]);
    assert_eq!(t.screen.shown.len(), ACCOUNT_COUNT);
    assert_eq!(t.screen.shown[0], format!("1: {}", INITIAL_BALANCE));
}

#[test]
fn credit_fifty() {
    let mut t = Terminal::with_balances(&[(2, 1500)]);
    t.press("*50A");
    assert_eq!(t.screen.shown[1], "50=");

    t.tap(uid_for(2));
    assert_eq!(t.balance(2), 1550);
    assert_eq!(t.screen.shown, ["PLAYER 3", "1550"]);
    assert_eq!(t.bank.phase(), Phase::Idle);
}

#[test]
fn debit_rejected_for_insufficient_funds() {
    let mut t = Terminal::with_balances(&[(3, 100)]);
    t.press("#999A");
    t.tap(uid_for(3));
    assert_eq!(t.screen.shown, ["PLAYER 4 NO FUNDS", "-899"]);
    assert_eq!(t.balance(3), 100);
    assert_eq!(t.bank.phase(), Phase::Idle);
}

#[test]
fn transfer_twenty() {
    let mut t = Terminal::with_balances(&[(1, 500), (4, 300)]);
    t.press("B20A");

    t.tap(uid_for(1));
    assert_eq!(t.screen.shown, ["PLAYER 2 -20", "480", "TAP RECEIVER"]);
    assert_eq!(
        t.bank.phase(),
        Phase::AwaitingSecondTag {
            amount: 20,
            source: account(1)
        }
    );

    t.tap(uid_for(4));
    assert_eq!(t.balance(1), 480);
    assert_eq!(t.balance(4), 320);
    assert_eq!(t.screen.shown, ["PLAYER 5", "320"]);
}

#[test]
fn backspace_keeps_last_digit() {
    let mut t = Terminal::with_balances(&[]);
    t.press("*12D");
    assert_eq!(t.bank.amount().digits(), "1");
    let frames = t.screen.frames;
    t.press("D");
    assert_eq!(t.bank.amount().digits(), "1");
    assert_eq!(t.screen.frames, frames);
}

#[test]
fn unregistered_tag_changes_nothing() {
    for setup in ["", "*", "#4", "*40A", "B40A"] {
        let mut t = Terminal::with_balances(&[]);
        t.press(setup);
        let phase = t.bank.phase();
        let frames = t.screen.frames;

        t.tap(unknown_uid());

        assert_eq!(t.bank.phase(), phase, "setup {:?}", setup);
        assert_eq!(t.screen.frames, frames, "setup {:?}", setup);
        assert_eq!(t.bank.ledger().balances(), &INITIAL_BALANCES);
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Dispatch behaviour
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn lingering_tag_commits_once() {
    let mut t = Terminal::with_balances(&[]);
    t.press("*10A");
    for _ in 0..20 {
        t.reader.samples.push_back(Ok(Some(uid_for(0))));
    }
    t.run_until_idle();
    assert_eq!(t.balance(0), INITIAL_BALANCE + 10);

    // A tag already resting on the reader does not complete the next
    // transaction; it has to leave the field and come back.
    for _ in 0..20 {
        t.reader.samples.push_back(Ok(Some(uid_for(0))));
    }
    t.press("*10A");
    assert_eq!(t.balance(0), INITIAL_BALANCE + 10);
    assert!(matches!(t.bank.phase(), Phase::AwaitingTag { amount: 10, .. }));

    t.tap(uid_for(0));
    assert_eq!(t.balance(0), INITIAL_BALANCE + 20);
}

#[test]
fn held_key_enters_one_digit() {
    let mut t = Terminal::with_balances(&[]);
    t.press("*");
    for _ in 0..10 {
        t.keypad.samples.push_back(Ok(Some(Key::Digit(7))));
    }
    t.run_until_idle();
    assert_eq!(t.bank.amount().digits(), "7");
}

#[test]
fn driver_failures_are_retried() {
    let mut t = Terminal::with_balances(&[]);
    t.keypad.samples.push_back(Err(Error::Keypad));
    t.press("*5A");
    t.reader.samples.push_back(Err(Error::Rfid));
    t.tap(uid_for(6));
    assert_eq!(t.balance(6), INITIAL_BALANCE + 5);
}

#[test]
fn oversized_uid_is_dropped() {
    let mut t = Terminal::with_balances(&[]);
    t.press("*5A");
    let phase = t.bank.phase();
    // Conversion of a 16-byte UID succeeds; it just isn't registered.
    t.tap(RawUid::from_slice(&[0xFF; 16]).unwrap());
    assert_eq!(t.bank.phase(), phase);
}

#[test]
fn uid_converts_to_configured_identifier() {
    let tag = TagId::from_uid(&uid_for(0)).unwrap();
    assert_eq!(tag.as_str(), TAG_BINDINGS[0].0);
    assert_eq!(
        Bank::from_config().unwrap().directory().resolve(&tag),
        Some(account(0))
    );
}

#[test]
fn staged_debit_never_expires() {
    let mut t = Terminal::with_balances(&[]);
    t.press("#25A");
    for _ in 0..500 {
        t.step();
    }
    t.tap(uid_for(5));
    assert_eq!(t.balance(5), INITIAL_BALANCE - 25);
}

// ═══════════════════════════════════════════════════════════════════════════
// Serialization
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn concurrent_keypad_and_reader_conserve_money() {
    let bank = Arc::new(Mutex::new(Bank::from_config().unwrap()));
    let expected_total = INITIAL_BALANCE * ACCOUNT_COUNT as i64;

    let keypad = {
        let bank = Arc::clone(&bank);
        thread::spawn(move || {
            for _ in 0..500 {
                for symbol in "B1A".chars() {
                    let key = Key::from_symbol(symbol).unwrap();
                    let _ = bank.lock().unwrap().apply(&Input::Key(key));
                }
            }
        })
    };

    let reader = {
        let bank = Arc::clone(&bank);
        thread::spawn(move || {
            for i in 0..1000 {
                let tag = TagId::from_uid(&uid_for(i % 2)).unwrap();
                let mut bank = bank.lock().unwrap();
                if let Some(View::Balance { account, balance }) = bank.apply(&Input::Tag(tag)) {
                    // Snapshot taken under the same lock as the commit.
                    assert_eq!(balance, bank.ledger().balance(account));
                }
                assert_eq!(bank.ledger().total(), expected_total);
            }
        })
    };

    keypad.join().unwrap();
    reader.join().unwrap();

    let bank = bank.lock().unwrap();
    assert_eq!(bank.ledger().total(), expected_total);
    assert!(bank.ledger().balances().iter().all(|&b| b >= 0));
    assert!(bank.amount().len() <= 4);
}
