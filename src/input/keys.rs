//! Keypad symbols.

use crate::bank::Operation;
use crate::config::KEYPAD_LAYOUT;

/// One logical key press.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Key {
    /// `0`-`9`.
    Digit(u8),
    /// `A` - confirm the amount.
    Confirm,
    /// `D` - erase the last digit.
    Backspace,
    /// `C` - abandon the staged transaction.
    Cancel,
    /// `*` credit, `#` debit, `B` transfer.
    Select(Operation),
}

impl Key {
    pub fn from_symbol(symbol: char) -> Option<Self> {
        let key = match symbol {
            '0'..='9' => Key::Digit(symbol as u8 - b'0'),
            'A' => Key::Confirm,
            'B' => Key::Select(Operation::Transfer),
            'C' => Key::Cancel,
            'D' => Key::Backspace,
            '*' => Key::Select(Operation::Credit),
            '#' => Key::Select(Operation::Debit),
            _ => return None,
        };
        Some(key)
    }

    /// Key printed at `row`/`column` of the keypad.
    pub fn at(row: usize, column: usize) -> Option<Self> {
        let symbol = *KEYPAD_LAYOUT.get(row)?.get(column)?;
        Self::from_symbol(symbol)
    }

    pub fn symbol(self) -> char {
        match self {
            Key::Digit(d) => char::from(b'0' + d.min(9)),
            Key::Confirm => 'A',
            Key::Backspace => 'D',
            Key::Cancel => 'C',
            Key::Select(Operation::Credit) => '*',
            Key::Select(Operation::Debit) => '#',
            Key::Select(Operation::Transfer) => 'B',
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_layout_symbol_maps_to_a_key() {
        for row in 0..4 {
            for column in 0..4 {
                let key = Key::at(row, column).expect("layout symbol");
                assert_eq!(key.symbol(), KEYPAD_LAYOUT[row][column]);
            }
        }
    }

    #[test]
    fn operation_keys() {
        assert_eq!(Key::from_symbol('*'), Some(Key::Select(Operation::Credit)));
        assert_eq!(Key::from_symbol('#'), Some(Key::Select(Operation::Debit)));
        assert_eq!(Key::from_symbol('B'), Some(Key::Select(Operation::Transfer)));
    }

    #[test]
    fn unknown_symbols_and_positions() {
        assert_eq!(Key::from_symbol('E'), None);
        assert_eq!(Key::from_symbol('a'), None);
        assert_eq!(Key::at(4, 0), None);
        assert_eq!(Key::at(0, 4), None);
    }

    #[test]
    fn digits() {
        assert_eq!(Key::from_symbol('0'), Some(Key::Digit(0)));
        assert_eq!(Key::at(2, 2), Some(Key::Digit(9)));
    }
}
