//! 4×4 membrane keypad, scanned row by row.
//!
//! Rows are outputs driven high one at a time; columns are inputs with
//! pull-downs. A pressed key connects its row to its column, so the
//! column reads high while that row is driven.

use embassy_rp::gpio::{Input, Output};
use embassy_time::{block_for, Duration};
use tagbank::input::KeypadDriver;
use tagbank::{Key, Result};

/// Settling time after driving a row before sampling the columns.
const ROW_SETTLE: Duration = Duration::from_micros(10);

pub struct MatrixKeypad<'d> {
    rows: [Output<'d>; 4],
    columns: [Input<'d>; 4],
}

impl<'d> MatrixKeypad<'d> {
    pub fn new(mut rows: [Output<'d>; 4], columns: [Input<'d>; 4]) -> Self {
        for row in rows.iter_mut() {
            row.set_low();
        }
        Self { rows, columns }
    }

    fn scan(&mut self) -> Option<Key> {
        for (r, row) in self.rows.iter_mut().enumerate() {
            row.set_high();
            block_for(ROW_SETTLE);
            let hit = self.columns.iter().position(|column| column.is_high());
            row.set_low();

            if let Some(c) = hit {
                return Key::at(r, c);
            }
        }
        None
    }
}

impl KeypadDriver for MatrixKeypad<'_> {
    fn poll(&mut self) -> Result<Option<Key>> {
        Ok(self.scan())
    }
}
