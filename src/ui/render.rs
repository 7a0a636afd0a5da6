//! Presentation adapter - lays out a [`View`] on a [`Surface`].
//!
//! Layout (128×64, 8 px glyph cell at scale 1):
//! ```text
//! y=0   caption                    (scale 1)
//! y=20  value / amount             (scale 3, or 2 for 6+ digit values)
//! y=56  hint                       (scale 1)
//! ```
//! The scoreboard instead uses all eight lines for `"{n}: {balance}"`.

use core::fmt::Write;

use heapless::String;

use crate::bank::AccountId;
use crate::config::{BALANCE_SCALE, GLYPH_SIZE, LARGE_BALANCE_DIGITS, LARGE_BALANCE_SCALE};
use crate::ui::{Surface, View};

const CAPTION_Y: i32 = 0;
const VALUE_Y: i32 = 20;
const HINT_Y: i32 = 56;

/// One rendered line; wide enough for `"8: "` plus any `i64`.
type Line = String<24>;

/// Draw `view` as a single atomic frame.
pub fn render<S: Surface + ?Sized>(view: &View, surface: &mut S) -> Result<(), S::Error> {
    surface.clear();

    match view {
        View::Scoreboard { balances } => {
            for (row, balance) in balances.iter().enumerate() {
                let mut line = Line::new();
                let _ = write!(line, "{}: {}", row + 1, balance);
                surface.draw_text(0, row as i32 * GLYPH_SIZE, 1, &line)?;
            }
        }
        View::Balance { account, balance } => {
            surface.draw_text(0, CAPTION_Y, 1, &player_caption(*account, ""))?;
            draw_value(surface, *balance)?;
        }
        View::Composing { operation, amount } => {
            surface.draw_text(0, CAPTION_Y, 1, operation.label())?;
            surface.draw_text(0, VALUE_Y, BALANCE_SCALE, &amount.preview())?;
            let hint = if amount.is_confirmed() {
                "TAP CARD"
            } else {
                "A:OK D:DEL C:ESC"
            };
            surface.draw_text(0, HINT_Y, 1, hint)?;
        }
        View::TransferPreview {
            source,
            amount,
            remaining,
        } => {
            let mut caption = player_caption(*source, "");
            let _ = write!(caption, " -{}", amount);
            surface.draw_text(0, CAPTION_Y, 1, &caption)?;
            draw_value(surface, *remaining)?;
            surface.draw_text(0, HINT_Y, 1, "TAP RECEIVER")?;
        }
        View::InsufficientFunds { account, shortfall } => {
            surface.draw_text(0, CAPTION_Y, 1, &player_caption(*account, " NO FUNDS"))?;
            draw_value(surface, *shortfall)?;
        }
    }

    surface.present()
}

fn player_caption(account: AccountId, suffix: &str) -> Line {
    let mut line = Line::new();
    let _ = write!(line, "PLAYER {}{}", account.number(), suffix);
    line
}

fn draw_value<S: Surface + ?Sized>(surface: &mut S, value: i64) -> Result<(), S::Error> {
    let mut text = Line::new();
    let _ = write!(text, "{}", value);
    surface.draw_text(0, VALUE_Y, value_scale(value), &text)
}

/// Scale for a standalone balance: large values get the smaller font so
/// they still fit across the panel.
pub fn value_scale(value: i64) -> u8 {
    if digit_count(value) >= LARGE_BALANCE_DIGITS {
        LARGE_BALANCE_SCALE
    } else {
        BALANCE_SCALE
    }
}

fn digit_count(value: i64) -> usize {
    let mut n = value.unsigned_abs();
    let mut digits = 1;
    while n >= 10 {
        n /= 10;
        digits += 1;
    }
    digits
}
