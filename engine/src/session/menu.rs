// src/session/menu.rs
#![forbid(unsafe_code)]

pub const MENU_TEXT: &str = "Menu:\n  1 - Play piece (remove from front)\n  2 - Insert new piece at back (if there is room)\n  3 - Quit\nChoose an option: ";

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MenuChoice {
    Play,
    Insert,
    Quit,
}

impl TryFrom<i64> for MenuChoice {
    type Error = i64;

    /// Unknown numbers are handed back unchanged.
    fn try_from(v: i64) -> Result<Self, Self::Error> {
        match v {
            1 => Ok(MenuChoice::Play),
            2 => Ok(MenuChoice::Insert),
            3 => Ok(MenuChoice::Quit),
            other => Err(other),
        }
    }
}

/**
 * First decimal integer at the start of `line`.
 *
 * - Leading whitespace is skipped; an optional `+`/`-` sign is accepted.
 * - Anything after the digits is ignored (`"2 please"` -> 2).
 * - Returns None for empty/non-numeric lines and for values outside `i64`.
 */
pub fn parse_choice(line: &str) -> Option<i64> {
    let s = line.trim_start();
    let sign_len = match s.as_bytes().first() {
        Some(b'+') | Some(b'-') => 1,
        _ => 0,
    };
    let digits = s[sign_len..]
        .bytes()
        .take_while(|b| b.is_ascii_digit())
        .count();
    if digits == 0 {
        return None;
    }
    s[..sign_len + digits].parse::<i64>().ok()
}
