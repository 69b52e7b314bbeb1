//! Fixed text-attribute sequences.
//!
//! These are fixed at compile time and never pass through validation.

use super::value::StyleString;

/// Turns off all attributes.
pub static RESET: StyleString = StyleString::from_static("\x1b[0m");
pub static BOLD: StyleString = StyleString::from_static("\x1b[1m");
pub static BOLD_OFF: StyleString = StyleString::from_static("\x1b[22m");
pub static ITALIC: StyleString = StyleString::from_static("\x1b[3m");
pub static ITALIC_OFF: StyleString = StyleString::from_static("\x1b[23m");
pub static UNDERLINE: StyleString = StyleString::from_static("\x1b[4m");
pub static UNDERLINE_OFF: StyleString = StyleString::from_static("\x1b[24m");
pub static BLINK: StyleString = StyleString::from_static("\x1b[5m");
pub static BLINK_OFF: StyleString = StyleString::from_static("\x1b[25m");
pub static REVERSE: StyleString = StyleString::from_static("\x1b[7m");
pub static REVERSE_OFF: StyleString = StyleString::from_static("\x1b[27m");
pub static HIDDEN: StyleString = StyleString::from_static("\x1b[8m");
pub static HIDDEN_OFF: StyleString = StyleString::from_static("\x1b[28m");
pub static STRIKETHROUGH: StyleString = StyleString::from_static("\x1b[9m");
pub static STRIKETHROUGH_OFF: StyleString = StyleString::from_static("\x1b[29m");
