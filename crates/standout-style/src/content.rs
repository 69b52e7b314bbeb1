//! Measuring the renderable content of style values.
//!
//! A style value is pure decoration: it may only carry terminal control
//! sequences. Whether a string qualifies is decided by a [`ContentMeasure`],
//! which reports how many characters would actually show up on screen.
//!
//! [`AnsiContentMeasure`] is the default implementation. It first drops
//! complete CSI sequences (including colon sub-parameters and zero-padded
//! parameters) and OSC strings terminated by BEL or ST, then removes any
//! remaining ANSI codes with [`console::strip_ansi_codes`] and counts what is
//! left, ignoring bare control characters. Incomplete sequences are not
//! dropped. Hosts with their own text analyzer can
//! implement the trait and build values with
//! [`StyleString::parse_with`](crate::StyleString::parse_with).
//!
//! ```rust
//! use standout_style::{content_length, plain_text};
//!
//! assert_eq!(content_length("\x1b[31;1m"), 0);
//! assert_eq!(content_length("\x1b[31mBOOM"), 4);
//! assert_eq!(plain_text("\x1b[31mBOOM\x1b[0m"), "BOOM");
//! ```

use std::borrow::Cow;

use console::strip_ansi_codes;

use crate::error::StyleError;

/// Reports how much visible text a string would render.
pub trait ContentMeasure {
    /// Number of characters that would render visibly.
    fn content_length(&self, text: &str) -> usize;

    /// The visible part of `text`, used in diagnostics.
    fn plain_text(&self, text: &str) -> String;
}

/// ANSI-aware measure backed by the `console` crate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnsiContentMeasure;

impl ContentMeasure for AnsiContentMeasure {
    fn content_length(&self, text: &str) -> usize {
        visible_chars(&strip_ansi_codes(&strip_control_strings(text))).count()
    }

    fn plain_text(&self, text: &str) -> String {
        visible_chars(&strip_ansi_codes(&strip_control_strings(text))).collect()
    }
}

const ESC: u8 = 0x1b;
const BEL: u8 = 0x07;

/// Removes terminated CSI sequences and OSC strings.
fn strip_control_strings(text: &str) -> Cow<'_, str> {
    let bytes = text.as_bytes();
    if !bytes.contains(&ESC) {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len());
    let mut copied = 0;
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] != ESC {
            i += 1;
            continue;
        }
        let end = match bytes.get(i + 1) {
            Some(b'[') => csi_end(bytes, i + 2),
            Some(b']') => osc_end(bytes, i + 2),
            _ => None,
        };
        match end {
            Some(end) => {
                out.push_str(&text[copied..i]);
                copied = end;
                i = end;
            }
            None => i += 1,
        }
    }
    out.push_str(&text[copied..]);
    Cow::Owned(out)
}

/// End of a CSI sequence whose parameters start at `from`.
fn csi_end(bytes: &[u8], from: usize) -> Option<usize> {
    let mut j = from;
    while j < bytes.len() && (0x20..=0x3f).contains(&bytes[j]) {
        j += 1;
    }
    match bytes.get(j) {
        Some(b) if (0x40..=0x7e).contains(b) => Some(j + 1),
        _ => None,
    }
}

/// End of an OSC string whose payload starts at `from`.
fn osc_end(bytes: &[u8], from: usize) -> Option<usize> {
    let mut j = from;
    while j < bytes.len() {
        match bytes[j] {
            BEL => return Some(j + 1),
            ESC if bytes.get(j + 1) == Some(&b'\\') => return Some(j + 2),
            ESC => return None,
            _ => j += 1,
        }
    }
    None
}

fn visible_chars(stripped: &str) -> impl Iterator<Item = char> + '_ {
    stripped.chars().filter(|c| !c.is_control())
}

/// Counts the renderable characters in `text` using [`AnsiContentMeasure`].
pub fn content_length(text: &str) -> usize {
    AnsiContentMeasure.content_length(text)
}

/// Renders `text` as plain text using [`AnsiContentMeasure`].
pub fn plain_text(text: &str) -> String {
    AnsiContentMeasure.plain_text(text)
}

/// Fails with [`StyleError::ContentViolation`] when `text` has visible content.
pub(crate) fn ensure_no_content<M>(text: &str, measure: &M) -> Result<(), StyleError>
where
    M: ContentMeasure + ?Sized,
{
    if measure.content_length(text) > 0 {
        return Err(StyleError::ContentViolation {
            plain_text: measure.plain_text(text),
        });
    }
    Ok(())
}
