//! Style values and the fixed attribute sequences.
//!
//! [`StyleString`] is the building block for everything the registry stores:
//! a terminal control sequence proven, at construction, to carry no visible
//! text. Setters across the crate accept anything implementing
//! [`IntoStyleString`], so callers can hand over a raw `&str` (validated on the
//! spot) or a value they already built.
//!
//! The [`sgr`] module holds the fixed Select Graphic Rendition sequences
//! (reset, bold, underline, ...). They are constants and cannot be changed.

pub mod sgr;
mod value;

use tracing::{debug, trace};

use crate::error::StyleError;

pub use value::{IntoStyleString, StyleString};

/// Validates `value` and stores it in `slot`, leaving `slot` untouched on error.
pub(crate) fn replace_style<S: IntoStyleString>(
    slot: &mut StyleString,
    field: &'static str,
    value: S,
) -> Result<(), StyleError> {
    let value = value.into_style_string().inspect_err(|err| {
        debug!(field, %err, "rejected style value");
    })?;
    trace!(field, "style updated");
    *slot = value;
    Ok(())
}

/// Generates a getter and a validating setter for each named style field.
macro_rules! style_accessors {
    ($( $(#[$meta:meta])* $field:ident / $setter:ident ),* $(,)?) => {
        $(
            $(#[$meta])*
            pub fn $field(&self) -> &$crate::style::StyleString {
                &self.$field
            }

            #[doc = concat!(
                "Replaces `", stringify!($field), "`.\n\n",
                "Fails with [`StyleError::ContentViolation`](crate::StyleError::ContentViolation) ",
                "if the value has visible text; the previous value is kept."
            )]
            pub fn $setter<S: $crate::style::IntoStyleString>(
                &mut self,
                value: S,
            ) -> Result<(), $crate::error::StyleError> {
                $crate::style::replace_style(&mut self.$field, stringify!($field), value)
            }
        )*
    };
}

pub(crate) use style_accessors;
