//! Foreground and background color palettes.
//!
//! Each [`ColorPalette`] exposes the sixteen standard ANSI colors for one
//! [`Layer`] plus a direct-color encoder:
//!
//! | Color | Foreground | Background |
//! |-------|------------|------------|
//! | Black .. White | `30`-`37` | `40`-`47` |
//! | DarkGray | `90` | `100` |
//! | LightRed .. LightGray | `91`-`97` | `101`-`107` |
//! | RGB | `38;2;r;g;b` | `48;2;r;g;b` |
//!
//! The named sequences are generated by the crate and never revalidated.
//!
//! # Example
//!
//! ```rust
//! use standout_style::{ColorPalette, Layer, NamedColor};
//!
//! let fg = ColorPalette::new(Layer::Foreground);
//! assert_eq!(fg.red(), "\x1b[31m");
//! assert_eq!(fg.get(NamedColor::LightBlue), "\x1b[94m");
//! assert_eq!(fg.from_rgb_packed(0xFF0000), "\x1b[38;2;255;0;0m");
//!
//! let bg = ColorPalette::new(Layer::Background);
//! assert_eq!(bg.from_rgb(255, 0, 0), "\x1b[48;2;255;0;0m");
//! ```

use std::fmt;
use std::str::FromStr;

use crate::error::StyleError;
use crate::style::StyleString;

/// Which side of the glyph a palette colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Layer {
    /// Text color.
    Foreground,
    /// Cell color behind the text.
    Background,
}

impl Layer {
    /// SGR parameter introducing a direct color on this layer.
    fn direct_color_code(self) -> u8 {
        match self {
            Layer::Foreground => 38,
            Layer::Background => 48,
        }
    }
}

/// The sixteen named terminal colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NamedColor {
    /// Black.
    Black,
    /// Red.
    Red,
    /// Green.
    Green,
    /// Yellow.
    Yellow,
    /// Blue.
    Blue,
    /// Magenta.
    Magenta,
    /// Cyan.
    Cyan,
    /// White, rendered as light gray by most terminals.
    White,
    /// Bright black.
    DarkGray,
    /// Bright red.
    LightRed,
    /// Bright green.
    LightGreen,
    /// Bright yellow.
    LightYellow,
    /// Bright blue.
    LightBlue,
    /// Bright magenta.
    LightMagenta,
    /// Bright cyan.
    LightCyan,
    /// Bright white.
    LightGray,
}

impl NamedColor {
    /// Every named color, in palette order.
    pub const ALL: [NamedColor; 16] = [
        NamedColor::Black,
        NamedColor::Red,
        NamedColor::Green,
        NamedColor::Yellow,
        NamedColor::Blue,
        NamedColor::Magenta,
        NamedColor::Cyan,
        NamedColor::White,
        NamedColor::DarkGray,
        NamedColor::LightRed,
        NamedColor::LightGreen,
        NamedColor::LightYellow,
        NamedColor::LightBlue,
        NamedColor::LightMagenta,
        NamedColor::LightCyan,
        NamedColor::LightGray,
    ];

    /// Canonical name, e.g. `"LightBlue"`.
    pub fn name(self) -> &'static str {
        match self {
            NamedColor::Black => "Black",
            NamedColor::Red => "Red",
            NamedColor::Green => "Green",
            NamedColor::Yellow => "Yellow",
            NamedColor::Blue => "Blue",
            NamedColor::Magenta => "Magenta",
            NamedColor::Cyan => "Cyan",
            NamedColor::White => "White",
            NamedColor::DarkGray => "DarkGray",
            NamedColor::LightRed => "LightRed",
            NamedColor::LightGreen => "LightGreen",
            NamedColor::LightYellow => "LightYellow",
            NamedColor::LightBlue => "LightBlue",
            NamedColor::LightMagenta => "LightMagenta",
            NamedColor::LightCyan => "LightCyan",
            NamedColor::LightGray => "LightGray",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for NamedColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for NamedColor {
    type Err = StyleError;

    /// Accepts the canonical name in any case, with optional `_` or `-`
    /// separators (`LightBlue`, `light_blue`, `light-blue`). `grey` is
    /// accepted for `gray`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let folded: String = s
            .trim()
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .flat_map(char::to_lowercase)
            .collect();
        let folded = folded.replace("grey", "gray");

        NamedColor::ALL
            .into_iter()
            .find(|color| color.name().eq_ignore_ascii_case(&folded))
            .ok_or_else(|| StyleError::UnknownName {
                kind: "color",
                name: s.to_string(),
            })
    }
}

static FOREGROUND: [StyleString; 16] = [
    StyleString::from_static("\x1b[30m"),
    StyleString::from_static("\x1b[31m"),
    StyleString::from_static("\x1b[32m"),
    StyleString::from_static("\x1b[33m"),
    StyleString::from_static("\x1b[34m"),
    StyleString::from_static("\x1b[35m"),
    StyleString::from_static("\x1b[36m"),
    StyleString::from_static("\x1b[37m"),
    StyleString::from_static("\x1b[90m"),
    StyleString::from_static("\x1b[91m"),
    StyleString::from_static("\x1b[92m"),
    StyleString::from_static("\x1b[93m"),
    StyleString::from_static("\x1b[94m"),
    StyleString::from_static("\x1b[95m"),
    StyleString::from_static("\x1b[96m"),
    StyleString::from_static("\x1b[97m"),
];

static BACKGROUND: [StyleString; 16] = [
    StyleString::from_static("\x1b[40m"),
    StyleString::from_static("\x1b[41m"),
    StyleString::from_static("\x1b[42m"),
    StyleString::from_static("\x1b[43m"),
    StyleString::from_static("\x1b[44m"),
    StyleString::from_static("\x1b[45m"),
    StyleString::from_static("\x1b[46m"),
    StyleString::from_static("\x1b[47m"),
    StyleString::from_static("\x1b[100m"),
    StyleString::from_static("\x1b[101m"),
    StyleString::from_static("\x1b[102m"),
    StyleString::from_static("\x1b[103m"),
    StyleString::from_static("\x1b[104m"),
    StyleString::from_static("\x1b[105m"),
    StyleString::from_static("\x1b[106m"),
    StyleString::from_static("\x1b[107m"),
];

macro_rules! named_color_accessors {
    ($($method:ident => $color:ident),* $(,)?) => {
        $(
            #[doc = concat!("Gets the ", stringify!($color), " sequence for this layer.")]
            pub fn $method(&self) -> &'static StyleString {
                self.get(NamedColor::$color)
            }
        )*
    };
}

/// The named colors and RGB encoder for one layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorPalette {
    layer: Layer,
}

impl ColorPalette {
    /// Creates the palette for `layer`.
    pub fn new(layer: Layer) -> Self {
        Self { layer }
    }

    /// The layer this palette colors.
    pub fn layer(&self) -> Layer {
        self.layer
    }

    /// Gets the sequence for a named color.
    pub fn get(&self, color: NamedColor) -> &'static StyleString {
        let table = match self.layer {
            Layer::Foreground => &FOREGROUND,
            Layer::Background => &BACKGROUND,
        };
        &table[color.index()]
    }

    /// Iterates `(color, sequence)` pairs in palette order.
    pub fn iter(&self) -> impl Iterator<Item = (NamedColor, &'static StyleString)> + '_ {
        NamedColor::ALL
            .into_iter()
            .map(move |color| (color, self.get(color)))
    }

    named_color_accessors! {
        black => Black,
        red => Red,
        green => Green,
        yellow => Yellow,
        blue => Blue,
        magenta => Magenta,
        cyan => Cyan,
        white => White,
        dark_gray => DarkGray,
        light_red => LightRed,
        light_green => LightGreen,
        light_yellow => LightYellow,
        light_blue => LightBlue,
        light_magenta => LightMagenta,
        light_cyan => LightCyan,
        light_gray => LightGray,
    }

    /// Encodes a direct (24-bit) color.
    ///
    /// Every byte combination is valid, so this never fails.
    #[allow(clippy::wrong_self_convention)]
    pub fn from_rgb(&self, red: u8, green: u8, blue: u8) -> StyleString {
        StyleString::trusted(format!(
            "\x1b[{};2;{};{};{}m",
            self.layer.direct_color_code(),
            red,
            green,
            blue
        ))
    }

    /// Encodes a direct color packed as `0xRRGGBB`.
    ///
    /// Bits above the low 24 are ignored.
    #[allow(clippy::wrong_self_convention)]
    pub fn from_rgb_packed(&self, rgb: u32) -> StyleString {
        let (red, green, blue) = unpack_rgb(rgb);
        self.from_rgb(red, green, blue)
    }
}

/// Splits `0xRRGGBB` into its components.
pub fn unpack_rgb(rgb: u32) -> (u8, u8, u8) {
    let blue = (rgb & 0xFF) as u8;
    let green = ((rgb >> 8) & 0xFF) as u8;
    let red = ((rgb >> 16) & 0xFF) as u8;
    (red, green, blue)
}
