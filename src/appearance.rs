//! Chart appearance: background and text colours.
//!
//! Colours normally travel as [`Colour`], but configuration can carry raw
//! numeric codes ([`ColourCode`]) that are not guaranteed to be in range.
//! [`AppearanceOptions::create`] is the only way to turn such codes into
//! options, and it rejects anything outside `WHITE..=BLACK`.

use crate::element::Rgba;
use crate::outcome::{Failure, Outcome, failure};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Message carried by a failed [`AppearanceOptions::create`].
pub const INVALID_COLOUR_TYPE: &str = "invalid colour type";

/// Colours available for chart background and text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Colour {
    White = 0,
    Black = 1,
}

impl Colour {
    pub const ALL: [Colour; 2] = [Colour::White, Colour::Black];

    pub const fn name(self) -> &'static str {
        match self {
            Colour::White => "white",
            Colour::Black => "black",
        }
    }

    pub const fn to_rgba(self) -> Rgba {
        match self {
            Colour::White => Rgba::WHITE,
            Colour::Black => Rgba::BLACK,
        }
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Colour {
    type Err = Failure;

    fn from_str(s: &str) -> Outcome<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "white" => Ok(Colour::White),
            "black" => Ok(Colour::Black),
            other => failure(format!("unknown colour name: {other}")),
        }
    }
}

/// Raw colour code, possibly outside the [`Colour`] range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColourCode(pub u8);

impl From<Colour> for ColourCode {
    fn from(c: Colour) -> Self {
        ColourCode(c as u8)
    }
}

impl TryFrom<ColourCode> for Colour {
    type Error = Failure;

    fn try_from(code: ColourCode) -> Outcome<Self> {
        match code.0 {
            0 => Ok(Colour::White),
            1 => Ok(Colour::Black),
            _ => failure(INVALID_COLOUR_TYPE),
        }
    }
}

impl Serialize for ColourCode {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match Colour::try_from(*self) {
            Ok(c) => serializer.serialize_str(c.name()),
            Err(_) => serializer.serialize_u8(self.0),
        }
    }
}

/// Accepts either a colour name (`"white"`) or an integer code (`0`).
impl<'de> Deserialize<'de> for ColourCode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::{self, Visitor};
        struct CodeVisitor;

        impl<'de> Visitor<'de> for CodeVisitor {
            type Value = ColourCode;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                write!(f, "a colour name or an integer colour code")
            }

            fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                u8::try_from(v)
                    .map(ColourCode)
                    .map_err(|_| E::custom(format!("colour code {v} does not fit in u8")))
            }

            fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                if v < 0 {
                    return Err(E::custom("negative colour code"));
                }
                self.visit_u64(v as u64)
            }

            fn visit_str<E>(self, s: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                s.parse::<Colour>().map(ColourCode::from).map_err(E::custom)
            }
        }

        deserializer.deserialize_any(CodeVisitor)
    }
}

/// Name of a colour code; panics with "unsupported colour" when out of range.
#[track_caller]
pub fn colour_to_string(code: impl Into<ColourCode>) -> &'static str {
    let code = code.into();
    match try_colour_to_string(code) {
        Ok(name) => name,
        Err(e) => panic!("{e}"),
    }
}

/// Name of a colour code, or a failure for out-of-range codes.
pub fn try_colour_to_string(code: impl Into<ColourCode>) -> Outcome<&'static str> {
    let code = code.into();
    Colour::try_from(code)
        .map(Colour::name)
        .or_else(|_| failure(format!("unsupported colour: {}", code.0)))
}

/// Validated background/text colour pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawAppearance")]
pub struct AppearanceOptions {
    background: Colour,
    text: Colour,
}

/// Unvalidated shape of [`AppearanceOptions`] as it appears in configuration.
#[derive(Debug, Deserialize)]
struct RawAppearance {
    #[serde(default = "default_background")]
    background: ColourCode,
    #[serde(default = "default_text")]
    text: ColourCode,
}

fn default_background() -> ColourCode {
    Colour::White.into()
}

fn default_text() -> ColourCode {
    Colour::Black.into()
}

impl TryFrom<RawAppearance> for AppearanceOptions {
    type Error = Failure;

    fn try_from(raw: RawAppearance) -> Outcome<Self> {
        AppearanceOptions::create(raw.background, raw.text)
    }
}

impl Default for AppearanceOptions {
    /// White background, black text.
    fn default() -> Self {
        Self {
            background: Colour::White,
            text: Colour::Black,
        }
    }
}

impl AppearanceOptions {
    /// Validate both codes; fails with [`INVALID_COLOUR_TYPE`] if either is out of range.
    pub fn create(
        background: impl Into<ColourCode>,
        text: impl Into<ColourCode>,
    ) -> Outcome<Self> {
        let background = Colour::try_from(background.into())?;
        let text = Colour::try_from(text.into())?;
        Ok(Self { background, text })
    }

    /// Parse `{"background": ..., "text": ...}`; names or integer codes are accepted.
    pub fn from_json(s: &str) -> Result<Self> {
        serde_json::from_str(s).context("invalid appearance options")
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).context("serialize appearance options")
    }

    pub fn get_background_colour(&self) -> Colour {
        self.background
    }

    pub fn get_text_colour(&self) -> Colour {
        self.text
    }

    pub fn set_background_colour(&mut self, colour: Colour) {
        self.background = colour;
    }

    pub fn set_text_colour(&mut self, colour: Colour) {
        self.text = colour;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outcome::GetValue;

    #[test]
    fn create_accepts_valid_colours() {
        let opts = AppearanceOptions::create(Colour::White, Colour::Black);
        assert_eq!(opts.get_value().get_background_colour(), Colour::White);
        assert_eq!(opts.get_value().get_text_colour(), Colour::Black);
    }

    #[test]
    fn create_rejects_out_of_range_codes() {
        let err = AppearanceOptions::create(ColourCode(2), Colour::White).unwrap_err();
        assert_eq!(err.message(), INVALID_COLOUR_TYPE);
        assert!(AppearanceOptions::create(Colour::Black, ColourCode(255)).is_err());
    }

    #[test]
    #[should_panic(expected = "invalid colour type")]
    fn get_value_on_rejected_options_panics() {
        let _ = AppearanceOptions::create(ColourCode(9), Colour::White).get_value();
    }

    #[test]
    fn setters_mutate_in_place() {
        let mut opts = AppearanceOptions::default();
        opts.set_background_colour(Colour::Black);
        opts.set_text_colour(Colour::White);
        assert_eq!(opts.get_background_colour(), Colour::Black);
        assert_eq!(opts.get_text_colour(), Colour::White);
    }

    #[test]
    fn colour_names() {
        assert_eq!(colour_to_string(Colour::White), "white");
        assert_eq!(colour_to_string(Colour::Black), "black");
        assert_eq!(colour_to_string(ColourCode(1)), "black");
        assert_eq!(
            try_colour_to_string(ColourCode(3)).unwrap_err().message(),
            "unsupported colour: 3"
        );
        assert_eq!(" Black ".parse::<Colour>().unwrap(), Colour::Black);
        assert!("grey".parse::<Colour>().is_err());
    }

    #[test]
    #[should_panic(expected = "unsupported colour")]
    fn colour_to_string_panics_out_of_range() {
        colour_to_string(ColourCode(7));
    }
}
