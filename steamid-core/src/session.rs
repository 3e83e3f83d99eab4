//! Pure command layer for the converter.
//!
//! [`Session`] models the converter form — one text field, a direction
//! toggle, an output line, and copy/clear actions — as an explicit state
//! struct; adapters feed it [`Request`]s and perform the returned
//! [`Effect`]s. Every transition completes immediately and touches no
//! shared state, so the layer is testable without any toolkit.

use log::warn;

use crate::id::{AccountId, ParseIdError, SteamId64};

/// Advisory shown when the input text is not a valid decimal identifier.
pub const INVALID_INPUT_MESSAGE: &str = "Invalid input! Please enter a valid integer.";

/// Conversion direction selected by the mode toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Direction {
    /// Long-form input, short-form result. The default mode.
    #[default]
    LongToShort,
    /// Short-form input, long-form result.
    ShortToLong,
}

impl Direction {
    /// Return the direction as a lowercase `&str`.
    ///
    /// # Examples
    /// ```
    /// use steamid_core::Direction;
    ///
    /// assert_eq!(Direction::LongToShort.as_str(), "long-to-short");
    /// ```
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::LongToShort => "long-to-short",
            Self::ShortToLong => "short-to-long",
        }
    }

    /// Return the opposite direction.
    pub const fn toggled(self) -> Self {
        match self {
            Self::LongToShort => Self::ShortToLong,
            Self::ShortToLong => Self::LongToShort,
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "long-to-short" => Ok(Self::LongToShort),
            "short-to-long" => Ok(Self::ShortToLong),
            _ => Err(format!("unknown direction '{s}'")),
        }
    }
}

/// Result line shown by the converter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Output {
    /// Nothing converted yet, or the form was cleared.
    #[default]
    Empty,
    /// A long-form identifier built from short-form input.
    Long(SteamId64),
    /// A short-form identifier extracted from long-form input.
    Short(AccountId),
    /// The input text did not parse as a decimal identifier.
    Invalid,
}

impl std::fmt::Display for Output {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => Ok(()),
            Self::Long(id) => write!(f, "Long-form ID: {id}"),
            Self::Short(id) => write!(f, "Short-form ID: {id}"),
            Self::Invalid => f.write_str(INVALID_INPUT_MESSAGE),
        }
    }
}

/// A user action forwarded by the adapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    /// Replace the input field text.
    Input(String),
    /// Select a conversion direction.
    SetDirection(Direction),
    /// Flip the conversion direction.
    ToggleDirection,
    /// Convert the current input in the current direction.
    Convert,
    /// Export the numeric portion of the output line.
    Copy,
    /// Reset the input field and the output line.
    Clear,
}

/// A side effect the adapter must perform on the session's behalf.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Place the given text on the system clipboard.
    SetClipboard(String),
}

/// Explicit state of the converter form.
///
/// # Examples
///
/// ```
/// use steamid_core::{Direction, Request, Session};
///
/// let mut session = Session::new();
/// session.apply(Request::SetDirection(Direction::ShortToLong));
/// session.apply(Request::Input("100".into()));
/// session.apply(Request::Convert);
/// assert_eq!(session.output().to_string(), "Long-form ID: 103582791429521508");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Session {
    input: String,
    direction: Direction,
    output: Output,
}

impl Session {
    /// Construct an empty session in the default long-to-short mode.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current input field text.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Current conversion direction.
    pub const fn direction(&self) -> Direction {
        self.direction
    }

    /// Current output line.
    pub const fn output(&self) -> &Output {
        &self.output
    }

    /// Apply one request, returning an effect for the adapter if any.
    ///
    /// Conversion replaces the output atomically: a failed parse yields
    /// [`Output::Invalid`] and leaves the rest of the state untouched.
    pub fn apply(&mut self, request: Request) -> Option<Effect> {
        match request {
            Request::Input(text) => {
                self.input = text;
                None
            }
            Request::SetDirection(direction) => {
                self.direction = direction;
                None
            }
            Request::ToggleDirection => {
                self.direction = self.direction.toggled();
                None
            }
            Request::Convert => {
                self.output =
                    convert_input(self.direction, &self.input).unwrap_or(Output::Invalid);
                None
            }
            Request::Copy => self.copy_payload().map(Effect::SetClipboard),
            Request::Clear => {
                self.input.clear();
                self.output = Output::Empty;
                None
            }
        }
    }

    /// Clipboard payload for the current output: the text after the first
    /// colon, trimmed, or the whole text when no colon is present. `None`
    /// when there is nothing to copy.
    fn copy_payload(&self) -> Option<String> {
        let text = self.output.to_string();
        let payload = match text.split_once(':') {
            Some((_, rest)) => rest.trim(),
            None => text.as_str(),
        };
        if payload.is_empty() {
            None
        } else {
            Some(payload.to_owned())
        }
    }
}

/// Parse `text` per `direction` and convert it.
///
/// The input is trimmed, then parsed as unsigned decimal: `u64` for
/// long-to-short, `u32` for short-to-long. The conversion itself never
/// fails; only malformed text errors.
///
/// # Errors
///
/// Returns [`ParseIdError`] when the trimmed text is not a decimal value of
/// the expected width.
pub fn convert_input(direction: Direction, text: &str) -> Result<Output, ParseIdError> {
    let trimmed = text.trim();
    match direction {
        Direction::LongToShort => {
            let id: SteamId64 = trimmed.parse()?;
            if !id.has_standard_base() {
                warn!("long-form id {id} does not sit on the standard base; its short form will not round-trip");
            }
            Ok(Output::Short(id.account_id()))
        }
        Direction::ShortToLong => {
            let account: AccountId = trimmed.parse()?;
            Ok(Output::Long(account.to_steam64()))
        }
    }
}
