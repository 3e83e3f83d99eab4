//! Core domain types for Steam identifier conversion.
//!
//! Two operations anchor the crate: extracting the short-form account id
//! (the low 32 bits) from a long-form SteamID64, and rebuilding the long
//! form by adding the fixed base. Around them sits a pure command layer
//! modelling the converter's input field, mode toggle, output line, and
//! copy/clear actions as explicit state transitions, so a windowing or
//! terminal adapter only has to forward requests and perform effects.

pub mod id;
pub mod session;

pub use id::{AccountId, ParseIdError, STEAM64_BASE, SteamId64};
pub use session::{
    Direction, Effect, INVALID_INPUT_MESSAGE, Output, Request, Session, convert_input,
};
