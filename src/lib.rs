//! Facade crate for the Steam identifier conversion toolkit.
//!
//! This crate re-exports the core identifier types, the conversion pair,
//! and the pure session layer that models the converter form. The optional
//! `serde` feature forwards to the core crate.

#![forbid(unsafe_code)]

pub use steamid_core::{
    AccountId, Direction, Effect, INVALID_INPUT_MESSAGE, Output, ParseIdError, Request, Session,
    STEAM64_BASE, SteamId64, convert_input,
};
