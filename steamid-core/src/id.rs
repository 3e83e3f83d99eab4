//! Steam identifier types and the long/short conversion pair.
//!
//! A long-form identifier (SteamID64) is `STEAM64_BASE + account`, where the
//! base is divisible by 2^32 and the account number occupies the low 32
//! bits. Extraction keeps those low bits and discards the rest; building
//! adds the base back. Both operations are total and side-effect free.

use std::num::ParseIntError;

use thiserror::Error;

/// Base of the long-form numbering space.
///
/// Divisible by 2^32, so the account number and the base never overlap and
/// `SteamId64::account_id` is exact for every built identifier.
pub const STEAM64_BASE: u64 = 103_582_791_429_521_408;

/// Low 32 bits carry the account number.
const ACCOUNT_MASK: u64 = (1 << 32) - 1;

/// Errors returned when parsing identifiers from decimal text.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseIdError {
    /// The text was empty, contained non-decimal characters, or encoded a
    /// value that does not fit the identifier's width.
    #[error("invalid decimal identifier: {0}")]
    InvalidDigits(#[from] ParseIntError),
}

/// Short-form account identifier: the low 32 bits of a [`SteamId64`].
///
/// # Examples
///
/// ```
/// use steamid_core::{AccountId, STEAM64_BASE};
///
/// let account = AccountId::new(100);
/// assert_eq!(account.to_steam64().raw(), STEAM64_BASE + 100);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct AccountId(u32);

impl AccountId {
    /// Wrap a raw 32-bit account number.
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// Return the raw 32-bit account number.
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Build the long-form identifier for this account.
    ///
    /// Cannot overflow: `STEAM64_BASE + u32::MAX` is well below `u64::MAX`.
    ///
    /// # Examples
    ///
    /// ```
    /// use steamid_core::AccountId;
    ///
    /// let long = AccountId::new(0).to_steam64();
    /// assert_eq!(long.raw(), 103_582_791_429_521_408);
    /// ```
    pub const fn to_steam64(self) -> SteamId64 {
        SteamId64(STEAM64_BASE + self.0 as u64)
    }
}

impl std::fmt::Display for AccountId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for AccountId {
    type Err = ParseIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}

/// Long-form identifier (SteamID64).
///
/// Any `u64` is representable; values that do not sit on [`STEAM64_BASE`]
/// still extract to their low 32 bits, but will not round-trip through
/// [`AccountId::to_steam64`].
///
/// # Examples
///
/// ```
/// use steamid_core::SteamId64;
///
/// let long = SteamId64::new(103_582_791_429_521_409);
/// assert_eq!(long.account_id().raw(), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct SteamId64(u64);

impl SteamId64 {
    /// Wrap a raw 64-bit identifier.
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Return the raw 64-bit value.
    pub const fn raw(self) -> u64 {
        self.0
    }

    /// Extract the short-form account identifier: the value modulo 2^32.
    ///
    /// Total for every `u64`; high bits beyond the account space are
    /// discarded.
    #[expect(
        clippy::cast_possible_truncation,
        reason = "masked to the low 32 bits immediately before the cast"
    )]
    pub const fn account_id(self) -> AccountId {
        AccountId((self.0 & ACCOUNT_MASK) as u32)
    }

    /// Whether the high bits match [`STEAM64_BASE`].
    ///
    /// Only such values round-trip through `account_id` followed by
    /// [`AccountId::to_steam64`].
    pub const fn has_standard_base(self) -> bool {
        self.0 & !ACCOUNT_MASK == STEAM64_BASE
    }
}

impl From<AccountId> for SteamId64 {
    fn from(account: AccountId) -> Self {
        account.to_steam64()
    }
}

impl std::fmt::Display for SteamId64 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for SteamId64 {
    type Err = ParseIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, STEAM64_BASE)]
    #[case(100, 103_582_791_429_521_508)]
    #[case(u32::MAX, STEAM64_BASE + u64::from(u32::MAX))]
    fn building_adds_the_base(#[case] account: u32, #[case] expected: u64) {
        assert_eq!(AccountId::new(account).to_steam64().raw(), expected);
    }

    #[rstest]
    #[case(STEAM64_BASE, 0)]
    #[case(103_582_791_429_521_409, 1)]
    #[case(7, 7)]
    #[case(u64::MAX, u32::MAX)]
    fn extraction_keeps_the_low_bits(#[case] raw: u64, #[case] expected: u32) {
        assert_eq!(SteamId64::new(raw).account_id(), AccountId::new(expected));
    }

    #[test]
    fn base_is_aligned_to_the_account_space() {
        assert_eq!(STEAM64_BASE & ACCOUNT_MASK, 0);
    }

    #[rstest]
    #[case(STEAM64_BASE, true)]
    #[case(STEAM64_BASE + 42, true)]
    #[case(42, false)]
    #[case(u64::MAX, false)]
    fn standard_base_detection(#[case] raw: u64, #[case] expected: bool) {
        assert_eq!(SteamId64::new(raw).has_standard_base(), expected);
    }

    #[test]
    fn conversion_from_account_matches_build() {
        let account = AccountId::new(9);
        assert_eq!(SteamId64::from(account), account.to_steam64());
    }

    #[rstest]
    #[case("abc")]
    #[case("")]
    #[case("-1")]
    #[case("12.5")]
    fn parsing_rejects_non_decimal_text(#[case] text: &str) {
        assert!(text.parse::<SteamId64>().is_err());
        assert!(text.parse::<AccountId>().is_err());
    }

    #[test]
    fn short_form_parse_is_bounded_by_u32() {
        assert!("4294967295".parse::<AccountId>().is_ok());
        assert!("4294967296".parse::<AccountId>().is_err());
        assert!("4294967296".parse::<SteamId64>().is_ok());
    }

    #[test]
    fn display_renders_decimal() {
        assert_eq!(AccountId::new(42).to_string(), "42");
        assert_eq!(SteamId64::new(STEAM64_BASE).to_string(), "103582791429521408");
    }
}
