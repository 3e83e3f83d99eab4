//! Behaviour tests pinning the long/short conversion constants.

use std::str::FromStr;

use rstest::rstest;
use steamid_core::{AccountId, STEAM64_BASE, SteamId64};

#[rstest]
#[case(0, 103_582_791_429_521_408)]
#[case(100, 103_582_791_429_521_508)]
#[case(1, 103_582_791_429_521_409)]
fn building_from_pinned_accounts(#[case] account: u32, #[case] expected: u64) {
    assert_eq!(AccountId::new(account).to_steam64().raw(), expected);
}

#[rstest]
#[case(103_582_791_429_521_408, 0)]
#[case(103_582_791_429_521_409, 1)]
#[case(103_582_791_429_521_508, 100)]
fn extracting_from_pinned_identifiers(#[case] raw: u64, #[case] expected: u32) {
    assert_eq!(SteamId64::new(raw).account_id().raw(), expected);
}

#[rstest]
#[case("103582791429521409")]
#[case("0")]
#[case("18446744073709551615")]
fn long_form_round_trips_through_text(#[case] text: &str) {
    let id = SteamId64::from_str(text).expect("decimal text parses");
    assert_eq!(id.to_string(), text);
}

#[rstest]
#[case("abc")]
#[case("")]
#[case("-1")]
#[case("18446744073709551616")]
fn long_form_rejects_malformed_text(#[case] text: &str) {
    assert!(SteamId64::from_str(text).is_err());
}

#[rstest]
#[case("4294967296")]
#[case("1e3")]
fn short_form_rejects_out_of_range_text(#[case] text: &str) {
    assert!(AccountId::from_str(text).is_err());
}

#[test]
fn identifiers_serialise_transparently() {
    let account = AccountId::new(7);
    assert_eq!(serde_json::to_string(&account).expect("serialise"), "7");
    let long = SteamId64::new(STEAM64_BASE);
    assert_eq!(
        serde_json::to_string(&long).expect("serialise"),
        "103582791429521408"
    );
    let back: SteamId64 =
        serde_json::from_str("103582791429521408").expect("deserialise");
    assert_eq!(back, long);
}
