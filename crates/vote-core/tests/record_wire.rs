//! Queue wire format tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use vote_core::error::ClientCode;
use vote_core::{VoteError, VoteRecord, VoterId};

#[test]
fn record_json_shape() {
    let rec = VoteRecord::new(VoterId::from_bits(0xdead_beef), "Cats");
    let s = rec.to_json().unwrap();
    assert_eq!(s, r#"{"voter_id":"deadbeef","vote":"Cats"}"#);
}

#[test]
fn record_decodes_worker_payload() {
    let rec = VoteRecord::from_json(r#"{"voter_id":"abc123","vote":"Dogs"}"#).unwrap();
    assert_eq!(rec.voter_id.as_str(), "abc123");
    assert_eq!(rec.vote, "Dogs");
}

#[test]
fn malformed_payload_is_internal() {
    let err = VoteRecord::from_json(r#"{"vote":"Dogs"}"#).expect_err("must fail");
    assert_eq!(err.client_code(), ClientCode::Internal);
}

#[test]
fn generated_ids_are_unpadded_lowercase_hex() {
    for _ in 0..256 {
        let id = VoterId::generate();
        let s = id.as_str();
        assert!(!s.is_empty() && s.len() <= 16, "bad length: {s}");
        assert!(s.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
        assert!(s == "0" || !s.starts_with('0'), "padded: {s}");
        assert_eq!(u64::from_str_radix(s, 16).map(VoterId::from_bits).unwrap(), id);
    }
}

#[test]
fn from_bits_edges() {
    assert_eq!(VoterId::from_bits(0).as_str(), "0");
    assert_eq!(VoterId::from_bits(u64::MAX).as_str(), "ffffffffffffffff");
    assert_eq!(VoterId::from_bits(0x0f).as_str(), "f");
}

#[test]
fn client_values_kept_verbatim() {
    assert_eq!(VoterId::from_client("Not-Hex!").unwrap().as_str(), "Not-Hex!");
    assert!(VoterId::from_client("").is_none());
}

#[test]
fn client_codes() {
    assert_eq!(VoteError::BadRequest("x".into()).client_code().as_str(), "BAD_REQUEST");
    assert!(VoteError::BadRequest("x".into()).client_code().is_client_error());
    assert!(!VoteError::QueueUnavailable("x".into()).client_code().is_client_error());
}
