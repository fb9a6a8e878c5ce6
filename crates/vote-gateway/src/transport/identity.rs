//! Voter identity cookie.
//!
//! The identity lives entirely client-side: read from `Cookie`, generated when
//! missing, and written back on every response. The cookie carries no
//! `Expires`/`Max-Age`, so it lasts for the browser session.

use axum::http::{
    header::{COOKIE, SET_COOKIE},
    HeaderMap, HeaderValue,
};
use vote_core::error::{Result, VoteError};
use vote_core::VoterId;

pub const COOKIE_NAME: &str = "voter_id";

/// Find the first non-empty `voter_id` cookie across all `Cookie` headers.
///
/// Headers are split as raw bytes: other cookies may carry non-ASCII values
/// and must not hide ours. Only the `voter_id` value has to be a visible
/// ASCII string.
pub fn from_headers(headers: &HeaderMap) -> Option<VoterId> {
    headers
        .get_all(COOKIE)
        .iter()
        .flat_map(|v| v.as_bytes().split(|b| *b == b';'))
        .filter_map(|pair| {
            let pair = pair.trim_ascii();
            let eq = pair.iter().position(|b| *b == b'=')?;
            let (name, value) = (&pair[..eq], pair[eq + 1..].trim_ascii());
            if name != COOKIE_NAME.as_bytes() {
                return None;
            }
            HeaderValue::from_bytes(value).ok()?.to_str().ok().and_then(VoterId::from_client)
        })
        .next()
}

/// Reuse the client's identity verbatim, or mint a fresh one.
pub fn resolve(headers: &HeaderMap) -> (VoterId, bool) {
    match from_headers(headers) {
        Some(id) => (id, false),
        None => (VoterId::generate(), true),
    }
}

/// `Set-Cookie` header value for `id`.
pub fn set_cookie(id: &VoterId) -> Result<(axum::http::HeaderName, HeaderValue)> {
    let value = HeaderValue::from_str(&format!("{COOKIE_NAME}={id}; Path=/"))
        .map_err(|e| VoteError::Internal(format!("voter id not encodable as cookie: {e}")))?;
    Ok((SET_COOKIE, value))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(cookies: &[&str]) -> HeaderMap {
        let mut h = HeaderMap::new();
        for c in cookies {
            h.append(COOKIE, HeaderValue::from_str(c).unwrap());
        }
        h
    }

    #[test]
    fn reads_cookie_among_others() {
        let h = headers(&["theme=dark; voter_id=abc123; lang=en"]);
        assert_eq!(from_headers(&h).unwrap().as_str(), "abc123");
    }

    #[test]
    fn reads_cookie_from_second_header() {
        let h = headers(&["theme=dark", "voter_id=beef"]);
        assert_eq!(from_headers(&h).unwrap().as_str(), "beef");
    }

    #[test]
    fn non_ascii_neighbour_cookie_is_ignored() {
        let mut h = HeaderMap::new();
        h.append(
            COOKIE,
            HeaderValue::from_bytes(b"theme=caf\xc3\xa9; voter_id=abc123").unwrap(),
        );
        assert_eq!(from_headers(&h).unwrap().as_str(), "abc123");
    }

    #[test]
    fn non_ascii_voter_id_is_discarded() {
        let mut h = HeaderMap::new();
        h.append(COOKIE, HeaderValue::from_bytes(b"voter_id=caf\xc3\xa9").unwrap());
        assert!(from_headers(&h).is_none());
    }

    #[test]
    fn empty_voter_id_does_not_shadow_later_one() {
        let h = headers(&["voter_id=; theme=dark", "voter_id=cafe"]);
        assert_eq!(from_headers(&h).unwrap().as_str(), "cafe");

        let h = headers(&["voter_id=; voter_id=beef"]);
        assert_eq!(from_headers(&h).unwrap().as_str(), "beef");
    }

    #[test]
    fn empty_or_missing_cookie_generates() {
        assert!(from_headers(&headers(&["voter_id="])).is_none());
        assert!(from_headers(&headers(&["other_voter_id=1"])).is_none());

        let (id, fresh) = resolve(&HeaderMap::new());
        assert!(fresh);
        assert!(!id.as_str().is_empty());
    }

    #[test]
    fn set_cookie_is_session_scoped() {
        let (name, value) = set_cookie(&VoterId::from_bits(0xabc)).unwrap();
        assert_eq!(name, SET_COOKIE);
        assert_eq!(value.to_str().unwrap(), "voter_id=abc; Path=/");
    }
}
