//! Bearer credential issued by the WiziShop login endpoint.
//!
//! The login endpoint answers with a compact three-segment token
//! (`header.payload.signature`). This module parses it into a [`Credential`]
//! whose payload claims can be read back, most notably `exp` (expiry) and
//! `id_shop` (the shop the token is scoped to).
//!
//! The signature segment is never decoded nor verified: the token is only
//! ever sent back to the server that issued it, which does the verification.

use std::fmt;
use std::str::FromStr;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use chrono::{DateTime, TimeZone, Utc};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};
use thiserror::Error;

/// Timestamp assumed when a token carries no `exp` claim.
///
/// One second after the epoch, so a token without expiry always reads as
/// expired.
const DEFAULT_EXPIRY_TIMESTAMP: i64 = 1;

/// Errors raised when a token string is not a well-formed credential.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MalformedCredentialError {
    /// The token string is empty.
    #[error("Token cannot be empty")]
    Empty,

    /// The token does not have exactly three dot-separated segments.
    #[error("Wrong number of segments: expected 3, found {count}")]
    WrongSegmentCount {
        /// The number of segments found.
        count: usize,
    },

    /// The header segment is not base64url-encoded JSON object.
    #[error("Invalid header encoding")]
    InvalidHeaderEncoding,

    /// The payload segment is not base64url-encoded JSON object.
    #[error("Invalid claims encoding")]
    InvalidClaimsEncoding,
}

/// An immutable, parsed bearer credential.
///
/// # Example
///
/// ```rust
/// use wizishop_api::Credential;
///
/// // {"alg":"RS256","typ":"JWS"} . {"exp":4102444800,"id_shop":131} . Signature
/// let token = "eyJhbGciOiJSUzI1NiIsInR5cCI6IkpXUyJ9.eyJleHAiOjQxMDI0NDQ4MDAsImlkX3Nob3AiOjEzMX0.Signature";
/// let credential = Credential::parse(token).unwrap();
///
/// assert_eq!(credential.token(), token);
/// assert_eq!(credential.shop_id().as_deref(), Some("131"));
/// assert!(!credential.expired());
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Credential {
    token: String,
    claims: Map<String, Value>,
}

impl Credential {
    /// Parses a compact token string.
    ///
    /// The header segment must decode to a JSON object but is not retained;
    /// the payload segment becomes the claims.
    ///
    /// # Errors
    ///
    /// Returns [`MalformedCredentialError`] if the string is empty, does not
    /// have exactly three segments, or if the header or payload segment is
    /// not a base64url-encoded JSON object.
    pub fn parse(token: &str) -> Result<Self, MalformedCredentialError> {
        if token.is_empty() {
            return Err(MalformedCredentialError::Empty);
        }

        let segments: Vec<&str> = token.split('.').collect();
        let [header, payload, _signature] = segments.as_slice() else {
            return Err(MalformedCredentialError::WrongSegmentCount {
                count: segments.len(),
            });
        };

        decode_json_object(header).ok_or(MalformedCredentialError::InvalidHeaderEncoding)?;
        let claims =
            decode_json_object(payload).ok_or(MalformedCredentialError::InvalidClaimsEncoding)?;

        Ok(Self {
            token: token.to_string(),
            claims,
        })
    }

    /// Returns the raw token, unchanged, for use as a bearer credential.
    #[must_use]
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Returns all payload claims.
    #[must_use]
    pub const fn claims(&self) -> &Map<String, Value> {
        &self.claims
    }

    /// Returns the claim stored under `key`, if present.
    #[must_use]
    pub fn claim(&self, key: &str) -> Option<&Value> {
        self.claims.get(key)
    }

    /// Returns the claim stored under `key`, or `default` when it is absent.
    #[must_use]
    pub fn claim_or(&self, key: &str, default: Value) -> Value {
        self.claims.get(key).cloned().unwrap_or(default)
    }

    /// Returns the instant the token expires at.
    ///
    /// Reads `exp` as a Unix timestamp in seconds. A missing or non-numeric
    /// `exp` falls back to one second after the epoch. Timestamps beyond
    /// chrono's range are clamped to [`DateTime::MAX_UTC`] or
    /// [`DateTime::MIN_UTC`].
    #[must_use]
    pub fn expires_at(&self) -> DateTime<Utc> {
        let timestamp = self.expiry_timestamp();

        Utc.timestamp_opt(timestamp, 0).single().unwrap_or(if timestamp > 0 {
            DateTime::<Utc>::MAX_UTC
        } else {
            DateTime::<Utc>::MIN_UTC
        })
    }

    /// Returns `true` if `now` is strictly after the expiry instant.
    #[must_use]
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now.timestamp() > self.expiry_timestamp()
    }

    /// The `exp` claim in whole seconds, saturating for out-of-range floats.
    fn expiry_timestamp(&self) -> i64 {
        self.claim("exp")
            .and_then(|exp| {
                exp.as_i64()
                    .or_else(|| exp.as_f64().map(|secs| secs.trunc() as i64))
            })
            .unwrap_or(DEFAULT_EXPIRY_TIMESTAMP)
    }

    /// Returns `true` if the token has expired as of the current time.
    #[must_use]
    pub fn expired(&self) -> bool {
        self.is_expired(Utc::now())
    }

    /// Returns the shop the token is scoped to (`id_shop` claim).
    ///
    /// Numeric and string claims are both accepted. A missing, null, zero
    /// or empty claim means the token is not scoped to a shop.
    #[must_use]
    pub fn shop_id(&self) -> Option<String> {
        match self.claim("id_shop")? {
            Value::Number(number) if number.as_f64() != Some(0.0) => Some(number.to_string()),
            Value::String(id) if !id.is_empty() && id != "0" => Some(id.clone()),
            _ => None,
        }
    }
}

/// Decodes a base64url segment into a JSON object.
///
/// `-` and `_` are mapped to `+` and `/` and the input is padded with `=`
/// to a multiple of four before standard base64 decoding.
fn decode_json_object(segment: &str) -> Option<Map<String, Value>> {
    let mut standard: String = segment
        .chars()
        .map(|c| match c {
            '-' => '+',
            '_' => '/',
            other => other,
        })
        .collect();

    let remainder = standard.len() % 4;
    if remainder != 0 {
        standard.push_str(&"=".repeat(4 - remainder));
    }

    let bytes = STANDARD.decode(standard).ok()?;
    match serde_json::from_slice(&bytes).ok()? {
        Value::Object(map) => Some(map),
        _ => None,
    }
}

impl FromStr for Credential {
    type Err = MalformedCredentialError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.token)
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("token", &"*****")
            .field("claims", &self.claims)
            .finish()
    }
}

impl Serialize for Credential {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.token)
    }
}

impl<'de> Deserialize<'de> for Credential {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(de::Error::custom)
    }
}

// Verify Credential is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Credential>();
};

#[cfg(test)]
mod tests {
    use super::*;
    use base64::engine::general_purpose::URL_SAFE_NO_PAD;
    use chrono::Duration;
    use serde_json::json;

    fn encode_segment(value: &Value) -> String {
        URL_SAFE_NO_PAD.encode(value.to_string())
    }

    fn build_token(payload: &Value) -> String {
        format!(
            "{}.{}.Signature",
            encode_segment(&json!({"alg": "RS256", "typ": "JWS"})),
            encode_segment(payload)
        )
    }

    fn token_expiring_at(exp: DateTime<Utc>) -> String {
        build_token(&json!({
            "exp": exp.timestamp(),
            "username": "test",
            "id_shop": 131,
            "ac_shop": 11,
            "user_id": 0,
            "iat": Utc::now().timestamp(),
        }))
    }

    #[test]
    fn test_token_expired_for_a_month_is_expired() {
        let token = token_expiring_at(Utc::now() - Duration::days(30));
        let credential = Credential::parse(&token).unwrap();

        assert!(credential.expired());
    }

    #[test]
    fn test_token_valid_for_thirty_days_is_not_expired() {
        let token = token_expiring_at(Utc::now() + Duration::days(30));
        let credential = Credential::parse(&token).unwrap();

        assert!(!credential.expired());
    }

    #[test]
    fn test_is_expired_is_strictly_after_exp() {
        let token = build_token(&json!({"exp": 1_700_000_000}));
        let credential = Credential::parse(&token).unwrap();
        let exp = Utc.timestamp_opt(1_700_000_000, 0).unwrap();

        assert!(!credential.is_expired(exp - Duration::seconds(1)));
        assert!(!credential.is_expired(exp));
        assert!(credential.is_expired(exp + Duration::seconds(1)));
    }

    #[test]
    fn test_exp_beyond_date_range_is_far_future() {
        let credential =
            Credential::parse(&build_token(&json!({"exp": 100_000_000_000_000_i64}))).unwrap();

        assert!(!credential.expired());
        assert!(!credential.is_expired(DateTime::<Utc>::MAX_UTC));
        assert_eq!(credential.expires_at(), DateTime::<Utc>::MAX_UTC);
    }

    #[test]
    fn test_exp_before_date_range_is_expired() {
        let credential =
            Credential::parse(&build_token(&json!({"exp": -100_000_000_000_000_i64}))).unwrap();

        assert!(credential.expired());
        assert!(credential.is_expired(DateTime::<Utc>::MIN_UTC));
        assert_eq!(credential.expires_at(), DateTime::<Utc>::MIN_UTC);
    }

    #[test]
    fn test_missing_exp_defaults_to_one_second_after_epoch() {
        let credential = Credential::parse(&build_token(&json!({"id_shop": 1}))).unwrap();

        assert_eq!(credential.expires_at().timestamp(), 1);
        assert!(credential.is_expired(Utc.timestamp_opt(2, 0).unwrap()));
        assert!(!credential.is_expired(Utc.timestamp_opt(1, 0).unwrap()));
    }

    #[test]
    fn test_float_exp_is_truncated() {
        let credential = Credential::parse(&build_token(&json!({"exp": 1_700_000_000.9}))).unwrap();
        assert_eq!(credential.expires_at().timestamp(), 1_700_000_000);
    }

    #[test]
    fn test_token_is_preserved_verbatim() {
        let token = build_token(&json!({"exp": 10}));
        let credential = Credential::parse(&token).unwrap();

        assert_eq!(credential.token(), token);
        assert_eq!(credential.to_string(), token);
    }

    #[test]
    fn test_claim_returns_exact_payload_values() {
        let payload = json!({
            "string": "value",
            "number": 42,
            "float": 1.5,
            "bool": true,
            "null": null,
            "array": [1, "two", {"three": 3}],
            "object": {"nested": ["x"]},
        });
        let credential = Credential::parse(&build_token(&payload)).unwrap();

        for (key, value) in payload.as_object().unwrap() {
            assert_eq!(credential.claim(key), Some(value), "claim {key}");
        }
        assert_eq!(credential.claim("absent"), None);
    }

    #[test]
    fn test_claim_or_falls_back_to_default() {
        let credential = Credential::parse(&build_token(&json!({"username": "test"}))).unwrap();

        assert_eq!(credential.claim_or("username", json!("x")), json!("test"));
        assert_eq!(credential.claim_or("missing", json!(5)), json!(5));
        assert_eq!(credential.claim_or("missing", Value::Null), Value::Null);
    }

    #[test]
    fn test_header_claims_are_not_retained() {
        let credential = Credential::parse(&build_token(&json!({"sub": "1"}))).unwrap();
        assert!(credential.claim("alg").is_none());
        assert_eq!(credential.claims().len(), 1);
    }

    #[test]
    fn test_empty_token_is_rejected() {
        assert_eq!(Credential::parse(""), Err(MalformedCredentialError::Empty));
    }

    #[test]
    fn test_wrong_segment_count_is_rejected() {
        let header = encode_segment(&json!({"alg": "RS256"}));
        let payload = encode_segment(&json!({"exp": 1}));

        for token in [
            "no-dots".to_string(),
            format!("{header}.{payload}"),
            format!("{header}.{payload}.sig.extra"),
            "..".repeat(2),
        ] {
            assert!(
                matches!(
                    Credential::parse(&token),
                    Err(MalformedCredentialError::WrongSegmentCount { .. })
                ),
                "expected {token:?} to be rejected"
            );
        }

        assert_eq!(
            Credential::parse("a.b"),
            Err(MalformedCredentialError::WrongSegmentCount { count: 2 })
        );
    }

    #[test]
    fn test_invalid_header_is_rejected() {
        let payload = encode_segment(&json!({"exp": 1}));

        assert_eq!(
            Credential::parse(&format!("!!!.{payload}.sig")),
            Err(MalformedCredentialError::InvalidHeaderEncoding)
        );
        assert_eq!(
            Credential::parse(&format!("{}.{payload}.sig", URL_SAFE_NO_PAD.encode("not json"))),
            Err(MalformedCredentialError::InvalidHeaderEncoding)
        );
    }

    #[test]
    fn test_non_object_payload_is_rejected() {
        let header = encode_segment(&json!({"alg": "RS256"}));

        for payload in [json!([1, 2]), json!(123), json!("text")] {
            assert_eq!(
                Credential::parse(&format!("{header}.{}.sig", encode_segment(&payload))),
                Err(MalformedCredentialError::InvalidClaimsEncoding)
            );
        }
    }

    #[test]
    fn test_url_safe_alphabet_and_missing_padding_are_accepted() {
        // Encodes to a segment containing both `-` and `_`, without padding.
        let payload = json!({"k": "?>?>?>", "id_shop": "42"});
        let credential = Credential::parse(&build_token(&payload)).unwrap();

        assert_eq!(credential.claim("k"), Some(&json!("?>?>?>")));
        assert_eq!(credential.shop_id().as_deref(), Some("42"));
    }

    #[test]
    fn test_shop_id_absent_or_zero_means_no_shop() {
        for payload in [json!({}), json!({"id_shop": null}), json!({"id_shop": 0}), json!({"id_shop": ""})] {
            let credential = Credential::parse(&build_token(&payload)).unwrap();
            assert_eq!(credential.shop_id(), None);
        }
    }

    #[test]
    fn test_debug_masks_token() {
        let token = build_token(&json!({"exp": 10}));
        let credential = Credential::parse(&token).unwrap();

        let debug = format!("{credential:?}");
        assert!(!debug.contains(&token));
        assert!(debug.contains("*****"));
    }

    #[test]
    fn test_serde_roundtrip_uses_raw_token() {
        let token = build_token(&json!({"exp": 10, "id_shop": 3}));
        let credential: Credential = token.parse().unwrap();

        let json = serde_json::to_string(&credential).unwrap();
        assert_eq!(json, format!("\"{token}\""));

        let restored: Credential = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, credential);

        let invalid: Result<Credential, _> = serde_json::from_str(r#""a.b""#);
        assert!(invalid.is_err());
    }
}
