//! Signed-Cookie Session Store
//!
//! The whole session lives client-side:
//! `base64url(json payload) "." base64url(HMAC-SHA256(secret, name "=" payload))`.
//! Binding the cookie name into the MAC stops a value signed for one
//! cookie from being replayed under another.

use axum::http::{HeaderMap, HeaderValue};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::time::Duration;
use thiserror::Error;

use platform::cookie::{CookieConfig, extract_cookie, to_header_value};
use platform::crypto::{from_base64url, hmac_sha256, to_base64url, verify_hmac_sha256};

use crate::application::config::BlogConfig;
use crate::domain::session::Session;

#[derive(Debug, Error)]
pub enum SessionError {
    /// Cookie value is not `payload.signature` or does not decode
    #[error("Malformed session cookie")]
    Malformed,

    /// Signature does not match the payload
    #[error("Session cookie signature mismatch")]
    BadSignature,

    /// Cookie is older than the configured max age
    #[error("Session cookie expired")]
    Expired,

    #[error("Session encoding failed: {0}")]
    Encode(#[from] serde_json::Error),

    /// Encoded cookie is not a valid header value
    #[error("Session cookie is not a valid header value")]
    InvalidHeader,
}

/// Reads and writes the per-client session
pub trait SessionStore: Send + Sync + 'static {
    /// Session from the request cookie; a fresh session if there is none
    fn load(&self, headers: &HeaderMap) -> Result<Session, SessionError>;

    /// `Set-Cookie` value persisting the session
    fn save(&self, session: &Session) -> Result<HeaderValue, SessionError>;

    /// `Set-Cookie` value that discards the session cookie
    fn clear_cookie(&self) -> Result<HeaderValue, SessionError>;
}

#[derive(Serialize, Deserialize)]
struct SessionPayload {
    values: Map<String, Value>,
    /// Unix seconds
    issued_at: i64,
}

#[derive(Clone)]
pub struct CookieSessionStore {
    cookie: CookieConfig,
    secret: [u8; 32],
    max_age: Duration,
}

impl CookieSessionStore {
    pub fn new(config: &BlogConfig) -> Self {
        Self {
            cookie: config.session_cookie(),
            secret: config.session_secret,
            max_age: config.session_max_age,
        }
    }

    pub fn cookie_name(&self) -> &str {
        &self.cookie.name
    }

    fn signing_input(&self, payload_b64: &str) -> Vec<u8> {
        format!("{}={}", self.cookie.name, payload_b64).into_bytes()
    }

    fn encode_at(&self, session: &Session, issued_at: i64) -> Result<String, SessionError> {
        let payload = SessionPayload {
            values: session.values().clone(),
            issued_at,
        };
        let payload_b64 = to_base64url(&serde_json::to_vec(&payload)?);
        let tag = hmac_sha256(&self.secret, &self.signing_input(&payload_b64));

        Ok(format!("{}.{}", payload_b64, to_base64url(&tag)))
    }

    fn decode_at(&self, value: &str, now: i64) -> Result<Session, SessionError> {
        let (payload_b64, tag_b64) = value.split_once('.').ok_or(SessionError::Malformed)?;
        let tag = from_base64url(tag_b64).map_err(|_| SessionError::Malformed)?;

        if !verify_hmac_sha256(&self.secret, &self.signing_input(payload_b64), &tag) {
            return Err(SessionError::BadSignature);
        }

        let bytes = from_base64url(payload_b64).map_err(|_| SessionError::Malformed)?;
        let payload: SessionPayload =
            serde_json::from_slice(&bytes).map_err(|_| SessionError::Malformed)?;

        let age = now.saturating_sub(payload.issued_at);
        if age > self.max_age.as_secs() as i64 {
            return Err(SessionError::Expired);
        }

        Ok(Session::from_values(payload.values))
    }
}

impl SessionStore for CookieSessionStore {
    fn load(&self, headers: &HeaderMap) -> Result<Session, SessionError> {
        match extract_cookie(headers, &self.cookie.name) {
            Some(value) => self.decode_at(&value, Utc::now().timestamp()),
            None => Ok(Session::new()),
        }
    }

    fn save(&self, session: &Session) -> Result<HeaderValue, SessionError> {
        let value = self.encode_at(session, Utc::now().timestamp())?;
        to_header_value(self.cookie.build_set_cookie(&value)).ok_or(SessionError::InvalidHeader)
    }

    fn clear_cookie(&self) -> Result<HeaderValue, SessionError> {
        to_header_value(self.cookie.build_delete_cookie()).ok_or(SessionError::InvalidHeader)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::header;

    fn store() -> CookieSessionStore {
        CookieSessionStore::new(&BlogConfig::development())
    }

    /// Turn a Set-Cookie value into the request Cookie header a browser would send
    fn request_headers(set_cookie: &HeaderValue) -> HeaderMap {
        let pair = set_cookie.to_str().unwrap().split(';').next().unwrap();
        let mut headers = HeaderMap::new();
        headers.insert(header::COOKIE, HeaderValue::from_str(pair).unwrap());
        headers
    }

    #[test]
    fn test_missing_cookie_gives_new_session() {
        let session = store().load(&HeaderMap::new()).unwrap();
        assert!(session.is_new());
        assert!(session.values().is_empty());
    }

    #[test]
    fn test_save_then_load() {
        let store = store();
        let mut session = Session::new();
        session.sign_in("alice");

        let set_cookie = store.save(&session).unwrap();
        assert!(set_cookie.to_str().unwrap().starts_with("session-name="));

        let loaded = store.load(&request_headers(&set_cookie)).unwrap();
        assert!(!loaded.is_new());
        assert_eq!(loaded.username(), Some("alice"));
    }

    #[test]
    fn test_tampered_payload_is_rejected() {
        let store = store();
        let mut session = Session::new();
        session.sign_in("alice");
        let value = store.encode_at(&session, Utc::now().timestamp()).unwrap();
        let (_, tag) = value.split_once('.').unwrap();

        let forged_payload = to_base64url(
            &serde_json::to_vec(&SessionPayload {
                values: Map::from_iter([("username".to_string(), Value::from("mallory"))]),
                issued_at: Utc::now().timestamp(),
            })
            .unwrap(),
        );
        let forged = format!("{}.{}", forged_payload, tag);

        let err = store.decode_at(&forged, Utc::now().timestamp()).unwrap_err();
        assert!(matches!(err, SessionError::BadSignature));
    }

    #[test]
    fn test_other_secret_is_rejected() {
        let session = Session::new();
        let value = store().encode_at(&session, 0).unwrap();
        let err = store().decode_at(&value, 0).unwrap_err();
        assert!(matches!(err, SessionError::BadSignature));
    }

    #[test]
    fn test_other_cookie_name_is_rejected() {
        let config = BlogConfig::development();
        let store_a = CookieSessionStore::new(&config);
        let store_b = CookieSessionStore::new(&BlogConfig {
            session_cookie_name: "other".to_string(),
            ..config
        });

        let value = store_a.encode_at(&Session::new(), 0).unwrap();
        assert!(matches!(
            store_b.decode_at(&value, 0),
            Err(SessionError::BadSignature)
        ));
    }

    #[test]
    fn test_malformed_values() {
        let store = store();
        for value in ["", "nodot", "a.b", "!!!.???"] {
            let err = store.decode_at(value, 0).unwrap_err();
            assert!(
                matches!(err, SessionError::Malformed | SessionError::BadSignature),
                "unexpected {err:?} for {value:?}"
            );
        }
    }

    #[test]
    fn test_expired_cookie_is_rejected() {
        let store = store();
        let issued_at = 1_000_000;
        let value = store.encode_at(&Session::new(), issued_at).unwrap();

        let max_age = store.max_age.as_secs() as i64;
        assert!(store.decode_at(&value, issued_at + max_age).is_ok());
        assert!(matches!(
            store.decode_at(&value, issued_at + max_age + 1),
            Err(SessionError::Expired)
        ));
    }

    #[test]
    fn test_clear_cookie_expires() {
        let cookie = store().clear_cookie().unwrap();
        let cookie = cookie.to_str().unwrap();
        assert!(cookie.starts_with("session-name=;"));
        assert!(cookie.contains("Max-Age=0"));
    }
}
