//! Application Configuration
//!
//! Configuration for the Blog application layer. Everything the request
//! pipeline needs (cookie name, signing secret, storage location) is passed
//! in through this struct rather than held in process-wide state.

use std::time::Duration;

use platform::cookie::CookieConfig;

/// Re-export SameSite from platform
pub use platform::cookie::SameSite;

/// Blog application configuration
#[derive(Debug, Clone)]
pub struct BlogConfig {
    /// Session cookie name
    pub session_cookie_name: String,
    /// Session secret key for HMAC signing (32 bytes)
    pub session_secret: [u8; 32],
    /// Session cookie lifetime (30 days)
    pub session_max_age: Duration,
    /// Whether to require Secure cookie
    pub cookie_secure: bool,
    /// SameSite policy
    pub cookie_same_site: SameSite,
    /// SQLite database URL
    pub database_url: String,
}

impl Default for BlogConfig {
    fn default() -> Self {
        Self {
            session_cookie_name: "session-name".to_string(),
            session_secret: [0u8; 32],
            session_max_age: Duration::from_secs(30 * 24 * 3600), // 30 days
            cookie_secure: true,
            cookie_same_site: SameSite::Lax,
            database_url: "sqlite:///tmp/entry_db.bin".to_string(),
        }
    }
}

impl BlogConfig {
    /// Create config with a random session secret
    pub fn with_random_secret() -> Self {
        Self {
            session_secret: platform::crypto::random_secret(),
            ..Default::default()
        }
    }

    /// Create config for development (insecure cookie)
    pub fn development() -> Self {
        Self {
            cookie_secure: false,
            ..Self::with_random_secret()
        }
    }

    /// Cookie attributes for the session cookie
    pub fn session_cookie(&self) -> CookieConfig {
        CookieConfig {
            name: self.session_cookie_name.clone(),
            secure: self.cookie_secure,
            http_only: true,
            same_site: self.cookie_same_site,
            path: "/".to_string(),
            max_age: Some(self.session_max_age),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_development_config() {
        let config = BlogConfig::development();
        assert!(!config.cookie_secure);
        assert_ne!(config.session_secret, [0u8; 32]);
        assert_eq!(config.session_cookie_name, "session-name");
    }

    #[test]
    fn test_session_cookie_attributes() {
        let config = BlogConfig::default();
        let cookie = config.session_cookie();
        assert_eq!(cookie.name, "session-name");
        assert!(cookie.http_only);
        assert!(cookie.secure);
        assert_eq!(cookie.max_age, Some(Duration::from_secs(2_592_000)));
    }
}
