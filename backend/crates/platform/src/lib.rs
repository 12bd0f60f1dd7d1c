//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Cryptographic utilities (HMAC-SHA256 signing, Base64, random secrets)
//! - Cookie attribute building and `Cookie` header parsing

pub mod cookie;
pub mod crypto;
