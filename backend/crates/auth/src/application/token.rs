//! Session Token
//!
//! Stateless signed claim carrying user id and role. Nothing is stored
//! server-side; the server only verifies signature and expiry.
//!
//! Wire format: `base64url(claims JSON) . base64url(HMAC-SHA256 signature)`.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::Utc;
use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use uuid::Uuid;

use crate::application::config::AuthConfig;
use crate::domain::value_object::{user_id::UserId, user_role::UserRole};
use crate::error::{AuthError, AuthResult};

/// Claims embedded in a session token
///
/// The role claim is a cached hint: admin authorization re-reads the
/// stored role (see `AuthorizeUseCase::ensure_admin`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Subject: user id
    pub sub: Uuid,
    /// Role at issuance
    pub role: UserRole,
    /// Issued at (Unix seconds)
    pub iat: i64,
    /// Expires at (Unix seconds)
    pub exp: i64,
}

impl TokenClaims {
    /// Build claims valid from now for the configured TTL
    pub fn new(user_id: &UserId, role: UserRole, ttl_secs: i64) -> Self {
        let now = Utc::now().timestamp();
        Self {
            sub: *user_id.as_uuid(),
            role,
            iat: now,
            exp: now + ttl_secs,
        }
    }

    /// Check if the claim is past its expiry
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() > self.exp
    }

    /// Typed user id
    pub fn user_id(&self) -> UserId {
        UserId::from_uuid(self.sub)
    }
}

/// Issue a signed session token for a user
pub fn issue_token(user_id: &UserId, role: UserRole, config: &AuthConfig) -> AuthResult<String> {
    let claims = TokenClaims::new(user_id, role, config.token_ttl_secs());
    sign_claims(&claims, config)
}

/// Sign an explicit set of claims (expiry included as given)
pub fn sign_claims(claims: &TokenClaims, config: &AuthConfig) -> AuthResult<String> {
    let payload = serde_json::to_vec(claims)
        .map_err(|e| AuthError::Internal(format!("Token serialization failed: {e}")))?;
    let payload_b64 = URL_SAFE_NO_PAD.encode(&payload);

    let mut mac = Hmac::<Sha256>::new_from_slice(&config.token_secret)
        .expect("HMAC can take key of any size");
    mac.update(payload_b64.as_bytes());
    let signature = mac.finalize().into_bytes();

    Ok(format!(
        "{}.{}",
        payload_b64,
        URL_SAFE_NO_PAD.encode(signature)
    ))
}

/// Verify a session token: signature first, then expiry
pub fn verify_token(token: &str, config: &AuthConfig) -> AuthResult<TokenClaims> {
    let parts: Vec<&str> = token.split('.').collect();
    if parts.len() != 2 {
        return Err(AuthError::TokenInvalid);
    }

    let payload_b64 = parts[0];
    let signature_b64 = parts[1];

    let mut mac = Hmac::<Sha256>::new_from_slice(&config.token_secret)
        .expect("HMAC can take key of any size");
    mac.update(payload_b64.as_bytes());

    let signature = URL_SAFE_NO_PAD
        .decode(signature_b64)
        .map_err(|_| AuthError::TokenInvalid)?;

    mac.verify_slice(&signature)
        .map_err(|_| AuthError::TokenInvalid)?;

    let payload = URL_SAFE_NO_PAD
        .decode(payload_b64)
        .map_err(|_| AuthError::TokenInvalid)?;

    let claims: TokenClaims =
        serde_json::from_slice(&payload).map_err(|_| AuthError::TokenInvalid)?;

    if claims.is_expired() {
        return Err(AuthError::TokenInvalid);
    }

    Ok(claims)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> AuthConfig {
        AuthConfig::with_random_secret()
    }

    #[test]
    fn test_issue_and_verify_roundtrip() {
        let config = test_config();
        let user_id = UserId::new();

        let token = issue_token(&user_id, UserRole::Admin, &config).unwrap();
        let claims = verify_token(&token, &config).unwrap();

        assert_eq!(claims.sub, *user_id.as_uuid());
        assert_eq!(claims.role, UserRole::Admin);
        assert!(!claims.is_expired());
    }

    #[test]
    fn test_tampered_token_rejected() {
        let config = test_config();
        let token = issue_token(&UserId::new(), UserRole::Shopper, &config).unwrap();

        // Flip a character in the payload
        let mut tampered: Vec<char> = token.chars().collect();
        tampered[0] = if tampered[0] == 'A' { 'B' } else { 'A' };
        let tampered: String = tampered.into_iter().collect();

        assert!(matches!(
            verify_token(&tampered, &config),
            Err(AuthError::TokenInvalid)
        ));
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let config = test_config();
        let other = test_config();
        let token = issue_token(&UserId::new(), UserRole::Shopper, &config).unwrap();

        assert!(verify_token(&token, &other).is_err());
    }

    #[test]
    fn test_expired_token_rejected() {
        let config = test_config();
        let user_id = UserId::new();

        // Claims that expired one hour ago
        let now = Utc::now().timestamp();
        let claims = TokenClaims {
            sub: *user_id.as_uuid(),
            role: UserRole::Shopper,
            iat: now - 8 * 24 * 3600,
            exp: now - 3600,
        };
        let token = sign_claims(&claims, &config).unwrap();

        assert!(matches!(
            verify_token(&token, &config),
            Err(AuthError::TokenInvalid)
        ));
    }

    #[test]
    fn test_malformed_token_rejected() {
        let config = test_config();
        assert!(verify_token("", &config).is_err());
        assert!(verify_token("only-one-part", &config).is_err());
        assert!(verify_token("a.b.c", &config).is_err());
        assert!(verify_token("not base64!.sig", &config).is_err());
    }
}
