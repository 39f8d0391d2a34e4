//! JWT token service
//!
//! Token generation, validation and parsing. Tokens carry identity only
//! (employee id, username, position); permissions are re-derived from
//! current grants on every check and never embedded in the token.

use chrono::{Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Development fallback secret; production requires JWT_SECRET.
const DEV_FALLBACK_SECRET: &str = "fleet-server-development-secret-do-not-deploy";

/// JWT configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JwtConfig {
    /// Signing secret (at least 32 bytes)
    pub secret: String,
    /// Token lifetime in minutes
    pub expiration_minutes: i64,
    /// Token issuer
    pub issuer: String,
    /// Token audience
    pub audience: String,
}

impl Default for JwtConfig {
    fn default() -> Self {
        let secret = match std::env::var("JWT_SECRET") {
            Ok(secret) if secret.len() >= 32 => secret,
            Ok(_) => {
                tracing::warn!("JWT_SECRET is shorter than 32 characters; using dev fallback");
                DEV_FALLBACK_SECRET.to_string()
            }
            Err(_) => {
                #[cfg(debug_assertions)]
                {
                    tracing::warn!("JWT_SECRET not set; using development fallback key");
                    DEV_FALLBACK_SECRET.to_string()
                }
                #[cfg(not(debug_assertions))]
                {
                    panic!("JWT_SECRET environment variable must be set in production builds");
                }
            }
        };

        Self {
            secret,
            expiration_minutes: std::env::var("JWT_EXPIRATION_MINUTES")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(1440),
            issuer: std::env::var("JWT_ISSUER").unwrap_or_else(|_| "fleet-server".to_string()),
            audience: std::env::var("JWT_AUDIENCE").unwrap_or_else(|_| "fleet-admin".to_string()),
        }
    }
}

/// Claims stored in the token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Employee id (subject)
    pub sub: String,
    /// Username
    pub username: String,
    /// Display name
    pub name: String,
    /// Position id (grants are looked up through this at check time)
    pub position_id: i64,
    /// Position name
    pub position: String,
    /// Token type
    pub token_type: String,
    /// Expiration timestamp
    pub exp: i64,
    /// Issued-at timestamp
    pub iat: i64,
    /// Issuer
    pub iss: String,
    /// Audience
    pub aud: String,
}

/// JWT errors
#[derive(Error, Debug)]
pub enum JwtError {
    #[error("Invalid token: {0}")]
    InvalidToken(String),

    #[error("Token expired")]
    ExpiredToken,

    #[error("Invalid signature")]
    InvalidSignature,

    #[error("Token generation failed: {0}")]
    GenerationFailed(String),
}

/// JWT token service
#[derive(Debug, Clone)]
pub struct JwtService {
    pub config: JwtConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl JwtService {
    /// Create a service with the default (environment) configuration
    pub fn new() -> Self {
        Self::with_config(JwtConfig::default())
    }

    /// Create a service with an explicit configuration
    pub fn with_config(config: JwtConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());

        Self {
            config,
            encoding_key,
            decoding_key,
        }
    }

    /// Generate a token for an authenticated employee
    pub fn generate_token(
        &self,
        employee_id: i64,
        username: &str,
        name: &str,
        position_id: i64,
        position_name: &str,
    ) -> Result<String, JwtError> {
        let now = Utc::now();
        let expiration = now + Duration::minutes(self.config.expiration_minutes);

        let claims = Claims {
            sub: employee_id.to_string(),
            username: username.to_string(),
            name: name.to_string(),
            position_id,
            position: position_name.to_string(),
            token_type: "access".to_string(),
            exp: expiration.timestamp(),
            iat: now.timestamp(),
            iss: self.config.issuer.clone(),
            aud: self.config.audience.clone(),
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| JwtError::GenerationFailed(e.to_string()))
    }

    /// Validate and decode a token
    pub fn validate_token(&self, token: &str) -> Result<Claims, JwtError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_audience(&[&self.config.audience]);
        validation.set_issuer(&[&self.config.issuer]);
        validation.set_required_spec_claims(&["sub", "exp", "iat", "iss", "aud"]);

        let token_data = decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
            match e.kind() {
                ErrorKind::ExpiredSignature => JwtError::ExpiredToken,
                ErrorKind::InvalidSignature => JwtError::InvalidSignature,
                ErrorKind::InvalidToken => JwtError::InvalidToken(e.to_string()),
                _ => JwtError::InvalidToken(format!("Token validation failed: {e}")),
            }
        })?;

        Ok(token_data.claims)
    }

    /// Extract the token from an Authorization header value
    pub fn extract_from_header(header: &str) -> Option<&str> {
        header.strip_prefix("Bearer ")
    }
}

impl Default for JwtService {
    fn default() -> Self {
        Self::new()
    }
}

/// Current user context, parsed from validated JWT claims
///
/// Created by the authentication middleware and injected into request
/// extensions. Carries identity only: permission checks go back to the
/// database through `position_id`.
#[derive(Debug, Clone)]
pub struct CurrentUser {
    /// Employee id
    pub id: i64,
    /// Username
    pub username: String,
    /// Display name
    pub name: String,
    /// Position id
    pub position_id: i64,
    /// Position name
    pub position_name: String,
}

impl TryFrom<Claims> for CurrentUser {
    type Error = JwtError;

    fn try_from(claims: Claims) -> Result<Self, Self::Error> {
        let id = claims
            .sub
            .parse::<i64>()
            .map_err(|_| JwtError::InvalidToken(format!("Malformed subject: {}", claims.sub)))?;

        Ok(Self {
            id,
            username: claims.username,
            name: claims.name,
            position_id: claims.position_id,
            position_name: claims.position,
        })
    }
}

/// Check a required permission against a granted set.
///
/// Rules:
/// 1. Exact name match
/// 2. `module:*` grants every verb of the module
/// 3. The literal grant `all` matches everything
pub fn permission_matches(granted: &[String], required: &str) -> bool {
    granted.iter().any(|p| {
        if p == required || p == "all" {
            return true;
        }
        if let Some(prefix) = p.strip_suffix(":*") {
            required.starts_with(&format!("{prefix}:"))
        } else {
            false
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_service() -> JwtService {
        JwtService::with_config(JwtConfig {
            secret: "unit-test-secret-key-of-sufficient-length".to_string(),
            expiration_minutes: 60,
            issuer: "fleet-server".to_string(),
            audience: "fleet-admin".to_string(),
        })
    }

    #[test]
    fn test_jwt_generation_and_validation() {
        let service = test_service();

        let token = service
            .generate_token(7, "mlopez", "Maria Lopez", 2, "Dispatcher")
            .expect("Failed to generate test token");

        let claims = service
            .validate_token(&token)
            .expect("Failed to validate test token");

        assert_eq!(claims.sub, "7");
        assert_eq!(claims.username, "mlopez");
        assert_eq!(claims.position_id, 2);
        assert_eq!(claims.position, "Dispatcher");
    }

    #[test]
    fn test_wrong_audience_rejected() {
        let service = test_service();
        let token = service
            .generate_token(1, "admin", "Administrator", 1, "Administrator")
            .unwrap();

        let mut other_config = service.config.clone();
        other_config.audience = "other-audience".to_string();
        let other = JwtService::with_config(other_config);

        assert!(other.validate_token(&token).is_err());
    }

    #[test]
    fn test_current_user_from_claims() {
        let service = test_service();
        let token = service
            .generate_token(42, "jdoe", "J. Doe", 3, "Inspector")
            .unwrap();
        let claims = service.validate_token(&token).unwrap();
        let user = CurrentUser::try_from(claims).unwrap();
        assert_eq!(user.id, 42);
        assert_eq!(user.position_id, 3);
    }

    #[test]
    fn test_permission_matching() {
        let granted = vec!["routes:manage".to_string(), "reports:*".to_string()];
        assert!(permission_matches(&granted, "routes:manage"));
        assert!(permission_matches(&granted, "reports:view"));
        assert!(!permission_matches(&granted, "employees:manage"));

        let all = vec!["all".to_string()];
        assert!(permission_matches(&all, "anything:at_all"));

        let none: Vec<String> = vec![];
        assert!(!permission_matches(&none, "reports:view"));
    }
}
