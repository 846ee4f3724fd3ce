//! JWT access token decoding
//!
//! Verifies HS256 access tokens issued by the session service and extracts
//! the subject and the project context the token was issued for.

use jsonwebtoken::{Algorithm, DecodingKey, TokenData, Validation, decode, errors::ErrorKind};
use serde::{Deserialize, Serialize};

use crate::config::AuthConfig;
use crate::error::{Result, ServiceError};

/// Access token payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessTokenClaims {
    /// 用户ID
    pub sub: String,
    /// 令牌所属项目
    #[serde(rename = "projectId")]
    pub project_id: String,
    /// 签发时间
    pub iat: i64,
    /// 过期时间
    pub exp: i64,
    /// 签发者
    pub iss: String,
    /// 受众
    pub aud: String,
}

/// 解码后的访问令牌
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedAccessToken {
    /// 令牌主体（项目用户ID）
    pub user_id: String,
    /// 令牌签发时所在的项目上下文
    pub project_id: String,
}

impl From<AccessTokenClaims> for DecodedAccessToken {
    fn from(claims: AccessTokenClaims) -> Self {
        Self {
            user_id: claims.sub,
            project_id: claims.project_id,
        }
    }
}

/// Decodes an opaque access token into its subject and project context.
pub trait AccessTokenDecoder: Send + Sync {
    /// Any failure (bad signature, expiry, malformed payload) is an error.
    fn decode_access_token(&self, token: &str) -> Result<DecodedAccessToken>;
}

/// HS256 access token decoder
pub struct JwtManager {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl JwtManager {
    /// Create a decoder from the auth configuration
    #[must_use]
    pub fn new(config: &AuthConfig) -> Self {
        let decoding_key = DecodingKey::from_secret(config.jwt_secret.as_bytes());

        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[config.issuer.as_str()]);
        validation.set_audience(&[config.audience.as_str()]);
        validation.set_required_spec_claims(&["exp", "sub", "iss", "aud"]);
        validation.validate_exp = true;
        validation.validate_nbf = false;
        validation.leeway = config.leeway_seconds;

        Self {
            decoding_key,
            validation,
        }
    }

    /// Validate and parse token
    pub fn validate_token(&self, token: &str) -> Result<AccessTokenClaims> {
        let token_data: TokenData<AccessTokenClaims> =
            decode(token, &self.decoding_key, &self.validation).map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => ServiceError::auth("认证令牌已过期"),
                _ => ServiceError::auth_with_source("令牌校验失败", e),
            })?;

        Ok(token_data.claims)
    }
}

impl AccessTokenDecoder for JwtManager {
    fn decode_access_token(&self, token: &str) -> Result<DecodedAccessToken> {
        self.validate_token(token).map(DecodedAccessToken::from)
    }
}
