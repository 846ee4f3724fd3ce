//! # 访问令牌模块
//!
//! 管理操作的调用方通过访问令牌识别，本模块只负责令牌校验

pub mod jwt;

pub use jwt::{AccessTokenClaims, AccessTokenDecoder, DecodedAccessToken, JwtManager};
