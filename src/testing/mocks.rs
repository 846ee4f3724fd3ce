//! # 测试替身

use std::collections::HashMap;

use crate::auth::{AccessTokenDecoder, DecodedAccessToken};
use crate::error::{Result, ServiceError};

/// 按令牌字符串查表的解码器
#[derive(Debug, Default)]
pub struct StaticTokenDecoder {
    tokens: HashMap<String, DecodedAccessToken>,
}

impl StaticTokenDecoder {
    /// 创建空解码器
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// 登记一个令牌
    #[must_use]
    pub fn with_token(mut self, token: &str, user_id: &str, project_id: &str) -> Self {
        self.tokens.insert(
            token.to_string(),
            DecodedAccessToken {
                user_id: user_id.to_string(),
                project_id: project_id.to_string(),
            },
        );
        self
    }
}

impl AccessTokenDecoder for StaticTokenDecoder {
    fn decode_access_token(&self, token: &str) -> Result<DecodedAccessToken> {
        self.tokens
            .get(token)
            .cloned()
            .ok_or_else(|| ServiceError::auth("未知的测试令牌"))
    }
}
