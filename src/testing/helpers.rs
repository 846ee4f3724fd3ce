//! # 测试辅助函数
//!
//! 提供通用的测试工具和辅助函数

use std::sync::Once;

use chrono::Utc;
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
use sea_orm::{Database, DatabaseConnection, DbErr};
use sea_orm_migration::MigratorTrait;
use tempfile::TempDir;

use crate::auth::AccessTokenClaims;
use crate::config::AuthConfig;

static INIT: Once = Once::new();

/// 测试用 JWT 密钥
pub const TEST_JWT_SECRET: &str = "test-secret-for-unit-tests-only";

/// 初始化测试日志
pub fn init_test_env() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_test_writer()
            .try_init()
            .ok();
    });
}

/// 创建内存数据库连接并执行迁移
pub async fn create_test_db() -> Result<DatabaseConnection, DbErr> {
    let db = Database::connect("sqlite::memory:").await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}

/// 创建临时数据库文件
pub async fn create_temp_db() -> Result<(DatabaseConnection, TempDir), DbErr> {
    let temp_dir =
        tempfile::tempdir().map_err(|e| DbErr::Custom(format!("创建临时目录失败: {e}")))?;

    let db_path = temp_dir.path().join("test.db");
    let db_url = format!("sqlite://{}?mode=rwc", db_path.display());

    let db = Database::connect(&db_url).await?;
    migration::Migrator::up(&db, None).await?;

    Ok((db, temp_dir))
}

/// 测试用令牌配置
#[must_use]
pub fn test_auth_config() -> AuthConfig {
    AuthConfig {
        jwt_secret: TEST_JWT_SECRET.to_string(),
        issuer: "auth-backend-test".to_string(),
        audience: "auth-backend-test".to_string(),
        leeway_seconds: 0,
    }
}

/// 签发测试访问令牌，`ttl_seconds` 为负数时得到已过期的令牌
#[must_use]
pub fn issue_access_token(
    config: &AuthConfig,
    user_id: &str,
    project_id: &str,
    ttl_seconds: i64,
) -> String {
    let now = Utc::now().timestamp();
    let claims = AccessTokenClaims {
        sub: user_id.to_string(),
        project_id: project_id.to_string(),
        iat: now,
        exp: now + ttl_seconds,
        iss: config.issuer.clone(),
        aud: config.audience.clone(),
    };

    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(config.jwt_secret.as_bytes()),
    )
    .expect("签发测试令牌失败")
}
