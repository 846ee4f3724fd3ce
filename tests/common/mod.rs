//! 集成测试公共工具

#![allow(dead_code)]

use std::sync::Arc;

use auth_backend::auth::{AccessTokenDecoder, JwtManager};
use auth_backend::config::AuthConfig;
use auth_backend::projects::{INTERNAL_PROJECT_ID, ProjectService};
use auth_backend::testing::{create_test_db, init_test_env, issue_access_token, test_auth_config};
use auth_backend::users::{AdminUserView, ProjectUserStore, ServerUserStore};
use chrono::Utc;
use entity::project_users;
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};
use serde_json::Value;

pub struct TestApp {
    pub db: Arc<DatabaseConnection>,
    pub service: ProjectService,
    pub auth: AuthConfig,
}

pub async fn setup() -> TestApp {
    init_test_env();
    let db = Arc::new(create_test_db().await.expect("create test db"));

    let auth = test_auth_config();
    let tokens: Arc<dyn AccessTokenDecoder> = Arc::new(JwtManager::new(&auth));
    let users: Arc<dyn ServerUserStore> = Arc::new(ProjectUserStore::new(Arc::clone(&db)));
    let service = ProjectService::new(Arc::clone(&db), tokens, users);

    TestApp { db, service, auth }
}

impl TestApp {
    pub fn token(&self, user_id: &str, project_id: &str) -> String {
        issue_access_token(&self.auth, user_id, project_id, 3600)
    }

    pub async fn seed_user(&self, project_id: &str, user_id: &str, metadata: Option<Value>) {
        let now = Utc::now().naive_utc();
        project_users::ActiveModel {
            project_id: Set(project_id.to_string()),
            project_user_id: Set(user_id.to_string()),
            display_name: Set(Some(format!("{user_id} name"))),
            primary_email: Set(None),
            server_metadata_json: Set(metadata.map(|m| m.to_string())),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(self.db.as_ref())
        .await
        .expect("seed user");
    }

    /// 创建内部管理员并返回其视图
    pub async fn internal_admin(&self, user_id: &str, metadata: Option<Value>) -> AdminUserView {
        self.seed_user(INTERNAL_PROJECT_ID, user_id, metadata).await;
        self.reload_admin(user_id).await
    }

    pub async fn reload_admin(&self, user_id: &str) -> AdminUserView {
        let token = self.token(user_id, INTERNAL_PROJECT_ID);
        self.service
            .resolve_internal_admin(&token)
            .await
            .expect("resolve admin")
            .expect("admin exists")
    }
}
