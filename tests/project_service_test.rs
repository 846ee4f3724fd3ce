//! 项目管理服务集成测试

mod common;

use auth_backend::ServiceError;
use auth_backend::projects::{
    CreateProjectRequest, DomainView, EmailConfigView, INTERNAL_PROJECT_ID, OAuthProviderKind,
    ProjectUpdate, SharedProvider, StandardProvider,
};
use auth_backend::users::AdminUserView;
use chrono::Utc;
use entity::{oauth_provider_configs, project_domains, projects};
use pretty_assertions::assert_eq;
use sea_orm::{ActiveModelTrait, EntityTrait, PaginatorTrait, Set};
use serde_json::json;

fn request(display_name: &str, allow_localhost: bool, credential_enabled: bool) -> CreateProjectRequest {
    CreateProjectRequest {
        display_name: display_name.to_string(),
        description: "integration".to_string(),
        allow_localhost,
        credential_enabled,
    }
}

fn update_from(value: serde_json::Value) -> ProjectUpdate {
    serde_json::from_value(value).expect("valid update")
}

#[tokio::test]
async fn create_project_provisions_shared_stubs() {
    let app = common::setup().await;
    let admin = app
        .internal_admin("admin-1", Some(json!({"theme": "dark"})))
        .await;

    let view = app
        .service
        .create_project(&admin, request("Acme", true, false))
        .await
        .expect("create project");

    assert!(!view.is_production_mode);
    assert_eq!(view.display_name, "Acme");
    assert_eq!(view.user_count, 0);
    assert!(view.evaluated_config.allow_localhost);
    assert!(!view.evaluated_config.credential_enabled);

    let providers = &view.evaluated_config.oauth_providers;
    let ids: Vec<&str> = providers.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["github", "facebook", "google", "microsoft"]);
    assert!(providers.iter().all(|p| !p.enabled));
    for family in StandardProvider::ALL {
        let provider = providers
            .iter()
            .find(|p| p.id == family.as_str())
            .expect("one provider per family");
        assert_eq!(
            provider.kind,
            OAuthProviderKind::Shared {
                provider_type: family.shared_counterpart()
            }
        );
    }

    assert_eq!(
        view.evaluated_config.email_config,
        Some(EmailConfigView::Shared {
            sender_name: "Acme".to_string()
        })
    );

    let admin = app.reload_admin("admin-1").await;
    assert_eq!(
        admin.server_metadata,
        Some(json!({"theme": "dark", "managedProjectIds": [view.id.clone()]}))
    );

    let token = app.token("admin-1", INTERNAL_PROJECT_ID);
    assert!(app.service.is_project_admin(&view.id, &token).await.unwrap());
}

#[tokio::test]
async fn create_rejects_non_internal_creator() {
    let app = common::setup().await;
    let outsider = AdminUserView {
        project_id: "some-other-project".to_string(),
        id: "user-9".to_string(),
        display_name: None,
        primary_email: None,
        server_metadata: None,
    };

    let err = app
        .service
        .create_project(&outsider, request("Nope", false, false))
        .await
        .unwrap_err();

    assert!(matches!(err, ServiceError::Precondition { .. }));
    assert_eq!(
        projects::Entity::find().count(app.db.as_ref()).await.unwrap(),
        1
    );
}

#[tokio::test]
async fn create_with_malformed_metadata_rolls_back() {
    let app = common::setup().await;
    let admin = AdminUserView {
        project_id: INTERNAL_PROJECT_ID.to_string(),
        id: "admin-bad".to_string(),
        display_name: None,
        primary_email: None,
        server_metadata: None,
    };
    app.seed_user(
        INTERNAL_PROJECT_ID,
        "admin-bad",
        Some(json!({"managedProjectIds": [1, 2]})),
    )
    .await;

    let err = app
        .service
        .create_project(&admin, request("Broken", false, false))
        .await
        .unwrap_err();

    assert!(matches!(err, ServiceError::DataIntegrity { .. }));
    assert_eq!(
        projects::Entity::find().count(app.db.as_ref()).await.unwrap(),
        1
    );
    assert_eq!(
        oauth_provider_configs::Entity::find()
            .count(app.db.as_ref())
            .await
            .unwrap(),
        0
    );
}

#[tokio::test]
async fn create_then_enable_credentials() {
    let app = common::setup().await;
    let admin = app.internal_admin("admin-1", None).await;
    let created = app
        .service
        .create_project(&admin, request("Creds", true, false))
        .await
        .unwrap();

    let updated = app
        .service
        .update_project(&created.id, update_from(json!({"config": {"credentialEnabled": true}})))
        .await
        .unwrap()
        .expect("project exists");

    assert!(updated.evaluated_config.credential_enabled);
    assert!(updated.evaluated_config.allow_localhost);
    assert!(!updated.is_production_mode);
    assert_eq!(
        updated.evaluated_config.oauth_providers,
        created.evaluated_config.oauth_providers
    );
}

#[tokio::test]
async fn empty_domain_list_only_clears_domains() {
    let app = common::setup().await;
    let admin = app.internal_admin("admin-1", None).await;
    let created = app
        .service
        .create_project(&admin, request("Domains", false, true))
        .await
        .unwrap();

    let with_domains = app
        .service
        .update_project(
            &created.id,
            update_from(json!({
                "isProductionMode": true,
                "config": {"domains": [
                    {"domain": "https://a.test", "handlerPath": "/h"},
                    {"domain": "https://b.test", "handlerPath": "/h2"},
                    {"domain": "https://a.test", "handlerPath": "/dup"}
                ]}
            })),
        )
        .await
        .unwrap()
        .unwrap();
    assert_eq!(
        with_domains.evaluated_config.domains,
        vec![
            DomainView {
                domain: "https://a.test".to_string(),
                handler_path: "/h".to_string()
            },
            DomainView {
                domain: "https://b.test".to_string(),
                handler_path: "/h2".to_string()
            },
        ]
    );

    let cleared = app
        .service
        .update_project(&created.id, update_from(json!({"config": {"domains": []}})))
        .await
        .unwrap()
        .unwrap();

    assert!(cleared.evaluated_config.domains.is_empty());
    assert!(cleared.is_production_mode);
    assert!(cleared.evaluated_config.credential_enabled);
    assert_eq!(
        cleared.evaluated_config.oauth_providers,
        created.evaluated_config.oauth_providers
    );
    assert_eq!(
        project_domains::Entity::find()
            .count(app.db.as_ref())
            .await
            .unwrap(),
        0
    );
}

#[tokio::test]
async fn unknown_provider_types_are_skipped() {
    let app = common::setup().await;
    let admin = app.internal_admin("admin-1", None).await;
    let created = app
        .service
        .create_project(&admin, request("Providers", false, false))
        .await
        .unwrap();

    let updated = app
        .service
        .update_project(
            &created.id,
            update_from(json!({"config": {"oauthProviders": [
                {"id": "github", "enabled": true, "type": "shared-github"},
                {"id": "myspace", "enabled": true, "type": "myspace"},
                {"id": "google", "enabled": true, "type": "google",
                 "clientId": "cid", "clientSecret": "secret"},
                {"id": "facebook", "enabled": true, "type": "facebook", "clientId": "cid"},
                {"id": "github", "enabled": false, "type": "shared-github"},
                {"id": "microsoft", "enabled": false, "type": "microsoft",
                 "clientId": "ms", "clientSecret": "ms-secret", "tenantId": "tenant"}
            ]}})),
        )
        .await
        .unwrap()
        .unwrap();

    let providers = updated.evaluated_config.oauth_providers;
    let ids: Vec<&str> = providers.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["github", "google", "microsoft"]);

    assert!(providers[0].enabled);
    assert_eq!(
        providers[0].kind,
        OAuthProviderKind::Shared {
            provider_type: SharedProvider::Github
        }
    );
    assert_eq!(
        providers[1].kind,
        OAuthProviderKind::Standard {
            provider_type: StandardProvider::Google,
            client_id: "cid".to_string(),
            client_secret: "secret".to_string(),
            tenant_id: None,
        }
    );
    assert_eq!(
        providers[2].kind,
        OAuthProviderKind::Standard {
            provider_type: StandardProvider::Microsoft,
            client_id: "ms".to_string(),
            client_secret: "ms-secret".to_string(),
            tenant_id: Some("tenant".to_string()),
        }
    );
}

#[tokio::test]
async fn providers_keep_submission_order() {
    let app = common::setup().await;
    let admin = app.internal_admin("admin-1", None).await;
    let created = app
        .service
        .create_project(&admin, request("Ordering", false, false))
        .await
        .unwrap();

    let updated = app
        .service
        .update_project(
            &created.id,
            update_from(json!({"config": {"oauthProviders": [
                {"id": "zeta", "enabled": true, "type": "shared-google"},
                {"id": "mid", "enabled": false, "type": "github",
                 "clientId": "cid", "clientSecret": "secret"},
                {"id": "alpha", "enabled": true, "type": "shared-github"}
            ]}})),
        )
        .await
        .unwrap()
        .unwrap();

    let ids: Vec<&str> = updated
        .evaluated_config
        .oauth_providers
        .iter()
        .map(|p| p.id.as_str())
        .collect();
    assert_eq!(ids, vec!["zeta", "mid", "alpha"]);

    let reloaded = app.service.get_project(&created.id).await.unwrap().unwrap();
    assert_eq!(
        reloaded.evaluated_config.oauth_providers,
        updated.evaluated_config.oauth_providers
    );
}

#[tokio::test]
async fn missing_project_yields_none_without_writes() {
    let app = common::setup().await;

    assert!(app.service.get_project("missing").await.unwrap().is_none());

    let result = app
        .service
        .update_project(
            "missing",
            update_from(json!({
                "displayName": "Ghost",
                "config": {"domains": [{"domain": "https://ghost.test", "handlerPath": "/"}]}
            })),
        )
        .await
        .unwrap();

    assert!(result.is_none());

    let blank_name = app
        .service
        .update_project("missing", update_from(json!({"displayName": ""})))
        .await
        .unwrap();
    assert!(blank_name.is_none());

    assert_eq!(
        project_domains::Entity::find()
            .count(app.db.as_ref())
            .await
            .unwrap(),
        0
    );
    assert_eq!(
        projects::Entity::find().count(app.db.as_ref()).await.unwrap(),
        1
    );
}

#[tokio::test]
async fn provider_row_without_sub_record_is_omitted() {
    let app = common::setup().await;
    let admin = app.internal_admin("admin-1", None).await;
    let created = app
        .service
        .create_project(&admin, request("Orphan", false, false))
        .await
        .unwrap();

    let now = Utc::now().naive_utc();
    oauth_provider_configs::ActiveModel {
        project_config_id: Set(created.evaluated_config.id.clone()),
        id: Set("orphan".to_string()),
        enabled: Set(true),
        position: Set(9),
        created_at: Set(now),
        updated_at: Set(now),
    }
    .insert(app.db.as_ref())
    .await
    .unwrap();

    let view = app.service.get_project(&created.id).await.unwrap().unwrap();
    assert_eq!(view.evaluated_config.oauth_providers.len(), 4);
    assert!(
        view.evaluated_config
            .oauth_providers
            .iter()
            .all(|p| p.id != "orphan")
    );
}

#[tokio::test]
async fn email_config_and_metadata_fields_are_replaced() {
    let app = common::setup().await;
    let admin = app.internal_admin("admin-1", None).await;
    let created = app
        .service
        .create_project(&admin, request("Mail", false, false))
        .await
        .unwrap();

    let updated = app
        .service
        .update_project(
            &created.id,
            update_from(json!({
                "displayName": "Mail Renamed",
                "description": "new description",
                "config": {
                    "allowLocalhost": true,
                    "emailConfig": {
                        "type": "standard",
                        "host": "smtp.mail.test",
                        "port": 587,
                        "username": "mailer",
                        "password": "pw",
                        "senderEmail": "noreply@mail.test",
                        "senderName": "Mailer"
                    }
                }
            })),
        )
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.display_name, "Mail Renamed");
    assert_eq!(updated.description, "new description");
    assert!(updated.evaluated_config.allow_localhost);
    assert_eq!(
        updated.evaluated_config.email_config,
        Some(EmailConfigView::Standard {
            host: "smtp.mail.test".to_string(),
            port: 587,
            username: "mailer".to_string(),
            password: "pw".to_string(),
            sender_email: "noreply@mail.test".to_string(),
            sender_name: "Mailer".to_string(),
        })
    );

    let back_to_shared = app
        .service
        .update_project(
            &created.id,
            update_from(json!({"config": {"emailConfig": {"type": "shared", "senderName": "Shared"}}})),
        )
        .await
        .unwrap()
        .unwrap();
    assert_eq!(
        back_to_shared.evaluated_config.email_config,
        Some(EmailConfigView::Shared {
            sender_name: "Shared".to_string()
        })
    );
}

#[tokio::test]
async fn list_projects_follows_managed_order() {
    let app = common::setup().await;
    let admin = app.internal_admin("admin-1", None).await;
    let first = app
        .service
        .create_project(&admin, request("First", false, false))
        .await
        .unwrap();
    let admin = app.reload_admin("admin-1").await;
    let second = app
        .service
        .create_project(&admin, request("Second", false, false))
        .await
        .unwrap();

    let admin = app.reload_admin("admin-1").await;
    let listed = app.service.list_projects(&admin).await.unwrap();
    let ids: Vec<&str> = listed.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec![first.id.as_str(), second.id.as_str()]);
}

#[tokio::test]
async fn list_skips_vanished_and_rejects_malformed() {
    let app = common::setup().await;

    let admin = app
        .internal_admin("admin-1", Some(json!({"managedProjectIds": ["gone", "internal"]})))
        .await;
    let listed = app.service.list_projects(&admin).await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, INTERNAL_PROJECT_ID);

    let broken = app
        .internal_admin("admin-2", Some(json!({"managedProjectIds": "internal"})))
        .await;
    let err = app.service.list_projects(&broken).await.unwrap_err();
    assert!(matches!(err, ServiceError::DataIntegrity { .. }));

    let token = app.token("admin-2", INTERNAL_PROJECT_ID);
    let err = app
        .service
        .is_project_admin(INTERNAL_PROJECT_ID, &token)
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::DataIntegrity { .. }));
}

#[tokio::test]
async fn guard_rejects_foreign_and_unknown_callers() {
    let app = common::setup().await;
    let admin = app.internal_admin("admin-1", None).await;
    let created = app
        .service
        .create_project(&admin, request("Guarded", false, false))
        .await
        .unwrap();

    let foreign = app.token("admin-1", &created.id);
    let unknown = app.token("nobody", INTERNAL_PROJECT_ID);

    assert!(!app.service.is_project_admin(&created.id, "not-a-token").await.unwrap());
    assert!(!app.service.is_project_admin(&created.id, &foreign).await.unwrap());
    assert!(!app.service.is_project_admin(&created.id, &unknown).await.unwrap());
    assert!(
        !app.service
            .is_project_admin("another-project", &app.token("admin-1", INTERNAL_PROJECT_ID))
            .await
            .unwrap()
    );
}
