use anyhow::{Context, Result};
use dotenvy::dotenv;
use serde::Deserialize;
use std::env;

/// Keycloak realm role granted to catalogue administrators
pub const ADMIN_ROLE: &str = "catalogue-admin";

const DEFAULT_PORT: u16 = 3000;

#[derive(Deserialize, Debug, Clone)]
pub struct Config {
    pub db_url: String,
    pub app_name: String,
    pub keycloak_ui_id: String,
    pub keycloak_url: String,
    pub keycloak_realm: String,
    pub deployment: String,
    pub admin_role: String,
    pub port: u16,
    pub tests_running: bool,
}

fn required(name: &str) -> Result<String> {
    env::var(name).with_context(|| format!("{name} must be set"))
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv().ok(); // Load from .env file if available

        let db_url = match env::var("DB_URL") {
            Ok(url) => url,
            Err(_) => format!(
                "{}://{}:{}@{}:{}/{}",
                env::var("DB_PREFIX").unwrap_or_else(|_| "postgresql".to_string()),
                required("DB_USER")?,
                required("DB_PASSWORD")?,
                required("DB_HOST")?,
                env::var("DB_PORT").unwrap_or_else(|_| "5432".to_string()),
                required("DB_NAME")?,
            ),
        };

        let port = match env::var("PORT") {
            Ok(value) => value
                .parse()
                .with_context(|| format!("PORT must be a port number, got '{value}'"))?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(Config {
            db_url,
            app_name: required("APP_NAME")?,
            keycloak_ui_id: env::var("KEYCLOAK_UI_ID").unwrap_or_default(),
            // An empty URL runs the API without authentication
            keycloak_url: env::var("KEYCLOAK_URL").unwrap_or_default(),
            keycloak_realm: env::var("KEYCLOAK_REALM").unwrap_or_default(),
            deployment: env::var("DEPLOYMENT")
                .context("DEPLOYMENT must be set, this can be local, dev, stage, or prod")?,
            admin_role: ADMIN_ROLE.to_string(),
            port,
            tests_running: false,
        })
    }

    #[cfg(test)]
    pub fn for_tests() -> Self {
        Config {
            db_url: "sqlite::memory:".to_string(),
            app_name: "specimen-catalogue-test".to_string(),
            keycloak_ui_id: "test-ui".to_string(),
            keycloak_url: String::new(),
            keycloak_realm: "test-realm".to_string(),
            deployment: "test".to_string(),
            admin_role: ADMIN_ROLE.to_string(),
            port: DEFAULT_PORT,
            tests_running: true,
        }
    }
}

#[cfg(test)]
pub mod test_helpers {
    use super::*;
    use crate::routes::build_router;
    use axum::Router;
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection};

    /// A fresh in-memory database with every migration applied.
    ///
    /// The pool is pinned to a single connection so all queries see the same
    /// in-memory SQLite database.
    pub async fn setup_test_db() -> DatabaseConnection {
        let mut options = ConnectOptions::new(Config::for_tests().db_url);
        options
            .max_connections(1)
            .min_connections(1)
            .sqlx_logging(false);

        let db = Database::connect(options)
            .await
            .expect("Failed to connect to test database");

        db.execute_unprepared("PRAGMA foreign_keys = ON")
            .await
            .expect("Failed to enable foreign keys");

        Migrator::up(&db, None)
            .await
            .expect("Failed to run database migrations");

        db
    }

    pub async fn setup_test_app() -> Router {
        let db = setup_test_db().await;
        build_router(&db, &Config::for_tests())
    }

    pub async fn setup_test_app_with_db() -> (Router, DatabaseConnection) {
        let db = setup_test_db().await;
        (build_router(&db, &Config::for_tests()), db)
    }
}
