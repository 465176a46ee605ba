use actix_web::{web, HttpResponse};
use migration::get_latest_migration_version;
use sea_orm::{ConnectionTrait, DatabaseConnection, Statement};
use serde::Serialize;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

use crate::db::require_db;
use crate::error::AppError;
use crate::state::app_state::AppState;

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    app_version: &'static str,
    db: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    db_error: Option<String>,
    migrations: String,
    time: String,
}

/// Outcome of probing the leaderboard database.
struct DbProbe {
    ok: bool,
    error: Option<String>,
    migrations: String,
}

impl DbProbe {
    fn failed(error: String) -> Self {
        Self {
            ok: false,
            error: Some(error),
            migrations: "unknown".to_string(),
        }
    }
}

async fn probe(db: &DatabaseConnection) -> DbProbe {
    let select_one = Statement::from_string(
        db.get_database_backend(),
        "SELECT 1 AS health_check".to_string(),
    );
    if let Err(e) = db.query_one(select_one).await {
        return DbProbe::failed(format!("DB query failed: {e}"));
    }

    let migrations = match get_latest_migration_version(db).await {
        Ok(Some(version)) => version,
        Ok(None) => "no_migrations".to_string(),
        Err(_) => "unknown".to_string(),
    };
    DbProbe {
        ok: true,
        error: None,
        migrations,
    }
}

async fn health(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let db = match require_db(&app_state) {
        Ok(db) => probe(db).await,
        Err(e) => DbProbe::failed(format!("DB unavailable: {e}")),
    };

    let time = OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .unwrap_or_else(|_| "unknown".to_string());

    // The process is up even when the database isn't; `db` carries that.
    Ok(HttpResponse::Ok().json(HealthResponse {
        status: "ok",
        app_version: env!("CARGO_PKG_VERSION"),
        db: if db.ok { "ok" } else { "error" },
        db_error: db.error,
        migrations: db.migrations,
        time,
    }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health));
}
