use actix_web::http::header::ContentType;
use actix_web::{web, HttpResponse};

use super::views;
use crate::error::AppError;
use crate::services::leaderboard::standings;
use crate::state::app_state::AppState;

/// GET /leaderboard - every finished round, highest score first.
async fn leaderboard(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let entries = standings(&app_state).await?;

    Ok(HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(views::leaderboard_page(&entries)))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/leaderboard", web::get().to(leaderboard));
}
