//! Quiz flow: start form, question page, answer submission.

use actix_web::http::header::{self, ContentType};
use actix_web::{web, HttpResponse, HttpResponseBuilder};
use serde::Deserialize;

use super::views;
use crate::domain::StartRequest;
use crate::error::AppError;
use crate::extractors::{removal_cookie, session_cookie, SessionCookie, ValidatedForm};
use crate::services::rounds::{RoundService, SubmitOutcome};
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
pub struct StartForm {
    pub player_name: Option<String>,
    pub level: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SubmitForm {
    pub answer: Option<String>,
    pub timeleft: Option<String>,
}

/// 303 so the browser follows with a GET.
fn see_other(location: &str) -> HttpResponseBuilder {
    let mut builder = HttpResponse::SeeOther();
    builder.insert_header((header::LOCATION, location));
    builder
}

fn html(body: String) -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(body)
}

/// GET / - forget any round in progress and show the start form.
async fn index(
    app_state: web::Data<AppState>,
    session: SessionCookie,
) -> Result<HttpResponse, AppError> {
    RoundService::new().clear(&app_state, session.id()).await;

    Ok(HttpResponse::Ok()
        .content_type(ContentType::html())
        .cookie(removal_cookie())
        .body(views::start_page()))
}

/// POST /start
async fn start(
    app_state: web::Data<AppState>,
    session: SessionCookie,
    form: ValidatedForm<StartForm>,
) -> Result<HttpResponse, AppError> {
    let form = form.into_inner();
    let request = StartRequest {
        player_name: form.player_name.as_deref(),
        level: form.level.as_deref(),
    };

    let id = RoundService::new()
        .start(&app_state, session.id(), request)
        .await?;

    Ok(see_other("/game").cookie(session_cookie(id)).finish())
}

/// GET /game
async fn game(
    app_state: web::Data<AppState>,
    session: SessionCookie,
) -> Result<HttpResponse, AppError> {
    match RoundService::new().current(&app_state, session.id()).await {
        Some(round) => Ok(html(views::game_page(&round))),
        None => Ok(see_other("/").finish()),
    }
}

/// POST /submit
async fn submit(
    app_state: web::Data<AppState>,
    session: SessionCookie,
    form: ValidatedForm<SubmitForm>,
) -> Result<HttpResponse, AppError> {
    let outcome = RoundService::new()
        .submit(
            &app_state,
            session.id(),
            form.answer.as_deref(),
            form.timeleft.as_deref(),
        )
        .await?;

    let response = match outcome {
        SubmitOutcome::NoSession => see_other("/").finish(),
        SubmitOutcome::Continue { .. } => see_other("/game").finish(),
        SubmitOutcome::Finished(_) => see_other("/leaderboard")
            .cookie(removal_cookie())
            .finish(),
    };
    Ok(response)
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(index))
        .route("/start", web::post().to(start))
        .route("/game", web::get().to(game))
        .route("/submit", web::post().to(submit));
}
