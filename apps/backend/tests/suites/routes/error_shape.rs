use actix_web::http::StatusCode;
use actix_web::test;
use backend_test_support::assert_problem_details;
use quiz_backend::AppError;

use crate::support::flow::{round_for, start_round, submit};
use crate::support::test_state::build_state_without_db;
use crate::support::{build_test_state, create_test_app};

#[actix_web::test]
async fn undecodable_form_is_bad_request() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await?;

    let req = test::TestRequest::post()
        .uri("/start")
        .insert_header(("content-type", "application/json"))
        .set_payload(r#"{"player_name":"Alice","level":"easy"}"#)
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_problem_details(resp, "BAD_REQUEST", StatusCode::BAD_REQUEST, Some("form")).await;
    Ok(())
}

#[actix_web::test]
async fn problem_trace_id_matches_request_id() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await?;

    let req = test::TestRequest::post()
        .uri("/start")
        .set_form([("player_name", "Alice")])
        .to_request();
    let resp = test::call_service(&app, req).await;
    let request_id = resp
        .headers()
        .get("x-request-id")
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();

    let problem =
        assert_problem_details(resp, "MISSING_LEVEL", StatusCode::BAD_REQUEST, None).await;
    assert_eq!(problem.trace_id, request_id);
    assert_eq!(problem.title, "Missing Level");
    assert_eq!(problem.type_, "https://quiz.local/errors/MISSING_LEVEL");
    Ok(())
}

#[actix_web::test]
async fn leaderboard_without_db_is_server_error() -> Result<(), AppError> {
    let state = build_state_without_db().await?;
    let app = create_test_app(state).with_prod_routes().build().await?;

    let req = test::TestRequest::get().uri("/leaderboard").to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details(
        resp,
        "DB_UNAVAILABLE",
        StatusCode::INTERNAL_SERVER_ERROR,
        None,
    )
    .await;
    Ok(())
}

#[actix_web::test]
async fn storage_failure_at_round_end_keeps_round() -> Result<(), AppError> {
    let state = build_state_without_db().await?;
    let app = create_test_app(state.clone())
        .with_prod_routes()
        .build()
        .await?;

    let cookie = start_round(&app, "Alice", "easy").await;
    let before = round_for(&state, &cookie).await.unwrap();

    let resp = submit(&app, &cookie, "1", "0").await;
    assert_problem_details(
        resp,
        "DB_UNAVAILABLE",
        StatusCode::INTERNAL_SERVER_ERROR,
        None,
    )
    .await;

    assert_eq!(round_for(&state, &cookie).await, Some(before));
    Ok(())
}
