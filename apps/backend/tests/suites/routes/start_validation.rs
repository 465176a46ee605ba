use actix_web::http::StatusCode;
use actix_web::test;
use backend_test_support::{assert_problem_details, assert_redirect};
use quiz_backend::AppError;

use crate::support::flow::{round_for, session_cookie_of, start_round};
use crate::support::{build_test_state, create_test_app};

#[actix_web::test]
async fn invalid_start_forms_are_rejected_without_a_session() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await?;

    let cases: [(&[(&str, &str)], &str); 5] = [
        (&[("level", "easy")], "MISSING_PLAYER_NAME"),
        (&[("player_name", ""), ("level", "easy")], "MISSING_PLAYER_NAME"),
        (&[("player_name", "Alice")], "MISSING_LEVEL"),
        (&[("player_name", "Alice"), ("level", "")], "MISSING_LEVEL"),
        (&[("player_name", "Alice"), ("level", "medium")], "INVALID_LEVEL"),
    ];

    for (form, code) in cases {
        let req = test::TestRequest::post()
            .uri("/start")
            .set_form(form)
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert!(
            session_cookie_of(&resp).is_none(),
            "{form:?} must not start a session"
        );
        assert_problem_details(resp, code, StatusCode::BAD_REQUEST, None).await;
    }
    Ok(())
}

#[actix_web::test]
async fn level_is_case_insensitive_and_name_kept_as_submitted() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let app = create_test_app(state.clone())
        .with_prod_routes()
        .build()
        .await?;

    let cookie = start_round(&app, "  Alice  ", "HARD").await;
    let round = round_for(&state, &cookie).await.unwrap();
    assert_eq!(round.player_name, "  Alice  ");
    assert_eq!(round.level, quiz_backend::domain::Level::Hard);
    Ok(())
}

#[actix_web::test]
async fn whitespace_only_name_starts_a_round() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let app = create_test_app(state.clone())
        .with_prod_routes()
        .build()
        .await?;

    let req = test::TestRequest::post()
        .uri("/start")
        .set_form([("player_name", "   "), ("level", "hard")])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_redirect(&resp, "/game");

    let cookie = session_cookie_of(&resp).unwrap();
    let round = round_for(&state, &cookie).await.unwrap();
    assert_eq!(round.player_name, "   ");
    Ok(())
}

#[actix_web::test]
async fn failed_start_keeps_existing_round() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let app = create_test_app(state.clone())
        .with_prod_routes()
        .build()
        .await?;

    let cookie = start_round(&app, "Alice", "easy").await;

    let req = test::TestRequest::post()
        .uri("/start")
        .cookie(cookie.clone())
        .set_form([("player_name", "Alice"), ("level", "expert")])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    assert!(round_for(&state, &cookie).await.is_some());

    let req = test::TestRequest::get()
        .uri("/game")
        .cookie(cookie)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    Ok(())
}

#[actix_web::test]
async fn successful_start_redirects_to_game() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await?;

    let req = test::TestRequest::post()
        .uri("/start")
        .set_form([("player_name", "Alice"), ("level", "easy")])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_redirect(&resp, "/game");

    let cookie = session_cookie_of(&resp).unwrap();
    assert_eq!(cookie.path(), Some("/"));
    assert_eq!(cookie.http_only(), Some(true));
    Ok(())
}
