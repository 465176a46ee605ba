use actix_web::cookie::Cookie;
use actix_web::test;
use backend_test_support::assert_redirect;
use quiz_backend::extractors::SESSION_COOKIE;
use quiz_backend::state::session_store::SessionId;
use quiz_backend::AppError;

use crate::support::{build_test_state, create_test_app};

fn cookies() -> Vec<Option<Cookie<'static>>> {
    vec![
        None,
        Some(Cookie::new(SESSION_COOKIE, "garbage")),
        // Well-formed but unknown, as after TTL expiry
        Some(Cookie::new(SESSION_COOKIE, SessionId::generate().to_string())),
    ]
}

#[actix_web::test]
async fn game_without_session_redirects_home() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await?;

    for cookie in cookies() {
        let mut req = test::TestRequest::get().uri("/game");
        if let Some(cookie) = cookie {
            req = req.cookie(cookie);
        }
        let resp = test::call_service(&app, req.to_request()).await;
        assert_redirect(&resp, "/");
    }
    Ok(())
}

#[actix_web::test]
async fn submit_without_session_redirects_home() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await?;

    for cookie in cookies() {
        let mut req = test::TestRequest::post()
            .uri("/submit")
            .set_form([("answer", "3"), ("timeleft", "0")]);
        if let Some(cookie) = cookie {
            req = req.cookie(cookie);
        }
        let resp = test::call_service(&app, req.to_request()).await;
        assert_redirect(&resp, "/");
    }
    Ok(())
}

#[actix_web::test]
async fn submit_without_session_ignores_bad_timeleft() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await?;

    let req = test::TestRequest::post()
        .uri("/submit")
        .set_form([("answer", "3"), ("timeleft", "later")])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_redirect(&resp, "/");
    Ok(())
}
