use std::future::{ready, Ready};

use actix_web::cookie::{Cookie, SameSite};
use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest};

use crate::error::AppError;
use crate::state::session_store::SessionId;

/// Name of the cookie carrying the session id.
pub const SESSION_COOKIE: &str = "quiz_session";

/// Session id presented by the caller, if any.
///
/// A missing or malformed cookie is not an error: handlers decide whether a
/// session is required.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionCookie(pub Option<SessionId>);

impl SessionCookie {
    pub fn id(&self) -> Option<SessionId> {
        self.0
    }
}

impl FromRequest for SessionCookie {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let id = req
            .cookie(SESSION_COOKIE)
            .and_then(|cookie| SessionId::parse(cookie.value()));
        ready(Ok(SessionCookie(id)))
    }
}

/// Cookie handing a freshly started session to the browser.
pub fn session_cookie(id: SessionId) -> Cookie<'static> {
    Cookie::build(SESSION_COOKIE, id.to_string())
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .finish()
}

/// Expired cookie that makes the browser forget its session.
pub fn removal_cookie() -> Cookie<'static> {
    let mut cookie = Cookie::build(SESSION_COOKIE, "").path("/").finish();
    cookie.make_removal();
    cookie
}
