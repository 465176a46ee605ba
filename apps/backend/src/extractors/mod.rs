pub mod session;
pub mod validated_form;

pub use session::{removal_cookie, session_cookie, SessionCookie, SESSION_COOKIE};
pub use validated_form::ValidatedForm;
