use tower_cookies::cookie::SameSite;
use tower_cookies::{Cookie, Cookies};

/// Name of the session cookie
pub const SESSION_COOKIE: &str = "reelbites_session";

/// An authenticated user session.
///
/// The token is the opaque JWT issued by the gateway; this application
/// never inspects it, it only stores it and forwards it as a bearer
/// credential on gateway requests that require one.
#[derive(Debug, Clone)]
pub struct Session {
    token: String,
}

impl Session {
    pub fn new(token: String) -> Self {
        Self { token }
    }

    /// Value for the Authorization header
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.token)
    }

    pub fn token(&self) -> &str {
        &self.token
    }
}

/// The single read/write boundary for session state. All cookie handling
/// lives here; handlers and the gateway client only ever see `Session`.
pub struct SessionStore;

impl SessionStore {
    pub fn read(cookies: &Cookies) -> Option<Session> {
        cookies
            .get(SESSION_COOKIE)
            .map(|cookie| Session::new(cookie.value().to_string()))
            .filter(|session| !session.token().is_empty())
    }

    pub fn write(cookies: &Cookies, session: &Session) {
        let mut cookie = Cookie::new(SESSION_COOKIE, session.token().to_string());
        cookie.set_path("/");
        cookie.set_http_only(true);
        cookie.set_same_site(SameSite::Lax);
        cookies.add(cookie);
    }

    pub fn clear(cookies: &Cookies) {
        let mut cookie = Cookie::new(SESSION_COOKIE, "");
        cookie.set_path("/");
        cookies.remove(cookie);
    }
}

// The cookie round trip (write on login, read on comment submission, clear
// on logout) is covered end-to-end in tests/account_tests.rs, where the
// cookie jar exists the way it does in production: behind the middleware.
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bearer_value() {
        let session = Session::new("abc.def.ghi".to_string());
        assert_eq!(session.bearer(), "Bearer abc.def.ghi");
    }
}
