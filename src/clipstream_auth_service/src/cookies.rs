use axum_extra::extract::{
    CookieJar,
    cookie::{Cookie, SameSite},
};

use clipstream_adapters::config::CookieSettings;
use clipstream_application::session::SessionTokens;

/// Builder for the access/refresh cookie pair.
#[derive(Debug, Clone)]
pub struct SessionCookies {
    settings: CookieSettings,
}

impl SessionCookies {
    pub fn new(settings: CookieSettings) -> Self {
        Self { settings }
    }

    pub fn access_name(&self) -> &str {
        &self.settings.access_name
    }

    pub fn refresh_name(&self) -> &str {
        &self.settings.refresh_name
    }

    /// Attach both session cookies to the jar.
    pub fn issue(&self, jar: CookieJar, tokens: &SessionTokens) -> CookieJar {
        jar.add(session_cookie(
            self.settings.access_name.clone(),
            tokens.access_token.clone(),
        ))
        .add(session_cookie(
            self.settings.refresh_name.clone(),
            tokens.refresh_token.clone(),
        ))
    }

    /// Expire both session cookies.
    pub fn clear(&self, jar: CookieJar) -> CookieJar {
        jar.add(removal_cookie(self.settings.access_name.clone()))
            .add(removal_cookie(self.settings.refresh_name.clone()))
    }
}

impl Default for SessionCookies {
    fn default() -> Self {
        Self::new(CookieSettings::default())
    }
}

fn session_cookie(name: String, value: String) -> Cookie<'static> {
    Cookie::build((name, value))
        .path("/") // apply cookie to all URLs on the server
        .http_only(true) // prevent JavaScript from accessing the cookie
        .secure(true)
        .same_site(SameSite::Lax)
        .build()
}

fn removal_cookie(name: String) -> Cookie<'static> {
    let mut cookie = session_cookie(name, String::new());
    cookie.make_removal();
    cookie
}
