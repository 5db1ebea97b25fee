//! Session cookie descriptor
//!
//! The authenticator never writes cookies itself. It hands a
//! [`CookieDescriptor`] to the web layer, which renders it with
//! [`CookieDescriptor::to_header_value`].

use std::fmt;

use chrono::{DateTime, Utc};
use session_shared::{
    constants::{COOKIE_PATH, SESSION_COOKIE_NAME},
    Environment,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SameSite {
    Strict,
    Lax,
    None,
}

impl fmt::Display for SameSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            SameSite::Strict => "Strict",
            SameSite::Lax => "Lax",
            SameSite::None => "None",
        };
        f.write_str(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CookieDescriptor {
    pub name: &'static str,
    pub value: String,
    pub expires: DateTime<Utc>,
    pub http_only: bool,
    pub same_site: SameSite,
    pub path: &'static str,
    pub secure: bool,
    /// Set only on removal cookies.
    pub max_age: Option<i64>,
}

impl CookieDescriptor {
    /// Session cookie for a freshly issued token. The transport policy is fixed:
    /// only `secure` depends on the environment.
    pub fn session(token: String, expires: DateTime<Utc>, environment: Environment) -> Self {
        Self {
            name: SESSION_COOKIE_NAME,
            value: token,
            expires,
            http_only: true,
            same_site: SameSite::Lax,
            path: COOKIE_PATH,
            secure: environment.is_production(),
            max_age: None,
        }
    }

    /// Cookie that makes the browser drop the session on logout.
    pub fn removal(environment: Environment) -> Self {
        Self {
            max_age: Some(0),
            ..Self::session(String::new(), DateTime::<Utc>::UNIX_EPOCH, environment)
        }
    }

    /// Renders the `Set-Cookie` header value.
    pub fn to_header_value(&self) -> String {
        let mut header = format!(
            "{}={}; Path={}; Expires={}",
            self.name,
            self.value,
            self.path,
            self.expires.format("%a, %d %b %Y %H:%M:%S GMT"),
        );
        if let Some(max_age) = self.max_age {
            header.push_str(&format!("; Max-Age={}", max_age));
        }
        if self.http_only {
            header.push_str("; HttpOnly");
        }
        header.push_str(&format!("; SameSite={}", self.same_site));
        if self.secure {
            header.push_str("; Secure");
        }
        header
    }
}

/// Finds the value of cookie `name` in a raw `Cookie` request header.
pub fn cookie_value<'a>(header: &'a str, name: &str) -> Option<&'a str> {
    header
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| key.trim() == name)
        .map(|(_, value)| value.trim())
}
