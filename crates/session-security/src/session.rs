//! Session claims and issuance result

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::cookie::CookieDescriptor;

/// Identity carried inside a session token. Strings are kept exactly as
/// issued, including empty and non-ASCII values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionClaims {
    pub user_id: String,
    pub email: String,
    #[serde(with = "millis_rfc3339")]
    pub expires_at: DateTime<Utc>,
}

impl SessionClaims {
    /// Valid through the exact expiry instant.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now > self.expires_at
    }
}

/// Output of a successful issue: the bearer token and the cookie that
/// transports it.
#[derive(Debug, Clone)]
pub struct IssuedSession {
    pub token: String,
    pub claims: SessionClaims,
    pub cookie: CookieDescriptor,
}

/// `expiresAt` on the wire: written as RFC 3339 with millisecond precision
/// and a `Z` suffix. Read from either that form or epoch milliseconds.
pub(crate) mod millis_rfc3339 {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{de::Error, Deserialize, Deserializer, Serializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawInstant {
        Text(String),
        Millis(i64),
    }

    pub fn serialize<S: Serializer>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
        match RawInstant::deserialize(deserializer)? {
            RawInstant::Text(raw) => DateTime::parse_from_rfc3339(&raw)
                .map(|dt| dt.with_timezone(&Utc))
                .map_err(D::Error::custom),
            RawInstant::Millis(millis) => DateTime::from_timestamp_millis(millis)
                .ok_or_else(|| D::Error::custom("expiresAt out of range")),
        }
    }
}
