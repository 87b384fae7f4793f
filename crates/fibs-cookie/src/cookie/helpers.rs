//! Conversions and predicates for [`Cookie`].

use super::Cookie;
use std::str::FromStr;

impl Cookie {
    /// Last code belonging to the CLIP sub-protocol.
    pub const LAST_CLIP: Cookie = Cookie::Alert;

    /// Returns the numeric code as u16
    #[inline]
    pub fn code(&self) -> u16 {
        *self as u16
    }

    /// Check if this code is a CLIP record type (1-20)
    #[inline]
    pub fn is_clip(&self) -> bool {
        self.code() <= Cookie::LAST_CLIP.code()
    }

    /// Check if this code ends the session.
    ///
    /// Seeing one of these while in session retires the engine until the
    /// next reset.
    #[inline]
    pub fn ends_session(&self) -> bool {
        matches!(self, Cookie::Goodbye | Cookie::Timeout)
    }
}

impl From<Cookie> for u16 {
    fn from(cookie: Cookie) -> u16 {
        cookie.code()
    }
}

impl TryFrom<u16> for Cookie {
    type Error = ParseCookieError;

    fn try_from(code: u16) -> Result<Self, Self::Error> {
        Cookie::from_code(code).ok_or(ParseCookieError::UnknownCode(code))
    }
}

/// Parses either a numeric code (`"12"`) or a symbolic name (`"Says"`).
impl FromStr for Cookie {
    type Err = ParseCookieError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ParseCookieError::InvalidFormat);
        }
        if s.bytes().all(|b| b.is_ascii_digit()) {
            let code: u16 = s.parse().map_err(|_| ParseCookieError::InvalidFormat)?;
            return Cookie::try_from(code);
        }
        Cookie::ALL
            .iter()
            .copied()
            .find(|cookie| cookie.as_str() == s)
            .ok_or_else(|| ParseCookieError::UnknownName(s.to_string()))
    }
}

impl std::fmt::Display for Cookie {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error when parsing a cookie
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ParseCookieError {
    /// The string was empty or not a valid number
    InvalidFormat,
    /// The numeric code is not a known cookie
    UnknownCode(u16),
    /// The name is not a known cookie
    UnknownName(String),
}

impl std::fmt::Display for ParseCookieError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidFormat => write!(f, "invalid cookie format"),
            Self::UnknownCode(code) => write!(f, "unknown cookie code: {}", code),
            Self::UnknownName(name) => write!(f, "unknown cookie name: {}", name),
        }
    }
}

impl std::error::Error for ParseCookieError {}
