//! Compiled batches and the first-match search over them.
//!
//! A [`Batch`] is an ordered run of [`PatternEntry`] values. Searching it
//! walks the entries in declaration order and stops at the first pattern
//! that matches anywhere the pattern allows; no captures are taken. The
//! tables are small enough that a linear walk is cheap, and the walk is what
//! gives the ordering guarantees the declarations rely on.

use regex::Regex;
use tracing::error;

use crate::cookie::Cookie;
use crate::error::{CookieError, Result};
use crate::recipe::Declaration;

/// Names the five batches of a pattern table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BatchKind {
    /// Before login completes.
    Login,
    /// Message of the day.
    Motd,
    /// Session lines starting with anything but a digit or `*`.
    Alpha,
    /// Session lines starting with an ASCII digit.
    Numeric,
    /// Session lines starting with `*`.
    Stars,
}

impl BatchKind {
    /// Order in which a table compiles its batches.
    pub const BUILD_ORDER: [BatchKind; 5] = [
        BatchKind::Alpha,
        BatchKind::Numeric,
        BatchKind::Stars,
        BatchKind::Login,
        BatchKind::Motd,
    ];

    /// Returns the batch name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Login => "login",
            Self::Motd => "motd",
            Self::Alpha => "alpha",
            Self::Numeric => "numeric",
            Self::Stars => "stars",
        }
    }

    /// Picks the batch for a line seen during the session.
    ///
    /// Only the first byte is inspected: an ASCII digit selects
    /// [`Numeric`](Self::Numeric), `*` selects [`Stars`](Self::Stars) and
    /// anything else (including an empty line) selects
    /// [`Alpha`](Self::Alpha).
    ///
    /// # Example
    ///
    /// ```
    /// use fibs_cookie::BatchKind;
    ///
    /// assert_eq!(BatchKind::for_session_line("12 marv hello"), BatchKind::Numeric);
    /// assert_eq!(BatchKind::for_session_line("** You gag marv."), BatchKind::Stars);
    /// assert_eq!(BatchKind::for_session_line("marv moves 8-5"), BatchKind::Alpha);
    /// ```
    #[inline]
    pub fn for_session_line(line: &str) -> BatchKind {
        match line.as_bytes().first() {
            Some(b) if b.is_ascii_digit() => BatchKind::Numeric,
            Some(b'*') => BatchKind::Stars,
            _ => BatchKind::Alpha,
        }
    }
}

impl std::fmt::Display for BatchKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One compiled rule: a pattern and the cookie it yields.
#[derive(Clone, Debug)]
pub struct PatternEntry {
    regex: Regex,
    cookie: Cookie,
}

impl PatternEntry {
    /// Compiles a single rule.
    pub fn new(cookie: Cookie, pattern: &str) -> std::result::Result<Self, regex::Error> {
        Ok(Self {
            regex: Regex::new(pattern)?,
            cookie,
        })
    }

    /// Cookie yielded when this entry matches.
    #[inline]
    pub fn cookie(&self) -> Cookie {
        self.cookie
    }

    /// The pattern text this entry was compiled from.
    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }

    /// Returns true if the pattern matches the line.
    #[inline]
    pub fn matches(&self, line: &str) -> bool {
        self.regex.is_match(line)
    }
}

/// An ordered, fully compiled batch.
#[derive(Clone, Debug)]
pub struct Batch {
    kind: BatchKind,
    entries: Vec<PatternEntry>,
}

impl Batch {
    /// Compiles every declaration in order.
    ///
    /// Stops at the first pattern that fails to compile. Entries compiled so
    /// far are dropped with the partial batch and the error names the
    /// offending declaration.
    pub fn compile(kind: BatchKind, declarations: &[Declaration]) -> Result<Self> {
        let mut entries = Vec::with_capacity(declarations.len());
        for (cookie, pattern) in declarations {
            let entry = PatternEntry::new(*cookie, pattern).map_err(|source| {
                error!(
                    batch = %kind,
                    cookie = %cookie,
                    pattern = %pattern,
                    error = %source,
                    "Cannot compile pattern"
                );
                CookieError::PatternCompile {
                    batch: kind,
                    cookie: *cookie,
                    pattern: (*pattern).to_string(),
                    source,
                }
            })?;
            entries.push(entry);
        }
        Ok(Self { kind, entries })
    }

    /// Which batch this is.
    #[inline]
    pub fn kind(&self) -> BatchKind {
        self.kind
    }

    /// Returns the cookie of the first entry matching `line`, or `default`
    /// when none does.
    pub fn search(&self, line: &str, default: Cookie) -> Cookie {
        self.entries
            .iter()
            .find(|entry| entry.matches(line))
            .map_or(default, PatternEntry::cookie)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the batch has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in declaration order.
    pub fn iter(&self) -> std::slice::Iter<'_, PatternEntry> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a Batch {
    type Item = &'a PatternEntry;
    type IntoIter = std::slice::Iter<'a, PatternEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
