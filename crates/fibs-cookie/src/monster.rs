//! Phase-aware classification engine.
//!
//! The same text means different things depending on how far the session
//! has got, so the engine tracks a coarse [`Phase`] and searches the batch
//! that belongs to it:
//!
//! ```text
//! Uninitialized -> PreLogin -> Motd -> InSession -> LoggedOut
//! ```
//!
//! There are no backward edges except [`CookieMonster::reset`], which can be
//! called from any phase. The engine does no I/O; callers feed it one line
//! at a time.
//!
//! # Example
//!
//! ```
//! use fibs_cookie::{Cookie, CookieMonster, Phase};
//!
//! let mut monster = CookieMonster::new();
//! assert_eq!(monster.classify("login:").unwrap(), Cookie::LoginPrompt);
//! assert_eq!(monster.classify("3").unwrap(), Cookie::MotdBegin);
//! assert_eq!(monster.classify("| Welcome to FIBS |").unwrap(), Cookie::MotdLine);
//! assert_eq!(monster.classify("4").unwrap(), Cookie::MotdEnd);
//! assert_eq!(monster.phase(), Phase::InSession);
//! assert_eq!(monster.classify("12 marv hi there").unwrap(), Cookie::Says);
//! ```

use tracing::{debug, warn};

use crate::batch::BatchKind;
use crate::cookie::Cookie;
use crate::error::Result;
use crate::recipe::Recipe;
use crate::table::PatternTable;

/// Coarse stage of a server session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    /// No table built yet, or the table was released.
    #[default]
    Uninitialized,
    /// Waiting for login to complete.
    PreLogin,
    /// Inside the message of the day.
    Motd,
    /// Normal traffic after the message of the day.
    InSession,
    /// The server ended the session. Only a reset leaves this phase.
    LoggedOut,
}

impl Phase {
    /// Returns the phase name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Uninitialized => "uninitialized",
            Self::PreLogin => "pre-login",
            Self::Motd => "motd",
            Self::InSession => "in-session",
            Self::LoggedOut => "logged-out",
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classifies server lines into [`Cookie`]s.
///
/// One instance tracks one session. Independent sessions use independent
/// instances; nothing is shared between them.
#[derive(Debug)]
pub struct CookieMonster {
    recipe: Recipe,
    phase: Phase,
    table: Option<PatternTable>,
}

impl CookieMonster {
    /// Creates an engine over the published FIBS table.
    ///
    /// Nothing is compiled until the first line arrives or
    /// [`ensure_ready`](Self::ensure_ready) is called.
    pub fn new() -> Self {
        Self::with_recipe(Recipe::FIBS)
    }

    /// Creates an engine over custom declarations.
    pub fn with_recipe(recipe: Recipe) -> Self {
        Self {
            recipe,
            phase: Phase::Uninitialized,
            table: None,
        }
    }

    /// Current phase.
    #[inline]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns true while a compiled table is held.
    #[inline]
    pub fn is_ready(&self) -> bool {
        self.table.is_some()
    }

    /// The declarations this engine compiles.
    pub fn recipe(&self) -> &Recipe {
        &self.recipe
    }

    /// Classifies one line. The line must not include its terminator.
    ///
    /// The first call (and the first call after [`release`](Self::release))
    /// builds the table and then classifies the line from
    /// [`Phase::PreLogin`]. The only error is a failed build.
    pub fn classify(&mut self, line: &str) -> Result<Cookie> {
        if self.phase == Phase::Uninitialized {
            self.ensure_ready()?;
        }
        match self.phase {
            Phase::Uninitialized | Phase::PreLogin => self.pre_login(line),
            Phase::Motd => self.motd(line),
            Phase::InSession => self.in_session(line),
            Phase::LoggedOut => Ok(Cookie::PostGoodbye),
        }
    }

    /// Builds the table if it is missing and leaves
    /// [`Phase::Uninitialized`] for [`Phase::PreLogin`]. Any other phase is
    /// kept. Calling it again is a no-op.
    pub fn ensure_ready(&mut self) -> Result<()> {
        self.table()?;
        if self.phase == Phase::Uninitialized {
            self.transition(Phase::PreLogin);
        }
        Ok(())
    }

    /// Starts over at [`Phase::PreLogin`], e.g. before reconnecting.
    ///
    /// An existing table is reused; a missing one is built.
    pub fn reset(&mut self) -> Result<()> {
        self.table()?;
        self.transition(Phase::PreLogin);
        Ok(())
    }

    /// Drops the compiled table and returns to [`Phase::Uninitialized`].
    ///
    /// Safe to call any number of times. The next
    /// [`classify`](Self::classify) rebuilds transparently.
    pub fn release(&mut self) {
        if self.table.take().is_some() {
            debug!("Pattern table released");
        }
        self.transition(Phase::Uninitialized);
    }

    fn pre_login(&mut self, line: &str) -> Result<Cookie> {
        let cookie = self.search(BatchKind::Login, line, Cookie::PreLogin)?;
        if cookie == Cookie::MotdBegin {
            self.transition(Phase::Motd);
        }
        Ok(cookie)
    }

    fn motd(&mut self, line: &str) -> Result<Cookie> {
        let cookie = self.search(BatchKind::Motd, line, Cookie::MotdLine)?;
        if cookie == Cookie::MotdEnd {
            self.transition(Phase::InSession);
        }
        Ok(cookie)
    }

    fn in_session(&mut self, line: &str) -> Result<Cookie> {
        if line.is_empty() {
            return Ok(Cookie::Empty);
        }
        let kind = BatchKind::for_session_line(line);
        let cookie = self.search(kind, line, Cookie::Unknown)?;
        if cookie.ends_session() {
            warn!(cookie = %cookie, "Server ended the session");
            self.release();
            self.transition(Phase::LoggedOut);
        }
        Ok(cookie)
    }

    fn search(&mut self, kind: BatchKind, line: &str, default: Cookie) -> Result<Cookie> {
        Ok(self.table()?.batch(kind).search(line, default))
    }

    fn table(&mut self) -> Result<&PatternTable> {
        let table = match self.table.take() {
            Some(table) => table,
            None => PatternTable::build(&self.recipe)?,
        };
        Ok(self.table.insert(table))
    }

    fn transition(&mut self, to: Phase) {
        if self.phase != to {
            debug!(from = %self.phase, to = %to, "Phase transition");
            self.phase = to;
        }
    }
}

impl Default for CookieMonster {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recipe::Declaration;

    fn in_session() -> CookieMonster {
        let mut monster = CookieMonster::new();
        monster.reset().unwrap();
        for line in ["3", "4"] {
            monster.classify(line).unwrap();
        }
        assert_eq!(monster.phase(), Phase::InSession);
        monster
    }

    #[test]
    fn starts_uninitialized_and_lazy() {
        let monster = CookieMonster::new();
        assert_eq!(monster.phase(), Phase::Uninitialized);
        assert!(!monster.is_ready());
    }

    #[test]
    fn first_line_is_classified_not_dropped() {
        let mut monster = CookieMonster::new();
        assert_eq!(monster.classify("3").unwrap(), Cookie::MotdBegin);
        assert_eq!(monster.phase(), Phase::Motd);
        assert!(monster.is_ready());
    }

    #[test]
    fn pre_login_default() {
        let mut monster = CookieMonster::new();
        assert_eq!(
            monster.classify("Welcome to the First Internet Backgammon Server").unwrap(),
            Cookie::PreLogin
        );
        assert_eq!(monster.phase(), Phase::PreLogin);
    }

    #[test]
    fn failed_login_records() {
        let mut monster = CookieMonster::new();
        assert_eq!(monster.classify("> 2").unwrap(), Cookie::FailedLogin);
        assert_eq!(monster.phase(), Phase::PreLogin);
    }

    #[test]
    fn motd_lines_until_end_marker() {
        let mut monster = CookieMonster::new();
        monster.classify("3").unwrap();
        assert_eq!(monster.classify("3").unwrap(), Cookie::MotdLine);
        assert_eq!(monster.classify("login:").unwrap(), Cookie::MotdLine);
        assert_eq!(monster.classify("").unwrap(), Cookie::MotdLine);
        assert_eq!(monster.phase(), Phase::Motd);
        assert_eq!(monster.classify("4").unwrap(), Cookie::MotdEnd);
        assert_eq!(monster.phase(), Phase::InSession);
    }

    #[test]
    fn session_batches_by_first_character() {
        let mut monster = in_session();
        assert_eq!(monster.classify("7 marv marv 1041253132 1").unwrap(), Cookie::Login);
        assert_eq!(monster.classify("** You gag marv.").unwrap(), Cookie::YouGag);
        assert_eq!(monster.classify("You roll 3 and 5.").unwrap(), Cookie::YouRoll);
        assert_eq!(monster.classify("zzz unheard of").unwrap(), Cookie::Unknown);
        assert_eq!(monster.classify("").unwrap(), Cookie::Empty);
        assert_eq!(monster.phase(), Phase::InSession);
    }

    #[test]
    fn timeout_ends_session() {
        let mut monster = in_session();
        assert_eq!(monster.classify("Connection timed out.").unwrap(), Cookie::Timeout);
        assert_eq!(monster.phase(), Phase::LoggedOut);
        assert!(!monster.is_ready());
        assert_eq!(monster.classify("4").unwrap(), Cookie::PostGoodbye);
    }

    #[test]
    fn reset_after_logout_rebuilds() {
        let mut monster = in_session();
        monster.classify("           Goodbye.").unwrap();
        monster.reset().unwrap();
        assert!(monster.is_ready());
        assert_eq!(monster.phase(), Phase::PreLogin);
        assert_eq!(monster.classify("login:").unwrap(), Cookie::LoginPrompt);
    }

    #[test]
    fn release_from_logged_out_returns_to_uninitialized() {
        let mut monster = in_session();
        monster.classify("           Goodbye.").unwrap();
        monster.release();
        assert_eq!(monster.phase(), Phase::Uninitialized);
        assert_eq!(monster.classify("login:").unwrap(), Cookie::LoginPrompt);
    }

    #[test]
    fn ensure_ready_keeps_logged_out() {
        let mut monster = in_session();
        monster.classify("Connection timed out.").unwrap();
        monster.ensure_ready().unwrap();
        assert!(monster.is_ready());
        assert_eq!(monster.phase(), Phase::LoggedOut);
    }

    #[test]
    fn broken_recipe_stays_uninitialized() {
        const BROKEN: &[Declaration] = &[(Cookie::LoginPrompt, "^login:[")];
        let mut monster = CookieMonster::with_recipe(Recipe {
            login: BROKEN,
            ..Recipe::FIBS
        });
        let err = monster.classify("login:").unwrap_err();
        assert!(err.is_initialization());
        assert_eq!(monster.phase(), Phase::Uninitialized);
        assert!(!monster.is_ready());
        assert!(monster.reset().is_err());
        assert_eq!(monster.phase(), Phase::Uninitialized);
    }

    #[test]
    fn phase_names() {
        assert_eq!(Phase::default(), Phase::Uninitialized);
        assert_eq!(Phase::InSession.to_string(), "in-session");
        assert_eq!(Phase::LoggedOut.as_str(), "logged-out");
    }
}
