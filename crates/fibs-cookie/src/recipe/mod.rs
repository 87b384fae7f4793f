//! Pattern declarations for every batch.
//!
//! Each batch is an ordered list of `(cookie, pattern)` pairs. The first
//! pattern that matches a line decides its cookie, so order inside a list is
//! part of the published behaviour: moving an entry changes results for any
//! line two entries both match. Several entries repeat the same cookie, or
//! the same text under different cookies in different batches, and are kept
//! that way on purpose.
//!
//! Patterns use [`regex`] syntax. Anchoring is part of each pattern.

mod alpha;
mod login;
mod numeric;
mod stars;

use crate::batch::BatchKind;
use crate::cookie::Cookie;

/// A single `(cookie, pattern)` rule.
pub type Declaration = (Cookie, &'static str);

/// The declarations a [`PatternTable`](crate::PatternTable) is built from.
///
/// [`Recipe::FIBS`] is the published table. Other recipes are mostly useful
/// for testing the engine against small, hand-written batches.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Recipe {
    /// Searched while waiting for login to complete.
    pub login: &'static [Declaration],
    /// Searched during the message of the day.
    pub motd: &'static [Declaration],
    /// Session lines starting with anything but a digit or `*`.
    pub alpha: &'static [Declaration],
    /// Session lines starting with an ASCII digit.
    pub numeric: &'static [Declaration],
    /// Session lines starting with `*`.
    pub stars: &'static [Declaration],
}

impl Recipe {
    /// The FIBS pattern table.
    pub const FIBS: Recipe = Recipe {
        login: login::LOGIN,
        motd: login::MOTD,
        alpha: alpha::ALPHA,
        numeric: numeric::NUMERIC,
        stars: stars::STARS,
    };

    /// A recipe with no declarations at all; every search falls through to
    /// its default.
    pub const EMPTY: Recipe = Recipe {
        login: &[],
        motd: &[],
        alpha: &[],
        numeric: &[],
        stars: &[],
    };

    /// Declarations for one batch.
    pub fn declarations(&self, kind: BatchKind) -> &'static [Declaration] {
        match kind {
            BatchKind::Login => self.login,
            BatchKind::Motd => self.motd,
            BatchKind::Alpha => self.alpha,
            BatchKind::Numeric => self.numeric,
            BatchKind::Stars => self.stars,
        }
    }

    /// Total number of declarations across all batches.
    pub fn len(&self) -> usize {
        BatchKind::BUILD_ORDER
            .iter()
            .map(|kind| self.declarations(*kind).len())
            .sum()
    }

    /// Returns true if no batch has any declaration.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Cookies that appear in at least one declaration, ascending, without
    /// duplicates.
    pub fn cookies(&self) -> Vec<Cookie> {
        let mut cookies: Vec<Cookie> = BatchKind::BUILD_ORDER
            .iter()
            .flat_map(|kind| self.declarations(*kind).iter().map(|(cookie, _)| *cookie))
            .collect();
        cookies.sort_unstable();
        cookies.dedup();
        cookies
    }
}

impl Default for Recipe {
    fn default() -> Self {
        Recipe::FIBS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fibs_batch_sizes() {
        let recipe = Recipe::FIBS;
        assert_eq!(recipe.alpha.len(), 163);
        assert_eq!(recipe.numeric.len(), 26);
        assert_eq!(recipe.stars.len(), 82);
        assert_eq!(recipe.login.len(), 5);
        assert_eq!(recipe.motd.len(), 1);
        assert_eq!(recipe.len(), 277);
    }

    #[test]
    fn first_entries_are_stable() {
        assert_eq!(Recipe::FIBS.alpha[0].0, Cookie::Board);
        assert_eq!(Recipe::FIBS.numeric[0].0, Cookie::WhoInfo);
        assert_eq!(Recipe::FIBS.stars[0], (Cookie::Username, r"^\*\* User"));
        assert_eq!(Recipe::FIBS.login[0], (Cookie::LoginPrompt, "^login:"));
        assert_eq!(Recipe::FIBS.motd, &[(Cookie::MotdEnd, "^4$")]);
    }

    #[test]
    fn clip_session_records_live_in_numeric_batch() {
        let numeric: Vec<Cookie> = Recipe::FIBS.numeric.iter().map(|(c, _)| *c).collect();
        for cookie in [
            Cookie::WhoInfo,
            Cookie::WhoEnd,
            Cookie::Login,
            Cookie::Logout,
            Cookie::Message,
            Cookie::MessageDelivered,
            Cookie::MessageSaved,
            Cookie::Says,
            Cookie::Shouts,
            Cookie::Whispers,
            Cookie::Kibitzes,
            Cookie::YouSay,
            Cookie::YouShout,
            Cookie::YouWhisper,
            Cookie::YouKibitz,
            Cookie::Alert,
        ] {
            assert!(numeric.contains(&cookie), "{} missing", cookie);
        }
    }

    #[test]
    fn bookkeeping_cookies_are_never_declared() {
        let declared = Recipe::FIBS.cookies();
        for cookie in [
            Cookie::PreLogin,
            Cookie::MotdLine,
            Cookie::Empty,
            Cookie::Unknown,
            Cookie::PostGoodbye,
        ] {
            assert!(!declared.contains(&cookie), "{} is declared", cookie);
        }
    }

    #[test]
    fn every_published_cookie_is_declared_or_bookkeeping() {
        let declared = Recipe::FIBS.cookies();
        let bookkeeping = [
            Cookie::PreLogin,
            Cookie::MotdLine,
            Cookie::Empty,
            Cookie::Unknown,
            Cookie::PostGoodbye,
        ];
        for cookie in Cookie::ALL {
            assert!(
                declared.contains(cookie) || bookkeeping.contains(cookie),
                "{} has no declaration",
                cookie
            );
        }
        assert_eq!(declared.len() + bookkeeping.len(), Cookie::ALL.len());
    }

    #[test]
    fn empty_recipe() {
        assert!(Recipe::EMPTY.is_empty());
        assert!(!Recipe::FIBS.is_empty());
        assert_eq!(Recipe::default(), Recipe::FIBS);
    }
}
