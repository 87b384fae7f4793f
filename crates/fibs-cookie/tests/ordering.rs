//! First-match-wins ordering, checked with small hand-written recipes.

use fibs_cookie::{Cookie, CookieMonster, Declaration, Phase, Recipe};

const LOGIN: &[Declaration] = &[(Cookie::MotdBegin, r"^3$")];
const MOTD: &[Declaration] = &[(Cookie::MotdEnd, r"^4$")];

fn session(alpha: &'static [Declaration]) -> CookieMonster {
    let mut monster = CookieMonster::with_recipe(Recipe {
        login: LOGIN,
        motd: MOTD,
        alpha,
        ..Recipe::EMPTY
    });
    monster.classify("3").unwrap();
    monster.classify("4").unwrap();
    assert_eq!(monster.phase(), Phase::InSession);
    monster
}

#[test]
fn test_earlier_entry_wins() {
    const ORDER: &[Declaration] = &[
        (Cookie::YouRoll, r"^You roll"),
        (Cookie::Junk, r"^You"),
    ];
    let mut monster = session(ORDER);
    assert_eq!(monster.classify("You roll 3 and 5.").unwrap(), Cookie::YouRoll);
    assert_eq!(monster.classify("You win.").unwrap(), Cookie::Junk);
}

#[test]
fn test_swapping_entries_flips_result() {
    const SWAPPED: &[Declaration] = &[
        (Cookie::Junk, r"^You"),
        (Cookie::YouRoll, r"^You roll"),
    ];
    let mut monster = session(SWAPPED);
    assert_eq!(monster.classify("You roll 3 and 5.").unwrap(), Cookie::Junk);
}

#[test]
fn test_unanchored_pattern_matches_anywhere() {
    const LOOSE: &[Declaration] = &[(Cookie::Waves, r"waves goodbye")];
    let mut monster = session(LOOSE);
    assert_eq!(monster.classify("marv waves goodbye.").unwrap(), Cookie::Waves);
    assert_eq!(monster.classify("goodbye waves").unwrap(), Cookie::Unknown);
}

#[test]
fn test_empty_session_line_skips_search() {
    // Matches every line, the empty one included.
    const GREEDY: &[Declaration] = &[(Cookie::Junk, r"^")];
    let mut monster = session(GREEDY);
    assert_eq!(monster.classify("").unwrap(), Cookie::Empty);
    assert_eq!(monster.classify("x").unwrap(), Cookie::Junk);
}

#[test]
fn test_batches_do_not_leak_into_each_other() {
    const ALPHA: &[Declaration] = &[(Cookie::Junk, r"[0-9*]")];
    let mut monster = session(ALPHA);
    assert_eq!(monster.classify("12 marv hi").unwrap(), Cookie::Unknown);
    assert_eq!(monster.classify("** You gag marv.").unwrap(), Cookie::Unknown);
    assert_eq!(monster.classify("a1").unwrap(), Cookie::Junk);
}

#[test]
fn test_first_match_in_published_stars_batch() {
    // Both `NoOne` and `NoUser` describe this line; the earlier one wins.
    let mut monster = CookieMonster::new();
    monster.classify("3").unwrap();
    monster.classify("4").unwrap();
    assert_eq!(
        monster.classify("** There is no one called marvin").unwrap(),
        Cookie::NoOne
    );
}

#[test]
fn test_empty_recipe_falls_through_every_phase() {
    let mut monster = CookieMonster::with_recipe(Recipe::EMPTY);
    assert_eq!(monster.classify("3").unwrap(), Cookie::PreLogin);
    assert_eq!(monster.classify("login:").unwrap(), Cookie::PreLogin);
    assert_eq!(monster.phase(), Phase::PreLogin);
}
