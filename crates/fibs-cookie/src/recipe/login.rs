//! Lines seen before the session starts.

use super::Declaration;
use crate::cookie::Cookie;

#[rustfmt::skip]
pub(crate) const LOGIN: &[Declaration] = &[
    (Cookie::LoginPrompt, r"^login:"),
    (Cookie::Welcome,     r"^1 [a-zA-Z_<>]+ [0-9]+ "),
    (Cookie::OwnInfo,     r"^2 [a-zA-Z_<>]+ [01] [01]"),
    (Cookie::MotdBegin,   r"^3$"),
    (Cookie::FailedLogin, r"^> [0-9]+"),
];

#[rustfmt::skip]
pub(crate) const MOTD: &[Declaration] = &[
    (Cookie::MotdEnd, r"^4$"),
];
