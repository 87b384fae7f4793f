//! Session lines that start with a digit: CLIP records and command output.

use super::Declaration;
use crate::cookie::Cookie;

#[rustfmt::skip]
pub(crate) const NUMERIC: &[Declaration] = &[
    (Cookie::WhoInfo,          r"^5 [^ ]+ - - [01]"),
    (Cookie::WhoInfo,          r"^5 [^ ]+ [^ ]+ - [01]"),
    (Cookie::WhoInfo,          r"^5 [^ ]+ - [^ ]+ [01]"),
    (Cookie::Average,          r"^[0-9][0-9]:[0-9][0-9]-"),
    (Cookie::DiceTest,         r"^[1-6]-1 [0-9]"),
    (Cookie::DiceTest,         r"^[1-6]: [0-9]"),
    (Cookie::Stat,             r"^[0-9]+ bytes"),
    (Cookie::Stat,             r"^[0-9]+ accounts"),
    (Cookie::Stat,             r"^[0-9]+ ratings saved. reset log"),
    (Cookie::Stat,             r"^[0-9]+ registered users."),
    (Cookie::Stat,             r"^[0-9]+\([0-9]+\) saved games check by cron"),
    // CLIP records.
    (Cookie::WhoEnd,           r"^6$"),
    (Cookie::Shouts,           r"^13 [a-zA-Z_<>]+ "),
    (Cookie::Says,             r"^12 [a-zA-Z_<>]+ "),
    (Cookie::Whispers,         r"^14 [a-zA-Z_<>]+ "),
    (Cookie::Kibitzes,         r"^15 [a-zA-Z_<>]+ "),
    (Cookie::YouSay,           r"^16 [a-zA-Z_<>]+ "),
    (Cookie::YouShout,         r"^17 "),
    (Cookie::YouWhisper,       r"^18 "),
    (Cookie::YouKibitz,        r"^19 "),
    (Cookie::Alert,            r"^20 [a-zA-Z_<>]+ "),
    (Cookie::Login,            r"^7 [a-zA-Z_<>]+ "),
    (Cookie::Logout,           r"^8 [a-zA-Z_<>]+ "),
    (Cookie::Message,          r"^9 [a-zA-Z_<>]+ [0-9]+ "),
    (Cookie::MessageDelivered, r"^10 [a-zA-Z_<>]+$"),
    (Cookie::MessageSaved,     r"^11 [a-zA-Z_<>]+$"),
];
