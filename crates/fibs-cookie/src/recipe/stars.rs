//! Session lines that start with `*`, mostly `** ` server notices.

use super::Declaration;
use crate::cookie::Cookie;

#[rustfmt::skip]
pub(crate) const STARS: &[Declaration] = &[
    (Cookie::Username,            r"^\*\* User"),
    (Cookie::Junk,                r"^\*\* You tell "),
    (Cookie::YouGag,              r"^\*\* You gag"),
    (Cookie::YouUngag,            r"^\*\* You ungag"),
    (Cookie::YouBlind,            r"^\*\* You blind"),
    (Cookie::YouUnblind,          r"^\*\* You unblind"),
    (Cookie::UseToggleReady,      r"^\*\* Use 'toggle ready' first"),
    (Cookie::NewMatchAck9,        r"^\*\* You are now playing an unlimited match with "),
    (Cookie::NewMatchAck10,       r"^\*\* You are now playing a [0-9]+ point match with "),
    (Cookie::NewMatchAck2,        r"^\*\* Player [a-zA-Z_<>]+ has joined you for a"),
    (Cookie::YouTerminated,       r"^\*\* You terminated the game"),
    (Cookie::OpponentLeftGame,    r"^\*\* Player [a-zA-Z_<>]+ has left the game. The game was saved\."),
    (Cookie::PlayerLeftGame,      r"has left the game\."),
    (Cookie::YouInvited,          r"^\*\* You invited"),
    (Cookie::YourLastLogin,       r"^\*\* Last login:"),
    (Cookie::NoOne,               r"^\*\* There is no one called"),
    (Cookie::AllowpipFalse,       r"^\*\* You don't allow the use of the server's 'pip' command\."),
    (Cookie::AllowpipTrue,        r"^\*\* You allow the use the server's 'pip' command\."),
    (Cookie::AutoboardFalse,      r"^\*\* The board won't be refreshed"),
    (Cookie::AutoboardTrue,       r"^\*\* The board will be refreshed"),
    (Cookie::AutodoubleTrue,      r"^\*\* You agree that doublets"),
    (Cookie::AutodoubleFalse,     r"^\*\* You don't agree that doublets"),
    (Cookie::AutomoveFalse,       r"^\*\* Forced moves won't"),
    (Cookie::AutomoveTrue,        r"^\*\* Forced moves will"),
    (Cookie::BellFalse,           r"^\*\* Your terminal won't ring"),
    (Cookie::BellTrue,            r"^\*\* Your terminal will ring"),
    (Cookie::CrawfordFalse,       r"^\*\* You would like to play without using the Crawford rule\."),
    (Cookie::CrawfordTrue,        r"^\*\* You insist on playing with the Crawford rule\."),
    (Cookie::DoubleFalse,         r"^\*\* You won't be asked if you want to double\."),
    (Cookie::DoubleTrue,          r"^\*\* You will be asked if you want to double\."),
    (Cookie::GreedyTrue,          r"^\*\* Will use automatic greedy bearoffs\."),
    (Cookie::GreedyFalse,         r"^\*\* Won't use automatic greedy bearoffs\."),
    (Cookie::MoreboardsTrue,      r"^\*\* Will send rawboards after rolling\."),
    (Cookie::MoreboardsFalse,     r"^\*\* Won't send rawboards after rolling\."),
    (Cookie::MovesTrue,           r"^\*\* You want a list of moves after this game\."),
    (Cookie::MovesFalse,          r"^\*\* You won't see a list of moves after this game\."),
    (Cookie::NotifyFalse,         r"^\*\* You won't be notified"),
    (Cookie::NotifyTrue,          r"^\*\* You'll be notified"),
    (Cookie::RatingsTrue,         r"^\*\* You'll see how the rating changes are calculated\."),
    (Cookie::RatingsFalse,        r"^\*\* You won't see how the rating changes are calculated\."),
    (Cookie::ReadyTrue,           r"^\*\* You're now ready to invite or join someone\."),
    (Cookie::ReadyFalse,          r"^\*\* You're now refusing to play with someone\."),
    (Cookie::ReportFalse,         r"^\*\* You won't be informed"),
    (Cookie::ReportTrue,          r"^\*\* You will be informed"),
    (Cookie::SilentTrue,          r"^\*\* You won't hear what other players shout\."),
    (Cookie::SilentFalse,         r"^\*\* You will hear what other players shout\."),
    (Cookie::TelnetFalse,         r"^\*\* You use a client program"),
    (Cookie::TelnetTrue,          r"^\*\* You use telnet"),
    (Cookie::WrapFalse,           r"^\*\* The server will wrap"),
    (Cookie::WrapTrue,            r"^\*\* Your terminal knows how to wrap"),
    (Cookie::PlayerRefusingGames, r"^\*\* [a-zA-Z_<>]+ is refusing games\."),
    (Cookie::NotWatching,         r"^\*\* You're not watching\."),
    (Cookie::NotWatchingPlaying,  r"^\*\* You're not watching or playing\."),
    (Cookie::NotPlaying,          r"^\*\* You're not playing\."),
    // Shadowed by `NoOne` above; kept so the code stays published.
    (Cookie::NoUser,              r"^\*\* There is no one called "),
    (Cookie::AlreadyPlaying,      r"is already playing with"),
    (Cookie::DidntInvite,         r"^\*\* [a-zA-Z_<>]+ didn't invite you."),
    (Cookie::BadMove,             r"^\*\* You can't remove this piece"),
    (Cookie::CantMoveFirstMove,   r"^\*\* You can't move "),
    (Cookie::CantShout,           r"^\*\* Please type 'toggle silent' again before you shout\."),
    (Cookie::MustMove,            r"^\*\* You must give [1-4] moves"),
    (Cookie::MustComeIn,          r"^\*\* You have to remove pieces from the bar in your first move\."),
    (Cookie::UsersHeardYou,       r"^\*\* [0-9]+ users? heard you\."),
    (Cookie::Junk,                r"^\*\* Please wait for [a-zA-Z_<>]+ to join too\."),
    // `**name` with no space: a saved match with a player who is ready.
    (Cookie::SavedMatchReady,     r"^\*\*[a-zA-Z_<>]+ +[0-9]+ +[0-9]+ +- +[0-9]+"),
    (Cookie::NotYourTurnToRoll,   r"^\*\* It's not your turn to roll the dice\."),
    (Cookie::NotYourTurnToMove,   r"^\*\* It's not your turn to move\."),
    (Cookie::YouStopWatching,     r"^\*\* You stop watching"),
    (Cookie::UnknownCommand,      r"^\*\* Unknown command:"),
    (Cookie::CantWatch,           r"^\*\* You can't watch another game while you're playing\."),
    (Cookie::CantInviteSelf,      r"^\*\* You can't invite yourself\."),
    (Cookie::DontKnowUser,        r"^\*\* Don't know user"),
    (Cookie::MessageUsage,        r"^\*\* usage: message <user> <text>"),
    (Cookie::PlayerNotPlaying,    r"^\*\* [a-zA-Z_<>]+ is not playing\."),
    (Cookie::CantTalk,            r"^\*\* You can't talk if you won't listen\."),
    (Cookie::WontListen,          r"^\*\* [a-zA-Z_<>]+ won't listen to you\."),
    (Cookie::Why,                 r"Why would you want to do that"),
    (Cookie::Ratings,             r"^\* *[0-9]+ +[a-zA-Z_<>]+ +[0-9]+\.[0-9]+ +[0-9]+"),
    (Cookie::NoSavedMatch,        r"^\*\* There's no saved match with "),
    (Cookie::WarningSavedMatch,   r"^\*\* WARNING: Don't accept if you want to continue"),
    (Cookie::CantGagYourself,     r"^\*\* You talk too much, don't you\?"),
    (Cookie::CantBlindYourself,   r"^\*\* You can't read this message now, can you\?"),
];
