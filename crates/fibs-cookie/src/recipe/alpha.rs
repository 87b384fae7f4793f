//! Session lines that start with anything but a digit or `*`.

use super::Declaration;
use crate::cookie::Cookie;

#[rustfmt::skip]
pub(crate) const ALPHA: &[Declaration] = &[
    // Complete rawboards first; any other `board:` line is truncated.
    (Cookie::Board,                         r"^board:[a-zA-Z_<>]+:[a-zA-Z_<>]+:[0-9:\-]+$"),
    (Cookie::BadBoard,                      r"^board:"),
    (Cookie::YouRoll,                       r"^You roll [1-6] and [1-6]"),
    (Cookie::PlayerRolls,                   r"^[a-zA-Z_<>]+ rolls [1-6] and [1-6]"),
    (Cookie::RollOrDouble,                  r"^It's your turn to roll or double\."),
    (Cookie::RollOrDouble,                  r"^It's your turn\. Please roll or double"),
    (Cookie::AcceptRejectDouble,            r"doubles\. Type 'accept' or 'reject'\."),
    (Cookie::Doubles,                       r"^[a-zA-Z_<>]+ doubles\."),
    (Cookie::PlayerAcceptsDouble,           r"accepts the double\."),
    (Cookie::PleaseMove,                    r"^Please move [1-4] pieces?\."),
    (Cookie::PlayerMoves,                   r"^[a-zA-Z_<>]+ moves"),
    (Cookie::BearingOff,                    r"^Bearing off:"),
    (Cookie::YouReject,                     r"^You reject\. The game continues\."),
    (Cookie::YouStopWatching,               r"You're not watching anymore\."),
    (Cookie::OpponentLogsOut,               r"The game was saved\."),
    (Cookie::OnlyPossibleMove,              r"^The only possible move is"),
    (Cookie::FirstRoll,                     r"[a-zA-Z_<>]+ rolled [1-6].+rolled [1-6]"),
    (Cookie::MakesFirstMove,                r" makes the first move\."),
    (Cookie::YouDouble,                     r"^You double\. Please wait for "),
    (Cookie::PlayerWantsToResign,           r"^[a-zA-Z_<>]+ wants to resign\. You will win [0-9]+ points?\. Type 'accept' or 'reject'\."),
    // The offer addressed to you is the longer line and must be tried first.
    (Cookie::WatchResign,                   r"^[a-zA-Z_<>]+ wants to resign\. "),
    (Cookie::YouResign,                     r"^You want to resign\."),
    (Cookie::ResumeMatchAck5,               r"^You are now playing with [a-zA-Z_<>]+\. Your running match was loaded\."),
    (Cookie::JoinNextGame,                  r"^Type 'join' if you want to play the next game, type 'leave' if you don't\."),
    (Cookie::NewMatchRequest,               r"^[a-zA-Z_<>]+ wants to play a [0-9]+ point match with you\."),
    (Cookie::WarningSavedMatch,             r"^WARNING: Don't accept if you want to continue"),
    (Cookie::ResignRefused,                 r"rejects\. The game continues\."),
    (Cookie::MatchLength,                   r"^match length:"),
    (Cookie::TypeJoin,                      r"^Type 'join [a-zA-Z_<>]+' to accept\."),
    (Cookie::YouAreWatching,                r"^You're now watching "),
    (Cookie::YouStopWatching,               r"^You stop watching "),
    (Cookie::PlayerStartsWatching,          r"[a-zA-Z_<>]+ starts watching [a-zA-Z_<>]+\."),
    (Cookie::PlayerStartsWatching,          r"[a-zA-Z_<>]+ is watching you\."),
    (Cookie::PlayerStopsWatching,           r"[a-zA-Z_<>]+ stops watching [a-zA-Z_<>]+\."),
    (Cookie::PlayerIsWatching,              r"[a-zA-Z_<>]+ is watching "),
    (Cookie::ResignWins,                    r"^[a-zA-Z_<>]+ gives up\. [a-zA-Z_<>]+ wins [0-9]+ points?\."),
    (Cookie::ResignYouWin,                  r"^[a-zA-Z_<>]+ gives up\. You win [0-9]+ points?\."),
    (Cookie::YouAcceptAndWin,               r"^You accept and win"),
    (Cookie::AcceptWins,                    r"^[a-zA-Z_<>]+ accepts and wins [0-9]+ point"),
    (Cookie::PlayersStartingMatch,          r"^[a-zA-Z_<>]+ and [a-zA-Z_<>]+ start a [0-9]+ point match"),
    (Cookie::StartingNewGame,               r"^Starting a new game with "),
    (Cookie::YouGiveUp,                     r"^You give up\. "),
    (Cookie::YouWinMatch,                   r"^You win the [0-9]+ point match"),
    (Cookie::PlayerWinsMatch,               r"^[a-zA-Z_<>]+ wins the [0-9]+ point match"),
    (Cookie::ResumingUnlimitedMatch,        r"^[a-zA-Z_<>]+ and [a-zA-Z_<>]+ are resuming their unlimited match\."),
    (Cookie::ResumingLimitedMatch,          r"^[a-zA-Z_<>]+ and [a-zA-Z_<>]+ are resuming their [0-9]+-point match\."),
    (Cookie::MatchResult,                   r"^[a-zA-Z_<>]+ wins a [0-9]+ point match against "),
    (Cookie::PlayerWantsToResign,           r"wants to resign\."),
    (Cookie::BadAcceptDouble,               r"^[a-zA-Z_<>]+ accepts? the double\. The cube shows [0-9]+\..+"),
    (Cookie::YouAcceptDouble,               r"^You accept the double\. The cube shows"),
    (Cookie::PlayerAcceptsDouble,           r"^[a-zA-Z_<>]+ accepts the double\. The cube shows "),
    (Cookie::PlayerAcceptsDouble,           r"^[a-zA-Z_<>]+ accepts the double\."),
    (Cookie::ResumeMatchRequest,            r"^[a-zA-Z_<>]+ wants to resume a saved match with you\."),
    (Cookie::ResumeMatchAck0,               r"has joined you\. Your running match was loaded"),
    (Cookie::YouWinGame,                    r"^You win the game and get"),
    (Cookie::UnlimitedInvite,               r"^[a-zA-Z_<>]+ wants to play an unlimted match with you\."),
    (Cookie::PlayerWinsGame,                r"^[a-zA-Z_<>]+ wins the game and gets [0-9]+ points?. Sorry."),
    (Cookie::PlayerWinsGame,                r"^[a-zA-Z_<>]+ wins the game and gets [0-9]+ points?."),
    (Cookie::WatchGameWins,                 r"wins the game and gets"),
    (Cookie::PlayersStartingUnlimitedMatch, r"start an unlimited match\."),
    (Cookie::ReportLimitedMatch,            r"^[a-zA-Z_<>]+ +- +[a-zA-Z_<>]+ .+ point match"),
    (Cookie::ReportUnlimitedMatch,          r"^[a-zA-Z_<>]+ +- +[a-zA-Z_<>]+ \(unlimited"),
    (Cookie::ShowMovesStart,                r"^[a-zA-Z_<>]+ is X - [a-zA-Z_<>]+ is O"),
    // `[XO]:` alone is the catch-all for the move list and stays last.
    (Cookie::ShowMovesRoll,                 r"^[XO]: \([1-6]"),
    (Cookie::ShowMovesWins,                 r"^[XO]: wins"),
    (Cookie::ShowMovesDoubles,              r"^[XO]: doubles"),
    (Cookie::ShowMovesAccepts,              r"^[XO]: accepts"),
    (Cookie::ShowMovesRejects,              r"^[XO]: rejects"),
    (Cookie::ShowMovesOther,                r"^[XO]:"),
    (Cookie::ScoreUpdate,                   r"^score in [0-9]+ point match:"),
    (Cookie::MatchStart,                    r"^Score is [0-9]+-[0-9]+ in a [0-9]+ point match\."),
    (Cookie::Settings,                      r"^Settings of variables:"),
    (Cookie::Turn,                          r"^turn:"),
    (Cookie::Boardstyle,                    r"^boardstyle:"),
    (Cookie::Linelength,                    r"^linelength:"),
    (Cookie::Pagelength,                    r"^pagelength:"),
    (Cookie::Redoubles,                     r"^redoubles:"),
    (Cookie::Sortwho,                       r"^sortwho:"),
    (Cookie::Timezone,                      r"^timezone:"),
    (Cookie::CantMove,                      r"^[a-zA-Z_<>]+ can't move"),
    (Cookie::ListOfGames,                   r"^List of games:"),
    (Cookie::PlayerInfoStart,               r"^Information about"),
    (Cookie::EmailAddress,                  r"^  Email address:"),
    (Cookie::NoEmail,                       r"^  No email address\."),
    (Cookie::WavesAgain,                    r"^[a-zA-Z_<>]+ waves goodbye again\."),
    (Cookie::Waves,                         r"waves goodbye"),
    (Cookie::Waves,                         r"^You wave goodbye\."),
    (Cookie::WavesAgain,                    r"^You wave goodbye again and log out\."),
    (Cookie::NoSavedGames,                  r"^no saved games\."),
    (Cookie::TypeBack,                      r"^You're away\. Please type 'back'"),
    (Cookie::SavedMatch,                    r"^  [a-zA-Z_<>]+ +[0-9]+ +[0-9]+ +- +"),
    (Cookie::SavedMatchPlaying,             r"^ \*[a-zA-Z_<>]+ +[0-9]+ +[0-9]+ +- +"),
    (Cookie::PlayerIsWaitingForYou,         r"^[a-zA-Z_<>]+ is waiting for you to log in\."),
    (Cookie::IsAway,                        r"^[a-zA-Z_<>]+ is away: "),
    // `toggle` listing.
    (Cookie::AllowpipTrue,                  r"^allowpip +YES"),
    (Cookie::AllowpipFalse,                 r"^allowpip +NO"),
    (Cookie::AutoboardTrue,                 r"^autoboard +YES"),
    (Cookie::AutoboardFalse,                r"^autoboard +NO"),
    (Cookie::AutodoubleTrue,                r"^autodouble +YES"),
    (Cookie::AutodoubleFalse,               r"^autodouble +NO"),
    (Cookie::AutomoveTrue,                  r"^automove +YES"),
    (Cookie::AutomoveFalse,                 r"^automove +NO"),
    (Cookie::BellTrue,                      r"^bell +YES"),
    (Cookie::BellFalse,                     r"^bell +NO"),
    (Cookie::CrawfordTrue,                  r"^crawford +YES"),
    (Cookie::CrawfordFalse,                 r"^crawford +NO"),
    (Cookie::DoubleTrue,                    r"^double +YES"),
    (Cookie::DoubleFalse,                   r"^double +NO"),
    (Cookie::MoreboardsTrue,                r"^moreboards +YES"),
    (Cookie::MoreboardsFalse,               r"^moreboards +NO"),
    (Cookie::MovesTrue,                     r"^moves +YES"),
    (Cookie::MovesFalse,                    r"^moves +NO"),
    (Cookie::GreedyTrue,                    r"^greedy +YES"),
    (Cookie::GreedyFalse,                   r"^greedy +NO"),
    (Cookie::NotifyTrue,                    r"^notify +YES"),
    (Cookie::NotifyFalse,                   r"^notify +NO"),
    (Cookie::RatingsTrue,                   r"^ratings +YES"),
    (Cookie::RatingsFalse,                  r"^ratings +NO"),
    (Cookie::ReadyTrue,                     r"^ready +YES"),
    (Cookie::ReadyFalse,                    r"^ready +NO"),
    (Cookie::ReportTrue,                    r"^report +YES"),
    (Cookie::ReportFalse,                   r"^report +NO"),
    (Cookie::SilentTrue,                    r"^silent +YES"),
    (Cookie::SilentFalse,                   r"^silent +NO"),
    (Cookie::TelnetTrue,                    r"^telnet +YES"),
    (Cookie::TelnetFalse,                   r"^telnet +NO"),
    (Cookie::WrapTrue,                      r"^wrap +YES"),
    (Cookie::WrapFalse,                     r"^wrap +NO"),
    (Cookie::Junk,                          r"^Closed old connection with user"),
    (Cookie::Done,                          r"^Done\."),
    (Cookie::YourTurnToMove,                r"^It's your turn to move\."),
    (Cookie::SavedMatchesHeader,            r"^  opponent          matchlength   score \(your points first\)"),
    (Cookie::MessagesForYou,                r"^There are messages for you:"),
    (Cookie::RedoublesSetTo,                r"^Value of 'redoubles' set to [0-9]+\."),
    (Cookie::DoublingCubeNow,               r"^The number on the doubling cube is now [0-9]+"),
    (Cookie::FailedLogin,                   r"^> [0-9]+"),
    (Cookie::Average,                       r"^Time (UTC)  average min max"),
    (Cookie::DiceTest,                      r"^[nST]: "),
    (Cookie::LastLogout,                    r"^  Last logout:"),
    (Cookie::RatingCalcStart,               r"^rating calculation:"),
    (Cookie::RatingCalcInfo,                r"^Probability that underdog wins:"),
    (Cookie::RatingCalcInfo,                r"is 1-Pu if underdog wins"),
    (Cookie::RatingCalcInfo,                r"^Experience: "),
    (Cookie::RatingCalcInfo,                r"^K=max\(1"),
    (Cookie::RatingCalcInfo,                r"^rating difference"),
    (Cookie::RatingCalcInfo,                r"^change for"),
    (Cookie::RatingCalcInfo,                r"^match length  "),
    (Cookie::WatchingHeader,                r"^Watching players:"),
    (Cookie::SettingsHeader,                r"^The current settings are:"),
    (Cookie::AwayListHeader,                r"^The following users are away:"),
    (Cookie::RatingExperience,              r"^  Rating: +[0-9]+\."),
    (Cookie::NotLoggedIn,                   r"^  Not logged in right now\."),
    (Cookie::IsPlayingWith,                 r"is playing with"),
    (Cookie::SavedScoreHeader,              r"^opponent +matchlength"),
    (Cookie::StillLoggedIn,                 r"^  Still logged in\."),
    (Cookie::NoOneIsAway,                   r"^None of the users is away\."),
    (Cookie::PlayerListHeader,              r"^No  S  username        rating  exp login    idle  from"),
    (Cookie::RatingsHeader,                 r"^ rank name            rating    Experience"),
    (Cookie::ClearScreen,                   r"^.\[;H.\[2J"),
    (Cookie::Timeout,                       r"^Connection timed out\."),
    (Cookie::Goodbye,                       r"           Goodbye\."),
    (Cookie::LastLogin,                     r"^  Last login:"),
    (Cookie::NoInfo,                        r"^No information found on user"),
];
