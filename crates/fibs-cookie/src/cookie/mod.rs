//! Classification codes ("cookies") produced by the engine.
//!
//! The set is closed and versioned. Codes 1-20 carry the record types of
//! the CLIP sub-protocol and keep their wire numbers; everything from 21 up
//! names a free-text server message recognised by its shape.
//!
//! Codes are part of the published contract: a variant never changes its
//! number, and new variants are only ever appended.

mod helpers;

pub use helpers::ParseCookieError;

/// Revision of the CLIP sub-protocol the pattern tables target.
pub const CLIP_VERSION: u32 = 1009;

macro_rules! cookies {
    (
        $(
            $(#[$meta:meta])*
            $variant:ident = $code:literal,
        )+
    ) => {
        /// Classification code for a single server line.
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[repr(u16)]
        #[non_exhaustive]
        pub enum Cookie {
            $(
                $(#[$meta])*
                $variant = $code,
            )+
        }

        impl Cookie {
            /// Every code, in ascending numeric order.
            pub const ALL: &'static [Cookie] = &[$(Cookie::$variant,)+];

            /// Stable symbolic name of the code.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Cookie::$variant => stringify!($variant),)+
                }
            }

            /// Looks a code up by its number.
            pub fn from_code(code: u16) -> Option<Cookie> {
                match code {
                    $($code => Some(Cookie::$variant),)+
                    _ => None,
                }
            }
        }
    };
}

cookies! {
    // === CLIP records (1-20) ===
    /// 1 - Login accepted: `1 name lasttime host`.
    Welcome = 1,
    /// 2 - Own settings record sent after login.
    OwnInfo = 2,
    /// 3 - Start of the message of the day.
    MotdBegin = 3,
    /// 4 - End of the message of the day.
    MotdEnd = 4,
    /// 5 - One record of the `who` listing.
    WhoInfo = 5,
    /// 6 - End of the `who` listing.
    WhoEnd = 6,
    /// 7 - A player logged in.
    Login = 7,
    /// 8 - A player logged out.
    Logout = 8,
    /// 9 - A stored message delivered at login.
    Message = 9,
    /// 10 - A message you sent was delivered.
    MessageDelivered = 10,
    /// 11 - A message you sent was saved for later.
    MessageSaved = 11,
    /// 12 - A player says something to you.
    Says = 12,
    /// 13 - A player shouts.
    Shouts = 13,
    /// 14 - A player whispers.
    Whispers = 14,
    /// 15 - A player kibitzes.
    Kibitzes = 15,
    /// 16 - Echo of something you said.
    YouSay = 16,
    /// 17 - Echo of your shout.
    YouShout = 17,
    /// 18 - Echo of your whisper.
    YouWhisper = 18,
    /// 19 - Echo of your kibitz.
    YouKibitz = 19,
    /// 20 - Server alert.
    Alert = 20,

    // === Session bookkeeping ===
    /// Any unrecognised line before login completes.
    PreLogin = 21,
    /// The `login:` prompt.
    LoginPrompt = 22,
    /// A line of the message of the day.
    MotdLine = 23,
    /// An empty line during the session.
    Empty = 24,
    /// A session line no pattern recognised.
    Unknown = 25,
    /// The server said goodbye; the session is over.
    Goodbye = 26,
    /// The server timed the connection out.
    Timeout = 27,
    /// Any line received after the session ended.
    PostGoodbye = 28,

    // === Server messages ===
    /// A well-formed `board:` rawboard.
    Board = 29,
    /// A truncated or malformed `board:` line.
    BadBoard = 30,
    /// `You roll 3 and 5.`
    YouRoll = 31,
    /// Another player rolls the dice.
    PlayerRolls = 32,
    /// It is your turn to roll or double.
    RollOrDouble = 33,
    /// Opponent doubles and waits for accept or reject.
    AcceptRejectDouble = 34,
    /// A player doubles.
    Doubles = 35,
    /// A player accepts the double.
    PlayerAcceptsDouble = 36,
    /// `Please move 2 pieces.`
    PleaseMove = 37,
    /// A player moves.
    PlayerMoves = 38,
    /// Bear-off report.
    BearingOff = 39,
    /// You rejected a resignation.
    YouReject = 40,
    /// You are no longer watching a game.
    YouStopWatching = 41,
    /// Opponent left; the game was saved.
    OpponentLogsOut = 42,
    /// The server made your only possible move.
    OnlyPossibleMove = 43,
    /// Opening roll of a game.
    FirstRoll = 44,
    /// A player makes the first move.
    MakesFirstMove = 45,
    /// You doubled and are waiting for a reply.
    YouDouble = 46,
    /// Opponent offers to resign.
    PlayerWantsToResign = 47,
    /// A watched player offers to resign.
    WatchResign = 48,
    /// You offered to resign.
    YouResign = 49,
    /// A saved match was loaded after you joined.
    ResumeMatchAck5 = 50,
    /// Prompt to join or leave the next game.
    JoinNextGame = 51,
    /// A player invites you to a match.
    NewMatchRequest = 52,
    /// Warning that accepting drops a saved match.
    WarningSavedMatch = 53,
    /// A resignation was rejected.
    ResignRefused = 54,
    /// `match length:` line of a board report.
    MatchLength = 55,
    /// Instructions to accept an invitation.
    TypeJoin = 56,
    /// You started watching a player.
    YouAreWatching = 57,
    /// A player started watching.
    PlayerStartsWatching = 58,
    /// A player stopped watching.
    PlayerStopsWatching = 59,
    /// A player is watching.
    PlayerIsWatching = 60,
    /// A player gave up to another player.
    ResignWins = 61,
    /// Opponent gave up; you win.
    ResignYouWin = 62,
    /// You accepted a resignation and won.
    YouAcceptAndWin = 63,
    /// A player accepted a resignation and won.
    AcceptWins = 64,
    /// Two players start a limited match.
    PlayersStartingMatch = 65,
    /// A new game of the match starts.
    StartingNewGame = 66,
    /// You gave up.
    YouGiveUp = 67,
    /// You won the match.
    YouWinMatch = 68,
    /// A player won the match.
    PlayerWinsMatch = 69,
    /// Two players resume an unlimited match.
    ResumingUnlimitedMatch = 70,
    /// Two players resume a limited match.
    ResumingLimitedMatch = 71,
    /// Result broadcast of a finished match.
    MatchResult = 72,
    /// Double acceptance with trailing garbage.
    BadAcceptDouble = 73,
    /// You accepted the double.
    YouAcceptDouble = 74,
    /// A player wants to resume a saved match.
    ResumeMatchRequest = 75,
    /// A player joined you and the saved match was loaded.
    ResumeMatchAck0 = 76,
    /// You won the game.
    YouWinGame = 77,
    /// A player invites you to an unlimited match.
    UnlimitedInvite = 78,
    /// A player won the game.
    PlayerWinsGame = 79,
    /// A watched player won the game.
    WatchGameWins = 80,
    /// Two players start an unlimited match.
    PlayersStartingUnlimitedMatch = 81,
    /// Game list entry for a limited match.
    ReportLimitedMatch = 82,
    /// Game list entry for an unlimited match.
    ReportUnlimitedMatch = 83,
    /// Header of a move list.
    ShowMovesStart = 84,
    /// Move list entry with a roll.
    ShowMovesRoll = 85,
    /// Move list entry: wins.
    ShowMovesWins = 86,
    /// Move list entry: doubles.
    ShowMovesDoubles = 87,
    /// Move list entry: accepts.
    ShowMovesAccepts = 88,
    /// Move list entry: rejects.
    ShowMovesRejects = 89,
    /// Any other move list entry.
    ShowMovesOther = 90,
    /// Running score of a match.
    ScoreUpdate = 91,
    /// Score at the start of a game.
    MatchStart = 92,
    /// Header of the variables listing.
    Settings = 93,
    /// `turn:` variable.
    Turn = 94,
    /// `boardstyle:` variable.
    Boardstyle = 95,
    /// `linelength:` variable.
    Linelength = 96,
    /// `pagelength:` variable.
    Pagelength = 97,
    /// `redoubles:` variable.
    Redoubles = 98,
    /// `sortwho:` variable.
    Sortwho = 99,
    /// `timezone:` variable.
    Timezone = 100,
    /// A player cannot move.
    CantMove = 101,
    /// Header of the games listing.
    ListOfGames = 102,
    /// Header of a `whois` report.
    PlayerInfoStart = 103,
    /// Email line of a `whois` report.
    EmailAddress = 104,
    /// `whois` report without an email address.
    NoEmail = 105,
    /// Final wave goodbye before logging out.
    WavesAgain = 106,
    /// A wave goodbye.
    Waves = 107,
    /// You have no saved games.
    NoSavedGames = 108,
    /// You are away and must type `back`.
    TypeBack = 109,
    /// Saved match listing entry.
    SavedMatch = 110,
    /// Saved match entry for an opponent currently playing.
    SavedMatchPlaying = 111,
    /// Saved match entry for an opponent ready to play.
    SavedMatchReady = 112,
    /// A player waits for you to log in.
    PlayerIsWaitingForYou = 113,
    /// A player is away.
    IsAway = 114,
    /// Toggle `allowpip` is on.
    AllowpipTrue = 115,
    /// Toggle `allowpip` is off.
    AllowpipFalse = 116,
    /// Toggle `autoboard` is on.
    AutoboardTrue = 117,
    /// Toggle `autoboard` is off.
    AutoboardFalse = 118,
    /// Toggle `autodouble` is on.
    AutodoubleTrue = 119,
    /// Toggle `autodouble` is off.
    AutodoubleFalse = 120,
    /// Toggle `automove` is on.
    AutomoveTrue = 121,
    /// Toggle `automove` is off.
    AutomoveFalse = 122,
    /// Toggle `bell` is on.
    BellTrue = 123,
    /// Toggle `bell` is off.
    BellFalse = 124,
    /// Toggle `crawford` is on.
    CrawfordTrue = 125,
    /// Toggle `crawford` is off.
    CrawfordFalse = 126,
    /// Toggle `double` is on.
    DoubleTrue = 127,
    /// Toggle `double` is off.
    DoubleFalse = 128,
    /// Toggle `moreboards` is on.
    MoreboardsTrue = 129,
    /// Toggle `moreboards` is off.
    MoreboardsFalse = 130,
    /// Toggle `moves` is on.
    MovesTrue = 131,
    /// Toggle `moves` is off.
    MovesFalse = 132,
    /// Toggle `greedy` is on.
    GreedyTrue = 133,
    /// Toggle `greedy` is off.
    GreedyFalse = 134,
    /// Toggle `notify` is on.
    NotifyTrue = 135,
    /// Toggle `notify` is off.
    NotifyFalse = 136,
    /// Toggle `ratings` is on.
    RatingsTrue = 137,
    /// Toggle `ratings` is off.
    RatingsFalse = 138,
    /// Toggle `ready` is on.
    ReadyTrue = 139,
    /// Toggle `ready` is off.
    ReadyFalse = 140,
    /// Toggle `report` is on.
    ReportTrue = 141,
    /// Toggle `report` is off.
    ReportFalse = 142,
    /// Toggle `silent` is on.
    SilentTrue = 143,
    /// Toggle `silent` is off.
    SilentFalse = 144,
    /// Toggle `telnet` is on.
    TelnetTrue = 145,
    /// Toggle `telnet` is off.
    TelnetFalse = 146,
    /// Toggle `wrap` is on.
    WrapTrue = 147,
    /// Toggle `wrap` is off.
    WrapFalse = 148,
    /// Noise a client can ignore.
    Junk = 149,
    /// `Done.`
    Done = 150,
    /// It is your turn to move.
    YourTurnToMove = 151,
    /// Header of the saved matches listing.
    SavedMatchesHeader = 152,
    /// Stored messages follow.
    MessagesForYou = 153,
    /// `redoubles` was changed.
    RedoublesSetTo = 154,
    /// New value of the doubling cube.
    DoublingCubeNow = 155,
    /// Bogus CLIP records sent after a failed login.
    FailedLogin = 156,
    /// Output of the `average` command.
    Average = 157,
    /// Output of the `dicetest` command.
    DiceTest = 158,
    /// Last logout line of a `whois` report.
    LastLogout = 159,
    /// Start of a rating calculation report.
    RatingCalcStart = 160,
    /// Body of a rating calculation report.
    RatingCalcInfo = 161,
    /// Header of the watchers listing.
    WatchingHeader = 162,
    /// Header of the current settings.
    SettingsHeader = 163,
    /// Header of the away listing.
    AwayListHeader = 164,
    /// Rating line of a `whois` report.
    RatingExperience = 165,
    /// `whois`: player is not logged in.
    NotLoggedIn = 166,
    /// A player is playing with someone.
    IsPlayingWith = 167,
    /// Header of the saved scores listing.
    SavedScoreHeader = 168,
    /// `whois`: player is still logged in.
    StillLoggedIn = 169,
    /// Nobody is away.
    NoOneIsAway = 170,
    /// Header of the player listing.
    PlayerListHeader = 171,
    /// Header of the ratings listing.
    RatingsHeader = 172,
    /// ANSI clear-screen sequence.
    ClearScreen = 173,
    /// Last login line of a `whois` report.
    LastLogin = 174,
    /// `whois` found no such user.
    NoInfo = 175,
    /// Output of the `stat` command.
    Stat = 176,
    /// `** User ...` notice.
    Username = 177,
    /// You gagged a player.
    YouGag = 178,
    /// You ungagged a player.
    YouUngag = 179,
    /// You blinded a player.
    YouBlind = 180,
    /// You unblinded a player.
    YouUnblind = 181,
    /// You must `toggle ready` first.
    UseToggleReady = 182,
    /// You started an unlimited match.
    NewMatchAck9 = 183,
    /// You started a limited match.
    NewMatchAck10 = 184,
    /// A player joined your invitation.
    NewMatchAck2 = 185,
    /// You terminated the game.
    YouTerminated = 186,
    /// Opponent left; the game was saved.
    OpponentLeftGame = 187,
    /// A player left the game.
    PlayerLeftGame = 188,
    /// You invited a player.
    YouInvited = 189,
    /// Your previous login time.
    YourLastLogin = 190,
    /// There is no one by that name.
    NoOne = 191,
    /// A player is refusing games.
    PlayerRefusingGames = 192,
    /// You are not watching.
    NotWatching = 193,
    /// You are neither watching nor playing.
    NotWatchingPlaying = 194,
    /// You are not playing.
    NotPlaying = 195,
    /// There is no one by that name (shadowed by `NoOne`).
    NoUser = 196,
    /// A player is already playing.
    AlreadyPlaying = 197,
    /// A player did not invite you.
    DidntInvite = 198,
    /// You cannot remove this piece.
    BadMove = 199,
    /// Illegal first move.
    CantMoveFirstMove = 200,
    /// Shouting while silent.
    CantShout = 201,
    /// You must give more moves.
    MustMove = 202,
    /// You must enter from the bar first.
    MustComeIn = 203,
    /// Count of users who heard your shout.
    UsersHeardYou = 204,
    /// It is not your turn to roll.
    NotYourTurnToRoll = 205,
    /// It is not your turn to move.
    NotYourTurnToMove = 206,
    /// The server did not understand a command.
    UnknownCommand = 207,
    /// You cannot watch while playing.
    CantWatch = 208,
    /// You cannot invite yourself.
    CantInviteSelf = 209,
    /// The server does not know that user.
    DontKnowUser = 210,
    /// Usage hint for `message`.
    MessageUsage = 211,
    /// A player is not playing.
    PlayerNotPlaying = 212,
    /// You cannot talk while not listening.
    CantTalk = 213,
    /// A player will not listen to you.
    WontListen = 214,
    /// The server asks why you would do that.
    Why = 215,
    /// Ratings listing entry.
    Ratings = 216,
    /// There is no saved match with that player.
    NoSavedMatch = 217,
    /// You tried to gag yourself.
    CantGagYourself = 218,
    /// You tried to blind yourself.
    CantBlindYourself = 219,
}
