//! # fibs-cookie
//!
//! Classifies lines sent by the First Internet Backgammon Server (FIBS)
//! into a closed set of message kinds, called cookies.
//!
//! ## Features
//!
//! - Phase tracking (pre-login, message of the day, session, logged out)
//!   so the same text is read in the right context
//! - Ordered, first-match-wins pattern batches compiled once per engine
//! - Stable numeric codes, with the CLIP record types at their wire numbers
//! - Optional Tokio line codec for reading server output
//!
//! ## Quick Start
//!
//! ```rust
//! use fibs_cookie::{Cookie, CookieMonster};
//!
//! let mut monster = CookieMonster::new();
//! for line in ["login:", "1 marv 1041253132 host.example.com", "3", "Hello!", "4"] {
//!     monster.classify(line).expect("published patterns compile");
//! }
//!
//! assert_eq!(monster.classify("** User fergy is barred.").unwrap(), Cookie::Username);
//! assert_eq!(monster.classify("           Goodbye.").unwrap(), Cookie::Goodbye);
//! assert_eq!(monster.classify("anything").unwrap(), Cookie::PostGoodbye);
//! ```
//!
//! Engines own their phase and their compiled table. Run one engine per
//! session; an engine is not meant to be shared between sessions.

#![deny(clippy::all)]
#![warn(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod batch;
pub mod cookie;
pub mod error;
#[cfg(feature = "tokio")]
pub mod line;
pub mod monster;
pub mod recipe;
pub mod table;

pub use self::batch::{Batch, BatchKind, PatternEntry};
pub use self::cookie::{Cookie, ParseCookieError, CLIP_VERSION};
pub use self::error::{CookieError, Result};
#[cfg(feature = "tokio")]
pub use self::line::{LineCodec, DEFAULT_MAX_LINE_LEN};
pub use self::monster::{CookieMonster, Phase};
pub use self::recipe::{Declaration, Recipe};
pub use self::table::PatternTable;
