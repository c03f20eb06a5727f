//! A multi-player blackjack table engine with optional `no_std` support.
//!
//! The crate provides a [`Table`] type that manages the full round flow:
//! betting, the deal, player actions (hit, stand, double down, split),
//! dealer play, and settlement. All input and output goes through the
//! [`TableIo`] trait, so the engine itself never touches a terminal.
//!
//! # Example
//!
//! ```no_run
//! use twentyone::{Table, TableOptions};
//!
//! let options = TableOptions::default();
//! let table = Table::new(options, 42).unwrap();
//! let _ = table;
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod error;
pub mod hand;
pub mod io;
pub mod options;
pub mod player;
pub mod result;
pub mod shoe;
pub mod table;

// Re-export main types
pub use card::{DECK_SIZE, RANKS, Rank};
pub use error::{OptionsError, RoundError};
pub use hand::{DealerHand, Hand, HandStatus};
pub use io::{PlayerAction, TableEvent, TableIo};
pub use options::{RoundingMode, TableOptions};
pub use player::Player;
pub use result::{HandOutcome, HandResult, PlayerResult, RoundResult};
pub use shoe::Shoe;
pub use table::Table;
