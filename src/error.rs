//! Error types for table operations.
//!
//! Invalid *input* is never an error here: bets, actions, and double-down
//! amounts that fail their legality checks are re-requested through the I/O
//! boundary. Errors are reserved for a misconfigured table and for the one
//! genuinely unrecoverable round condition, an exhausted shoe.

use thiserror::Error;

/// Errors from validating [`TableOptions`](crate::TableOptions) at table
/// construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum OptionsError {
    /// The shoe must hold at least one deck.
    #[error("deck count is zero")]
    ZeroDecks,
    /// The shoe must be shuffled at least once.
    #[error("shuffle pass count is zero")]
    ZeroShufflePasses,
    /// Players must be seated with a positive bankroll.
    #[error("starting bankroll is zero")]
    ZeroBankroll,
    /// A player always holds at least one hand.
    #[error("hand limit is zero")]
    HandLimitTooLow,
}

/// Errors that can abort a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RoundError {
    /// No players are seated at the table.
    #[error("no players are seated at the table")]
    NoPlayers,
    /// The shoe ran out of cards.
    ///
    /// The round is abandoned and every open wager is refunded; the caller
    /// may [`reshuffle`](crate::Table::reshuffle) and deal a fresh round.
    #[error("the shoe ran out of cards")]
    ShoeExhausted,
}
