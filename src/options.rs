//! Table configuration options.

use crate::error::OptionsError;

/// Rounding mode for the 3:2 blackjack payout on odd bets.
///
/// Payouts are computed in integer arithmetic; the only fractional case is
/// the exact half arising from `bet * 5 / 2` on an odd bet, so `Nearest`
/// resolves upward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundingMode {
    /// Round up.
    Up,
    /// Round down.
    Down,
    /// Round to nearest, halves up.
    Nearest,
}

/// Configuration options for a blackjack table.
///
/// The defaults reproduce a conventional casino setup: an eight-deck shoe
/// shuffled eight times, a 1000-unit starting bankroll, at most four hands
/// per player after splits, and a dealer who stands on every 17.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use twentyone::TableOptions;
///
/// let options = TableOptions::default()
///     .with_decks(6)
///     .with_starting_bankroll(500);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableOptions {
    /// Number of 52-card decks in the shoe.
    pub decks: u8,
    /// Number of shuffle passes applied when the shoe is built.
    pub shuffle_passes: u8,
    /// Bankroll each player is seated with.
    pub starting_bankroll: usize,
    /// Maximum number of hands a player can hold after splits.
    pub hand_limit: usize,
    /// Whether the dealer stands on a soft 17.
    pub stand_on_soft_17: bool,
    /// Rounding mode for blackjack payouts on odd bets.
    pub rounding_blackjack: RoundingMode,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            decks: 8,
            shuffle_passes: 8,
            starting_bankroll: 1000,
            hand_limit: 4,
            stand_on_soft_17: true,
            rounding_blackjack: RoundingMode::Down,
        }
    }
}

impl TableOptions {
    /// Sets the number of decks.
    ///
    /// # Example
    ///
    /// ```
    /// use twentyone::TableOptions;
    ///
    /// let options = TableOptions::default().with_decks(6);
    /// assert_eq!(options.decks, 6);
    /// ```
    #[must_use]
    pub const fn with_decks(mut self, decks: u8) -> Self {
        self.decks = decks;
        self
    }

    /// Sets the number of shuffle passes.
    ///
    /// # Example
    ///
    /// ```
    /// use twentyone::TableOptions;
    ///
    /// let options = TableOptions::default().with_shuffle_passes(1);
    /// assert_eq!(options.shuffle_passes, 1);
    /// ```
    #[must_use]
    pub const fn with_shuffle_passes(mut self, passes: u8) -> Self {
        self.shuffle_passes = passes;
        self
    }

    /// Sets the bankroll each player is seated with.
    ///
    /// # Example
    ///
    /// ```
    /// use twentyone::TableOptions;
    ///
    /// let options = TableOptions::default().with_starting_bankroll(500);
    /// assert_eq!(options.starting_bankroll, 500);
    /// ```
    #[must_use]
    pub const fn with_starting_bankroll(mut self, bankroll: usize) -> Self {
        self.starting_bankroll = bankroll;
        self
    }

    /// Sets the maximum number of hands a player can hold after splits.
    ///
    /// # Example
    ///
    /// ```
    /// use twentyone::TableOptions;
    ///
    /// let options = TableOptions::default().with_hand_limit(2);
    /// assert_eq!(options.hand_limit, 2);
    /// ```
    #[must_use]
    pub const fn with_hand_limit(mut self, limit: usize) -> Self {
        self.hand_limit = limit;
        self
    }

    /// Sets whether the dealer stands on a soft 17.
    ///
    /// # Example
    ///
    /// ```
    /// use twentyone::TableOptions;
    ///
    /// let options = TableOptions::default().with_stand_on_soft_17(false);
    /// assert!(!options.stand_on_soft_17);
    /// ```
    #[must_use]
    pub const fn with_stand_on_soft_17(mut self, stand: bool) -> Self {
        self.stand_on_soft_17 = stand;
        self
    }

    /// Sets the rounding mode for blackjack payouts.
    ///
    /// # Example
    ///
    /// ```
    /// use twentyone::{RoundingMode, TableOptions};
    ///
    /// let options = TableOptions::default().with_rounding_blackjack(RoundingMode::Up);
    /// assert_eq!(options.rounding_blackjack, RoundingMode::Up);
    /// ```
    #[must_use]
    pub const fn with_rounding_blackjack(mut self, mode: RoundingMode) -> Self {
        self.rounding_blackjack = mode;
        self
    }

    /// Checks the options for values the engine cannot run with.
    ///
    /// # Errors
    ///
    /// Returns an error when the deck count, shuffle pass count, starting
    /// bankroll, or hand limit is zero.
    pub const fn validate(&self) -> Result<(), OptionsError> {
        if self.decks == 0 {
            return Err(OptionsError::ZeroDecks);
        }
        if self.shuffle_passes == 0 {
            return Err(OptionsError::ZeroShufflePasses);
        }
        if self.starting_bankroll == 0 {
            return Err(OptionsError::ZeroBankroll);
        }
        if self.hand_limit == 0 {
            return Err(OptionsError::HandLimitTooLow);
        }
        Ok(())
    }
}
