//! The table: round engine and game loop.

use alloc::vec::Vec;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::card::Rank;
use crate::error::{OptionsError, RoundError};
use crate::hand::DealerHand;
use crate::io::{TableEvent, TableIo};
use crate::options::TableOptions;
use crate::player::Player;
use crate::shoe::Shoe;

mod dealer;
mod round;

/// A blackjack table: the shoe, the seated players, the dealer's hand, and
/// the round flow over them.
///
/// The table is owned exclusively by its game loop; all play is synchronous
/// and turn-based, one player, one hand, one action at a time.
#[derive(Debug)]
pub struct Table {
    /// Table rules and constants.
    pub options: TableOptions,
    /// The pool of undealt cards.
    pub shoe: Shoe,
    /// Seated players, in position order.
    pub players: Vec<Player>,
    /// The dealer's hand for the current round.
    pub dealer: DealerHand,
    /// Whether further rounds should be dealt.
    can_continue: bool,
    /// Position assigned to the next seated player.
    next_position: usize,
    /// Random number generator for shoe shuffles.
    rng: ChaCha8Rng,
}

impl Table {
    /// Creates a table with the given options and RNG seed.
    ///
    /// The seed makes a whole game reproducible: the same seed and the same
    /// inputs deal the same cards.
    ///
    /// # Errors
    ///
    /// Returns an error when the options fail
    /// [`validate`](TableOptions::validate).
    ///
    /// # Example
    ///
    /// ```
    /// use twentyone::{Table, TableOptions};
    ///
    /// let table = Table::new(TableOptions::default(), 42).unwrap();
    /// assert_eq!(table.shoe.remaining(), 8 * 52);
    /// ```
    pub fn new(options: TableOptions, seed: u64) -> Result<Self, OptionsError> {
        options.validate()?;

        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let shoe = Shoe::shuffled(options.decks, options.shuffle_passes, &mut rng);

        Ok(Self {
            options,
            shoe,
            players: Vec::new(),
            dealer: DealerHand::default(),
            can_continue: true,
            next_position: 0,
            rng,
        })
    }

    /// Seats `count` players, each with the configured starting bankroll.
    pub fn seat_players(&mut self, count: usize) {
        for _ in 0..count {
            self.players
                .push(Player::new(self.options.starting_bankroll, self.next_position));
            self.next_position += 1;
        }
    }

    /// Rebuilds and reshuffles the shoe from the configured deck count.
    ///
    /// Never invoked implicitly; recovering from
    /// [`RoundError::ShoeExhausted`] is the caller's call.
    pub fn reshuffle(&mut self) {
        self.shoe = Shoe::shuffled(self.options.decks, self.options.shuffle_passes, &mut self.rng);
    }

    /// Returns whether the table will deal further rounds.
    #[must_use]
    pub const fn can_continue(&self) -> bool {
        self.can_continue
    }

    /// Runs the whole game: seats players if none are seated yet, then deals
    /// rounds until every player is broke or the frontend declines another
    /// round.
    ///
    /// # Errors
    ///
    /// Returns an error if a round aborts on an exhausted shoe.
    pub fn run(&mut self, io: &mut impl TableIo) -> Result<(), RoundError> {
        if self.players.is_empty() {
            let count = loop {
                let requested = io.player_count();
                if requested > 0 {
                    break requested;
                }
            };
            self.seat_players(count);
        }

        while self.can_continue {
            self.play_round(io)?;
            if self.can_continue && !io.continue_playing() {
                self.can_continue = false;
            }
        }

        io.notify(TableEvent::GameOver);
        Ok(())
    }

    /// Draws the next card or aborts the round.
    fn draw(&mut self) -> Result<Rank, RoundError> {
        self.shoe.draw().ok_or(RoundError::ShoeExhausted)
    }
}
