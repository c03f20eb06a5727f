//! The shoe: the pool of undealt cards.

use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{DECK_SIZE, RANKS, Rank};

/// A multi-deck shoe, consumed one card at a time.
///
/// The shoe is never reshuffled behind the engine's back; it only changes
/// when rebuilt explicitly. Drawing from an empty shoe yields `None`, which
/// the round engine surfaces as
/// [`RoundError::ShoeExhausted`](crate::RoundError::ShoeExhausted).
#[derive(Debug, Clone)]
pub struct Shoe {
    /// Remaining cards; draws pop from the end.
    cards: Vec<Rank>,
}

impl Shoe {
    /// Builds a shoe of `decks` 52-card decks and shuffles it
    /// `shuffle_passes` times.
    #[must_use]
    pub fn shuffled<R: Rng + ?Sized>(decks: u8, shuffle_passes: u8, rng: &mut R) -> Self {
        let mut cards = Vec::with_capacity(decks as usize * DECK_SIZE);

        for _ in 0..decks {
            for _ in 0..4 {
                cards.extend_from_slice(&RANKS);
            }
        }

        for _ in 0..shuffle_passes {
            cards.shuffle(rng);
        }

        Self { cards }
    }

    /// Builds a shoe that deals exactly `draws`, in order.
    ///
    /// Deterministic replacement for a shuffled shoe in tests and analysis.
    #[must_use]
    pub fn stacked(draws: &[Rank]) -> Self {
        let mut cards = draws.to_vec();
        cards.reverse();
        Self { cards }
    }

    /// Draws the next card, or `None` if the shoe is exhausted.
    pub fn draw(&mut self) -> Option<Rank> {
        self.cards.pop()
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the shoe is out of cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
