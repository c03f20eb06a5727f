//! Player and dealer hand representations.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Rank;

fn evaluate_cards(cards: &[Rank]) -> (u8, bool) {
    let mut value: u8 = 0;
    let mut aces: u8 = 0;

    for card in cards {
        if card.is_ace() {
            aces += 1;
        }
        value = value.saturating_add(card.base_value());
    }

    while value > 21 && aces > 0 {
        value -= 10;
        aces -= 1;
    }

    let is_soft = aces > 0 && value <= 21;
    (value, is_soft)
}

/// How a hand finished, or whether it is still playable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandStatus {
    /// Hand is active and can take actions.
    Active,
    /// Player has stood.
    Stand,
    /// Player doubled down and received the single extra card.
    Doubled,
    /// Hand has busted (over 21).
    Bust,
    /// Hand is a natural blackjack, settled at deal time.
    Blackjack,
}

/// A player's hand: its cards plus the wager riding on them.
///
/// The `Blackjack` status is only ever assigned at construction of a
/// directly-dealt hand. A hand created by [`Hand::from_split`] that happens
/// to total 21 on two cards stays `Active`, so the player layer never pays
/// the 3:2 premium on it, even though [`Hand::is_blackjack`] (a pure shape
/// predicate) still reports `true`.
#[derive(Debug, Clone)]
pub struct Hand {
    /// Cards in deal order.
    cards: Vec<Rank>,
    /// Current status of the hand.
    status: HandStatus,
    /// Bet amount riding on this hand.
    bet: usize,
}

impl Hand {
    /// Creates a directly-dealt two-card hand.
    ///
    /// A 21 here is a natural blackjack and the hand is marked accordingly.
    #[must_use]
    pub fn new(first: Rank, second: Rank, bet: usize) -> Self {
        let cards = alloc::vec![first, second];
        let status = if evaluate_cards(&cards).0 == 21 {
            HandStatus::Blackjack
        } else {
            HandStatus::Active
        };
        Self {
            cards,
            status,
            bet,
        }
    }

    /// Creates one child hand of a split: a card kept from the parent plus
    /// the replacement card drawn from the shoe.
    ///
    /// Split hands never become blackjacks; a two-card 21 stays `Active`.
    #[must_use]
    pub fn from_split(kept: Rank, drawn: Rank, bet: usize) -> Self {
        Self {
            cards: alloc::vec![kept, drawn],
            status: HandStatus::Active,
            bet,
        }
    }

    /// Adds a card to the hand, marking it bust when the total passes 21.
    pub fn add_card(&mut self, card: Rank) {
        self.cards.push(card);
        if evaluate_cards(&self.cards).0 > 21 {
            self.status = HandStatus::Bust;
        }
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Rank] {
        &self.cards
    }

    /// Returns the current status of the hand.
    #[must_use]
    pub const fn status(&self) -> HandStatus {
        self.status
    }

    pub(crate) const fn set_status(&mut self, status: HandStatus) {
        self.status = status;
    }

    /// Returns the bet amount riding on this hand.
    #[must_use]
    pub const fn bet(&self) -> usize {
        self.bet
    }

    /// Adds a double-down amount to the bet.
    pub(crate) const fn raise_bet(&mut self, amount: usize) {
        self.bet += amount;
    }

    /// Calculates the value of the hand.
    ///
    /// Every ace is first counted as 11; while the total exceeds 21 and an
    /// ace is still counted as 11, one ace is demoted to 1. Card order never
    /// changes the result.
    #[must_use]
    pub fn value(&self) -> u8 {
        evaluate_cards(&self.cards).0
    }

    /// Returns whether the hand is soft (contains an ace counted as 11).
    #[must_use]
    pub fn is_soft(&self) -> bool {
        evaluate_cards(&self.cards).1
    }

    /// Returns whether the hand is two cards totalling 21.
    ///
    /// This is a shape predicate only; whether the hand is paid as a natural
    /// depends on its status (split hands never are).
    #[must_use]
    pub fn is_blackjack(&self) -> bool {
        self.cards.len() == 2 && self.value() == 21
    }

    /// Returns whether the hand is bust.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.value() > 21
    }

    /// Returns whether the hand is a splittable pair.
    ///
    /// Only identical ranks qualify: `[K, K]` splits, `[K, 10]` does not,
    /// and neither does `[J, Q]` even though every face card scores 10.
    #[must_use]
    pub fn can_be_split(&self) -> bool {
        self.cards.len() == 2 && self.cards[0] == self.cards[1]
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

/// The dealer's hand.
///
/// The dealer has no wager; the second card dealt is the hole card, which
/// stays face down until every player has finished acting.
#[derive(Debug, Clone, Default)]
pub struct DealerHand {
    /// Cards in the hand.
    cards: Vec<Rank>,
}

impl DealerHand {
    /// Creates the dealer's hand for a round: up card, then hole card.
    #[must_use]
    pub fn new(up: Rank, hole: Rank) -> Self {
        Self {
            cards: alloc::vec![up, hole],
        }
    }

    /// Adds a drawn card to the hand.
    pub fn add_card(&mut self, card: Rank) {
        self.cards.push(card);
    }

    /// Returns all cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Rank] {
        &self.cards
    }

    /// Returns the face-up card.
    #[must_use]
    pub fn up_card(&self) -> Option<Rank> {
        self.cards.first().copied()
    }

    /// Calculates the full value of the hand.
    #[must_use]
    pub fn value(&self) -> u8 {
        evaluate_cards(&self.cards).0
    }

    /// Returns whether the hand is a natural blackjack.
    #[must_use]
    pub fn is_blackjack(&self) -> bool {
        self.cards.len() == 2 && self.value() == 21
    }

    /// Returns whether the hand is bust.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.value() > 21
    }

    /// Returns whether the hand is soft (contains an ace counted as 11).
    #[must_use]
    pub fn is_soft(&self) -> bool {
        evaluate_cards(&self.cards).1
    }

    /// Returns the number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
