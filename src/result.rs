//! Round result types for settlement.

extern crate alloc;

use alloc::vec::Vec;

/// Result of a single hand after settlement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandOutcome {
    /// Player wins (dealer busts or player has the higher value).
    Win,
    /// Player loses (bust, dealer blackjack, or dealer has the higher value).
    Lose,
    /// Push (tie); the stake is returned.
    Push,
    /// Natural blackjack, paid 3:2 at deal time.
    Blackjack,
}

/// Result for a single hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandResult {
    /// The hand index (for split hands).
    pub hand_index: usize,
    /// The outcome of the hand.
    pub outcome: HandOutcome,
    /// The bet that rode on this hand.
    pub bet: usize,
    /// The amount the hand paid back, stake included.
    ///
    /// For a `Blackjack` outcome this records the credit made at deal time;
    /// settlement does not pay it again.
    pub payout: usize,
    /// The hand's final value.
    pub value: u8,
}

/// Result for a single player after settlement.
#[derive(Debug, Clone)]
pub struct PlayerResult {
    /// The player's seat position.
    pub position: usize,
    /// Results for each hand (multiple after splits).
    pub hands: Vec<HandResult>,
    /// Total paid back across all hands.
    pub total_payout: usize,
    /// Net result for the round (positive = profit).
    pub net: isize,
}

/// Result of an entire round.
#[derive(Debug, Clone)]
pub struct RoundResult {
    /// Results for each player, in seat order.
    pub players: Vec<PlayerResult>,
    /// The dealer's final hand value.
    pub dealer_value: u8,
    /// Whether the dealer busted.
    pub dealer_bust: bool,
    /// Whether the dealer held a natural blackjack.
    pub dealer_blackjack: bool,
}
