//! The boundary between the round engine and whatever drives it.
//!
//! The engine never reads raw text: the frontend decodes input into the
//! closed [`PlayerAction`] enum (or `None` for anything unrecognized) and
//! renders [`TableEvent`] notifications however it likes. Requests are
//! re-issued by the engine until a legal value comes back, so a frontend can
//! stay a thin loop over prompts.

use crate::card::Rank;
use crate::hand::{DealerHand, Hand};
use crate::result::HandOutcome;

/// A player's choice for the hand under the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerAction {
    /// Take one card.
    Hit,
    /// Finalize the hand as it stands.
    Stand,
    /// Add a wager and take exactly one card.
    Double,
    /// Split an identical pair into two hands.
    Split,
}

/// A table notification.
///
/// Events are fire-and-forget and carry no reply, but their order matters:
/// they are emitted in the order the round progresses.
#[derive(Debug, Clone, Copy)]
pub enum TableEvent<'a> {
    /// A new round is about to be dealt.
    RoundStarted,
    /// Snapshot of a player's hands, with the cursor marking the hand in
    /// play.
    PlayerHands {
        /// Seat position.
        position: usize,
        /// All hands, in play order.
        hands: &'a [Hand],
        /// Index of the hand currently being acted on.
        cursor: usize,
    },
    /// A player was dealt a natural blackjack and has been paid 3:2.
    PlayerBlackjack {
        /// Seat position.
        position: usize,
        /// Amount credited (stake plus winnings).
        payout: usize,
    },
    /// A card was dealt to a player's current hand.
    CardDealt {
        /// Seat position.
        position: usize,
        /// The card.
        rank: Rank,
    },
    /// A player's current hand went over 21.
    PlayerBust {
        /// Seat position.
        position: usize,
    },
    /// A requested action was unrecognized (`None`) or not legal right now.
    ActionRejected {
        /// Seat position.
        position: usize,
        /// The rejected action; `None` for unrecognized input.
        action: Option<PlayerAction>,
    },
    /// The dealer's face-up card, shown as soon as the dealer is dealt.
    DealerUpCard {
        /// The up card.
        rank: Rank,
    },
    /// All players are done; the dealer's cards are revealed.
    DealerReveal {
        /// The dealer's hand, hole card included.
        hand: &'a DealerHand,
    },
    /// The dealer holds a natural blackjack and draws nothing.
    DealerBlackjack,
    /// The dealer drew a card.
    DealerDraws {
        /// The card drawn.
        rank: Rank,
        /// The dealer's hand after the draw.
        hand: &'a DealerHand,
    },
    /// The dealer is done; this value settles the round.
    DealerFinal {
        /// The dealer's final hand value.
        value: u8,
    },
    /// A hand's settlement against the dealer.
    HandSettled {
        /// Seat position.
        position: usize,
        /// Index of the hand within the player's hands.
        hand_index: usize,
        /// Win, lose, or push.
        outcome: HandOutcome,
        /// Amount credited back (stake included; zero on a loss).
        payout: usize,
    },
    /// A player ran out of money and left the table.
    PlayerRemoved {
        /// Seat position.
        position: usize,
    },
    /// No further rounds will be dealt.
    GameOver,
}

/// Everything the round engine needs from the outside world.
///
/// The request methods may return any value; the engine re-invokes them
/// until the corresponding legality check passes, so implementations do not
/// need to validate. [`notify`](Self::notify) receives the announcements in
/// round order.
pub trait TableIo {
    /// Asks how many players to seat. Re-invoked until positive.
    fn player_count(&mut self) -> usize;

    /// Asks a player for their bet for the round. Re-invoked until the bet
    /// is positive and covered by `bankroll`.
    fn initial_bet(&mut self, position: usize, bankroll: usize) -> usize;

    /// Asks a player for their next action; `None` means the input was not
    /// recognized. Re-invoked on `None` and on structurally-disallowed
    /// choices.
    fn action(&mut self, position: usize) -> Option<PlayerAction>;

    /// Asks a player for their additional double-down wager. Re-invoked
    /// until the amount passes
    /// [`can_double_down`](crate::Player::can_double_down).
    fn double_amount(&mut self, position: usize) -> usize;

    /// Asks whether another round should be dealt.
    fn continue_playing(&mut self) -> bool;

    /// Receives a table announcement.
    fn notify(&mut self, event: TableEvent<'_>);
}
