//! A seated player: bankroll, hands, and the turn cursor over them.

use alloc::vec::Vec;

use crate::card::Rank;
use crate::hand::{Hand, HandStatus};
use crate::options::RoundingMode;
use crate::result::{HandOutcome, HandResult, PlayerResult};

/// Total credited for a natural blackjack: the stake back plus 3:2 winnings,
/// i.e. `bet * 5 / 2` with `rounding` resolving the half on odd bets.
pub(crate) const fn blackjack_payout(bet: usize, rounding: RoundingMode) -> usize {
    let scaled = bet * 5;
    match rounding {
        RoundingMode::Down => scaled / 2,
        RoundingMode::Up | RoundingMode::Nearest => scaled.div_ceil(2),
    }
}

/// One seat at the table.
///
/// A player owns a bankroll and an ordered sequence of hands, played left to
/// right under a cursor. The cursor always lies in `0..=hands.len()`;
/// `cursor == hands.len()` means every hand is finalized. It advances exactly
/// once per hand reaching a terminal state.
///
/// The `can_*` predicates are preconditions for the mutating operations, not
/// checks repeated inside them: the engine validates first and only then
/// mutates, so an invalid request never leaves partial state behind.
#[derive(Debug, Clone)]
pub struct Player {
    /// Money available for bets.
    bankroll: usize,
    /// Seat position; fixed for the lifetime of the player.
    position: usize,
    /// Hands for the current round, in play order.
    hands: Vec<Hand>,
    /// Index of the hand currently being acted on.
    cursor: usize,
}

impl Player {
    /// Seats a player with the given bankroll at the given position.
    #[must_use]
    pub const fn new(bankroll: usize, position: usize) -> Self {
        Self {
            bankroll,
            position,
            hands: Vec::new(),
            cursor: 0,
        }
    }

    /// Returns the player's bankroll.
    #[must_use]
    pub const fn bankroll(&self) -> usize {
        self.bankroll
    }

    /// Returns the player's seat position.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Returns the player's hands for the current round.
    #[must_use]
    pub fn hands(&self) -> &[Hand] {
        &self.hands
    }

    /// Returns the cursor: the index of the hand currently being acted on.
    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    /// Returns the hand under the cursor, or `None` once all hands are done.
    #[must_use]
    pub fn current_hand(&self) -> Option<&Hand> {
        self.hands.get(self.cursor)
    }

    /// Returns whether `amount` is a placeable bet: positive and covered by
    /// the bankroll.
    #[must_use]
    pub const fn can_bet(&self, amount: usize) -> bool {
        amount > 0 && amount <= self.bankroll
    }

    /// Stakes `bet` and takes the two dealt cards as hand #0.
    ///
    /// The caller validates the bet via [`can_bet`](Self::can_bet) first;
    /// this operation debits unconditionally. A natural blackjack is settled
    /// on the spot: the bankroll is credited with the 3:2 payout (see
    /// `rounding` for odd bets), the hand is marked terminal, and it takes no
    /// further part in the round, including dealer-based settlement.
    pub fn start_round(&mut self, cards: [Rank; 2], bet: usize, rounding: RoundingMode) {
        debug_assert!(self.can_bet(bet));
        debug_assert!(self.hands.is_empty());

        self.bankroll -= bet;
        self.hands.push(Hand::new(cards[0], cards[1], bet));
        self.cursor = 0;

        if self.hands[0].status() == HandStatus::Blackjack {
            self.bankroll += blackjack_payout(bet, rounding);
            self.cursor = 1;
        }
    }

    /// Returns whether any hand still awaits an action. Idempotent.
    #[must_use]
    pub fn has_unplayed_hands(&self) -> bool {
        self.cursor < self.hands.len()
    }

    /// Takes a card on the current hand.
    ///
    /// A bust finalizes the hand and advances the cursor; otherwise the
    /// cursor stays put and the player is asked again. Returns the hand's
    /// status after the card lands.
    pub fn hit(&mut self, card: Rank) -> HandStatus {
        debug_assert!(self.has_unplayed_hands());

        let hand = &mut self.hands[self.cursor];
        hand.add_card(card);
        let status = hand.status();
        if status == HandStatus::Bust {
            self.cursor += 1;
        }
        status
    }

    /// Stands on the current hand, finalizing it.
    pub fn stand(&mut self) {
        debug_assert!(self.has_unplayed_hands());

        self.hands[self.cursor].set_status(HandStatus::Stand);
        self.cursor += 1;
    }

    /// Returns whether the player may open the double-down dialogue at all.
    ///
    /// This only requires a nonempty bankroll; whether a concrete amount is
    /// affordable is [`can_double_down`](Self::can_double_down)'s check. The
    /// two-step validation mirrors how the additional wager is requested
    /// separately from the action itself.
    #[must_use]
    pub const fn can_double(&self) -> bool {
        self.bankroll > 0
    }

    /// Returns whether `amount` is a placeable double-down wager: positive,
    /// no larger than the current hand's bet, and covered by the bankroll.
    #[must_use]
    pub fn can_double_down(&self, amount: usize) -> bool {
        let Some(hand) = self.current_hand() else {
            return false;
        };
        amount > 0 && amount <= hand.bet() && amount <= self.bankroll
    }

    /// Doubles down: stakes `amount` on top of the current hand's bet and
    /// takes exactly one card.
    ///
    /// The hand is finalized whether or not the card busts it, and the
    /// cursor advances exactly once. Returns the hand's final status.
    pub fn double_down(&mut self, amount: usize, card: Rank) -> HandStatus {
        debug_assert!(self.can_double_down(amount));

        self.bankroll -= amount;
        let hand = &mut self.hands[self.cursor];
        hand.raise_bet(amount);
        hand.add_card(card);
        if hand.status() == HandStatus::Active {
            hand.set_status(HandStatus::Doubled);
        }
        let status = hand.status();
        self.cursor += 1;
        status
    }

    /// Returns whether the current hand may be split: an identical pair, the
    /// hand count below `hand_limit`, and a full matching bet affordable.
    #[must_use]
    pub fn can_split(&self, hand_limit: usize) -> bool {
        let Some(hand) = self.current_hand() else {
            return false;
        };
        hand.can_be_split() && self.hands.len() < hand_limit && self.bankroll >= hand.bet()
    }

    /// Splits the current hand into two, each seeded with one parent card
    /// plus one card from `cards`, both carrying the parent's bet.
    ///
    /// The children are spliced over the parent in one atomic update, so the
    /// unchanged cursor now addresses the first child. The bankroll is
    /// debited by the parent's bet to fund the second hand.
    pub fn split(&mut self, cards: [Rank; 2]) {
        debug_assert!(self.has_unplayed_hands());

        let parent = &self.hands[self.cursor];
        debug_assert!(parent.can_be_split());
        debug_assert!(self.bankroll >= parent.bet());

        let bet = parent.bet();
        let kept = [parent.cards()[0], parent.cards()[1]];

        self.bankroll -= bet;
        self.hands.splice(
            self.cursor..=self.cursor,
            [
                Hand::from_split(kept[0], cards[0], bet),
                Hand::from_split(kept[1], cards[1], bet),
            ],
        );
    }

    /// Settles every hand against the dealer and credits the bankroll.
    ///
    /// Bust hands lose their stake. A hand #0 natural blackjack was already
    /// paid at deal time and is recorded without a second credit. Every
    /// other hand wins double its bet when the dealer busts or it outscores
    /// the dealer, loses when the dealer holds a blackjack or outscores it,
    /// and pushes (stake returned) on a tie.
    pub fn settle_round(
        &mut self,
        dealer_value: u8,
        dealer_has_blackjack: bool,
        rounding: RoundingMode,
    ) -> PlayerResult {
        let mut hand_results = Vec::with_capacity(self.hands.len());
        let mut total_payout: usize = 0;
        let mut total_bet: usize = 0;

        for (hand_index, hand) in self.hands.iter().enumerate() {
            let bet = hand.bet();
            let value = hand.value();
            total_bet += bet;

            let (outcome, payout, credit) = match hand.status() {
                HandStatus::Bust => (HandOutcome::Lose, 0, 0),
                HandStatus::Blackjack => {
                    // Paid when the hand was dealt; recorded here only.
                    (HandOutcome::Blackjack, blackjack_payout(bet, rounding), 0)
                }
                HandStatus::Active | HandStatus::Stand | HandStatus::Doubled => {
                    if dealer_value > 21 || value > dealer_value {
                        (HandOutcome::Win, bet * 2, bet * 2)
                    } else if dealer_has_blackjack || value < dealer_value {
                        (HandOutcome::Lose, 0, 0)
                    } else {
                        (HandOutcome::Push, bet, bet)
                    }
                }
            };

            self.bankroll += credit;
            total_payout += payout;

            hand_results.push(HandResult {
                hand_index,
                outcome,
                bet,
                payout,
                value,
            });
        }

        #[expect(clippy::cast_possible_wrap, reason = "payout values fit in isize")]
        let net = total_payout as isize - total_bet as isize;

        PlayerResult {
            position: self.position,
            hands: hand_results,
            total_payout,
            net,
        }
    }

    /// Credits back the stake of every hand not already settled at deal
    /// time, then drops the hands.
    ///
    /// Used when a round is abandoned mid-flight (shoe exhaustion) so the
    /// bankroll ends up as if the round had never been dealt.
    pub fn refund_open_hands(&mut self) {
        let refund: usize = self
            .hands
            .iter()
            .filter(|hand| hand.status() != HandStatus::Blackjack)
            .map(Hand::bet)
            .sum();
        self.bankroll += refund;
        self.hands.clear();
        self.cursor = 0;
    }

    /// Returns whether the player's bankroll is gone.
    #[must_use]
    pub const fn out_of_money(&self) -> bool {
        self.bankroll == 0
    }

    /// Drops the previous round's hands and resets the cursor.
    pub fn clear_round(&mut self) {
        self.hands.clear();
        self.cursor = 0;
    }
}
