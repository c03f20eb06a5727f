use alloc::vec::Vec;

use crate::error::RoundError;
use crate::hand::{DealerHand, HandStatus};
use crate::io::{PlayerAction, TableEvent, TableIo};
use crate::player::blackjack_payout;
use crate::result::RoundResult;

use super::Table;

impl Table {
    /// Plays one round: bets and the deal, player actions, dealer play,
    /// settlement, and removal of broke players.
    ///
    /// # Errors
    ///
    /// Returns an error if no players are seated or the shoe runs out of
    /// cards. An aborted round refunds every open wager, so bankrolls are as
    /// if the round had never been dealt.
    pub fn play_round(&mut self, io: &mut impl TableIo) -> Result<RoundResult, RoundError> {
        match self.round_core(io) {
            Ok(result) => Ok(result),
            Err(err) => {
                for player in &mut self.players {
                    player.refund_open_hands();
                }
                Err(err)
            }
        }
    }

    fn round_core(&mut self, io: &mut impl TableIo) -> Result<RoundResult, RoundError> {
        if self.players.is_empty() {
            return Err(RoundError::NoPlayers);
        }

        io.notify(TableEvent::RoundStarted);
        for player in &mut self.players {
            player.clear_round();
        }

        // Everyone must at least receive their opening two cards.
        if self.shoe.remaining() < (self.players.len() + 1) * 2 {
            return Err(RoundError::ShoeExhausted);
        }

        let rounding = self.options.rounding_blackjack;

        // Bets and the opening deal, player by player.
        for index in 0..self.players.len() {
            let position = self.players[index].position();
            let bet = loop {
                let amount = io.initial_bet(position, self.players[index].bankroll());
                if self.players[index].can_bet(amount) {
                    break amount;
                }
            };

            let cards = [self.draw()?, self.draw()?];
            let player = &mut self.players[index];
            player.start_round(cards, bet, rounding);

            if player.hands()[0].status() == HandStatus::Blackjack {
                io.notify(TableEvent::PlayerHands {
                    position,
                    hands: player.hands(),
                    cursor: player.cursor(),
                });
                io.notify(TableEvent::PlayerBlackjack {
                    position,
                    payout: blackjack_payout(bet, rounding),
                });
            }
        }

        // The dealer's up card and hole card.
        let up = self.draw()?;
        let hole = self.draw()?;
        self.dealer = DealerHand::new(up, hole);
        io.notify(TableEvent::DealerUpCard { rank: up });

        // Player actions, seat by seat, hand by hand. An illegal or
        // unrecognized choice mutates nothing and is simply re-requested.
        for index in 0..self.players.len() {
            while self.players[index].has_unplayed_hands() {
                let position = self.players[index].position();
                let player = &self.players[index];
                io.notify(TableEvent::PlayerHands {
                    position,
                    hands: player.hands(),
                    cursor: player.cursor(),
                });

                let Some(action) = io.action(position) else {
                    io.notify(TableEvent::ActionRejected {
                        position,
                        action: None,
                    });
                    continue;
                };

                match action {
                    PlayerAction::Hit => {
                        let card = self.draw()?;
                        io.notify(TableEvent::CardDealt {
                            position,
                            rank: card,
                        });
                        if self.players[index].hit(card) == HandStatus::Bust {
                            io.notify(TableEvent::PlayerBust { position });
                        }
                    }
                    PlayerAction::Stand => self.players[index].stand(),
                    PlayerAction::Double => {
                        if !self.players[index].can_double() {
                            io.notify(TableEvent::ActionRejected {
                                position,
                                action: Some(PlayerAction::Double),
                            });
                            continue;
                        }
                        let amount = loop {
                            let requested = io.double_amount(position);
                            if self.players[index].can_double_down(requested) {
                                break requested;
                            }
                        };
                        let card = self.draw()?;
                        io.notify(TableEvent::CardDealt {
                            position,
                            rank: card,
                        });
                        if self.players[index].double_down(amount, card) == HandStatus::Bust {
                            io.notify(TableEvent::PlayerBust { position });
                        }
                        let player = &self.players[index];
                        io.notify(TableEvent::PlayerHands {
                            position,
                            hands: player.hands(),
                            cursor: player.cursor(),
                        });
                    }
                    PlayerAction::Split => {
                        if !self.players[index].can_split(self.options.hand_limit) {
                            io.notify(TableEvent::ActionRejected {
                                position,
                                action: Some(PlayerAction::Split),
                            });
                            continue;
                        }
                        let cards = [self.draw()?, self.draw()?];
                        self.players[index].split(cards);
                    }
                }
            }
        }

        self.dealer_play(io)?;

        let dealer_value = self.dealer.value();
        let dealer_blackjack = self.dealer.is_blackjack();
        let dealer_bust = self.dealer.is_bust();

        // Settlement, seat by seat. Busts and deal-time blackjacks were
        // announced when they happened, so only surviving hands get an
        // outcome event; the returned results cover every hand.
        let mut results = Vec::with_capacity(self.players.len());
        for player in &mut self.players {
            let result = player.settle_round(dealer_value, dealer_blackjack, rounding);
            for (hand_result, hand) in result.hands.iter().zip(player.hands()) {
                if matches!(hand.status(), HandStatus::Bust | HandStatus::Blackjack) {
                    continue;
                }
                io.notify(TableEvent::HandSettled {
                    position: result.position,
                    hand_index: hand_result.hand_index,
                    outcome: hand_result.outcome,
                    payout: hand_result.payout,
                });
            }
            results.push(result);
        }

        // Broke players leave the table.
        for player in &self.players {
            if player.out_of_money() {
                io.notify(TableEvent::PlayerRemoved {
                    position: player.position(),
                });
            }
        }
        self.players.retain(|player| !player.out_of_money());
        if self.players.is_empty() {
            self.can_continue = false;
        }

        Ok(RoundResult {
            players: results,
            dealer_value,
            dealer_bust,
            dealer_blackjack,
        })
    }
}
