use crate::error::RoundError;
use crate::io::{TableEvent, TableIo};

use super::Table;

impl Table {
    /// Reveals the dealer's cards and plays out the house hand.
    ///
    /// A natural blackjack draws nothing. Otherwise the dealer draws while
    /// its value is under 17 (hitting a soft 17 too when the table is
    /// configured that way) and stops at 17 or more; a bust is not special
    /// here, it just settles in the players' favor.
    pub(super) fn dealer_play(&mut self, io: &mut impl TableIo) -> Result<(), RoundError> {
        io.notify(TableEvent::DealerReveal { hand: &self.dealer });

        if self.dealer.is_blackjack() {
            io.notify(TableEvent::DealerBlackjack);
        } else {
            loop {
                let value = self.dealer.value();
                if value > 17 {
                    break;
                }
                if value == 17 && (!self.dealer.is_soft() || self.options.stand_on_soft_17) {
                    break;
                }

                let card = self.draw()?;
                self.dealer.add_card(card);
                io.notify(TableEvent::DealerDraws {
                    rank: card,
                    hand: &self.dealer,
                });
            }
        }

        io.notify(TableEvent::DealerFinal {
            value: self.dealer.value(),
        });

        Ok(())
    }
}
