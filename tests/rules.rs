//! Hand valuation and player state-machine tests.

use twentyone::Rank::{Ace, Eight, Five, Four, Jack, King, Nine, Queen, Seven, Six, Ten, Three, Two};
use twentyone::{Hand, HandOutcome, HandStatus, Player, RoundingMode};

#[test]
fn ace_counts_eleven_until_it_would_bust() {
    let mut hand = Hand::new(Ace, Six, 10);
    assert_eq!(hand.value(), 17);
    assert!(hand.is_soft());

    // A + 6 + 6: the ace demotes to 1.
    hand.add_card(Six);
    assert_eq!(hand.value(), 13);
    assert!(!hand.is_soft());
}

#[test]
fn two_aces_value_twelve() {
    let hand = Hand::new(Ace, Ace, 10);
    assert_eq!(hand.value(), 12);
    assert!(hand.is_soft());
}

#[test]
fn blackjack_requires_exactly_two_cards() {
    let dealt = Hand::new(Ace, King, 10);
    assert_eq!(dealt.value(), 21);
    assert!(dealt.is_blackjack());
    assert_eq!(dealt.status(), HandStatus::Blackjack);

    let mut sevens = Hand::new(Seven, Seven, 10);
    sevens.add_card(Seven);
    assert_eq!(sevens.value(), 21);
    assert!(!sevens.is_blackjack());
    assert_eq!(sevens.status(), HandStatus::Active);
}

#[test]
fn split_hand_twenty_one_is_not_a_natural() {
    let hand = Hand::from_split(Ace, King, 10);
    assert_eq!(hand.value(), 21);
    // The shape predicate holds, but the status never becomes Blackjack.
    assert!(hand.is_blackjack());
    assert_eq!(hand.status(), HandStatus::Active);
}

#[test]
fn bust_detection() {
    let mut hand = Hand::new(Ten, Ten, 5);
    assert!(!hand.is_bust());
    hand.add_card(Five);
    assert_eq!(hand.value(), 25);
    assert!(hand.is_bust());
    assert_eq!(hand.status(), HandStatus::Bust);
}

#[test]
fn only_identical_ranks_split() {
    assert!(Hand::new(King, King, 10).can_be_split());
    assert!(Hand::new(Ace, Ace, 10).can_be_split());
    // Equal scoring value is not enough.
    assert!(!Hand::new(King, Ten, 10).can_be_split());
    assert!(!Hand::new(Jack, Queen, 10).can_be_split());

    let mut three_cards = Hand::new(Two, Two, 10);
    three_cards.add_card(Two);
    assert!(!three_cards.can_be_split());
}

#[test]
fn natural_blackjack_pays_three_to_two_at_deal_time() {
    let mut player = Player::new(1000, 0);
    player.start_round([Ace, King], 100, RoundingMode::Down);

    assert_eq!(player.bankroll(), 1150);
    assert_eq!(player.hands()[0].status(), HandStatus::Blackjack);
    assert!(!player.has_unplayed_hands());
    // Idempotent query.
    assert!(!player.has_unplayed_hands());
}

#[test]
fn blackjack_payout_rounding_on_odd_bets() {
    // 5 * 2.5 = 12.5: the rounding mode decides the half.
    let mut down = Player::new(1000, 0);
    down.start_round([Ace, King], 5, RoundingMode::Down);
    assert_eq!(down.bankroll(), 1007);

    let mut up = Player::new(1000, 0);
    up.start_round([Ace, King], 5, RoundingMode::Up);
    assert_eq!(up.bankroll(), 1008);

    let mut nearest = Player::new(1000, 0);
    nearest.start_round([Ace, King], 5, RoundingMode::Nearest);
    assert_eq!(nearest.bankroll(), 1008);

    // Even bets are exact in every mode.
    let mut even = Player::new(1000, 0);
    even.start_round([Ace, King], 100, RoundingMode::Nearest);
    assert_eq!(even.bankroll(), 1150);
}

#[test]
fn hit_keeps_the_cursor_until_a_bust() {
    let mut player = Player::new(500, 0);
    player.start_round([Eight, Seven], 50, RoundingMode::Down);
    assert_eq!(player.bankroll(), 450);

    assert_eq!(player.hit(Two), HandStatus::Active);
    assert_eq!(player.cursor(), 0);
    assert!(player.has_unplayed_hands());

    assert_eq!(player.hit(King), HandStatus::Bust);
    assert_eq!(player.cursor(), 1);
    assert!(!player.has_unplayed_hands());
}

#[test]
fn stand_finalizes_the_hand() {
    let mut player = Player::new(500, 0);
    player.start_round([Nine, Nine], 50, RoundingMode::Down);

    player.stand();
    assert_eq!(player.hands()[0].status(), HandStatus::Stand);
    assert!(!player.has_unplayed_hands());
}

#[test]
fn double_down_takes_one_card_and_ends_the_hand() {
    let mut player = Player::new(1000, 0);
    player.start_round([Five, Four], 100, RoundingMode::Down);
    assert_eq!(player.bankroll(), 900);

    assert!(player.can_double());
    assert!(!player.can_double_down(0));
    assert!(!player.can_double_down(101)); // above the hand's bet
    assert!(player.can_double_down(100));

    let status = player.double_down(100, King);
    assert_eq!(status, HandStatus::Doubled);
    assert_eq!(player.bankroll(), 800);
    assert_eq!(player.hands()[0].bet(), 200);
    assert_eq!(player.hands()[0].value(), 19);
    assert!(!player.has_unplayed_hands());
}

#[test]
fn busting_double_down_advances_the_cursor_exactly_once() {
    let mut player = Player::new(1000, 0);
    player.start_round([Eight, Eight], 100, RoundingMode::Down);
    player.split([Ten, Ten]);
    assert_eq!(player.hands().len(), 2);

    // First split hand is 18; doubling into a king busts it.
    let status = player.double_down(50, King);
    assert_eq!(status, HandStatus::Bust);
    assert_eq!(player.cursor(), 1);
    assert!(player.has_unplayed_hands());
    assert_eq!(player.current_hand().unwrap().cards(), &[Eight, Ten]);
    assert_eq!(player.bankroll(), 750);
}

#[test]
fn can_double_only_checks_for_a_nonempty_bankroll() {
    let mut skint = Player::new(100, 0);
    skint.start_round([Five, Four], 100, RoundingMode::Down);
    assert_eq!(skint.bankroll(), 0);
    assert!(!skint.can_double());

    let mut nearly = Player::new(100, 0);
    nearly.start_round([Five, Four], 99, RoundingMode::Down);
    assert_eq!(nearly.bankroll(), 1);
    // A single unit left is enough to open the dialogue...
    assert!(nearly.can_double());
    // ...but the concrete amount still has to be covered.
    assert!(!nearly.can_double_down(99));
    assert!(nearly.can_double_down(1));
}

#[test]
fn split_replaces_the_pair_with_two_funded_hands() {
    let mut player = Player::new(600, 0);
    player.start_round([Eight, Eight], 100, RoundingMode::Down);
    assert_eq!(player.bankroll(), 500);
    assert!(player.can_split(4));

    player.split([Three, King]);

    assert_eq!(player.bankroll(), 400);
    assert_eq!(player.hands().len(), 2);
    assert_eq!(player.hands()[0].cards(), &[Eight, Three]);
    assert_eq!(player.hands()[1].cards(), &[Eight, King]);
    assert_eq!(player.hands()[0].bet(), 100);
    assert_eq!(player.hands()[1].bet(), 100);
    assert_eq!(player.cursor(), 0);
}

#[test]
fn split_legality_checks() {
    let mut mismatched = Player::new(600, 0);
    mismatched.start_round([Eight, Nine], 100, RoundingMode::Down);
    assert!(!mismatched.can_split(4));

    let mut poor = Player::new(150, 0);
    poor.start_round([Eight, Eight], 100, RoundingMode::Down);
    assert_eq!(poor.bankroll(), 50);
    assert!(!poor.can_split(4));

    let mut limited = Player::new(1000, 0);
    limited.start_round([Eight, Eight], 100, RoundingMode::Down);
    assert!(!limited.can_split(1));
    limited.split([Eight, Eight]);
    // Both children are pairs again, but the limit of two is reached.
    assert!(limited.hands()[0].can_be_split());
    assert!(!limited.can_split(2));
    assert!(limited.can_split(3));
}

#[test]
fn settlement_pays_wins_refunds_pushes_and_keeps_losses() {
    let mut winner = Player::new(1000, 0);
    winner.start_round([Ten, Eight], 50, RoundingMode::Down);
    winner.stand();
    let result = winner.settle_round(17, false, RoundingMode::Down);
    assert_eq!(winner.bankroll(), 1050);
    assert_eq!(result.hands[0].outcome, HandOutcome::Win);
    assert_eq!(result.hands[0].payout, 100);
    assert_eq!(result.net, 50);

    let mut loser = Player::new(1000, 0);
    loser.start_round([Ten, Eight], 50, RoundingMode::Down);
    loser.stand();
    let result = loser.settle_round(19, false, RoundingMode::Down);
    assert_eq!(loser.bankroll(), 950);
    assert_eq!(result.hands[0].outcome, HandOutcome::Lose);
    assert_eq!(result.net, -50);

    let mut pusher = Player::new(1000, 0);
    pusher.start_round([Ten, Eight], 50, RoundingMode::Down);
    pusher.stand();
    let result = pusher.settle_round(18, false, RoundingMode::Down);
    assert_eq!(pusher.bankroll(), 1000);
    assert_eq!(result.hands[0].outcome, HandOutcome::Push);
    assert_eq!(result.net, 0);
}

#[test]
fn dealer_blackjack_beats_an_equal_twenty_one() {
    let mut player = Player::new(1000, 0);
    player.start_round([Seven, Seven], 50, RoundingMode::Down);
    player.hit(Seven);
    player.stand();
    assert_eq!(player.hands()[0].value(), 21);

    let result = player.settle_round(21, true, RoundingMode::Down);
    assert_eq!(result.hands[0].outcome, HandOutcome::Lose);
    assert_eq!(player.bankroll(), 950);
}

#[test]
fn settlement_never_pays_a_deal_time_blackjack_twice() {
    let mut player = Player::new(1000, 0);
    player.start_round([Ace, King], 100, RoundingMode::Down);
    assert_eq!(player.bankroll(), 1150);

    let result = player.settle_round(20, false, RoundingMode::Down);
    assert_eq!(player.bankroll(), 1150);
    assert_eq!(result.hands[0].outcome, HandOutcome::Blackjack);
    assert_eq!(result.hands[0].payout, 250);
    assert_eq!(result.net, 150);
}

#[test]
fn dealer_bust_pays_every_surviving_hand() {
    let mut player = Player::new(1000, 0);
    player.start_round([Ten, Two], 50, RoundingMode::Down);
    player.stand();

    let result = player.settle_round(24, false, RoundingMode::Down);
    assert_eq!(result.hands[0].outcome, HandOutcome::Win);
    assert_eq!(player.bankroll(), 1050);
}

#[test]
fn split_twenty_one_settles_as_an_ordinary_twenty_one() {
    let mut player = Player::new(1000, 0);
    player.start_round([Ace, Ace], 100, RoundingMode::Down);
    player.split([King, Nine]);
    player.stand();
    player.stand();
    assert_eq!(player.hands()[0].value(), 21);
    assert_eq!(player.hands()[1].value(), 20);

    // 21 beats the dealer's 20 at even money; the 20 pushes.
    let result = player.settle_round(20, false, RoundingMode::Down);
    assert_eq!(result.hands[0].outcome, HandOutcome::Win);
    assert_eq!(result.hands[0].payout, 200);
    assert_eq!(result.hands[1].outcome, HandOutcome::Push);
    assert_eq!(player.bankroll(), 1100);
}

#[test]
fn refund_restores_the_bankroll_of_an_abandoned_round() {
    let mut player = Player::new(1000, 0);
    player.start_round([Ten, Two], 100, RoundingMode::Down);
    assert_eq!(player.bankroll(), 900);

    player.refund_open_hands();
    assert_eq!(player.bankroll(), 1000);
    assert!(player.hands().is_empty());
}

#[test]
fn out_of_money_once_the_bankroll_hits_zero() {
    let mut player = Player::new(100, 0);
    assert!(!player.out_of_money());
    player.start_round([Ten, Eight], 100, RoundingMode::Down);
    player.stand();
    player.settle_round(19, false, RoundingMode::Down);
    assert!(player.out_of_money());
}
