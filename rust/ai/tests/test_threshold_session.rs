use texasduel_ai::{create_policy, ThresholdPolicy};
use texasduel_engine::cards::{Card, Rank, Suit};
use texasduel_engine::deck::Deck;
use texasduel_engine::player::Seat;
use texasduel_engine::rules::TableConfig;
use texasduel_engine::session::{Phase, Session};

/// Checks when free, calls when affordable, folds otherwise.
fn play_passively(s: &mut Session) {
    for _ in 0..32 {
        if s.phase() != Phase::Playing {
            return;
        }
        if s.current_bet() == 0 {
            s.check().unwrap();
        } else if s.call().is_err() {
            s.fold().unwrap();
        }
    }
    panic!("hand did not finish");
}

fn play_hands(seed: u64, hands: usize) -> Vec<Vec<String>> {
    let policy = create_policy("threshold").unwrap();
    let mut s = Session::new(TableConfig::with_seed(seed), policy);
    s.start_dice_roll().unwrap();
    let mut logs = Vec::new();
    for _ in 0..hands {
        while !s.roll_dice().unwrap() {}
        s.new_hand().unwrap();
        play_passively(&mut s);
        assert_eq!(s.phase(), Phase::Result);

        let chips: u32 = s.players().iter().map(|p| p.chips()).sum();
        assert!(chips <= 200);
        assert_eq!(s.pot(), s.outcome().unwrap().pot);

        logs.push(s.log().entries().map(str::to_owned).collect());
        s.continue_to_next_hand().unwrap();
    }
    logs
}

#[test]
fn threshold_policy_plays_full_hands() {
    let logs = play_hands(2024, 25);
    assert_eq!(logs.len(), 25);
    assert!(logs.iter().all(|l| !l.is_empty()));
}

#[test]
fn seeded_sessions_replay_identically() {
    assert_eq!(play_hands(99, 10), play_hands(99, 10));
}

#[test]
fn session_reports_policy_name() {
    let s = Session::new(TableConfig::with_seed(1), Box::new(ThresholdPolicy::new()));
    assert_eq!(s.policy_name(), "threshold");
}

/// Human A♥ A♦ against computer 7♣ 2♦ on K♠ 9♥ 4♣ J♦ 3♥: the computer has nothing.
fn weak_computer_deck() -> Deck {
    let c = Card::new;
    Deck::from_cards(vec![
        c(Rank::Ace, Suit::Hearts),
        c(Rank::Ace, Suit::Diamonds),
        c(Rank::Seven, Suit::Clubs),
        c(Rank::Two, Suit::Diamonds),
        c(Rank::King, Suit::Spades),
        c(Rank::Nine, Suit::Hearts),
        c(Rank::Four, Suit::Clubs),
        c(Rank::Jack, Suit::Diamonds),
        c(Rank::Three, Suit::Hearts),
    ])
    .unwrap()
}

fn dealt_weak_hand(seed: u64, computer_first: bool) -> Session {
    let mut s = Session::new(TableConfig::with_seed(seed), Box::new(ThresholdPolicy::new()));
    s.start_dice_roll().unwrap();
    if computer_first {
        assert!(s.settle_dice(1, 6).unwrap());
    } else {
        assert!(s.settle_dice(6, 1).unwrap());
    }
    s.new_hand_with_deck(weak_computer_deck()).unwrap();
    s
}

fn pot_matches_contributions(s: &Session) -> bool {
    let committed: u32 = s.players().iter().map(|p| p.total_bet_hand()).sum();
    s.pot() == committed
}

#[test]
fn weak_computer_never_folds_on_the_first_card() {
    for seed in 0..40 {
        let s = dealt_weak_hand(seed, true);
        assert_eq!(s.revealed(), 1);
        assert_eq!(s.phase(), Phase::Playing, "seed {seed}");
        assert!(!s.players()[Seat::Computer].folded(), "seed {seed}");
        assert!(pot_matches_contributions(&s), "seed {seed}");
    }
}

#[test]
fn weak_computer_answers_an_opening_check() {
    for seed in 0..40 {
        let mut s = dealt_weak_hand(seed, false);
        assert_eq!(s.revealed(), 1);
        s.check().unwrap();
        assert!(!s.players()[Seat::Computer].folded(), "seed {seed}");
        assert_eq!(s.phase(), Phase::Playing, "seed {seed}");
        assert_eq!(s.revealed(), 2);
        assert!(pot_matches_contributions(&s), "seed {seed}");
    }
}
