use texasduel_engine::cards::{full_deck, Card, Rank as R, Suit as S};
use texasduel_engine::errors::GameError;
use texasduel_engine::hand::{evaluate_best, evaluate_five, rank_name, Category};

fn c(r: R, s: S) -> Card {
    Card::new(r, s)
}

fn five(cards: [Card; 5]) -> texasduel_engine::hand::HandStrength {
    evaluate_five(&cards)
}

#[test]
fn detects_every_category() {
    let cases = [
        (
            [c(R::Ten, S::Hearts), c(R::Jack, S::Hearts), c(R::Queen, S::Hearts), c(R::King, S::Hearts), c(R::Nine, S::Hearts)],
            Category::StraightFlush,
            vec![13],
        ),
        (
            [c(R::Six, S::Clubs), c(R::Six, S::Hearts), c(R::Six, S::Spades), c(R::Six, S::Diamonds), c(R::Two, S::Hearts)],
            Category::FourOfAKind,
            vec![6],
        ),
        (
            [c(R::Queen, S::Clubs), c(R::Queen, S::Hearts), c(R::Queen, S::Spades), c(R::Five, S::Diamonds), c(R::Five, S::Hearts)],
            Category::FullHouse,
            vec![12, 5],
        ),
        (
            [c(R::Two, S::Clubs), c(R::Nine, S::Clubs), c(R::Jack, S::Clubs), c(R::Four, S::Clubs), c(R::King, S::Clubs)],
            Category::Flush,
            vec![13, 11, 9, 4, 2],
        ),
        (
            [c(R::Five, S::Clubs), c(R::Six, S::Hearts), c(R::Seven, S::Clubs), c(R::Eight, S::Hearts), c(R::Nine, S::Diamonds)],
            Category::Straight,
            vec![9],
        ),
        (
            [c(R::Eight, S::Clubs), c(R::Eight, S::Hearts), c(R::Eight, S::Diamonds), c(R::Ace, S::Hearts), c(R::Two, S::Diamonds)],
            Category::ThreeOfAKind,
            vec![8],
        ),
        (
            [c(R::Three, S::Clubs), c(R::Three, S::Hearts), c(R::Ten, S::Diamonds), c(R::Ten, S::Hearts), c(R::Two, S::Diamonds)],
            Category::TwoPair,
            vec![10, 3],
        ),
        (
            [c(R::King, S::Clubs), c(R::King, S::Hearts), c(R::Ten, S::Diamonds), c(R::Four, S::Hearts), c(R::Two, S::Diamonds)],
            Category::OnePair,
            vec![13],
        ),
        (
            [c(R::King, S::Clubs), c(R::Nine, S::Hearts), c(R::Ten, S::Diamonds), c(R::Four, S::Hearts), c(R::Two, S::Diamonds)],
            Category::HighCard,
            vec![13, 10, 9, 4, 2],
        ),
    ];
    for (cards, category, tiebreak) in cases {
        let hs = five(cards);
        assert_eq!(hs.category, category, "{:?}", cards);
        assert_eq!(hs.tiebreak, tiebreak, "{:?}", cards);
    }
}

#[test]
fn evaluation_ignores_card_order() {
    let cards = [
        c(R::Queen, S::Clubs),
        c(R::Queen, S::Hearts),
        c(R::Queen, S::Spades),
        c(R::Five, S::Diamonds),
        c(R::Five, S::Hearts),
    ];
    let expected = five(cards);
    // every rotation and every swap of the first card
    for shift in 0..5 {
        let mut rotated = cards;
        rotated.rotate_left(shift);
        assert_eq!(five(rotated), expected);
        for j in 1..5 {
            let mut swapped = rotated;
            swapped.swap(0, j);
            assert_eq!(five(swapped), expected);
        }
    }
}

#[test]
fn higher_category_beats_any_kickers() {
    let weakest_two_pair = five([
        c(R::Three, S::Clubs),
        c(R::Three, S::Hearts),
        c(R::Two, S::Diamonds),
        c(R::Two, S::Hearts),
        c(R::Four, S::Diamonds),
    ]);
    let best_one_pair = five([
        c(R::Ace, S::Clubs),
        c(R::Ace, S::Hearts),
        c(R::King, S::Diamonds),
        c(R::Queen, S::Hearts),
        c(R::Jack, S::Diamonds),
    ]);
    assert!(weakest_two_pair > best_one_pair);

    let low_flush = five([
        c(R::Two, S::Hearts),
        c(R::Three, S::Hearts),
        c(R::Four, S::Hearts),
        c(R::Five, S::Hearts),
        c(R::Seven, S::Hearts),
    ]);
    let broadway = five([
        c(R::Ace, S::Clubs),
        c(R::King, S::Hearts),
        c(R::Queen, S::Diamonds),
        c(R::Jack, S::Hearts),
        c(R::Ten, S::Diamonds),
    ]);
    assert!(low_flush > broadway);
}

#[test]
fn wheel_is_five_high_straight_below_six_high() {
    let wheel = five([
        c(R::Ace, S::Clubs),
        c(R::Two, S::Hearts),
        c(R::Three, S::Diamonds),
        c(R::Four, S::Hearts),
        c(R::Five, S::Spades),
    ]);
    let six_high = five([
        c(R::Two, S::Clubs),
        c(R::Three, S::Hearts),
        c(R::Four, S::Diamonds),
        c(R::Five, S::Hearts),
        c(R::Six, S::Spades),
    ]);
    assert_eq!(wheel.category, Category::Straight);
    assert_eq!(wheel.tiebreak, vec![5]);
    assert!(wheel < six_high);

    let steel_wheel = five([
        c(R::Ace, S::Spades),
        c(R::Two, S::Spades),
        c(R::Three, S::Spades),
        c(R::Four, S::Spades),
        c(R::Five, S::Spades),
    ]);
    assert_eq!(steel_wheel.category, Category::StraightFlush);
    assert_eq!(steel_wheel.tiebreak, vec![5]);
}

#[test]
fn trips_and_pairs_carry_no_kickers() {
    let a = five([
        c(R::Nine, S::Clubs),
        c(R::Nine, S::Hearts),
        c(R::Ace, S::Diamonds),
        c(R::King, S::Hearts),
        c(R::Two, S::Diamonds),
    ]);
    let b = five([
        c(R::Nine, S::Spades),
        c(R::Nine, S::Diamonds),
        c(R::Three, S::Clubs),
        c(R::Four, S::Hearts),
        c(R::Two, S::Clubs),
    ]);
    assert_eq!(a, b);
}

#[test]
fn best_of_seven_is_max_over_all_subsets() {
    let seven = [
        c(R::Ace, S::Hearts),
        c(R::King, S::Hearts),
        c(R::Ace, S::Spades),
        c(R::King, S::Clubs),
        c(R::King, S::Diamonds),
        c(R::Two, S::Hearts),
        c(R::Nine, S::Hearts),
    ];
    let best = evaluate_best(&seven).unwrap();
    assert_eq!(best.category, Category::FullHouse);
    assert_eq!(best.tiebreak, vec![13, 14]);

    let mut max = None;
    let mut subsets = 0;
    for skip_a in 0..7 {
        for skip_b in skip_a + 1..7 {
            let chosen: Vec<Card> = (0..7)
                .filter(|&i| i != skip_a && i != skip_b)
                .map(|i| seven[i])
                .collect();
            let hs = evaluate_five(&[chosen[0], chosen[1], chosen[2], chosen[3], chosen[4]]);
            assert!(best >= hs);
            if max.as_ref().is_none_or(|m| hs > *m) {
                max = Some(hs);
            }
            subsets += 1;
        }
    }
    assert_eq!(subsets, 21);
    assert_eq!(max, Some(best));
}

#[test]
fn best_of_six_uses_all_subsets() {
    let six = [
        c(R::Two, S::Clubs),
        c(R::Six, S::Hearts),
        c(R::Three, S::Diamonds),
        c(R::Four, S::Hearts),
        c(R::Five, S::Spades),
        c(R::King, S::Spades),
    ];
    let best = evaluate_best(&six).unwrap();
    assert_eq!(best.category, Category::Straight);
    assert_eq!(best.tiebreak, vec![6]);
}

#[test]
fn rejects_bad_sizes_and_duplicates() {
    let deck = full_deck();
    assert_eq!(
        evaluate_best(&deck[..4]).unwrap_err(),
        GameError::InvalidHandSize { count: 4 }
    );
    assert_eq!(
        evaluate_best(&deck[..8]).unwrap_err(),
        GameError::InvalidHandSize { count: 8 }
    );
    let dup = [deck[0], deck[1], deck[2], deck[3], deck[0]];
    assert_eq!(
        evaluate_best(&dup).unwrap_err(),
        GameError::DuplicateCard(deck[0])
    );
}

#[test]
fn rank_names_match_table_wording() {
    let hs = evaluate_best(&[
        c(R::Ten, S::Spades),
        c(R::Jack, S::Spades),
        c(R::Queen, S::Spades),
        c(R::King, S::Spades),
        c(R::Ace, S::Spades),
    ])
    .unwrap();
    assert_eq!(rank_name(&hs), "Straight Flush (A-high)");

    let hs = evaluate_best(&[
        c(R::Ten, S::Spades),
        c(R::Ten, S::Hearts),
        c(R::Queen, S::Spades),
        c(R::Four, S::Clubs),
        c(R::Two, S::Diamonds),
    ])
    .unwrap();
    assert_eq!(rank_name(&hs), "One Pair (10-high)");
}
