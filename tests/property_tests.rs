//! Property tests for the invariants that must hold in every game.

use proptest::prelude::*;
use war_engine::cards::{create_deck, Card, Deck, STANDARD_DECK_SIZE};
use war_engine::core::{GameRng, PlayerId};
use war_engine::games::war::Game;

/// Any ordering of the 52 cards.
fn any_deck() -> impl Strategy<Value = Deck> {
    Just(create_deck().cards().to_vec())
        .prop_shuffle()
        .prop_map(Deck::from_cards)
}

/// A non-empty prefix of a shuffled deck, odd lengths included.
fn any_partial_deck() -> impl Strategy<Value = Vec<Card>> {
    (any_deck(), 1..=STANDARD_DECK_SIZE)
        .prop_map(|(deck, len)| deck.into_iter().take(len).collect())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_cards_are_conserved(deck in any_deck()) {
        let mut game = Game::new("Alice", "Bob", deck).unwrap();

        for _ in 0..2_000 {
            let outcome = game.play_round();
            prop_assert_eq!(game.cards_in_hands(), 52);
            if !outcome.continues() {
                break;
            }
        }
    }

    #[test]
    fn prop_every_round_has_one_winner(deck in any_deck()) {
        let mut game = Game::new("Alice", "Bob", deck).unwrap();

        for _ in 0..2_000 {
            let before = game.rounds_won(PlayerId::ONE) + game.rounds_won(PlayerId::TWO);
            let outcome = game.play_round();
            let after = game.rounds_won(PlayerId::ONE) + game.rounds_won(PlayerId::TWO);

            match outcome.record() {
                Some(record) => {
                    prop_assert_eq!(after, before + 1);
                    prop_assert_eq!(game.last_winner(), Some(record.winner));
                }
                None => {
                    prop_assert_eq!(after, before);
                    break;
                }
            }
            prop_assert_eq!(after, game.rounds_played());
        }
    }

    #[test]
    fn prop_war_chain_resets(deck in any_deck()) {
        let mut game = Game::new("Alice", "Bob", deck).unwrap();
        let mut deepest = 0;

        for _ in 0..2_000 {
            let outcome = game.play_round();
            prop_assert_eq!(game.current_war_chain(), 0);
            prop_assert!(game.longest_war_chain() >= game.current_war_chain());
            // each escalation stakes 8 cards beyond the tied pair
            prop_assert!(game.longest_war_chain() as usize <= (game.dealt_cards() - 2) / 8);

            if let Some(war) = outcome.record().and_then(|r| r.war) {
                deepest = deepest.max(war.escalations);
            }
            if !outcome.continues() {
                break;
            }
        }
        prop_assert_eq!(game.longest_war_chain(), deepest);
    }

    #[test]
    fn prop_forfeiter_ends_empty(deck in any_deck()) {
        let mut game = Game::new("Alice", "Bob", deck).unwrap();

        for _ in 0..2_000 {
            let outcome = game.play_round();
            let Some(record) = outcome.record() else { break };
            if let Some(short) = record.war.and_then(|w| w.forfeited_by) {
                prop_assert_eq!(game.player(short).hand_size(), 0);
                prop_assert_eq!(record.winner, short.opponent());
                prop_assert_eq!(game.player(record.winner).hand_size(), 52);
            }
        }
    }

    #[test]
    fn prop_partial_decks_deal_alternately(cards in any_partial_deck()) {
        let len = cards.len();
        let game = Game::from_cards("Alice", "Bob", cards).unwrap();

        prop_assert_eq!(game.player(PlayerId::ONE).hand_size(), len.div_ceil(2));
        prop_assert_eq!(game.player(PlayerId::TWO).hand_size(), len / 2);
        prop_assert_eq!(game.dealt_cards(), len);
    }

    #[test]
    fn prop_partial_games_conserve_cards(cards in any_partial_deck()) {
        let len = cards.len();
        let mut game = Game::from_cards("Alice", "Bob", cards).unwrap();

        for _ in 0..2_000 {
            let continues = game.play_round().continues();
            prop_assert_eq!(game.cards_in_hands(), len);
            if !continues {
                break;
            }
        }
    }

    #[test]
    fn prop_seeded_shuffle_is_a_permutation(seed in any::<u64>()) {
        let deck = Deck::shuffled(&mut GameRng::new(seed));
        prop_assert!(deck.validate_standard().is_ok());
    }
}
