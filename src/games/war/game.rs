//! War game: dealing, round resolution, statistics.

use std::cmp::Ordering;

use tracing::{debug, info};

use super::player::Player;
use super::snapshot::{GameSnapshot, PlayersSnapshot, Scores};
use crate::cards::{compare, Card, Deck};
use crate::core::{PlayerId, PlayerMap, WarError};
use crate::rules::{GameResult, RoundOutcome, RoundRecord};
use crate::zones::WarPile;

/// A two-player game of War.
///
/// The game owns both players and every dealt card. Between calls each card
/// is in exactly one hand; during a war the in-flight cards sit in a pile
/// local to that call.
///
/// ## Example
///
/// ```
/// use war_engine::cards::create_deck;
/// use war_engine::games::war::Game;
///
/// let mut game = Game::new("Alice", "Bob", create_deck()).unwrap();
/// assert_eq!(game.player(war_engine::core::PlayerId::ONE).hand_size(), 26);
///
/// let outcome = game.play_round();
/// assert!(outcome.continues());
/// assert_eq!(game.rounds_played(), 1);
/// ```
///
/// `Game` has no interior locking. Callers sharing one game across threads
/// must serialize `play_round` themselves (see `WarSession`).
#[derive(Clone, Debug)]
pub struct Game {
    pub(super) players: PlayerMap<Player>,
    rounds_played: u32,
    rounds_won: PlayerMap<u32>,
    last_winner: Option<PlayerId>,
    pub(super) wars_count: u32,
    pub(super) current_war_chain: u32,
    pub(super) longest_war_chain: u32,
    dealt: usize,
}

impl Game {
    /// Deal a standard 52-card deck.
    ///
    /// Fails with `DeckError` unless `deck` holds each card exactly once.
    pub fn new(
        player1: impl Into<String>,
        player2: impl Into<String>,
        deck: Deck,
    ) -> Result<Self, WarError> {
        deck.validate_standard()?;
        Ok(Self::deal(player1.into(), player2.into(), deck))
    }

    /// Deal any non-empty set of distinct cards, odd counts included.
    ///
    /// Used for short scripted games; player 2 gets one card fewer when the
    /// count is odd.
    pub fn from_cards(
        player1: impl Into<String>,
        player2: impl Into<String>,
        cards: impl IntoIterator<Item = Card>,
    ) -> Result<Self, WarError> {
        let deck: Deck = cards.into_iter().collect();
        deck.validate_partial()?;
        Ok(Self::deal(player1.into(), player2.into(), deck))
    }

    /// Deal alternately from the front of the deck, player 1 first.
    fn deal(player1: String, player2: String, deck: Deck) -> Self {
        let dealt = deck.len();
        let mut players = PlayerMap::from_pair(Player::new(player1), Player::new(player2));
        for (i, card) in deck.into_iter().enumerate() {
            let seat = if i % 2 == 0 { PlayerId::ONE } else { PlayerId::TWO };
            players[seat].add_cards([card]);
        }

        debug!(
            dealt,
            player1 = players[PlayerId::ONE].hand_size(),
            player2 = players[PlayerId::TWO].hand_size(),
            "cards dealt"
        );

        Self {
            players,
            rounds_played: 0,
            rounds_won: PlayerMap::with_value(0),
            last_winner: None,
            wars_count: 0,
            current_war_chain: 0,
            longest_war_chain: 0,
            dealt,
        }
    }

    // === Accessors ===

    #[must_use]
    pub fn player(&self, player: PlayerId) -> &Player {
        &self.players[player]
    }

    #[must_use]
    pub fn rounds_played(&self) -> u32 {
        self.rounds_played
    }

    #[must_use]
    pub fn rounds_won(&self, player: PlayerId) -> u32 {
        self.rounds_won[player]
    }

    #[must_use]
    pub fn last_winner(&self) -> Option<PlayerId> {
        self.last_winner
    }

    /// Wars started over the game's lifetime.
    #[must_use]
    pub fn wars_count(&self) -> u32 {
        self.wars_count
    }

    /// Depth of the war being resolved. Always 0 between calls.
    ///
    /// Counts every stake laid, so a war settled by its first face-up
    /// comparison has depth 1 and each further tie adds one.
    #[must_use]
    pub fn current_war_chain(&self) -> u32 {
        self.current_war_chain
    }

    /// Deepest war seen so far.
    #[must_use]
    pub fn longest_war_chain(&self) -> u32 {
        self.longest_war_chain
    }

    /// Cards dealt at the start; 52 for a standard deck.
    #[must_use]
    pub fn dealt_cards(&self) -> usize {
        self.dealt
    }

    /// Cards currently held across both hands.
    #[must_use]
    pub fn cards_in_hands(&self) -> usize {
        self.players.iter().map(|(_, p)| p.hand_size()).sum()
    }

    /// A hand is empty; no further round can be played.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.players.iter().any(|(_, p)| !p.has_cards())
    }

    /// The winner once the game is over.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        if !self.is_over() {
            return None;
        }
        let winner = if self.players[PlayerId::ONE].has_cards() {
            PlayerId::ONE
        } else {
            PlayerId::TWO
        };
        Some(GameResult::Winner(winner))
    }

    // === Play ===

    /// Play one round, including any war it triggers.
    ///
    /// Returns `RoundOutcome::GameOver` without touching any state if either
    /// hand is empty. Otherwise the round always ends with one winner.
    pub fn play_round(&mut self) -> RoundOutcome {
        let played = match (
            self.players[PlayerId::ONE].hand().front(),
            self.players[PlayerId::TWO].hand().front(),
        ) {
            (Some(&first), Some(&second)) => PlayerMap::from_pair(first, second),
            _ => return RoundOutcome::GameOver,
        };
        for player in PlayerId::all() {
            self.players[player].play_card();
        }

        let round = self.rounds_played + 1;
        let (winner, war) = match compare(&played[PlayerId::ONE], &played[PlayerId::TWO]) {
            Ordering::Greater => (self.collect_trick(PlayerId::ONE, &played), None),
            Ordering::Less => (self.collect_trick(PlayerId::TWO, &played), None),
            Ordering::Equal => {
                let pile = WarPile::seeded(played[PlayerId::ONE], played[PlayerId::TWO]);
                let (winner, record) = self.resolve_war(pile);
                (winner, Some(record))
            }
        };
        self.record_win(winner);

        debug_assert_eq!(self.cards_in_hands(), self.dealt);
        debug!(
            round,
            player1_card = %played[PlayerId::ONE],
            player2_card = %played[PlayerId::TWO],
            winner = self.players[winner].name(),
            war = war.is_some(),
            "round resolved"
        );

        RoundOutcome::Resolved(RoundRecord {
            round,
            winner,
            played,
            war,
        })
    }

    /// Play until a hand runs out or `max_rounds` more rounds have been played.
    ///
    /// Returns `None` if the round limit was reached first.
    pub fn play_to_completion(&mut self, max_rounds: u32) -> Option<GameResult> {
        for _ in 0..max_rounds {
            if !self.play_round().continues() {
                break;
            }
        }

        let result = self.result();
        match result {
            Some(GameResult::Winner(winner)) => info!(
                winner = self.players[winner].name(),
                rounds = self.rounds_played,
                wars = self.wars_count,
                longest_war_chain = self.longest_war_chain,
                "game finished"
            ),
            None => info!(
                rounds = self.rounds_played,
                max_rounds, "round limit reached"
            ),
        }
        result
    }

    /// Winner takes both opening cards, the loser's first.
    fn collect_trick(&mut self, winner: PlayerId, played: &PlayerMap<Card>) -> PlayerId {
        let loser = winner.opponent();
        self.players[winner].add_cards([played[loser], played[winner]]);
        winner
    }

    fn record_win(&mut self, winner: PlayerId) {
        self.rounds_played += 1;
        self.rounds_won[winner] += 1;
        self.last_winner = Some(winner);
    }

    // === Snapshot ===

    /// Project the current state for the transport. Pure.
    #[must_use]
    pub fn to_snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            players: PlayersSnapshot {
                player1: self.players[PlayerId::ONE].snapshot(),
                player2: self.players[PlayerId::TWO].snapshot(),
            },
            scores: Scores::from_seats(
                self.players.map(|_, p| p.name()),
                &self.rounds_won,
            ),
            last_winner: self
                .last_winner
                .map(|winner| self.players[winner].name().to_string()),
            rounds_played: self.rounds_played,
            wars_count: self.wars_count,
            current_war_chain: self.current_war_chain,
            longest_war_chain: self.longest_war_chain,
        }
    }
}
