//! War resolution: recursive tie-breaking.
//!
//! Each pass first looks at both seats' next four cards (player 1 first). A
//! seat holding fewer than four cards loses on the spot and its whole hand
//! follows the pile to the opponent. Otherwise both seats lay three cards
//! face-down and one face-up; a higher face-up card takes the pile, a tie
//! escalates. Every pass adds eight cards to the two tied ones, so a war over
//! 52 cards escalates at most 6 times.

use std::cmp::Ordering;

use tracing::{debug, info};

use super::game::Game;
use crate::cards::compare;
use crate::core::PlayerId;
use crate::rules::WarRecord;
use crate::zones::WarPile;

impl Game {
    /// Resolve a war over `pile`, returning the winner and how it ended.
    pub(super) fn resolve_war(&mut self, mut pile: WarPile) -> (PlayerId, WarRecord) {
        self.wars_count += 1;

        let outcome = loop {
            let (first, second) = self.players.both_mut();
            let (up1, up2) = match (first.war_stake(), second.war_stake()) {
                (None, _) => break self.forfeit(PlayerId::ONE, pile),
                (_, None) => break self.forfeit(PlayerId::TWO, pile),
                (Some(stake1), Some(stake2)) => (
                    first.lay_stake(stake1, &mut pile),
                    second.lay_stake(stake2, &mut pile),
                ),
            };
            pile.push(up1);
            pile.push(up2);

            self.current_war_chain += 1;
            self.longest_war_chain = self.longest_war_chain.max(self.current_war_chain);
            debug!(
                escalation = self.current_war_chain,
                player1_card = %up1,
                player2_card = %up2,
                pile = pile.len(),
                "war cards"
            );

            match compare(&up1, &up2) {
                Ordering::Greater => break self.award(PlayerId::ONE, pile),
                Ordering::Less => break self.award(PlayerId::TWO, pile),
                Ordering::Equal => continue,
            }
        };

        self.current_war_chain = 0;
        outcome
    }

    /// `winner` takes the pile after a decisive face-up comparison.
    fn award(&mut self, winner: PlayerId, pile: WarPile) -> (PlayerId, WarRecord) {
        let record = WarRecord {
            escalations: self.current_war_chain,
            pile_size: pile.len(),
            forfeited_by: None,
        };
        self.players[winner].add_cards(pile);

        debug!(
            winner = self.players[winner].name(),
            escalations = record.escalations,
            pile = record.pile_size,
            "war won"
        );
        (winner, record)
    }

    /// `short` cannot stake four cards: the opponent takes the pile, then
    /// everything left in `short`'s hand.
    fn forfeit(&mut self, short: PlayerId, pile: WarPile) -> (PlayerId, WarRecord) {
        let winner = short.opponent();
        let remaining = self.players[short].forfeit_hand();
        let record = WarRecord {
            escalations: self.current_war_chain,
            pile_size: pile.len() + remaining.len(),
            forfeited_by: Some(short),
        };
        self.players[winner].add_cards(pile.into_iter().chain(remaining));

        info!(
            winner = self.players[winner].name(),
            forfeited_by = self.players[short].name(),
            escalations = record.escalations,
            pile = record.pile_size,
            "war forfeited"
        );
        (winner, record)
    }
}
