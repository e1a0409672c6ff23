//! Memory (concentration) game.
//!
//! Each sampled pair becomes two face-down cards, one showing the term and
//! one the definition. A turn is two flips; the pair is then resolved after
//! a short delay. While two cards are face-up no further flips are taken,
//! which gives every turn a strict flip-flip-resolve shape.

use std::sync::Arc;

use im::Vector;
use log::debug;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::content::ContentPair;
use crate::core::{CardId, EngineConfig, GameRng, GameVariant, PairId};
use crate::rules::{Deferred, MiniGame, Transition};
use crate::session::SummaryStats;

/// Which half of a pair a card shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardRole {
    Term,
    Definition,
}

/// A single memory card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub content: String,
    pub role: CardRole,
    pub pair_id: PairId,
    pub matched: bool,
}

/// Memory game state.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MemoryGame {
    #[serde(skip)]
    config: Arc<EngineConfig>,
    /// Cards in board order.
    cards: Vector<Card>,
    /// At most two cards.
    face_up: SmallVec<[CardId; 2]>,
    /// Completed two-card reveals.
    moves: u32,
}

impl MemoryGame {
    /// Deal two cards per pair and shuffle the board.
    pub fn new(pairs: &[ContentPair], rng: &mut GameRng, config: Arc<EngineConfig>) -> Self {
        let mut cards = Vec::with_capacity(pairs.len() * 2);
        for (i, pair) in pairs.iter().enumerate() {
            let base = (i * 2) as u32;
            cards.push(Card {
                id: CardId::new(base),
                content: pair.term.clone(),
                role: CardRole::Term,
                pair_id: pair.id,
                matched: false,
            });
            cards.push(Card {
                id: CardId::new(base + 1),
                content: pair.definition.clone(),
                role: CardRole::Definition,
                pair_id: pair.id,
                matched: false,
            });
        }
        rng.shuffle(&mut cards);

        Self {
            config,
            cards: cards.into_iter().collect(),
            face_up: SmallVec::new(),
            moves: 0,
        }
    }

    /// Cards in board order.
    #[must_use]
    pub fn cards(&self) -> &Vector<Card> {
        &self.cards
    }

    /// Look up a card.
    #[must_use]
    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.cards.iter().find(|c| c.id == id)
    }

    /// Cards currently face-up (unresolved).
    #[must_use]
    pub fn face_up(&self) -> &[CardId] {
        &self.face_up
    }

    /// Check if a card is showing (face-up or matched).
    #[must_use]
    pub fn is_revealed(&self, id: CardId) -> bool {
        self.face_up.contains(&id) || self.card(id).is_some_and(|c| c.matched)
    }

    /// Completed two-card reveals.
    #[must_use]
    pub fn moves(&self) -> u32 {
        self.moves
    }

    /// Number of matched pairs.
    #[must_use]
    pub fn matched_pairs(&self) -> usize {
        self.cards.iter().filter(|c| c.matched).count() / 2
    }

    /// Turn a card face-up.
    pub fn flip(&mut self, id: CardId) -> Transition {
        if self.face_up.len() >= 2 {
            debug!("memory: two cards already face-up, ignoring {id}");
            return Transition::none();
        }
        let Some(card) = self.card(id) else {
            return Transition::none();
        };
        if card.matched || self.face_up.contains(&id) {
            return Transition::none();
        }

        self.face_up.push(id);
        if self.face_up.len() < 2 {
            return Transition::none();
        }

        self.moves += 1;
        let delay = if self.face_up_pair_matches() {
            self.config.delays.memory_match_ms
        } else {
            self.config.delays.memory_mismatch_ms
        };
        Transition::none().after(delay, Deferred::ResolveMemoryTurn)
    }

    fn face_up_pair_matches(&self) -> bool {
        match self.face_up.as_slice() {
            [a, b] => {
                let pair_a = self.card(*a).map(|c| c.pair_id);
                let pair_b = self.card(*b).map(|c| c.pair_id);
                pair_a.is_some() && pair_a == pair_b
            }
            _ => false,
        }
    }

    fn resolve_turn(&mut self) -> Transition {
        if self.face_up.len() != 2 {
            return Transition::none();
        }

        let matched = self.face_up_pair_matches();
        let flipped = std::mem::take(&mut self.face_up);
        if !matched {
            return Transition::none();
        }

        for card in self.cards.iter_mut() {
            if flipped.contains(&card.id) {
                card.matched = true;
            }
        }

        let step = Transition::none().award(self.config.points.memory_pair);
        if self.is_complete() {
            step.complete()
        } else {
            step
        }
    }
}

impl MiniGame for MemoryGame {
    fn variant(&self) -> GameVariant {
        GameVariant::Memory
    }

    fn on_timer(&mut self, deferred: Deferred) -> Transition {
        match deferred {
            Deferred::ResolveMemoryTurn => self.resolve_turn(),
            _ => Transition::none(),
        }
    }

    fn is_complete(&self) -> bool {
        self.cards.iter().all(|c| c.matched)
    }

    fn stats(&self) -> SummaryStats {
        SummaryStats::Memory {
            moves: self.moves,
            pairs: self.cards.len() / 2,
        }
    }
}
