//! Term/definition matching.
//!
//! Terms are shown in sampled order; definitions are sorted by their text,
//! ignoring case, so their position never gives the answer away. The player selects a
//! term, then a definition.

use std::sync::Arc;

use im::{OrdSet, Vector};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::content::ContentPair;
use crate::core::{EngineConfig, GameVariant, PairId};
use crate::rules::{Deferred, MiniGame, Transition};
use crate::session::SummaryStats;

/// Matching game state.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MatchingGame {
    #[serde(skip)]
    config: Arc<EngineConfig>,
    /// Sampled pairs, in term display order.
    pairs: Vector<ContentPair>,
    /// Pair ids ordered by case-folded definition text, then id.
    definition_order: Vector<PairId>,
    /// Grows monotonically.
    matched: OrdSet<PairId>,
    selected_term: Option<PairId>,
    /// Definition last picked wrongly; cleared by a timer.
    wrong_match: Option<PairId>,
}

impl MatchingGame {
    /// Create a game over already-sampled pairs.
    pub fn new(pairs: Vec<ContentPair>, config: Arc<EngineConfig>) -> Self {
        let mut by_definition: Vec<(String, PairId)> =
            pairs.iter().map(|p| (p.definition.to_lowercase(), p.id)).collect();
        by_definition.sort();
        let definition_order = by_definition.into_iter().map(|(_, id)| id).collect();

        Self {
            config,
            pairs: pairs.into_iter().collect(),
            definition_order,
            matched: OrdSet::new(),
            selected_term: None,
            wrong_match: None,
        }
    }

    /// Terms in display order.
    pub fn terms(&self) -> impl Iterator<Item = (PairId, &str)> {
        self.pairs.iter().map(|p| (p.id, p.term.as_str()))
    }

    /// Definitions in display order (sorted by text, ignoring case).
    pub fn definitions(&self) -> impl Iterator<Item = (PairId, &str)> {
        self.definition_order
            .iter()
            .filter_map(move |id| self.pair(*id).map(|p| (p.id, p.definition.as_str())))
    }

    /// Look up a sampled pair.
    #[must_use]
    pub fn pair(&self, id: PairId) -> Option<&ContentPair> {
        self.pairs.iter().find(|p| p.id == id)
    }

    /// Id of the pair whose term reads `term`.
    #[must_use]
    pub fn find_term(&self, term: &str) -> Option<PairId> {
        self.pairs.iter().find(|p| p.term == term).map(|p| p.id)
    }

    /// Number of sampled pairs.
    #[must_use]
    pub fn pair_count(&self) -> usize {
        self.pairs.len()
    }

    /// Matched pair ids.
    #[must_use]
    pub fn matched(&self) -> &OrdSet<PairId> {
        &self.matched
    }

    /// Check if a pair has been matched.
    #[must_use]
    pub fn is_matched(&self, id: PairId) -> bool {
        self.matched.contains(&id)
    }

    /// Currently selected term.
    #[must_use]
    pub fn selected_term(&self) -> Option<PairId> {
        self.selected_term
    }

    /// Definition currently flagged as a wrong match.
    #[must_use]
    pub fn wrong_match(&self) -> Option<PairId> {
        self.wrong_match
    }

    /// Select a term. Re-selecting the selected term is harmless.
    pub fn select_term(&mut self, id: PairId) -> Transition {
        if self.is_matched(id) || self.pair(id).is_none() {
            debug!("matching: ignoring term {id}");
            return Transition::none();
        }

        self.selected_term = Some(id);
        if self.wrong_match.take().is_some() {
            return Transition::none().cancel(Deferred::ClearWrongMatch);
        }
        Transition::none()
    }

    /// Pick a definition for the selected term.
    pub fn select_definition(&mut self, id: PairId) -> Transition {
        let Some(selected) = self.selected_term else {
            debug!("matching: definition {id} picked with no term selected");
            return Transition::none();
        };
        if self.is_matched(id) || self.pair(id).is_none() {
            return Transition::none();
        }

        if selected == id {
            self.matched.insert(id);
            self.selected_term = None;

            let mut step = Transition::none().award(self.config.points.correct_match);
            if self.wrong_match.take().is_some() {
                step = step.cancel(Deferred::ClearWrongMatch);
            }
            if self.is_complete() {
                step = step.complete();
            }
            step
        } else {
            self.wrong_match = Some(id);
            Transition::none()
                .award(-self.config.points.wrong_match_penalty)
                .cancel(Deferred::ClearWrongMatch)
                .after(self.config.delays.wrong_match_ms, Deferred::ClearWrongMatch)
        }
    }
}

impl MiniGame for MatchingGame {
    fn variant(&self) -> GameVariant {
        GameVariant::Matching
    }

    fn on_timer(&mut self, deferred: Deferred) -> Transition {
        if deferred == Deferred::ClearWrongMatch {
            self.wrong_match = None;
        }
        Transition::none()
    }

    fn is_complete(&self) -> bool {
        self.matched.len() == self.pairs.len()
    }

    fn stats(&self) -> SummaryStats {
        SummaryStats::Matching {
            matched: self.matched.len(),
            total: self.pairs.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game() -> MatchingGame {
        let pairs = vec![
            ContentPair::new(1, "Carbon", "Z = 6"),
            ContentPair::new(2, "Oxygen", "Z = 8"),
            ContentPair::new(3, "Helium", "A noble gas"),
        ];
        MatchingGame::new(pairs, Arc::new(EngineConfig::default()))
    }

    #[test]
    fn test_definitions_sorted_by_text() {
        let game = game();
        let defs: Vec<_> = game.definitions().map(|(_, d)| d).collect();
        assert_eq!(defs, vec!["A noble gas", "Z = 6", "Z = 8"]);

        let terms: Vec<_> = game.terms().map(|(_, t)| t).collect();
        assert_eq!(terms, vec!["Carbon", "Oxygen", "Helium"]);
    }

    #[test]
    fn test_definitions_sort_ignores_case() {
        let pairs = vec![
            ContentPair::new(1, "Alpha carbon", "alpha carbon"),
            ContentPair::new(2, "Zwitterion", "Zwitterion form"),
            ContentPair::new(3, "Three", "Def 3"),
            ContentPair::new(4, "Four", "Def 4"),
            ContentPair::new(5, "Five", "Def 5"),
            ContentPair::new(6, "Six", "Def 6"),
        ];
        let game = MatchingGame::new(pairs, Arc::new(EngineConfig::default()));

        let defs: Vec<_> = game.definitions().map(|(_, d)| d).collect();
        assert_eq!(
            defs,
            vec!["alpha carbon", "Def 3", "Def 4", "Def 5", "Def 6", "Zwitterion form"]
        );
    }

    #[test]
    fn test_definitions_case_tie_breaks_on_id() {
        let pairs = vec![
            ContentPair::new(9, "Upper", "Sigma"),
            ContentPair::new(2, "Lower", "sigma"),
        ];
        let game = MatchingGame::new(pairs, Arc::new(EngineConfig::default()));

        let ids: Vec<_> = game.definitions().map(|(id, _)| id).collect();
        assert_eq!(ids, vec![PairId::new(2), PairId::new(9)]);
    }

    #[test]
    fn test_correct_match() {
        let mut game = game();
        let carbon = game.find_term("Carbon").unwrap();

        assert!(game.select_term(carbon).is_noop());
        let step = game.select_definition(carbon);

        assert_eq!(step.delta, 100);
        assert!(!step.completed);
        assert!(game.is_matched(carbon));
        assert_eq!(game.selected_term(), None);
    }

    #[test]
    fn test_wrong_match_penalty_and_timer() {
        let mut game = game();
        game.select_term(PairId::new(1));
        let step = game.select_definition(PairId::new(2));

        assert_eq!(step.delta, -25);
        assert_eq!(step.schedule.as_slice(), &[(600, Deferred::ClearWrongMatch)]);
        assert_eq!(game.wrong_match(), Some(PairId::new(2)));
        assert_eq!(game.selected_term(), Some(PairId::new(1)));

        game.on_timer(Deferred::ClearWrongMatch);
        assert_eq!(game.wrong_match(), None);
    }

    #[test]
    fn test_select_term_clears_wrong_match() {
        let mut game = game();
        game.select_term(PairId::new(1));
        game.select_definition(PairId::new(2));

        let step = game.select_term(PairId::new(3));
        assert_eq!(game.wrong_match(), None);
        assert_eq!(step.cancel.as_slice(), &[Deferred::ClearWrongMatch]);
    }

    #[test]
    fn test_noops() {
        let mut game = game();

        // No term selected
        assert!(game.select_definition(PairId::new(1)).is_noop());

        // Unknown ids
        assert!(game.select_term(PairId::new(99)).is_noop());
        game.select_term(PairId::new(1));
        assert!(game.select_definition(PairId::new(99)).is_noop());

        // Already matched
        game.select_definition(PairId::new(1));
        assert!(game.select_term(PairId::new(1)).is_noop());
        game.select_term(PairId::new(2));
        assert!(game.select_definition(PairId::new(1)).is_noop());
    }

    #[test]
    fn test_reselect_same_term_is_idempotent() {
        let mut game = game();
        assert!(game.select_term(PairId::new(2)).is_noop());
        assert!(game.select_term(PairId::new(2)).is_noop());
        assert_eq!(game.selected_term(), Some(PairId::new(2)));
    }

    #[test]
    fn test_completion() {
        let mut game = game();
        let mut last = Transition::none();
        for id in [1, 2, 3] {
            game.select_term(PairId::new(id));
            last = game.select_definition(PairId::new(id));
        }

        assert!(last.completed);
        assert!(game.is_complete());
        assert_eq!(game.stats(), SummaryStats::Matching { matched: 3, total: 3 });
    }
}
