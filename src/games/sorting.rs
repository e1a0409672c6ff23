//! Put a curated set of items into their correct order.

use std::sync::Arc;

use im::Vector;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::content::{SortItem, SortingSet};
use crate::core::{EngineConfig, GameRng, GameVariant, ItemId};
use crate::rules::{Deferred, MiniGame, Transition};
use crate::session::SummaryStats;

/// Sorting game state.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SortingGame {
    #[serde(skip)]
    config: Arc<EngineConfig>,
    title: String,
    /// Items in the player's current order.
    items: Vector<SortItem>,
    checked: bool,
    /// A check found the order correct; completion is pending or done.
    solved: bool,
    complete: bool,
}

impl SortingGame {
    /// Present `set` in a scrambled, unsolved order.
    pub fn new(set: &SortingSet, rng: &mut GameRng, config: Arc<EngineConfig>) -> Self {
        let mut game = Self {
            config,
            title: set.title.clone(),
            items: set.items.iter().cloned().collect(),
            checked: false,
            solved: false,
            complete: false,
        };
        game.scramble(rng);
        game
    }

    /// Title of the set being sorted.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Items in the current order.
    #[must_use]
    pub fn items(&self) -> &Vector<SortItem> {
        &self.items
    }

    /// Whether the current order has been checked.
    #[must_use]
    pub fn checked(&self) -> bool {
        self.checked
    }

    /// Whether a check found the order correct.
    #[must_use]
    pub fn solved(&self) -> bool {
        self.solved
    }

    /// Every item sits at its correct 0-based position.
    #[must_use]
    pub fn all_correct(&self) -> bool {
        self.items
            .iter()
            .enumerate()
            .all(|(index, item)| item.correct_order == index)
    }

    /// Current position of an item.
    #[must_use]
    pub fn position(&self, id: ItemId) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }

    /// Move an item to `new_index` (clamped to the last slot).
    ///
    /// Moving after a failed check clears `checked`.
    pub fn move_item(&mut self, id: ItemId, new_index: usize) -> Transition {
        if self.solved {
            return Transition::none();
        }
        let Some(from) = self.position(id) else {
            debug!("sorting: unknown {id}");
            return Transition::none();
        };

        let to = new_index.min(self.items.len() - 1);
        if from != to {
            let item = self.items.remove(from);
            self.items.insert(to, item);
            self.checked = false;
        }
        Transition::none()
    }

    /// Check the current order.
    pub fn check(&mut self) -> Transition {
        if self.solved {
            return Transition::none();
        }

        self.checked = true;
        if !self.all_correct() {
            return Transition::none();
        }

        self.solved = true;
        Transition::none()
            .award(self.config.points.sorting_solved)
            .after(self.config.delays.sorting_complete_ms, Deferred::CompleteSorting)
    }

    /// Re-shuffle the same set and clear the check.
    pub fn reset(&mut self, rng: &mut GameRng) -> Transition {
        if self.solved {
            return Transition::none();
        }
        self.scramble(rng);
        self.checked = false;
        Transition::none()
    }

    fn scramble(&mut self, rng: &mut GameRng) {
        let mut order: Vec<SortItem> = self.items.iter().cloned().collect();
        rng.shuffle(&mut order);
        self.items = order.into_iter().collect();

        if self.all_correct() && self.items.len() > 1 {
            let first = self.items.remove(0);
            self.items.insert(1, first);
        }
    }
}

impl MiniGame for SortingGame {
    fn variant(&self) -> GameVariant {
        GameVariant::Sorting
    }

    fn on_timer(&mut self, deferred: Deferred) -> Transition {
        if deferred != Deferred::CompleteSorting || !self.solved || self.complete {
            return Transition::none();
        }
        self.complete = true;
        Transition::none().complete()
    }

    fn is_complete(&self) -> bool {
        self.complete
    }

    fn stats(&self) -> SummaryStats {
        SummaryStats::Sorting {
            title: self.title.clone(),
            items: self.items.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game(seed: u64) -> SortingGame {
        let set = SortingSet::ordered("Alkanes", &["Methane", "Ethane", "Propane", "Butane"]);
        SortingGame::new(&set, &mut GameRng::new(seed), Arc::new(EngineConfig::default()))
    }

    /// Move every item into its correct slot.
    fn solve(game: &mut SortingGame) {
        for target in 0..game.items().len() {
            let id = game
                .items()
                .iter()
                .find(|item| item.correct_order == target)
                .map(|item| item.id)
                .unwrap();
            game.move_item(id, target);
        }
    }

    #[test]
    fn test_starts_unsolved() {
        for seed in 0..50 {
            let game = game(seed);
            assert!(!game.all_correct(), "seed {seed} started solved");
            assert!(!game.checked());
        }
    }

    #[test]
    fn test_failed_check() {
        let mut game = game(1);
        let step = game.check();
        assert!(step.is_noop());
        assert!(game.checked());
        assert!(!game.all_correct());

        // Idempotent
        assert!(game.check().is_noop());
        assert!(!game.all_correct());
    }

    #[test]
    fn test_solve_and_check() {
        let mut game = game(2);
        game.check();
        solve(&mut game);
        assert!(!game.checked(), "moving clears the failed check");

        let step = game.check();
        assert_eq!(step.delta, 200);
        assert_eq!(step.schedule.as_slice(), &[(1500, Deferred::CompleteSorting)]);
        assert!(game.solved());
        assert!(!game.is_complete());

        // Repeated check awards nothing
        assert!(game.check().is_noop());

        let step = game.on_timer(Deferred::CompleteSorting);
        assert!(step.completed);
        assert!(game.is_complete());
    }

    #[test]
    fn test_moves_blocked_once_solved() {
        let mut game = game(3);
        solve(&mut game);
        game.check();

        let first = game.items()[0].id;
        game.move_item(first, 3);
        assert!(game.all_correct());
    }

    #[test]
    fn test_move_clamps_index() {
        let mut game = game(4);
        let first = game.items()[0].id;
        game.move_item(first, 100);
        assert_eq!(game.position(first), Some(3));
    }

    #[test]
    fn test_unknown_item() {
        let mut game = game(5);
        let before = game.items().clone();
        assert!(game.move_item(ItemId::new(99), 0).is_noop());
        assert_eq!(game.items(), &before);
    }

    #[test]
    fn test_reset() {
        let mut game = game(6);
        game.check();
        let mut rng = GameRng::new(77);
        game.reset(&mut rng);

        assert!(!game.checked());
        assert!(!game.all_correct());
        assert_eq!(game.items().len(), 4);
    }

    #[test]
    fn test_stray_complete_timer() {
        let mut game = game(7);
        assert!(game.on_timer(Deferred::CompleteSorting).is_noop());
        assert!(!game.is_complete());
    }
}
