//! Property tests for the scoring and state invariants of each game.
//!
//! Each property drives a seeded controller with a random sequence of
//! player inputs and clock advances, checking invariants after every step.

use chem_games::{
    EngineConfig, GameVariant, PairId, PlayerAction, QuizAnswer, SessionController, SessionStatus,
};
use proptest::prelude::*;

fn controller(seed: u64, variant: GameVariant) -> SessionController {
    let mut controller = SessionController::new(EngineConfig::default().with_seed(seed)).unwrap();
    controller.start(variant).unwrap();
    controller
}

// =============================================================================
// Matching
// =============================================================================

#[derive(Clone, Debug)]
enum MatchStep {
    Term(usize),
    Definition(usize),
    Wait(u64),
}

fn match_step() -> impl Strategy<Value = MatchStep> {
    prop_oneof![
        (0..6usize).prop_map(MatchStep::Term),
        (0..6usize).prop_map(MatchStep::Definition),
        (0..1000u64).prop_map(MatchStep::Wait),
    ]
}

proptest! {
    #[test]
    fn prop_matching_score_and_progress(
        seed in any::<u64>(),
        steps in prop::collection::vec(match_step(), 1..60),
    ) {
        let mut controller = controller(seed, GameVariant::Matching);
        let ids: Vec<PairId> = controller
            .game()
            .unwrap()
            .as_matching()
            .unwrap()
            .terms()
            .map(|(id, _)| id)
            .collect();

        for step in steps {
            let before = controller.game().unwrap().as_matching().unwrap().clone();
            let score_before = controller.score();
            let in_progress = controller.status() == SessionStatus::InProgress;

            match step {
                MatchStep::Term(i) => {
                    controller.dispatch(&PlayerAction::SelectTerm { pair: ids[i] });
                }
                MatchStep::Definition(i) => {
                    controller.dispatch(&PlayerAction::SelectDefinition { pair: ids[i] });

                    let selected = before.selected_term();
                    let live = in_progress && selected.is_some() && !before.is_matched(ids[i]);
                    let expected = match (live, selected == Some(ids[i])) {
                        (false, _) => score_before,
                        (true, true) => score_before + 100,
                        (true, false) => score_before.saturating_sub(25),
                    };
                    prop_assert_eq!(controller.score(), expected);
                }
                MatchStep::Wait(ms) => controller.advance(ms),
            }

            let after = controller.game().unwrap().as_matching().unwrap();
            prop_assert!(after.matched().len() >= before.matched().len());
            prop_assert!(before.matched().iter().all(|id| after.is_matched(*id)));
            prop_assert_eq!(
                controller.status() == SessionStatus::Complete,
                after.matched().len() == ids.len()
            );
        }
    }
}

// =============================================================================
// Memory
// =============================================================================

#[derive(Clone, Debug)]
enum MemoryStep {
    Flip(usize),
    Wait(u64),
}

fn memory_step() -> impl Strategy<Value = MemoryStep> {
    prop_oneof![
        3 => (0..8usize).prop_map(MemoryStep::Flip),
        1 => (0..1500u64).prop_map(MemoryStep::Wait),
    ]
}

proptest! {
    #[test]
    fn prop_memory_turn_structure(
        seed in any::<u64>(),
        steps in prop::collection::vec(memory_step(), 1..80),
    ) {
        let mut controller = controller(seed, GameVariant::Memory);
        let card_ids: Vec<_> = controller
            .game()
            .unwrap()
            .as_memory()
            .unwrap()
            .cards()
            .iter()
            .map(|c| c.id)
            .collect();

        for step in steps {
            let before = controller.game().unwrap().as_memory().unwrap().clone();
            let score_before = controller.score();

            match step {
                MemoryStep::Flip(i) => {
                    let card = card_ids[i];
                    controller.dispatch(&PlayerAction::Flip { card });
                    let after = controller.game().unwrap().as_memory().unwrap();

                    let was_matched = before.card(card).unwrap().matched;
                    let blocked = before.face_up().len() == 2 || before.face_up().contains(&card);
                    if was_matched || blocked {
                        prop_assert_eq!(after.face_up(), before.face_up());
                        prop_assert_eq!(after.moves(), before.moves());
                    } else if before.face_up().len() == 1 {
                        prop_assert_eq!(after.moves(), before.moves() + 1);
                    } else {
                        prop_assert_eq!(after.moves(), before.moves());
                    }
                }
                MemoryStep::Wait(ms) => controller.advance(ms),
            }

            let after = controller.game().unwrap().as_memory().unwrap();
            prop_assert!(after.face_up().len() <= 2);
            prop_assert!(controller.score() >= score_before);
            prop_assert_eq!(controller.score() as usize, after.matched_pairs() * 150);
            for card in after.face_up() {
                prop_assert!(!after.card(*card).unwrap().matched);
            }
        }
    }
}

// =============================================================================
// Sorting
// =============================================================================

proptest! {
    #[test]
    fn prop_sorting_check_is_stable(
        seed in any::<u64>(),
        moves in prop::collection::vec((0..5usize, 0..5usize), 0..20),
    ) {
        let mut controller = controller(seed, GameVariant::Sorting);

        for (from, to) in moves {
            let items = controller.game().unwrap().as_sorting().unwrap().items().clone();
            if let Some(item) = items.get(from % items.len()) {
                controller.dispatch(&PlayerAction::MoveItem { item: item.id, to });
            }
        }

        controller.dispatch(&PlayerAction::Check);
        let first = controller.game().unwrap().as_sorting().unwrap().all_correct();
        let score = controller.score();

        controller.dispatch(&PlayerAction::Check);
        let sorting = controller.game().unwrap().as_sorting().unwrap();
        prop_assert_eq!(sorting.all_correct(), first);
        prop_assert_eq!(controller.score(), score);
        prop_assert_eq!(score, if first { 200 } else { 0 });
    }
}

// =============================================================================
// Speed quiz
// =============================================================================

proptest! {
    #[test]
    fn prop_speed_quiz_points(
        seed in any::<u64>(),
        plays in prop::collection::vec((0..11u64, 0..4usize), 5),
    ) {
        let mut controller = controller(seed, GameVariant::SpeedQuiz);

        for (wait_secs, option) in plays {
            controller.advance(wait_secs * 1000);

            let quiz = controller.game().unwrap().as_speed_quiz().unwrap().clone();
            let score_before = controller.score();

            if quiz.answer().is_none() {
                let remaining = quiz.remaining_secs();
                let correct = quiz.current_question().unwrap().correct_index == option;
                controller.dispatch(&PlayerAction::Answer { option });

                let gained = controller.score() - score_before;
                prop_assert!(gained <= 100);
                prop_assert_eq!(gained, if correct { remaining * 10 } else { 0 });
            } else {
                prop_assert_eq!(quiz.answer(), Some(QuizAnswer::TimedOut));
                controller.dispatch(&PlayerAction::Answer { option });
                prop_assert_eq!(controller.score(), score_before);
            }

            controller.advance(1000);
        }

        prop_assert_eq!(controller.status(), SessionStatus::Complete);
        prop_assert_eq!(controller.pending_timers(), 0);
    }
}

// =============================================================================
// Fill in the blank
// =============================================================================

proptest! {
    #[test]
    fn prop_fill_blank_points(seed in any::<u64>(), picks in prop::collection::vec(0..4usize, 5)) {
        let mut controller = controller(seed, GameVariant::FillBlank);

        for pick in picks {
            let game = controller.game().unwrap().as_fill_blank().unwrap();
            let Some(blank) = game.current_blank().cloned() else {
                break;
            };
            let score_before = controller.score();

            controller.dispatch(&PlayerAction::FillIn { text: blank.options[pick].clone() });
            let gained = controller.score() - score_before;
            prop_assert!(gained == 0 || gained == 100);
            prop_assert_eq!(gained == 100, blank.options[pick] == blank.correct_answer);

            // A second answer on the same blank changes nothing
            controller.dispatch(&PlayerAction::FillIn { text: blank.correct_answer.clone() });
            prop_assert_eq!(controller.score(), score_before + gained);

            controller.advance(1200);
        }
    }
}
