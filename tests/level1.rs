//! Level 1 beginner-convention checker behaviors.

mod util;

use trace_core::{analyze, ConventionLevel, Game, GameAction, ViolationKind};
use util::*;

#[test]
fn good_touch_flags_duplicate_in_another_hand() {
	// 3 players so there's a genuine "other" hand besides giver/target: the
	// duplicate must live in the *third* player's hand, not the giver's own.
	let g = Game {
		players: names(3),
		deck: deck(
			&[
				&["R1", "Y1", "B1", "G1", "P1"],
				&["Y3", "G4", "B2", "P5", "R4"],
				&["Y3", "G2", "B4", "P2", "R5"],
			],
			&[],
		),
		actions: vec![
			GameAction::rank_clue(2, 3),  // Alice clues Cathy's Y3 (fresh touch, fine)
			GameAction::color_clue(0, 3), // Bob clues Alice's B1 (unrelated filler)
			GameAction::color_clue(1, 2), // Cathy clues Bob's G4 (unrelated filler)
			GameAction::rank_clue(1, 3),  // Alice clues Bob's Y3 -> duplicates Cathy's clued Y3
		],
		variant: "No Variant".to_string(),
	};
	let result = analyze(&g, &options(ConventionLevel::L1Beginner));

	assert_eq!(count_kind(&result.violations, ViolationKind::GoodTouchViolation), 1);
	let v = result
		.violations
		.iter()
		.find(|v| v.kind == ViolationKind::GoodTouchViolation)
		.unwrap();
	assert_eq!(v.turn, 4);
	assert_eq!(v.player, 0, "blamed on the giver of the redundant clue (Alice)");
}

#[test]
fn good_touch_flags_same_hand_duplicate() {
	let g = game(
		&[&["Y3", "Y3", "B1", "G1", "P1"], &["R2", "R3", "R4", "R5", "P2"]],
		&[],
		vec![GameAction::color_clue(1, 0), GameAction::rank_clue(0, 3)],
	);
	let result = analyze(&g, &options(ConventionLevel::L1Beginner));

	let gt: Vec<_> =
		result.violations.iter().filter(|v| v.kind == ViolationKind::GoodTouchViolation).collect();
	assert_eq!(gt.len(), 2, "{:?}", result.violations);
	assert!(gt.iter().all(|v| v.turn == 2 && v.player == 1));
}

#[test]
fn mcvp_fires_on_pure_retouch_at_l1() {
	let g = game(
		&[&["R2", "Y1", "B1", "G1", "P1"], &["R1", "Y2", "B2", "G2", "P2"]],
		&[],
		vec![
			GameAction::rank_clue(1, 1),
			GameAction::color_clue(0, 0),
			GameAction::rank_clue(1, 1),
		],
	);
	let result = analyze(&g, &options(ConventionLevel::L1Beginner));

	let mcvp: Vec<_> =
		result.violations.iter().filter(|v| v.kind == ViolationKind::MCVPViolation).collect();
	assert_eq!(mcvp.len(), 1, "{:?}", result.violations);
	assert_eq!(mcvp[0].turn, 3);
	assert_eq!(mcvp[0].player, 0);
}

#[test]
fn mcvp_suppressed_at_l2_when_retouch_is_a_tempo_clue() {
	let g = game(
		&[&["R2", "Y1", "B1", "G1", "P1"], &["R1", "Y2", "B2", "G2", "P2"]],
		&[],
		vec![
			GameAction::rank_clue(1, 1),
			GameAction::color_clue(0, 0),
			GameAction::rank_clue(1, 1),
		],
	);
	let result = analyze(&g, &options(ConventionLevel::L2Intermediate));

	// Bob's R1 stays playable (stack R never advances), so the retouch is a tempo clue.
	assert_eq!(count_kind(&result.violations, ViolationKind::MCVPViolation), 0);
}

#[test]
fn missed_save_suppressed_on_unclued_play() {
	let g = game(
		&[&["R1", "Y1", "B1", "G1", "P1"], &["Y5", "B2", "B3", "B4", "P2"]],
		&[],
		vec![GameAction::play(0)],
	);
	let result = analyze(&g, &options(ConventionLevel::L1Beginner));
	assert_eq!(count_kind(&result.violations, ViolationKind::MissedSave), 0);
}

#[test]
fn missed_save_suppressed_at_zero_tokens() {
	let mut actions = Vec::new();
	for k in 0..8 {
		actions.push(if k % 2 == 0 {
			GameAction::color_clue(1, 0)
		} else {
			GameAction::color_clue(0, 0)
		});
	}
	actions.push(GameAction::discard(1)); // Alice's 9th action, tokens now 0

	let g = game(
		&[&["Y1", "Y2", "Y3", "Y4", "Y5"], &["G2", "B1", "B2", "B3", "B4"]],
		&[],
		actions,
	);
	let result = analyze(&g, &options(ConventionLevel::L1Beginner));
	assert_eq!(count_kind(&result.violations, ViolationKind::MissedSave), 0);
}

#[test]
fn missed_save_suppressed_when_action_is_the_save_clue() {
	let g = game(
		&[&["Y1", "Y2", "Y3", "Y4", "Y5"], &["G2", "B1", "B3", "B4", "P5"]],
		&[],
		vec![GameAction::rank_clue(1, 2)],
	);
	let result = analyze(&g, &options(ConventionLevel::L1Beginner));
	assert_eq!(count_kind(&result.violations, ViolationKind::MissedSave), 0);
}

#[test]
fn missed_prompt_fires_when_color_only_clue_is_deducibly_playable() {
	let g = game(
		&[&["R1", "R2", "Y1", "B1", "G1"], &["R3", "Y2", "B2", "G2", "P1"]],
		&["P2", "Y3"],
		vec![GameAction::play(0), GameAction::color_clue(0, 0), GameAction::discard(2)],
	);
	let result = analyze(&g, &options(ConventionLevel::L1Beginner));

	assert_eq!(count_kind(&result.violations, ViolationKind::MissedPrompt), 1);
	let v = result.violations.iter().find(|v| v.kind == ViolationKind::MissedPrompt).unwrap();
	assert_eq!(v.turn, 3);
	assert_eq!(v.player, 0);
}

#[test]
fn missed_prompt_suppressed_when_not_deducible_from_marks_alone() {
	let g = game(
		&[&["R2", "Y4", "Y1", "B1", "G1"], &["R3", "Y2", "B2", "G2", "P1"]],
		&["P2", "Y3"],
		vec![GameAction::discard(4), GameAction::color_clue(0, 0), GameAction::discard(2)],
	);
	let result = analyze(&g, &options(ConventionLevel::L1Beginner));
	// R2 with stack R=0 needs rank 1 to be deducibly playable from a color-only clue, not rank 2.
	assert_eq!(count_kind(&result.violations, ViolationKind::MissedPrompt), 0);
}

#[test]
fn finesse_setup_and_deadline_emit_missed_finesse() {
	let g = Game {
		players: names(3),
		deck: deck(
			&[
				&["P1", "P2", "P3", "P4", "P5"],
				&["G1", "G2", "G3", "G4", "R1"],
				&["R2", "B1", "B3", "B4", "Y5"],
			],
			&[],
		),
		actions: vec![
			GameAction::rank_clue(2, 2), // Alice focuses Cathy's R2 -> finesse on Bob's R1
			GameAction::discard(5),      // Bob doesn't blind-play the R1; deadline hits here
		],
		variant: "No Variant".to_string(),
	};
	let result = analyze(&g, &options(ConventionLevel::L1Beginner));

	assert_eq!(count_kind(&result.violations, ViolationKind::MissedFinesse), 1);
	let v = result.violations.iter().find(|v| v.kind == ViolationKind::MissedFinesse).unwrap();
	assert_eq!(v.turn, 2);
	assert_eq!(v.player, 1);
}

#[test]
fn broken_finesse_on_unplayable_blind_play() {
	let g = game(
		&[&["Y1", "Y2", "Y3", "Y4", "R5"], &["B1", "B2", "B3", "B4", "P1"]],
		&[],
		vec![GameAction::play(4)],
	);
	let result = analyze(&g, &options(ConventionLevel::L1Beginner));
	assert_eq!(count_kind(&result.violations, ViolationKind::BrokenFinesse), 1);
}

#[test]
fn broken_finesse_does_not_fire_on_successful_blind_play() {
	let g = game(
		&[&["Y1", "Y2", "Y3", "Y4", "R1"], &["B1", "B2", "B3", "B4", "P1"]],
		&[],
		vec![GameAction::play(4)],
	);
	let result = analyze(&g, &options(ConventionLevel::L1Beginner));
	assert_eq!(count_kind(&result.violations, ViolationKind::BrokenFinesse), 0);
	assert_eq!(count_kind(&result.violations, ViolationKind::Misplay), 0);
}
