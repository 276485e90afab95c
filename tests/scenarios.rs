//! End-to-end scenarios: a small deck, a short action list, and the
//! violations a full pass through `analyze` should produce.

mod util;

use trace_core::{analyze, ConventionLevel, GameAction, Severity, ViolationKind};
use util::*;

#[test]
fn plain_misplay() {
	let g = game(
		&[&["R2", "R1", "Y1", "B1", "G1"], &["R3", "Y2", "B2", "G2", "P1"]],
		&["R4", "Y3"],
		vec![GameAction::play(0)],
	);
	let result = analyze(&g, &options(ConventionLevel::L3Advanced));

	assert_eq!(result.violations.len(), 1, "{:?}", result.violations);
	let v = &result.violations[0];
	assert_eq!(v.kind, ViolationKind::Misplay);
	assert_eq!(v.severity, Severity::Critical);
	assert_eq!(v.turn, 1);
	assert_eq!(v.player, 0);
}

#[test]
fn bad_five_discard() {
	let g = game(
		&[&["R5", "R1", "Y1", "B1", "G1"], &["R2", "Y2", "B2", "G2", "P1"]],
		&["R3", "Y3"],
		vec![GameAction::discard(0)],
	);
	let result = analyze(&g, &options(ConventionLevel::L0Basic));

	assert_eq!(count_kind(&result.violations, ViolationKind::IllegalDiscard), 1);
	assert_eq!(count_kind(&result.violations, ViolationKind::BadDiscard5), 1);
	assert_eq!(result.violations.len(), 2, "{:?}", result.violations);
}

#[test]
fn good_touch_violation_on_trash_reclue() {
	let g = game(
		&[&["R1", "R1", "Y1", "B1", "G1"], &["R2", "Y2", "B2", "G2", "P1"]],
		&["R3", "Y3"],
		vec![GameAction::play(0), GameAction::rank_clue(0, 1)],
	);
	let result = analyze(&g, &options(ConventionLevel::L1Beginner));

	assert_eq!(result.violations.len(), 1, "{:?}", result.violations);
	let v = &result.violations[0];
	assert_eq!(v.kind, ViolationKind::GoodTouchViolation);
	assert_eq!(v.turn, 2);
	assert_eq!(v.player, 1);
}

#[test]
fn double_discard_avoidance_on_second_chop_discard() {
	let g = game(
		&[&["R3", "R4", "Y1", "B1", "G1"], &["R3", "Y2", "B2", "G2", "P1"]],
		&["R1", "Y3"],
		vec![GameAction::discard(0), GameAction::discard(5)],
	);
	let result = analyze(&g, &options(ConventionLevel::L2Intermediate));

	assert_eq!(count_kind(&result.violations, ViolationKind::BadDiscardCritical), 1);
	assert_eq!(count_kind(&result.violations, ViolationKind::DoubleDiscardAvoidance), 1);
	let dda = result
		.violations
		.iter()
		.find(|v| v.kind == ViolationKind::DoubleDiscardAvoidance)
		.unwrap();
	assert_eq!(dda.turn, 2);
	assert_eq!(dda.player, 1);
}

#[test]
fn misread_save_at_beginner_level() {
	let g = game(
		&[&["R3", "R1", "Y1", "B1", "G1"], &["R2", "Y2", "B2", "G2", "P1"]],
		&["P2", "Y3"],
		vec![GameAction::color_clue(1, 0), GameAction::rank_clue(0, 3), GameAction::play(0)],
	);
	let result = analyze(&g, &options(ConventionLevel::L1Beginner));

	assert_eq!(count_kind(&result.violations, ViolationKind::Misplay), 1);
	assert_eq!(count_kind(&result.violations, ViolationKind::MisreadSave), 1);
	for v in result.violations.iter().filter(|v| {
		v.kind == ViolationKind::Misplay || v.kind == ViolationKind::MisreadSave
	}) {
		assert_eq!(v.turn, 3);
		assert_eq!(v.player, 0);
	}
}

#[test]
fn clean_perfect_game_prefix_has_no_rule_breaks() {
	let g = game(
		&[&["R1", "R2", "R3", "R4", "R5"], &["Y1", "Y2", "Y3", "Y4", "Y5"]],
		&["G1", "G2", "G3", "G4", "G5"],
		vec![GameAction::play(0), GameAction::play(5), GameAction::play(1), GameAction::play(6)],
	);
	let result = analyze(&g, &options(ConventionLevel::L2Intermediate));

	for kind in [
		ViolationKind::Misplay,
		ViolationKind::BadDiscard5,
		ViolationKind::BadDiscardCritical,
		ViolationKind::IllegalDiscard,
		ViolationKind::MCVPViolation,
	] {
		assert_eq!(count_kind(&result.violations, kind), 0, "unexpected {kind:?}");
	}
}
