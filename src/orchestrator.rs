//! Drives the per-action tracker/checker pipeline and assembles the result.

use ahash::{AHashMap, AHashSet};
use itertools::Itertools;
use log::{debug, trace};

use crate::checkers::CHECKERS;
use crate::context::AnalysisContext;
use crate::model::game::{AnalyzerOptions, ConventionLevel, Game, GameState};
use crate::model::violation::{RuleViolation, Severity, ViolationKind};
use crate::simulate::simulate;
use crate::trackers::TRACKERS;

#[derive(Debug, Clone, Default)]
pub struct AnalysisSummary {
	pub total_violations: usize,
	pub by_severity: AHashMap<Severity, usize>,
	pub by_type: AHashMap<ViolationKind, usize>,
}

#[derive(Debug, Clone)]
pub struct AnalysisResult {
	pub states: Vec<GameState>,
	pub violations: Vec<RuleViolation>,
	pub summary: AnalysisSummary,
}

/// The union of violation kinds enabled at `level` and every level below it.
pub fn enabled_violations(level: ConventionLevel) -> AHashSet<ViolationKind> {
	use ViolationKind::*;
	const ALL: &[ViolationKind] = &[
		Misplay,
		BadDiscard5,
		BadDiscardCritical,
		IllegalDiscard,
		GoodTouchViolation,
		MCVPViolation,
		MissedSave,
		MisreadSave,
		MissedPrompt,
		MissedFinesse,
		BrokenFinesse,
		FiveStall,
		StompedFinesse,
		WrongPrompt,
		DoubleDiscardAvoidance,
		BadPlayClue,
		FixClue,
		SarcasticDiscard,
		WrongOnesOrder,
		MisplayCostViolation,
		InformationLock,
	];
	ALL.iter().copied().filter(|k| k.level() <= level).collect()
}

/// Deterministically replays `game`, then runs the tracker/checker pipeline
/// over every action, returning the full state history and the filtered
/// violation list.
pub fn analyze(game: &Game, options: &AnalyzerOptions) -> AnalysisResult {
	debug!(
		"analyzing {} actions across {} players at level {:?}",
		game.actions.len(),
		game.players.len(),
		options.level
	);
	let states = simulate(game);
	let mut ctx = AnalysisContext::new();

	for i in 0..game.actions.len() {
		let kind = game.actions[i].kind;

		for tracker in TRACKERS.iter().filter(|t| t.applicable_kinds.contains(&kind)) {
			(tracker.run)(game, &states, i, options, &mut ctx);
		}

		for checker in CHECKERS
			.iter()
			.filter(|c| c.level <= options.level && c.applicable_kinds.contains(&kind))
		{
			let before = ctx.violations.len();
			(checker.run)(game, &states, i, options, &mut ctx);
			if ctx.violations.len() > before {
				trace!("turn {}: checker {} fired", i + 1, checker.name);
			}
		}
	}

	trace!(
		"clue history after simulation: [{}]",
		ctx.clue_history.iter().map(|e| format!("turn {} giver {}", e.turn, e.giver)).join(", ")
	);

	let enabled = enabled_violations(options.level);
	let violations: Vec<RuleViolation> =
		ctx.violations.into_iter().filter(|v| enabled.contains(&v.kind)).collect();

	let mut by_severity: AHashMap<Severity, usize> = AHashMap::default();
	let mut by_type: AHashMap<ViolationKind, usize> = AHashMap::default();
	for v in &violations {
		*by_severity.entry(v.severity).or_insert(0) += 1;
		*by_type.entry(v.kind).or_insert(0) += 1;
	}

	let summary = AnalysisSummary { total_violations: violations.len(), by_severity, by_type };
	debug!("analysis complete: {} violation(s) after level filtering", summary.total_violations);

	AnalysisResult { states, violations, summary }
}
