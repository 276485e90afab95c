//! Cross-turn memory trackers: clue history, pending finesses, early game.
//! Trackers run before checkers on every action whose kind they declare.

use crate::context::{AnalysisContext, ClueHistoryEntry, PendingFinesse};
use crate::helpers;
use crate::model::action::{ActionKind, ALL_KINDS, CLUE_KINDS};
use crate::model::game::{AnalyzerOptions, Game, GameState};
use crate::model::violation::{RuleViolation, Severity, ViolationKind};

pub type TrackerFn = fn(&Game, &[GameState], usize, &AnalyzerOptions, &mut AnalysisContext);

pub struct Tracker {
	pub name: &'static str,
	pub applicable_kinds: &'static [ActionKind],
	pub run: TrackerFn,
}

pub const TRACKERS: &[Tracker] = &[
	Tracker { name: "ClueHistoryTracker", applicable_kinds: &CLUE_KINDS, run: clue_history_tracker },
	Tracker { name: "PendingFinesseTracker", applicable_kinds: &ALL_KINDS, run: pending_finesse_tracker },
	Tracker { name: "EarlyGameTracker", applicable_kinds: &[ActionKind::Discard], run: early_game_tracker },
];

fn clue_history_tracker(
	game: &Game,
	states: &[GameState],
	i: usize,
	_options: &AnalyzerOptions,
	ctx: &mut AnalysisContext,
) {
	let action = &game.actions[i];
	let before = &states[i];
	let target = action.target;
	if target == before.current_player {
		return;
	}
	let hand = &before.hands[target];

	ctx.clue_history.push(ClueHistoryEntry {
		turn: i + 1,
		giver: before.current_player,
		target,
		clue_kind: action.kind,
		clue_value: action.value,
		touched_deck_indices: helpers::touched_by(hand, action),
		focus_deck_index: helpers::focus_of(hand, action),
	});
}

fn pending_finesse_tracker(
	game: &Game,
	states: &[GameState],
	i: usize,
	_options: &AnalyzerOptions,
	ctx: &mut AnalysisContext,
) {
	let action = &game.actions[i];
	let before = &states[i];
	let actor = before.current_player;

	if action.kind == ActionKind::Play {
		if let Some(card) = before.hands[actor].iter().find(|c| c.deck_index == action.target) {
			let (suit, rank) = (card.suit, card.rank);
			for pf in ctx.pending_finesses.iter_mut() {
				if !pf.is_resolved
					&& pf.finesse_player == actor
					&& suit == pf.needed_suit
					&& rank == pf.needed_rank
				{
					pf.is_resolved = true;
				}
			}
		}
	}

	// deferred deadline check, runs regardless of this action's kind
	for idx in 0..ctx.pending_finesses.len() {
		let fire = {
			let pf = &ctx.pending_finesses[idx];
			!pf.is_resolved && !pf.was_stomped && pf.response_deadline_action_index <= i
		};
		if fire {
			let (player, suit, rank) = {
				let pf = &mut ctx.pending_finesses[idx];
				pf.is_resolved = true;
				(pf.finesse_player, pf.needed_suit, pf.needed_rank)
			};
			ctx.violations.push(RuleViolation {
				turn: i + 1,
				player,
				kind: ViolationKind::MissedFinesse,
				severity: Severity::Info,
				description: format!(
					"missed finesse: expected a blind play of suit {suit} rank {rank}"
				),
				card: None,
			});
		}
	}
}

fn early_game_tracker(
	game: &Game,
	states: &[GameState],
	i: usize,
	_options: &AnalyzerOptions,
	ctx: &mut AnalysisContext,
) {
	if !ctx.is_early_game {
		return;
	}
	let action = &game.actions[i];
	let before = &states[i];
	let player = before.current_player;
	let hand = &before.hands[player];

	let Some(chop_idx) = helpers::chop_index(hand) else { return };
	if hand[chop_idx].deck_index != action.target {
		return;
	}

	let has_playable = hand.iter().any(|c| helpers::is_playable(c.suit, c.rank, &before.play_stacks));
	if before.clue_tokens > 0 || has_playable {
		ctx.is_early_game = false;
	}
}
