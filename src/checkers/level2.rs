//! Level 2: intermediate convention checkers.

use crate::context::AnalysisContext;
use crate::helpers;
use crate::model::action::ActionKind;
use crate::model::game::{AnalyzerOptions, Game, GameState};
use crate::model::violation::{RuleViolation, Severity, ViolationKind};

pub fn double_discard_avoidance_checker(
	game: &Game,
	states: &[GameState],
	i: usize,
	_options: &AnalyzerOptions,
	ctx: &mut AnalysisContext,
) {
	if i == 0 {
		return;
	}
	let prev_action = &game.actions[i - 1];
	if prev_action.kind != ActionKind::Discard {
		return;
	}

	let prev_before = &states[i - 1];
	let prev_actor = prev_before.current_player;
	let Some(prev_card) = prev_before.hands[prev_actor].iter().find(|c| c.deck_index == prev_action.target) else {
		return;
	};
	let prev_pos = prev_before.hands[prev_actor].iter().position(|c| c.deck_index == prev_card.deck_index).unwrap();
	if helpers::chop_index(&prev_before.hands[prev_actor]) != Some(prev_pos) {
		return;
	}
	if helpers::is_trash(prev_card, prev_before) {
		return;
	}

	let action = &game.actions[i];
	let before = &states[i];
	let turn = i + 1;
	let actor = before.current_player;

	let Some(card) = before.hands[actor].iter().find(|c| c.deck_index == action.target) else {
		return;
	};
	let pos = before.hands[actor].iter().position(|c| c.deck_index == card.deck_index).unwrap();
	if helpers::chop_index(&before.hands[actor]) != Some(pos) {
		return;
	}
	if helpers::is_trash(card, before) {
		return;
	}

	let forced = before.clue_tokens == 0
		&& !before.hands[actor].iter().any(|c| helpers::is_playable(c.suit, c.rank, &before.play_stacks));
	if forced {
		return;
	}

	ctx.violations.push(RuleViolation {
		turn,
		player: actor,
		kind: ViolationKind::DoubleDiscardAvoidance,
		severity: Severity::Warning,
		description: "discarded from chop right after another non-trash chop discard".to_string(),
		card: Some(card.as_deck_card()),
	});
}

pub fn five_stall_checker(
	game: &Game,
	states: &[GameState],
	i: usize,
	_options: &AnalyzerOptions,
	ctx: &mut AnalysisContext,
) {
	if game.actions[i].target == states[i].current_player {
		return;
	}
	if !ctx.is_early_game {
		let turn = i + 1;
		let Some(entry) = ctx.clue_history.last() else { return };
		let Some(focus_deck_index) = entry.focus_deck_index else { return };
		let before = &states[i];
		let target = entry.target;
		let Some(pos) = before.hands[target].iter().position(|c| c.deck_index == focus_deck_index) else {
			return;
		};
		let focus = &before.hands[target][pos];
		if focus.rank != 5 {
			return;
		}
		if helpers::chop_index(&before.hands[target]) == Some(pos) {
			return;
		}
		if helpers::is_playable(focus.suit, focus.rank, &before.play_stacks) {
			return;
		}

		ctx.violations.push(RuleViolation {
			turn,
			player: entry.giver,
			kind: ViolationKind::FiveStall,
			severity: Severity::Warning,
			description: format!("rank-5 clue on an off-chop, unplayable 5 (suit {})", focus.suit),
			card: Some(focus.as_deck_card()),
		});
	}
}

pub fn stomped_finesse_checker(
	game: &Game,
	states: &[GameState],
	i: usize,
	_options: &AnalyzerOptions,
	ctx: &mut AnalysisContext,
) {
	let turn = i + 1;
	let before = &states[i];
	if game.actions[i].target == before.current_player {
		return;
	}
	let Some(entry) = ctx.clue_history.last() else { return };
	let clue_target = entry.target;
	let touched = entry.touched_deck_indices.clone();

	let giver = entry.giver;

	for pf_idx in 0..ctx.pending_finesses.len() {
		let stomped = {
			let pf = &ctx.pending_finesses[pf_idx];
			if pf.is_resolved || pf.was_stomped || clue_target != pf.finesse_player {
				false
			} else {
				touched.iter().any(|&d| {
					before.hands[clue_target]
						.iter()
						.any(|c| c.deck_index == d && c.suit == pf.needed_suit && c.rank == pf.needed_rank)
				})
			}
		};
		if stomped {
			ctx.pending_finesses[pf_idx].was_stomped = true;
			ctx.violations.push(RuleViolation {
				turn,
				player: giver,
				kind: ViolationKind::StompedFinesse,
				severity: Severity::Warning,
				description: "clue directly revealed a card that was set up as a finesse".to_string(),
				card: None,
			});
		}
	}
}

pub fn wrong_prompt_checker(
	game: &Game,
	states: &[GameState],
	i: usize,
	_options: &AnalyzerOptions,
	ctx: &mut AnalysisContext,
) {
	let action = &game.actions[i];
	let before = &states[i];
	let turn = i + 1;
	let actor = before.current_player;
	let num_players = game.players.len();

	let Some(card) = before.hands[actor].iter().find(|c| c.deck_index == action.target) else { return };
	if helpers::is_playable(card.suit, card.rank, &before.play_stacks) {
		return;
	}
	if !card.clue_marks.is_clued() {
		return;
	}

	// the oldest-clued card in hand is the one whose earliest touch predates every other clued card's.
	let oldest_clued_turn = before.hands[actor]
		.iter()
		.filter(|c| c.clue_marks.is_clued())
		.filter_map(|c| ctx.first_clue_turn(c.deck_index))
		.min();
	let Some(this_first_turn) = ctx.first_clue_turn(card.deck_index) else { return };
	if Some(this_first_turn) != oldest_clued_turn {
		return;
	}

	let last_touch_turn = ctx.last_clue_touching(card.deck_index).map(|e| e.turn).unwrap_or(0);

	for entry in ctx.clue_history.iter().filter(|e| e.turn > last_touch_turn && e.turn < turn) {
		if entry.target == actor {
			continue;
		}
		let Some(focus_deck_index) = entry.focus_deck_index else { continue };
		let Some(focus) = states[entry.turn].hands[entry.target].iter().find(|c| c.deck_index == focus_deck_index) else {
			continue;
		};
		let (focus_suit, focus_rank) = (focus.suit, focus.rank);

		let is_between = {
			let mut p = (entry.giver + 1) % num_players;
			let mut found = false;
			while p != entry.target {
				if p == actor {
					found = true;
					break;
				}
				p = (p + 1) % num_players;
			}
			found
		};
		if !is_between {
			continue;
		}

		if helpers::is_playable(focus_suit, focus_rank, &states[entry.turn].play_stacks) {
			continue;
		}

		let needed_suit = focus_suit;
		let needed_rank = focus_rank.saturating_sub(1);
		let marks_match = if card.clue_marks.has_color() && card.clue_marks.has_rank() {
			card.suit == needed_suit && card.rank == needed_rank
		} else if card.clue_marks.has_color() {
			card.suit == needed_suit
		} else if card.clue_marks.has_rank() {
			card.rank == needed_rank
		} else {
			false
		};
		if !marks_match {
			continue;
		}

		if !helpers::has_valid_finesse(&states[entry.turn], game, entry.giver, entry.target, focus_suit, focus_rank) {
			continue;
		}

		ctx.violations.push(RuleViolation {
			turn: entry.turn,
			player: entry.giver,
			kind: ViolationKind::WrongPrompt,
			severity: Severity::Warning,
			description: "clue set up an invalid prompt that led to a misplay".to_string(),
			card: Some(card.as_deck_card()),
		});
		return;
	}
}
