//! Level 3: advanced convention checkers.

use crate::context::AnalysisContext;
use crate::helpers;
use crate::model::action::ActionKind;
use crate::model::game::{AnalyzerOptions, Game, GameState};
use crate::model::violation::{RuleViolation, Severity, ViolationKind};

pub fn playing_multiple_ones_checker(
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
	let hand = &before.hands[actor];

	let Some(pos) = hand.iter().position(|c| c.deck_index == action.target) else { return };
	let card = &hand[pos];

	if card.rank != 1 || !card.clue_marks.has_rank() {
		return;
	}

	let oldest_playable_one = hand
		.iter()
		.enumerate()
		.filter(|(_, c)| {
			c.rank == 1
				&& c.clue_marks.has_rank()
				&& helpers::is_playable(c.suit, c.rank, &before.play_stacks)
		})
		.map(|(idx, _)| idx)
		.min();

	let playable_one_count = hand
		.iter()
		.filter(|c| {
			c.rank == 1
				&& c.clue_marks.has_rank()
				&& helpers::is_playable(c.suit, c.rank, &before.play_stacks)
		})
		.count();

	if playable_one_count < 2 {
		return;
	}

	if oldest_playable_one != Some(pos) {
		ctx.violations.push(RuleViolation {
			turn,
			player: actor,
			kind: ViolationKind::WrongOnesOrder,
			severity: Severity::Warning,
			description: "played a rank-clued 1 out of order while an older one was still available".to_string(),
			card: Some(card.as_deck_card()),
		});
	}
}

pub fn information_lock_checker(
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

	let Some(card) = before.hands[actor].iter().find(|c| c.deck_index == action.target) else { return };
	if !(card.clue_marks.has_color() && card.clue_marks.has_rank()) {
		return;
	}
	if !helpers::is_playable(card.suit, card.rank, &before.play_stacks) {
		return;
	}

	ctx.violations.push(RuleViolation {
		turn,
		player: actor,
		kind: ViolationKind::InformationLock,
		severity: Severity::Warning,
		description: "discarded a fully-known playable card".to_string(),
		card: Some(card.as_deck_card()),
	});
}

pub fn sarcastic_discard_checker(
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

	let known_duplicate = before.hands[actor].iter().find(|known| {
		known.clue_marks.has_color()
			&& known.clue_marks.has_rank()
			&& known.deck_index != action.target
			&& before.hands.iter().enumerate().any(|(p, hand)| {
				p != actor
					&& hand.iter().any(|c| {
						c.suit == known.suit && c.rank == known.rank && c.clue_marks.is_clued()
					})
			})
	});

	let Some(known) = known_duplicate else { return };

	ctx.violations.push(RuleViolation {
		turn,
		player: actor,
		kind: ViolationKind::SarcasticDiscard,
		severity: Severity::Warning,
		description: format!(
			"held a known duplicate of suit {} rank {} but discarded a different card instead",
			known.suit, known.rank
		),
		card: Some(known.as_deck_card()),
	});
}

pub fn fix_clue_checker(
	game: &Game,
	states: &[GameState],
	i: usize,
	_options: &AnalyzerOptions,
	ctx: &mut AnalysisContext,
) {
	let before = &states[i];
	let turn = i + 1;
	let actor = before.current_player;
	let num_players = game.players.len();

	if before.clue_tokens == 0 {
		return;
	}

	let action = &game.actions[i];
	let mut fixed_by_actor: Option<usize> = None;

	for delta in 1..num_players {
		let j = i + delta;
		if j >= game.actions.len() {
			break;
		}
		let next_action = &game.actions[j];
		if next_action.kind != ActionKind::Play {
			continue;
		}
		let player_j = states[j].current_player;
		let Some(played) = states[j].hands[player_j].iter().find(|c| c.deck_index == next_action.target) else {
			continue;
		};
		if !played.clue_marks.is_clued() {
			continue;
		}

		// was it already a known-trash card as of the current action?
		let Some(held_now) = before.hands[player_j].iter().find(|c| c.deck_index == played.deck_index) else {
			continue;
		};
		if !held_now.clue_marks.is_clued() || !helpers::is_trash(held_now, before) {
			continue;
		}

		let is_fix_clue = matches!(action.kind, ActionKind::ColorClue | ActionKind::RankClue)
			&& action.target == player_j
			&& helpers::touched_by(&before.hands[player_j], action).contains(&held_now.deck_index);
		if !is_fix_clue {
			fixed_by_actor = Some(held_now.deck_index);
		}
		break;
	}

	let Some(deck_index) = fixed_by_actor else { return };
	let card = before.hands.iter().flatten().find(|c| c.deck_index == deck_index).unwrap();

	ctx.violations.push(RuleViolation {
		turn,
		player: actor,
		kind: ViolationKind::FixClue,
		severity: Severity::Warning,
		description: "a teammate played a clued trash card before a fix clue was given".to_string(),
		card: Some(card.as_deck_card()),
	});
}

pub fn misplay_cost_checker(
	game: &Game,
	states: &[GameState],
	i: usize,
	_options: &AnalyzerOptions,
	ctx: &mut AnalysisContext,
) {
	let before = &states[i];
	let turn = i + 1;
	let actor = before.current_player;

	if before.clue_tokens == 0 {
		return;
	}
	let j = i + 1;
	if j >= game.actions.len() {
		return;
	}
	let next_action = &game.actions[j];
	if next_action.kind != ActionKind::Play {
		return;
	}
	let next_actor = states[j].current_player;
	let Some(card) = states[j].hands[next_actor].iter().find(|c| c.deck_index == next_action.target) else {
		return;
	};
	if !card.clue_marks.is_clued() {
		return;
	}
	if helpers::is_playable(card.suit, card.rank, &states[j].play_stacks) {
		return;
	}

	ctx.violations.push(RuleViolation {
		turn,
		player: actor,
		kind: ViolationKind::MisplayCostViolation,
		severity: Severity::Warning,
		description: "left the board in a state where the next player misplayed a clued card".to_string(),
		card: Some(card.as_deck_card()),
	});
}
