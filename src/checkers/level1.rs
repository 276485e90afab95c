//! Level 1: beginner convention checkers.

use crate::context::{AnalysisContext, PendingFinesse};
use crate::helpers;
use crate::model::action::ActionKind;
use crate::model::game::{AnalyzerOptions, ConventionLevel, Game, GameState};
use crate::model::violation::{RuleViolation, Severity, ViolationKind};

pub fn good_touch_checker(
	game: &Game,
	states: &[GameState],
	i: usize,
	_options: &AnalyzerOptions,
	ctx: &mut AnalysisContext,
) {
	let action = &game.actions[i];
	let before = &states[i];
	let turn = i + 1;
	let giver = before.current_player;
	let target = action.target;
	if target == giver {
		return;
	}

	let touched = helpers::touched_by(&before.hands[target], action);

	for &deck_index in &touched {
		let card = before.hands[target].iter().find(|c| c.deck_index == deck_index).unwrap();

		if helpers::is_trash(card, before) {
			ctx.violations.push(RuleViolation {
				turn,
				player: giver,
				kind: ViolationKind::GoodTouchViolation,
				severity: Severity::Warning,
				description: format!(
					"clued a trash card (suit {} rank {})", card.suit, card.rank
				),
				card: Some(card.as_deck_card()),
			});
			continue;
		}

		let duplicated_elsewhere = before.hands.iter().enumerate().any(|(p, hand)| {
			p != giver
				&& p != target
				&& hand.iter().any(|c| {
					c.suit == card.suit && c.rank == card.rank && c.clue_marks.is_clued()
				})
		});
		if duplicated_elsewhere {
			ctx.violations.push(RuleViolation {
				turn,
				player: giver,
				kind: ViolationKind::GoodTouchViolation,
				severity: Severity::Warning,
				description: format!(
					"clued suit {} rank {}, which is already clued in another hand",
					card.suit, card.rank
				),
				card: Some(card.as_deck_card()),
			});
			continue;
		}

		let duplicated_in_hand = touched.iter().any(|&other| {
			other != deck_index
				&& before.hands[target].iter().any(|c| {
					c.deck_index == other && c.suit == card.suit && c.rank == card.rank
				})
		});
		if duplicated_in_hand {
			ctx.violations.push(RuleViolation {
				turn,
				player: giver,
				kind: ViolationKind::GoodTouchViolation,
				severity: Severity::Warning,
				description: format!(
					"clue touches two copies of suit {} rank {} in the same hand",
					card.suit, card.rank
				),
				card: Some(card.as_deck_card()),
			});
		}
	}
}

pub fn mcvp_checker(
	game: &Game,
	states: &[GameState],
	i: usize,
	options: &AnalyzerOptions,
	ctx: &mut AnalysisContext,
) {
	let action = &game.actions[i];
	let before = &states[i];
	let turn = i + 1;
	let giver = before.current_player;
	let target = action.target;
	if target == giver {
		return;
	}
	let hand = &before.hands[target];

	let touched = helpers::touched_by(hand, action);
	let new_touches = touched
		.iter()
		.filter(|&&d| hand.iter().any(|c| c.deck_index == d && !c.clue_marks.is_clued()))
		.count();

	if new_touches > 0 {
		return;
	}

	if options.level >= ConventionLevel::L2Intermediate {
		let tempo = touched.iter().any(|&d| {
			hand.iter().any(|c| {
				c.deck_index == d && helpers::is_playable(c.suit, c.rank, &before.play_stacks)
			})
		});
		if tempo {
			return;
		}
	}

	ctx.violations.push(RuleViolation {
		turn,
		player: giver,
		kind: ViolationKind::MCVPViolation,
		severity: Severity::Warning,
		description: "clue touched no new information (most-cards-vs-playables)".to_string(),
		card: None,
	});
}

fn rank2_needs_save(card: &crate::model::card::CardInHand, before: &GameState, actor: usize) -> bool {
	card.rank == 2
		&& !before.hands.iter().enumerate().any(|(p, hand)| {
			p != actor
				&& hand.iter().any(|c| {
					c.deck_index != card.deck_index && c.suit == card.suit && c.rank == 2
				})
		})
}

/// A card "needs a save" if it's a not-yet-finished 5, a critical last copy
/// (mirroring `BadDiscardChecker`'s criticality test), or a 2 whose duplicate
/// the actor cannot see anywhere.
fn needs_save(card: &crate::model::card::CardInHand, before: &GameState, game: &Game, actor: usize) -> bool {
	(card.rank == 5 && before.play_stacks[card.suit] < 5)
		|| (helpers::is_last_copy(card, before, game)
			&& before.play_stacks[card.suit] < card.rank
			&& !helpers::is_suit_dead(card.suit, card.rank, before))
		|| rank2_needs_save(card, before, actor)
}

pub fn missed_save_checker(
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
	let next_player = (actor + 1) % num_players;

	if before.clue_tokens == 0 {
		return;
	}

	let next_hand = &before.hands[next_player];
	let Some(chop) = helpers::chop_index(next_hand) else { return };
	let chop_card = &next_hand[chop];

	if !needs_save(chop_card, before, game, actor) {
		return;
	}

	let is_save_clue = matches!(action.kind, ActionKind::ColorClue | ActionKind::RankClue)
		&& action.target == next_player
		&& helpers::touched_by(next_hand, action).contains(&chop_card.deck_index);
	if is_save_clue {
		return;
	}

	if action.kind == ActionKind::Play {
		let played_unclued = before.hands[actor]
			.iter()
			.find(|c| c.deck_index == action.target)
			.map(|c| !c.clue_marks.is_clued())
			.unwrap_or(false);
		if played_unclued {
			return;
		}
	}

	ctx.violations.push(RuleViolation {
		turn,
		player: actor,
		kind: ViolationKind::MissedSave,
		severity: Severity::Warning,
		description: format!(
			"failed to save suit {} rank {} on {}'s chop",
			chop_card.suit, chop_card.rank, game.players[next_player]
		),
		card: Some(chop_card.as_deck_card()),
	});
}

pub fn missed_prompt_checker(
	_game: &Game,
	states: &[GameState],
	i: usize,
	_options: &AnalyzerOptions,
	ctx: &mut AnalysisContext,
) {
	let before = &states[i];
	let turn = i + 1;
	let actor = before.current_player;

	for card in &before.hands[actor] {
		if !card.clue_marks.is_clued() {
			continue;
		}
		let deducible_playable = if card.clue_marks.has_color() && card.clue_marks.has_rank() {
			helpers::is_playable(card.suit, card.rank, &before.play_stacks)
		} else if card.clue_marks.has_rank() && !card.clue_marks.has_color() {
			before.play_stacks.iter().all(|&stack| stack == card.rank - 1)
		} else if card.clue_marks.has_color() && !card.clue_marks.has_rank() {
			card.rank == before.play_stacks[card.suit] + 1
		} else {
			false
		};

		if deducible_playable {
			ctx.violations.push(RuleViolation {
				turn,
				player: actor,
				kind: ViolationKind::MissedPrompt,
				severity: Severity::Warning,
				description: "held a card deducibly playable from its own clue marks but discarded instead".to_string(),
				card: Some(card.as_deck_card()),
			});
			return;
		}
	}
}

pub fn finesse_setup_checker(
	game: &Game,
	states: &[GameState],
	i: usize,
	_options: &AnalyzerOptions,
	ctx: &mut AnalysisContext,
) {
	let turn = i + 1;
	let num_players = game.players.len();

	if game.actions[i].target == states[i].current_player {
		return;
	}

	let Some(entry) = ctx.clue_history.last() else { return };
	let Some(focus_deck_index) = entry.focus_deck_index else { return };
	let giver = entry.giver;
	let target = entry.target;

	let before = &states[i];
	let Some(focus) = before.hands[target].iter().find(|c| c.deck_index == focus_deck_index) else {
		return;
	};
	let (focus_suit, focus_rank) = (focus.suit, focus.rank);

	if focus_rank != before.play_stacks[focus_suit] + 2 {
		return;
	}

	let mut p = (giver + 1) % num_players;
	while p != target {
		if let Some(fp) = helpers::finesse_position_index(&before.hands[p]) {
			let card = &before.hands[p][fp];
			if card.suit == focus_suit && card.rank == focus_rank - 1 {
				let delta = (p + num_players - giver) % num_players;
				ctx.pending_finesses.push(PendingFinesse {
					setup_turn: turn,
					giver,
					target,
					finesse_player: p,
					needed_suit: focus_suit,
					needed_rank: focus_rank - 1,
					is_resolved: false,
					was_stomped: false,
					response_deadline_action_index: i + delta,
				});
				return;
			}
		}
		p = (p + 1) % num_players;
	}
}

pub fn broken_finesse_checker(
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

	if card.clue_marks.is_clued() {
		return;
	}
	if helpers::finesse_position_index(hand) != Some(pos) {
		return;
	}
	if helpers::is_playable(card.suit, card.rank, &before.play_stacks) {
		return;
	}

	ctx.violations.push(RuleViolation {
		turn,
		player: actor,
		kind: ViolationKind::BrokenFinesse,
		severity: Severity::Warning,
		description: format!(
			"blind-played suit {} rank {} from finesse position but it wasn't playable",
			card.suit, card.rank
		),
		card: Some(card.as_deck_card()),
	});
}
