//! Level 0: basic rule checkers. These flag outright rule breaks rather than
//! convention reads, so they activate even at `L0Basic`.

use crate::context::AnalysisContext;
use crate::helpers;
use crate::model::game::{AnalyzerOptions, ConventionLevel, Game, GameState};
use crate::model::violation::{RuleViolation, Severity, ViolationKind};

pub fn misplay_checker(
	game: &Game,
	states: &[GameState],
	i: usize,
	options: &AnalyzerOptions,
	ctx: &mut AnalysisContext,
) {
	let action = &game.actions[i];
	let before = &states[i];
	let turn = i + 1;
	let actor = before.current_player;

	let Some(card) = before.hands[actor].iter().find(|c| c.deck_index == action.target) else {
		return;
	};
	if helpers::is_playable(card.suit, card.rank, &before.play_stacks) {
		return;
	}

	let (suit, rank, deck_index) = (card.suit, card.rank, card.deck_index);
	let was_clued = card.clue_marks.is_clued();

	if options.level >= ConventionLevel::L2Intermediate && was_clued {
		if let Some(entry) = ctx.last_clue_touching(deck_index) {
			let clue_state = &states[entry.turn];
			let valid_finesse = helpers::has_valid_finesse(
				clue_state, game, entry.giver, entry.target, suit, rank,
			);
			if !valid_finesse {
				ctx.violations.push(RuleViolation {
					turn: entry.turn,
					player: entry.giver,
					kind: ViolationKind::BadPlayClue,
					severity: Severity::Critical,
					description: format!(
						"clue given on turn {} led to a misplay of suit {} rank {} on turn {}",
						entry.turn, suit, rank, turn
					),
					card: Some(card.as_deck_card()),
				});
				ctx.violations.push(RuleViolation {
					turn,
					player: actor,
					kind: ViolationKind::Misplay,
					severity: Severity::Info,
					description: format!(
						"misplayed suit {suit} rank {rank}, misled by the clue on turn {}",
						entry.turn
					),
					card: Some(card.as_deck_card()),
				});
				return;
			}
		}
	}

	ctx.violations.push(RuleViolation {
		turn,
		player: actor,
		kind: ViolationKind::Misplay,
		severity: Severity::Critical,
		description: format!("misplayed suit {suit} rank {rank}"),
		card: Some(card.as_deck_card()),
	});

	if options.level >= ConventionLevel::L1Beginner {
		if let Some(entry) = ctx.last_clue_touching(deck_index) {
			let clue_before = &states[entry.turn - 1];
			if let Some(pos) = clue_before.hands[entry.target].iter().position(|c| c.deck_index == deck_index) {
				if helpers::chop_index(&clue_before.hands[entry.target]) == Some(pos) {
					ctx.violations.push(RuleViolation {
						turn,
						player: actor,
						kind: ViolationKind::MisreadSave,
						severity: Severity::Warning,
						description: "misread a save clue as a play clue".to_string(),
						card: Some(card.as_deck_card()),
					});
				}
			}
		}
	}
}

pub fn bad_discard_checker(
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

	let Some(card) = before.hands[actor].iter().find(|c| c.deck_index == action.target) else {
		return;
	};

	if card.rank == 5 && before.play_stacks[card.suit] < 5 {
		ctx.violations.push(RuleViolation {
			turn,
			player: actor,
			kind: ViolationKind::BadDiscard5,
			severity: Severity::Critical,
			description: format!("discarded a 5 of suit {} before its stack was complete", card.suit),
			card: Some(card.as_deck_card()),
		});
		return;
	}

	if helpers::is_last_copy(card, before, game)
		&& before.play_stacks[card.suit] < card.rank
		&& !helpers::is_suit_dead(card.suit, card.rank, before)
	{
		ctx.violations.push(RuleViolation {
			turn,
			player: actor,
			kind: ViolationKind::BadDiscardCritical,
			severity: Severity::Critical,
			description: format!(
				"discarded the last copy of suit {} rank {}, which is still needed",
				card.suit, card.rank
			),
			card: Some(card.as_deck_card()),
		});
	}
}

pub fn illegal_discard_checker(
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

	if before.clue_tokens >= 8 {
		let card = before.hands[actor].iter().find(|c| c.deck_index == action.target);
		ctx.violations.push(RuleViolation {
			turn,
			player: actor,
			kind: ViolationKind::IllegalDiscard,
			severity: Severity::Critical,
			description: "discarded while clue tokens were already at the maximum".to_string(),
			card: card.map(|c| c.as_deck_card()),
		});
	}
}
