//! Pure functions over state: chop/finesse position, playability, criticality,
//! touched-by-clue sets, focus calculation, valid-finesse search.

use crate::model::action::{ActionKind, GameAction};
use crate::model::card::{CardInHand, RANK_COUNTS};
use crate::model::game::{Game, GameState};

pub fn chop_index(hand: &[CardInHand]) -> Option<usize> {
	hand.iter().position(|c| !c.clue_marks.is_clued())
}

pub fn finesse_position_index(hand: &[CardInHand]) -> Option<usize> {
	hand.iter().rposition(|c| !c.clue_marks.is_clued())
}

pub fn is_playable(suit: usize, rank: usize, play_stacks: &[usize; 5]) -> bool {
	play_stacks[suit] == rank - 1
}

/// True once every prerequisite rank below `target_rank` for `suit` has had
/// all its copies discarded, making `target_rank` (and everything above it)
/// unplayable forever.
pub fn is_suit_dead(suit: usize, target_rank: usize, state: &GameState) -> bool {
	let start = state.play_stacks[suit] + 1;
	for r in start..target_rank {
		let discarded = state.discard_pile.iter().filter(|c| c.suit == suit && c.rank == r).count();
		if discarded == RANK_COUNTS[r - 1] {
			return true;
		}
	}
	false
}

pub fn is_trash(card: &CardInHand, state: &GameState) -> bool {
	card.rank <= state.play_stacks[card.suit] || is_suit_dead(card.suit, card.rank, state)
}

/// Remaining copies = currently in any hand + still in the draw pile.
pub fn is_last_copy(card: &CardInHand, state: &GameState, game: &Game) -> bool {
	remaining_copies(card.suit, card.rank, state, game) == 1
}

pub fn remaining_copies(suit: usize, rank: usize, state: &GameState, game: &Game) -> usize {
	let in_hands = state.hands.iter().flatten().filter(|c| c.suit == suit && c.rank == rank).count();
	let in_draw_pile =
		game.deck[state.deck_index..].iter().filter(|c| c.suit == suit && c.rank == rank).count();
	in_hands + in_draw_pile
}

pub fn card_matches_clue(card: &CardInHand, action: &GameAction) -> bool {
	match action.kind {
		ActionKind::ColorClue => card.suit == action.value,
		ActionKind::RankClue => card.rank == action.value,
		_ => false,
	}
}

pub fn touched_by(hand: &[CardInHand], action: &GameAction) -> Vec<usize> {
	hand.iter().filter(|c| card_matches_clue(c, action)).map(|c| c.deck_index).collect()
}

/// H-Group 4-step focus rule, collapsed since steps 1-2 (direct/save
/// determination) are the caller's business: among the newly-touched cards,
/// chop wins if present, else the newest (highest index) one. `None` means a
/// re-touch/tempo clue with no new information.
pub fn focus_of(hand: &[CardInHand], action: &GameAction) -> Option<usize> {
	let newly: Vec<usize> = hand
		.iter()
		.enumerate()
		.filter(|(_, c)| card_matches_clue(c, action) && !c.clue_marks.is_clued())
		.map(|(idx, _)| idx)
		.collect();

	if newly.is_empty() {
		return None;
	}

	if let Some(chop) = chop_index(hand) {
		if newly.contains(&chop) {
			return Some(hand[chop].deck_index);
		}
	}

	let highest = *newly.iter().max().unwrap();
	Some(hand[highest].deck_index)
}

/// True iff `target_rank` is one-away for `target_suit` at `state` and some
/// player strictly between `giver` and `target` (turn order, circular) holds
/// the connecting card `(target_suit, target_rank - 1)` at their finesse
/// position.
pub fn has_valid_finesse(
	state: &GameState,
	game: &Game,
	giver: usize,
	target: usize,
	target_suit: usize,
	target_rank: usize,
) -> bool {
	if target_rank != state.play_stacks[target_suit] + 2 {
		return false;
	}

	let num_players = game.players.len();
	let mut p = (giver + 1) % num_players;
	while p != target {
		if let Some(fp) = finesse_position_index(&state.hands[p]) {
			let card = &state.hands[p][fp];
			if card.suit == target_suit && card.rank == target_rank - 1 {
				return true;
			}
		}
		p = (p + 1) % num_players;
	}
	false
}
