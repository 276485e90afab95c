use crate::model::action::ActionKind;
use crate::model::card::CardInHand;
use crate::model::game::{Game, GameState};

/// Deterministically replays `game` into `|actions|+1` snapshots. `states[i]`
/// is the state before `actions[i]`; `states[i+1]` is the state after.
pub fn simulate(game: &Game) -> Vec<GameState> {
	let num_players = game.players.len();
	let hand_size = game.hand_size();

	let mut hands: Vec<Vec<CardInHand>> = vec![Vec::with_capacity(hand_size); num_players];
	let mut deck_index = 0usize;
	for hand in hands.iter_mut() {
		for _ in 0..hand_size {
			let card = game.deck[deck_index];
			hand.push(CardInHand::new(card.suit, card.rank, deck_index));
			deck_index += 1;
		}
	}

	let initial = GameState {
		turn: 0,
		current_player: 0,
		hands,
		play_stacks: [0; 5],
		discard_pile: Vec::new(),
		clue_tokens: 8,
		strikes: 0,
		deck_index,
	};

	let mut states = Vec::with_capacity(game.actions.len() + 1);
	states.push(initial);

	for (i, action) in game.actions.iter().enumerate() {
		let mut next = states[i].clone();
		apply_action(game, &mut next, action);
		next.turn = i + 1;
		next.current_player = (i + 1) % num_players;
		states.push(next);
	}

	states
}

fn apply_action(game: &Game, state: &mut GameState, action: &crate::model::action::GameAction) {
	let actor = state.current_player;

	match action.kind {
		ActionKind::Play => {
			let deck_idx = action.target;
			if let Some(pos) = state.hands[actor].iter().position(|c| c.deck_index == deck_idx) {
				let card = state.hands[actor].remove(pos);
				if state.play_stacks[card.suit] == card.rank - 1 {
					state.play_stacks[card.suit] = card.rank;
					if card.rank == 5 && state.clue_tokens < 8 {
						state.clue_tokens += 1;
					}
				} else {
					state.discard_pile.push(card.as_deck_card());
					state.strikes += 1;
				}
				draw_if_any(game, state, actor);
			}
		}
		ActionKind::Discard => {
			let deck_idx = action.target;
			if let Some(pos) = state.hands[actor].iter().position(|c| c.deck_index == deck_idx) {
				let card = state.hands[actor].remove(pos);
				state.discard_pile.push(card.as_deck_card());
				if state.clue_tokens < 8 {
					state.clue_tokens += 1;
				}
				draw_if_any(game, state, actor);
			}
		}
		ActionKind::ColorClue => {
			let target = action.target;
			if target != actor {
				let suit = action.value;
				for card in state.hands[target].iter_mut() {
					if card.suit == suit {
						card.clue_marks.color[suit] = true;
					}
				}
				state.clue_tokens = state.clue_tokens.saturating_sub(1);
			}
		}
		ActionKind::RankClue => {
			let target = action.target;
			if target != actor {
				let rank = action.value;
				for card in state.hands[target].iter_mut() {
					if card.rank == rank {
						card.clue_marks.rank[rank - 1] = true;
					}
				}
				state.clue_tokens = state.clue_tokens.saturating_sub(1);
			}
		}
	}
}

/// Newly-drawn cards join the back of the hand, the highest index, matching
/// the convention that finesse position (newest) is the highest index and
/// chop (oldest) is the lowest.
fn draw_if_any(game: &Game, state: &mut GameState, player: usize) {
	if state.deck_index < game.deck.len() {
		let card = game.deck[state.deck_index];
		state.hands[player].push(CardInHand::new(card.suit, card.rank, state.deck_index));
		state.deck_index += 1;
	}
}
