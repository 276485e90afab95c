use serde::{Deserialize, Serialize};

use super::action::GameAction;
use super::card::{CardInHand, DeckCard};

/// `{players, deck, actions, variant}`. Immutable once loaded; the engine
/// never mutates a `Game`, only replays it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
	pub players: Vec<String>,
	pub deck: Vec<DeckCard>,
	pub actions: Vec<GameAction>,
	#[serde(default = "default_variant")]
	pub variant: String,
}

fn default_variant() -> String {
	"No Variant".to_string()
}

impl Game {
	pub fn hand_size(&self) -> usize {
		match self.players.len() {
			2 | 3 => 5,
			4 | 5 => 4,
			n => panic!("unsupported player count {n}"),
		}
	}
}

/// A full per-turn snapshot. `states[i]` is the state *before* `actions[i]`;
/// `states[i+1]` is the state after. Deep-cloned on every transition so that
/// mutating a later snapshot can never retroactively affect an earlier one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
	pub turn: usize,
	pub current_player: usize,
	pub hands: Vec<Vec<CardInHand>>,
	pub play_stacks: [usize; 5],
	pub discard_pile: Vec<DeckCard>,
	pub clue_tokens: usize,
	pub strikes: usize,
	pub deck_index: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ConventionLevel {
	L0Basic,
	L1Beginner,
	L2Intermediate,
	L3Advanced,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzerOptions {
	pub level: ConventionLevel,
}
