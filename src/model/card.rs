use serde::{Deserialize, Serialize};

/// Total copies of each rank in a standard 5-suit deck (rank 1..=5, 1-indexed).
pub const RANK_COUNTS: [usize; 5] = [3, 2, 2, 2, 1];

/// A card as it exists in the deck, independent of any hand position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DeckCard {
	#[serde(rename = "suitIndex")]
	pub suit: usize,
	pub rank: usize,
}

/// Which specific colors and ranks have been clued onto a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ClueMarks {
	pub color: [bool; 5],
	pub rank: [bool; 5],
}

impl ClueMarks {
	pub fn is_clued(&self) -> bool {
		self.color.iter().any(|&b| b) || self.rank.iter().any(|&b| b)
	}

	pub fn has_color(&self) -> bool {
		self.color.iter().any(|&b| b)
	}

	pub fn has_rank(&self) -> bool {
		self.rank.iter().any(|&b| b)
	}
}

/// A card currently held in a hand, carrying its deck-stable identity and the
/// clue marks accumulated on it so far. `suit`/`rank` never change once dealt;
/// only `clue_marks` mutates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardInHand {
	pub suit: usize,
	pub rank: usize,
	pub deck_index: usize,
	pub clue_marks: ClueMarks,
}

impl CardInHand {
	pub fn new(suit: usize, rank: usize, deck_index: usize) -> Self {
		Self { suit, rank, deck_index, clue_marks: ClueMarks::default() }
	}

	pub fn as_deck_card(&self) -> DeckCard {
		DeckCard { suit: self.suit, rank: self.rank }
	}
}
