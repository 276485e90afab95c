use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// `Play=0, Discard=1, ColorClue=2, RankClue=3`. The wire code is arbitrary so
/// long as the four kinds stay distinguished; we keep the spec's own numbering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[repr(u8)]
pub enum ActionKind {
	Play = 0,
	Discard = 1,
	ColorClue = 2,
	RankClue = 3,
}

pub const ALL_KINDS: [ActionKind; 4] =
	[ActionKind::Play, ActionKind::Discard, ActionKind::ColorClue, ActionKind::RankClue];

pub const CLUE_KINDS: [ActionKind; 2] = [ActionKind::ColorClue, ActionKind::RankClue];

impl<'de> Deserialize<'de> for ActionKind {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		struct KindVisitor;

		impl Visitor<'_> for KindVisitor {
			type Value = ActionKind;

			fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
				f.write_str("an integer 0..=3 identifying an action kind")
			}

			fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
				match v {
					0 => Ok(ActionKind::Play),
					1 => Ok(ActionKind::Discard),
					2 => Ok(ActionKind::ColorClue),
					3 => Ok(ActionKind::RankClue),
					other => Err(de::Error::custom(format!("unknown action kind {other}"))),
				}
			}

			fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
				self.visit_u64(v as u64)
			}
		}

		deserializer.deserialize_u64(KindVisitor)
	}
}

/// `{kind, target, value}`. For Play/Discard, `target` is a deck index; for
/// clues, `target` is a player index and `value` a color or rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameAction {
	#[serde(rename = "type")]
	pub kind: ActionKind,
	pub target: usize,
	pub value: usize,
}

impl GameAction {
	pub fn play(deck_index: usize) -> Self {
		Self { kind: ActionKind::Play, target: deck_index, value: 0 }
	}

	pub fn discard(deck_index: usize) -> Self {
		Self { kind: ActionKind::Discard, target: deck_index, value: 0 }
	}

	pub fn color_clue(target: usize, suit: usize) -> Self {
		Self { kind: ActionKind::ColorClue, target, value: suit }
	}

	pub fn rank_clue(target: usize, rank: usize) -> Self {
		Self { kind: ActionKind::RankClue, target, value: rank }
	}
}
