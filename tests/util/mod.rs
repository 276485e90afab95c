//! Deck/game/action construction DSL for the test suites, mirroring the
//! notation used in the spec's own scenarios ("R2", "Y1", ...).

use trace_core::{AnalyzerOptions, ConventionLevel, DeckCard, Game, GameAction, RuleViolation, ViolationKind};

pub fn suit_index(c: char) -> usize {
	match c {
		'R' => 0,
		'Y' => 1,
		'G' => 2,
		'B' => 3,
		'P' => 4,
		other => panic!("unknown suit letter {other}"),
	}
}

/// Parses a card short-name like `"R3"` into a `DeckCard`.
pub fn card(short: &str) -> DeckCard {
	let mut chars = short.chars();
	let suit = suit_index(chars.next().expect("non-empty card short name"));
	let rank: usize = chars.as_str().parse().expect("card short name must end in a rank digit");
	DeckCard { suit, rank }
}

/// Builds a deck from `hands` (dealt in player order) followed by `draw_pile`.
pub fn deck(hands: &[&[&str]], draw_pile: &[&str]) -> Vec<DeckCard> {
	let mut out = Vec::new();
	for hand in hands {
		out.extend(hand.iter().map(|s| card(s)));
	}
	out.extend(draw_pile.iter().map(|s| card(s)));
	out
}

pub fn names(n: usize) -> Vec<String> {
	["Alice", "Bob", "Cathy", "Donald", "Emily"][..n].iter().map(|s| s.to_string()).collect()
}

pub fn game(hands: &[&[&str]], draw_pile: &[&str], actions: Vec<GameAction>) -> Game {
	Game {
		players: names(hands.len()),
		deck: deck(hands, draw_pile),
		actions,
		variant: "No Variant".to_string(),
	}
}

pub fn options(level: ConventionLevel) -> AnalyzerOptions {
	AnalyzerOptions { level }
}

pub fn kinds_of(violations: &[RuleViolation]) -> Vec<ViolationKind> {
	violations.iter().map(|v| v.kind).collect()
}

pub fn count_kind(violations: &[RuleViolation], kind: ViolationKind) -> usize {
	violations.iter().filter(|v| v.kind == kind).count()
}

pub fn has_kind(violations: &[RuleViolation], kind: ViolationKind) -> bool {
	violations.iter().any(|v| v.kind == kind)
}

pub fn violations_for_player(violations: &[RuleViolation], player: usize) -> Vec<&RuleViolation> {
	violations.iter().filter(|v| v.player == player).collect()
}
