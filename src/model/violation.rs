use serde::{Deserialize, Serialize};

use super::card::DeckCard;
use super::game::ConventionLevel;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Severity {
	Critical,
	Warning,
	Info,
}

/// Stable identifiers, observed by tests and UIs, must not be renamed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ViolationKind {
	// L0
	Misplay,
	BadDiscard5,
	BadDiscardCritical,
	IllegalDiscard,
	// L1
	GoodTouchViolation,
	MCVPViolation,
	MissedSave,
	MisreadSave,
	MissedPrompt,
	MissedFinesse,
	BrokenFinesse,
	// L2
	FiveStall,
	StompedFinesse,
	WrongPrompt,
	DoubleDiscardAvoidance,
	BadPlayClue,
	// L3
	FixClue,
	SarcasticDiscard,
	WrongOnesOrder,
	MisplayCostViolation,
	InformationLock,
}

impl ViolationKind {
	/// The lowest level at which this kind is a member of `enabledViolations`.
	pub fn level(self) -> ConventionLevel {
		use ConventionLevel::*;
		use ViolationKind::*;
		match self {
			Misplay | BadDiscard5 | BadDiscardCritical | IllegalDiscard => L0Basic,
			GoodTouchViolation | MCVPViolation | MissedSave | MisreadSave | MissedPrompt
			| MissedFinesse | BrokenFinesse => L1Beginner,
			FiveStall | StompedFinesse | WrongPrompt | DoubleDiscardAvoidance | BadPlayClue => {
				L2Intermediate
			}
			FixClue | SarcasticDiscard | WrongOnesOrder | MisplayCostViolation
			| InformationLock => L3Advanced,
		}
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleViolation {
	pub turn: usize,
	pub player: usize,
	pub kind: ViolationKind,
	pub severity: Severity,
	pub description: String,
	pub card: Option<DeckCard>,
}
