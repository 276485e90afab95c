//! Rule checker registry. Each checker is stateless between invocations: it
//! reads the bound action/state pair off `(game, states, i)` and the
//! accumulated context, and appends violations. Checkers never mutate
//! `clue_history` or `pending_finesses` themselves, only trackers do, but
//! may read them (e.g. `StompedFinesseChecker` reads what `FinesseSetupChecker`
//! registered on an earlier action).

mod level0;
mod level1;
mod level2;
mod level3;

use crate::context::AnalysisContext;
use crate::model::action::ActionKind;
use crate::model::game::{AnalyzerOptions, ConventionLevel, Game, GameState};

pub type CheckerFn = fn(&Game, &[GameState], usize, &AnalyzerOptions, &mut AnalysisContext);

pub struct Checker {
	pub name: &'static str,
	pub level: ConventionLevel,
	pub applicable_kinds: &'static [ActionKind],
	pub run: CheckerFn,
}

pub const CHECKERS: &[Checker] = &[
	// Level 0: basic rule checkers.
	Checker {
		name: "MisplayChecker",
		level: ConventionLevel::L0Basic,
		applicable_kinds: &[ActionKind::Play],
		run: level0::misplay_checker,
	},
	Checker {
		name: "BadDiscardChecker",
		level: ConventionLevel::L0Basic,
		applicable_kinds: &[ActionKind::Discard],
		run: level0::bad_discard_checker,
	},
	Checker {
		name: "IllegalDiscardChecker",
		level: ConventionLevel::L0Basic,
		applicable_kinds: &[ActionKind::Discard],
		run: level0::illegal_discard_checker,
	},
	// Level 1: beginner convention checkers.
	Checker {
		name: "GoodTouchChecker",
		level: ConventionLevel::L1Beginner,
		applicable_kinds: &crate::model::action::CLUE_KINDS,
		run: level1::good_touch_checker,
	},
	Checker {
		name: "MCVPChecker",
		level: ConventionLevel::L1Beginner,
		applicable_kinds: &crate::model::action::CLUE_KINDS,
		run: level1::mcvp_checker,
	},
	Checker {
		name: "MissedSaveChecker",
		level: ConventionLevel::L1Beginner,
		applicable_kinds: &crate::model::action::ALL_KINDS,
		run: level1::missed_save_checker,
	},
	Checker {
		name: "MissedPromptChecker",
		level: ConventionLevel::L1Beginner,
		applicable_kinds: &[ActionKind::Discard],
		run: level1::missed_prompt_checker,
	},
	Checker {
		name: "FinesseSetupChecker",
		level: ConventionLevel::L1Beginner,
		applicable_kinds: &crate::model::action::CLUE_KINDS,
		run: level1::finesse_setup_checker,
	},
	Checker {
		name: "BrokenFinesseChecker",
		level: ConventionLevel::L1Beginner,
		applicable_kinds: &[ActionKind::Play],
		run: level1::broken_finesse_checker,
	},
	// Level 2: intermediate convention checkers.
	Checker {
		name: "DoubleDiscardAvoidanceChecker",
		level: ConventionLevel::L2Intermediate,
		applicable_kinds: &[ActionKind::Discard],
		run: level2::double_discard_avoidance_checker,
	},
	Checker {
		name: "FiveStallChecker",
		level: ConventionLevel::L2Intermediate,
		applicable_kinds: &[ActionKind::RankClue],
		run: level2::five_stall_checker,
	},
	Checker {
		name: "StompedFinesseChecker",
		level: ConventionLevel::L2Intermediate,
		applicable_kinds: &crate::model::action::CLUE_KINDS,
		run: level2::stomped_finesse_checker,
	},
	Checker {
		name: "WrongPromptChecker",
		level: ConventionLevel::L2Intermediate,
		applicable_kinds: &[ActionKind::Play],
		run: level2::wrong_prompt_checker,
	},
	// Level 3: advanced convention checkers.
	Checker {
		name: "PlayingMultipleOnesChecker",
		level: ConventionLevel::L3Advanced,
		applicable_kinds: &[ActionKind::Play],
		run: level3::playing_multiple_ones_checker,
	},
	Checker {
		name: "InformationLockChecker",
		level: ConventionLevel::L3Advanced,
		applicable_kinds: &[ActionKind::Discard],
		run: level3::information_lock_checker,
	},
	Checker {
		name: "SarcasticDiscardChecker",
		level: ConventionLevel::L3Advanced,
		applicable_kinds: &[ActionKind::Discard],
		run: level3::sarcastic_discard_checker,
	},
	Checker {
		name: "FixClueChecker",
		level: ConventionLevel::L3Advanced,
		applicable_kinds: &crate::model::action::ALL_KINDS,
		run: level3::fix_clue_checker,
	},
	Checker {
		name: "MisplayCostChecker",
		level: ConventionLevel::L3Advanced,
		applicable_kinds: &[ActionKind::Play, ActionKind::Discard],
		run: level3::misplay_cost_checker,
	},
];
