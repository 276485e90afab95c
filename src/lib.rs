pub mod logger;
pub mod model;
pub mod simulate;
pub mod helpers;
pub mod context;
pub mod trackers;
pub mod checkers;
pub mod orchestrator;

pub use model::action::{ActionKind, GameAction};
pub use model::card::{CardInHand, ClueMarks, DeckCard};
pub use model::game::{AnalyzerOptions, ConventionLevel, Game, GameState};
pub use model::violation::{RuleViolation, Severity, ViolationKind};
pub use orchestrator::{analyze, AnalysisResult, AnalysisSummary};
