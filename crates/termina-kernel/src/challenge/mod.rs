//! Challenge progression: catalogs and the state machine that walks them.

mod catalog;
mod engine;
mod error;

pub use catalog::{Catalog, Category};
pub use engine::{
    level_for, ChallengeEngine, Completion, EngineState, HintOutcome, ProgressStats, XP_PER_LEVEL,
};
pub use error::ChallengeError;
