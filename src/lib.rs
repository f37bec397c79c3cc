// In: src/lib.rs

//! Boss Raid Battle Engine
//!
//! A turn-based simulation of one boss against a party of heroes, each hero
//! carrying a fixed special power. Rounds resolve in a fixed order: the boss
//! picks a defence, strikes the party, then every surviving hero counter-attacks
//! and uses its power, until one side is wiped out.

// --- MODULE DECLARATIONS ---
pub mod battle;
pub mod boss;
pub mod entity;
pub mod errors;
pub mod hero;
pub mod prefab_roster;
pub mod report;

// --- PUBLIC API RE-EXPORTS ---

// --- From the `schema` crate ---
pub use schema::Ability;

// --- From this crate's modules (`src/`) ---

// Core battle engine functions and state.
pub use battle::engine::{check_game_over, play_round};
pub use battle::runner::{run_game, start_game, start_game_with};
pub use battle::state::{BattleEvent, EventBus, GameSession, GameState, TurnRng};

// Core runtime types for a battle.
pub use boss::Boss;
pub use entity::{Entity, Vitals};
pub use hero::{Hero, HeroKind, RoundEffects};
pub use prefab_roster::{standard_roster, RosterTemplate};
pub use report::{ConsoleReporter, RecordingReporter, Reporter, StatisticsReport};

// Crate-specific error and result types.
pub use errors::{BattleError, BattleResult, ConfigError, ConfigResult, PartyRequirement};
