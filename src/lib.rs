// In: src/lib.rs

//! Pokefinder Core
//!
//! Lookup, evolution-chain layout and battle comparison for Pokemon
//! records served by PokeAPI. The algorithmic core (staging, layout,
//! scoring) is synchronous and pure; only the fetch layer touches the
//! network, fronted by a lazily expiring TTL cache.

// --- MODULE DECLARATIONS ---
pub mod api;
pub mod battle;
pub mod cache;
pub mod effectiveness;
pub mod errors;
pub mod evolution;

// --- PUBLIC API RE-EXPORTS ---

// --- From the `schema` crate ---
// Re-export the shared data definitions.
pub use schema::{
    stat_label,
    Ability,
    AbilityHolder,
    AbilityRef,
    EvolutionNode,
    EvolutionTrigger,
    Pokemon,
    PokemonType,
    SpeciesRef,
    StatEntry,
    TimeOfDay,
    STAT_NAMES,
};

// --- From this crate's modules (`src/`) ---

// Core algorithms.
pub use battle::{resolve, BattleOutcome, BattleSide, Side, StatComparison, TypeAdvantage};
pub use effectiveness::combined_multiplier;
pub use evolution::{parse_stages, plan_rows, LayoutRow, RowItem, RowKind, RowMember, Stage, StageEntry};

// Boundary collaborators.
pub use api::{Fetched, PokeApiClient, PokemonBundle, API_BASE};
pub use cache::{TtlCache, DEFAULT_TTL};

// Crate-specific error and result types.
pub use errors::{
    BattleError, BattleResult, EvolutionError, EvolutionResult, LookupError, LookupResult,
    PokefinderError, PokefinderResult,
};
