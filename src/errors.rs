use std::fmt;

/// Main error type for the pokefinder core
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PokefinderError {
    /// Error while looking up a record at the data-source boundary
    Lookup(LookupError),
    /// Error while decomposing an evolution tree
    Evolution(EvolutionError),
    /// Error while resolving a battle
    Battle(BattleError),
}

/// Errors raised by the fetch layer. The core treats every variant as a
/// single opaque "lookup failed" condition; the split exists for logging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    /// The requested record does not exist
    NotFound(String),
    /// The transport failed or returned a non-success status
    Transport(String),
    /// The response body did not decode into the expected record
    Decode(String),
}

/// Errors raised while parsing an evolution tree into stages
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EvolutionError {
    /// A species reference whose URL yields no numeric id. Fatal to the
    /// whole parse: stage indices depend on a complete, consistent tree.
    MalformedSpeciesReference(String),
}

/// Errors raised while resolving a battle
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BattleError {
    /// A canonical stat is absent from a Pokemon's stat list
    MissingStat { pokemon: String, stat: String },
    /// A stat list carries a name outside the canonical six
    UnknownStat { pokemon: String, stat: String },
}

impl fmt::Display for PokefinderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PokefinderError::Lookup(err) => write!(f, "Lookup error: {}", err),
            PokefinderError::Evolution(err) => write!(f, "Evolution error: {}", err),
            PokefinderError::Battle(err) => write!(f, "Battle error: {}", err),
        }
    }
}

impl fmt::Display for LookupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LookupError::NotFound(query) => write!(f, "No result found for: {}", query),
            LookupError::Transport(details) => write!(f, "Transport failure: {}", details),
            LookupError::Decode(details) => write!(f, "Malformed response: {}", details),
        }
    }
}

impl fmt::Display for EvolutionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvolutionError::MalformedSpeciesReference(url) => {
                write!(f, "Malformed species reference: {}", url)
            }
        }
    }
}

impl fmt::Display for BattleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BattleError::MissingStat { pokemon, stat } => {
                write!(f, "Invalid Pokemon {}: missing stat {}", pokemon, stat)
            }
            BattleError::UnknownStat { pokemon, stat } => {
                write!(f, "Invalid Pokemon {}: unknown stat {}", pokemon, stat)
            }
        }
    }
}

impl std::error::Error for PokefinderError {}
impl std::error::Error for LookupError {}
impl std::error::Error for EvolutionError {}
impl std::error::Error for BattleError {}

impl From<LookupError> for PokefinderError {
    fn from(err: LookupError) -> Self {
        PokefinderError::Lookup(err)
    }
}

impl From<EvolutionError> for PokefinderError {
    fn from(err: EvolutionError) -> Self {
        PokefinderError::Evolution(err)
    }
}

impl From<BattleError> for PokefinderError {
    fn from(err: BattleError) -> Self {
        PokefinderError::Battle(err)
    }
}

impl From<reqwest::Error> for LookupError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            LookupError::Decode(err.to_string())
        } else {
            LookupError::Transport(err.to_string())
        }
    }
}

/// Type alias for Results using PokefinderError
pub type PokefinderResult<T> = Result<T, PokefinderError>;

/// Type alias for Results using LookupError
pub type LookupResult<T> = Result<T, LookupError>;

/// Type alias for Results using EvolutionError
pub type EvolutionResult<T> = Result<T, EvolutionError>;

/// Type alias for Results using BattleError
pub type BattleResult<T> = Result<T, BattleError>;
