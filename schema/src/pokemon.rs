use crate::PokemonType;
use serde::{Deserialize, Serialize};

/// The six canonical base stats, in the order PokeAPI reports them.
/// Battle scoring sums exactly these; anything else in a stat list is a
/// malformed record.
pub const STAT_NAMES: [&str; 6] = [
    "hp",
    "attack",
    "defense",
    "special-attack",
    "special-defense",
    "speed",
];

/// Short display label for a canonical stat name.
pub fn stat_label(name: &str) -> &str {
    match name {
        "hp" => "HP",
        "attack" => "ATK",
        "defense" => "DEF",
        "special-attack" => "SP.ATK",
        "special-defense" => "SP.DEF",
        "speed" => "SPD",
        other => other,
    }
}

/// One named base-stat entry as reported by the data source.
/// Kept as a named list rather than a fixed struct so validation can
/// detect missing or unrecognized stat names at resolve time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatEntry {
    pub name: String,
    pub base_stat: u16,
}

/// Reference to an ability as carried on a Pokemon record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbilityRef {
    pub name: String,
    pub is_hidden: bool,
}

/// A fully materialized Pokemon record. Immutable once fetched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pokemon {
    pub id: u32,
    pub name: String,
    /// One or two type tags, in the source's display order.
    pub types: Vec<PokemonType>,
    pub stats: Vec<StatEntry>,
    pub abilities: Vec<AbilityRef>,
}

impl Pokemon {
    /// Look up a base stat by its canonical name.
    pub fn stat(&self, name: &str) -> Option<u16> {
        self.stats
            .iter()
            .find(|entry| entry.name == name)
            .map(|entry| entry.base_stat)
    }
}

/// A Pokemon that can carry a given ability, as listed on a full ability
/// record. The id is absent when the source reference does not parse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbilityHolder {
    pub id: Option<u32>,
    pub name: String,
    pub is_hidden: bool,
}

/// A full ability record, looked up by name or id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ability {
    pub id: u32,
    pub name: String,
    /// Best-available effect text, if the source carries one.
    pub effect: Option<String>,
    pub holders: Vec<AbilityHolder>,
}
