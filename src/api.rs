//! PokeAPI fetch layer.
//!
//! Every request goes through a TTL cache keyed by the lookup parameters;
//! callers learn whether a record came from cache through [`Fetched`].
//! Network and decode failures surface as [`LookupError`] — the core
//! components never see this layer.

use crate::cache::TtlCache;
use crate::errors::{LookupError, LookupResult};
use schema::{
    Ability, AbilityHolder, AbilityRef, EvolutionNode, EvolutionTrigger, Pokemon, PokemonType,
    SpeciesRef, StatEntry, TimeOfDay,
};
use serde::Deserialize;
use serde_json::Value;
use std::str::FromStr;
use tracing::{debug, warn};

pub const API_BASE: &str = "https://pokeapi.co/api/v2";

/// A fetched record plus its provenance.
#[derive(Debug, Clone, PartialEq)]
pub struct Fetched<T> {
    pub data: T,
    pub from_cache: bool,
}

/// A Pokemon lookup result: the record itself plus the evolution-chain
/// resource recovered from its species record, when one exists.
#[derive(Debug, Clone, PartialEq)]
pub struct PokemonBundle {
    pub pokemon: Pokemon,
    pub evolution_chain_url: Option<String>,
}

pub struct PokeApiClient {
    http: reqwest::Client,
    base_url: String,
    cache: TtlCache<Value>,
}

impl PokeApiClient {
    pub fn new() -> Self {
        Self::with_base_url(API_BASE)
    }

    /// Point the client at an alternate API root (mirrors, test servers).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        PokeApiClient {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            cache: TtlCache::new(),
        }
    }

    /// Look up a Pokemon by name or numeric id. Also fetches the species
    /// record for its evolution-chain reference; the reported provenance
    /// is that of the Pokemon record itself.
    pub async fn get_pokemon(&mut self, name_or_id: &str) -> LookupResult<Fetched<PokemonBundle>> {
        let query = name_or_id.trim().to_lowercase();
        let url = format!("{}/pokemon/{}", self.base_url, query);
        let fetched = self.fetch_json(&url, &format!("pokemon_{}", query)).await?;
        let raw: RawPokemon = decode(fetched.data)?;

        let species_url = raw.species.url.clone();
        let species_key = format!("species_{}", raw.id);
        let species_raw: RawSpecies = decode(self.fetch_json(&species_url, &species_key).await?.data)?;

        Ok(Fetched {
            data: PokemonBundle {
                pokemon: raw.into_pokemon(),
                evolution_chain_url: species_raw.evolution_chain.map(|link| link.url),
            },
            from_cache: fetched.from_cache,
        })
    }

    /// Fetch the evolution tree behind a chain resource URL.
    pub async fn get_evolution_chain(&mut self, url: &str) -> LookupResult<Fetched<EvolutionNode>> {
        let key = format!("evolution_{}", trailing_segment(url).unwrap_or(url));
        let fetched = self.fetch_json(url, &key).await?;
        let raw: RawEvolutionChain = decode(fetched.data)?;
        Ok(Fetched {
            data: raw.chain.into_node(),
            from_cache: fetched.from_cache,
        })
    }

    /// Look up an ability by name or numeric id.
    pub async fn get_ability(&mut self, name_or_id: &str) -> LookupResult<Fetched<Ability>> {
        let query = name_or_id.trim().to_lowercase();
        let url = format!("{}/ability/{}", self.base_url, query);
        let fetched = self.fetch_json(&url, &format!("ability_{}", query)).await?;
        let raw: RawAbility = decode(fetched.data)?;
        Ok(Fetched {
            data: raw.into_ability(),
            from_cache: fetched.from_cache,
        })
    }

    /// Fetch a JSON document, consulting the cache first.
    async fn fetch_json(&mut self, url: &str, key: &str) -> LookupResult<Fetched<Value>> {
        if let Some(value) = self.cache.get(key) {
            debug!(key, "cache hit");
            return Ok(Fetched {
                data: value.clone(),
                from_cache: true,
            });
        }

        debug!(key, url, "cache miss, fetching");
        let response = self.http.get(url).send().await?;
        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(LookupError::NotFound(url.to_string()));
        }
        if !status.is_success() {
            return Err(LookupError::Transport(format!("HTTP {}", status)));
        }

        let value: Value = response.json().await?;
        self.cache.set(key, value.clone());
        Ok(Fetched {
            data: value,
            from_cache: false,
        })
    }
}

impl Default for PokeApiClient {
    fn default() -> Self {
        Self::new()
    }
}

fn decode<T: serde::de::DeserializeOwned>(value: Value) -> LookupResult<T> {
    serde_json::from_value(value).map_err(|err| LookupError::Decode(err.to_string()))
}

/// Last non-empty path segment of a resource URL.
fn trailing_segment(url: &str) -> Option<&str> {
    url.split('/').rev().find(|segment| !segment.is_empty())
}

// --- Raw wire records ---
// These mirror the PokeAPI response shapes one-to-one and are converted
// into the schema types right after decoding.

#[derive(Debug, Deserialize)]
struct NamedResource {
    name: String,
    url: String,
}

#[derive(Debug, Deserialize)]
struct ResourceLink {
    url: String,
}

#[derive(Debug, Deserialize)]
struct RawTypeSlot {
    #[serde(rename = "type")]
    type_: NamedResource,
}

#[derive(Debug, Deserialize)]
struct RawStat {
    base_stat: u16,
    stat: NamedResource,
}

#[derive(Debug, Deserialize)]
struct RawAbilitySlot {
    ability: NamedResource,
    is_hidden: bool,
}

#[derive(Debug, Deserialize)]
struct RawPokemon {
    id: u32,
    name: String,
    types: Vec<RawTypeSlot>,
    stats: Vec<RawStat>,
    abilities: Vec<RawAbilitySlot>,
    species: NamedResource,
}

impl RawPokemon {
    fn into_pokemon(self) -> Pokemon {
        let types = self
            .types
            .into_iter()
            .filter_map(|slot| match PokemonType::from_str(&slot.type_.name) {
                Ok(type_) => Some(type_),
                Err(_) => {
                    // Tags outside the classic 18 would read as neutral
                    // everywhere anyway; drop them.
                    warn!(tag = %slot.type_.name, "ignoring unrecognized type tag");
                    None
                }
            })
            .collect();

        Pokemon {
            id: self.id,
            name: self.name,
            types,
            stats: self
                .stats
                .into_iter()
                .map(|raw| StatEntry {
                    name: raw.stat.name,
                    base_stat: raw.base_stat,
                })
                .collect(),
            abilities: self
                .abilities
                .into_iter()
                .map(|slot| AbilityRef {
                    name: slot.ability.name,
                    is_hidden: slot.is_hidden,
                })
                .collect(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawSpecies {
    evolution_chain: Option<ResourceLink>,
}

#[derive(Debug, Deserialize)]
struct RawEvolutionChain {
    chain: RawChainLink,
}

#[derive(Debug, Deserialize)]
struct RawChainLink {
    species: NamedResource,
    #[serde(default)]
    evolution_details: Vec<RawEvolutionDetail>,
    #[serde(default)]
    evolves_to: Vec<RawChainLink>,
}

impl RawChainLink {
    fn into_node(self) -> EvolutionNode {
        EvolutionNode {
            species: SpeciesRef {
                name: self.species.name,
                url: self.species.url,
            },
            evolution_details: self
                .evolution_details
                .into_iter()
                .map(RawEvolutionDetail::into_trigger)
                .collect(),
            evolves_to: self
                .evolves_to
                .into_iter()
                .map(RawChainLink::into_node)
                .collect(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawEvolutionDetail {
    min_level: Option<u16>,
    item: Option<NamedResource>,
    min_happiness: Option<u16>,
    min_affection: Option<u16>,
    /// The wire format reports an empty string, not null, when unset.
    #[serde(default)]
    time_of_day: String,
    location: Option<NamedResource>,
    known_move: Option<NamedResource>,
    trigger: Option<NamedResource>,
}

impl RawEvolutionDetail {
    fn into_trigger(self) -> EvolutionTrigger {
        EvolutionTrigger {
            min_level: self.min_level,
            item: self.item.map(|item| item.name),
            min_happiness: self.min_happiness,
            min_affection: self.min_affection,
            time_of_day: match self.time_of_day.as_str() {
                "day" => Some(TimeOfDay::Day),
                "night" => Some(TimeOfDay::Night),
                _ => None,
            },
            location: self.location.map(|location| location.name),
            known_move: self.known_move.map(|known_move| known_move.name),
            trade: self
                .trigger
                .map(|trigger| trigger.name == "trade")
                .unwrap_or(false),
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawEffectEntry {
    effect: String,
    language: NamedResource,
}

#[derive(Debug, Deserialize)]
struct RawAbilityPokemon {
    is_hidden: bool,
    pokemon: NamedResource,
}

#[derive(Debug, Deserialize)]
struct RawAbility {
    id: u32,
    name: String,
    #[serde(default)]
    effect_entries: Vec<RawEffectEntry>,
    #[serde(default)]
    pokemon: Vec<RawAbilityPokemon>,
}

impl RawAbility {
    fn into_ability(self) -> Ability {
        // Prefer the Spanish effect text, fall back to English.
        let effect = self
            .effect_entries
            .iter()
            .find(|entry| entry.language.name == "es")
            .or_else(|| {
                self.effect_entries
                    .iter()
                    .find(|entry| entry.language.name == "en")
            })
            .map(|entry| entry.effect.clone());

        Ability {
            id: self.id,
            name: self.name,
            effect,
            holders: self
                .pokemon
                .into_iter()
                .map(|holder| AbilityHolder {
                    id: trailing_segment(&holder.pokemon.url).and_then(|id| id.parse().ok()),
                    name: holder.pokemon.name,
                    is_hidden: holder.is_hidden,
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn raw_pokemon_converts_into_schema_record() {
        let raw: RawPokemon = serde_json::from_value(json!({
            "id": 6,
            "name": "charizard",
            "types": [
                { "slot": 1, "type": { "name": "fire", "url": "https://pokeapi.co/api/v2/type/10/" } },
                { "slot": 2, "type": { "name": "flying", "url": "https://pokeapi.co/api/v2/type/3/" } }
            ],
            "stats": [
                { "base_stat": 78, "stat": { "name": "hp", "url": "https://pokeapi.co/api/v2/stat/1/" } },
                { "base_stat": 100, "stat": { "name": "speed", "url": "https://pokeapi.co/api/v2/stat/6/" } }
            ],
            "abilities": [
                { "ability": { "name": "blaze", "url": "https://pokeapi.co/api/v2/ability/66/" }, "is_hidden": false },
                { "ability": { "name": "solar-power", "url": "https://pokeapi.co/api/v2/ability/94/" }, "is_hidden": true }
            ],
            "species": { "name": "charizard", "url": "https://pokeapi.co/api/v2/pokemon-species/6/" }
        }))
        .unwrap();

        let pokemon = raw.into_pokemon();

        assert_eq!(pokemon.id, 6);
        assert_eq!(pokemon.types, vec![PokemonType::Fire, PokemonType::Flying]);
        assert_eq!(pokemon.stat("speed"), Some(100));
        assert_eq!(
            pokemon.abilities,
            vec![
                AbilityRef { name: "blaze".to_string(), is_hidden: false },
                AbilityRef { name: "solar-power".to_string(), is_hidden: true },
            ]
        );
    }

    #[test]
    fn unrecognized_type_tags_are_dropped() {
        let raw: RawPokemon = serde_json::from_value(json!({
            "id": 1,
            "name": "glitch",
            "types": [
                { "type": { "name": "stellar", "url": "https://pokeapi.co/api/v2/type/19/" } },
                { "type": { "name": "water", "url": "https://pokeapi.co/api/v2/type/11/" } }
            ],
            "stats": [],
            "abilities": [],
            "species": { "name": "glitch", "url": "https://pokeapi.co/api/v2/pokemon-species/1/" }
        }))
        .unwrap();

        assert_eq!(raw.into_pokemon().types, vec![PokemonType::Water]);
    }

    #[test]
    fn chain_link_converts_recursively() {
        let raw: RawEvolutionChain = serde_json::from_value(json!({
            "chain": {
                "species": { "name": "machop", "url": "https://pokeapi.co/api/v2/pokemon-species/66/" },
                "evolves_to": [{
                    "species": { "name": "machoke", "url": "https://pokeapi.co/api/v2/pokemon-species/67/" },
                    "evolution_details": [{
                        "min_level": 28,
                        "item": null,
                        "min_happiness": null,
                        "min_affection": null,
                        "time_of_day": "",
                        "location": null,
                        "known_move": null,
                        "trigger": { "name": "level-up", "url": "https://pokeapi.co/api/v2/evolution-trigger/1/" }
                    }],
                    "evolves_to": []
                }]
            }
        }))
        .unwrap();

        let node = raw.chain.into_node();

        assert_eq!(node.species.name, "machop");
        assert_eq!(node.evolution_details, vec![]);
        assert_eq!(node.evolves_to.len(), 1);
        assert_eq!(
            node.evolves_to[0].evolution_details,
            vec![EvolutionTrigger {
                min_level: Some(28),
                ..Default::default()
            }]
        );
    }

    #[test]
    fn trade_and_time_of_day_details_convert() {
        let raw: RawEvolutionDetail = serde_json::from_value(json!({
            "min_level": null,
            "item": { "name": "metal-coat", "url": "https://pokeapi.co/api/v2/item/210/" },
            "min_happiness": null,
            "min_affection": null,
            "time_of_day": "night",
            "location": null,
            "known_move": null,
            "trigger": { "name": "trade", "url": "https://pokeapi.co/api/v2/evolution-trigger/2/" }
        }))
        .unwrap();

        let trigger = raw.into_trigger();

        assert_eq!(trigger.item, Some("metal-coat".to_string()));
        assert_eq!(trigger.time_of_day, Some(TimeOfDay::Night));
        assert!(trigger.trade);
    }

    #[test]
    fn ability_effect_prefers_spanish_over_english() {
        let raw: RawAbility = serde_json::from_value(json!({
            "id": 9,
            "name": "static",
            "effect_entries": [
                { "effect": "May paralyze on contact.", "language": { "name": "en", "url": "" } },
                { "effect": "Puede paralizar al contacto.", "language": { "name": "es", "url": "" } }
            ],
            "pokemon": [
                { "is_hidden": false, "pokemon": { "name": "pikachu", "url": "https://pokeapi.co/api/v2/pokemon/25/" } }
            ]
        }))
        .unwrap();

        let ability = raw.into_ability();

        assert_eq!(ability.effect, Some("Puede paralizar al contacto.".to_string()));
        assert_eq!(
            ability.holders,
            vec![AbilityHolder {
                id: Some(25),
                name: "pikachu".to_string(),
                is_hidden: false,
            }]
        );
    }

    #[test]
    fn trailing_segment_handles_slashes_and_garbage() {
        assert_eq!(
            trailing_segment("https://pokeapi.co/api/v2/evolution-chain/2/"),
            Some("2")
        );
        assert_eq!(trailing_segment("////"), None);
    }
}
