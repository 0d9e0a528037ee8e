use serde::{Deserialize, Serialize};

/// A species reference as carried inside an evolution tree: the species
/// name plus the resource URL its numeric id is recovered from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeciesRef {
    pub name: String,
    pub url: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeOfDay {
    Day,
    Night,
}

/// The condition attached to one evolution edge. Every field is optional;
/// a fully empty trigger is valid (the data source has gaps).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvolutionTrigger {
    pub min_level: Option<u16>,
    pub item: Option<String>,
    pub min_happiness: Option<u16>,
    pub min_affection: Option<u16>,
    pub time_of_day: Option<TimeOfDay>,
    pub location: Option<String>,
    pub known_move: Option<String>,
    pub trade: bool,
}

impl EvolutionTrigger {
    /// Render the trigger as a short comma-joined label. Field order is
    /// fixed: level, item, happiness, affection, time of day, location,
    /// known move, trade. Absent fields are omitted; an empty trigger
    /// renders as an empty string, never a placeholder.
    pub fn label(&self) -> String {
        let mut parts: Vec<String> = Vec::new();

        if let Some(level) = self.min_level {
            parts.push(format!("Nv. {}", level));
        }
        if let Some(item) = &self.item {
            parts.push(item.replace('-', " ").to_uppercase());
        }
        if self.min_happiness.is_some() {
            parts.push("Felicidad".to_string());
        }
        if self.min_affection.is_some() {
            parts.push("Afecto".to_string());
        }
        if let Some(time) = self.time_of_day {
            parts.push(
                match time {
                    TimeOfDay::Day => "Día",
                    TimeOfDay::Night => "Noche",
                }
                .to_string(),
            );
        }
        if let Some(location) = &self.location {
            parts.push(location.replace('-', " "));
        }
        if let Some(known_move) = &self.known_move {
            parts.push(format!("Movimiento: {}", known_move));
        }
        if self.trade {
            parts.push("Intercambio".to_string());
        }

        parts.join(", ")
    }
}

/// One node of the rooted evolution tree. `evolution_details` describes the
/// edge leading *into* this node (empty on the root, and possibly empty
/// elsewhere where the game data defines no trigger).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvolutionNode {
    pub species: SpeciesRef,
    pub evolution_details: Vec<EvolutionTrigger>,
    pub evolves_to: Vec<EvolutionNode>,
}
