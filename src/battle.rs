//! Deterministic battle comparison between two Pokemon records.
//!
//! The score is a heuristic, not the games' combat math: each side's six
//! base stats are summed and scaled by the aggregate type multiplier
//! against the other side; the higher score wins.

use crate::effectiveness::combined_multiplier;
use crate::errors::{BattleError, BattleResult};
use ordered_float::OrderedFloat;
use schema::{stat_label, Pokemon, STAT_NAMES};

/// Which of the two supplied Pokemon a result refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    First,
    Second,
}

/// One side of the outcome: the record plus everything derived from it.
#[derive(Debug, Clone, PartialEq)]
pub struct BattleSide {
    pub pokemon: Pokemon,
    /// Sum of the six canonical base stats.
    pub stat_total: u32,
    /// Aggregate multiplier attacking the other side.
    pub multiplier: f32,
    /// `stat_total` scaled by `multiplier`.
    pub score: f32,
}

/// Informational note on one attacking direction. Emitted only for
/// multipliers above 1 (effective) or strictly between 0 and 1 (not very
/// effective); never affects the score.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeAdvantage {
    pub attacker: String,
    pub defender: String,
    pub multiplier: f32,
    pub effective: bool,
}

/// Raw values of one canonical stat on both sides, with the strictly
/// higher side marked. Ties mark neither.
#[derive(Debug, Clone, PartialEq)]
pub struct StatComparison {
    /// Short display label ("HP", "ATK", ...).
    pub label: String,
    pub first: u16,
    pub second: u16,
    pub higher: Option<Side>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BattleOutcome {
    pub first: BattleSide,
    pub second: BattleSide,
    pub winner: Side,
    pub advantages: Vec<TypeAdvantage>,
    pub stat_comparison: Vec<StatComparison>,
}

impl BattleOutcome {
    pub fn winner(&self) -> &BattleSide {
        match self.winner {
            Side::First => &self.first,
            Side::Second => &self.second,
        }
    }

    pub fn loser(&self) -> &BattleSide {
        match self.winner {
            Side::First => &self.second,
            Side::Second => &self.first,
        }
    }
}

/// Resolve a battle between two fully loaded Pokemon records.
///
/// Tie policy: on exactly equal scores the first-supplied Pokemon wins.
/// The second side takes the battle only on a strictly greater score.
///
/// Pure function: identical inputs always produce identical outcomes.
pub fn resolve(first: &Pokemon, second: &Pokemon) -> BattleResult<BattleOutcome> {
    let first_total = stat_total(first)?;
    let second_total = stat_total(second)?;

    let first_multiplier = combined_multiplier(&first.types, &second.types);
    let second_multiplier = combined_multiplier(&second.types, &first.types);

    let first_score = first_total as f32 * first_multiplier;
    let second_score = second_total as f32 * second_multiplier;

    let winner = if OrderedFloat(second_score) > OrderedFloat(first_score) {
        Side::Second
    } else {
        Side::First
    };

    let mut advantages = Vec::new();
    push_advantage(&mut advantages, first, second, first_multiplier);
    push_advantage(&mut advantages, second, first, second_multiplier);

    let stat_comparison = STAT_NAMES
        .iter()
        .map(|&name| {
            // stat_total already verified all six are present on both sides
            let first_value = first.stat(name).unwrap_or(0);
            let second_value = second.stat(name).unwrap_or(0);
            StatComparison {
                label: stat_label(name).to_string(),
                first: first_value,
                second: second_value,
                higher: if first_value > second_value {
                    Some(Side::First)
                } else if second_value > first_value {
                    Some(Side::Second)
                } else {
                    None
                },
            }
        })
        .collect();

    Ok(BattleOutcome {
        first: BattleSide {
            pokemon: first.clone(),
            stat_total: first_total,
            multiplier: first_multiplier,
            score: first_score,
        },
        second: BattleSide {
            pokemon: second.clone(),
            stat_total: second_total,
            multiplier: second_multiplier,
            score: second_score,
        },
        winner,
        advantages,
        stat_comparison,
    })
}

/// Sum the six canonical stats, rejecting records that miss any of them or
/// carry names outside the canonical set. Silently zeroing a missing stat
/// would corrupt the total, so both cases fail instead.
fn stat_total(pokemon: &Pokemon) -> BattleResult<u32> {
    for entry in &pokemon.stats {
        if !STAT_NAMES.contains(&entry.name.as_str()) {
            return Err(BattleError::UnknownStat {
                pokemon: pokemon.name.clone(),
                stat: entry.name.clone(),
            });
        }
    }

    let mut total: u32 = 0;
    for name in STAT_NAMES {
        let value = pokemon.stat(name).ok_or_else(|| BattleError::MissingStat {
            pokemon: pokemon.name.clone(),
            stat: name.to_string(),
        })?;
        total += u32::from(value);
    }
    Ok(total)
}

fn push_advantage(
    advantages: &mut Vec<TypeAdvantage>,
    attacker: &Pokemon,
    defender: &Pokemon,
    multiplier: f32,
) {
    if multiplier > 1.0 {
        advantages.push(TypeAdvantage {
            attacker: attacker.name.clone(),
            defender: defender.name.clone(),
            multiplier,
            effective: true,
        });
    } else if multiplier > 0.0 && multiplier < 1.0 {
        advantages.push(TypeAdvantage {
            attacker: attacker.name.clone(),
            defender: defender.name.clone(),
            multiplier,
            effective: false,
        });
    }
}
