//! Aggregate type effectiveness between two type sets.

use schema::PokemonType;

/// Combined damage multiplier for an attacker's type set against a
/// defender's type set: the product of every single-pair lookup over the
/// cross product. A single immunity anywhere collapses the result to 0.
///
/// Multiplication is commutative, so the ordering of types inside either
/// set never changes the result.
pub fn combined_multiplier(attacking: &[PokemonType], defending: &[PokemonType]) -> f32 {
    let mut multiplier = 1.0;
    for &attack_type in attacking {
        for &defense_type in defending {
            multiplier *= PokemonType::effectiveness(attack_type, defense_type);
        }
    }
    multiplier
}
