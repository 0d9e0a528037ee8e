//! Evolution-chain processing: staged decomposition of the source tree
//! and renderer-agnostic row layout.

pub mod layout;
pub mod parser;

pub use layout::{plan_rows, LayoutRow, RowItem, RowKind, RowMember};
pub use parser::{parse_stages, Stage, StageEntry};

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use schema::{EvolutionNode, EvolutionTrigger, SpeciesRef};

    fn species(name: &str, id: u32) -> SpeciesRef {
        SpeciesRef {
            name: name.to_string(),
            url: format!("https://pokeapi.co/api/v2/pokemon-species/{}/", id),
        }
    }

    #[test]
    fn tree_to_rows_end_to_end() {
        // Pichu evolves by happiness into Pikachu, which branches by stone.
        let root = EvolutionNode {
            species: species("pichu", 172),
            evolution_details: vec![],
            evolves_to: vec![EvolutionNode {
                species: species("pikachu", 25),
                evolution_details: vec![EvolutionTrigger {
                    min_happiness: Some(220),
                    ..Default::default()
                }],
                evolves_to: vec![
                    EvolutionNode {
                        species: species("raichu", 26),
                        evolution_details: vec![EvolutionTrigger {
                            item: Some("thunder-stone".to_string()),
                            ..Default::default()
                        }],
                        evolves_to: vec![],
                    },
                    EvolutionNode {
                        species: species("alolan-raichu", 10100),
                        evolution_details: vec![],
                        evolves_to: vec![],
                    },
                ],
            }],
        };

        let stages = parse_stages(&root).unwrap();
        assert_eq!(stages.iter().map(Vec::len).collect::<Vec<_>>(), vec![1, 1, 2]);

        let rows = plan_rows(&stages, "pikachu");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].kind, RowKind::Chained);
        assert_eq!(
            rows[0].items,
            vec![
                RowItem::Member(RowMember {
                    id: 172,
                    name: "pichu".to_string(),
                    current: false,
                }),
                RowItem::Arrow {
                    label: Some("Felicidad".to_string()),
                },
                RowItem::Member(RowMember {
                    id: 25,
                    name: "pikachu".to_string(),
                    current: true,
                }),
                RowItem::Arrow { label: None },
            ]
        );
        assert_eq!(rows[1].kind, RowKind::Branch);
        assert_eq!(rows[1].items.len(), 2);
    }
}
