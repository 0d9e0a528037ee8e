//! Greedy row planning for a staged evolution chain.
//!
//! Consecutive single-member stages are absorbed into one row, left to
//! right; a branch stage (more than one member) closes the current row and
//! opens a new one holding every branch candidate. The output is a plain
//! description; rendering is the caller's concern.

use crate::evolution::parser::{Stage, StageEntry};

/// How a row came to be, for styling purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind {
    /// One member, nothing absorbed
    Single,
    /// At least one following stage was absorbed into the row
    Chained,
    /// Several sibling candidates from one branch stage
    Branch,
}

/// One species slot in a row.
#[derive(Debug, Clone, PartialEq)]
pub struct RowMember {
    pub id: u32,
    pub name: String,
    /// Marks the species the chain was looked up for. Cosmetic only;
    /// layout decisions never depend on it.
    pub current: bool,
}

/// One element of a row: a species, or the arrow leading to the next one.
#[derive(Debug, Clone, PartialEq)]
pub enum RowItem {
    Member(RowMember),
    /// An arrow, labeled with the next member's trigger condition when one
    /// is present. Trailing arrows before a branch carry no label.
    Arrow { label: Option<String> },
}

/// One visual line of the rendered chain.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutRow {
    pub kind: RowKind,
    pub items: Vec<RowItem>,
}

/// Group stages into display rows. Deterministic, single pass: each stage
/// index is consumed exactly once, and every stage lands in exactly one
/// row, in order.
pub fn plan_rows(stages: &[Stage], highlight_name: &str) -> Vec<LayoutRow> {
    let mut rows = Vec::new();
    let mut index = 0;

    while index < stages.len() {
        let members_at_start = stages[index].len();
        let mut items: Vec<RowItem> = stages[index]
            .iter()
            .map(|entry| member_item(entry, highlight_name))
            .collect();

        // Absorb following stages for as long as they hold exactly one
        // member, joining them with a condition-labeled arrow.
        let mut chained = false;
        while index + 1 < stages.len() && stages[index + 1].len() == 1 {
            chained = true;
            let next = &stages[index + 1][0];
            items.push(RowItem::Arrow {
                label: arrow_label(next),
            });
            items.push(member_item(next, highlight_name));
            index += 1;
        }

        // A branch stage follows: close the row with a label-less arrow.
        // (A single-member next stage would have been absorbed above, so
        // there is never a condition to show here.)
        if index + 1 < stages.len() {
            items.push(RowItem::Arrow { label: None });
        }

        let kind = if chained {
            RowKind::Chained
        } else if members_at_start == 1 {
            RowKind::Single
        } else {
            RowKind::Branch
        };
        rows.push(LayoutRow { kind, items });
        index += 1;
    }

    rows
}

fn member_item(entry: &StageEntry, highlight_name: &str) -> RowItem {
    RowItem::Member(RowMember {
        id: entry.id,
        name: entry.name.clone(),
        current: entry.name.eq_ignore_ascii_case(highlight_name),
    })
}

fn arrow_label(entry: &StageEntry) -> Option<String> {
    let label = entry.trigger.as_ref().map(|trigger| trigger.label())?;
    if label.is_empty() {
        None
    } else {
        Some(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use schema::EvolutionTrigger;

    fn entry(name: &str, id: u32, trigger: Option<EvolutionTrigger>) -> StageEntry {
        StageEntry {
            id,
            name: name.to_string(),
            trigger,
        }
    }

    fn member(name: &str, id: u32, current: bool) -> RowItem {
        RowItem::Member(RowMember {
            id,
            name: name.to_string(),
            current,
        })
    }

    fn arrow(label: Option<&str>) -> RowItem {
        RowItem::Arrow {
            label: label.map(str::to_string),
        }
    }

    #[test]
    fn lone_stage_forms_a_single_row() {
        let stages = vec![vec![entry("tauros", 128, None)]];

        let rows = plan_rows(&stages, "tauros");

        assert_eq!(
            rows,
            vec![LayoutRow {
                kind: RowKind::Single,
                items: vec![member("tauros", 128, true)],
            }]
        );
    }

    #[test]
    fn linear_chain_collapses_into_one_chained_row() {
        let stages = vec![
            vec![entry("charmander", 4, None)],
            vec![entry(
                "charmeleon",
                5,
                Some(EvolutionTrigger {
                    min_level: Some(16),
                    ..Default::default()
                }),
            )],
            vec![entry(
                "charizard",
                6,
                Some(EvolutionTrigger {
                    item: Some("fire-stone".to_string()),
                    ..Default::default()
                }),
            )],
        ];

        let rows = plan_rows(&stages, "charmeleon");

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].kind, RowKind::Chained);
        assert_eq!(
            rows[0].items,
            vec![
                member("charmander", 4, false),
                arrow(Some("Nv. 16")),
                member("charmeleon", 5, true),
                arrow(Some("FIRE STONE")),
                member("charizard", 6, false),
            ]
        );
    }

    #[test]
    fn branch_stage_closes_the_leading_row_with_an_unlabeled_arrow() {
        let stages = vec![
            vec![entry("eevee", 133, None)],
            vec![
                entry("vaporeon", 134, None),
                entry("jolteon", 135, None),
            ],
        ];

        let rows = plan_rows(&stages, "eevee");

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].kind, RowKind::Single);
        assert_eq!(
            rows[0].items,
            vec![member("eevee", 133, true), arrow(None)]
        );
        assert_eq!(rows[1].kind, RowKind::Branch);
        assert_eq!(
            rows[1].items,
            vec![member("vaporeon", 134, false), member("jolteon", 135, false)]
        );
    }

    #[test]
    fn chained_row_still_gets_a_trailing_arrow_before_a_branch() {
        let trigger = EvolutionTrigger {
            min_level: Some(20),
            ..Default::default()
        };
        let stages = vec![
            vec![entry("a", 1, None)],
            vec![entry("b", 2, Some(trigger))],
            vec![entry("c", 3, None), entry("d", 4, None)],
        ];

        let rows = plan_rows(&stages, "a");

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].kind, RowKind::Chained);
        assert_eq!(
            rows[0].items,
            vec![
                member("a", 1, true),
                arrow(Some("Nv. 20")),
                member("b", 2, false),
                arrow(None),
            ]
        );
        assert_eq!(rows[1].kind, RowKind::Branch);
    }

    #[test]
    fn empty_trigger_produces_an_unlabeled_arrow() {
        let stages = vec![
            vec![entry("a", 1, None)],
            vec![entry("b", 2, Some(EvolutionTrigger::default()))],
        ];

        let rows = plan_rows(&stages, "a");

        assert_eq!(rows[0].items[1], arrow(None));
    }

    #[test]
    fn highlight_matching_is_case_insensitive() {
        let stages = vec![vec![entry("pikachu", 25, None)]];

        let rows = plan_rows(&stages, "PIKACHU");

        assert_eq!(rows[0].items, vec![member("pikachu", 25, true)]);
    }
}
