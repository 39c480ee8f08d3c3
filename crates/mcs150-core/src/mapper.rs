//! The field mapper: one filing in, an ordered assignment list out.

use crate::field::FieldAssignment;
use crate::filing::FilingForm;
use crate::table::{ExtractRule, FIELD_RULES, SYNTHETIC_RULES};

/// Map a filing onto the template's fields.
///
/// Walks the static rule table in order, producing one assignment per
/// rule (two for a toggle, one per checkbox instance). The mapper is
/// total and deterministic: every rule yields an assignment regardless of
/// which filing groups are present, and the same filing always yields the
/// same sequence. Synthetic overlay assignments come last and are only
/// emitted when their source value is non-empty.
pub fn map_filing(filing: &FilingForm) -> Vec<FieldAssignment> {
    let mut assignments = Vec::with_capacity(FIELD_RULES.len() + SYNTHETIC_RULES.len() + 1);

    for rule in FIELD_RULES {
        match rule.rule {
            ExtractRule::Text(path) => {
                assignments.push(FieldAssignment::Text {
                    field: rule.field,
                    value: filing.text(&path),
                });
            }
            ExtractRule::Equals { path, code } => {
                assignments.push(FieldAssignment::Checkbox {
                    field: rule.field,
                    on: filing.text(&path) == code,
                    rect: None,
                });
            }
            ExtractRule::MemberOf { path, label } => {
                assignments.push(FieldAssignment::Checkbox {
                    field: rule.field,
                    on: filing.text(&path).contains(label),
                    rect: None,
                });
            }
            ExtractRule::MemberOfAny { path, labels } => {
                let selected = filing.text(&path);
                assignments.push(FieldAssignment::Checkbox {
                    field: rule.field,
                    on: labels.iter().any(|label| selected.contains(label)),
                    rect: None,
                });
            }
            ExtractRule::WhenPresent(path) => {
                assignments.push(FieldAssignment::Checkbox {
                    field: rule.field,
                    on: !filing.text(&path).is_empty(),
                    rect: None,
                });
            }
            ExtractRule::Toggle {
                path,
                on_rect,
                off_rect,
            } => {
                let flag = filing.flag(&path);
                assignments.push(FieldAssignment::Checkbox {
                    field: rule.field,
                    on: flag == Some(true),
                    rect: Some(on_rect),
                });
                assignments.push(FieldAssignment::Checkbox {
                    field: rule.field,
                    on: flag == Some(false),
                    rect: Some(off_rect),
                });
            }
        }
    }

    for synth in SYNTHETIC_RULES {
        let value = filing.text(&synth.path);
        if value.is_empty() {
            continue;
        }
        assignments.push(FieldAssignment::Overlay {
            field: synth.field,
            anchor: synth.anchor,
            rect: synth.rect,
            value,
        });
    }

    assignments
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn map(value: serde_json::Value) -> Vec<FieldAssignment> {
        map_filing(&FilingForm::from_value(value).unwrap())
    }

    fn find<'a>(assignments: &'a [FieldAssignment], field: &str) -> &'a FieldAssignment {
        assignments
            .iter()
            .find(|a| a.field() == field)
            .unwrap_or_else(|| panic!("no assignment for {field}"))
    }

    fn checkbox_on(assignments: &[FieldAssignment], field: &str) -> bool {
        match find(assignments, field) {
            FieldAssignment::Checkbox { on, .. } => *on,
            other => panic!("expected checkbox for {field}, got {other:?}"),
        }
    }

    fn text_value<'a>(assignments: &'a [FieldAssignment], field: &str) -> &'a str {
        match find(assignments, field) {
            FieldAssignment::Text { value, .. } => value,
            other => panic!("expected text for {field}, got {other:?}"),
        }
    }

    #[test]
    fn empty_filing_yields_full_assignment_set() {
        let assignments = map_filing(&FilingForm::empty());
        // Every table rule produces output; toggles produce two entries,
        // synthetics none when their value is absent.
        let expected = crate::table::FIELD_RULES.len() + 1;
        assert_eq!(assignments.len(), expected);
        assert_eq!(text_value(&assignments, "1bizName"), "");
        assert!(!checkbox_on(&assignments, "22aBox"));
    }

    #[test]
    fn text_fields_copy_filing_values() {
        let assignments = map(json!({
            "line1": "Acme Trucking LLC",
            "line3_7": {"line3": "1 Main St", "line4": "Springfield"},
            "line20": "ops@acme.example",
            "line21": "120000"
        }));
        assert_eq!(text_value(&assignments, "1bizName"), "Acme Trucking LLC");
        assert_eq!(text_value(&assignments, "3principalStreet"), "1 Main St");
        assert_eq!(text_value(&assignments, "4principalCity"), "Springfield");
        assert_eq!(text_value(&assignments, "20eMail"), "ops@acme.example");
        assert_eq!(text_value(&assignments, "21carrierMileage"), "120000");
    }

    #[test]
    fn classification_code_checks_exactly_one_box() {
        let assignments = map(json!({"line22": "C"}));
        assert!(checkbox_on(&assignments, "22cBox"));
        for field in ["22aBox", "22bBox", "22dBox", "22eBox"] {
            assert!(!checkbox_on(&assignments, field), "{field} should be off");
        }
    }

    #[test]
    fn cargo_membership_checks_selected_boxes() {
        let assignments = map(json!({"line24": "General Freight, Chemicals"}));
        assert!(checkbox_on(&assignments, "24aBox"));
        assert!(checkbox_on(&assignments, "24uBox"));
        assert!(!checkbox_on(&assignments, "24bBox"));
        assert!(!checkbox_on(&assignments, "24mBox"));
    }

    #[test]
    fn vehicle_cargo_drives_line25_boxes() {
        let assignments = map(json!({"line24": "Drive/Tow away"}));
        assert!(checkbox_on(&assignments, "25ggCBox"));
        assert!(checkbox_on(&assignments, "25ggNBBox"));

        let assignments = map(json!({"line24": "Household Goods"}));
        assert!(!checkbox_on(&assignments, "25ggCBox"));
        assert!(!checkbox_on(&assignments, "25ggNBBox"));
    }

    #[test]
    fn other_cargo_description_checks_box_and_adds_overlay() {
        let assignments = map(json!({"line24_other": "Scrap tires"}));
        assert!(checkbox_on(&assignments, "24ddBox"));
        match find(&assignments, "24ddOther") {
            FieldAssignment::Overlay { anchor, value, .. } => {
                assert_eq!(*anchor, "24ddDescribe");
                assert_eq!(value, "Scrap tires");
            }
            other => panic!("expected overlay, got {other:?}"),
        }
    }

    #[test]
    fn absent_other_cargo_emits_no_overlay() {
        let assignments = map_filing(&FilingForm::empty());
        assert!(!checkbox_on(&assignments, "24ddBox"));
        assert!(!assignments.iter().any(|a| a.field() == "24ddOther"));
    }

    #[test]
    fn mailing_toggle_true_asserts_only_first_instance() {
        let assignments = map(json!({"line8_12": {"isSame": true}}));
        let instances: Vec<_> = assignments
            .iter()
            .filter(|a| a.field() == "Mailing Button")
            .collect();
        assert_eq!(instances.len(), 2);
        assert!(instances[0].is_on());
        assert!(!instances[1].is_on());
    }

    #[test]
    fn mailing_toggle_false_asserts_only_second_instance() {
        let assignments = map(json!({"line8_12": {"isSame": false}}));
        let instances: Vec<_> = assignments
            .iter()
            .filter(|a| a.field() == "Mailing Button")
            .collect();
        assert!(!instances[0].is_on());
        assert!(instances[1].is_on());
    }

    #[test]
    fn mailing_toggle_absent_asserts_neither_instance() {
        let assignments = map_filing(&FilingForm::empty());
        let instances: Vec<_> = assignments
            .iter()
            .filter(|a| a.field() == "Mailing Button")
            .collect();
        assert_eq!(instances.len(), 2);
        assert!(instances.iter().all(|a| !a.is_on()));
    }

    #[test]
    fn toggle_instances_carry_distinct_rects() {
        let assignments = map_filing(&FilingForm::empty());
        let rects: Vec<_> = assignments
            .iter()
            .filter_map(|a| match a {
                FieldAssignment::Checkbox {
                    field: "Mailing Button",
                    rect,
                    ..
                } => *rect,
                _ => None,
            })
            .collect();
        assert_eq!(rects.len(), 2);
        assert!(!rects[0].matches(&rects[1]));
    }

    #[test]
    fn driver_totals_become_overlays() {
        let assignments = map(json!({
            "line27": {
                "interstate_within_100_miles": "4",
                "total_drivers": "12",
                "total_cdl": "9"
            }
        }));
        assert_eq!(text_value(&assignments, "interWithin"), "4");
        match find(&assignments, "_totalDrivers") {
            FieldAssignment::Overlay { value, .. } => assert_eq!(value, "12"),
            other => panic!("expected overlay, got {other:?}"),
        }
        match find(&assignments, "_totalCDL") {
            FieldAssignment::Overlay { value, .. } => assert_eq!(value, "9"),
            other => panic!("expected overlay, got {other:?}"),
        }
    }

    #[test]
    fn fleet_counts_route_to_grid_cells() {
        let assignments = map(json!({
            "line26a": {"owntruck": "3", "trmtract": "1", "trplimo_16": "2"}
        }));
        assert_eq!(text_value(&assignments, "straightOwn"), "3");
        assert_eq!(text_value(&assignments, "tractorTerm"), "1");
        assert_eq!(text_value(&assignments, "limo16+Trip"), "2");
        assert_eq!(text_value(&assignments, "straightTrip"), "");
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let a = map(json!({"line1": "Acme", "lineBogus": {"x": 1}, "extra": true}));
        let b = map(json!({"line1": "Acme"}));
        assert_eq!(a, b);
    }

    #[test]
    fn mapping_is_deterministic() {
        let filing = FilingForm::from_value(json!({
            "line1": "Acme",
            "line22": "B",
            "line24": "Passengers",
            "line8_12": {"isSame": true}
        }))
        .unwrap();
        assert_eq!(map_filing(&filing), map_filing(&filing));
    }
}
