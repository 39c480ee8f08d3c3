//! Applying mapped assignments to the template document.

use std::collections::HashMap;

use lopdf::{Dictionary, Document, Object};
use mcs150_core::FieldAssignment;
use tracing::debug;

use crate::acroform::{WidgetRecord, acroform_dict_mut, collect_widgets};
use crate::error::RenderError;
use crate::overlay::add_overlay_field;

/// Apply every assignment to the document, broadcast-by-name.
///
/// Assignments naming a field the template lacks are skipped (the table
/// stays one revision ahead of some deployed templates); a missing overlay
/// anchor is an error, since the overlay cannot be positioned without it.
pub(crate) fn apply_assignments(
    doc: &mut Document,
    assignments: &[FieldAssignment],
) -> Result<(), RenderError> {
    let widgets = collect_widgets(doc)?;
    let mut by_name: HashMap<&str, Vec<usize>> = HashMap::new();
    for (i, widget) in widgets.iter().enumerate() {
        by_name.entry(widget.name.as_str()).or_default().push(i);
    }

    for assignment in assignments {
        match assignment {
            FieldAssignment::Text { field, value } => {
                let Some(indices) = by_name.get(field) else {
                    debug!(field, "template has no widget for text assignment");
                    continue;
                };
                for &i in indices {
                    set_text_value(doc, &widgets[i], value)?;
                }
            }
            FieldAssignment::Checkbox { field, on, rect } => {
                if !on {
                    continue;
                }
                let Some(indices) = by_name.get(field) else {
                    debug!(field, "template has no widget for checkbox assignment");
                    continue;
                };
                for &i in indices {
                    let widget = &widgets[i];
                    if let Some(expected) = rect {
                        match widget.rect {
                            Some(actual) if expected.matches(&actual) => {}
                            _ => continue,
                        }
                    }
                    set_checkbox_on(doc, widget)?;
                }
            }
            FieldAssignment::Overlay {
                field,
                anchor,
                rect,
                value,
            } => {
                let anchor_widget = widgets
                    .iter()
                    .find(|w| w.name == *anchor)
                    .ok_or_else(|| RenderError::MissingField((*anchor).to_string()))?;
                add_overlay_field(doc, anchor_widget, field, rect, value)?;
            }
        }
    }

    set_need_appearances(doc)
}

fn widget_dict_mut<'a>(
    doc: &'a mut Document,
    widget: &WidgetRecord,
) -> Result<&'a mut Dictionary, RenderError> {
    doc.get_object_mut(widget.id)
        .and_then(|o| o.as_dict_mut())
        .map_err(|e| RenderError::Template(format!("failed to update field {}: {e}", widget.name)))
}

fn set_text_value(
    doc: &mut Document,
    widget: &WidgetRecord,
    value: &str,
) -> Result<(), RenderError> {
    let dict = widget_dict_mut(doc, widget)?;
    dict.set("V", Object::string_literal(value));
    Ok(())
}

fn set_checkbox_on(doc: &mut Document, widget: &WidgetRecord) -> Result<(), RenderError> {
    let dict = widget_dict_mut(doc, widget)?;
    dict.set("V", Object::Name(widget.on_state.clone()));
    dict.set("AS", Object::Name(widget.on_state.clone()));
    Ok(())
}

/// Ask viewers to regenerate field appearance streams, since the filled
/// values have none of their own.
fn set_need_appearances(doc: &mut Document) -> Result<(), RenderError> {
    let acro = acroform_dict_mut(doc)?;
    acro.set("NeedAppearances", Object::Boolean(true));
    Ok(())
}
