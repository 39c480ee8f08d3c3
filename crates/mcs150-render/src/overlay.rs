//! Synthetic overlay widgets.
//!
//! The template revision is missing a few text fields (the "other cargo"
//! description and the driver totals). These are created at render time
//! as new widget annotations at fixed rectangles, registered both in the
//! page's `/Annots` and the AcroForm `/Fields` array so viewers treat
//! them like any other field.

use lopdf::{Document, Object, ObjectId, dictionary};

use crate::acroform::{WidgetRecord, acroform_dict_mut};
use crate::error::RenderError;
use mcs150_core::Rect;

/// Create a text widget named `field` at `rect` on the anchor's page,
/// inheriting the anchor's default appearance so the overlaid value
/// renders in the same font as its neighbors.
pub(crate) fn add_overlay_field(
    doc: &mut Document,
    anchor: &WidgetRecord,
    field: &str,
    rect: &Rect,
    value: &str,
) -> Result<(), RenderError> {
    let mut widget = dictionary! {
        "Type" => "Annot",
        "Subtype" => "Widget",
        "FT" => "Tx",
        "T" => Object::string_literal(field),
        "Rect" => vec![
            Object::Real(rect.x0 as f32),
            Object::Real(rect.y0 as f32),
            Object::Real(rect.x1 as f32),
            Object::Real(rect.y1 as f32),
        ],
        "F" => 4,
        "P" => Object::Reference(anchor.page_id),
        "V" => Object::string_literal(value),
    };
    if let Some(da) = &anchor.appearance {
        widget.set("DA", da.clone());
    }

    let widget_id = doc.add_object(widget);
    append_to_page_annots(doc, anchor.page_id, widget_id)?;
    append_to_form_fields(doc, widget_id)?;
    Ok(())
}

fn append_to_page_annots(
    doc: &mut Document,
    page_id: ObjectId,
    widget_id: ObjectId,
) -> Result<(), RenderError> {
    let annots_ref = {
        let page_dict = doc
            .get_object(page_id)
            .and_then(|o| o.as_dict())
            .map_err(|e| RenderError::Template(format!("failed to read overlay page: {e}")))?;
        match page_dict.get(b"Annots") {
            Ok(Object::Reference(id)) => Some(*id),
            _ => None,
        }
    };

    match annots_ref {
        Some(id) => {
            let array = doc
                .get_object_mut(id)
                .and_then(|o| o.as_array_mut())
                .map_err(|e| RenderError::Template(format!("invalid annotation array: {e}")))?;
            array.push(Object::Reference(widget_id));
        }
        None => {
            let page_dict = doc
                .get_object_mut(page_id)
                .and_then(|o| o.as_dict_mut())
                .map_err(|e| RenderError::Template(format!("failed to update overlay page: {e}")))?;
            let has_inline_array = matches!(page_dict.get(b"Annots"), Ok(Object::Array(_)));
            if has_inline_array {
                if let Ok(Object::Array(array)) = page_dict.get_mut(b"Annots") {
                    array.push(Object::Reference(widget_id));
                }
            } else {
                page_dict.set("Annots", vec![Object::Reference(widget_id)]);
            }
        }
    }
    Ok(())
}

fn append_to_form_fields(doc: &mut Document, widget_id: ObjectId) -> Result<(), RenderError> {
    let fields_ref = {
        let acro = acroform_dict_mut(doc)?;
        let has_inline_array = matches!(acro.get(b"Fields"), Ok(Object::Array(_)));
        if has_inline_array {
            if let Ok(Object::Array(array)) = acro.get_mut(b"Fields") {
                array.push(Object::Reference(widget_id));
            }
            None
        } else {
            let existing = match acro.get(b"Fields") {
                Ok(Object::Reference(id)) => Some(*id),
                _ => None,
            };
            if existing.is_none() {
                acro.set("Fields", vec![Object::Reference(widget_id)]);
            }
            existing
        }
    };

    if let Some(id) = fields_ref {
        let array = doc
            .get_object_mut(id)
            .and_then(|o| o.as_array_mut())
            .map_err(|e| RenderError::Template(format!("invalid form field list: {e}")))?;
        array.push(Object::Reference(widget_id));
    }
    Ok(())
}
