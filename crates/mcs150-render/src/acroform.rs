//! AcroForm widget discovery.
//!
//! Walks every page's `/Annots` array and records each widget annotation:
//! its object id, page, field name, kind, rectangle, checkbox on-state,
//! and default appearance string. The fill pass works entirely from these
//! records, so the document is only borrowed mutably during updates.

use std::path::Path;

use lopdf::{Dictionary, Document, Object, ObjectId};
use mcs150_core::{FieldKind, Rect, TemplateField};

use crate::error::RenderError;

/// One widget annotation found in the template.
#[derive(Debug, Clone)]
pub(crate) struct WidgetRecord {
    /// Object id of the widget annotation dictionary.
    pub id: ObjectId,
    /// 1-based page number the widget sits on.
    pub page: u32,
    /// Object id of the page dictionary.
    pub page_id: ObjectId,
    /// Field name from `/T`, falling back to the parent field's `/T`.
    pub name: String,
    /// Field kind from `/FT` (own or inherited), if recognized.
    pub kind: Option<FieldKind>,
    /// Widget rectangle from `/Rect`.
    pub rect: Option<Rect>,
    /// The non-`Off` appearance state name for checkboxes.
    pub on_state: Vec<u8>,
    /// Default appearance string from `/DA`, own or inherited.
    pub appearance: Option<Object>,
}

/// Collect every named widget annotation in the document, in page order.
pub(crate) fn collect_widgets(doc: &Document) -> Result<Vec<WidgetRecord>, RenderError> {
    let pages_map = doc.get_pages();
    let mut widgets = Vec::new();

    for (&page, &page_id) in &pages_map {
        let page_dict = doc
            .get_object(page_id)
            .and_then(|o| o.as_dict())
            .map_err(|e| RenderError::Template(format!("failed to read page {page}: {e}")))?;

        let annots_obj = match page_dict.get(b"Annots") {
            Ok(obj) => obj,
            Err(_) => continue,
        };
        let annots = match resolve_ref(doc, annots_obj).as_array() {
            Ok(arr) => arr,
            Err(_) => continue,
        };

        for annot in annots {
            let annot_id = match annot {
                Object::Reference(id) => *id,
                _ => continue,
            };
            let dict = match doc.get_object(annot_id).and_then(|o| o.as_dict()) {
                Ok(dict) => dict,
                Err(_) => continue,
            };
            let is_widget = matches!(
                dict.get(b"Subtype"),
                Ok(Object::Name(name)) if name.as_slice() == b"Widget"
            );
            if !is_widget {
                continue;
            }

            // A widget that is a kid of a field dictionary carries no /T
            // or /FT of its own; those live on the parent.
            let parent = dict
                .get(b"Parent")
                .ok()
                .and_then(|o| o.as_reference().ok())
                .and_then(|id| doc.get_object(id).ok())
                .and_then(|o| o.as_dict().ok());

            let name = match string_entry(doc, dict, b"T")
                .or_else(|| parent.and_then(|p| string_entry(doc, p, b"T")))
            {
                Some(name) => name,
                None => continue,
            };
            let kind = name_entry(dict, b"FT")
                .or_else(|| parent.and_then(|p| name_entry(p, b"FT")))
                .and_then(|n| FieldKind::from_pdf_name(&n));
            let rect = dict
                .get(b"Rect")
                .ok()
                .map(|o| resolve_ref(doc, o))
                .and_then(|o| o.as_array().ok())
                .and_then(|arr| rect_from_array(arr));
            let appearance = dict
                .get(b"DA")
                .ok()
                .or_else(|| parent.and_then(|p| p.get(b"DA").ok()))
                .cloned();

            widgets.push(WidgetRecord {
                id: annot_id,
                page,
                page_id,
                name,
                kind,
                rect,
                on_state: checkbox_on_state(doc, dict),
                appearance,
            });
        }
    }

    Ok(widgets)
}

/// Read the named widgets of a template from disk.
pub fn read_template_fields(path: &Path) -> Result<Vec<TemplateField>, RenderError> {
    let doc = Document::load(path)
        .map_err(|e| RenderError::Template(format!("failed to load template: {e}")))?;
    let widgets = collect_widgets(&doc)?;
    Ok(widgets
        .into_iter()
        .filter_map(|w| {
            Some(TemplateField {
                name: w.name,
                kind: w.kind?,
                page: w.page,
                rect: w.rect?,
            })
        })
        .collect())
}

/// The document's AcroForm dictionary, for mutation. Handles both an
/// indirect `/AcroForm` reference and an inline dictionary in the catalog.
pub(crate) fn acroform_dict_mut(doc: &mut Document) -> Result<&mut Dictionary, RenderError> {
    let root_id = doc
        .trailer
        .get(b"Root")
        .and_then(|o| o.as_reference())
        .map_err(|e| RenderError::Template(format!("missing document catalog: {e}")))?;

    let acro_id = {
        let catalog = doc
            .get_object(root_id)
            .and_then(|o| o.as_dict())
            .map_err(|e| RenderError::Template(format!("invalid document catalog: {e}")))?;
        match catalog.get(b"AcroForm") {
            Ok(Object::Reference(id)) => Some(*id),
            Ok(_) => None,
            Err(_) => {
                return Err(RenderError::Template(
                    "template has no interactive form".to_string(),
                ));
            }
        }
    };

    let dict = match acro_id {
        Some(id) => doc
            .get_object_mut(id)
            .and_then(|o| o.as_dict_mut())
            .map_err(|e| RenderError::Template(format!("invalid form dictionary: {e}")))?,
        None => doc
            .get_object_mut(root_id)
            .and_then(|o| o.as_dict_mut())
            .and_then(|d| d.get_mut(b"AcroForm"))
            .and_then(|o| o.as_dict_mut())
            .map_err(|e| RenderError::Template(format!("invalid form dictionary: {e}")))?,
    };
    Ok(dict)
}

/// Follow a reference to its target object, or return the object as-is.
pub(crate) fn resolve_ref<'a>(doc: &'a Document, obj: &'a Object) -> &'a Object {
    match obj {
        Object::Reference(id) => doc.get_object(*id).unwrap_or(obj),
        _ => obj,
    }
}

fn string_entry(doc: &Document, dict: &Dictionary, key: &[u8]) -> Option<String> {
    match resolve_ref(doc, dict.get(key).ok()?) {
        Object::String(bytes, _) => Some(decode_pdf_string(bytes)),
        _ => None,
    }
}

fn name_entry(dict: &Dictionary, key: &[u8]) -> Option<String> {
    match dict.get(key) {
        Ok(Object::Name(name)) => Some(String::from_utf8_lossy(name).into_owned()),
        _ => None,
    }
}

/// Convert a lopdf numeric object (Integer or Real) to f64.
fn object_to_f64(obj: &Object) -> Option<f64> {
    match obj {
        Object::Integer(i) => Some(*i as f64),
        Object::Real(f) => Some(*f as f64),
        _ => None,
    }
}

fn rect_from_array(array: &[Object]) -> Option<Rect> {
    if array.len() != 4 {
        return None;
    }
    Some(Rect::new(
        object_to_f64(&array[0])?,
        object_to_f64(&array[1])?,
        object_to_f64(&array[2])?,
        object_to_f64(&array[3])?,
    ))
}

/// The on-state name of a checkbox widget: the non-`Off` key of its
/// `/AP /N` appearance subdictionary. The template's boxes all use `1`,
/// which doubles as the fallback when no appearance streams exist.
fn checkbox_on_state(doc: &Document, dict: &Dictionary) -> Vec<u8> {
    let state = dict
        .get(b"AP")
        .ok()
        .map(|o| resolve_ref(doc, o))
        .and_then(|o| o.as_dict().ok())
        .and_then(|ap| ap.get(b"N").ok())
        .map(|o| resolve_ref(doc, o))
        .and_then(|o| o.as_dict().ok())
        .and_then(|normal| {
            normal
                .iter()
                .map(|(key, _)| key.clone())
                .find(|key| key.as_slice() != b"Off")
        });
    state.unwrap_or_else(|| b"1".to_vec())
}

fn decode_pdf_string(bytes: &[u8]) -> String {
    if bytes.len() >= 2 && bytes[0] == 0xFE && bytes[1] == 0xFF {
        // UTF-16 BE
        let chars: Vec<u16> = bytes[2..]
            .chunks(2)
            .filter_map(|c| {
                if c.len() == 2 {
                    Some(u16::from_be_bytes([c[0], c[1]]))
                } else {
                    None
                }
            })
            .collect();
        String::from_utf16_lossy(&chars)
    } else {
        String::from_utf8_lossy(bytes).into_owned()
    }
}
