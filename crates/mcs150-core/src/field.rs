//! Field assignment and template field types.
//!
//! [`FieldAssignment`] is the mapper's output: one value routed to a named
//! template field, or overlaid as a new synthetic field. [`TemplateField`]
//! describes a named interactive widget found in the template, as reported
//! by the renderer's widget walk.

use crate::geometry::Rect;

/// The kind of interactive widget a value targets.
///
/// Corresponds to the `/FT` entry in a field dictionary. The MCS-150
/// template only uses text fields (`/Tx`) and checkboxes (`/Btn`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FieldKind {
    /// Text field (`/FT /Tx`).
    Text,
    /// Checkbox (`/FT /Btn`).
    Checkbox,
}

impl FieldKind {
    /// Parse a field kind from its PDF name string.
    ///
    /// Returns `None` for field types the template does not use.
    pub fn from_pdf_name(name: &str) -> Option<Self> {
        match name {
            "Tx" => Some(Self::Text),
            "Btn" => Some(Self::Checkbox),
            _ => None,
        }
    }

    /// The PDF name string for this field kind.
    pub fn as_pdf_name(&self) -> &'static str {
        match self {
            Self::Text => "Tx",
            Self::Checkbox => "Btn",
        }
    }
}

impl std::fmt::Display for FieldKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text => write!(f, "Text"),
            Self::Checkbox => write!(f, "Checkbox"),
        }
    }
}

/// One value routed to a target field for a single render.
///
/// Application is broadcast-by-name: every widget instance sharing the
/// field name receives the same value. A `Checkbox` carrying a rect
/// narrows the update to the one instance at that rectangle, which is how
/// two same-named toggle boxes receive opposite values.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldAssignment {
    /// Set a text widget's value.
    Text { field: &'static str, value: String },
    /// Assert a checkbox (`on = true`) or leave it at the template's
    /// unset default (`on = false`).
    Checkbox {
        field: &'static str,
        on: bool,
        rect: Option<Rect>,
    },
    /// Create a synthetic text widget at `rect`, on the page of the
    /// `anchor` field and inheriting its display attributes.
    Overlay {
        field: &'static str,
        anchor: &'static str,
        rect: Rect,
        value: String,
    },
}

impl FieldAssignment {
    /// The target field name.
    pub fn field(&self) -> &'static str {
        match self {
            Self::Text { field, .. } => field,
            Self::Checkbox { field, .. } => field,
            Self::Overlay { field, .. } => field,
        }
    }

    /// True for a checkbox assignment that asserts its box.
    pub fn is_on(&self) -> bool {
        matches!(self, Self::Checkbox { on: true, .. })
    }
}

/// A named interactive widget located in the template.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TemplateField {
    /// Field name from `/T` (or the parent field's `/T`).
    pub name: String,
    /// Widget kind from `/FT`.
    pub kind: FieldKind,
    /// 1-based page number.
    pub page: u32,
    /// Bounding rectangle from `/Rect`.
    pub rect: Rect,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_kind_from_pdf_name() {
        assert_eq!(FieldKind::from_pdf_name("Tx"), Some(FieldKind::Text));
        assert_eq!(FieldKind::from_pdf_name("Btn"), Some(FieldKind::Checkbox));
        assert_eq!(FieldKind::from_pdf_name("Sig"), None);
    }

    #[test]
    fn field_kind_as_pdf_name() {
        assert_eq!(FieldKind::Text.as_pdf_name(), "Tx");
        assert_eq!(FieldKind::Checkbox.as_pdf_name(), "Btn");
    }

    #[test]
    fn field_kind_display() {
        assert_eq!(format!("{}", FieldKind::Text), "Text");
        assert_eq!(format!("{}", FieldKind::Checkbox), "Checkbox");
    }

    #[test]
    fn assignment_field_name() {
        let text = FieldAssignment::Text {
            field: "1bizName",
            value: "Acme".to_string(),
        };
        assert_eq!(text.field(), "1bizName");

        let check = FieldAssignment::Checkbox {
            field: "22cBox",
            on: true,
            rect: None,
        };
        assert_eq!(check.field(), "22cBox");
        assert!(check.is_on());

        let overlay = FieldAssignment::Overlay {
            field: "24ddOther",
            anchor: "24ddDescribe",
            rect: Rect::new(484.0, 244.25, 591.0, 265.25),
            value: "Scrap tires".to_string(),
        };
        assert_eq!(overlay.field(), "24ddOther");
        assert!(!overlay.is_on());
    }

    #[test]
    fn off_checkbox_is_not_on() {
        let check = FieldAssignment::Checkbox {
            field: "22aBox",
            on: false,
            rect: None,
        };
        assert!(!check.is_on());
    }
}
