//! mcs150-core: Backend-independent data model for MCS-150 form rendering.
//!
//! This crate provides the filing payload type ([`FilingForm`]), the static
//! field mapping table ([`table`]), and the mapper that turns one filing
//! into the ordered assignment sequence a renderer applies to the template.
//! It performs no I/O and knows nothing about PDF internals beyond field
//! names and widget rectangles.

pub mod error;
pub mod field;
pub mod filing;
pub mod geometry;
pub mod mapper;
pub mod table;

pub use error::FilingError;
pub use field::{FieldAssignment, FieldKind, TemplateField};
pub use filing::{FieldPath, FilingForm};
pub use geometry::Rect;
pub use mapper::map_filing;
pub use table::{INSTRUCTION_PAGE_COUNT, TEMPLATE_REVISION};
