//! mcs150-render: Fills the FMCSA MCS-150 template PDF from a filing.
//!
//! The render pipeline is: map the filing onto field assignments, load
//! the template, apply assignments to its AcroForm widgets (creating the
//! synthetic overlay fields the template lacks), drop the leading
//! instruction pages, and write the result atomically. A failed render
//! leaves nothing at the output path.

pub mod acroform;
pub mod error;
mod fill;
mod overlay;
mod trim;

use std::path::Path;

use lopdf::Document;
use tempfile::NamedTempFile;
use tracing::{debug, error};

use mcs150_core::{FilingForm, map_filing};

pub use acroform::read_template_fields;
pub use error::RenderError;

/// Render one filing into a filled, trimmed copy of the template.
///
/// All-or-nothing: the output file appears at `output_path` only when
/// every step succeeds. Failures are logged and returned; no partial
/// artifact is left behind.
pub fn render_filing_pdf(
    template_path: &Path,
    output_path: &Path,
    filing: &FilingForm,
) -> Result<(), RenderError> {
    match render_inner(template_path, output_path, filing) {
        Ok(()) => {
            debug!(output = %output_path.display(), "render complete");
            Ok(())
        }
        Err(e) => {
            error!(
                template = %template_path.display(),
                error = %e,
                "render failed"
            );
            Err(e)
        }
    }
}

fn render_inner(
    template_path: &Path,
    output_path: &Path,
    filing: &FilingForm,
) -> Result<(), RenderError> {
    let assignments = map_filing(filing);

    let mut doc = Document::load(template_path)
        .map_err(|e| RenderError::Template(format!("failed to load template: {e}")))?;
    if doc.is_encrypted() {
        return Err(RenderError::Template("template is encrypted".to_string()));
    }

    fill::apply_assignments(&mut doc, &assignments)?;
    trim::trim_instruction_pages(&mut doc)?;
    save_atomic(&mut doc, output_path)
}

/// Serialize into a temporary file next to the destination, then rename
/// into place. Readers never observe a half-written output.
fn save_atomic(doc: &mut Document, output_path: &Path) -> Result<(), RenderError> {
    let parent = match output_path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(parent)?;
    doc.save_to(&mut tmp)
        .map_err(|e| RenderError::Render(format!("failed to serialize output: {e}")))?;
    tmp.persist(output_path).map_err(|e| e.error)?;
    Ok(())
}
