use std::fs;
use std::path::Path;

use mcs150_core::FilingForm;
use mcs150_render::render_filing_pdf;

pub fn run(filing_path: &Path, template: &Path, out: &Path) -> Result<(), i32> {
    let payload = fs::read_to_string(filing_path).map_err(|e| {
        eprintln!("Error reading {}: {e}", filing_path.display());
        1
    })?;

    let filing = FilingForm::from_json_str(&payload).map_err(|e| {
        eprintln!("Error: {e}");
        1
    })?;

    render_filing_pdf(template, out, &filing).map_err(|e| {
        eprintln!("Error: {e}");
        1
    })?;

    println!("Wrote {}", out.display());
    Ok(())
}
