use std::path::Path;

use mcs150_render::read_template_fields;

use crate::cli::OutputFormat;

pub fn run(template: &Path, format: &OutputFormat) -> Result<(), i32> {
    let fields = read_template_fields(template).map_err(|e| {
        eprintln!("Error: {e}");
        1
    })?;

    match format {
        OutputFormat::Text => {
            println!("page\tname\ttype\tx0\ty0\tx1\ty1");
            for field in &fields {
                println!(
                    "{}\t{}\t{}\t{:.2}\t{:.2}\t{:.2}\t{:.2}",
                    field.page,
                    field.name,
                    field.kind,
                    field.rect.x0,
                    field.rect.y0,
                    field.rect.x1,
                    field.rect.y1,
                );
            }
        }
        OutputFormat::Json => {
            let json_str = serde_json::to_string(&fields).map_err(|e| {
                eprintln!("Error serializing fields: {e}");
                1
            })?;
            println!("{json_str}");
        }
    }

    Ok(())
}
