//! Removal of the template's leading instruction pages.

use lopdf::Document;
use mcs150_core::{INSTRUCTION_PAGE_COUNT, TEMPLATE_REVISION};

use crate::error::RenderError;

/// Delete the instruction pages at the front of the document, so the
/// output starts at the first form page.
///
/// Pages are deleted back-to-front so earlier deletions do not shift the
/// numbers of later ones, then orphaned objects are pruned before save.
pub(crate) fn trim_instruction_pages(doc: &mut Document) -> Result<(), RenderError> {
    let page_count = doc.get_pages().len() as u32;
    if page_count <= INSTRUCTION_PAGE_COUNT {
        return Err(RenderError::Template(format!(
            "expected more than {INSTRUCTION_PAGE_COUNT} pages for {TEMPLATE_REVISION}, \
             template has {page_count} pages"
        )));
    }

    for page in (1..=INSTRUCTION_PAGE_COUNT).rev() {
        doc.delete_pages(&[page]);
    }
    doc.prune_objects();
    doc.compress();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use lopdf::{Object, dictionary};

    // Build a minimal document with `num_pages` empty pages.
    fn blank_document(num_pages: u32) -> Document {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();

        let mut kids = Vec::new();
        for _ in 0..num_pages {
            let page = dictionary! {
                "Type" => "Page",
                "Parent" => Object::Reference(pages_id),
                "MediaBox" => vec![
                    Object::Integer(0),
                    Object::Integer(0),
                    Object::Integer(612),
                    Object::Integer(792),
                ],
            };
            kids.push(Object::Reference(doc.add_object(page)));
        }

        let pages = dictionary! {
            "Type" => "Pages",
            "Count" => num_pages as i64,
            "Kids" => kids,
        };
        doc.objects.insert(pages_id, Object::Dictionary(pages));

        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => Object::Reference(pages_id),
        });
        doc.trailer.set("Root", Object::Reference(catalog_id));
        doc
    }

    #[test]
    fn trims_leading_pages() {
        let mut doc = blank_document(10);
        trim_instruction_pages(&mut doc).unwrap();
        assert_eq!(doc.get_pages().len(), 2);
    }

    #[test]
    fn rejects_document_with_only_instruction_pages() {
        let mut doc = blank_document(8);
        let err = trim_instruction_pages(&mut doc).unwrap_err();
        assert!(matches!(err, RenderError::Template(_)));
        assert!(err.to_string().contains("8 pages"));
    }

    #[test]
    fn rejects_short_document() {
        let mut doc = blank_document(3);
        assert!(trim_instruction_pages(&mut doc).is_err());
    }

    #[test]
    fn keeps_trailing_pages_intact() {
        let mut doc = blank_document(9);
        trim_instruction_pages(&mut doc).unwrap();
        assert_eq!(doc.get_pages().len(), 1);
    }
}
