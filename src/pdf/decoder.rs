//! Reading page geometry out of PDF files
//!
//! The scanner only needs three things from a PDF library: open a file, count
//! its pages, and read one page's size. [`PdfDecoder`] and [`PageSource`] are
//! that seam; [`LopdfDecoder`] fills it with `lopdf`.

use std::path::Path;
use lopdf::{Dictionary, Document, Object, ObjectId};
use crate::error::{Error, Result};
use crate::size::PageSize;

/// Maximum number of `/Parent` hops followed when resolving inherited attributes
const MAX_TREE_DEPTH: usize = 64;

/// Opens PDF files for page inspection
pub trait PdfDecoder {
    type Document: PageSource;

    /// Open and decode the file at `path`
    fn open(&self, path: &Path) -> Result<Self::Document>;
}

/// An opened document whose pages can be measured
pub trait PageSource {
    fn page_count(&self) -> usize;

    /// Size of the page at 1-based `index`
    fn page_size(&self, index: usize) -> Result<PageSize>;
}

/// [`PdfDecoder`] backed by `lopdf`
#[derive(Debug, Clone, Copy, Default)]
pub struct LopdfDecoder;

impl PdfDecoder for LopdfDecoder {
    type Document = LopdfDocument;

    fn open(&self, path: &Path) -> Result<LopdfDocument> {
        let doc = Document::load(path).map_err(|e| Error::decode(path, e))?;
        let page_ids = doc.get_pages().into_values().collect();
        Ok(LopdfDocument { doc, page_ids })
    }
}

/// A loaded `lopdf` document with its pages in order
pub struct LopdfDocument {
    doc: Document,
    page_ids: Vec<ObjectId>,
}

impl PageSource for LopdfDocument {
    fn page_count(&self) -> usize {
        self.page_ids.len()
    }

    fn page_size(&self, index: usize) -> Result<PageSize> {
        let count = self.page_count();
        let page_id = index
            .checked_sub(1)
            .and_then(|i| self.page_ids.get(i))
            .copied()
            .ok_or(Error::PageOutOfRange { index, count })?;

        let page = self.doc.get_dictionary(page_id).map_err(|e| Error::InvalidPage {
            page: index,
            reason: e.to_string(),
        })?;

        let invalid = |reason: String| Error::InvalidPage { page: index, reason };

        let media_box = self
            .inherited(page, b"MediaBox")
            .map_err(|e| invalid(format!("cannot resolve MediaBox: {}", e)))?
            .ok_or_else(|| invalid("no MediaBox".to_string()))?;
        let (width, height) = self.box_dimensions(media_box).map_err(invalid)?;

        let rotation = match self
            .inherited(page, b"Rotate")
            .map_err(|e| invalid(format!("cannot resolve Rotate: {}", e)))?
        {
            Some(rotate) => rotation_degrees(rotate)
                .ok_or_else(|| invalid(format!("Rotate is not a number: {:?}", rotate)))?,
            None => 0,
        };

        Ok(PageSize::new(width, height, normalize_rotation(rotation)))
    }
}

impl LopdfDocument {
    /// Follow a reference to the object it points at
    fn resolve<'a>(&'a self, obj: &'a Object) -> std::result::Result<&'a Object, lopdf::Error> {
        match obj {
            Object::Reference(id) => self.doc.get_object(*id),
            other => Ok(other),
        }
    }

    /// Look up `key` on the page, falling back to its ancestors in the page tree
    ///
    /// `Ok(None)` when no node in the chain has the key. A reference that
    /// points nowhere, on the key or on a `/Parent` link, is an error.
    fn inherited<'a>(
        &'a self,
        page: &'a Dictionary,
        key: &[u8],
    ) -> std::result::Result<Option<&'a Object>, lopdf::Error> {
        let mut node = page;
        for _ in 0..MAX_TREE_DEPTH {
            if let Ok(value) = node.get(key) {
                return self.resolve(value).map(Some);
            }
            let parent_id = match node.get(b"Parent").and_then(Object::as_reference) {
                Ok(id) => id,
                Err(_) => return Ok(None),
            };
            node = self.doc.get_dictionary(parent_id)?;
        }
        Ok(None)
    }

    /// Width and height of a `[llx lly urx ury]` rectangle
    fn box_dimensions(&self, rect: &Object) -> std::result::Result<(f64, f64), String> {
        let not_a_rect = || format!("MediaBox is not four numbers: {:?}", rect);
        let items = rect.as_array().map_err(|_| not_a_rect())?;
        if items.len() != 4 {
            return Err(not_a_rect());
        }

        // lopdf stores reals as f32, so coordinates carry f32 precision
        let mut coords = [0f64; 4];
        for (slot, item) in coords.iter_mut().zip(items) {
            let value = self
                .resolve(item)
                .map_err(|e| format!("cannot resolve MediaBox entry: {}", e))?;
            *slot = value.as_float().map_err(|_| not_a_rect())? as f64;
        }

        let [llx, lly, urx, ury] = coords;
        Ok(((urx - llx).abs(), (ury - lly).abs()))
    }
}

/// Read a `/Rotate` value, truncating reals toward zero
fn rotation_degrees(value: &Object) -> Option<i64> {
    match value {
        Object::Integer(n) => Some(*n),
        Object::Real(r) => Some(*r as i64),
        _ => None,
    }
}

/// Bring a `/Rotate` value into 0, 90, 180 or 270
pub fn normalize_rotation(degrees: i64) -> i64 {
    degrees.rem_euclid(360)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lopdf::dictionary;

    /// Build a document with a page tree carrying `tree_attrs` and the given pages
    fn document(tree_attrs: Dictionary, pages: Vec<Dictionary>) -> LopdfDocument {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();

        let kids: Vec<Object> = pages
            .into_iter()
            .map(|mut page| {
                page.set("Type", Object::Name(b"Page".to_vec()));
                page.set("Parent", Object::Reference(pages_id));
                Object::Reference(doc.add_object(page))
            })
            .collect();

        let mut tree = tree_attrs;
        tree.set("Type", Object::Name(b"Pages".to_vec()));
        tree.set("Count", Object::Integer(kids.len() as i64));
        tree.set("Kids", Object::Array(kids));
        doc.objects.insert(pages_id, Object::Dictionary(tree));

        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => Object::Reference(pages_id),
        });
        doc.trailer.set("Root", Object::Reference(catalog_id));

        let page_ids = doc.get_pages().into_values().collect();
        LopdfDocument { doc, page_ids }
    }

    fn media_box(llx: i64, lly: i64, urx: i64, ury: i64) -> Object {
        Object::Array(vec![
            Object::Integer(llx),
            Object::Integer(lly),
            Object::Integer(urx),
            Object::Integer(ury),
        ])
    }

    #[test]
    fn test_page_with_own_media_box() {
        let doc = document(
            Dictionary::new(),
            vec![dictionary! { "MediaBox" => media_box(0, 0, 612, 792) }],
        );

        assert_eq!(doc.page_count(), 1);
        assert_eq!(doc.page_size(1).unwrap(), PageSize::new(612.0, 792.0, 0));
    }

    #[test]
    fn test_inherited_media_box_and_rotation() {
        let doc = document(
            dictionary! {
                "MediaBox" => media_box(0, 0, 595, 842),
                "Rotate" => Object::Integer(90),
            },
            vec![
                Dictionary::new(),
                dictionary! { "Rotate" => Object::Integer(0) },
            ],
        );

        assert_eq!(doc.page_size(1).unwrap(), PageSize::new(595.0, 842.0, 90));
        assert_eq!(doc.page_size(2).unwrap(), PageSize::new(595.0, 842.0, 0));
    }

    #[test]
    fn test_real_rotate() {
        let doc = document(
            Dictionary::new(),
            vec![
                dictionary! {
                    "MediaBox" => media_box(0, 0, 612, 792),
                    "Rotate" => Object::Real(90.0),
                },
                dictionary! {
                    "MediaBox" => media_box(0, 0, 612, 792),
                    "Rotate" => Object::Real(-90.0),
                },
            ],
        );

        assert_eq!(doc.page_size(1).unwrap(), PageSize::new(612.0, 792.0, 90));
        assert_eq!(doc.page_size(2).unwrap(), PageSize::new(612.0, 792.0, 270));
    }

    #[test]
    fn test_non_numeric_rotate() {
        let doc = document(
            Dictionary::new(),
            vec![dictionary! {
                "MediaBox" => media_box(0, 0, 612, 792),
                "Rotate" => "Ninety",
            }],
        );

        match doc.page_size(1) {
            Err(Error::InvalidPage { page: 1, reason }) => assert!(reason.contains("Rotate")),
            other => panic!("expected invalid page, got {:?}", other),
        }
    }

    #[test]
    fn test_dangling_rotate_reference() {
        let doc = document(
            Dictionary::new(),
            vec![dictionary! {
                "MediaBox" => media_box(0, 0, 612, 792),
                "Rotate" => Object::Reference((999, 0)),
            }],
        );

        match doc.page_size(1) {
            Err(Error::InvalidPage { page: 1, reason }) => {
                assert!(reason.starts_with("cannot resolve Rotate"), "unexpected reason: {}", reason)
            }
            other => panic!("expected invalid page, got {:?}", other),
        }
    }

    #[test]
    fn test_dangling_media_box_reference() {
        let doc = document(
            Dictionary::new(),
            vec![dictionary! { "MediaBox" => Object::Reference((999, 0)) }],
        );

        match doc.page_size(1) {
            Err(Error::InvalidPage { page: 1, reason }) => {
                assert!(reason.starts_with("cannot resolve MediaBox"), "unexpected reason: {}", reason)
            }
            other => panic!("expected invalid page, got {:?}", other),
        }
    }

    #[test]
    fn test_real_coordinates_keep_f32_precision() {
        let doc = document(
            Dictionary::new(),
            vec![dictionary! {
                "MediaBox" => vec![
                    Object::Integer(0),
                    Object::Integer(0),
                    Object::Real(595.28),
                    Object::Real(841.89),
                ],
            }],
        );

        let size = doc.page_size(1).unwrap();
        assert_eq!(size.width_points, 595.28f32 as f64);
        assert_eq!(size.height_points, 841.89f32 as f64);
    }

    #[test]
    fn test_offset_and_inverted_boxes_are_normalized() {
        let doc = document(
            Dictionary::new(),
            vec![
                dictionary! { "MediaBox" => media_box(10, 20, 622, 812) },
                dictionary! { "MediaBox" => media_box(612, 792, 0, 0) },
            ],
        );

        assert_eq!(doc.page_size(1).unwrap(), PageSize::new(612.0, 792.0, 0));
        assert_eq!(doc.page_size(2).unwrap(), PageSize::new(612.0, 792.0, 0));
    }

    #[test]
    fn test_real_coordinates() {
        let doc = document(
            Dictionary::new(),
            vec![dictionary! {
                "MediaBox" => vec![
                    Object::Integer(0),
                    Object::Integer(0),
                    Object::Real(612.5),
                    Object::Real(792.25),
                ],
            }],
        );

        assert_eq!(doc.page_size(1).unwrap(), PageSize::new(612.5, 792.25, 0));
    }

    #[test]
    fn test_missing_media_box() {
        let doc = document(Dictionary::new(), vec![Dictionary::new()]);
        let err = doc.page_size(1).unwrap_err();
        assert!(matches!(err, Error::InvalidPage { page: 1, .. }));
    }

    #[test]
    fn test_short_media_box() {
        let doc = document(
            Dictionary::new(),
            vec![dictionary! { "MediaBox" => vec![Object::Integer(0), Object::Integer(0), Object::Integer(612)] }],
        );
        assert!(matches!(doc.page_size(1), Err(Error::InvalidPage { .. })));
    }

    #[test]
    fn test_page_index_out_of_range() {
        let doc = document(
            Dictionary::new(),
            vec![dictionary! { "MediaBox" => media_box(0, 0, 612, 792) }],
        );

        assert!(matches!(doc.page_size(0), Err(Error::PageOutOfRange { index: 0, count: 1 })));
        assert!(matches!(doc.page_size(2), Err(Error::PageOutOfRange { index: 2, count: 1 })));
    }

    #[test]
    fn test_normalize_rotation() {
        assert_eq!(normalize_rotation(0), 0);
        assert_eq!(normalize_rotation(270), 270);
        assert_eq!(normalize_rotation(-90), 270);
        assert_eq!(normalize_rotation(450), 90);
        assert_eq!(normalize_rotation(360), 0);
    }

    #[test]
    fn test_open_nonexistent_file() {
        let result = LopdfDecoder.open(Path::new("nonexistent.pdf"));
        assert!(matches!(result, Err(Error::Decode { .. })));
    }
}
