use crate::citations::Citation;

/// A highlight rectangle in rendered-page pixels, ready to be positioned
/// absolutely over the page image.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HighlightRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// Projects citation bounding boxes onto the page currently on screen. Only
/// citations whose document url and page number match the viewer are kept.
/// Boxes are stored in unscaled page coordinates; the projection is a uniform
/// multiply by `scale`, so the overlay tracks zoom exactly. Yields nothing
/// when no document is shown. Recomputed on every render pass; the citation
/// counts involved are small enough that caching would not pay for itself.
pub fn project_highlights(
    citations: &[Citation],
    document_url: Option<&str>,
    current_page: u32,
    scale: f32,
) -> Vec<HighlightRect> {
    let Some(url) = document_url else {
        return Vec::new();
    };

    citations
        .iter()
        .filter(|citation| citation.document_url == url && citation.page_number == current_page)
        .flat_map(|citation| citation.bounding_boxes.iter())
        .map(|rect| HighlightRect {
            x: rect.x * scale,
            y: rect.y * scale,
            width: rect.width * scale,
            height: rect.height * scale,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::citations::BoundingBox;

    fn citation_on(url: &str, page_number: u32, boxes: Vec<BoundingBox>) -> Citation {
        Citation {
            id: "cite-1".to_string(),
            document_id: "1".to_string(),
            document_name: "report.pdf".to_string(),
            document_url: url.to_string(),
            page_number,
            text: "cited passage".to_string(),
            bounding_boxes: boxes,
        }
    }

    #[test]
    fn no_document_yields_no_highlights() {
        let citation = citation_on(
            "/document/1/file",
            1,
            vec![BoundingBox {
                x: 1.0,
                y: 2.0,
                width: 3.0,
                height: 4.0,
            }],
        );
        assert!(project_highlights(&[citation], None, 1, 1.0).is_empty());
        assert!(project_highlights(&[], Some("/document/1/file"), 1, 1.0).is_empty());
    }

    #[test]
    fn other_document_yields_no_highlights() {
        let citation = citation_on(
            "/document/2/file",
            1,
            vec![BoundingBox {
                x: 1.0,
                y: 2.0,
                width: 3.0,
                height: 4.0,
            }],
        );
        assert!(project_highlights(&[citation], Some("/document/1/file"), 1, 1.0).is_empty());
    }

    #[test]
    fn other_page_yields_no_highlights() {
        let citation = citation_on(
            "/document/1/file",
            4,
            vec![BoundingBox {
                x: 1.0,
                y: 2.0,
                width: 3.0,
                height: 4.0,
            }],
        );
        assert!(project_highlights(&[citation], Some("/document/1/file"), 3, 1.0).is_empty());
    }

    #[test]
    fn boxes_scale_uniformly_with_zoom() {
        let citations = [citation_on(
            "/document/1/file",
            2,
            vec![BoundingBox {
                x: 12.0,
                y: 24.0,
                width: 36.0,
                height: 48.0,
            }],
        )];

        let at_unit = project_highlights(&citations, Some("/document/1/file"), 2, 1.0);
        assert_eq!(
            at_unit,
            vec![HighlightRect {
                x: 12.0,
                y: 24.0,
                width: 36.0,
                height: 48.0,
            }]
        );

        let zoomed = project_highlights(&citations, Some("/document/1/file"), 2, 1.5);
        assert_eq!(
            zoomed,
            vec![HighlightRect {
                x: 18.0,
                y: 36.0,
                width: 54.0,
                height: 72.0,
            }]
        );
    }

    #[test]
    fn gathers_matching_citations_across_the_conversation() {
        let citations = [
            citation_on(
                "/document/1/file",
                1,
                vec![BoundingBox {
                    x: 0.0,
                    y: 0.0,
                    width: 10.0,
                    height: 5.0,
                }],
            ),
            citation_on(
                "/document/1/file",
                1,
                vec![BoundingBox {
                    x: 0.0,
                    y: 8.0,
                    width: 7.0,
                    height: 5.0,
                }],
            ),
            citation_on(
                "/document/2/file",
                1,
                vec![BoundingBox {
                    x: 99.0,
                    y: 99.0,
                    width: 1.0,
                    height: 1.0,
                }],
            ),
        ];

        let rects = project_highlights(&citations, Some("/document/1/file"), 1, 2.0);
        assert_eq!(rects.len(), 2);
        assert_eq!(rects[1].y, 16.0);
        assert_eq!(rects[1].width, 14.0);
    }
}
