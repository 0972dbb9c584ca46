use serde::Deserialize;

/// One rectangle of a cited passage, in unscaled document points.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct BoundingBox {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// A structured reference from an assistant reply to a passage of a source
/// document. Attached to the message that produced it and never mutated
/// afterwards; several citations may point into the same document.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Citation {
    pub id: String,
    pub document_id: String,
    pub document_name: String,
    pub document_url: String,
    /// 1-based page number inside the cited document.
    pub page_number: u32,
    pub text: String,
    pub bounding_boxes: Vec<BoundingBox>,
}

/// A renderable slice of an assistant message: either plain text or a
/// clickable reference to one of the message's citations.
#[derive(Debug, Clone, PartialEq)]
pub enum MessageSegment {
    Text(String),
    Reference {
        /// The literal marker text, e.g. `"[1]"`.
        marker: String,
        /// Index into the message's citation list.
        index: usize,
    },
}

impl MessageSegment {
    fn text(run: &str) -> Self {
        Self::Text(run.to_string())
    }
}

/// Splits assistant message content into literal runs and citation
/// references. Markers look like `[3]` and resolve positionally: `[n]` refers
/// to `citations[n - 1]`. A marker whose number is zero or beyond the citation
/// list becomes a literal segment of its own; the caller never sees an error
/// for it.
///
/// Concatenating the literal text of all `Text` segments with the `marker`
/// text of all `Reference` segments reproduces the input exactly.
pub fn parse_message_segments(content: &str, citations: &[Citation]) -> Vec<MessageSegment> {
    if content.is_empty() {
        return vec![MessageSegment::text("")];
    }

    let mut segments = Vec::new();
    let mut literal_start = 0;
    let mut cursor = 0;

    while let Some(open_offset) = content[cursor..].find('[') {
        let open = cursor + open_offset;
        let Some((marker_end, number)) = scan_marker(&content[open..]) else {
            // Not a marker; keep scanning past the bracket.
            cursor = open + 1;
            continue;
        };
        let end = open + marker_end;

        if open > literal_start {
            segments.push(MessageSegment::text(&content[literal_start..open]));
        }
        match number
            .checked_sub(1)
            .filter(|index| *index < citations.len())
        {
            Some(index) => {
                segments.push(MessageSegment::Reference {
                    marker: content[open..end].to_string(),
                    index,
                });
            }
            // Out-of-range marker: falls back to a literal segment.
            None => {
                segments.push(MessageSegment::text(&content[open..end]));
            }
        }
        literal_start = end;
        cursor = end;
    }

    if literal_start < content.len() {
        segments.push(MessageSegment::text(&content[literal_start..]));
    }

    segments
}

/// Byte ranges of the reference markers inside the content the segments were
/// parsed from, paired with the citation index each marker resolves to. The
/// ranges are what an interactive text element needs for highlighting and
/// click hit-testing.
pub fn marker_ranges(segments: &[MessageSegment]) -> Vec<(std::ops::Range<usize>, usize)> {
    let mut ranges = Vec::new();
    let mut offset = 0;
    for segment in segments {
        match segment {
            MessageSegment::Text(text) => offset += text.len(),
            MessageSegment::Reference { marker, index } => {
                ranges.push((offset..offset + marker.len(), *index));
                offset += marker.len();
            }
        }
    }
    ranges
}

/// Matches `[<integer>]` at the start of `input`. Returns the byte length of
/// the matched marker and the parsed number.
fn scan_marker(input: &str) -> Option<(usize, usize)> {
    debug_assert!(input.starts_with('['));
    let digits_end = input[1..]
        .find(|ch: char| !ch.is_ascii_digit())
        .map(|offset| 1 + offset)?;
    if digits_end == 1 || !input[digits_end..].starts_with(']') {
        return None;
    }

    let number = input[1..digits_end].parse::<usize>().ok()?;
    Some((digits_end + 1, number))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn citation(id: &str, page_number: u32) -> Citation {
        Citation {
            id: id.to_string(),
            document_id: "doc-1".to_string(),
            document_name: "report.pdf".to_string(),
            document_url: "/document/1/file".to_string(),
            page_number,
            text: "cited passage".to_string(),
            bounding_boxes: vec![BoundingBox {
                x: 10.0,
                y: 20.0,
                width: 30.0,
                height: 40.0,
            }],
        }
    }

    fn reassembled(segments: &[MessageSegment]) -> String {
        segments
            .iter()
            .map(|segment| match segment {
                MessageSegment::Text(text) => text.as_str(),
                MessageSegment::Reference { marker, .. } => marker.as_str(),
            })
            .collect()
    }

    #[test]
    fn splits_text_around_markers() {
        let citations = vec![citation("cite-1", 2), citation("cite-2", 5)];
        let segments = parse_message_segments("See [1] and [2].", &citations);

        assert_eq!(
            segments,
            vec![
                MessageSegment::Text("See ".into()),
                MessageSegment::Reference {
                    marker: "[1]".into(),
                    index: 0,
                },
                MessageSegment::Text(" and ".into()),
                MessageSegment::Reference {
                    marker: "[2]".into(),
                    index: 1,
                },
                MessageSegment::Text(".".into()),
            ]
        );
    }

    #[test]
    fn out_of_range_marker_falls_back_to_its_own_literal_segment() {
        let citations = vec![citation("cite-1", 2)];
        let segments = parse_message_segments("See [5].", &citations);

        assert_eq!(
            segments,
            vec![
                MessageSegment::Text("See ".into()),
                MessageSegment::Text("[5]".into()),
                MessageSegment::Text(".".into()),
            ]
        );
    }

    #[test]
    fn marker_zero_falls_back_to_its_own_literal_segment() {
        let citations = vec![citation("cite-1", 2)];
        let segments = parse_message_segments("See [0].", &citations);

        assert_eq!(
            segments,
            vec![
                MessageSegment::Text("See ".into()),
                MessageSegment::Text("[0]".into()),
                MessageSegment::Text(".".into()),
            ]
        );
    }

    #[test]
    fn empty_content_is_a_single_empty_literal_run() {
        assert_eq!(
            parse_message_segments("", &[]),
            vec![MessageSegment::Text(String::new())]
        );
    }

    #[test]
    fn content_without_markers_is_one_literal_run() {
        let segments = parse_message_segments("plain answer", &[citation("cite-1", 1)]);
        assert_eq!(segments, vec![MessageSegment::Text("plain answer".into())]);
    }

    #[test]
    fn non_numeric_brackets_are_literal() {
        let citations = vec![citation("cite-1", 1)];
        let segments = parse_message_segments("array[0], [a] and [] stay [1]", &citations);

        assert_eq!(
            segments,
            vec![
                MessageSegment::Text("array".into()),
                MessageSegment::Text("[0]".into()),
                MessageSegment::Text(", [a] and [] stay ".into()),
                MessageSegment::Reference {
                    marker: "[1]".into(),
                    index: 0,
                },
            ]
        );
    }

    #[test]
    fn marker_at_start_and_end() {
        let citations = vec![citation("cite-1", 1), citation("cite-2", 2)];
        let segments = parse_message_segments("[1] middle [2]", &citations);

        assert_eq!(
            segments,
            vec![
                MessageSegment::Reference {
                    marker: "[1]".into(),
                    index: 0,
                },
                MessageSegment::Text(" middle ".into()),
                MessageSegment::Reference {
                    marker: "[2]".into(),
                    index: 1,
                },
            ]
        );
    }

    #[test]
    fn adjacent_markers_have_no_empty_runs() {
        let citations = vec![citation("cite-1", 1), citation("cite-2", 2)];
        let segments = parse_message_segments("[1][2]", &citations);

        assert_eq!(
            segments,
            vec![
                MessageSegment::Reference {
                    marker: "[1]".into(),
                    index: 0,
                },
                MessageSegment::Reference {
                    marker: "[2]".into(),
                    index: 1,
                },
            ]
        );
    }

    #[test]
    fn round_trips_arbitrary_content() {
        let citations = vec![citation("cite-1", 1), citation("cite-2", 2)];
        for content in [
            "",
            "no markers at all",
            "See [1] and [2].",
            "[9000] out of range",
            "unterminated [12",
            "[1][1][2] repeated",
            "nested [[1]] brackets",
            "unicode 路径 [1] mixed",
        ] {
            let segments = parse_message_segments(content, &citations);
            assert_eq!(reassembled(&segments), content, "content: {content:?}");
        }
    }

    #[test]
    fn repeated_marker_resolves_to_same_citation() {
        let citations = vec![citation("cite-1", 1)];
        let segments = parse_message_segments("[1] then [1] again", &citations);

        let indices: Vec<usize> = segments
            .iter()
            .filter_map(|segment| match segment {
                MessageSegment::Reference { index, .. } => Some(*index),
                _ => None,
            })
            .collect();
        assert_eq!(indices, vec![0, 0]);
    }

    #[test]
    fn marker_ranges_cover_the_marker_bytes() {
        let citations = vec![citation("cite-1", 1), citation("cite-2", 2)];
        let content = "See [1] and [2].";
        let segments = parse_message_segments(content, &citations);

        let ranges = marker_ranges(&segments);
        assert_eq!(ranges.len(), 2);
        assert_eq!(&content[ranges[0].0.clone()], "[1]");
        assert_eq!(ranges[0].1, 0);
        assert_eq!(&content[ranges[1].0.clone()], "[2]");
        assert_eq!(ranges[1].1, 1);
    }

    #[test]
    fn deserializes_backend_citation_payload() {
        let raw = r#"{
            "id": "cite-7",
            "documentId": "42",
            "documentName": "handbook.pdf",
            "documentUrl": "/document/42/file",
            "pageNumber": 3,
            "text": "the cited sentence",
            "boundingBoxes": [{"x": 10.0, "y": 20.0, "width": 30.0, "height": 40.0}]
        }"#;

        let parsed: Citation = serde_json::from_str(raw).expect("citation should deserialize");
        assert_eq!(parsed.id, "cite-7");
        assert_eq!(parsed.page_number, 3);
        assert_eq!(parsed.bounding_boxes.len(), 1);
        assert_eq!(parsed.bounding_boxes[0].width, 30.0);
    }
}
