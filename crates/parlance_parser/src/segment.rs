//! Paragraph segmentation.

/// Splits text into paragraphs at runs of two or more newlines.
///
/// Each paragraph has its leading and trailing newlines removed. Other
/// whitespace is left alone. Text without a blank-line run is returned as
/// a single paragraph.
#[must_use]
pub fn split_paragraphs(text: &str) -> Vec<String> {
    let mut paragraphs = Vec::new();
    let mut start = 0;
    let bytes = text.as_bytes();
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] == b'\n' {
            let run_start = i;
            while i < bytes.len() && bytes[i] == b'\n' {
                i += 1;
            }
            if i - run_start >= 2 {
                paragraphs.push(strip_newlines(&text[start..run_start]));
                start = i;
            }
        } else {
            i += 1;
        }
    }

    paragraphs.push(strip_newlines(&text[start..]));
    paragraphs
}

/// Returns the paragraphs that contain something other than whitespace.
#[must_use]
pub fn non_blank_paragraphs(text: &str) -> Vec<String> {
    split_paragraphs(text)
        .into_iter()
        .filter(|p| !p.trim().is_empty())
        .collect()
}

fn strip_newlines(s: &str) -> String {
    s.trim_matches('\n').to_string()
}
