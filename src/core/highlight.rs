use serde::{Deserialize, Serialize};

/// A run of display text, flagged when it matches the query
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    pub text: String,
    pub matched: bool,
}

/// Byte length of a case-insensitive match of `query` at the start of `text`
fn match_len(text: &str, query: &[char]) -> Option<usize> {
    let mut lowered = text.char_indices().flat_map(|(i, c)| {
        let end = i + c.len_utf8();
        c.to_lowercase().map(move |lc| (end, lc))
    });

    let mut end = 0;
    for q in query {
        let (e, c) = lowered.next()?;
        if c != *q {
            return None;
        }
        end = e;
    }
    Some(end)
}

/// Split `text` into matched and unmatched segments for `query`
///
/// Matching is the same case-insensitive substring rule the search uses.
/// A blank query yields the whole text as one unmatched segment.
pub fn highlight(text: &str, query: &str) -> Vec<Segment> {
    let query: Vec<char> = query.trim().chars().flat_map(char::to_lowercase).collect();
    if text.is_empty() {
        return Vec::new();
    }
    if query.is_empty() {
        return vec![Segment { text: text.to_string(), matched: false }];
    }

    let mut segments = Vec::new();
    let mut plain_start = 0;
    let mut pos = 0;

    while pos < text.len() {
        match match_len(&text[pos..], &query) {
            Some(len) => {
                if plain_start < pos {
                    segments.push(Segment { text: text[plain_start..pos].to_string(), matched: false });
                }
                segments.push(Segment { text: text[pos..pos + len].to_string(), matched: true });
                pos += len;
                plain_start = pos;
            }
            None => {
                let step = text[pos..].chars().next().map_or(1, char::len_utf8);
                pos += step;
            }
        }
    }

    if plain_start < text.len() {
        segments.push(Segment { text: text[plain_start..].to_string(), matched: false });
    }

    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seg(text: &str, matched: bool) -> Segment {
        Segment { text: text.to_string(), matched }
    }

    #[test]
    fn test_highlight_every_occurrence() {
        assert_eq!(
            highlight("Toko Kopi, kopi susu", "KOPI"),
            vec![seg("Toko ", false), seg("Kopi", true), seg(", ", false), seg("kopi", true), seg(" susu", false)]
        );
    }

    #[test]
    fn test_highlight_blank_query() {
        assert_eq!(highlight("Toko Teh", "  "), vec![seg("Toko Teh", false)]);
    }

    #[test]
    fn test_highlight_no_match() {
        assert_eq!(highlight("Toko Teh", "kopi"), vec![seg("Toko Teh", false)]);
    }

    #[test]
    fn test_highlight_non_ascii() {
        assert_eq!(
            highlight("Café Éclair", "éCL"),
            vec![seg("Café ", false), seg("Écl", true), seg("air", false)]
        );
    }
}
