// src/core/html.rs
//
// Minimal, tolerant markup helpers. The upstream pages embed bracket
// data as HTML-ish strings inside <script> blocks, so everything here
// works on raw text with case-insensitive tag scanning rather than a
// full DOM.
use crate::core::sanitize::{normalize_entities, normalize_ws};

pub fn to_lower(s: &str) -> String {
    s.chars()
        .map(|c| if c.is_ascii() { c.to_ascii_lowercase() } else { c })
        .collect()
}

pub fn slice_between_ci<'a>(s: &'a str, open_pat: &str, close_pat: &str) -> Option<&'a str> {
    let lc = to_lower(s);
    let open = to_lower(open_pat);
    let close = to_lower(close_pat);
    let o = lc.find(&open)?;
    let after = s[o..].find('>')? + o + 1;
    let cr = lc[after..].find(&close)?;
    Some(&s[after..after + cr])
}

pub fn next_tag_block_ci(s: &str, o: &str, c: &str, from: usize) -> Option<(usize, usize)> {
    let lc = to_lower(s);
    let ol = to_lower(o);
    let cl = to_lower(c);
    let start = lc.get(from..)?.find(&ol)? + from;
    let open_end = s[start..].find('>')? + start + 1;
    let end_rel = lc[open_end..].find(&cl)?;
    let end = open_end + end_rel + c.len();
    Some((start, end))
}

pub fn inner_after_open_tag(block: &str) -> String {
    if let Some(oe) = block.find('>') {
        if let Some(cs) = block.rfind('<') {
            if cs > oe {
                return block[oe + 1..cs].to_string();
            }
        }
    }
    s!()
}

pub fn strip_tags<S: AsRef<str>>(s: S) -> String {
    let s = s.as_ref();

    let mut out = String::with_capacity(s.len());
    let mut in_tag = false;

    for ch in s.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    normalize_ws(&out)
}

/// Slice `s` between two markers with byte-offset fine tuning:
/// `[find(start_pat)+add .. find(end_pat)-sub]`. Both finds run from
/// the start of `s`. None when a marker is missing or the resulting
/// range is empty/invalid.
pub fn slice_offsets<'a>(
    s: &'a str,
    start_pat: &str,
    end_pat: &str,
    add: usize,
    sub: usize,
) -> Option<&'a str> {
    let start = s.find(start_pat)? + add;
    let end = s.find(end_pat)?.checked_sub(sub)?;
    if start > end || !s.is_char_boundary(start) || !s.is_char_boundary(end) {
        return None;
    }
    Some(&s[start..end])
}

/// Inner text of the last <script> block inside <head>. The upstream
/// pages keep all bracket data in that block.
pub fn last_head_script(doc: &str) -> Option<String> {
    let (hs, he) = next_tag_block_ci(doc, "<head", "</head>", 0)?;
    let head = &doc[hs..he];
    let mut pos = 0usize;
    let mut last = None;
    while let Some((s, e)) = next_tag_block_ci(head, "<script", "</script>", pos) {
        last = Some((s, e));
        pos = e;
    }
    let (s, e) = last?;
    Some(inner_after_open_tag(&head[s..e]))
}

/// Clean text of the page <title>.
pub fn page_title(doc: &str) -> Option<String> {
    slice_between_ci(doc, "<title", "</title>").map(|t| strip_tags(normalize_entities(t)))
}

/// Attribute value from a tag opener; tolerates single quotes, double
/// quotes and unquoted values.
pub fn attr_value(opener: &str, name: &str) -> Option<String> {
    let lc = to_lower(opener);
    let pat = format!("{}=", to_lower(name));
    let hp = lc.find(&pat)?;
    let val = &opener[hp + pat.len()..];
    let (quote, start_off) = match val.as_bytes().first() {
        Some(b'"') => ('"', 1),
        Some(b'\'') => ('\'', 1),
        _ => ('\0', 0),
    };
    let end = if quote != '\0' {
        val[start_off..]
            .find(quote)
            .map(|e| start_off + e)
            .unwrap_or(val.len())
    } else {
        val[start_off..]
            .find(|c: char| c.is_ascii_whitespace() || c == '>')
            .map(|e| start_off + e)
            .unwrap_or(val.len())
    };
    let v = &val[start_off..end];
    if v.is_empty() { None } else { Some(s!(v)) }
}

/* ---------------- flat node stream ---------------- */

/// One token of a markup fragment in document order. Hyperlinks carry
/// their cleaned inner text; every other stretch of text (including
/// whitespace-only runs between tags) is a `Text` node. Non-anchor tags
/// act as separators only.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Text(String),
    Link(String),
}

impl Node {
    pub fn text(&self) -> &str {
        match self {
            Node::Text(t) | Node::Link(t) => t,
        }
    }

    pub fn is_link(&self) -> bool {
        matches!(self, Node::Link(_))
    }
}

/// Flatten a markup fragment into a node stream.
pub fn tokenize(fragment: &str) -> Vec<Node> {
    let lc = to_lower(fragment);
    let mut nodes = Vec::new();
    let mut i = 0usize;

    while i < fragment.len() {
        let Some(rel) = fragment[i..].find('<') else {
            nodes.push(Node::Text(s!(&fragment[i..])));
            break;
        };
        if rel > 0 {
            nodes.push(Node::Text(s!(&fragment[i..i + rel])));
        }
        let tag_start = i + rel;

        if is_anchor_open(&lc[tag_start..]) {
            if let Some(close_rel) = lc[tag_start..].find("</a>") {
                let end = tag_start + close_rel + "</a>".len();
                let inner = inner_after_open_tag(&fragment[tag_start..end]);
                nodes.push(Node::Link(strip_tags(normalize_entities(&inner))));
                i = end;
                continue;
            }
        }
        // other tag, closing tag, or unclosed anchor: skip the tag token
        match fragment[tag_start..].find('>') {
            Some(gt) => i = tag_start + gt + 1,
            None => break,
        }
    }
    nodes
}

fn is_anchor_open(s: &str) -> bool {
    let b = s.as_bytes();
    b.len() >= 3
        && b[0] == b'<'
        && b[1] == b'a'
        && (b[2] == b'>' || b[2] == b'/' || b[2].is_ascii_whitespace())
}
