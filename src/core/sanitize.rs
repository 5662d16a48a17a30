// src/core/sanitize.rs

pub fn normalize_entities(s: &str) -> String {
    s.replace("&nbsp;", " ")
        .replace("&amp;", "&")
        .replace("&#39;", "'")
}

pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space {
                out.push(' ');
                prev_space = true;
            }
        } else {
            out.push(ch);
            prev_space = false;
        }
    }
    out.trim().to_string()
}

/// Turn a tournament title into a safe file stem, e.g.
/// "2023 ATP Cincinnati" → "2023_ATP_Cincinnati".
pub fn sanitize_title_filename(title: &str) -> String {
    let mut out = String::with_capacity(title.len());
    let mut last_us = false;
    for ch in title.chars() {
        if ch.is_ascii_alphanumeric() {
            out.push(ch);
            last_us = false;
        } else if ch.is_whitespace() {
            if !last_us {
                out.push('_');
                last_us = true;
            }
        } else if ch == '-' || ch == '_' {
            if !(last_us && ch == '_') {
                out.push(ch);
            }
            last_us = ch == '_';
        }
    }
    let out = out.trim_matches('_').to_string();
    if out.is_empty() { s!("bracket") } else { out }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ws_collapses_runs_and_trims() {
        assert_eq!(normalize_ws("  a \n\t b  "), "a b");
    }

    #[test]
    fn title_filename_variants() {
        assert_eq!(sanitize_title_filename("2023 ATP Cincinnati"), "2023_ATP_Cincinnati");
        assert_eq!(sanitize_title_filename("  / "), "bracket");
    }
}
