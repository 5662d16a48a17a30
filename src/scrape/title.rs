// src/scrape/title.rs
//
// Compact tournament identifiers ("2023ATPCincinnati") carry no
// delimiters; readable titles are recovered by splitting at keyword
// ends and camel-case boundaries.

use crate::error::ScrapeError;

// Fixed priority order; the last keyword found decides where the
// camel-case scan starts.
const KEYWORDS: [&str; 5] = ["2023", "2024", "ATP", "WTA", "US"];

/// Turn "2023ATPCincinnati" into "2023 ATP Cincinnati".
///
/// Precondition: the identifier contains at least one keyword;
/// otherwise `InvalidTitleFormat`.
pub fn normalize(title: &str) -> Result<String, ScrapeError> {
    let chars: Vec<char> = title.chars().collect();
    let mut split_points: Vec<usize> = Vec::new();

    for key in KEYWORDS {
        if let Some(i) = title.find(key) {
            split_points.push(char_index(title, i) + key.chars().count());
        }
    }
    let Some(&last_key_end) = split_points.last() else {
        return Err(ScrapeError::InvalidTitleFormat(s!(title)));
    };

    for i in (last_key_end + 1)..chars.len() {
        let cur = chars[i];
        let prev = chars[i - 1];
        let camel = (cur.is_uppercase() || cur.is_numeric()) && prev.is_alphabetic();
        let digit_to_alpha = prev.is_numeric() && cur.is_alphabetic();
        if camel || digit_to_alpha {
            split_points.push(i);
        }
    }

    // Keyword hits can arrive out of positional order.
    split_points.sort_unstable();
    split_points.dedup();

    let mut words: Vec<String> = Vec::with_capacity(split_points.len() + 1);
    let mut start = 0usize;
    for &end in &split_points {
        words.push(chars[start..end].iter().collect());
        start = end;
    }
    words.push(chars[start..].iter().collect());
    Ok(words.join(" "))
}

fn char_index(s: &str, byte_idx: usize) -> usize {
    s[..byte_idx].chars().count()
}
