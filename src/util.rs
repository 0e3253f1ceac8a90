//! Shared utility functions

/// Spreadsheet-style label for a zero-based index
///
/// # Examples
/// ```
/// use lcgen::util::column_label;
/// assert_eq!(column_label(0), "A");
/// assert_eq!(column_label(25), "Z");
/// assert_eq!(column_label(26), "AA");
/// ```
pub fn column_label(idx: usize) -> String {
    let mut n = idx + 1;
    let mut label = Vec::new();
    while n > 0 {
        let rem = (n - 1) % 26;
        label.push(b'A' + rem as u8);
        n = (n - 1) / 26;
    }
    label.reverse();
    String::from_utf8(label).unwrap_or_default()
}

/// File-system friendly problem name: lowercase words joined by `_`
///
/// # Examples
/// ```
/// use lcgen::util::problem_slug;
/// assert_eq!(problem_slug("Two Sum"), "two_sum");
/// assert_eq!(problem_slug(" LRU Cache (Hard) "), "lru_cache_hard");
/// ```
pub fn problem_slug(name: &str) -> String {
    name.split_whitespace()
        .map(|word| {
            word.chars()
                .filter(|c| c.is_alphanumeric() || *c == '_' || *c == '-')
                .flat_map(char::to_lowercase)
                .collect::<String>()
        })
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join("_")
}

/// Wrap text into line comments no wider than `width` columns
///
/// # Examples
/// ```
/// use lcgen::util::comment_lines;
/// assert_eq!(comment_lines("abcdef", "//", 6), vec!["// abc", "// def"]);
/// ```
pub fn comment_lines(text: &str, comment: &str, width: usize) -> Vec<String> {
    let max = width.saturating_sub(comment.len() + 1).max(1);
    let mut out = Vec::new();
    for line in text.trim().lines() {
        let line = line.trim_end();
        if line.is_empty() {
            out.push(comment.to_string());
            continue;
        }
        let chars: Vec<char> = line.chars().collect();
        for chunk in chars.chunks(max) {
            out.push(format!("{} {}", comment, chunk.iter().collect::<String>()));
        }
    }
    out
}
