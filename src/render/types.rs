//! Declared-type inspection for C++ type strings
//!
//! Only the surface of the type matters here: qualifiers are stripped and
//! the remainder is matched against the handful of shapes the renderer
//! knows (containers, tree and list node pointers, `char`).

use regex::Regex;
use std::sync::OnceLock;

/// Strip leading `const`/`volatile` and trailing `&` qualifiers
///
/// ```
/// use lcgen::render::types::remove_cv_ref;
/// assert_eq!(remove_cv_ref("const vector<int>&"), "vector<int>");
/// assert_eq!(remove_cv_ref("string"), "string");
/// ```
pub fn remove_cv_ref(ty: &str) -> &str {
    let mut ty = ty.trim();
    loop {
        if let Some(rest) = strip_keyword(ty, "const") {
            ty = rest;
        } else if let Some(rest) = strip_keyword(ty, "volatile") {
            ty = rest;
        } else if let Some(rest) = ty.strip_suffix('&') {
            ty = rest;
        } else {
            break;
        }
        ty = ty.trim();
    }
    ty
}

/// Strip `keyword` only when it is a whole word (`constant` stays intact)
fn strip_keyword<'a>(ty: &'a str, keyword: &str) -> Option<&'a str> {
    let rest = ty.strip_prefix(keyword)?;
    match rest.chars().next() {
        Some(c) if c.is_alphanumeric() || c == '_' => None,
        _ => Some(rest),
    }
}

/// Qualifier-free type with all whitespace removed, for pattern matching
fn compact(ty: &str) -> String {
    remove_cv_ref(ty).chars().filter(|c| !c.is_whitespace()).collect()
}

fn container_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^(?:std::)?(?:vector|list|deque|set|unordered_set|multiset)\s*<\s*(.+?)\s*>$")
            .expect("container pattern is valid")
    })
}

/// Element type of a sequence container, one wrapper level stripped
///
/// ```
/// use lcgen::render::types::element_type;
/// assert_eq!(element_type("vector<vector<int>>").as_deref(), Some("vector<int>"));
/// assert_eq!(element_type("int"), None);
/// ```
pub fn element_type(ty: &str) -> Option<String> {
    let ty = remove_cv_ref(ty);
    container_pattern()
        .captures(ty)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// `TreeNode*`, spaces ignored
pub fn is_tree(ty: &str) -> bool {
    compact(ty) == "TreeNode*"
}

/// `ListNode*`, spaces ignored
pub fn is_linked_list(ty: &str) -> bool {
    compact(ty) == "ListNode*"
}

/// `char`
pub fn is_char(ty: &str) -> bool {
    compact(ty) == "char"
}
