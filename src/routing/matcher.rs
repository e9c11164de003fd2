//! Path normalization and joining.
//!
//! # Responsibilities
//! - Reduce a navigation target to the canonical form used as lookup key
//! - Join child paths onto their parent
//!
//! # Design Decisions
//! - Matching is exact and case-sensitive per segment
//! - Query strings and fragments never take part in matching
//! - A trailing slash is insignificant (`/home/` == `/home`)
//! - No wildcards, no parameters

/// Canonical form of a navigation target.
pub fn normalize_path(path: &str) -> String {
    let path = path
        .split(|c| c == '?' || c == '#')
        .next()
        .unwrap_or_default()
        .trim();

    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    format!("/{}", segments.join("/"))
}

/// Full path of a route declared under `parent`.
///
/// Child paths are relative unless they start with `/`.
pub fn join_paths(parent: Option<&str>, child: &str) -> String {
    match parent {
        Some(parent) if !child.starts_with('/') => {
            normalize_path(&format!("{}/{}", parent, child))
        }
        _ => normalize_path(child),
    }
}

/// Whether `path` lies strictly below `ancestor`, segment-wise.
pub fn is_descendant_path(ancestor: &str, path: &str) -> bool {
    if ancestor == "/" {
        return path != "/";
    }
    path.strip_prefix(ancestor)
        .map(|rest| rest.starts_with('/') && rest.len() > 1)
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_path() {
        assert_eq!(normalize_path("/"), "/");
        assert_eq!(normalize_path(""), "/");
        assert_eq!(normalize_path("/home/"), "/home");
        assert_eq!(normalize_path("home/readers"), "/home/readers");
        assert_eq!(normalize_path("/home//books"), "/home/books");
        assert_eq!(normalize_path("/home/fines?card=3#top"), "/home/fines");
        assert_eq!(normalize_path("/Home"), "/Home"); // Case sensitive
    }

    #[test]
    fn test_join_paths() {
        assert_eq!(join_paths(None, "/"), "/");
        assert_eq!(join_paths(Some("/home"), "readers"), "/home/readers");
        assert_eq!(join_paths(Some("/home"), "/about"), "/about");
        assert_eq!(join_paths(Some("/"), "help"), "/help");
    }

    #[test]
    fn test_is_descendant_path() {
        assert!(is_descendant_path("/home", "/home/readers"));
        assert!(!is_descendant_path("/home", "/home"));
        assert!(!is_descendant_path("/home", "/homework"));
        assert!(!is_descendant_path("/home/readers", "/home"));
        assert!(is_descendant_path("/", "/home"));
    }
}
