//! Route path helpers.
//!
//! A route path is the ordered list of segments consumed while walking the
//! route tables, e.g. `["deploy", "staging"]`.

/// Joins a route path with spaces, the way it is typed.
///
/// For example, `["deploy", "staging"]` becomes `"deploy staging"`.
pub fn path_to_string<S: AsRef<str>>(path: &[S]) -> String {
    path.iter().map(AsRef::as_ref).collect::<Vec<_>>().join(" ")
}

/// Splits a space-separated route string into segments.
///
/// For example, `"deploy staging"` becomes `["deploy", "staging"]`.
pub fn string_to_path(s: &str) -> Vec<String> {
    s.split_whitespace().map(String::from).collect()
}

/// Returns `path` with `segment` appended.
pub fn join_path(path: &[String], segment: &str) -> Vec<String> {
    let mut joined = Vec::with_capacity(path.len() + 1);
    joined.extend_from_slice(path);
    joined.push(segment.to_string());
    joined
}

/// Whether a token can be a route segment: anything without a leading hyphen.
pub fn is_segment_token(token: &str) -> bool {
    !token.starts_with('-')
}

/// Removes the first route-segment token equal to `segment`, keeping the
/// order of everything else.
pub fn remove_segment(argv: &[String], segment: &str) -> Vec<String> {
    let mut rest = argv.to_vec();
    if let Some(index) = rest
        .iter()
        .position(|token| is_segment_token(token) && token == segment)
    {
        rest.remove(index);
    }
    rest
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_to_string() {
        assert_eq!(path_to_string(&["deploy", "staging"]), "deploy staging");
        assert_eq!(path_to_string(&["list"]), "list");
        assert_eq!(path_to_string::<&str>(&[]), "");
    }

    #[test]
    fn test_string_to_path() {
        assert_eq!(string_to_path("deploy staging"), vec!["deploy", "staging"]);
        assert_eq!(string_to_path("  list "), vec!["list"]);
        assert_eq!(string_to_path(""), Vec::<String>::new());
    }

    #[test]
    fn test_join_path() {
        let path = vec!["deploy".to_string()];
        assert_eq!(join_path(&path, "staging"), vec!["deploy", "staging"]);
        assert_eq!(path, vec!["deploy"]);
    }

    #[test]
    fn test_is_segment_token() {
        assert!(is_segment_token("deploy"));
        assert!(!is_segment_token("-x"));
        assert!(!is_segment_token("--force"));
        assert!(!is_segment_token("-"));
    }

    #[test]
    fn test_remove_segment_skips_option_tokens() {
        let argv: Vec<String> = ["--x", "a", "b", "a"].iter().map(|s| s.to_string()).collect();
        assert_eq!(remove_segment(&argv, "a"), vec!["--x", "b", "a"]);
        assert_eq!(remove_segment(&argv, "--x"), argv);
        assert_eq!(remove_segment(&argv, "zzz"), argv);
    }
}
