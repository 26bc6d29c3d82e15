/// Splits a request path into its non-empty `/`-separated segments.
///
/// Empty segments produced by leading, trailing, or consecutive slashes are
/// discarded, so `"/user//profile/"` yields `["user", "profile"]` while `""`
/// and `"/"` yield nothing. Registration and lookup both normalize through
/// this helper, which is what makes `/a/b`, `/a/b/` and `/a//b/` equivalent.
pub fn split_segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|segment| !segment.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(path: &str) -> Vec<&str> {
        split_segments(path).collect()
    }

    #[test]
    fn splits_plain_path() {
        assert_eq!(collect("/user/profile"), vec!["user", "profile"]);
    }

    #[test]
    fn ignores_leading_trailing_and_duplicate_slashes() {
        assert_eq!(collect("/user//profile/"), vec!["user", "profile"]);
        assert_eq!(collect("user/profile"), vec!["user", "profile"]);
        assert_eq!(collect("///user///"), vec!["user"]);
    }

    #[test]
    fn empty_and_root_paths_yield_no_segments() {
        assert!(collect("").is_empty());
        assert!(collect("/").is_empty());
        assert!(collect("////").is_empty());
    }

    #[test]
    fn segments_are_case_sensitive_verbatim() {
        assert_eq!(collect("/User/Profile"), vec!["User", "Profile"]);
    }
}
