use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;

// Plain Git emits 40 hex characters, Artifactory's endpoint emits 44.
static TAG_REF_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([a-f0-9]{40,})\s+refs/tags/(\S+)").unwrap());

const PEELED_TAG_SUFFIX: &'static str = "^{}";

/// Parses a `git ls-remote` style listing into tag name to commit id pairs.
///
/// Lines that do not describe a tag ref are skipped, and peeled entries of
/// annotated tags (`refs/tags/<name>^{}`) are dropped so only the tag pointer
/// itself survives. The last parsed line wins when a tag name repeats.
pub fn parse_tags(refs: &str) -> IndexMap<String, String> {
    let mut tags = IndexMap::new();

    for line in refs.trim().split(|c| c == '\r' || c == '\n') {
        if let Some(captures) = TAG_REF_PATTERN.captures(line) {
            let name = &captures[2];

            if !name.ends_with(PEELED_TAG_SUFFIX) {
                tags.insert(name.to_string(), captures[1].to_string());
            }
        }
    }

    tags
}

#[cfg(test)]
mod tests {
    use super::*;

    fn commit(seed: &str) -> String {
        seed.repeat(44)
    }

    #[test]
    fn returns_no_tags_for_empty_input() {
        assert!(parse_tags("").is_empty());
        assert!(parse_tags("  \n  ").is_empty());
    }

    #[test]
    fn parses_tag_refs_in_listing_order() {
        let refs = format!(
            "{}\trefs/tags/v1.0.0\n{}\trefs/tags/v2.0.0",
            commit("a"),
            commit("b")
        );

        let tags = parse_tags(&refs);

        assert_eq!(
            tags.iter()
                .map(|(name, commit)| (name.as_str(), commit.as_str()))
                .collect::<Vec<_>>(),
            vec![
                ("v1.0.0", commit("a").as_str()),
                ("v2.0.0", commit("b").as_str())
            ]
        );
    }

    #[test]
    fn ignores_refs_that_are_not_tags() {
        let refs = format!(
            "{}\trefs/heads/main\n{}\trefs/tags/v1.0.0",
            commit("a"),
            commit("b")
        );

        let tags = parse_tags(&refs);

        assert_eq!(tags.len(), 1);
        assert_eq!(tags.get("v1.0.0"), Some(&commit("b")));
    }

    #[test]
    fn ignores_malformed_lines() {
        let refs = format!("not a ref line\nabc123\trefs/tags/too-short\n{}\trefs/tags/v1.0.0", commit("a"));

        let tags = parse_tags(&refs);

        assert_eq!(tags.len(), 1);
        assert!(tags.contains_key("v1.0.0"));
    }

    #[test]
    fn drops_peeled_annotated_tag_entries() {
        let refs = format!(
            "{}\trefs/tags/v1.0.0\n{}\trefs/tags/v1.0.0^{{}}",
            commit("a"),
            commit("b")
        );

        let tags = parse_tags(&refs);

        assert_eq!(tags.len(), 1);
        assert_eq!(tags.get("v1.0.0"), Some(&commit("a")));
    }

    #[test]
    fn keeps_the_last_entry_when_a_tag_name_repeats() {
        let refs = format!(
            "{}\trefs/tags/v1.0.0\n{}\trefs/tags/v1.0.0",
            commit("a"),
            commit("b")
        );

        let tags = parse_tags(&refs);

        assert_eq!(tags.len(), 1);
        assert_eq!(tags.get("v1.0.0"), Some(&commit("b")));
    }

    #[test]
    fn accepts_forty_character_commit_ids() {
        let refs = format!("{}\trefs/tags/v1.0.0", "c".repeat(40));

        let tags = parse_tags(&refs);

        assert_eq!(tags.get("v1.0.0"), Some(&"c".repeat(40)));
    }

    #[test]
    fn handles_windows_line_breaks() {
        let refs = format!(
            "{}\trefs/tags/v1.0.0\r\n{}\trefs/tags/v2.0.0\r\n",
            commit("a"),
            commit("b")
        );

        let tags = parse_tags(&refs);

        assert_eq!(tags.len(), 2);
    }
}
