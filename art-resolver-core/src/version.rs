use semver::{Identifier, Version};

/// Canonical form of `tag` if it parses as a strict semantic version,
/// `None` otherwise.
///
/// A single leading `v` is allowed, matching what tag names look like in the
/// wild. Build metadata is kept and re-appended, it must survive
/// normalization.
pub fn clean(tag: &str) -> Option<String> {
    let raw = tag.trim();
    let raw = raw.strip_prefix('v').unwrap_or(raw);

    let parsed = Version::parse(raw).ok()?;

    let mut version = format!("{}.{}.{}", parsed.major, parsed.minor, parsed.patch);

    if !parsed.pre.is_empty() {
        version.push('-');
        version.push_str(&join_identifiers(&parsed.pre));
    }

    if !parsed.build.is_empty() {
        version.push('+');
        version.push_str(&join_identifiers(&parsed.build));
    }

    Some(version)
}

fn join_identifiers(identifiers: &[Identifier]) -> String {
    identifiers
        .iter()
        .map(|identifier| match identifier {
            Identifier::Numeric(numeric) => numeric.to_string(),
            Identifier::AlphaNumeric(alphanumeric) => alphanumeric.clone(),
        })
        .collect::<Vec<String>>()
        .join(".")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn returns_none_for_non_semver_tags() {
        assert_eq!(clean("main"), None);
        assert_eq!(clean("1.0"), None);
        assert_eq!(clean("release-candidate"), None);
        assert_eq!(clean(""), None);
    }

    #[test]
    fn normalizes_plain_versions() {
        assert_eq!(clean("1.2.3"), Some(String::from("1.2.3")));
    }

    #[test]
    fn strips_a_leading_v() {
        assert_eq!(clean("v1.2.3"), Some(String::from("1.2.3")));
    }

    #[test]
    fn keeps_prerelease_identifiers() {
        assert_eq!(clean("1.2.3-alpha.1"), Some(String::from("1.2.3-alpha.1")));
    }

    #[test]
    fn keeps_build_metadata() {
        assert_eq!(
            clean("v1.2.3+build.5"),
            Some(String::from("1.2.3+build.5"))
        );
    }

    #[test]
    fn keeps_prerelease_and_build_metadata_together() {
        assert_eq!(
            clean("1.2.3-alpha.1+exp.sha.5114f85"),
            Some(String::from("1.2.3-alpha.1+exp.sha.5114f85"))
        );
    }
}
