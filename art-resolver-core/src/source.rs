use crate::errors::{ArtCoreError, ErrorKind};

pub const ARTIFACTORY_PREFIX: &'static str = "art://";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourcePackage {
    pub organization: String,
    pub repository: String,
}

/// Tells whether a source string names an Artifactory package.
pub fn matches(source: &str) -> bool {
    source.starts_with(ARTIFACTORY_PREFIX)
}

/// Decomposes `art://<organization>/<repository>` into its parts.
///
/// Segments past the repository are ignored. Fewer than two non-empty
/// segments is an invalid package name.
pub fn parse_source(source: &str) -> Result<SourcePackage, ArtCoreError> {
    let rest = source.strip_prefix(ARTIFACTORY_PREFIX).unwrap_or(source);

    let mut segments = rest.split('/');

    match (segments.next(), segments.next()) {
        (Some(organization), Some(repository))
            if !organization.is_empty() && !repository.is_empty() =>
        {
            Ok(SourcePackage {
                organization: organization.to_string(),
                repository: repository.to_string(),
            })
        }
        _ => Err(ArtCoreError::new(
            ErrorKind::InvalidSource,
            format!(
                "{} does not seem to be a valid Artifactory package name",
                source
            ),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_only_prefixed_sources() {
        assert!(matches("art://acme/widgets"));
        assert!(!matches("https://github.com/acme/widgets"));
        assert!(!matches("acme/widgets"));
    }

    #[test]
    fn parses_organization_and_repository() {
        let package = parse_source("art://acme/widgets").unwrap();

        assert_eq!(
            package,
            SourcePackage {
                organization: String::from("acme"),
                repository: String::from("widgets"),
            }
        );
    }

    #[test]
    fn ignores_trailing_segments() {
        let package = parse_source("art://acme/widgets/extra/path").unwrap();

        assert_eq!(package.organization, "acme");
        assert_eq!(package.repository, "widgets");
    }

    #[test]
    fn fails_without_a_repository() {
        let result = parse_source("art://acme");

        assert_eq!(
            result,
            Err(ArtCoreError::new(
                ErrorKind::InvalidSource,
                String::from("art://acme does not seem to be a valid Artifactory package name")
            ))
        );
    }

    #[test]
    fn fails_on_empty_segments() {
        assert!(parse_source("art://acme/").is_err());
        assert!(parse_source("art:///widgets").is_err());
        assert!(parse_source("art://").is_err());
    }
}
