use tempdir::TempDir;

pub fn create_tmp_dir() -> TempDir {
    TempDir::new("art_fixtures").unwrap()
}

/// A ref-listing body in the shape Artifactory's Git endpoint returns.
pub fn with_refs_content(refs: Vec<(&str, &str)>) -> String {
    refs.iter()
        .map(|(commit, ref_name)| format!("{}\t{}", commit, ref_name))
        .collect::<Vec<String>>()
        .join("\n")
}

/// A commit id of the width Artifactory emits.
pub fn commit_id(seed: &str) -> String {
    seed.repeat(44)
}
