use flate2::write::GzEncoder;
use flate2::Compression;
use httpmock::Method::GET;
use httpmock::MockServer;
use std::collections::HashMap;
use std::fs;
use std::fs::File;
use std::path::PathBuf;
use tempdir::TempDir;

/// Mock of Artifactory's Git-backed endpoint: ref listings under
/// `/artifactory/refs` and archives under `/artifactory/binaries`.
pub struct ArtMockServer {
    server: MockServer,
}

impl ArtMockServer {
    pub fn new() -> ArtMockServer {
        let server = MockServer::start();

        ArtMockServer { server }
    }

    /// Registry URL to put in the configuration under test. The path
    /// carries the `artifactory` marker the registry selection looks for.
    pub fn registry_url(&self) -> String {
        format!("{}/artifactory", self.server.base_url())
    }

    pub fn with_refs(&self, organization: &str, repository: &str, refs: &str) {
        let expected_path = format!("/artifactory/refs/{}/{}", organization, repository);
        let body = refs.to_string();

        self.server.mock(|when, then| {
            when.method(GET).path(expected_path);
            then.status(200).body(body);
        });
    }

    pub fn with_missing_repository(&self, organization: &str, repository: &str) {
        let expected_path = format!("/artifactory/refs/{}/{}", organization, repository);

        self.server.mock(|when, then| {
            when.method(GET).path(expected_path);
            then.status(404);
        });
    }

    pub fn with_archive(
        &self,
        organization: &str,
        repository: &str,
        target: &str,
        files: HashMap<String, String>,
    ) {
        let tmp_dir = TempDir::new("art-mock-archives").unwrap();

        self.write_files(&files, tmp_dir.path().to_path_buf());

        let tar_gz_path = self.write_tarball(tmp_dir.path().to_path_buf());

        let expected_path = format!(
            "/artifactory/binaries/{}/{}.git/{}",
            organization, repository, target
        );

        self.server.mock(|when, then| {
            when.method(GET).path(expected_path);
            then.status(200)
                .body_from_file(tar_gz_path.to_str().unwrap());
        });
    }

    fn write_files(&self, files: &HashMap<String, String>, to: PathBuf) {
        for (name, content) in files {
            fs::write(to.join(name), content).unwrap();
        }
    }

    fn write_tarball(&self, files_path: PathBuf) -> PathBuf {
        let archives_dir = TempDir::new("art-mock-tarballs").unwrap().into_path();
        let tar_gz_path = archives_dir.join("archive.tar.gz");

        let tar_gz = File::create(&tar_gz_path).unwrap();
        let enc = GzEncoder::new(tar_gz, Compression::default());
        let mut tar = tar::Builder::new(enc);

        tar.append_dir_all(".", files_path).unwrap();
        tar.into_inner().unwrap().finish().unwrap();

        tar_gz_path
    }
}
