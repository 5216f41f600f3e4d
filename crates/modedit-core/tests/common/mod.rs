use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

/// Scratch directory holding candidate modes files and a manifest
pub struct SourceFixture {
    dir: TempDir,
}

#[allow(dead_code)]
impl SourceFixture {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    /// Absolute path (as a string) for `name` inside the fixture
    pub fn path(&self, name: &str) -> String {
        self.dir.path().join(name).display().to_string()
    }

    /// A well-formed modes file
    pub fn good_file(&self, name: &str) -> String {
        let path = self.dir.path().join(name);
        fs::write(&path, r#"[{"slug": "code", "name": "Code"}]"#).unwrap();
        path.display().to_string()
    }

    /// A file that is not valid JSON
    pub fn bad_json(&self, name: &str) -> String {
        let path = self.dir.path().join(name);
        fs::write(&path, "{ not json").unwrap();
        path.display().to_string()
    }

    /// A directory where a file is expected
    pub fn subdir(&self, name: &str) -> String {
        let path = self.dir.path().join(name);
        fs::create_dir_all(&path).unwrap();
        path.display().to_string()
    }

    /// Write manifest text and return its path
    pub fn manifest(&self, content: &str) -> PathBuf {
        let path = self.dir.path().join("sources.toml");
        fs::write(&path, content).unwrap();
        path
    }
}

/// One `[[sources]]` table
#[allow(dead_code)]
pub fn source_table(name: &str, path: &str) -> String {
    format!("[[sources]]\nname = {:?}\npath = {:?}\n\n", name, path)
}
