//! Shared filesystem fixtures for engine tests.

#![allow(dead_code)]

use depsnap_engine::DepsnapConfig;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const LOCAL_API_METADATA: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<metadata>
  <groupId>org.example</groupId>
  <artifactId>api</artifactId>
  <version>2.0.0-SNAPSHOT</version>
  <versioning>
    <snapshot>
      <timestamp>20240101.120000</timestamp>
      <buildNumber>3</buildNumber>
    </snapshot>
  </versioning>
</metadata>
"#;

/// A workspace with a local repository holding `core` (release), `api`
/// (snapshot with cached metadata for `central`) and a transitive `util`.
pub struct Workspace {
    pub dir: TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        let dir = TempDir::new().unwrap();
        let root = dir.path();

        write(root, "m2/org/example/core/1.2.0/core-1.2.0.jar", b"core bytes");
        write(
            root,
            "m2/org/example/api/2.0.0-SNAPSHOT/api-2.0.0-SNAPSHOT.jar",
            b"api bytes",
        );
        write(
            root,
            "m2/org/example/api/2.0.0-SNAPSHOT/maven-metadata-central.xml",
            LOCAL_API_METADATA.as_bytes(),
        );
        write(root, "m2/com/other/util/0.1.0/util-0.1.0.jar", b"");

        fs::write(
            root.join("resolution.yml"),
            r#"
repositories:
  - { id: central, url: "https://repo.example/central" }
artifacts:
  - { group: org.example, name: core, version: 1.2.0, file: m2/org/example/core/1.2.0/core-1.2.0.jar }
  - { group: org.example, name: api, version: 2.0.0-SNAPSHOT, file: m2/org/example/api/2.0.0-SNAPSHOT/api-2.0.0-SNAPSHOT.jar }
  - { group: com.other, name: util, version: 0.1.0, file: m2/com/other/util/0.1.0/util-0.1.0.jar, direct: false }
"#,
        )
        .unwrap();

        Self { dir }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn input_path(&self) -> PathBuf {
        self.root().join("resolution.yml")
    }

    pub fn out(&self, name: &str) -> PathBuf {
        self.root().join("out").join(name)
    }

    pub fn config(&self) -> DepsnapConfig {
        DepsnapConfig {
            output_dir: self.root().join("out"),
            ..DepsnapConfig::default()
        }
    }
}

pub fn write(root: &Path, relative: &str, content: &[u8]) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}
