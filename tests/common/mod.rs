#![allow(dead_code)]

use std::fs;
use std::path::Path;
use tempfile::TempDir;
use treeforge::parse::Entry;
use treeforge::render::RenderConfig;
use walkdir::WalkDir;

/// The sample project drawn with Unicode box-drawing connectors.
pub const MYAPP_UNICODE: &[&str] = &[
    "myapp/",
    "├─ src/",
    "│  ├─ handlers/",
    "│  │  ├─ user.go",
    "│  │  └─ auth.go",
    "│  ├─ models/",
    "│  │  └─ user.go",
    "│  ├─ middleware/",
    "│  │  └─ logger.go",
    "│  └─ main.go",
    "├─ tests/",
    "│  ├─ user_test.go",
    "│  └─ auth_test.go",
    "├─ config/",
    "│  └─ config.yaml",
    "├─ .env",
    "├─ .gitignore",
    "├─ go.mod",
    "├─ Dockerfile",
    "└─ README.md",
];

/// Entries every rendering of the sample project must parse to.
pub fn myapp_entries() -> Vec<Entry> {
    vec![
        Entry::dir("src"),
        Entry::dir("src/handlers"),
        Entry::file("src/handlers/user.go"),
        Entry::file("src/handlers/auth.go"),
        Entry::dir("src/models"),
        Entry::file("src/models/user.go"),
        Entry::dir("src/middleware"),
        Entry::file("src/middleware/logger.go"),
        Entry::file("src/main.go"),
        Entry::dir("tests"),
        Entry::file("tests/user_test.go"),
        Entry::file("tests/auth_test.go"),
        Entry::dir("config"),
        Entry::file("config/config.yaml"),
        Entry::file(".env"),
        Entry::file(".gitignore"),
        Entry::file("go.mod"),
        Entry::file("Dockerfile"),
        Entry::file("README.md"),
    ]
}

/// RenderConfig with color disabled.
pub fn no_color_render_config() -> RenderConfig {
    RenderConfig { use_color: false }
}

/// Create a directory structure from a list of relative paths.
/// Paths ending with '/' create directories; others create files with `content`.
pub fn create_fixture(paths: &[&str], content: &str) -> TempDir {
    let tmp = TempDir::new().unwrap();
    for p in paths {
        let full = tmp.path().join(p);
        if p.ends_with('/') {
            fs::create_dir_all(&full).unwrap();
        } else {
            if let Some(parent) = full.parent() {
                fs::create_dir_all(parent).unwrap();
            }
            fs::write(&full, content).unwrap();
        }
    }
    tmp
}

/// Every path under `root`, relative, '/'-separated, directories with a
/// trailing '/', sorted.
pub fn snapshot(root: &Path) -> Vec<String> {
    let mut paths: Vec<String> = WalkDir::new(root)
        .min_depth(1)
        .into_iter()
        .map(|e| e.unwrap())
        .map(|e| {
            let rel = e
                .path()
                .strip_prefix(root)
                .unwrap()
                .components()
                .map(|c| c.as_os_str().to_string_lossy().into_owned())
                .collect::<Vec<_>>()
                .join("/");
            if e.file_type().is_dir() {
                format!("{rel}/")
            } else {
                rel
            }
        })
        .collect();
    paths.sort();
    paths
}

/// What `snapshot` should report after creating `entries`.
pub fn expected_snapshot(entries: &[Entry]) -> Vec<String> {
    let mut paths: Vec<String> = entries
        .iter()
        .map(|e| {
            if e.is_dir() {
                format!("{}/", e.path())
            } else {
                e.path().to_string()
            }
        })
        .collect();
    paths.sort();
    paths.dedup();
    paths
}
