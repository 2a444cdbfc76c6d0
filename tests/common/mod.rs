//! Shared on-disk fixture: a consumer of `example.com/lib` pinned at v1.0.0
//! with surfaces for v1.0.0 (old), v2.0.0 (breaking) and v1.1.0 (additive).

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

pub const MODULE: &str = "example.com/lib";

const MANIFEST: &str = "\
modules:
  - path: example.com/lib
    version: v1.0.0
    direct: true
  - path: example.com/stale
    version: v0.3.1
    direct: true
  - path: golang.org/x/text
    version: v0.14.0
imported_modules:
  - example.com/lib
  - golang.org/x/text
";

const OLD_SURFACE: &str = r#"{
  "functions": {
    "ParseConfig": {"signature": "func(path string) (*Config, error)", "pkg_path": "example.com/lib"},
    "OldHelper": {"signature": "func() string", "pkg_path": "example.com/lib"},
    "Transform": {"signature": "func(s string) string", "pkg_path": "example.com/lib"}
  },
  "types": {
    "Config": {"kind": "struct{Name string; Value int}", "pkg_path": "example.com/lib"},
    "Result": {"kind": "struct{Success bool; Data string}", "pkg_path": "example.com/lib"}
  },
  "interfaces": {
    "Handler": {"methods": ["Handle(ctx context.Context) error", "Close() error"], "pkg_path": "example.com/lib"}
  }
}"#;

const NEW_SURFACE: &str = r#"{
  "functions": {
    "ParseConfig": {"signature": "func(path string, opts ...Option) (*Config, error)", "pkg_path": "example.com/lib"},
    "Transform": {"signature": "func(s string) string", "pkg_path": "example.com/lib"},
    "NewHelper": {"signature": "func() string", "pkg_path": "example.com/lib"}
  },
  "types": {
    "Config": {"kind": "struct{Name string; Value int; Enabled bool}", "pkg_path": "example.com/lib"},
    "Option": {"kind": "func(*Config)", "pkg_path": "example.com/lib"},
    "Metadata": {"kind": "struct{RequestID string}", "pkg_path": "example.com/lib"},
    "Result": {"kind": "struct{Success bool; Data string; Error error}", "pkg_path": "example.com/lib"}
  },
  "interfaces": {
    "Handler": {"methods": ["HandleWithContext(ctx context.Context, meta Metadata) error", "Close() error"], "pkg_path": "example.com/lib"}
  }
}"#;

const ADDITIVE_SURFACE: &str = r#"{
  "functions": {
    "ParseConfig": {"signature": "func(path string) (*Config, error)", "pkg_path": "example.com/lib"},
    "OldHelper": {"signature": "func() string", "pkg_path": "example.com/lib"},
    "Transform": {"signature": "func(s string) string", "pkg_path": "example.com/lib"},
    "TransformAll": {"signature": "func(s []string) []string", "pkg_path": "example.com/lib"}
  },
  "types": {
    "Config": {"kind": "struct{Name string; Value int}", "pkg_path": "example.com/lib"},
    "Result": {"kind": "struct{Success bool; Data string}", "pkg_path": "example.com/lib"}
  },
  "interfaces": {
    "Handler": {"methods": ["Handle(ctx context.Context) error", "Close() error"], "pkg_path": "example.com/lib"}
  }
}"#;

const USAGE: &str = r#"{
  "symbols": {
    "Config": [{"file": "main.go", "line": 11}],
    "ParseConfig": [{"file": "main.go", "line": 11}],
    "OldHelper": [{"file": "main.go", "line": 18}],
    "Transform": [{"file": "main.go", "line": 22}],
    "Handler": [{"file": "handler.go", "line": 24}]
  },
  "imports": {"example.com/lib": true}
}"#;

/// Writes the fixture project under `root` and returns its snapshot directory.
pub fn write_project(root: &Path) -> PathBuf {
    let snapshot = root.join(".semver-audit");
    fs::create_dir_all(snapshot.join("surfaces")).unwrap();
    fs::create_dir_all(snapshot.join("usage")).unwrap();

    fs::write(snapshot.join("dependencies.yaml"), MANIFEST).unwrap();
    fs::write(snapshot.join("surfaces/example.com~lib@v1.0.0.json"), OLD_SURFACE).unwrap();
    fs::write(snapshot.join("surfaces/example.com~lib@v2.0.0.json"), NEW_SURFACE).unwrap();
    fs::write(snapshot.join("surfaces/example.com~lib@v1.1.0.json"), ADDITIVE_SURFACE).unwrap();
    fs::write(snapshot.join("usage/example.com~lib.json"), USAGE).unwrap();
    snapshot
}
