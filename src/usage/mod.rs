//! Usage index: where the consumer references a module's exported symbols.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A source position in the consumer codebase.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Location {
    /// File path as reported by the usage scanner.
    pub file: String,
    /// 1-based line number.
    pub line: u32,
}

impl Location {
    /// Creates a location.
    #[must_use]
    pub fn new(file: impl Into<String>, line: u32) -> Self {
        Self { file: file.into(), line }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}

/// Symbol references of one consumer codebase against one target module.
///
/// Locations keep the order in which they were recorded so "used in"
/// listings are reproducible.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageIndex {
    #[serde(default)]
    symbols: BTreeMap<String, Vec<Location>>,
    #[serde(default)]
    imports: BTreeMap<String, bool>,
}

impl UsageIndex {
    /// Creates an empty index.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a reference to `symbol` at `location`.
    pub fn record(&mut self, symbol: &str, location: Location) {
        self.symbols.entry(symbol.to_string()).or_default().push(location);
    }

    /// Records whether `import_path` resolves to the target module.
    pub fn record_import(&mut self, import_path: &str, resolves_to_target: bool) {
        self.imports.insert(import_path.to_string(), resolves_to_target);
    }

    /// Locations referencing `symbol`, in recording order.
    #[must_use]
    pub fn locations(&self, symbol: &str) -> &[Location] {
        self.symbols.get(symbol).map_or(&[], Vec::as_slice)
    }

    /// Returns `true` if `symbol` has at least one recorded location.
    #[must_use]
    pub fn is_used(&self, symbol: &str) -> bool {
        !self.locations(symbol).is_empty()
    }

    /// Returns `true` if `import_path` was recorded as resolving to the target module.
    #[must_use]
    pub fn resolves_import(&self, import_path: &str) -> bool {
        self.imports.get(import_path).copied().unwrap_or(false)
    }

    /// Import paths that resolve to the target module, sorted.
    pub fn target_imports(&self) -> impl Iterator<Item = &str> {
        self.imports.iter().filter(|(_, resolves)| **resolves).map(|(path, _)| path.as_str())
    }

    /// Number of distinct symbols with at least one location.
    #[must_use]
    pub fn used_symbol_count(&self) -> usize {
        self.symbols.values().filter(|locations| !locations.is_empty()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_preserves_append_order() {
        let mut usage = UsageIndex::new();
        usage.record("ParseConfig", Location::new("main.go", 12));
        usage.record("ParseConfig", Location::new("cmd/app.go", 3));
        usage.record("ParseConfig", Location::new("main.go", 40));

        let lines: Vec<String> =
            usage.locations("ParseConfig").iter().map(ToString::to_string).collect();
        assert_eq!(lines, vec!["main.go:12", "cmd/app.go:3", "main.go:40"]);
    }

    #[test]
    fn unknown_symbol_is_unused() {
        let usage = UsageIndex::new();
        assert!(usage.locations("Missing").is_empty());
        assert!(!usage.is_used("Missing"));
    }

    #[test]
    fn empty_location_list_counts_as_unused() {
        let usage: UsageIndex = serde_json::from_str(r#"{"symbols": {"F": []}}"#).unwrap();
        assert!(!usage.is_used("F"));
        assert_eq!(usage.used_symbol_count(), 0);
    }

    #[test]
    fn imports_track_resolution_to_target() {
        let mut usage = UsageIndex::new();
        usage.record_import("example.com/lib", true);
        usage.record_import("example.com/lib/internal", true);
        usage.record_import("example.com/other", false);

        assert!(usage.resolves_import("example.com/lib"));
        assert!(!usage.resolves_import("example.com/other"));
        assert!(!usage.resolves_import("fmt"));
        let targets: Vec<&str> = usage.target_imports().collect();
        assert_eq!(targets, vec!["example.com/lib", "example.com/lib/internal"]);
    }

    #[test]
    fn deserializes_wire_format() {
        let json = r#"{
            "symbols": {"OldHelper": [{"file": "main.go", "line": 18}]},
            "imports": {"example.com/lib": true}
        }"#;
        let usage: UsageIndex = serde_json::from_str(json).unwrap();
        assert_eq!(usage.locations("OldHelper"), &[Location::new("main.go", 18)]);
        assert!(usage.resolves_import("example.com/lib"));
    }
}
