//! Diff engine: usage-filtered comparison of two surfaces.
//!
//! [`diff_surfaces`] classifies every symbol of an old and a new [`Surface`]
//! as removed, added, signature-changed or interface-mutated. Removals and
//! mutations are kept only when the symbol's own name has at least one
//! location in the [`UsageIndex`]; additions are always kept. The function
//! is pure and its output is sorted, so it is reproducible for a given input.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::surface::{InterfaceDescriptor, Surface, SymbolKind};
use crate::usage::{Location, UsageIndex};

/// A symbol that exists in the old surface only and is used by the consumer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RemovedSymbol {
    /// Symbol name.
    pub name: String,
    /// Which map the symbol was removed from.
    pub kind: SymbolKind,
    /// Consumer locations referencing the symbol.
    pub used_at: Vec<Location>,
}

/// A symbol that exists in the new surface only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddedSymbol {
    /// Symbol name.
    pub name: String,
    /// Which map the symbol was added to.
    pub kind: SymbolKind,
}

/// A used function or method whose normalized signature changed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChangedSignature {
    /// Function name (`Name` or `Type.Method`).
    pub name: String,
    /// Signature in the old surface.
    pub old_signature: String,
    /// Signature in the new surface.
    pub new_signature: String,
    /// Consumer locations referencing the function.
    pub used_at: Vec<Location>,
}

/// A used interface whose method set changed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InterfaceChange {
    /// Interface name.
    pub name: String,
    /// Method signatures present only in the new interface, sorted.
    pub added_methods: Vec<String>,
    /// Method signatures present only in the old interface, sorted.
    pub removed_methods: Vec<String>,
    /// Consumer locations referencing the interface.
    pub used_at: Vec<Location>,
}

/// Structured changelist between two surfaces for one consumer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Diff {
    /// Used symbols missing from the new surface, sorted by name then kind.
    pub removed: Vec<RemovedSymbol>,
    /// Symbols new in the new surface, sorted by name then kind.
    pub added: Vec<AddedSymbol>,
    /// Used functions with a changed signature, sorted by name.
    pub changed: Vec<ChangedSignature>,
    /// Used interfaces with a changed method set, sorted by name.
    pub interface_changes: Vec<InterfaceChange>,
}

impl Diff {
    /// Returns `true` if no category holds an entry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.removed.is_empty()
            && self.added.is_empty()
            && self.changed.is_empty()
            && self.interface_changes.is_empty()
    }
}

/// Compare `old` against `new`, keeping only changes `usage` shows to matter.
///
/// Signatures are compared as opaque strings; normalizing them is the
/// extractor's job. Named types are tracked for presence only.
#[must_use]
pub fn diff_surfaces(old: &Surface, new: &Surface, usage: &UsageIndex) -> Diff {
    let mut diff = Diff::default();

    for (name, old_fn) in old.functions() {
        match new.functions().get(name) {
            None => push_removed(&mut diff, name, SymbolKind::Function, usage),
            Some(new_fn) if new_fn.signature != old_fn.signature => {
                if usage.is_used(name) {
                    diff.changed.push(ChangedSignature {
                        name: name.clone(),
                        old_signature: old_fn.signature.clone(),
                        new_signature: new_fn.signature.clone(),
                        used_at: usage.locations(name).to_vec(),
                    });
                }
            }
            Some(_) => {}
        }
    }
    push_added(&mut diff, new.functions().keys(), old, SymbolKind::Function);

    for name in old.types().keys() {
        if !new.types().contains_key(name) {
            push_removed(&mut diff, name, SymbolKind::Type, usage);
        }
    }
    push_added(&mut diff, new.types().keys(), old, SymbolKind::Type);

    for (name, old_iface) in old.interfaces() {
        match new.interfaces().get(name) {
            None => push_removed(&mut diff, name, SymbolKind::Interface, usage),
            Some(new_iface) => {
                if let Some(change) = diff_interface(old_iface, new_iface, usage) {
                    diff.interface_changes.push(change);
                }
            }
        }
    }
    push_added(&mut diff, new.interfaces().keys(), old, SymbolKind::Interface);

    diff.removed.sort_by(|a, b| (&a.name, a.kind).cmp(&(&b.name, b.kind)));
    diff.added.sort_by(|a, b| (&a.name, a.kind).cmp(&(&b.name, b.kind)));
    diff.changed.sort_by(|a, b| a.name.cmp(&b.name));
    diff.interface_changes.sort_by(|a, b| a.name.cmp(&b.name));

    tracing::debug!(
        removed = diff.removed.len(),
        added = diff.added.len(),
        changed = diff.changed.len(),
        interface_changes = diff.interface_changes.len(),
        "surface diff computed"
    );
    diff
}

fn push_removed(diff: &mut Diff, name: &str, kind: SymbolKind, usage: &UsageIndex) {
    let used_at = usage.locations(name);
    if used_at.is_empty() {
        return;
    }
    diff.removed.push(RemovedSymbol { name: name.to_string(), kind, used_at: used_at.to_vec() });
}

/// Adds every `names` entry of category `kind` that `old` lacks in that category.
fn push_added<'a>(
    diff: &mut Diff,
    names: impl Iterator<Item = &'a String>,
    old: &Surface,
    kind: SymbolKind,
) {
    for name in names {
        let existed = match kind {
            SymbolKind::Function => old.functions().contains_key(name),
            SymbolKind::Type => old.types().contains_key(name),
            SymbolKind::Interface => old.interfaces().contains_key(name),
        };
        if !existed {
            diff.added.push(AddedSymbol { name: name.clone(), kind });
        }
    }
}

/// Method-set symmetric difference of one interface, or `None` if unchanged or unused.
fn diff_interface(
    old: &InterfaceDescriptor,
    new: &InterfaceDescriptor,
    usage: &UsageIndex,
) -> Option<InterfaceChange> {
    let removed_methods = set_minus(&old.methods, &new.methods);
    let added_methods = set_minus(&new.methods, &old.methods);

    if (added_methods.is_empty() && removed_methods.is_empty()) || !usage.is_used(&old.name) {
        return None;
    }

    Some(InterfaceChange {
        name: old.name.clone(),
        added_methods,
        removed_methods,
        used_at: usage.locations(&old.name).to_vec(),
    })
}

fn set_minus(a: &BTreeSet<String>, b: &BTreeSet<String>) -> Vec<String> {
    a.difference(b).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const PKG: &str = "example.com/lib";

    fn used(entries: &[(&str, &str, u32)]) -> UsageIndex {
        let mut usage = UsageIndex::new();
        for (name, file, line) in entries {
            usage.record(name, Location::new(*file, *line));
        }
        usage
    }

    fn old_lib() -> Surface {
        Surface::builder()
            .named_type("Config", "struct{Name string; Value int}", PKG)
            .function("ParseConfig", "func(path string) (*Config, error)", PKG)
            .function("OldHelper", "func() string", PKG)
            .function("Transform", "func(s string) string", PKG)
            .interface("Handler", ["Handle(ctx context.Context) error", "Close() error"], PKG)
            .named_type("Result", "struct{Success bool; Data string}", PKG)
            .build()
            .unwrap()
    }

    fn new_lib() -> Surface {
        Surface::builder()
            .named_type("Config", "struct{Name string; Value int; Enabled bool}", PKG)
            .named_type("Option", "func(*Config)", PKG)
            .function("ParseConfig", "func(path string, opts ...Option) (*Config, error)", PKG)
            .function("Transform", "func(s string) string", PKG)
            .function("NewHelper", "func() string", PKG)
            .named_type("Metadata", "struct{RequestID string}", PKG)
            .interface(
                "Handler",
                ["HandleWithContext(ctx context.Context, meta Metadata) error", "Close() error"],
                PKG,
            )
            .named_type("Result", "struct{Success bool; Data string; Error error}", PKG)
            .build()
            .unwrap()
    }

    #[test]
    fn removed_used_function_is_reported() {
        let old = Surface::builder().function("F", "func() error", PKG).build().unwrap();
        let usage = used(&[("F", "m.go", 10)]);

        let diff = diff_surfaces(&old, &Surface::default(), &usage);

        assert_eq!(
            diff.removed,
            vec![RemovedSymbol {
                name: "F".into(),
                kind: SymbolKind::Function,
                used_at: vec![Location::new("m.go", 10)],
            }]
        );
        assert!(diff.added.is_empty());
        assert!(diff.changed.is_empty());
        assert!(diff.interface_changes.is_empty());
    }

    #[test]
    fn removed_unused_function_is_omitted() {
        let old = Surface::builder().function("F", "func() error", PKG).build().unwrap();
        let diff = diff_surfaces(&old, &Surface::default(), &UsageIndex::new());
        assert!(diff.is_empty());
    }

    #[test]
    fn self_diff_is_empty_for_any_usage() {
        let surface = old_lib();
        let usage = used(&[("ParseConfig", "a.go", 1), ("Handler", "b.go", 2), ("Config", "c.go", 3)]);
        assert!(diff_surfaces(&surface, &surface, &usage).is_empty());
        assert!(diff_surfaces(&surface, &surface, &UsageIndex::new()).is_empty());
    }

    #[test]
    fn identical_signature_never_changes_even_when_used() {
        let usage = used(&[("Transform", "main.go", 25)]);
        let diff = diff_surfaces(&old_lib(), &new_lib(), &usage);
        assert!(diff.changed.iter().all(|c| c.name != "Transform"));
    }

    #[test]
    fn changed_signature_requires_usage() {
        let diff = diff_surfaces(&old_lib(), &new_lib(), &UsageIndex::new());
        assert!(diff.changed.is_empty());

        let usage = used(&[("ParseConfig", "main.go", 11)]);
        let diff = diff_surfaces(&old_lib(), &new_lib(), &usage);
        assert_eq!(diff.changed.len(), 1);
        let change = &diff.changed[0];
        assert_eq!(change.old_signature, "func(path string) (*Config, error)");
        assert_eq!(change.new_signature, "func(path string, opts ...Option) (*Config, error)");
        assert_eq!(change.used_at, vec![Location::new("main.go", 11)]);
    }

    #[test]
    fn interface_losing_a_method_is_reported_when_used() {
        let old = Surface::builder()
            .interface("Handler", ["Handle() error", "Close() error"], PKG)
            .build()
            .unwrap();
        let new = Surface::builder().interface("Handler", ["Handle() error"], PKG).build().unwrap();

        let diff = diff_surfaces(&old, &new, &used(&[("Handler", "handler.go", 24)]));
        assert_eq!(diff.interface_changes.len(), 1);
        assert_eq!(diff.interface_changes[0].removed_methods, vec!["Close() error"]);
        assert!(diff.interface_changes[0].added_methods.is_empty());

        let diff = diff_surfaces(&old, &new, &UsageIndex::new());
        assert!(diff.interface_changes.is_empty());
        assert!(diff.is_empty());
    }

    #[test]
    fn method_rename_is_one_add_and_one_remove() {
        let usage = used(&[("Handler", "handler.go", 24)]);
        let diff = diff_surfaces(&old_lib(), &new_lib(), &usage);
        let change = &diff.interface_changes[0];
        assert_eq!(change.removed_methods, vec!["Handle(ctx context.Context) error"]);
        assert_eq!(
            change.added_methods,
            vec!["HandleWithContext(ctx context.Context, meta Metadata) error"]
        );
    }

    #[test]
    fn swapping_surfaces_swaps_interface_method_lists() {
        let usage = used(&[("Handler", "handler.go", 24)]);
        let forward = diff_surfaces(&old_lib(), &new_lib(), &usage);
        let backward = diff_surfaces(&new_lib(), &old_lib(), &usage);

        assert_eq!(forward.interface_changes.len(), backward.interface_changes.len());
        let (f, b) = (&forward.interface_changes[0], &backward.interface_changes[0]);
        assert_eq!(f.added_methods, b.removed_methods);
        assert_eq!(f.removed_methods, b.added_methods);
    }

    #[test]
    fn added_symbols_are_never_filtered() {
        let diff = diff_surfaces(&old_lib(), &new_lib(), &UsageIndex::new());
        let added: Vec<(&str, SymbolKind)> =
            diff.added.iter().map(|a| (a.name.as_str(), a.kind)).collect();
        assert_eq!(
            added,
            vec![
                ("Metadata", SymbolKind::Type),
                ("NewHelper", SymbolKind::Function),
                ("Option", SymbolKind::Type),
            ]
        );
    }

    #[test]
    fn removed_types_and_interfaces_follow_usage() {
        let old = Surface::builder()
            .named_type("Config", "struct{}", PKG)
            .named_type("Legacy", "struct{}", PKG)
            .interface("Closer", ["Close() error"], PKG)
            .build()
            .unwrap();
        let usage = used(&[("Config", "a.go", 4), ("Closer", "b.go", 9)]);

        let diff = diff_surfaces(&old, &Surface::default(), &usage);

        let removed: Vec<(&str, SymbolKind)> =
            diff.removed.iter().map(|r| (r.name.as_str(), r.kind)).collect();
        assert_eq!(removed, vec![("Closer", SymbolKind::Interface), ("Config", SymbolKind::Type)]);
    }

    #[test]
    fn type_turning_into_interface_is_a_removal_plus_addition() {
        let old = Surface::builder().named_type("Store", "struct{}", PKG).build().unwrap();
        let new = Surface::builder().interface("Store", ["Get() error"], PKG).build().unwrap();

        let diff = diff_surfaces(&old, &new, &used(&[("Store", "s.go", 1)]));

        assert_eq!(diff.removed.len(), 1);
        assert_eq!(diff.removed[0].kind, SymbolKind::Type);
        assert_eq!(diff.added, vec![AddedSymbol { name: "Store".into(), kind: SymbolKind::Interface }]);
    }

    #[test]
    fn full_upgrade_scenario_reports_only_what_is_used() {
        let usage = used(&[
            ("ParseConfig", "main.go", 11),
            ("OldHelper", "main.go", 18),
            ("Transform", "main.go", 22),
            ("Handler", "handler.go", 24),
        ]);

        let diff = diff_surfaces(&old_lib(), &new_lib(), &usage);

        let removed: Vec<&str> = diff.removed.iter().map(|r| r.name.as_str()).collect();
        let changed: Vec<&str> = diff.changed.iter().map(|c| c.name.as_str()).collect();
        let ifaces: Vec<&str> = diff.interface_changes.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(removed, vec!["OldHelper"]);
        assert_eq!(changed, vec!["ParseConfig"]);
        assert_eq!(ifaces, vec!["Handler"]);
    }

    #[test]
    fn used_at_keeps_usage_order() {
        let old = Surface::builder().function("F", "func()", PKG).build().unwrap();
        let usage = used(&[("F", "z.go", 9), ("F", "a.go", 1)]);
        let diff = diff_surfaces(&old, &Surface::default(), &usage);
        assert_eq!(diff.removed[0].used_at, vec![Location::new("z.go", 9), Location::new("a.go", 1)]);
    }
}
