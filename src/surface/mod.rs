//! Surface model: the exported API of one module version.
//!
//! A [`Surface`] holds three name-keyed maps (functions, named types and
//! interfaces). Methods are keyed as `TypeName.MethodName` so every symbol
//! name is unique across the whole surface. Surfaces are produced by a
//! [`crate::ports::SurfaceExtractor`] and are never mutated afterwards.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::SurfaceError;

/// Category of an exported symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SymbolKind {
    /// A free function or a method.
    Function,
    /// A named non-interface type.
    Type,
    /// An interface type.
    Interface,
}

impl SymbolKind {
    /// Lowercase label used in reports.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Function => "function",
            Self::Type => "type",
            Self::Interface => "interface",
        }
    }
}

impl fmt::Display for SymbolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An exported function or method with its normalized signature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionSignature {
    /// Surface-unique name (`Name` or `Type.Method`).
    pub name: String,
    /// Normalized signature string; compared byte-for-byte.
    pub signature: String,
    /// Package that declares the symbol.
    pub pkg_path: String,
    /// Whether this entry is a method bound to a named type.
    pub is_method: bool,
}

/// An exported named type. Only presence is diffed, never structure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDescriptor {
    /// Type name.
    pub name: String,
    /// Description of the underlying kind (e.g. `struct{...}`).
    pub kind: String,
    /// Package that declares the type.
    pub pkg_path: String,
}

/// An exported interface and its method set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterfaceDescriptor {
    /// Interface name.
    pub name: String,
    /// Full normalized method signatures. Order is irrelevant.
    pub methods: BTreeSet<String>,
    /// Package that declares the interface.
    pub pkg_path: String,
}

/// Exported API of one module version.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SurfaceSnapshot", into = "SurfaceSnapshot")]
pub struct Surface {
    functions: BTreeMap<String, FunctionSignature>,
    types: BTreeMap<String, TypeDescriptor>,
    interfaces: BTreeMap<String, InterfaceDescriptor>,
}

impl Surface {
    /// Starts building a surface.
    #[must_use]
    pub fn builder() -> SurfaceBuilder {
        SurfaceBuilder::default()
    }

    /// Exported functions and methods, sorted by name.
    #[must_use]
    pub fn functions(&self) -> &BTreeMap<String, FunctionSignature> {
        &self.functions
    }

    /// Exported named types, sorted by name.
    #[must_use]
    pub fn types(&self) -> &BTreeMap<String, TypeDescriptor> {
        &self.types
    }

    /// Exported interfaces, sorted by name.
    #[must_use]
    pub fn interfaces(&self) -> &BTreeMap<String, InterfaceDescriptor> {
        &self.interfaces
    }

    /// Returns which map holds `name`, if any.
    #[must_use]
    pub fn kind_of(&self, name: &str) -> Option<SymbolKind> {
        if self.functions.contains_key(name) {
            Some(SymbolKind::Function)
        } else if self.types.contains_key(name) {
            Some(SymbolKind::Type)
        } else if self.interfaces.contains_key(name) {
            Some(SymbolKind::Interface)
        } else {
            None
        }
    }

    /// Total number of exported symbols.
    #[must_use]
    pub fn len(&self) -> usize {
        self.functions.len() + self.types.len() + self.interfaces.len()
    }

    /// Returns `true` if the surface exports nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Incremental constructor for [`Surface`] that enforces name uniqueness.
#[derive(Debug, Default)]
pub struct SurfaceBuilder {
    surface: Surface,
    duplicate: Option<String>,
}

impl SurfaceBuilder {
    /// Adds a free function.
    #[must_use]
    pub fn function(self, name: &str, signature: &str, pkg_path: &str) -> Self {
        self.insert_function(name.to_string(), signature, pkg_path, false)
    }

    /// Adds a method, keyed as `type_name.method_name`.
    #[must_use]
    pub fn method(self, type_name: &str, method_name: &str, signature: &str, pkg_path: &str) -> Self {
        self.insert_function(format!("{type_name}.{method_name}"), signature, pkg_path, true)
    }

    /// Adds a named non-interface type.
    #[must_use]
    pub fn named_type(mut self, name: &str, kind: &str, pkg_path: &str) -> Self {
        if self.claim(name) {
            self.surface.types.insert(
                name.to_string(),
                TypeDescriptor {
                    name: name.to_string(),
                    kind: kind.to_string(),
                    pkg_path: pkg_path.to_string(),
                },
            );
        }
        self
    }

    /// Adds an interface with the given method signatures.
    #[must_use]
    pub fn interface<I, S>(mut self, name: &str, methods: I, pkg_path: &str) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if self.claim(name) {
            self.surface.interfaces.insert(
                name.to_string(),
                InterfaceDescriptor {
                    name: name.to_string(),
                    methods: methods.into_iter().map(Into::into).collect(),
                    pkg_path: pkg_path.to_string(),
                },
            );
        }
        self
    }

    /// Finishes the surface.
    ///
    /// # Errors
    ///
    /// Returns [`SurfaceError::DuplicateSymbol`] for the first name that was
    /// added more than once.
    pub fn build(self) -> Result<Surface, SurfaceError> {
        match self.duplicate {
            Some(name) => Err(SurfaceError::DuplicateSymbol { name }),
            None => Ok(self.surface),
        }
    }

    fn insert_function(mut self, name: String, signature: &str, pkg_path: &str, is_method: bool) -> Self {
        if self.claim(&name) {
            self.surface.functions.insert(
                name.clone(),
                FunctionSignature {
                    name,
                    signature: signature.to_string(),
                    pkg_path: pkg_path.to_string(),
                    is_method,
                },
            );
        }
        self
    }

    /// Returns `true` if `name` is free; otherwise records the first clash.
    fn claim(&mut self, name: &str) -> bool {
        if self.surface.kind_of(name).is_none() {
            return true;
        }
        if self.duplicate.is_none() {
            self.duplicate = Some(name.to_string());
        }
        false
    }
}

// --- Wire format ---

/// Serialized shape of a surface: names live in the map keys.
#[derive(Debug, Default, Serialize, Deserialize)]
struct SurfaceSnapshot {
    #[serde(default)]
    functions: BTreeMap<String, FunctionEntry>,
    #[serde(default)]
    types: BTreeMap<String, TypeEntry>,
    #[serde(default)]
    interfaces: BTreeMap<String, InterfaceEntry>,
}

#[derive(Debug, Serialize, Deserialize)]
struct FunctionEntry {
    signature: String,
    #[serde(default)]
    pkg_path: String,
    #[serde(default)]
    is_method: bool,
}

#[derive(Debug, Serialize, Deserialize)]
struct TypeEntry {
    #[serde(default)]
    kind: String,
    #[serde(default)]
    pkg_path: String,
}

#[derive(Debug, Serialize, Deserialize)]
struct InterfaceEntry {
    #[serde(default)]
    methods: Vec<String>,
    #[serde(default)]
    pkg_path: String,
}

impl TryFrom<SurfaceSnapshot> for Surface {
    type Error = SurfaceError;

    fn try_from(snapshot: SurfaceSnapshot) -> Result<Self, Self::Error> {
        let mut builder = Surface::builder();
        for (name, entry) in snapshot.functions {
            builder = builder.insert_function(name, &entry.signature, &entry.pkg_path, entry.is_method);
        }
        for (name, entry) in snapshot.types {
            builder = builder.named_type(&name, &entry.kind, &entry.pkg_path);
        }
        for (name, entry) in snapshot.interfaces {
            builder = builder.interface(&name, entry.methods, &entry.pkg_path);
        }
        builder.build()
    }
}

impl From<Surface> for SurfaceSnapshot {
    fn from(surface: Surface) -> Self {
        Self {
            functions: surface
                .functions
                .into_iter()
                .map(|(name, f)| {
                    let entry = FunctionEntry {
                        signature: f.signature,
                        pkg_path: f.pkg_path,
                        is_method: f.is_method,
                    };
                    (name, entry)
                })
                .collect(),
            types: surface
                .types
                .into_iter()
                .map(|(name, t)| (name, TypeEntry { kind: t.kind, pkg_path: t.pkg_path }))
                .collect(),
            interfaces: surface
                .interfaces
                .into_iter()
                .map(|(name, i)| {
                    let entry =
                        InterfaceEntry { methods: i.methods.into_iter().collect(), pkg_path: i.pkg_path };
                    (name, entry)
                })
                .collect(),
        }
    }
}
