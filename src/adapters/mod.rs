//! Adapters implementing the port traits.
//!
//! `live` talks to the real disk; `snapshot` serves the collaborator ports
//! from pre-extracted surface, usage and dependency files.

pub mod live;
pub mod snapshot;

#[cfg(test)]
pub(crate) mod memory;
