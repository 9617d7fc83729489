//! Core boundary types
//!
//! Scripts never see grid contents. The host mints a [`GridId`] per fetch
//! and all grid operations go through the host with that handle.

use std::fmt;

/// Opaque handle to a host-owned grid instance
///
/// Each fetch mints a fresh handle, even for the same variable: grids are
/// copied out of the simulator state, and a script mutates its own copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GridId(pub u64);

impl fmt::Display for GridId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "grid#{}", self.0)
    }
}

/// Named grid operand inside a combine expression
///
/// The name is how the per-cell expression refers to the grid (`"bP"`,
/// `"bT"`). The target of a combine may appear among its own bindings.
pub type Binding<'a> = (&'a str, GridId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_id_display() {
        assert_eq!(GridId(7).to_string(), "grid#7");
    }
}
