//! Host scripting API
//!
//! The simulator exposes its ambient state to scripts through this trait:
//! configuration, the simulation clock, and per-unit raster grids. Scripts
//! hold only [`GridId`] handles; storage, the per-cell expression language
//! and grid serialization all live on the host side of the boundary.

use std::path::Path;

use crate::error::Result;
use crate::types::{Binding, GridId};

/// The scripting surface of the simulator
///
/// Grid handles are minted per fetch and stay valid for the lifetime of the
/// host. All failures surface as [`crate::Error`]; the host does not retry
/// or recover on behalf of the script.
pub trait ScriptHost {
    /// Read a named configuration setting
    fn setting(&self, key: &str) -> Result<String>;

    /// Current simulation year
    fn year(&self) -> i32;

    /// Fetch a per-resource-unit grid for a named stand variable
    ///
    /// The grid holds one cell per resource unit, copied out of the current
    /// simulator state.
    fn resource_unit_grid(&mut self, variable: &str) -> Result<GridId>;

    /// Fetch the basal-area share grid for a species code
    ///
    /// Cell values are the species' absolute basal area (m²) per resource
    /// unit.
    fn species_share_grid(&mut self, species: &str) -> Result<GridId>;

    /// Evaluate a per-cell arithmetic expression over named grid operands,
    /// writing the result into `target`'s cells in place
    ///
    /// Operands are referenced in the expression by their binding name. The
    /// target may itself appear among the bindings; its pre-combine cell
    /// values are what the expression reads. All bound grids must be
    /// spatially compatible with the target.
    fn combine(&mut self, target: GridId, expression: &str, bindings: &[Binding<'_>])
        -> Result<()>;

    /// Serialize a grid to disk at the given path
    ///
    /// The format is chosen by the host from the path extension (`.asc` is
    /// the ASCII raster convention). Parent directories are created as
    /// needed.
    fn save_grid(&mut self, grid: GridId, path: &Path) -> Result<()>;
}
