//! Bundled script routines
//!
//! Straight-line call sequences against [`ScriptHost`], with no control
//! flow or recovery of their own.

use std::path::PathBuf;

use tracing::debug;

use crate::error::Result;
use crate::host::ScriptHost;

/// Write the per-unit Norway spruce basal-area share as an extra grid
///
/// Builds an output name from the `user.code` scenario setting and the
/// current year, divides the spruce basal area (`bP`) by the total basal
/// area (`bT`) per cell, and saves the result as an ASCII raster at
/// `output/extra_grid_<code>_<year>.asc`.
pub fn write_extra_output<H: ScriptHost>(host: &mut H) -> Result<()> {
    let code = host.setting("user.code")?;
    let year = host.year();
    let path = PathBuf::from(format!("output/extra_grid_{code}_{year}.asc"));

    let basal_area = host.resource_unit_grid("basalArea")?;
    // basal area m2 of Norway spruce
    let spruce = host.species_share_grid("piab")?;
    debug!(%basal_area, %spruce, year, "grids fetched");

    host.combine(basal_area, "bP/bT", &[("bP", spruce), ("bT", basal_area)])?;
    host.save_grid(basal_area, &path)?;
    debug!(path = %path.display(), "extra grid written");

    Ok(())
}
