//! Sylva Scripting Boundary
//!
//! Defines the host scripting API surface and the bundled script routines
//! that run against it. The simulator owns grids, configuration and the
//! clock; scripts see them only through [`ScriptHost`].

pub mod error;
pub mod host;
pub mod routines;
pub mod types;

pub use error::{Error, Result};
pub use host::ScriptHost;
pub use routines::write_extra_output;
pub use types::{Binding, GridId};
