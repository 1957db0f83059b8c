//! User-drawn motion paths.

pub mod authoring;
pub mod interp;
/// Path data model.
pub mod model;
