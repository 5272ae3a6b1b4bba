//! Anchor resolution and text measurement.

pub(crate) mod anchor;
pub(crate) mod measure;
