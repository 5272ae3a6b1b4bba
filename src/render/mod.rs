//! Layer composition and the per-frame title renderer.

pub(crate) mod batch;
pub(crate) mod compositor;
pub(crate) mod layer;
pub(crate) mod title;
