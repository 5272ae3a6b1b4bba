//! Title configuration and per-frame timing input.

pub(crate) mod frame;
pub(crate) mod title;
