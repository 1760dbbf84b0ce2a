//! Command-line front end pieces that only the `paster` binary uses.

pub mod input;
pub mod render;
