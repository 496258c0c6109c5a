//! Terminal grid world (workspace facade crate).
//!
//! Re-exports the member crates under `crates/` as
//! `gridwalk::{core, engine, input, term, types}`.

pub use gridwalk_core as core;
pub use gridwalk_engine as engine;
pub use gridwalk_input as input;
pub use gridwalk_term as term;
pub use gridwalk_types as types;
