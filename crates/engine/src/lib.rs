//! Game loop and world setup.
//!
//! [`Session`] ties a [`core::World`](crate::core::World) to a
//! [`term::Surface`](crate::term::Surface) and drives it from the input
//! channel. [`WorldConfig`] decides how the world is generated.

pub mod config;
pub mod session;

pub use gridwalk_core as core;
pub use gridwalk_term as term;
pub use gridwalk_types as types;

pub use config::{Layout, WorldConfig};
pub use session::Session;
