//! Terminal rendering module.
//!
//! A small, game-oriented rendering layer. Game objects draw themselves onto a
//! [`Surface`] through the [`Drawable`] capability; the surface is either an
//! in-memory [`FrameBuffer`] (tests, headless) or a [`TerminalSurface`] that
//! diffs the framebuffer and flushes it through crossterm.

pub mod fb;
pub mod renderer;
pub mod surface;

pub use gridwalk_core as core;
pub use gridwalk_types as types;

pub use fb::{FrameBuffer, ScreenCell};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer, TerminalSurface};
pub use surface::{flush_scene, flush_single, restore_cell, Drawable, Surface};
