//! Platform abstraction layer
//!
//! Browser collaborators for the tick engine:
//! - DOM/CSS-grid rendering
//! - Interval timer
//!
//! Native builds render through the log instead.

#[cfg(target_arch = "wasm32")]
pub mod web;

#[cfg(not(target_arch = "wasm32"))]
pub mod headless;
