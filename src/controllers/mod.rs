//! Browser wiring for the page behaviors.
//!
//! ARCHITECTURE
//! ============
//! Each controller attaches its own listeners from `init` and reacts to its
//! own events. They share one `PageContext`; the only cross-controller call
//! is navigation closing the mobile menu.

pub mod dom;
pub mod form;
pub mod menu;
pub mod navigation;
pub mod particles;
pub mod reveal;
pub mod theme;
