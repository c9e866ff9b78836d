//! Helpers shared across the page controllers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each module keeps its decision logic browser-free so it can be tested
//! natively; the few DOM-touching functions sit behind the `hydrate` feature.

pub mod form;
pub mod particles;
pub mod scroll_spy;
pub mod storage;
pub mod theme;
