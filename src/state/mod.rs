//! Shared page state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`page` for the record every controller reads,
//! `reveal` for the fade-in tracker) so each controller depends on a small
//! focused model.

pub mod page;
pub mod reveal;
