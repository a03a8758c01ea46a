//! Utility helpers shared across site modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns and pure calculations
//! from component markup to improve reuse and testability.

pub mod color;
pub mod experience;
pub mod motion;
pub mod palette;
pub mod theme_storage;
