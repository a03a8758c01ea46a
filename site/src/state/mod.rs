//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`theme`, `ui`) so individual components can
//! depend on small focused models.

pub mod theme;
pub mod ui;
