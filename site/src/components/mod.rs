//! Page sections and reusable interactive pieces.

pub mod about;
pub mod contact;
pub mod experience;
pub mod footer;
pub mod hero;
pub mod magnetic_button;
pub mod nav;
pub mod projects;
pub mod reveal;
pub mod tag_list;
pub mod theme_picker;
pub mod writing;
