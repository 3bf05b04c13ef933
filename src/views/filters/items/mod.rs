// Sidebar building blocks used by render.rs.
pub mod segmented_panel;
pub mod tag_checkboxes;
