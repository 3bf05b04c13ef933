pub mod items;
pub mod render;
pub use render::{FiltersOutput, draw_filters_panel};

/// Short glyph shown inside a segmented control for an enum variant.
pub trait EnumWithAlternativeNames {
    fn alternative_name(&self) -> &'static str;
}

/// Fluent message id naming an enum variant.
pub trait LocalizableName {
    fn loc_key(&self) -> &'static str;
}
