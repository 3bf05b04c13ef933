// Layout constants shared by the sidebar and the card grid.

/// Card size in logical pixels; every card in the grid has the same footprint.
pub const CARD_WIDTH: f32 = 300.0;
pub const CARD_HEIGHT: f32 = 400.0;

/// Gap between cards in the grid
pub const CARD_GAP: f32 = 20.0;

/// Width of the left filters sidebar
pub const SIDEBAR_WIDTH: f32 = 230.0;

/// Card-specific layout constants
pub mod card {
    /// Inner margin of card frame (symmetric)
    pub const INNER_MARGIN: f32 = 12.0;

    /// Border radius of card corners
    pub const ROUNDING: f32 = 12.0;

    /// Cover keeps the 3:2 ratio of the original artwork
    pub const COVER_ASPECT: f32 = 2.0 / 3.0;

    pub const COVER_ROUNDING: f32 = 8.0;

    /// Height reserved for the description block
    pub const DESCRIPTION_HEIGHT: f32 = 64.0;

    /// Diameter of an attribute badge
    pub const ATTRIBUTE_SIZE: f32 = 32.0;

    /// Border width of the active card
    pub const ACTIVE_STROKE: f32 = 2.5;
}
