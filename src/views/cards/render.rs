// Render facade for cards: re-export the implementation from views::cards::items
// so app code keeps using views::cards::{use_case_card, CARD_WIDTH}.

pub use crate::views::cards::items::{CardEvent, CoverView, use_case_card};

/// Fixed card size used by the grid (in logical pixels).
pub const CARD_WIDTH: f32 = crate::ui_constants::CARD_WIDTH;
pub const CARD_HEIGHT: f32 = crate::ui_constants::CARD_HEIGHT;
