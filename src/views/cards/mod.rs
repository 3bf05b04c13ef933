pub mod items;
pub mod render;
pub use render::{CARD_HEIGHT, CARD_WIDTH, CardEvent, CoverView, use_case_card};
