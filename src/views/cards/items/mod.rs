// Card building blocks. Only card.rs is public; the rest are its pieces.
mod attributes;
pub mod card;
mod cover;
pub use card::{CardEvent, CoverView, use_case_card};
