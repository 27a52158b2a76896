pub mod cards;
pub mod document;
pub mod html;
pub mod node;

pub use cards::{Assets, MatchCardView, PlayerChip, SummaryView};
pub use document::{Block, Document, ShowMore};
pub use node::{Action, Node};
