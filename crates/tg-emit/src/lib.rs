/// Rendu texte des tables de seuils pour tramegen.
///
/// This crate turns catalog matrices into brace-delimited blocks of
/// normalized thresholds, ready to paste into a constant table.

pub mod block;
pub mod listing;

pub use block::{write_block, write_blocks};
pub use listing::write_listing;
