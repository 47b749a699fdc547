/// Threshold matrices, pattern catalog, and shared types for tramegen.
///
/// This crate contains the ordered-dithering matrix tables, the pattern
/// enum (canonical names, aliases, descriptions) and the normalization
/// of integer ranks into centered thresholds.

pub mod error;
pub mod matrix;
pub mod normalize;
pub mod pattern;

pub use error::PatternError;
pub use pattern::Pattern;
