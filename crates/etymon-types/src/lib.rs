pub mod palette;
pub mod types;

pub use palette::{COLOR_PALETTE, color_for};
pub use types::{EnrichedRelatedWord, RelatedWordDraft, RelatedWordKind, WordRootResult};
