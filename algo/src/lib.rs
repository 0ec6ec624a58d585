//! Elementary cellular automata rendered as pixel buffers, one row per
//! generation.

pub mod error;
pub mod generate;
pub mod grid;
pub mod pixel;
pub mod rule;
pub mod seed;

pub use error::Error;
pub use generate::Mode;
pub use grid::{Grid, GridConfig};
pub use pixel::{Palette, RGB_CHANNELS};
pub use rule::{Rule, RuleSet, RuleVariants};
pub use seed::Seed;
