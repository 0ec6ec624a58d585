use thiserror::Error;
use crate::generate::Mode;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
  #[error("{mode} generation needs {expected} channels per cell, got {got}")]
  ChannelCount {
    mode: Mode,
    expected: usize,
    got: usize,
  },

  #[error("grid must be at least 1x1, got {width}x{height}")]
  EmptyGrid {
    width: usize,
    height: usize,
  },

  #[error("grid of {width}x{height} cells does not fit in memory")]
  TooLarge {
    width: usize,
    height: usize,
  },

  #[error("cells need at least one channel")]
  ZeroChannels,

  #[error("palette values must be distinct, got off={off:#04x} half={half:#04x} on={on:#04x}")]
  IndistinctPalette {
    off: u8,
    half: u8,
    on: u8,
  },

  #[error("unknown generation mode {0:?}, expected one of: standard, split, directional")]
  UnknownMode(String),

  #[error("unknown initial population {0:?}, expected one of: centered, alternating, pseudorandom")]
  UnknownSeed(String),
}
