//! Computing one generation from the previous one.
//!
//! Rows are flat byte slices, `channel_count` bytes per cell, and wrap around
//! at both ends: the left neighbor of the first cell is the last cell.

use std::fmt::{self, Display};
use std::str::FromStr;
use crate::error::Error;
use crate::pixel::{Palette, RGB_CHANNELS};
use crate::rule::{neighborhood_index, Rule, RuleSet};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
  /// Black and white. Only the first rule is used.
  Standard,
  /// Each RGB channel evolves under its own rule.
  Split,
  /// Set cells are colored by which of their parents were lit. Only the
  /// first rule is used.
  Directional,
}

impl Default for Mode {
  fn default() -> Self {
    Mode::Standard
  }
}

impl Mode {
  pub const ALL: [Mode; 3] = [Mode::Standard, Mode::Split, Mode::Directional];

  pub fn name(self) -> &'static str {
    match self {
      Mode::Standard => "standard",
      Mode::Split => "split",
      Mode::Directional => "directional",
    }
  }

  /// Channels per cell this mode works on, if it is fixed.
  pub fn required_channels(self) -> Option<usize> {
    match self {
      Mode::Standard => None,
      Mode::Split | Mode::Directional => Some(RGB_CHANNELS),
    }
  }

  /// Number of rules this mode reads from a [`RuleSet`].
  pub fn rule_count(self) -> usize {
    match self {
      Mode::Split => 3,
      Mode::Standard | Mode::Directional => 1,
    }
  }

  pub fn generate(
    self,
    dst: &mut [u8],
    src: &[u8],
    channel_count: usize,
    rules: &RuleSet,
    palette: &Palette,
  ) {
    match self {
      Mode::Standard => standard(dst, src, channel_count, rules.primary(), palette),
      Mode::Split => split(dst, src, rules, palette),
      Mode::Directional => directional(dst, src, rules.primary(), palette),
    }
  }
}

impl Display for Mode {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    f.write_str(self.name())
  }
}

impl FromStr for Mode {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Mode::ALL.iter()
      .copied()
      .find(|mode| mode.name() == s)
      .ok_or_else(|| Error::UnknownMode(s.to_owned()))
  }
}

/// Indices of the left and right neighbors of cell `i`.
#[inline]
fn neighbors(i: usize, width: usize) -> (usize, usize) {
  let left = if i == 0 { width - 1 } else { i - 1 };
  let right = if i + 1 == width { 0 } else { i + 1 };
  (left, right)
}

#[inline]
fn cell(row: &[u8], i: usize, channel_count: usize) -> &[u8] {
  &row[i * channel_count..(i + 1) * channel_count]
}

fn check_rows(dst: &[u8], src: &[u8], channel_count: usize) -> usize {
  debug_assert_eq!(dst.len(), src.len());
  debug_assert!(channel_count > 0 && src.len() % channel_count == 0);
  src.len() / channel_count
}

/// A cell is active when every channel is `on`. Cells whose neighborhood maps
/// to a set bit are filled with `on`; the others are not written, so `dst`
/// must already hold `off` for them.
pub fn standard(
  dst: &mut [u8],
  src: &[u8],
  channel_count: usize,
  rule: Rule,
  palette: &Palette,
) {
  let width = check_rows(dst, src, channel_count);

  for (i, out) in dst.chunks_exact_mut(channel_count).enumerate() {
    let (l, r) = neighbors(i, width);
    let left = palette.is_on(cell(src, l, channel_count));
    let center = palette.is_on(cell(src, i, channel_count));
    let right = palette.is_on(cell(src, r, channel_count));

    if rule.apply(left, center, right) {
      out.iter_mut().for_each(|b| *b = palette.on);
    }
  }
}

/// Runs three independent automata, one per RGB channel, with `rules` giving
/// the rule of each. Every byte of `dst` is written.
pub fn split(dst: &mut [u8], src: &[u8], rules: &RuleSet, palette: &Palette) {
  let width = check_rows(dst, src, RGB_CHANNELS);

  for (i, out) in dst.chunks_exact_mut(RGB_CHANNELS).enumerate() {
    let (l, r) = neighbors(i, width);
    let (left, center, right) = (
      cell(src, l, RGB_CHANNELS),
      cell(src, i, RGB_CHANNELS),
      cell(src, r, RGB_CHANNELS),
    );

    for (channel, b) in out.iter_mut().enumerate() {
      let set = rules.channel(channel).apply(
        left[channel] == palette.on,
        center[channel] == palette.on,
        right[channel] == palette.on,
      );
      *b = if set { palette.on } else { palette.off };
    }
  }
}

/// A cell is active when any channel is not `off`. A cell whose neighborhood
/// maps to a set bit gets red, green and blue `on` when its left, center and
/// right parent respectively was active, and `half` otherwise. Other cells
/// are not written.
pub fn directional(dst: &mut [u8], src: &[u8], rule: Rule, palette: &Palette) {
  let width = check_rows(dst, src, RGB_CHANNELS);

  for (i, out) in dst.chunks_exact_mut(RGB_CHANNELS).enumerate() {
    let (l, r) = neighbors(i, width);
    let parents = [
      palette.is_lit(cell(src, l, RGB_CHANNELS)),
      palette.is_lit(cell(src, i, RGB_CHANNELS)),
      palette.is_lit(cell(src, r, RGB_CHANNELS)),
    ];

    if rule.bit(neighborhood_index(parents[0], parents[1], parents[2])) {
      for (b, &lit) in out.iter_mut().zip(parents.iter()) {
        *b = if lit { palette.on } else { palette.half };
      }
    }
  }
}
