use std::convert::TryFrom;
use std::path::Path;
use algo::{Grid, Mode, Seed};
use image::{DynamicImage, ImageBuffer};
use itertools::Itertools;
use log::debug;
use thiserror::Error;
use crate::options::Options;

#[derive(Debug, Error)]
pub enum ExportError {
  #[error("cannot encode cells with {0} channels")]
  UnsupportedChannels(usize),

  #[error("grid of {width}x{height} cells is too large for an image")]
  TooLarge {
    width: usize,
    height: usize,
  },

  #[error(transparent)]
  Image(#[from] image::ImageError),
}

/// `rule-030.png`, `rule-030-090-110-split-alternating.png` and so on: every
/// rule the mode reads, then the mode and the initial population unless they
/// are the defaults.
pub fn file_name(options: &Options) -> String {
  let rules = options.rules.rules()[..options.mode.rule_count()]
    .iter()
    .map(|rule| format!("{:03}", rule.number()))
    .join("-");
  let mut name = format!("rule-{}", rules);
  if options.mode != Mode::Standard {
    name.push('-');
    name.push_str(options.mode.name());
  }
  if options.seed != Seed::Centered {
    name.push('-');
    name.push_str(options.seed.name());
  }
  name.push_str(".png");
  name
}

/// Wraps the grid's buffer in an image, first generation on top.
pub fn to_image(grid: &Grid) -> Result<DynamicImage, ExportError> {
  let too_large = || ExportError::TooLarge {
    width: grid.width(),
    height: grid.height(),
  };
  let width = u32::try_from(grid.width()).map_err(|_| too_large())?;
  let height = u32::try_from(grid.height()).map_err(|_| too_large())?;
  let data = grid.as_bytes().to_vec();

  let image = match grid.channel_count() {
    1 => ImageBuffer::from_raw(width, height, data).map(DynamicImage::ImageLuma8),
    2 => ImageBuffer::from_raw(width, height, data).map(DynamicImage::ImageLumaA8),
    3 => ImageBuffer::from_raw(width, height, data).map(DynamicImage::ImageRgb8),
    4 => ImageBuffer::from_raw(width, height, data).map(DynamicImage::ImageRgba8),
    n => return Err(ExportError::UnsupportedChannels(n)),
  };
  image.ok_or_else(too_large)
}

/// Encodes the grid in the format given by the path's extension.
pub fn save_image(grid: &Grid, path: impl AsRef<Path>) -> Result<(), ExportError> {
  let path = path.as_ref();
  debug!("encoding {}x{} image to {}", grid.width(), grid.height(), path.display());
  to_image(grid)?.save(path)?;
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;
  use algo::{GridConfig, Palette, Rule, RuleSet};
  use pretty_assertions::assert_eq;

  #[test]
  fn test_file_name() {
    let mut options = Options {
      rules: RuleSet::split(Rule::new(30), Rule::new(90), Rule::new(7)),
      ..Options::default()
    };
    assert_eq!(file_name(&options), "rule-030.png");

    options.mode = Mode::Split;
    assert_eq!(file_name(&options), "rule-030-090-007-split.png");

    options.mode = Mode::Directional;
    options.seed = Seed::Alternating;
    assert_eq!(file_name(&options), "rule-030-directional-alternating.png");

    options.mode = Mode::Standard;
    options.seed = Seed::PseudoRandom;
    assert_eq!(file_name(&options), "rule-030-pseudorandom.png");
  }

  #[test]
  fn test_to_image() {
    let config = GridConfig {
      width: 5,
      height: 3,
      rules: RuleSet::single(Rule::new(90)),
      ..GridConfig::default()
    };
    let grid = Grid::generate(&config).unwrap();
    let image = to_image(&grid).unwrap();
    let rgb = image.as_rgb8().unwrap();

    assert_eq!(rgb.dimensions(), (5, 3));
    assert_eq!(rgb.get_pixel(2, 0).0, [0xff; 3]);
    assert_eq!(rgb.get_pixel(1, 1).0, [0xff; 3]);
    assert_eq!(rgb.get_pixel(2, 1).0, [0x00; 3]);
    assert_eq!(rgb.get_pixel(0, 2).0, [0xff; 3]);
    assert_eq!(&rgb.clone().into_raw()[..], grid.as_bytes());
  }

  #[test]
  fn test_luma() {
    let config = GridConfig {
      width: 3,
      height: 1,
      channel_count: 1,
      palette: Palette::default().inverted(),
      ..GridConfig::default()
    };
    let grid = Grid::generate(&config).unwrap();
    let image = to_image(&grid).unwrap();
    assert_eq!(image.as_luma8().unwrap().as_raw(), &vec![0xff, 0x00, 0xff]);
  }

  #[test]
  fn test_unsupported_channels() {
    let config = GridConfig {
      width: 3,
      height: 1,
      channel_count: 5,
      ..GridConfig::default()
    };
    let grid = Grid::generate(&config).unwrap();
    assert!(matches!(to_image(&grid), Err(ExportError::UnsupportedChannels(5))));
  }
}
