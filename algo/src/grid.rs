use itertools::Itertools;
use log::{debug, trace};
use crate::error::Error;
use crate::generate::Mode;
use crate::pixel::{Palette, RGB_CHANNELS};
use crate::rule::RuleSet;
use crate::seed::Seed;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridConfig {
  pub width: usize,
  /// Number of generations, the first one included.
  pub height: usize,
  pub channel_count: usize,
  pub mode: Mode,
  pub seed: Seed,
  pub rules: RuleSet,
  pub palette: Palette,
}

impl Default for GridConfig {
  fn default() -> Self {
    Self {
      width: 640,
      height: 480,
      channel_count: RGB_CHANNELS,
      mode: Mode::default(),
      seed: Seed::default(),
      rules: RuleSet::default(),
      palette: Palette::default(),
    }
  }
}

impl GridConfig {
  pub fn validate(&self) -> Result<(), Error> {
    if self.width == 0 || self.height == 0 {
      return Err(Error::EmptyGrid { width: self.width, height: self.height });
    }
    if self.channel_count == 0 {
      return Err(Error::ZeroChannels);
    }
    match self.mode.required_channels() {
      Some(expected) if expected != self.channel_count => {
        return Err(Error::ChannelCount {
          mode: self.mode,
          expected,
          got: self.channel_count,
        });
      }
      _ => {}
    }
    self.buffer_size().map(|_| ())
  }

  fn row_size(&self) -> Option<usize> {
    self.width.checked_mul(self.channel_count)
  }

  /// Bytes needed for every generation. A `Vec` holds at most `isize::MAX`
  /// bytes.
  fn buffer_size(&self) -> Result<usize, Error> {
    self.row_size()
      .and_then(|row_size| row_size.checked_mul(self.height))
      .filter(|&size| size <= isize::MAX as usize)
      .ok_or(Error::TooLarge { width: self.width, height: self.height })
  }
}

/// Every generation of an automaton, first generation at the top. Stored
/// row-major with `channel_count` bytes per cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
  width: usize,
  height: usize,
  channel_count: usize,
  palette: Palette,
  data: Vec<u8>,
}

impl Grid {
  pub fn generate(config: &GridConfig) -> Result<Self, Error> {
    config.validate()?;
    let size = config.buffer_size()?;
    let row_size = size / config.height;
    debug!("generating {}x{} grid, mode {}, seed {}, rules {:?}",
      config.width, config.height, config.mode, config.seed,
      config.rules.rules().iter().map(|r| r.number()).collect_vec());

    // rows start out `off`, and generation only ever fills a row once
    let mut data = vec![config.palette.off; size];

    config.seed.fill(&mut data[..row_size], config.channel_count, &config.palette);

    for i in 1..config.height {
      let (done, rest) = data.split_at_mut(i * row_size);
      let src = &done[(i - 1) * row_size..];
      let dst = &mut rest[..row_size];
      config.mode.generate(dst, src, config.channel_count, &config.rules, &config.palette);
    }

    let grid = Self {
      width: config.width,
      height: config.height,
      channel_count: config.channel_count,
      palette: config.palette,
      data,
    };
    trace!("grid:\n{}", grid.render());
    Ok(grid)
  }

  pub fn width(&self) -> usize {
    self.width
  }

  pub fn height(&self) -> usize {
    self.height
  }

  pub fn channel_count(&self) -> usize {
    self.channel_count
  }

  pub fn row(&self, i: usize) -> &[u8] {
    let row_size = self.width * self.channel_count;
    &self.data[i * row_size..(i + 1) * row_size]
  }

  pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
    self.data.chunks_exact(self.width * self.channel_count)
  }

  pub fn as_bytes(&self) -> &[u8] {
    &self.data
  }

  pub fn into_raw(self) -> Vec<u8> {
    self.data
  }

  /// Draws the grid as text, one line per generation: `#` for a fully `on`
  /// cell, `.` for a fully `off` one and `+` for anything in between.
  pub fn render(&self) -> String {
    let palette = self.palette;
    self.rows()
      .map(|row| {
        row.chunks_exact(self.channel_count)
          .map(|cell| {
            if palette.is_on(cell) {
              '#'
            } else if palette.is_lit(cell) {
              '+'
            } else {
              '.'
            }
          })
          .collect::<String>()
      })
      .join("\n")
  }
}
