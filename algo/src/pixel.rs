use crate::error::Error;

pub const RGB_CHANNELS: usize = 3;

/// The byte values a cell channel can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
  pub(crate) off: u8,
  pub(crate) half: u8,
  pub(crate) on: u8,
}

impl Default for Palette {
  fn default() -> Self {
    Self {
      off: 0x00,
      half: 0x45,
      on: 0xff,
    }
  }
}

impl Palette {
  pub fn new(off: u8, half: u8, on: u8) -> Result<Self, Error> {
    if off == half || half == on || off == on {
      return Err(Error::IndistinctPalette { off, half, on });
    }
    Ok(Self { off, half, on })
  }

  /// Swaps dark and light. Distinct values stay distinct.
  pub fn inverted(self) -> Self {
    Self {
      off: 255 - self.off,
      half: 255 - self.half,
      on: 255 - self.on,
    }
  }

  pub fn off(&self) -> u8 {
    self.off
  }

  pub fn half(&self) -> u8 {
    self.half
  }

  pub fn on(&self) -> u8 {
    self.on
  }

  /// Every channel of the cell holds `on`.
  pub(crate) fn is_on(&self, cell: &[u8]) -> bool {
    cell.iter().all(|&b| b == self.on)
  }

  /// Some channel of the cell holds anything but `off`.
  pub(crate) fn is_lit(&self, cell: &[u8]) -> bool {
    cell.iter().any(|&b| b != self.off)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_inverted() {
    let p = Palette::default().inverted();
    assert_eq!((p.off(), p.half(), p.on()), (0xff, 0xba, 0x00));
    assert_eq!(p.inverted(), Palette::default());
  }

  #[test]
  fn test_indistinct() {
    assert_eq!(
      Palette::new(0, 0, 255),
      Err(Error::IndistinctPalette { off: 0, half: 0, on: 255 }));
    assert!(Palette::new(0, 1, 2).is_ok());
  }

  #[test]
  fn test_cell_state() {
    let p = Palette::default();
    assert!(p.is_on(&[0xff, 0xff, 0xff]));
    assert!(!p.is_on(&[0xff, 0x45, 0xff]));
    assert!(p.is_lit(&[0x00, 0x45, 0x00]));
    assert!(!p.is_lit(&[0x00, 0x00, 0x00]));
  }
}
