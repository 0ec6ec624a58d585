use std::fmt::{self, Display};

/// A Wolfram rule. Bit `4 * left + 2 * center + right` tells whether a cell
/// with that neighborhood is set in the next generation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Rule(u8);

pub const RULE_30: Rule = Rule(30);
pub const RULE_90: Rule = Rule(90);
pub const RULE_110: Rule = Rule(110);

/// Neighborhoods symmetric under reflection: `000`, `010`, `101`, `111`.
const SYMMETRIC_MASK: u8 = 0b1010_0101;

/// Reflects the rule horizontally, so that the response to `(l, c, r)` becomes
/// the response to `(r, c, l)`.
pub fn mirror(r: u8) -> u8 {
  let mut nr = r & SYMMETRIC_MASK;

  // 011 <-> 110
  nr |= (r >> 3 & 1) << 6;
  nr |= (r >> 6 & 1) << 3;

  // 001 <-> 100
  nr |= (r >> 1 & 1) << 4;
  nr |= (r >> 4 & 1) << 1;

  nr
}

/// The rule producing the on/off inverted automaton.
pub fn complement(r: u8) -> u8 {
  !r.reverse_bits()
}

impl Rule {
  pub const fn new(num: u8) -> Self {
    Self(num)
  }

  pub fn number(self) -> u8 {
    self.0
  }

  /// Only the low three bits of `index` are read.
  pub fn bit(self, index: u8) -> bool {
    self.0 >> (index & 7) & 1 != 0
  }

  /// Looks up the next state for a neighborhood.
  pub fn apply(self, left: bool, center: bool, right: bool) -> bool {
    self.bit(neighborhood_index(left, center, right))
  }

  pub fn mirror(self) -> Self {
    Self(mirror(self.0))
  }

  pub fn complement(self) -> Self {
    Self(complement(self.0))
  }

  pub fn mirror_complement(self) -> Self {
    self.mirror().complement()
  }

  pub fn variants(self) -> RuleVariants {
    RuleVariants {
      rule: self,
      mirror: self.mirror(),
      complement: self.complement(),
      mirror_complement: self.mirror_complement(),
    }
  }
}

pub(crate) fn neighborhood_index(left: bool, center: bool, right: bool) -> u8 {
  (left as u8) << 2 | (center as u8) << 1 | right as u8
}

impl From<u8> for Rule {
  fn from(num: u8) -> Self {
    Self(num)
  }
}

/// Two rows: the eight neighborhoods from `111` down to `000` and the state
/// each one produces, `x` for set and `o` for clear.
impl Display for Rule {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    let mark = |b: bool| if b { 'x' } else { 'o' };

    write!(f, "{:4} ", self.0)?;
    for i in (0..8u8).rev() {
      write!(f, "{}{}{} ", mark(i & 4 != 0), mark(i & 2 != 0), mark(i & 1 != 0))?;
    }
    writeln!(f)?;

    write!(f, "     ")?;
    for i in (0..8u8).rev() {
      write!(f, " {}  ", mark(self.bit(i)))?;
    }
    writeln!(f)
  }
}

/// Per-channel rules. Standard and directional generation only look at the
/// first one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RuleSet {
  rules: [Rule; 3],
}

impl RuleSet {
  pub fn single(rule: Rule) -> Self {
    Self { rules: [rule; 3] }
  }

  pub fn split(red: Rule, green: Rule, blue: Rule) -> Self {
    Self { rules: [red, green, blue] }
  }

  pub fn primary(&self) -> Rule {
    self.rules[0]
  }

  pub fn channel(&self, channel: usize) -> Rule {
    self.rules[channel]
  }

  pub fn rules(&self) -> &[Rule; 3] {
    &self.rules
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleVariants {
  pub rule: Rule,
  pub mirror: Rule,
  pub complement: Rule,
  pub mirror_complement: Rule,
}

impl Display for RuleVariants {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    writeln!(f, "Rule\n{}", self.rule)?;
    writeln!(f, "Mirror\n{}", self.mirror)?;
    writeln!(f, "Complement\n{}", self.complement)?;
    writeln!(f, "Mirror Complement\n{}", self.mirror_complement)
  }
}
