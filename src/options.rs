use std::ffi::OsString;
use std::path::PathBuf;
use algo::{GridConfig, Mode, Palette, Rule, RuleSet, Seed, RGB_CHANNELS};
use thiserror::Error;

pub const HELP: &str = "\
Usage: wolfram -v -r RULE
Usage: wolfram [-i] [-p POPULATION] [-m standard]   -r RULE
Usage: wolfram [-i] [-p POPULATION]  -m directional -r RULE
Usage: wolfram [-i] [-p POPULATION]  -m split       -r RULE -g RULE -b RULE

Generates an elementary cellular automaton and saves it as a PNG image.

  -r RULE               Wolfram rule (0-255)
  -m MODE               Generation mode {standard, split, directional}
                        Default: standard
                        If 'split' is chosen for the mode, both of '-g' and
                        '-b' must also be specified.
  -p POPULATION         Initial population {centered, alternating, pseudorandom}
                        Default: centered
  -i                    Invert 'on' and 'off' values.

  -g RULE, -b RULE      Specify additional rules for the green and blue
                        channels. Ignored if the MODE (-m) is not 'split'.

  -W WIDTH              Cells per generation. Default: 640
  -H HEIGHT             Number of generations. Default: 480
  -o PATH               Output file. Default: named after the rules and mode.

  -v                    Display rule variants (mirror, complement) and exit.
  -h                    Display this text and exit.


Generation Modes (-m):
  standard              A standard black/white generation.
  split                 Red, green, and blue channels are split.
  directional           The colour of each cell depends on which parents
                        were responsible for its activation.
";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum OptionsError {
  #[error("option requires an argument -- '{0}'")]
  MissingValue(char),

  #[error("invalid option -- '{0}'")]
  UnknownFlag(String),

  #[error("invalid number {value:?} -- '{flag}'")]
  InvalidNumber {
    flag: char,
    value: String,
  },

  #[error("rule out of range {value} -- '{flag}'")]
  RuleOutOfRange {
    flag: char,
    value: i64,
  },

  #[error("missing option -- '{0}'")]
  MissingRule(char),

  #[error(transparent)]
  Config(#[from] algo::Error),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
  Help,
  /// Print the mirror and complement of a rule.
  Variants(Rule),
  Generate(Options),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
  pub mode: Mode,
  pub seed: Seed,
  pub rules: RuleSet,
  pub invert: bool,
  pub width: usize,
  pub height: usize,
  pub output: Option<PathBuf>,
}

impl Default for Options {
  fn default() -> Self {
    let grid = GridConfig::default();
    Self {
      mode: grid.mode,
      seed: grid.seed,
      rules: grid.rules,
      invert: false,
      width: grid.width,
      height: grid.height,
      output: None,
    }
  }
}

impl Options {
  /// Standard generation draws dark cells on a light background, so `-i`
  /// turns that off again.
  pub fn palette(&self) -> Palette {
    if self.invert != (self.mode == Mode::Standard) {
      Palette::default().inverted()
    } else {
      Palette::default()
    }
  }

  pub fn grid_config(&self) -> GridConfig {
    GridConfig {
      width: self.width,
      height: self.height,
      channel_count: RGB_CHANNELS,
      mode: self.mode,
      seed: self.seed,
      rules: self.rules,
      palette: self.palette(),
    }
  }
}

/// Parses command line arguments, program name excluded. Flags follow getopt
/// conventions: `-r 30` and `-r30` are the same, and flags without a value
/// can be grouped as in `-iv`.
pub fn parse<I>(args: I) -> Result<Command, OptionsError>
where
  I: IntoIterator,
  I::Item: Into<String>,
{
  let mut args = args.into_iter().map(Into::into);
  let mut options = Options::default();
  let mut variants = false;
  let mut rules: [Option<u8>; 3] = [None; 3];

  while let Some(arg) = args.next() {
    let flags = match arg.strip_prefix('-') {
      Some(flags) if !flags.is_empty() => flags.to_owned(),
      _ => return Err(OptionsError::UnknownFlag(arg.clone())),
    };

    for (i, flag) in flags.char_indices() {
      match flag {
        'h' => return Ok(Command::Help),
        'v' => {
          variants = true;
          continue;
        }
        'i' => {
          options.invert = true;
          continue;
        }
        'r' | 'g' | 'b' | 'm' | 'p' | 'W' | 'H' | 'o' => {}
        _ => return Err(OptionsError::UnknownFlag(format!("-{}", flag))),
      }

      // everything else takes a value, either the rest of this argument or
      // the next one
      let rest = &flags[i + flag.len_utf8()..];
      let value = if rest.is_empty() {
        args.next().ok_or(OptionsError::MissingValue(flag))?
      } else {
        rest.to_owned()
      };

      match flag {
        'r' => rules[0] = Some(parse_rule(flag, &value)?),
        'g' => rules[1] = Some(parse_rule(flag, &value)?),
        'b' => rules[2] = Some(parse_rule(flag, &value)?),
        'm' => options.mode = value.parse()?,
        'p' => options.seed = value.parse()?,
        'W' => options.width = parse_size(flag, &value)?,
        'H' => options.height = parse_size(flag, &value)?,
        _ => options.output = Some(PathBuf::from(value)),
      }
      break;
    }
  }

  let red = Rule::new(rules[0].ok_or(OptionsError::MissingRule('r'))?);
  if variants {
    return Ok(Command::Variants(red));
  }

  options.rules = if options.mode == Mode::Split {
    let green = rules[1].ok_or(OptionsError::MissingRule('g'))?;
    let blue = rules[2].ok_or(OptionsError::MissingRule('b'))?;
    RuleSet::split(red, Rule::new(green), Rule::new(blue))
  } else {
    RuleSet::single(red)
  };

  options.grid_config().validate()?;
  Ok(Command::Generate(options))
}

/// Like [`parse`], for arguments straight from [`std::env::args_os`]. An
/// argument that is not valid UTF-8 is an unknown flag.
pub fn parse_os<I>(args: I) -> Result<Command, OptionsError>
where
  I: IntoIterator<Item = OsString>,
{
  let args = args.into_iter()
    .map(|arg| {
      arg.into_string()
        .map_err(|arg| OptionsError::UnknownFlag(arg.to_string_lossy().into_owned()))
    })
    .collect::<Result<Vec<_>, _>>()?;
  parse(args)
}

fn parse_rule(flag: char, value: &str) -> Result<u8, OptionsError> {
  let num: i64 = value.parse().map_err(|_| OptionsError::InvalidNumber {
    flag,
    value: value.to_owned(),
  })?;
  if num < 0 || num > 255 {
    return Err(OptionsError::RuleOutOfRange { flag, value: num });
  }
  Ok(num as u8)
}

fn parse_size(flag: char, value: &str) -> Result<usize, OptionsError> {
  value.parse().map_err(|_| OptionsError::InvalidNumber {
    flag,
    value: value.to_owned(),
  })
}
