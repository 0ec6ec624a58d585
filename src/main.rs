use std::path::PathBuf;
use std::process;
use anyhow::Context;
use log::{error, info, LevelFilter};
use simple_logger::SimpleLogger;
use wolfram::algo::Grid;
use wolfram::export;
use wolfram::options::{self, Command, Options, HELP};

const EXIT_RUNTIME: i32 = 1;
const EXIT_BAD_ARGS: i32 = 2;

fn main() {
  if let Err(e) = SimpleLogger::new().with_level(LevelFilter::Info).init() {
    eprintln!("wolfram: cannot set up logging: {}", e);
  }

  let command = match options::parse_os(std::env::args_os().skip(1)) {
    Ok(command) => command,
    Err(e) => {
      eprintln!("wolfram: {}", e);
      eprintln!("Try 'wolfram -h' for more information.");
      process::exit(EXIT_BAD_ARGS);
    }
  };

  match command {
    Command::Help => print!("{}", HELP),
    Command::Variants(rule) => print!("{}", rule.variants()),
    Command::Generate(options) => {
      if let Err(e) = generate(&options) {
        error!("{:#}", e);
        process::exit(EXIT_RUNTIME);
      }
    }
  }
}

fn generate(options: &Options) -> anyhow::Result<()> {
  let config = options.grid_config();
  let grid = Grid::generate(&config)?;
  info!("generated {} generations of {} cells, mode {}",
    grid.height(), grid.width(), config.mode);

  let path = options.output.clone()
    .unwrap_or_else(|| PathBuf::from(export::file_name(options)));
  export::save_image(&grid, &path)
    .with_context(|| format!("cannot write {}", path.display()))?;
  info!("saved {}", path.display());
  Ok(())
}
