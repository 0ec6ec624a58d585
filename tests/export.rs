use std::env;
use std::fs;
use wolfram::algo::Grid;
use wolfram::export;
use wolfram::options::{self, Command};
use pretty_assertions::assert_eq;

fn options(args: &[&str]) -> options::Options {
  match options::parse(args.iter().copied()) {
    Ok(Command::Generate(options)) => options,
    other => panic!("unexpected {:?}", other),
  }
}

#[test]
fn saved_png_matches_grid() {
  let options = options(&["-m", "split", "-r", "30", "-g", "90", "-b", "110", "-p", "pseudorandom", "-W", "40", "-H", "30"]);
  let grid = Grid::generate(&options.grid_config()).unwrap();

  let dir = env::temp_dir().join(format!("wolfram-export-{}", std::process::id()));
  fs::create_dir_all(&dir).unwrap();
  let path = dir.join(export::file_name(&options));
  assert!(path.ends_with("rule-030-090-110-split-pseudorandom.png"));

  export::save_image(&grid, &path).unwrap();
  let image = image::open(&path).unwrap().as_rgb8().unwrap().clone();
  fs::remove_dir_all(&dir).unwrap();

  assert_eq!(image.dimensions(), (40, 30));
  assert_eq!(image.into_raw(), grid.into_raw());
}

#[test]
fn standard_mode_draws_dark_on_light() {
  let options = options(&["-r", "90", "-W", "9", "-H", "2"]);
  let grid = Grid::generate(&options.grid_config()).unwrap();
  let first = grid.row(0);
  assert_eq!(&first[..3], &[0xff, 0xff, 0xff]);
  assert_eq!(&first[12..15], &[0x00, 0x00, 0x00]);
}

#[test]
fn variants_report() {
  let rule = match options::parse(vec!["-v", "-r", "110"]) {
    Ok(Command::Variants(rule)) => rule,
    other => panic!("unexpected {:?}", other),
  };
  let report = rule.variants().to_string();
  let numbers: Vec<&str> = report.lines()
    .filter_map(|line| line.split_whitespace().next())
    .filter(|word| word.chars().all(|c| c.is_ascii_digit()))
    .collect();
  assert_eq!(numbers, vec!["110", "124", "137", "193"]);
}
