use criterion::{black_box, criterion_group, criterion_main, Criterion};
use algo::*;

fn generate_benchmark(c: &mut Criterion) {
  for &mode in Mode::ALL.iter() {
    let config = GridConfig {
      mode,
      seed: Seed::PseudoRandom,
      rules: RuleSet::split(Rule::new(30), Rule::new(90), Rule::new(110)),
      ..GridConfig::default()
    };

    c.bench_function(&format!("640x480 {}", mode), |b| b.iter(|| {
      Grid::generate(black_box(&config)).unwrap()
    }));
  }
}

criterion_group!(benches, generate_benchmark);
criterion_main!(benches);
