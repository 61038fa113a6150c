// Command-line training driver. All pipeline logic lives in the library
// (src/lib.rs and its modules); this binary only parses the invocation
// parameters, runs one training session and reports the outcome.

use std::env;
use std::process;

use glyph_nn::{load_samples, parse_architecture, train, Label, Network, TrainConfig, UpdateDiscipline};

const USAGE: &str = "usage: glyph-nn <samples-file> <M> <architecture> <learning-rate> <min-error> <discipline> [max-epochs]

  samples-file   whitespace-delimited labeled samples
  M              landmark points per gesture; input layer must be 2*M
  architecture   x-separated layer sizes, e.g. 20x5x3x5
  learning-rate  positive float
  min-error      convergence threshold on the epoch mean squared error
  discipline     per-sample | full-batch | mini-batch
  max-epochs     optional cap; omitted means train until convergence";

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();
    if args.len() < 6 || args.len() > 7 {
        eprintln!("{}", USAGE);
        process::exit(2);
    }

    let m: usize = parse_arg(&args[1], "M");
    let learning_rate: f64 = parse_arg(&args[3], "learning-rate");
    let min_error: f64 = parse_arg(&args[4], "min-error");
    let discipline: UpdateDiscipline = parse_arg(&args[5], "discipline");
    let max_epochs: Option<usize> = args.get(6).map(|raw| parse_arg(raw, "max-epochs"));

    if m < 2 {
        fail("M must be at least 2");
    }
    if learning_rate <= 0.0 {
        fail("learning-rate must be positive");
    }
    if min_error <= 0.0 {
        fail("min-error must be positive");
    }

    let sizes = parse_architecture(&args[2]).unwrap_or_else(|e| fail(&e.to_string()));
    let mut network = Network::new(&sizes, m).unwrap_or_else(|e| fail(&e.to_string()));
    let samples =
        load_samples(&args[0], m, network.output_size()).unwrap_or_else(|e| fail(&e.to_string()));
    if samples.is_empty() {
        fail("sample file contains no records");
    }

    let mut config = TrainConfig::new(learning_rate, min_error, discipline);
    config.max_epochs = max_epochs;

    println!(
        "training {} on {} samples ({} classes, {} discipline)",
        args[2],
        samples.len(),
        Label::COUNT,
        args[5]
    );
    match train(&mut network, &samples, &config) {
        Ok(summary) if summary.converged => println!(
            "converged after {} epochs, mean squared error {:.6}",
            summary.epochs, summary.final_error
        ),
        Ok(summary) => println!(
            "stopped after {} epochs without convergence, mean squared error {:.6}",
            summary.epochs, summary.final_error
        ),
        Err(e) => fail(&e.to_string()),
    }
}

fn parse_arg<T: std::str::FromStr>(raw: &str, name: &str) -> T {
    match raw.parse() {
        Ok(value) => value,
        Err(_) => fail(&format!("invalid {}: {}", name, raw)),
    }
}

fn fail(message: &str) -> ! {
    eprintln!("error: {}", message);
    process::exit(1);
}
