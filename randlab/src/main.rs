use clap::{Parser, ValueEnum};
use congruential::{AdditiveCongruential, Fibonacci, MixedCongruential, MultiplicativeCongruential};
use midsquare::{MidProduct, MidSquare};
use randlab_stats::{chi_square, normalize, Significance};
use std::time::{SystemTime, UNIX_EPOCH};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Generator {
    /// Square the state, take the middle digits
    MidSquare,
    /// Multiply the two latest states, take the middle digits
    MidProduct,
    /// x' = (a*x + c) mod m
    Mixed,
    /// x' = (a*x) mod m
    Multiplicative,
    /// x' = (x + c) mod m
    Additive,
    /// x' = (x + previous x) mod m
    Fibonacci,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Separator {
    /// Concatenate the decimal strings
    None,
    Space,
    Newline,
}

#[derive(Parser)]
#[command(name = "randlab")]
#[command(about = "Classic pseudo-random digit generators", long_about = None)]
struct Args {
    /// Numbers to produce
    #[arg(short = 'n', long = "count", default_value = "5")]
    count: usize,

    /// First seed (defaults to current time in milliseconds mod 1000)
    #[arg(short = 's', long = "seed")]
    seed: Option<u64>,

    /// Second seed (mid-product and fibonacci)
    #[arg(long = "seed2")]
    seed2: Option<u64>,

    /// Window width in digits (mid-square and mid-product)
    #[arg(short = 'd', long = "digits", default_value = "4")]
    digits: u32,

    /// Generator to run
    #[arg(short = 'g', long = "generator", value_enum, default_value_t = Generator::MidSquare)]
    generator: Generator,

    /// Multiplier a (congruential family)
    #[arg(short = 'a', long = "multiplier", default_value = "1103515245")]
    multiplier: u64,

    /// Increment c (congruential family)
    #[arg(short = 'c', long = "increment", default_value = "12345")]
    increment: u64,

    /// Modulus m (congruential family)
    #[arg(short = 'm', long = "modulus", default_value = "2147483648")]
    modulus: u64,

    /// Print values normalized to [0,1), one per line
    #[arg(long = "normalized")]
    normalized: bool,

    /// Separator between values
    #[arg(long = "separator", value_enum, default_value_t = Separator::None)]
    separator: Separator,

    /// Run a chi-square uniformity test over the run, report to stderr
    #[arg(long = "chi-square")]
    chi_square: bool,

    /// Chi-square intervals
    #[arg(short = 'k', long = "intervals", default_value = "10")]
    intervals: usize,

    /// Report seed and generator choice to stderr
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,
}

fn main() {
    let args = Args::parse();

    // Use the provided seed or default to current time (millisecond
    // resolution, reduced to at most three digits)
    let seed = args.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("Time went backwards")
            .as_millis() as u64
            % 1000
    });

    if args.verbose {
        eprintln!("Seed: {}", seed);
        eprintln!("Generator: {:?}", args.generator);
    }

    // Run the chain; each generator reports its own normalization modulus
    let (values, modulus) = generate(&args, seed);

    if args.normalized {
        let normalized = match normalize(&values, modulus) {
            Ok(normalized) => normalized,
            Err(e) => {
                eprintln!("Normalization error: {}", e);
                std::process::exit(1);
            }
        };
        for value in &normalized {
            println!("{}", value);
        }
    } else {
        let rendered: Vec<String> = values.iter().map(|v| v.to_string()).collect();
        match args.separator {
            // The flagship output: one line, no separators, no trailing
            // newline
            Separator::None => print!("{}", rendered.join("")),
            Separator::Space => println!("{}", rendered.join(" ")),
            Separator::Newline => {
                for value in &rendered {
                    println!("{}", value);
                }
            }
        }
    }

    if args.chi_square {
        report_uniformity(&args, &values, modulus);
    }
}

/// Produce the requested chain along with the modulus that maps its values
/// into [0, 1).
fn generate(args: &Args, seed: u64) -> (Vec<u64>, u64) {
    match args.generator {
        Generator::MidSquare => {
            let mut gen = MidSquare::new(seed, args.digits).unwrap_or_else(|e| {
                eprintln!("Bad seed: {}", e);
                std::process::exit(1);
            });
            (gen.sequence(args.count), 10u64.pow(args.digits))
        }
        Generator::MidProduct => {
            let seed2 = require_seed2(args);
            let mut gen = MidProduct::new(seed, seed2, args.digits).unwrap_or_else(|e| {
                eprintln!("Bad seed: {}", e);
                std::process::exit(1);
            });
            (gen.sequence(args.count), 10u64.pow(args.digits))
        }
        Generator::Mixed => {
            let mut gen = MixedCongruential::new(seed, args.multiplier, args.increment, args.modulus)
                .unwrap_or_else(|e| {
                    eprintln!("Bad parameters: {}", e);
                    std::process::exit(1);
                });
            (gen.sequence(args.count), args.modulus)
        }
        Generator::Multiplicative => {
            let mut gen = MultiplicativeCongruential::new(seed, args.multiplier, args.modulus)
                .unwrap_or_else(|e| {
                    eprintln!("Bad parameters: {}", e);
                    std::process::exit(1);
                });
            (gen.sequence(args.count), args.modulus)
        }
        Generator::Additive => {
            let mut gen = AdditiveCongruential::new(seed, args.increment, args.modulus)
                .unwrap_or_else(|e| {
                    eprintln!("Bad parameters: {}", e);
                    std::process::exit(1);
                });
            (gen.sequence(args.count), args.modulus)
        }
        Generator::Fibonacci => {
            let seed2 = require_seed2(args);
            let mut gen = Fibonacci::new(seed, seed2, args.modulus).unwrap_or_else(|e| {
                eprintln!("Bad parameters: {}", e);
                std::process::exit(1);
            });
            (gen.sequence(args.count), args.modulus)
        }
    }
}

fn require_seed2(args: &Args) -> u64 {
    args.seed2.unwrap_or_else(|| {
        eprintln!("Generator {:?} needs a second seed (--seed2)", args.generator);
        std::process::exit(1);
    })
}

fn report_uniformity(args: &Args, values: &[u64], modulus: u64) {
    let normalized = match normalize(values, modulus) {
        Ok(normalized) => normalized,
        Err(e) => {
            eprintln!("Normalization error: {}", e);
            std::process::exit(1);
        }
    };
    match chi_square(&normalized, args.intervals, Significance::FivePercent) {
        Ok(report) => {
            eprintln!();
            eprintln!(
                "Chi-square: {:.4} (df {}, critical {:.3} at 0.05)",
                report.statistic, report.degrees_of_freedom, report.critical_value
            );
            if report.passes {
                eprintln!("Uniformity not rejected");
            } else {
                eprintln!("Uniformity rejected");
            }
        }
        Err(e) => {
            eprintln!("Chi-square error: {}", e);
            std::process::exit(1);
        }
    }
}
