//! uniformity-check: chi-square uniformity test over piped values
//!
//! This tool reads one value per line from stdin and tests the sample
//! against the uniform distribution. It's used to check that a generator
//! run produces acceptably uniform output.
//!
//! # Usage
//!
//! ```bash
//! # Test a normalized run
//! randlab -s 675 -n 100 --normalized | uniformity-check
//!
//! # Test raw values, normalizing by the generator's modulus
//! randlab -s 675 -n 100 --separator newline | uniformity-check -m 10000
//! ```
//!
//! # Exit Codes
//!
//! - 0: The sample passes the test
//! - 1: The sample fails the test
//! - 2: Error (no parsable values, bad interval count, etc.)

use clap::{Parser, ValueEnum};
use randlab_stats::{chi_square, normalize, Significance};
use std::io::{self, BufRead};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Alpha {
    #[value(name = "0.05")]
    FivePercent,
    #[value(name = "0.01")]
    OnePercent,
}

impl Alpha {
    fn significance(self) -> Significance {
        match self {
            Alpha::FivePercent => Significance::FivePercent,
            Alpha::OnePercent => Significance::OnePercent,
        }
    }
}

#[derive(Parser)]
#[command(name = "uniformity-check")]
#[command(about = "Chi-square uniformity test over piped values")]
#[command(
    long_about = "Reads one value per line from stdin and tests the sample against the uniform distribution.\n\n\
    Exit codes:\n  \
    0 = Sample passes\n  \
    1 = Sample fails\n  \
    2 = Error"
)]
struct Args {
    /// Number of intervals
    #[arg(short = 'k', long = "intervals", default_value = "10")]
    intervals: usize,

    /// Significance level for the critical value
    #[arg(long = "significance", value_enum, default_value_t = Alpha::FivePercent)]
    significance: Alpha,

    /// Treat input as raw integers and normalize by this modulus
    #[arg(short = 'm', long = "modulus")]
    modulus: Option<u64>,

    /// Show each interval's observed frequency
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,

    /// Quiet mode - only the exit code
    #[arg(short = 'q', long = "quiet")]
    quiet: bool,
}

fn main() {
    let args = Args::parse();

    let stdin = io::stdin();
    let mut sample: Vec<f64> = Vec::new();
    let mut raw: Vec<u64> = Vec::new();
    let mut skipped = 0usize;

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                eprintln!("Error reading stdin: {}", e);
                std::process::exit(2);
            }
        };

        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        // Collect raw integers or normalized floats depending on mode;
        // skip anything unparsable (headers, stray diagnostics)
        match args.modulus {
            Some(_) => match line.parse::<u64>() {
                Ok(v) => raw.push(v),
                Err(_) => skipped += 1,
            },
            None => match line.parse::<f64>() {
                Ok(v) => sample.push(v),
                Err(_) => skipped += 1,
            },
        }
    }

    if let Some(modulus) = args.modulus {
        sample = match normalize(&raw, modulus) {
            Ok(sample) => sample,
            Err(e) => {
                eprintln!("Normalization error: {}", e);
                std::process::exit(2);
            }
        };
    }

    let report = match chi_square(&sample, args.intervals, args.significance.significance()) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("Chi-square error: {}", e);
            std::process::exit(2);
        }
    };

    if !args.quiet {
        eprintln!();
        eprintln!("=== Uniformity Summary ===");
        eprintln!("Values:      {}", sample.len());
        if skipped > 0 {
            eprintln!("Skipped:     {} (unparsable lines)", skipped);
        }
        eprintln!("Intervals:   {}", args.intervals);
        eprintln!("Expected:    {:.2} per interval", report.expected);
        if args.verbose {
            for (i, &obs) in report.observed.iter().enumerate() {
                eprintln!(
                    "  [{:.2}, {:.2}): {}",
                    i as f64 / args.intervals as f64,
                    (i + 1) as f64 / args.intervals as f64,
                    obs
                );
            }
        }
        eprintln!(
            "Statistic:   {:.4} (df {}, critical {:.3} at {})",
            report.statistic,
            report.degrees_of_freedom,
            report.critical_value,
            args.significance.significance().alpha()
        );
    }

    if report.passes {
        if !args.quiet {
            eprintln!();
            eprintln!("✅ UNIFORMITY PASSED: statistic within the critical value");
        }
        std::process::exit(0);
    } else {
        if !args.quiet {
            eprintln!();
            eprintln!("❌ UNIFORMITY FAILED: statistic exceeds the critical value");
        }
        std::process::exit(1);
    }
}
