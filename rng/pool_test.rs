//! Pool sampling check - draws characters the same way passgen does and
//! compares the counts against a uniform distribution.
//!
//! Usage:
//!   ./pool_test                   # 1M draws from the full pool
//!   ./pool_test -n 10000000 -c l  # 10M draws, lowercase only
//!   ./pool_test --raw | ent       # stream draws to stdout

use std::io::{self, Write};
use std::process;

use rand::rngs::OsRng;

#[allow(dead_code)]
#[path = "../src/pass/charset.rs"]
mod charset;

use charset::CharacterPool;

/// Upper-tail 0.001 critical value of chi-square for `df` degrees of freedom
/// (Wilson-Hilferty approximation).
fn chi_square_critical(df: usize) -> f64 {
    const Z_999: f64 = 3.090_232;
    let k = df as f64;
    let t = 1.0 - 2.0 / (9.0 * k) + Z_999 * (2.0 / (9.0 * k)).sqrt();
    k * t.powi(3)
}

fn chi_square(counts: &[u64], draws: u64) -> f64 {
    let expected = draws as f64 / counts.len() as f64;
    counts
        .iter()
        .map(|&c| {
            let d = c as f64 - expected;
            d * d / expected
        })
        .sum()
}

fn pool_from(classes: &str) -> Option<CharacterPool> {
    let mut upper = false;
    let mut numbers = false;
    let mut symbols = false;
    for c in classes.chars() {
        match c {
            'l' => {}
            'u' => upper = true,
            'n' => numbers = true,
            's' => symbols = true,
            _ => return None,
        }
    }
    Some(CharacterPool::new(upper, numbers, symbols))
}

fn usage(code: i32) -> ! {
    eprintln!("Usage: pool_test [OPTIONS]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -n <DRAWS>     Number of characters to draw (default: 1000000)");
    eprintln!("  -c <CLASSES>   Pool classes: l (always), u, n, s (default: luns)");
    eprintln!("      --raw      Stream drawn characters to stdout forever");
    eprintln!("  -h, --help     Show this help");
    process::exit(code);
}

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let mut draws: u64 = 1_000_000;
    let mut classes = String::from("luns");
    let mut raw = false;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => usage(0),
            "--raw" => raw = true,
            "-n" => {
                i += 1;
                draws = match args.get(i).and_then(|s| s.parse().ok()) {
                    Some(n) if n > 0 => n,
                    _ => usage(2),
                };
            }
            "-c" => {
                i += 1;
                classes = args.get(i).cloned().unwrap_or_else(|| usage(2));
            }
            _ => usage(2),
        }
        i += 1;
    }

    let Some(pool) = pool_from(&classes) else {
        usage(2)
    };
    let mut rng = OsRng;

    if raw {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        let mut buf = [0u8; 8192];
        loop {
            for b in buf.iter_mut() {
                *b = pool.pick(&mut rng) as u8;
            }
            if out.write_all(&buf).is_err() {
                break;
            }
        }
        return;
    }

    let mut counts = vec![0u64; pool.len()];
    for _ in 0..draws {
        let c = pool.pick(&mut rng);
        if let Some(idx) = pool.chars().iter().position(|&p| p == c) {
            counts[idx] += 1;
        }
    }

    let stat = chi_square(&counts, draws);
    let df = pool.len() - 1;
    let critical = chi_square_critical(df);
    let expected = draws as f64 / pool.len() as f64;

    println!("pool: {} characters, {} draws", pool.len(), draws);
    for (c, &count) in pool.chars().iter().zip(&counts) {
        println!("  {c}  {count:>10}  {:+.4}%", (count as f64 - expected) / expected * 100.0);
    }
    println!("chi-square: {stat:.2} (df {df}, p=0.001 critical {critical:.2})");

    if stat > critical {
        println!("FAIL: distribution is not uniform");
        process::exit(1);
    }
    println!("PASS");
}

#[cfg(test)]
mod pool_tests {
    use super::*;

    #[test]
    fn critical_value_is_close_to_tables() {
        // Table values: df=25 -> 52.62, df=93 -> 140.9.
        assert!((chi_square_critical(25) - 52.62).abs() < 0.5);
        assert!((chi_square_critical(93) - 140.9).abs() < 1.0);
    }

    #[test]
    fn perfectly_flat_counts_score_zero() {
        assert_eq!(chi_square(&[10, 10, 10, 10], 40), 0.0);
    }

    #[test]
    fn class_letters() {
        assert_eq!(pool_from("l").unwrap().len(), 26);
        assert_eq!(pool_from("luns").unwrap().len(), 94);
        assert!(pool_from("x").is_none());
    }
}
