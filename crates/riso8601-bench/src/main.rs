//! Parse throughput benchmark.
//!
//! Usage: `bench-parse [corpus.json]`
//!
//! The corpus is a JSON array of strings. Without one, a corpus covering every
//! accepted surface form (plus a share of invalid input) is generated.

use std::fs;
use std::time::Instant;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use riso8601::{ErrorKind, ParseOptions, days_in_month, parse_datetime, parse_datetime_with};
use tracing_subscriber::EnvFilter;

const PARSE_ITERS: u32 = 20;
const GENERATED_DATES: usize = 20_000;

const CORPUS_SEED: u64 = 0x9E37_79B9_7F4A_7C15;

/// Generates `count` date-times from a fixed seed so runs are comparable.
fn generate_corpus(count: usize) -> Vec<String> {
    let mut rng = ChaCha8Rng::seed_from_u64(CORPUS_SEED);
    let mut corpus = Vec::with_capacity(count);

    for i in 0..count {
        let year = rng.gen_range(1..=9999);
        let month = rng.gen_range(1..=12);
        let day = rng.gen_range(1..=days_in_month(year, month));
        let (hour, minute, second): (u32, u32, u32) =
            (rng.gen_range(0..24), rng.gen_range(0..60), rng.gen_range(0..60));
        let dash = if rng.gen_bool(0.5) { "-" } else { "" };
        let colon = if rng.gen_bool(0.5) { ":" } else { "" };

        let mut s = format!("{year:04}{dash}{month:02}{dash}{day:02}T{hour:02}{colon}{minute:02}");
        match rng.gen_range(0..3u8) {
            0 => {}
            1 => s.push_str(&format!("{colon}{second:02}")),
            _ => {
                let digits = rng.gen_range(1..=9);
                let frac = format!("{:09}", rng.gen_range(0..1_000_000_000u32));
                s.push_str(&format!("{colon}{second:02}.{}", &frac[..digits]));
            }
        }
        match rng.gen_range(0..4u8) {
            0 => {}
            1 => s.push('Z'),
            2 => s.push_str(&format!("+{:02}", rng.gen_range(0..24u32))),
            _ => s.push_str(&format!(
                "-{:02}{colon}{:02}",
                rng.gen_range(0..24u32),
                rng.gen_range(0..60u32)
            )),
        }

        // Every tenth entry gets a month in the nineties.
        if i % 10 == 0 {
            let month_at = 4 + dash.len();
            s.replace_range(month_at..month_at + 1, "9");
        }
        corpus.push(s);
    }
    corpus
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let corpus: Vec<String> = match std::env::args().nth(1) {
        Some(path) => {
            println!("Loading corpus from: {}", path);
            let json = fs::read_to_string(&path).expect("Failed to read corpus");
            serde_json::from_str(&json).expect("Corpus must be a JSON array of strings")
        }
        None => {
            println!("Generating {} date-times", GENERATED_DATES);
            generate_corpus(GENERATED_DATES)
        }
    };
    let total_bytes: usize = corpus.iter().map(String::len).sum();
    tracing::info!(entries = corpus.len(), bytes = total_bytes, "corpus ready");

    let (mut accepted, mut malformed, mut invalid, mut naive) = (0usize, 0usize, 0usize, 0usize);
    for text in &corpus {
        match parse_datetime(text) {
            Ok(dt) => {
                accepted += 1;
                if dt.is_naive() {
                    naive += 1;
                }
            }
            Err(e) if e.kind() == ErrorKind::Malformed => malformed += 1,
            Err(_) => invalid += 1,
        }
    }

    println!("\n=== Corpus ===");
    println!("Entries:   {}", corpus.len());
    println!("Accepted:  {} ({} naive)", accepted, naive);
    println!("Malformed: {}", malformed);
    println!("Invalid:   {}", invalid);

    for (label, options) in [("default", ParseOptions::new()), ("strict", ParseOptions::strict())] {
        let start = Instant::now();
        let mut ok = 0usize;
        for _ in 0..PARSE_ITERS {
            ok += corpus
                .iter()
                .filter(|text| parse_datetime_with(text, &options).is_ok())
                .count();
        }
        let elapsed = start.elapsed() / PARSE_ITERS;

        println!(
            "\nParse ({}): {:?} per pass (avg of {} iterations)",
            label, elapsed, PARSE_ITERS
        );
        println!(
            "  Throughput: {:.2} MB/s, {:.0} ns/entry",
            (total_bytes as f64 / 1_000_000.0) / elapsed.as_secs_f64(),
            elapsed.as_nanos() as f64 / corpus.len().max(1) as f64
        );
        println!("  Accepted per pass: {}", ok / PARSE_ITERS as usize);
    }
}
