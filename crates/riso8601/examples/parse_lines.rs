//! Parses each line of a file (or stdin) and prints the canonical form.

use std::fs;
use std::io::{self, Read};

use riso8601::parse_datetime;

fn main() {
    let input = match std::env::args().nth(1) {
        Some(path) => fs::read_to_string(&path).expect("Failed to read file"),
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf).expect("Failed to read stdin");
            buf
        }
    };

    let (mut ok, mut failed) = (0, 0);
    for (lineno, line) in input.lines().enumerate() {
        if line.is_empty() {
            continue;
        }
        match parse_datetime(line) {
            Ok(dt) => {
                ok += 1;
                match dt.epoch_micros() {
                    Some(micros) => println!("{:>5}: {}  (epoch {} us)", lineno + 1, dt, micros),
                    None => println!("{:>5}: {}  (naive)", lineno + 1, dt),
                }
            }
            Err(e) => {
                failed += 1;
                println!("{:>5}: {:?} -> {} error: {}", lineno + 1, line, e.kind(), e);
            }
        }
    }

    println!("\n{} parsed, {} rejected", ok, failed);
}
