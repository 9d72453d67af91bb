use std::io::{self, Read};
use std::process;

use abelian_search::{AbelianMatcher, Algorithm};
use clap::Parser;
use log::{error, info};

/// Find every anagram of PATTERN in TEXT.
#[derive(Parser, Debug)]
#[command(name = "abelian", version = abelian_search::VERSION)]
struct Cli {
    /// naive, sliding-window, fixed-fingerprint, reduced-fingerprint,
    /// table-fingerprint or difference-fingerprint
    #[arg(short, long, default_value_t = Algorithm::SlidingWindow)]
    algorithm: Algorithm,

    /// Print the number of occurrences instead of their positions
    #[arg(short, long)]
    count: bool,

    pattern: String,

    /// Read from stdin when omitted
    text: Option<String>,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let text = match cli.text {
        Some(text) => text,
        None => {
            let mut input = String::new();
            if let Err(e) = io::stdin().read_to_string(&mut input) {
                error!("Failed to read from stdin: {}", e);
                process::exit(1);
            }
            input
        }
    };
    let text = text.trim_end_matches(['\n', '\r']);

    let matcher = AbelianMatcher::new(cli.algorithm);
    info!(
        "{} over {} bytes, pattern of {} bytes",
        cli.algorithm,
        text.len(),
        cli.pattern.len()
    );

    if cli.count {
        match matcher.count(cli.pattern.as_bytes(), text.as_bytes()) {
            Ok(count) => println!("{}", count),
            Err(e) => {
                error!("{}", e);
                process::exit(1);
            }
        }
        return;
    }

    match matcher.locate_all(cli.pattern.as_bytes(), text.as_bytes()) {
        Ok(positions) => {
            for pos in positions {
                println!("{}", pos);
            }
        }
        Err(e) => {
            error!("{}", e);
            process::exit(1);
        }
    }
}
