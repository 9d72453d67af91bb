//! Abelian Pattern Matching Example
//!
//! Finds every anagram of a pattern with each algorithm, and shows where the
//! fingerprint algorithms disagree with the exact ones.
//!
//! ```bash
//! cargo run --example anagram_search
//! ```

use abelian_search::{find_abelian, AbelianMatcher, Algorithm};

fn main() {
    println!("=== Abelian Search Demo ===\n");

    let text = b"cbabcacabbcaabcbbbaac";
    println!("Text ({} bytes):", text.len());
    println!("  \"{}\"", String::from_utf8_lossy(text));

    println!("\n--- Anagrams of \"abc\" ---\n");
    for algorithm in Algorithm::ALL {
        match find_abelian(b"abc", text, algorithm) {
            Ok(positions) => println!("  {:<24} {:?}", algorithm.to_string(), positions),
            Err(e) => println!("  {:<24} error: {}", algorithm.to_string(), e),
        }
    }

    // a=1 b=2 c=4: "aac" and "bbb" both sum to 6
    println!("\n--- Fingerprint collision: \"aac\" ---\n");
    for algorithm in Algorithm::ALL {
        let matcher = AbelianMatcher::new(algorithm);
        match matcher.locate_all(b"aac", text) {
            Ok(positions) => {
                let tag = if algorithm.is_exact() { "exact" } else { "approx" };
                println!("  {:<24} {:?} ({})", algorithm.to_string(), positions, tag);
            }
            Err(e) => println!("  {:<24} error: {}", algorithm.to_string(), e),
        }
    }

    println!("\n--- Errors ---\n");
    match find_abelian(b"much longer than the text itself", text, Algorithm::SlidingWindow) {
        Ok(_) => println!("  unexpected success"),
        Err(e) => println!("  {}", e),
    }
    match find_abelian(b"ab", b"aBc", Algorithm::FixedFingerprint) {
        Ok(_) => println!("  unexpected success"),
        Err(e) => println!("  {}", e),
    }
}
