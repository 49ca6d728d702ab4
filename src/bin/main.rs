use std::env;
use std::path::{Path, PathBuf};
use std::process;

use crossterm::style::Stylize;

use vocab_core::persistence::{load_dictionary, save_dictionary};
use vocab_core::{EnrichmentStats, FrequencyIndex, RankingEngine, Thresholds};

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 3 {
        eprintln!(
            "Usage: {} <frequency-list> <dictionary.json> [output.json] [--thresholds B,I,A]",
            args[0]
        );
        process::exit(1);
    }

    let corpus_path = PathBuf::from(&args[1]);
    let dictionary_path = PathBuf::from(&args[2]);
    let mut output_path: Option<PathBuf> = None;
    let mut thresholds = Thresholds::default();

    let mut rest = args[3..].iter();
    while let Some(arg) = rest.next() {
        if arg == "--thresholds" {
            let Some(raw) = rest.next() else {
                eprintln!("ERROR: --thresholds flag requires an argument.");
                process::exit(1);
            };
            match parse_thresholds(raw) {
                Ok(t) => thresholds = t,
                Err(msg) => {
                    eprintln!("ERROR: {}", msg);
                    process::exit(1);
                }
            }
        } else if output_path.is_none() {
            output_path = Some(PathBuf::from(arg));
        } else {
            eprintln!("ERROR: unexpected argument '{}'", arg);
            process::exit(1);
        }
    }

    // No output path means updating the dictionary file in place.
    let output_path = output_path.unwrap_or_else(|| dictionary_path.clone());

    if let Err(e) = run(&corpus_path, &dictionary_path, &output_path, thresholds) {
        eprintln!("{} {}", "ERROR:".red().bold(), e);
        process::exit(1);
    }
}

fn parse_thresholds(raw: &str) -> Result<Thresholds, String> {
    let parts: Vec<&str> = raw.split(',').collect();
    if parts.len() != 3 {
        return Err(format!(
            "invalid thresholds '{}', expected <beginner>,<intermediate>,<advanced>",
            raw
        ));
    }
    let bounds: Result<Vec<u32>, _> = parts.iter().map(|p| p.trim().parse()).collect();
    match bounds {
        Ok(b) => Thresholds::new(b[0], b[1], b[2]).map_err(|e| e.to_string()),
        Err(_) => Err(format!("invalid thresholds '{}', expected three integers", raw)),
    }
}

fn run(
    corpus_path: &Path,
    dictionary_path: &Path,
    output_path: &Path,
    thresholds: Thresholds,
) -> vocab_core::Result<()> {
    println!("Loading frequency list...");
    let index = FrequencyIndex::load(corpus_path)?;
    println!("Loaded {} words from frequency list", index.len());

    println!("Loading dictionary from {}...", dictionary_path.display());
    let mut dictionary = load_dictionary(dictionary_path)?;
    println!("Processing {} words...", dictionary.words.len());

    let engine = RankingEngine::new(index, thresholds);
    let stats = engine.run(&mut dictionary);

    println!("Saving updated dictionary to {}...", output_path.display());
    save_dictionary(&dictionary, output_path)?;

    print_stats(&stats, thresholds);
    Ok(())
}

fn print_stats(stats: &EnrichmentStats, t: Thresholds) {
    println!("\n{}", "=== Statistics ===".bold());
    println!(
        "{} {} words",
        format!("Beginner (1-{}):", t.beginner).green(),
        stats.beginner
    );
    println!(
        "{} {} words",
        format!("Intermediate ({}-{}):", t.beginner + 1, t.intermediate).yellow(),
        stats.intermediate
    );
    println!(
        "{} {} words",
        format!("Advanced ({}-{}):", t.intermediate + 1, t.advanced).magenta(),
        stats.advanced
    );
    println!(
        "{} {} words",
        format!("Expert (>{}):", t.advanced).red(),
        stats.expert
    );
    println!(
        "{} {} words",
        "Not found in frequency list:".dim(),
        stats.not_found
    );
    println!("\nTotal words: {}", stats.total);
    println!("\n{}", "Dictionary updated successfully!".green().bold());
}
