//! Treasure generator CLI.
//!
//! `hoard 12` prints a randomly generated hoard for CR 12; with no
//! argument it drops into an interactive loop.

use std::io::{self, BufRead, Write};
use std::process;

use clap::Parser;
use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use rand::SeedableRng;
use rand::rngs::StdRng;

use dh_treasure::{ChallengeRating, Denomination, TreasureError, TreasureHoard};

#[derive(Parser)]
#[command(
    name = "hoard",
    about = "Generate a treasure hoard for a challenge rating",
    version
)]
struct Cli {
    /// Challenge rating (1-20+; higher values pay out like 20)
    rating: Option<String>,

    /// RNG seed for reproducible hoards
    #[arg(short, long)]
    seed: Option<u64>,

    /// Print the hoard as JSON
    #[arg(long)]
    json: bool,
}

fn main() {
    let cli = Cli::parse();
    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let result = match cli.rating.as_deref() {
        None => interactive(&mut rng, cli.json),
        Some(input) if input.eq_ignore_ascii_case("help") => {
            print_usage();
            Ok(())
        }
        Some(input) => generate_once(input, &mut rng, cli.json),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

fn generate_once(input: &str, rng: &mut StdRng, json: bool) -> Result<(), String> {
    match ChallengeRating::parse(input) {
        Ok(rating) => print_hoard(&TreasureHoard::generate(rating, rng), json),
        Err(e @ TreasureError::RatingNotNumeric(_)) => {
            print_usage();
            Err(e.to_string())
        }
        Err(e) => Err(e.to_string()),
    }
}

fn interactive(rng: &mut StdRng, json: bool) -> Result<(), String> {
    println!("{}", "Treasure Generator - Interactive Mode".bold());
    println!("Enter a challenge rating (1-20+) or 'quit' to exit");

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut line = String::new();

    loop {
        print!("\nCR> ");
        io::stdout().flush().map_err(|e| e.to_string())?;

        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => break, // EOF
            Err(e) => return Err(e.to_string()),
            _ => {}
        }

        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        match input.to_lowercase().as_str() {
            "quit" | "exit" | "q" => break,
            "help" | "h" | "?" => {
                print_usage();
                continue;
            }
            _ => {}
        }

        match ChallengeRating::parse(input) {
            Ok(rating) => print_hoard(&TreasureHoard::generate(rating, rng), json)?,
            Err(e) => println!("{}", format!("Error: {e}").yellow()),
        }
    }

    println!("Happy adventuring!");
    Ok(())
}

fn print_hoard(hoard: &TreasureHoard, json: bool) -> Result<(), String> {
    if json {
        let text = serde_json::to_string_pretty(hoard).map_err(|e| e.to_string())?;
        println!("{text}");
        return Ok(());
    }

    println!();
    println!("  {} CR {}", "Treasure Hoard".bold(), hoard.rating);
    println!();

    if hoard.is_empty() {
        println!("  No treasure found!");
        println!();
    }

    if !hoard.coins.is_empty() {
        println!("  {}", "Coins".bold().underline());
        for denomination in Denomination::DISPLAY_ORDER {
            if let Some(amount) = hoard.coins.get(&denomination) {
                println!("  {amount} {denomination}");
            }
        }
        println!();
    }

    if !hoard.goods.is_empty() || !hoard.items.is_empty() {
        let mut table = Table::new();
        table.set_content_arrangement(ContentArrangement::Dynamic);
        table.set_header(vec!["Item", "Value (gp)"]);
        for good in &hoard.goods {
            table.add_row(vec![good.description.clone(), good.price.to_string()]);
        }
        for item in &hoard.items {
            table.add_row(vec![item.description.clone(), item.price.to_string()]);
        }
        println!("{table}");
        println!();
    }

    println!(
        "  {} {} gp",
        "Total value:".bold(),
        hoard.total_value().to_string().bold()
    );
    Ok(())
}

fn print_usage() {
    println!();
    println!("{}", "Treasure Generator".bold());
    println!();
    println!("Usage: hoard [RATING]");
    println!();
    println!("Arguments:");
    println!("  RATING    challenge rating (1-20+) to generate treasure for");
    println!();
    println!("Examples:");
    println!("  hoard 5     treasure for a CR 5 encounter");
    println!("  hoard 12    treasure for a CR 12 encounter");
    println!("  hoard       interactive mode");
}
