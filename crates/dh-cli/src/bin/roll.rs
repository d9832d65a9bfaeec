//! Dice roller CLI.
//!
//! `roll 2d6 1d20+5` rolls each argument in order; with no arguments it
//! drops into an interactive loop.

use std::io::{self, BufRead, Write};
use std::process;

use clap::Parser;
use colored::Colorize;
use rand::SeedableRng;
use rand::rngs::StdRng;

use dh_dice::{DiceExpression, RollResult, STANDARD_DICE};

#[derive(Parser)]
#[command(
    name = "roll",
    about = "Roll dice using standard tabletop notation",
    version
)]
struct Cli {
    /// Dice notation, e.g. "2d6", "1d20+5", "4d6-2"
    notation: Vec<String>,

    /// RNG seed for reproducible rolls
    #[arg(short, long)]
    seed: Option<u64>,

    /// Print results as JSON
    #[arg(long)]
    json: bool,
}

fn main() {
    let cli = Cli::parse();
    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let result = if cli.notation.is_empty() {
        interactive(&mut rng, cli.json)
    } else if cli.notation.len() == 1 && cli.notation[0].eq_ignore_ascii_case("help") {
        print_usage();
        Ok(())
    } else {
        roll_args(&cli.notation, &mut rng, cli.json)
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

/// Roll each argument in order; the first bad notation aborts the rest.
fn roll_args(notations: &[String], rng: &mut StdRng, json: bool) -> Result<(), String> {
    for notation in notations {
        let expr: DiceExpression = notation
            .parse()
            .map_err(|e: dh_dice::DiceError| e.to_string())?;
        warn_non_standard(&expr);
        print_roll(&expr.roll(rng), json)?;
    }
    Ok(())
}

fn interactive(rng: &mut StdRng, json: bool) -> Result<(), String> {
    println!("{}", "Dice Roller - Interactive Mode".bold());
    println!("Enter dice notation (e.g. '2d6', '1d20+5') or 'quit' to exit");
    let names: Vec<String> = STANDARD_DICE.iter().map(ToString::to_string).collect();
    println!("Standard dice: {}", names.join(", "));

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut line = String::new();

    loop {
        print!("\n> ");
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

        match input.parse::<DiceExpression>() {
            Ok(expr) => {
                warn_non_standard(&expr);
                print_roll(&expr.roll(rng), json)?;
            }
            Err(e) => println!("{}", format!("Error: {e}").yellow()),
        }
    }

    println!("Goodbye!");
    Ok(())
}

fn warn_non_standard(expr: &DiceExpression) {
    if !expr.die.is_standard() {
        println!(
            "{}",
            format!("Warning: {} is not a standard die, rolling anyway", expr.die).yellow()
        );
    }
}

fn print_roll(result: &RollResult, json: bool) -> Result<(), String> {
    if json {
        let text = serde_json::to_string_pretty(result).map_err(|e| e.to_string())?;
        println!("{text}");
        return Ok(());
    }

    let rolls: Vec<String> = result.rolls.iter().map(ToString::to_string).collect();
    println!();
    println!("Rolling {}:", result.expression.to_string().bold());
    println!("  Rolls: [{}]", rolls.join(", "));
    println!("  Sum: {}", result.sum());
    if result.expression.modifier != 0 {
        println!("  Modifier: {:+}", result.expression.modifier);
    }
    println!("  Total: {}", result.total().to_string().bold());
    Ok(())
}

fn print_usage() {
    println!();
    println!("{}", "Dice Roller".bold());
    println!();
    println!("Usage: roll [NOTATION]...");
    println!();
    println!("Notation:");
    println!("  XdY     roll X dice with Y sides each");
    println!("  XdY+Z   add modifier Z to the roll");
    println!("  XdY-Z   subtract modifier Z from the roll");
    println!();
    println!("Examples:");
    println!("  d20       one twenty-sided die");
    println!("  2d6       two six-sided dice");
    println!("  1d20+5    one d20 plus 5");
    println!("  4d6-2     four d6 minus 2");
    println!();
    println!("Standard dice: d4, d6, d8, d10, d12, d20, d100");
    println!();
    println!("Run without arguments for interactive mode.");
}
