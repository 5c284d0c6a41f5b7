//! Range Tool
//!
//! Command-line front end for the range notation engine.
//!
//! ```text
//! range_tool convert "AsKs,AhKh" --from combo --to shorthand
//! range_tool expand AK
//! range_tool stats "JJ+, AKs"
//! range_tool grid "22+, A2s+" --json
//! range_tool spots scenario.json
//! ```

use std::process;

use clap::{Parser, Subcommand};

use range_notation::range::{expand, FormatConverter, RangeParser};
use range_notation::spots::ScenarioFile;
use range_notation::{EngineConfig, RangeReport, RangeStats};

#[derive(Parser)]
#[command(author, version, about = "Poker range notation tool", long_about = None)]
struct Cli {
    /// JSON engine configuration file.
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    #[command(about = "Convert a range between formats", alias = "cv")]
    Convert {
        #[arg(required = true)]
        text: String,
        #[arg(long, default_value = "combo")]
        from: String,
        #[arg(long, default_value = "shorthand")]
        to: String,
    },
    #[command(about = "List the specific combos of a hand", alias = "ex")]
    Expand {
        #[arg(required = true)]
        hand: String,
    },
    #[command(about = "Show combo counts of a range")]
    Stats {
        #[arg(required = true)]
        range: String,
    },
    #[command(about = "Draw a range as a 13x13 grid")]
    Grid {
        #[arg(required = true)]
        range: String,
        /// Print the full JSON report instead.
        #[arg(long)]
        json: bool,
    },
    #[command(about = "Import the spots of a scenario file")]
    Spots {
        #[arg(required = true)]
        file: String,
    },
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = match &cli.config {
        Some(path) => EngineConfig::load(path)?,
        None => EngineConfig::default(),
    };

    match cli.command {
        Command::Convert { text, from, to } => {
            let converter = FormatConverter::with_config(config)?;
            println!("{}", converter.convert_named(&text, &from, &to)?);
        }
        Command::Expand { hand } => {
            let combos: Vec<String> = expand(&hand)?.map(|c| c.to_string()).collect();
            println!("{} ({} combos)", combos.join(&config.separator), combos.len());
        }
        Command::Stats { range } => {
            let grid = RangeParser::with_config(config)?.parse(&range)?;
            let stats = RangeStats::from_grid(&grid);
            println!("Hands:    {} ({} pairs, {} suited, {} offsuit)",
                stats.selected_hands, stats.pairs, stats.suited, stats.offsuit);
            println!("Combos:   {}/{} ({:.2}%)",
                stats.selected_combos, stats.total_combos, stats.percentage);
            println!("Weighted: {:.2} ({:.2}%)",
                stats.weighted_combos, stats.weighted_percentage);
        }
        Command::Grid { range, json } => {
            let grid = RangeParser::with_config(config.clone())?.parse(&range)?;
            if json {
                println!("{}", RangeReport::new(&grid, &config)?.to_json()?);
            } else {
                print!("{}", grid.render_text());
            }
        }
        Command::Spots { file } => {
            let scenario = ScenarioFile::load(&file)?;
            if let Some(name) = &scenario.name {
                println!("=== {} ===", name);
            }
            for spot in scenario.build_ranges(&config)? {
                println!("{:<24} {:>6.2}%  {}", spot.name, spot.stats.percentage, spot.notation);
            }
        }
    }

    Ok(())
}
