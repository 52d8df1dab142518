use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use facility_core::fixture::{MapFixture, load_fixture, write_fixture};
use facility_core::generate_map;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate a map and print its connectivity grid and events
    Dump {
        /// Seed string to generate from
        seed: String,
    },
    /// Generate a map and record it as a golden fixture
    Record {
        /// Seed string to generate from
        seed: String,
        /// Directory the fixture JSON is written into
        #[arg(short, long, default_value = "fixtures")]
        out: PathBuf,
    },
    /// Re-generate a map and compare it against a recorded fixture
    Verify {
        /// Seed string to generate from
        seed: String,
        /// Fixture file to compare against
        fixture: PathBuf,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();

    match args.command {
        Command::Dump { seed } => {
            let map = generate_map(&seed);
            println!("Seed {:?} -> {}", map.seed_text, map.seed);
            print!("{}", map.connectivity_dump());
            for event in &map.events {
                println!("event: {event}");
            }
            println!("Fingerprint: {:016x}", map.fingerprint());
        }
        Command::Record { seed, out } => {
            let map = generate_map(&seed);
            let fixture = MapFixture::capture(&map);
            let path = out.join(format!("mapdump_{seed}.json"));
            write_fixture(&path, &fixture)
                .with_context(|| format!("Failed to write fixture to {}", path.display()))?;
            println!("Recorded {} cells to {}", fixture.cells.len(), path.display());
        }
        Command::Verify { seed, fixture } => {
            let recorded = load_fixture(&fixture)
                .with_context(|| format!("Failed to load fixture from {}", fixture.display()))?;
            let map = generate_map(&seed);
            if let Some(mismatch) = recorded.first_mismatch(&map) {
                bail!("Fixture mismatch for seed {seed:?}: {mismatch}");
            }
            println!("Seed {seed:?} matches {}", fixture.display());
        }
    }

    Ok(())
}
