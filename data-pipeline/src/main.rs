/// Synthetic athlete dataset generator main entry point
mod export;
mod generator;

use std::env;
use std::path::Path;

use export::DatasetExporter;
use generator::generate_athletes;

const DEFAULT_COUNT: usize = 50;
const DEFAULT_SEED: u64 = 42;
const DEFAULT_OUTPUT_DIR: &str = "scatter-render-engine/assets";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();
    if args.len() > 4 {
        eprintln!("Usage: {} [count] [seed] [output_dir]", args[0]);
        std::process::exit(1);
    }

    let count = match args.get(1) {
        Some(raw) => raw.parse().unwrap_or_else(|_| {
            eprintln!("Invalid count: {raw}");
            std::process::exit(1);
        }),
        None => DEFAULT_COUNT,
    };
    let seed = match args.get(2) {
        Some(raw) => raw.parse().unwrap_or_else(|_| {
            eprintln!("Invalid seed: {raw}");
            std::process::exit(1);
        }),
        None => DEFAULT_SEED,
    };
    let output_dir = args
        .get(3)
        .map(String::as_str)
        .unwrap_or(DEFAULT_OUTPUT_DIR);

    let athletes = generate_athletes(count, seed);

    let exporter = DatasetExporter::new(Path::new(output_dir));
    let json_path = exporter.write_json(&athletes)?;
    let csv_path = exporter.write_csv(&athletes)?;

    println!("✓ Generated {count} athletes to {}", json_path.display());
    println!("✓ Saved CSV to {}", csv_path.display());

    Ok(())
}
