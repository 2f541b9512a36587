use std::path::PathBuf;

use clap::Parser;
use miette::Result;

use traffic_assets::output::{plural, Printer};
use traffic_assets::{Category, CATALOG};

/// Generate placeholder sprite PNGs for the traffic simulation
#[derive(Parser, Debug)]
#[command(name = "traffic-assets")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Directory to create the assets/ tree under
    #[arg(default_value = ".")]
    path: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = Printer::new();

    let report = traffic_assets::run(&cli.path, &printer)?;

    println!(
        "Generated {} under {}:",
        plural(report.total(), "sprite", "sprites"),
        cli.path.join("assets").display()
    );
    for category in Category::ALL {
        let names: Vec<String> = CATALOG
            .iter()
            .filter(|s| s.category == category)
            .map(|s| format!("{}.png", s.name))
            .collect();
        println!("  {}: {}", category.label(), names.join(", "));
    }

    Ok(())
}
