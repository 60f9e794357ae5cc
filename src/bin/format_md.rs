use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;
use journal_tidy::{corpus, index, Settings};

#[derive(Parser)]
#[command(name = "format_md", about = "Normalize journal markdown and regenerate the index")]
struct Cli {
    /// Write changes (default: dry run)
    #[arg(long)]
    apply: bool,
    /// Corpus root
    #[arg(default_value = ".")]
    root: PathBuf,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let t0 = Instant::now();
    let cli = Cli::parse();
    let settings = Settings::new(cli.root).with_apply(cli.apply);

    let run = index::run(&settings)?;

    println!(
        "Processed {} markdown files. Changed: {}",
        run.total,
        run.changed.len()
    );
    if run.changed.is_empty() {
        println!("No changes were necessary.");
    } else {
        println!("Changed files:");
        for rel in &run.changed {
            println!("- {}", corpus::display_rel(rel));
        }
    }
    if !run.applied {
        println!("\nDry run: nothing written. Re-run with --apply to save changes.");
    }

    let elapsed = t0.elapsed();
    if elapsed.as_secs() >= 1 {
        println!("\nDone in {:.1}s", elapsed.as_secs_f64());
    }
    Ok(())
}
