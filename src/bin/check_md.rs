use std::path::PathBuf;

use clap::Parser;
use journal_tidy::{lint, Settings};

#[derive(Parser)]
#[command(name = "check_md", about = "Strip trailing whitespace and report long lines and typos")]
struct Cli {
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

    let cli = Cli::parse();
    let run = lint::run(&Settings::new(cli.root))?;

    println!(
        "Checked {} files, {} flagged.",
        run.checked,
        run.flagged.len()
    );
    println!(
        "Lint pass complete. Report written to {}",
        run.report_path.display()
    );
    Ok(())
}
