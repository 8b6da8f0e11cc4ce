use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// SQLite file to fill, created if missing
    database: PathBuf,

    /// JSON dump with categories and questions
    dump: PathBuf,

    /// Remove every existing category and question first
    #[arg(long)]
    reset: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    seed::load_bank(&args.database, &args.dump, args.reset)?;

    Ok(())
}
