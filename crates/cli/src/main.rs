use clap::Parser;

use invoicer_cli::Cli;

fn main() -> anyhow::Result<()> {
    // A missing .env file is fine; the environment and flags still apply.
    let _ = dotenvy::dotenv();
    invoicer_observability::init();

    let cli = Cli::parse();
    let output = invoicer_cli::run(&cli)?;
    println!("{output}");
    Ok(())
}
