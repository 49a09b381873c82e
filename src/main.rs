use clap::Parser;
use tracing_subscriber::EnvFilter;

use command_as_sql::cli::Args;
use command_as_sql::config::ConfigFile;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // stdout carries the script, so logs go to stderr
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let config = match &args.config {
        Some(path) => ConfigFile::load(path)?,
        None => ConfigFile::discover()?,
    };
    let output = args.command.run(&config, args.format)?;
    println!("{}", output);
    Ok(())
}
