mod cli;
mod fields_cmd;
mod fill_cmd;

use clap::Parser;
use cli::Cli;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        cli::Commands::Fill {
            ref filing,
            ref template,
            ref out,
        } => fill_cmd::run(filing, template, out),
        cli::Commands::Fields {
            ref template,
            ref format,
        } => fields_cmd::run(template, format),
    };

    if let Err(code) = result {
        std::process::exit(code);
    }
}
