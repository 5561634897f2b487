use anyhow::Result;
use clap::Parser;

use tcheck_cli::cli::commands::{check, configure, edit, presets};
use tcheck_cli::cli::{Args, Command};
use tcheck_cli::output::{self, OutputConfig};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    output::init(OutputConfig {
        quiet: args.quiet,
        ..OutputConfig::default()
    });

    match args.command {
        Some(Command::Configure { show }) => {
            configure::run_configure(show)?;
        }
        Some(Command::Voices) => {
            presets::print_voices();
        }
        Some(Command::Styles) => {
            presets::print_styles();
        }
        Some(Command::Edit {
            mode,
            voice,
            style,
            locale,
        }) => {
            let options = edit::EditOptions {
                mode,
                voice,
                style,
                locale,
            };
            edit::run_edit(options).await?;
        }
        None => {
            let options = check::CheckOptions {
                file: args.file,
                mode: args.mode,
                voice: args.voice,
                style: args.style,
                locale: args.locale,
                endpoint: args.endpoint,
                model: args.model,
                no_cache: args.no_cache,
                write: args.write,
            };
            check::run_check(options).await?;
        }
    }

    Ok(())
}
