use std::process::ExitCode;

use anyhow::Context as _;
use clap::Parser as _;

fn main() -> ExitCode {
    if let Err(err) = try_main() {
        eprintln!("{err:#}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

fn try_main() -> anyhow::Result<()> {
    tutorial_scaffold::logging::init().context("init logging")?;

    let cli = tutorial_scaffold::cli::Cli::parse();
    tracing::debug!(?cli, "parsed cli");

    match cli.command {
        None => {
            tutorial_scaffold::scaffold::run(Default::default()).context("generate")?;
        }
        Some(tutorial_scaffold::cli::Command::Generate(args)) => {
            tutorial_scaffold::scaffold::run(args).context("generate")?;
        }
        Some(tutorial_scaffold::cli::Command::Outline(args)) => {
            tutorial_scaffold::outline::show(args).context("outline")?;
        }
    }

    Ok(())
}
