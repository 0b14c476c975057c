use anyhow::Context as _;

const DEFAULT_DIRECTIVE: &str = "info";

/// Installs the stderr subscriber. `RUST_LOG` wins over the default directive.
pub fn init() -> anyhow::Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .or_else(|_| tracing_subscriber::EnvFilter::try_new(DEFAULT_DIRECTIVE))
        .context("build log filter")?;

    // stdout carries the completion banner and `outline` output.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow::anyhow!("initialize tracing subscriber: {err}"))?;

    Ok(())
}
