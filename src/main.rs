use map_transform::{run_transform, TransformConfig, USAGE};
use std::env;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> anyhow::Result<()> {
    let Some(config) = TransformConfig::from_args(env::args_os().skip(1)) else {
        println!("{}", USAGE);
        return Ok(());
    };

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive("map_transform=info".parse()?))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stdout)
                .with_target(false)
                .without_time(),
        )
        .init();

    let report = run_transform(&config)?;
    tracing::debug!(rows = report.rows, cells = report.cells, "Transform finished");

    Ok(())
}
