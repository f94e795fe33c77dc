//=========================================================================
// orrery: binary entry point
//
//   env_logger → CLI → config file → CLI overrides → Engine::run
//
// Any error is logged and the process exits with a failure code.
//
//=========================================================================

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use log::{error, info};

use orrery::config::{Arguments, Config};
use orrery::EngineBuilder;

fn run() -> anyhow::Result<()> {
    let args = Arguments::parse();

    let mut config = Config::load(args.config_path()).context("loading configuration")?;
    args.apply(&mut config);
    config.validate().context("validating configuration")?;

    info!(
        "Starting '{}' ({}x{}, scene '{}')",
        config.window.title, config.window.width, config.window.height, config.scene.initial
    );

    EngineBuilder::new()
        .with_config(config)
        .build()
        .run()
        .context("running the demo")?;
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}
