use color_eyre::eyre::Result;
use tracing::debug;

use args::{Args, Commands};

mod args;
mod context;
mod init;
mod logging;
mod report;
mod run;
mod scenario;

fn main() -> Result<()> {
    color_eyre::install()?;

    let args = Args::new();
    let config = args.load_config()?;

    logging::init(&config.logging)?;
    debug!("Command-line parameters: {args:?}");

    match &args.command {
        Commands::Init(cmd) => init::run(&args.get_config_file_path(), &config, cmd.force),
        Commands::Run(cmd) => {
            let report = run::run(&cmd.scenario, config.voting.into())?;
            println!("{}", serde_json::to_string_pretty(&report)?);
            Ok(())
        }
    }
}
