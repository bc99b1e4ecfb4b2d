//! Command dispatch

use std::io::{self, Write};

use clap::CommandFactory;
use clap_complete::{generate, Generator};
use tracing::{debug, instrument};

use crate::cli::args::{BuildArgs, Cli, Commands, ConfigCommands};
use crate::cli::output;
use crate::cli::{CliError, CliResult};
use crate::config::{global_config_path, Settings};
use crate::infrastructure::di::ServiceContainer;
use crate::infrastructure::InfraError;

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    match &cli.command {
        Some(Commands::Build(args)) => cmd_build(cli, args),
        Some(Commands::Config { command }) => match command {
            ConfigCommands::Show => cmd_config_show(cli),
            ConfigCommands::Path => cmd_config_path(cli),
        },
        Some(Commands::Completion { shell }) => {
            print_completions(*shell, &mut Cli::command());
            Ok(())
        }
        None => Err(CliError::Usage(
            "no command given, try `dommap --help`".to_string(),
        )),
    }
}

fn load_settings(cli: &Cli) -> CliResult<Settings> {
    Ok(Settings::load(cli.config.as_deref())?)
}

#[instrument(skip(cli))]
fn cmd_build(cli: &Cli, args: &BuildArgs) -> CliResult<()> {
    let mut settings = load_settings(cli)?;
    args.apply(&mut settings);
    debug!("effective settings: {:?}", settings);

    let container = ServiceContainer::new(settings);
    let source = container.line_source(args.input.as_deref());
    let tree = container.mindmap.build_tree(source.as_ref())?;
    let rendered = container.renderer().render(&tree)?;

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", rendered).map_err(|e| InfraError::io("write output", e))?;
    Ok(())
}

#[instrument(skip(cli))]
fn cmd_config_show(cli: &Cli) -> CliResult<()> {
    let settings = load_settings(cli)?;
    output::info(&settings.to_toml()?);
    Ok(())
}

fn cmd_config_path(cli: &Cli) -> CliResult<()> {
    match global_config_path() {
        Some(path) => {
            let state = if path.exists() { "" } else { " (not present)" };
            output::action("global", &format!("{}{}", path.display(), state));
        }
        None => output::warning("no home directory, global config disabled"),
    }
    if let Some(path) = &cli.config {
        output::action("explicit", &path.display());
    }
    Ok(())
}

fn print_completions<G: Generator>(gen: G, cmd: &mut clap::Command) {
    generate(gen, cmd, cmd.get_name().to_string(), &mut io::stdout());
}
