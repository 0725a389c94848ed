use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Clone, Debug, Parser)]
#[command(version, about = "Serve the scoreboard site")]
pub struct Cli {
    /// Configuration file. Defaults to: $XDG_CONFIG/scoreboard/config.yml
    #[arg(short, long = "config", value_name = "FILE", global = true)]
    pub config_path: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Clone, Debug, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Run the HTTP server (the default)
    Serve,
    /// Print a commented config template to stdout
    ConfigTemplate,
    /// Write the config template to the configuration file
    ConfigInit,
}

impl Cli {
    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Serve)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serves_when_no_subcommand_is_given() {
        let cli = Cli::try_parse_from(["scoreboard"]).unwrap();

        assert_eq!(cli.command(), Command::Serve);
        assert!(cli.config_path.is_none());
    }

    #[test]
    fn config_flag_works_before_and_after_the_subcommand() {
        let before = Cli::try_parse_from(["scoreboard", "-c", "site.yml", "serve"]).unwrap();
        let after = Cli::try_parse_from(["scoreboard", "config-init", "--config", "x.yml"]).unwrap();

        assert_eq!(before.config_path, Some(PathBuf::from("site.yml")));
        assert_eq!(before.command(), Command::Serve);
        assert_eq!(after.config_path, Some(PathBuf::from("x.yml")));
        assert_eq!(after.command(), Command::ConfigInit);
    }

    #[test]
    fn unknown_subcommand_is_rejected() {
        assert!(Cli::try_parse_from(["scoreboard", "reset-scores"]).is_err());
    }
}
