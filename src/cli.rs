use clap::{Args, Parser, Subcommand};

/// Check for a container engine and probe containers by exact name
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Explicitly set container engine to use, name in PATH or a path
    #[arg(long, env = conprobe::vars::ENV_ENGINE)]
    pub engine: Option<String>,

    #[command(subcommand)]
    pub cmd: CliCommands,
}

#[derive(Args, Debug, Clone)]
pub struct CmdExistsArgs {
    /// Exact name of the container, running or stopped
    pub name: String,
}

#[derive(Args, Debug, Clone)]
pub struct CmdListArgs {
    /// Print records as JSON instead of one name per line
    #[arg(long)]
    pub json: bool,
}

#[derive(Subcommand, Debug)]
pub enum CliCommands {
    /// Check if the container engine can be executed, exits with 1 if not
    Available,

    /// Check if a container exists, exits with 1 if it does not and 2 on error
    #[command(arg_required_else_help = true)]
    Exists(CmdExistsArgs),

    /// List names of all containers, including stopped ones
    List(CmdListArgs),
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_exists() {
        let cli = Cli::try_parse_from(["conprobe", "--engine", "podman", "exists", "web"]).unwrap();

        assert_eq!(cli.engine.as_deref(), Some("podman"));
        assert!(matches!(cli.cmd, CliCommands::Exists(CmdExistsArgs { ref name }) if name == "web"));
    }

    #[test]
    fn test_exists_requires_name() {
        assert!(Cli::try_parse_from(["conprobe", "exists"]).is_err());
    }
}
