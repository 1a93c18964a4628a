//! CLI command definitions and argument parsing.

use crate::config::{OutputFormat, UniverseChoice};
use binrel_domain::ReflexivityMode;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// binrel - Explore finite binary relations and their algebra.
#[derive(Debug, Parser)]
#[command(name = "binrel")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "BINREL_CONFIG")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Pairs and 0/1 matrix (default)
    Plain,
    /// Table format
    Table,
    /// JSON format
    Json,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print a relation with its matrix
    Show(TargetArgs),

    /// Check reflexivity, symmetry, antisymmetry and transitivity
    Properties(PropertiesArgs),

    /// Print the derived domain and range
    Domain(TargetArgs),

    /// Union of two relations
    Union(PairArgs),

    /// Intersection of two relations
    Intersect(PairArgs),

    /// Pairs of LEFT that are not in RIGHT
    Subtract(PairArgs),

    /// Composition LEFT ∘ RIGHT
    Compose(PairArgs),

    /// Converse (swap every pair)
    Converse(TargetArgs),

    /// Complement against a universe
    Complement(ComplementArgs),

    /// Restriction to a subset
    Restrict(RestrictArgs),

    /// Emit the visualizer snapshot as JSON
    Snapshot(TargetArgs),
}

/// A definition file and one relation inside it.
#[derive(Debug, Args)]
pub struct TargetArgs {
    /// Relation definition file (TOML)
    pub file: PathBuf,

    /// Relation name (defaults to the first relation in the file)
    #[arg(short, long)]
    pub relation: Option<String>,
}

/// Arguments for the properties command.
#[derive(Debug, Args)]
pub struct PropertiesArgs {
    #[command(flatten)]
    pub target: TargetArgs,

    /// Reflexivity check (overrides config)
    #[arg(long, value_enum)]
    pub reflexivity: Option<ReflexivityArg>,
}

/// A definition file and two relations inside it.
#[derive(Debug, Args)]
pub struct PairArgs {
    /// Relation definition file (TOML)
    pub file: PathBuf,

    /// Left operand
    pub left: String,

    /// Right operand
    pub right: String,
}

/// Arguments for the complement command.
#[derive(Debug, Args)]
pub struct ComplementArgs {
    #[command(flatten)]
    pub target: TargetArgs,

    /// Universe to complement against (overrides config)
    #[arg(short, long, value_enum)]
    pub universe: Option<UniverseArg>,
}

/// Arguments for the restrict command.
#[derive(Debug, Args)]
pub struct RestrictArgs {
    #[command(flatten)]
    pub target: TargetArgs,

    /// Subset to restrict to (comma separated, e.g. 2,3,5)
    #[arg(short, long, value_delimiter = ',', num_args = 1.., required = true)]
    pub subset: Vec<String>,
}

/// Reflexivity argument.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum ReflexivityArg {
    /// Only endpoints of existing pairs need self-loops
    PairLocal,
    /// Every carrier element needs a self-loop
    FullCarrier,
}

/// Complement universe argument.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum UniverseArg {
    /// Carriers where declared, derived sets otherwise
    Auto,
    /// Declared carriers only
    External,
    /// Derived domain × range
    Derived,
}

impl From<CliFormat> for OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Plain => OutputFormat::Plain,
            CliFormat::Table => OutputFormat::Table,
            CliFormat::Json => OutputFormat::Json,
        }
    }
}

impl From<ReflexivityArg> for ReflexivityMode {
    fn from(arg: ReflexivityArg) -> Self {
        match arg {
            ReflexivityArg::PairLocal => ReflexivityMode::PairLocal,
            ReflexivityArg::FullCarrier => ReflexivityMode::FullCarrier,
        }
    }
}

impl From<UniverseArg> for UniverseChoice {
    fn from(arg: UniverseArg) -> Self {
        match arg {
            UniverseArg::Auto => UniverseChoice::Auto,
            UniverseArg::External => UniverseChoice::External,
            UniverseArg::Derived => UniverseChoice::Derived,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_compose_command() {
        let cli = Cli::parse_from(["binrel", "compose", "rel.toml", "R", "S"]);
        match cli.command {
            Command::Compose(args) => {
                assert_eq!(args.left, "R");
                assert_eq!(args.right, "S");
            }
            _ => panic!("Expected Compose command"),
        }
    }

    #[test]
    fn test_restrict_subset_list() {
        let cli = Cli::parse_from([
            "binrel", "restrict", "rel.toml", "-r", "R", "--subset", "2,3,5",
        ]);
        match cli.command {
            Command::Restrict(args) => {
                assert_eq!(args.subset, vec!["2", "3", "5"]);
                assert_eq!(args.target.relation.as_deref(), Some("R"));
            }
            _ => panic!("Expected Restrict command"),
        }
    }

    #[test]
    fn test_restrict_requires_subset() {
        assert!(Cli::try_parse_from(["binrel", "restrict", "rel.toml"]).is_err());
    }

    #[test]
    fn test_global_flags() {
        let cli = Cli::parse_from([
            "binrel", "show", "rel.toml", "-vv", "--format", "json", "--no-color",
        ]);
        assert_eq!(cli.verbose, 2);
        assert!(cli.no_color);
        assert!(matches!(cli.format, Some(CliFormat::Json)));
    }

    #[test]
    fn test_value_enum_names() {
        let cli = Cli::parse_from([
            "binrel",
            "properties",
            "rel.toml",
            "--reflexivity",
            "full-carrier",
        ]);
        match cli.command {
            Command::Properties(args) => {
                let mode: ReflexivityMode = args.reflexivity.unwrap().into();
                assert_eq!(mode, ReflexivityMode::FullCarrier);
            }
            _ => panic!("Expected Properties command"),
        }
    }

    #[test]
    fn test_universe_conversion() {
        let choice: UniverseChoice = UniverseArg::Derived.into();
        assert_eq!(choice, UniverseChoice::Derived);
    }
}
