//! Command implementations.
//!
//! Each command loads its definition file, runs one domain operation and
//! returns the formatted result for `main` to print.

pub mod combine;
pub mod inspect;
pub mod transform;

pub use self::combine::{execute_compose, execute_intersect, execute_subtract, execute_union};
pub use self::inspect::{execute_domain, execute_properties, execute_show, execute_snapshot};
pub use self::transform::{execute_complement, execute_converse, execute_restrict};

use crate::cli::Command;
use crate::config::Settings;
use crate::error::Result;
use crate::output::Formatter;

/// Dispatch a parsed command.
pub fn execute(command: Command, settings: &Settings, formatter: &Formatter) -> Result<String> {
    match command {
        Command::Show(args) => execute_show(args, formatter),
        Command::Properties(args) => execute_properties(args, settings, formatter),
        Command::Domain(args) => execute_domain(args, formatter),
        Command::Union(args) => execute_union(args, formatter),
        Command::Intersect(args) => execute_intersect(args, formatter),
        Command::Subtract(args) => execute_subtract(args, formatter),
        Command::Compose(args) => execute_compose(args, formatter),
        Command::Converse(args) => execute_converse(args, formatter),
        Command::Complement(args) => execute_complement(args, settings, formatter),
        Command::Restrict(args) => execute_restrict(args, formatter),
        Command::Snapshot(args) => execute_snapshot(args, formatter),
    }
}
