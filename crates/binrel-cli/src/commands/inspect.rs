//! Read-only views: show, properties, domain, snapshot.

use crate::cli::{PropertiesArgs, TargetArgs};
use crate::config::Settings;
use crate::definitions::Definitions;
use crate::error::Result;
use crate::output::Formatter;
use binrel_domain::ReflexivityMode;

/// Execute the show command.
pub fn execute_show(args: TargetArgs, formatter: &Formatter) -> Result<String> {
    let definitions = Definitions::load(&args.file)?;
    let relation = definitions.select(args.relation.as_deref())?;
    formatter.format_relation(relation)
}

/// Execute the properties command.
pub fn execute_properties(
    args: PropertiesArgs,
    settings: &Settings,
    formatter: &Formatter,
) -> Result<String> {
    let definitions = Definitions::load(&args.target.file)?;
    let relation = definitions.select(args.target.relation.as_deref())?;

    let mode: ReflexivityMode = args
        .reflexivity
        .map(Into::into)
        .unwrap_or(settings.reflexivity);
    tracing::debug!("Checking properties of '{}' with {:?} reflexivity", relation.name(), mode);

    let report = relation.properties(mode);
    formatter.format_properties(relation.name(), &report)
}

/// Execute the domain command.
pub fn execute_domain(args: TargetArgs, formatter: &Formatter) -> Result<String> {
    let definitions = Definitions::load(&args.file)?;
    let relation = definitions.select(args.relation.as_deref())?;
    formatter.format_domain_range(relation)
}

/// Execute the snapshot command.
pub fn execute_snapshot(args: TargetArgs, formatter: &Formatter) -> Result<String> {
    let definitions = Definitions::load(&args.file)?;
    let relation = definitions.select(args.relation.as_deref())?;
    formatter.format_snapshot(relation)
}
