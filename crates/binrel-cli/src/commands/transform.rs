//! Unary transformations: converse, complement, restriction.

use crate::cli::{ComplementArgs, RestrictArgs, TargetArgs};
use crate::config::{Settings, UniverseChoice};
use crate::definitions::Definitions;
use crate::error::{CliError, Result};
use crate::output::{braces, Formatter};
use binrel_domain::{ensure_homogeneous, Element, Relation, RelationError};
use std::collections::BTreeSet;

/// Execute the converse command.
pub fn execute_converse(args: TargetArgs, formatter: &Formatter) -> Result<String> {
    let definitions = Definitions::load(&args.file)?;
    let relation = definitions.select(args.relation.as_deref())?;

    let mut converse = relation.converse();
    converse.set_name(format!("{}^T", relation.name()));
    formatter.format_relation(&converse)
}

/// Execute the complement command.
pub fn execute_complement(
    args: ComplementArgs,
    settings: &Settings,
    formatter: &Formatter,
) -> Result<String> {
    let definitions = Definitions::load(&args.target.file)?;
    let relation = definitions.select(args.target.relation.as_deref())?;

    let universe: UniverseChoice = args
        .universe
        .map(Into::into)
        .unwrap_or(settings.complement_universe);
    tracing::debug!("Complementing '{}' against the {:?} universe", relation.name(), universe);

    let mut complement = match universe {
        UniverseChoice::Auto => relation.complement(),
        UniverseChoice::External => relation.complement_against_external_universe()?,
        UniverseChoice::Derived => relation.complement_against_derived_universe(),
    };
    complement.set_name(format!("{}'", relation.name()));
    formatter.format_relation(&complement)
}

/// Execute the restrict command.
pub fn execute_restrict(args: RestrictArgs, formatter: &Formatter) -> Result<String> {
    let definitions = Definitions::load(&args.target.file)?;
    let relation = definitions.select(args.target.relation.as_deref())?;

    ensure_single_set(relation)?;

    let subset: BTreeSet<Element> = args.subset.iter().map(|token| Element::parse(token)).collect();
    let underlying = match relation.carrier_a() {
        Some(carrier) => carrier.clone(),
        None => relation.field(),
    };
    ensure_homogeneous(subset.iter().chain(underlying.iter()))?;

    let ignored: BTreeSet<Element> = subset.difference(&underlying).cloned().collect();
    if !ignored.is_empty() {
        eprintln!(
            "{}",
            formatter.warning(&format!(
                "Ignoring subset elements outside {}: {}",
                relation.name(),
                braces(&ignored)
            ))
        );
    }

    let mut restricted = relation.restrict_to_subset(&subset);
    restricted.set_name(format!("{}|{}", relation.name(), braces(&subset)));
    formatter.format_relation(&restricted)
}

/// Restriction needs both sides of the relation to hold the same kind of element
fn ensure_single_set(relation: &Relation<Element>) -> Result<()> {
    let elements = relation
        .carrier_a()
        .into_iter()
        .flatten()
        .chain(relation.carrier_b().into_iter().flatten())
        .chain(relation.iter().flat_map(|(a, b)| [a, b]));

    match ensure_homogeneous(elements) {
        Err(RelationError::TypeMismatch { expected, found }) => Err(CliError::InvalidInput(format!(
            "Restriction needs a relation on one set, but {} mixes {} and {} elements",
            relation.name(),
            expected,
            found
        ))),
        other => other.map(|_| ()).map_err(CliError::from),
    }
}
