//! Binary combinators: union, intersection, subtraction, composition.

use crate::cli::PairArgs;
use crate::definitions::Definitions;
use crate::error::Result;
use crate::output::Formatter;
use binrel_domain::{Element, Relation};

/// Execute the union command.
pub fn execute_union(args: PairArgs, formatter: &Formatter) -> Result<String> {
    combine(args, formatter, "∪", |l, r| l.union_with(r))
}

/// Execute the intersect command.
pub fn execute_intersect(args: PairArgs, formatter: &Formatter) -> Result<String> {
    combine(args, formatter, "∩", |l, r| l.intersection(r))
}

/// Execute the subtract command.
pub fn execute_subtract(args: PairArgs, formatter: &Formatter) -> Result<String> {
    combine(args, formatter, "\\", |l, r| l.subtract_pairs(r))
}

/// Execute the compose command.
pub fn execute_compose(args: PairArgs, formatter: &Formatter) -> Result<String> {
    combine(args, formatter, "∘", |l, r| l.composition(r))
}

fn combine<F>(args: PairArgs, formatter: &Formatter, symbol: &str, op: F) -> Result<String>
where
    F: FnOnce(&Relation<Element>, &Relation<Element>) -> Relation<Element>,
{
    let definitions = Definitions::load(&args.file)?;
    let left = definitions.get(&args.left)?;
    let right = definitions.get(&args.right)?;

    let mut result = op(left, right);
    result.set_name(format!("{} {} {}", left.name(), symbol, right.name()));
    tracing::info!("{} has {} pair(s)", result.name(), result.len());

    formatter.format_relation(&result)
}
