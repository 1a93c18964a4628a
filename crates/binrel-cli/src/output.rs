//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use binrel_domain::{Element, PropertyReport, Relation};
use colored::*;
use std::collections::BTreeSet;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format a relation.
    pub fn format_relation(&self, relation: &Relation<Element>) -> Result<String> {
        match self.format {
            OutputFormat::Plain => Ok(relation.to_display_string()?),
            OutputFormat::Table => self.format_relation_table(relation),
            OutputFormat::Json => self.format_snapshot(relation),
        }
    }

    /// Format a relation's snapshot as JSON, regardless of the selected format.
    pub fn format_snapshot(&self, relation: &Relation<Element>) -> Result<String> {
        Ok(serde_json::to_string_pretty(&relation.snapshot())?)
    }

    /// Format a property report.
    pub fn format_properties(&self, name: &str, report: &PropertyReport) -> Result<String> {
        let rows = [
            ("reflexive", report.reflexive),
            ("symmetric", report.symmetric),
            ("antisymmetric", report.antisymmetric),
            ("transitive", report.transitive),
            ("equivalence", report.is_equivalence()),
            ("partial order", report.is_partial_order()),
        ];

        match self.format {
            OutputFormat::Json => {
                let json = serde_json::json!({
                    "name": name,
                    "reflexive": report.reflexive,
                    "symmetric": report.symmetric,
                    "antisymmetric": report.antisymmetric,
                    "transitive": report.transitive,
                    "equivalence": report.is_equivalence(),
                    "partial_order": report.is_partial_order(),
                });
                Ok(serde_json::to_string_pretty(&json)?)
            }
            OutputFormat::Table => {
                let mut builder = Builder::default();
                builder.push_record(["Property", "Holds"]);
                for (property, holds) in rows {
                    builder.push_record([property.to_string(), self.flag(holds)]);
                }
                Ok(self.finish_table(builder))
            }
            OutputFormat::Plain => {
                let lines: Vec<String> = rows
                    .iter()
                    .map(|(property, holds)| format!("{}: {}", property, self.flag(*holds)))
                    .collect();
                Ok(format!("{}\n{}", name, lines.join("\n")))
            }
        }
    }

    /// Format derived domain and range.
    pub fn format_domain_range(&self, relation: &Relation<Element>) -> Result<String> {
        let domain = relation.domain();
        let range = relation.range();

        match self.format {
            OutputFormat::Json => {
                let json = serde_json::json!({
                    "name": relation.name(),
                    "domain": domain,
                    "range": range,
                });
                Ok(serde_json::to_string_pretty(&json)?)
            }
            OutputFormat::Table => {
                let mut builder = Builder::default();
                builder.push_record(["Set", "Elements"]);
                builder.push_record(["domain".to_string(), braces(&domain)]);
                builder.push_record(["range".to_string(), braces(&range)]);
                Ok(self.finish_table(builder))
            }
            OutputFormat::Plain => Ok(format!(
                "dom({name}) = {}\nrng({name}) = {}",
                braces(&domain),
                braces(&range),
                name = relation.name()
            )),
        }
    }

    /// Format a relation as pair line plus a labelled 0/1 table.
    fn format_relation_table(&self, relation: &Relation<Element>) -> Result<String> {
        let matrix = relation.matrix_representation()?;

        let mut builder = Builder::default();
        let mut header = vec![relation.name().to_string()];
        header.extend(matrix.columns().iter().map(ToString::to_string));
        builder.push_record(header);

        for (i, label) in matrix.rows().iter().enumerate() {
            let mut record = vec![label.to_string()];
            if let Some(row) = matrix.row(i) {
                record.extend(row.iter().map(|&set| u8::from(set).to_string()));
            }
            builder.push_record(record);
        }

        Ok(format!("{}\n{}", relation, self.finish_table(builder)))
    }

    fn finish_table(&self, builder: Builder) -> String {
        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));
        table.to_string()
    }

    fn flag(&self, holds: bool) -> String {
        if holds {
            self.colorize("true", "green")
        } else {
            self.colorize("false", "red")
        }
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "yellow" => text.yellow().to_string(),
            _ => text.to_string(),
        }
    }
}

/// Render a set as `{a, b, c}`.
pub fn braces(set: &BTreeSet<Element>) -> String {
    let items: Vec<String> = set.iter().map(ToString::to_string).collect();
    format!("{{{}}}", items.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_relation() -> Relation<Element> {
        let carrier: BTreeSet<Element> = [1, 2, 3].into_iter().map(Element::Int).collect();
        Relation::from_pairs(
            "R",
            [(1, 2), (2, 3)].map(|(a, b)| (Element::Int(a), Element::Int(b))),
        )
        .carriers(Some(carrier.clone()), Some(carrier))
    }

    fn report() -> PropertyReport {
        PropertyReport {
            reflexive: false,
            symmetric: false,
            antisymmetric: true,
            transitive: false,
        }
    }

    #[test]
    fn test_plain_relation() {
        let formatter = Formatter::new(OutputFormat::Plain, false);
        let output = formatter.format_relation(&create_test_relation()).unwrap();
        assert_eq!(
            output,
            "R = {(1, 2), (2, 3)}\n   1, 2, 3\n1 [0, 1, 0]\n2 [0, 0, 1]\n3 [0, 0, 0]"
        );
    }

    #[test]
    fn test_table_relation() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_relation(&create_test_relation()).unwrap();
        assert!(output.starts_with("R = {(1, 2), (2, 3)}\n"));
        assert!(output.contains('╭'));
        assert!(output.contains("│ 1 "));
    }

    #[test]
    fn test_json_relation() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let output = formatter.format_relation(&create_test_relation()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["name"], "R");
        assert_eq!(value["pairs"], serde_json::json!([[1, 2], [2, 3]]));
        assert_eq!(value["carrier_a"], serde_json::json!([1, 2, 3]));
    }

    #[test]
    fn test_plain_properties() {
        let formatter = Formatter::new(OutputFormat::Plain, false);
        let output = formatter.format_properties("R", &report()).unwrap();
        assert!(output.starts_with("R\n"));
        assert!(output.contains("reflexive: false"));
        assert!(output.contains("antisymmetric: true"));
        assert!(output.contains("partial order: false"));
    }

    #[test]
    fn test_json_properties() {
        let formatter = Formatter::new(OutputFormat::Json, true);
        let output = formatter.format_properties("R", &report()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["antisymmetric"], true);
        assert_eq!(value["equivalence"], false);
    }

    #[test]
    fn test_table_properties() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_properties("R", &report()).unwrap();
        assert!(output.contains("Property"));
        assert!(output.contains("transitive"));
    }

    #[test]
    fn test_domain_range_plain() {
        let formatter = Formatter::new(OutputFormat::Plain, false);
        let output = formatter.format_domain_range(&create_test_relation()).unwrap();
        assert_eq!(output, "dom(R) = {1, 2}\nrng(R) = {2, 3}");
    }

    #[test]
    fn test_colorize_disabled() {
        let formatter = Formatter::new(OutputFormat::Plain, false);
        assert_eq!(formatter.warning("careful"), "⚠ careful");
    }

    #[test]
    fn test_braces() {
        let set: BTreeSet<Element> = ["b", "a"].into_iter().map(Element::from).collect();
        assert_eq!(braces(&set), "{a, b}");
        assert_eq!(braces(&BTreeSet::new()), "{}");
    }
}
