//! Display implementation for Table

use std::fmt;

use super::Table;

// Width is measured in chars to stay consistent with the formatter's
// padding rules.
fn width(s: &str) -> usize {
    s.chars().count()
}

impl fmt::Display for Table {
    /// Render the table dataframe-style.
    ///
    /// The label column comes first under a blank header cell; every column
    /// is right-aligned to the widest of its header and cells, with
    /// two-space gutters and no trailing newline.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.columns.is_empty() {
            return write!(f, "Empty Table");
        }

        let label_width = self.labels.iter().map(|l| width(l)).max().unwrap_or(0);
        let column_widths: Vec<usize> = self
            .columns
            .iter()
            .map(|(name, values)| {
                values
                    .iter()
                    .map(|v| width(v))
                    .max()
                    .unwrap_or(0)
                    .max(width(name))
            })
            .collect();

        // Header row: blank cell over the labels, then the column names
        write!(f, "{:>label_width$}", "")?;
        for (name, &w) in self.columns.keys().zip(&column_widths) {
            write!(f, "  {name:>w$}")?;
        }

        for (i, label) in self.labels.iter().enumerate() {
            write!(f, "\n{label:>label_width$}")?;
            for (values, &w) in self.columns.values().zip(&column_widths) {
                write!(f, "  {:>w$}", values[i])?;
            }
        }

        Ok(())
    }
}
