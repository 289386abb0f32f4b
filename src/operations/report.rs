// Report renderer - progress tables for the terminal
use colored::Colorize;
use comfy_table::{Attribute, Cell, CellAlignment, Color, Table};
use std::io::{self, Write};

use crate::models::*;
use crate::targets::TargetConfiguration;

impl From<ProgressColor> for Color {
    fn from(color: ProgressColor) -> Self {
        match color {
            ProgressColor::Green => Color::Green,
            ProgressColor::Red => Color::Red,
        }
    }
}

/// Descending by sort key. Stable, so ties keep their aggregation order.
pub fn sort_stats(stats: &mut [ProgressStat]) {
    stats.sort_by(|a, b| b.sort_key.total_cmp(&a.sort_key));
}

/// Sorted progress table with `label` heading the name column.
pub fn build_table(stats: &[ProgressStat], label: &str) -> Table {
    let mut sorted = stats.to_vec();
    sort_stats(&mut sorted);

    let mut table = Table::new();
    table.set_header(vec![
        Cell::new(label).add_attribute(Attribute::Bold),
        Cell::new("Value").add_attribute(Attribute::Bold),
        Cell::new("Progress").add_attribute(Attribute::Bold),
    ]);
    for stat in &sorted {
        table.add_row(vec![
            Cell::new(&stat.name),
            Cell::new(&stat.value),
            Cell::new(&stat.progress).fg(stat.color.into()),
        ]);
    }
    for (index, column) in table.column_iter_mut().enumerate() {
        let alignment = if index == 0 { CellAlignment::Left } else { CellAlignment::Right };
        column.set_cell_alignment(alignment);
    }
    table
}

pub struct ReportRenderer {
    grouped: bool,
}

impl ReportRenderer {
    pub fn new(grouped: bool) -> Self {
        Self { grouped }
    }

    pub fn render_table<W: Write>(&self, out: &mut W, stats: &[ProgressStat], label: &str) -> io::Result<()> {
        writeln!(out, "{}", build_table(stats, label))
    }

    /// One full report: banner, then either a currency and a material table
    /// or a single table with everything sorted together.
    pub fn render<W: Write>(
        &self,
        out: &mut W,
        targets: &TargetConfiguration,
        currencies: &[ProgressStat],
        materials: &[ProgressStat],
    ) -> io::Result<()> {
        writeln!(
            out,
            "\r{}{} by {}",
            "Active config: ".bold(),
            targets.description,
            targets.author
        )?;
        if self.grouped {
            self.render_table(out, currencies, "Currency")?;
            self.render_table(out, materials, "Materials")?;
        } else {
            let combined: Vec<ProgressStat> = currencies.iter().chain(materials).cloned().collect();
            self.render_table(out, &combined, "Name")?;
        }
        writeln!(out, "Rerun the tracker to manually update stats.\n")?;
        out.flush()
    }
}
