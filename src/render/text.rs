//! Terminal rendering of views

use colored::Colorize;
use std::fmt::Write;

use super::views::{BarChart, PieChart, Table, TopicList};
use super::{View, EMPTY_MESSAGE};

const BAR_GLYPH: char = '█';
const SWATCH_GLYPH: &str = "■";

/// Drawing options for the terminal
#[derive(Debug, Clone, Copy)]
pub struct TextOptions {
    /// Columns used by the longest bar
    pub bar_width: usize,
    /// Emit ANSI colors for chart swatches
    pub color: bool,
}

impl Default for TextOptions {
    fn default() -> Self {
        Self {
            bar_width: 40,
            color: true,
        }
    }
}

/// Render a view as plain text
pub fn render_text(view: &View, options: &TextOptions) -> String {
    let mut out = String::new();

    match view {
        View::Loading => out.push_str("Loading...\n"),
        View::Empty => {
            out.push_str(EMPTY_MESSAGE);
            out.push('\n');
        }
        View::Blank => {}
        View::WordFrequency(chart) => bar_chart(&mut out, chart, options),
        View::SentimentDistribution(chart) => pie_chart(&mut out, chart, options),
        View::NamedEntities(table) | View::AverageSentiment(table) => table_text(&mut out, table),
        View::TopicModeling(list) => topic_list(&mut out, list),
    }

    out
}

fn card_header(out: &mut String, title: &str, description: &str) {
    let _ = writeln!(out, "{}", title);
    let _ = writeln!(out, "{}", description);
    out.push('\n');
}

fn bar_chart(out: &mut String, chart: &BarChart, options: &TextOptions) {
    card_header(out, chart.title, chart.description);

    let label_width = chart
        .bars
        .iter()
        .map(|b| b.label.chars().count())
        .max()
        .unwrap_or(0);
    let max = chart.bars.iter().map(|b| b.value).fold(0.0_f64, f64::max);

    for bar in &chart.bars {
        let len = if max > 0.0 && bar.value > 0.0 {
            ((bar.value / max) * options.bar_width as f64).round() as usize
        } else {
            0
        };
        let _ = writeln!(
            out,
            "{:<width$} {} {}",
            bar.label,
            BAR_GLYPH.to_string().repeat(len),
            bar.value,
            width = label_width
        );
    }
}

fn pie_chart(out: &mut String, chart: &PieChart, options: &TextOptions) {
    card_header(out, chart.title, chart.description);

    let total = chart.total();
    let label_width = chart
        .slices
        .iter()
        .map(|s| s.label.chars().count())
        .max()
        .unwrap_or(0);

    for slice in &chart.slices {
        let share = if total > 0.0 {
            slice.value / total * 100.0
        } else {
            0.0
        };
        let swatch = match (options.color, hex_rgb(slice.color)) {
            (true, Some((r, g, b))) => SWATCH_GLYPH.truecolor(r, g, b).to_string(),
            _ => SWATCH_GLYPH.to_string(),
        };
        let _ = writeln!(
            out,
            "{} {:<width$} {:>6.1}%  {}",
            swatch,
            slice.label,
            share,
            slice.color,
            width = label_width
        );
    }
}

fn table_text(out: &mut String, table: &Table) {
    card_header(out, table.title, table.description);

    let columns = table
        .rows
        .iter()
        .map(|r| r.len())
        .chain(std::iter::once(table.headers.len()))
        .max()
        .unwrap_or(0);

    let mut widths = vec![0usize; columns];
    for (i, header) in table.headers.iter().enumerate() {
        widths[i] = widths[i].max(header.chars().count());
    }
    for row in &table.rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    if !table.headers.is_empty() {
        let header: Vec<String> = table.headers.iter().map(|h| h.to_string()).collect();
        write_row(out, &header, &widths);
        let rule: usize = widths.iter().sum::<usize>() + 3 * columns.saturating_sub(1);
        let _ = writeln!(out, "{}", "-".repeat(rule));
    }

    for row in &table.rows {
        write_row(out, row, &widths);
    }
}

fn write_row(out: &mut String, cells: &[String], widths: &[usize]) {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
        .collect::<Vec<_>>()
        .join(" | ");
    let _ = writeln!(out, "{}", line.trim_end());
}

fn topic_list(out: &mut String, list: &TopicList) {
    card_header(out, list.title, list.description);

    for topic in &list.topics {
        let _ = writeln!(out, "{}", topic.heading);
        let _ = writeln!(out, "  {}", topic.text);
    }
}

/// `#RRGGBB` → (r, g, b)
fn hex_rgb(hex: &str) -> Option<(u8, u8, u8)> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    Some((channel(0)?, channel(2)?, channel(4)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::views::{Bar, Slice, Topic, PALETTE};

    fn plain() -> TextOptions {
        TextOptions {
            bar_width: 10,
            color: false,
        }
    }

    #[test]
    fn test_bars_scale_to_largest() {
        let view = View::WordFrequency(BarChart {
            title: "Word Frequency",
            description: "Top 20 most frequent words",
            bars: vec![
                Bar { label: "the".into(), value: 120.0 },
                Bar { label: "cat".into(), value: 45.0 },
            ],
        });
        let text = render_text(&view, &plain());
        let lines: Vec<_> = text.lines().skip(3).collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], format!("the {} 120", "█".repeat(10)));
        assert_eq!(lines[1], format!("cat {} 45", "█".repeat(4)));
    }

    #[test]
    fn test_pie_legend_shares() {
        let view = View::SentimentDistribution(PieChart {
            title: "Sentiment Distribution",
            description: "",
            slices: vec![
                Slice { label: "positive".into(), value: 0.5, color: PALETTE[0] },
                Slice { label: "negative".into(), value: 0.5, color: PALETTE[1] },
            ],
        });
        let text = render_text(&view, &plain());
        assert!(text.contains("■ positive   50.0%  #0088FE"));
        assert!(text.contains("■ negative   50.0%  #00C49F"));
    }

    #[test]
    fn test_table_alignment() {
        let view = View::NamedEntities(Table {
            title: "Named Entities",
            description: "",
            headers: vec!["Entity", "Label", "Count"],
            rows: vec![vec!["YouTube".into(), "ORG".into(), "12".into()]],
        });
        let text = render_text(&view, &plain());
        assert!(text.contains("Entity  | Label | Count"));
        assert!(text.contains("YouTube | ORG   | 12"));
    }

    #[test]
    fn test_topics_and_placeholders() {
        let view = View::TopicModeling(TopicList {
            title: "Topic Modeling",
            description: "",
            topics: vec![Topic {
                heading: "Topic 1".into(),
                text: "fish, ocean, tide".into(),
            }],
        });
        let text = render_text(&view, &plain());
        assert!(text.contains("Topic 1\n  fish, ocean, tide\n"));

        assert_eq!(render_text(&View::Empty, &plain()), format!("{}\n", EMPTY_MESSAGE));
        assert_eq!(render_text(&View::Blank, &plain()), "");
        assert_eq!(render_text(&View::Loading, &plain()), "Loading...\n");
    }

    #[test]
    fn test_hex_rgb() {
        assert_eq!(hex_rgb("#0088FE"), Some((0x00, 0x88, 0xFE)));
        assert_eq!(hex_rgb("0088FE"), None);
        assert_eq!(hex_rgb("#08F"), None);
    }
}
