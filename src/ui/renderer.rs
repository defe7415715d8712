//! Two-column layout: logo on the left, facts on the right.

use crate::core::facts::{Fact, FactKind};
use colored::*;
use unicode_width::UnicodeWidthStr;

/// Space before the logo column
const INDENT: &str = "  ";
/// Space between the logo and fact columns
const GUTTER: &str = "   ";

/// Whether escape sequences are emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderStyle {
    Color,
    Plain,
}

/// Logo lines with leading/trailing blank lines removed
pub fn logo_lines(logo: &str) -> Vec<&str> {
    logo.trim_matches(|c| c == '\n' || c == '\r')
        .lines()
        .collect()
}

/// Display width of the widest logo line
pub fn logo_width(lines: &[&str]) -> usize {
    lines.iter().map(|line| line.width()).max().unwrap_or(0)
}

/// Lay out `logo` beside `facts`.
///
/// Produces one row per line of whichever column is longer, bracketed by a
/// blank line before and after. Padding is computed on visible text, so
/// styling never shifts the fact column.
pub fn render(logo: &str, facts: &[Fact], style: RenderStyle) -> String {
    let lines = logo_lines(logo);
    let width = logo_width(&lines);
    let rows = lines.len().max(facts.len());

    let mut out = String::from("\n");
    for i in 0..rows {
        let logo_part = lines.get(i).copied().unwrap_or("");
        let padding = " ".repeat(width.saturating_sub(logo_part.width()));
        let fact_part = facts
            .get(i)
            .map(|fact| style_fact(fact, style))
            .unwrap_or_default();

        out.push_str(&format!(
            "{}{}{}{}{}\n",
            INDENT,
            style_logo(logo_part, style),
            padding,
            GUTTER,
            fact_part
        ));
    }
    out.push('\n');
    out
}

fn style_logo(line: &str, style: RenderStyle) -> String {
    match style {
        RenderStyle::Color => line.cyan().to_string(),
        RenderStyle::Plain => line.to_string(),
    }
}

fn style_fact(fact: &Fact, style: RenderStyle) -> String {
    let text = fact.text();
    match style {
        RenderStyle::Plain => text,
        RenderStyle::Color => match fact.kind {
            FactKind::Title => text.bold().cyan().to_string(),
            FactKind::Separator => text.cyan().to_string(),
            FactKind::Entry => text.bold().to_string(),
        },
    }
}
