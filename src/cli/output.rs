//! Output formatting utilities for the CLI.

use comfy_table::{presets, Cell, CellAlignment, ContentArrangement, Table};

use crate::domain::models::CreatedIssue;

/// Width of the `=` rule framing banners and summaries.
const RULE_WIDTH: usize = 60;

pub trait CommandOutput {
    fn to_human(&self) -> String;
}

pub fn output<T: CommandOutput>(result: &T) {
    println!("{}", result.to_human());
}

pub fn rule() -> String {
    "=".repeat(RULE_WIDTH)
}

/// Title line followed by a blank line and a rule.
pub fn banner(title: &str) -> String {
    format!("{title}\n\n{}", rule())
}

/// Borderless table listing created issues.
pub fn issue_table(issues: &[CreatedIssue]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(presets::NOTHING)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(
            ["#", "TITLE", "URL"]
                .iter()
                .map(|h| Cell::new(h).set_alignment(CellAlignment::Left)),
        );
    for issue in issues {
        table.add_row(vec![
            Cell::new(issue.number).set_alignment(CellAlignment::Right),
            Cell::new(&issue.title),
            Cell::new(&issue.html_url),
        ]);
    }
    table
}
