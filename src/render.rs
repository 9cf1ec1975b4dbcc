//! Text rendering of `AppState` for the terminal front-end

use serde_json::Value;

use crate::store::AppState;
use crate::website::Website;

const HEADERS: [&str; 7] = ["NAMESPACE", "NAME", "STATUS", "REVISION", "BRANCH", "PUBLIC", "REPO"];

/// Render the website list as an aligned table
pub fn render_websites(records: &[Value]) -> String {
    if records.is_empty() {
        return "No websites found.\n".to_string();
    }

    let rows: Vec<[String; 7]> = records
        .iter()
        .map(Website::from_record)
        .map(|site| {
            [
                site.namespace.clone(),
                site.name.clone(),
                site.status.clone(),
                site.short_revision().to_string(),
                site.branch.clone(),
                site.public_url.clone(),
                site.repo_url.clone(),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_row(&mut out, HEADERS.iter().copied(), &widths);
    for row in &rows {
        push_row(&mut out, row.iter().map(String::as_str), &widths);
    }
    out
}

fn push_row<'a>(out: &mut String, cells: impl Iterator<Item = &'a str>, widths: &[usize; 7]) {
    let line = cells
        .zip(widths)
        .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
        .collect::<Vec<_>>()
        .join("  ");
    out.push_str(line.trim_end());
    out.push('\n');
}

/// Render the log modal, or `None` while it is closed
pub fn render_modal(state: &AppState) -> Option<String> {
    if !state.show_modal {
        return None;
    }

    let rule = "=".repeat(state.modal_title.chars().count().max(8));
    let mut out = format!("{}\n{}\n", state.modal_title, rule);
    out.push_str(&state.log);
    if !state.log.is_empty() && !state.log.ends_with('\n') {
        out.push('\n');
    }
    Some(out)
}

/// Website list followed by the modal when it is open
pub fn render(state: &AppState) -> String {
    let mut out = render_websites(&state.websites);
    if let Some(modal) = render_modal(state) {
        out.push('\n');
        out.push_str(&modal);
    }
    out
}
