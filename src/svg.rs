use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use minijinja::{Template, context};

use crate::format::card_fields;
use crate::stats::AggregatedStats;
use crate::theme::Theme;

// Profile text (bio, name) is user-controlled and lands inside SVG markup.
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Render the compiled card template with `data.*` (formatted, escaped
/// stats) and `theme.*` (palette colors).
pub fn render(
    stats: &AggregatedStats,
    theme: &Theme,
    template: &Template<'_, '_>,
) -> Result<String, minijinja::Error> {
    let data: BTreeMap<&str, String> = card_fields(stats)
        .into_iter()
        .map(|(k, v)| (k, escape_xml(&v)))
        .collect();
    let palette: BTreeMap<&str, &str> = theme.fields().into_iter().collect();

    template.render(context! { data => data, theme => palette })
}

/// Write the card, replacing any previous file at `path`.
pub fn write_card(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents).with_context(|| format!("Failed to write {}", path.display()))
}
