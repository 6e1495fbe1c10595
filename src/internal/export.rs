use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::internal::catalog::Recommendation;

/// Render one card block per recommendation, in the order supplied.
///
/// Catalog text is static and trusted, so nothing is escaped here; this is
/// not a sink for user input.
pub fn render_cards(recommendations: &[Recommendation]) -> String {
    recommendations
        .iter()
        .map(|rec| {
            format!(
                concat!(
                    "<div class=\"suggestion-card\">\n",
                    "  <div class=\"suggestion-icon\">{}</div>\n",
                    "  <div class=\"suggestion-title\">{}</div>\n",
                    "  <div class=\"suggestion-description\">{}</div>\n",
                    "</div>\n"
                ),
                rec.icon, rec.title, rec.description
            )
        })
        .collect()
}

fn render_document(recommendations: &[Recommendation]) -> String {
    let generated = jiff::Zoned::now()
        .strftime("%Y-%m-%d %H:%M %Z")
        .to_string();

    format!(
        concat!(
            "<!DOCTYPE html>\n",
            "<html lang=\"en\">\n",
            "<head>\n",
            "<meta charset=\"utf-8\">\n",
            "<title>Your Style Analysis</title>\n",
            "<style>\n",
            "body {{ font-family: sans-serif; max-width: 48rem; margin: 2rem auto; }}\n",
            ".results-grid {{ display: grid; gap: 1rem; }}\n",
            ".suggestion-card {{ border: 1px solid #ddd; border-radius: 8px; padding: 1rem; }}\n",
            ".suggestion-icon {{ font-size: 2rem; }}\n",
            ".suggestion-title {{ font-weight: 600; margin: 0.5rem 0; }}\n",
            "footer {{ color: #888; margin-top: 2rem; font-size: 0.8rem; }}\n",
            "</style>\n",
            "</head>\n",
            "<body>\n",
            "<h1>Your Style Analysis</h1>\n",
            "<div class=\"results-grid\">\n",
            "{}",
            "</div>\n",
            "<footer>Generated {}</footer>\n",
            "</body>\n",
            "</html>\n"
        ),
        render_cards(recommendations),
        generated
    )
}

/// Write the rendered results as a standalone HTML report.
pub fn write_report(path: &Path, recommendations: &[Recommendation]) -> Result<PathBuf> {
    std::fs::write(path, render_document(recommendations))
        .with_context(|| format!("failed to write report to {}", path.display()))?;

    tracing::info!(
        cards = recommendations.len(),
        path = %path.display(),
        "exported results"
    );
    Ok(path.to_path_buf())
}
