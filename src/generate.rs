//! HTML site generation.
//!
//! Takes a resolved [`SiteConfig`] and writes the finished site:
//!
//! ```text
//! dist/
//! ├── index.html      # The whole page, CSS and reveal script inlined
//! └── ...             # Everything under content/assets/, copied verbatim
//! ```
//!
//! ## CSS
//!
//! `static/style.css` is embedded at compile time. The `[theme]` config is
//! rendered to CSS custom properties and prepended, so the base stylesheet
//! only ever refers to `var(--color-*)`.

use crate::config::{self, SiteConfig};
use crate::page::{self, RenderContext};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Asset walk error: {0}")]
    Walk(#[from] walkdir::Error),
}

const CSS_STATIC: &str = include_str!("../static/style.css");

/// Name of the content subdirectory copied into the output root.
pub const ASSETS_DIR: &str = "assets";

/// What a generate run wrote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateReport {
    /// Path of the rendered page.
    pub index: PathBuf,
    /// Asset files copied, relative to the output root.
    pub assets: Vec<PathBuf>,
}

/// Full stylesheet: theme variables followed by the base styles.
pub fn site_css(config: &SiteConfig) -> String {
    let theme_css = config::generate_theme_css(&config.theme);
    format!("{}\n\n{}", theme_css, CSS_STATIC)
}

/// Render `config` into `output_dir`, copying `source/assets/` alongside.
pub fn generate(
    config: &SiteConfig,
    source: &Path,
    output_dir: &Path,
    ctx: &RenderContext,
) -> Result<GenerateReport, GenerateError> {
    fs::create_dir_all(output_dir)?;

    let assets = copy_assets(&source.join(ASSETS_DIR), output_dir)?;

    let css = site_css(config);
    let html = page::render_page(config, ctx, &css);
    let index = output_dir.join("index.html");
    fs::write(&index, html.into_string())?;

    Ok(GenerateReport { index, assets })
}

/// Recursively copy `src` into `dst`. A missing `src` copies nothing.
///
/// Returns the copied file paths relative to `dst`, in walk order.
fn copy_assets(src: &Path, dst: &Path) -> Result<Vec<PathBuf>, GenerateError> {
    if !src.is_dir() {
        return Ok(Vec::new());
    }
    let mut copied = Vec::new();
    for entry in WalkDir::new(src).min_depth(1).sort_by_file_name() {
        let entry = entry?;
        let Ok(rel) = entry.path().strip_prefix(src) else {
            continue;
        };
        let target = dst.join(rel);
        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)?;
        } else {
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::copy(entry.path(), &target)?;
            copied.push(rel.to_path_buf());
        }
    }
    Ok(copied)
}
