//! Inline editor asset bundling
//!
//! Admin surfaces can embed an inline translation editor; its script, style
//! and extension library files live on disk and are bundled into a single
//! HTML fragment. Several search paths may be configured (development
//! checkout, packaged install) and the first path holding a complete set
//! wins.

use std::path::PathBuf;

use tokio::fs;
use tracing::debug;

use crate::utils::errors::{LingoVaultError, Result};

const JQUERY_TAG: &str =
    r#"<script src="https://code.jquery.com/jquery-2.0.3.min.js"></script>"#;

const LIBS_FILE: &str = "inline-edit-libs.html";
const STYLE_FILE: &str = "inline-edit.css";
const SCRIPT_FILE: &str = "inline-edit.js";

/// Bundler for the inline translation editor's assets
#[derive(Debug, Clone)]
pub struct InlineEditAssets {
    include_jquery: bool,
    include_extend_lib: bool,
    search_paths: Vec<PathBuf>,
}

impl InlineEditAssets {
    /// Create a bundler searching the given paths, with the extension
    /// library included and jQuery left to the host page
    pub fn new(search_paths: Vec<PathBuf>) -> Self {
        Self {
            include_jquery: false,
            include_extend_lib: true,
            search_paths,
        }
    }

    /// Whether to emit a jQuery script tag before the editor assets
    pub fn include_jquery(mut self, include: bool) -> Self {
        self.include_jquery = include;
        self
    }

    /// Whether to bundle the extension library and stylesheet; hosts loading
    /// Bootstrap or jQuery UI themselves can turn this off
    pub fn include_extend_lib(mut self, include: bool) -> Self {
        self.include_extend_lib = include;
        self
    }

    /// Bundle the editor assets into one HTML fragment.
    ///
    /// Search paths are tried in order; a path only counts when every
    /// required file is readable there. Returns `AssetMissing` when no
    /// search path yields a complete set.
    pub async fn render(&self) -> Result<String> {
        for search_path in &self.search_paths {
            match self.render_from(search_path).await {
                Ok(content) => return Ok(content),
                Err(e) => {
                    debug!(path = %search_path.display(), error = %e,
                           "Inline edit assets incomplete in search path");
                }
            }
        }

        let searched = self
            .search_paths
            .iter()
            .map(|p| p.display().to_string())
            .collect::<Vec<_>>()
            .join(", ");
        Err(LingoVaultError::AssetMissing(searched))
    }

    async fn render_from(&self, search_path: &PathBuf) -> Result<String> {
        let mut content = String::new();

        if self.include_jquery {
            content.push_str(JQUERY_TAG);
        }

        if self.include_extend_lib {
            let libs = fs::read_to_string(search_path.join(LIBS_FILE)).await?;
            content.push_str(&libs);

            let style = fs::read_to_string(search_path.join(STYLE_FILE)).await?;
            content.push_str(&format!("<style>{}</style>", style));
        }

        let script = fs::read_to_string(search_path.join(SCRIPT_FILE)).await?;
        content.push_str(&format!(
            "<script type=\"text/javascript\">{}</script>",
            script
        ));

        Ok(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn write_asset_set(dir: &std::path::Path) {
        std::fs::write(dir.join(LIBS_FILE), "<script src=\"x-editable.js\"></script>").unwrap();
        std::fs::write(dir.join(STYLE_FILE), ".i18n-inline { color: red; }").unwrap();
        std::fs::write(dir.join(SCRIPT_FILE), "initInlineEdit();").unwrap();
    }

    #[tokio::test]
    async fn test_render_bundles_all_parts() {
        let dir = tempfile::tempdir().unwrap();
        write_asset_set(dir.path());

        let assets = InlineEditAssets::new(vec![dir.path().to_path_buf()]).include_jquery(true);
        let content = assets.render().await.unwrap();

        assert!(content.contains("jquery-2.0.3.min.js"));
        assert!(content.contains("x-editable.js"));
        assert!(content.contains("<style>.i18n-inline"));
        assert!(content.contains("initInlineEdit();"));
    }

    #[tokio::test]
    async fn test_incomplete_path_skipped_in_favor_of_complete_one() {
        let incomplete = tempfile::tempdir().unwrap();
        std::fs::write(incomplete.path().join(SCRIPT_FILE), "partial();").unwrap();

        let complete = tempfile::tempdir().unwrap();
        write_asset_set(complete.path());

        let assets = InlineEditAssets::new(vec![
            incomplete.path().to_path_buf(),
            complete.path().to_path_buf(),
        ]);
        let content = assets.render().await.unwrap();
        assert!(content.contains("initInlineEdit();"));
    }

    #[tokio::test]
    async fn test_missing_everywhere_is_an_error() {
        let empty = tempfile::tempdir().unwrap();

        let assets = InlineEditAssets::new(vec![empty.path().to_path_buf()]);
        let result = assets.render().await;
        assert_matches!(result, Err(LingoVaultError::AssetMissing(_)));
    }
}
