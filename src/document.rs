use serde::{Deserialize, Serialize};

use crate::dealer::DealerRecord;
use crate::error::DirectoryResult;
use crate::render::{render_directory, RenderOptions};
use crate::settings::{LayoutSettings, StyleSettings};
use crate::stylesheet::{compile_stylesheet, BASE_STYLES};
use crate::validator;

fn default_title() -> String {
    "Dealer Directory".to_string()
}

/// A complete directory description as loaded from a YAML document:
/// page title, render options, layout and style configuration, and the
/// dealer records themselves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectoryDocument {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default)]
    pub options: RenderOptions,
    #[serde(default)]
    pub settings: LayoutSettings,
    #[serde(default)]
    pub style: StyleSettings,
    #[serde(default)]
    pub dealers: Vec<DealerRecord>,
}

impl Default for DirectoryDocument {
    fn default() -> Self {
        Self {
            title: default_title(),
            options: RenderOptions::default(),
            settings: LayoutSettings::default(),
            style: StyleSettings::default(),
            dealers: Vec::new(),
        }
    }
}

impl DirectoryDocument {
    pub fn from_yaml(yaml: &str) -> DirectoryResult<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Validates the style settings and every dealer record.
    pub fn validate(&self) -> DirectoryResult<()> {
        validator::validate_settings(&self.style)?;
        for dealer in &self.dealers {
            validator::validate_dealer(dealer)?;
        }
        Ok(())
    }

    /// Renders the complete HTML page for this directory.
    pub fn render_page(&self) -> String {
        render_page(
            &self.title,
            &self.dealers,
            &self.options,
            &self.settings,
            &self.style,
        )
    }
}

/// Assembles a full HTML document: base styles plus compiled overrides in
/// a single `<style>` block, followed by the rendered directory body.
pub fn render_page(
    title: &str,
    dealers: &[DealerRecord],
    options: &RenderOptions,
    settings: &LayoutSettings,
    style: &StyleSettings,
) -> String {
    let body = render_directory(dealers, options, settings);
    let overrides = compile_stylesheet(style);
    let css = if overrides.is_empty() {
        BASE_STYLES.to_string()
    } else {
        format!("{}\n{}", BASE_STYLES, overrides)
    };

    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head>\n\
         <meta charset=\"UTF-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{}</title>\n\
         <style>{}</style>\n\
         </head>\n\
         <body>\n\
         {}\n\
         </body>\n\
         </html>\n",
        crate::render::helpers::escape_html(title),
        css,
        body
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_document_defaults() {
        let doc = DirectoryDocument::from_yaml("dealers: []").unwrap();
        assert_eq!(doc.title, "Dealer Directory");
        assert_eq!(doc.options.posts_per_page, -1);
        assert!(doc.settings.use_icons);
    }

    #[test]
    fn page_embeds_base_styles_and_escaped_title() {
        let doc = DirectoryDocument {
            title: "Dealers <North>".to_string(),
            ..DirectoryDocument::default()
        };
        let page = doc.render_page();
        assert!(page.contains("<title>Dealers &lt;North&gt;</title>"));
        assert!(page.contains(BASE_STYLES));
        assert_eq!(page.matches("<style>").count(), 1);
    }
}
