//! # Layout dispatcher and renderers
//!
//! Selects one of the fixed layout variants (grid / list / compact) for a
//! sequence of dealer records and produces the directory markup fragment.
//! Unknown layout names fall back to grid; an empty dealer sequence yields
//! a "no dealers found" message rather than an empty container.

pub mod helpers;

mod compact;
mod grid;
mod list;

pub use helpers::generate_map_link;

use serde::{Deserialize, Serialize};

use crate::dealer::DealerRecord;
use crate::settings::{Layout, LayoutSettings};

use compact::CompactRenderer;
use grid::GridRenderer;
use list::ListRenderer;

/// Message rendered when the dealer sequence is empty.
pub const NO_DEALERS_MESSAGE: &str = "No dealers found.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum SortOrder {
    #[default]
    #[serde(alias = "asc")]
    Asc,
    #[serde(alias = "desc")]
    Desc,
}

/// The attribute mapping accompanying a render request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Maximum dealers to render; `-1` (or `0`) means unlimited.
    pub posts_per_page: i64,
    /// Recognized: `title`. Anything else preserves stored order.
    pub orderby: String,
    pub order: SortOrder,
    /// Requested layout name; `None` or empty uses the configured default,
    /// unknown names fall back to grid.
    pub layout: Option<String>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            posts_per_page: -1,
            orderby: "title".to_string(),
            order: SortOrder::Asc,
            layout: None,
        }
    }
}

impl RenderOptions {
    /// Options requesting a specific layout, everything else default.
    pub fn with_layout(name: &str) -> Self {
        Self {
            layout: Some(name.to_string()),
            ..Self::default()
        }
    }
}

/// Shared capability of the three layout variants: a provided `render`
/// wrapping the variant's container element around its per-dealer markup.
pub(crate) trait LayoutRenderer {
    fn slug(&self) -> &'static str;

    fn push_dealer(&self, out: &mut String, dealer: &DealerRecord, settings: &LayoutSettings);

    fn render(&self, dealers: &[&DealerRecord], settings: &LayoutSettings) -> String {
        let mut out = String::new();
        out.push_str(&format!(
            "<div class=\"dealer-directory dealer-layout-{}\">",
            self.slug()
        ));
        for dealer in dealers {
            self.push_dealer(&mut out, dealer, settings);
        }
        out.push_str("</div>");
        out
    }
}

fn renderer_for(layout: Layout) -> &'static dyn LayoutRenderer {
    match layout {
        Layout::Grid => &GridRenderer,
        Layout::List => &ListRenderer,
        Layout::Compact => &CompactRenderer,
    }
}

fn resolve_layout(options: &RenderOptions, settings: &LayoutSettings) -> Layout {
    match options.layout.as_deref() {
        Some("") | None => settings.default_layout,
        Some(name) => Layout::resolve(name),
    }
}

/// Renders the dealer directory fragment.
///
/// Applies the options' ordering and truncation over a borrowed view (the
/// input records are never mutated), resolves the layout variant, and
/// returns that renderer's output verbatim.
pub fn render_directory(
    dealers: &[DealerRecord],
    options: &RenderOptions,
    settings: &LayoutSettings,
) -> String {
    if dealers.is_empty() {
        return format!("<p class=\"dealer-no-results\">{}</p>", NO_DEALERS_MESSAGE);
    }

    let mut view: Vec<&DealerRecord> = dealers.iter().collect();
    if options.orderby == "title" {
        view.sort_by(|a, b| {
            a.company_name
                .to_lowercase()
                .cmp(&b.company_name.to_lowercase())
        });
        if options.order == SortOrder::Desc {
            view.reverse();
        }
    }
    if options.posts_per_page > 0 {
        view.truncate(options.posts_per_page as usize);
    }

    let layout = resolve_layout(options, settings);
    renderer_for(layout).render(&view, settings)
}
