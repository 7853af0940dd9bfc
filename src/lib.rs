//! # Dealer Directory Rendering Core
//!
//! Layout rendering and settings-driven styling for a B2B dealer directory.
//!
//! ## Features
//! - Three layout variants (grid / list / compact) over one shared set of
//!   fragment helpers; unknown layout names fall back to grid
//! - Settings-to-CSS compiler that only emits declarations differing from
//!   the documented defaults, with a theme-inheritance mode
//! - Map link resolution with a strict priority order (custom link, then
//!   coordinates, then address)
//! - YAML ingestion of dealer records and configuration via serde
//!
//! ## Example — render a directory fragment
//! ```ignore
//! use dealer_directory::{render_directory, DealerRecord, LayoutSettings, RenderOptions};
//!
//! let dealers = vec![DealerRecord {
//!     company_name: "Harbor Supply Co.".to_string(),
//!     ..DealerRecord::default()
//! }];
//!
//! let html = render_directory(
//!     &dealers,
//!     &RenderOptions::with_layout("grid"),
//!     &LayoutSettings::default(),
//! );
//! ```
//!
//! ## Example — compile style overrides
//! ```ignore
//! use dealer_directory::{compile_stylesheet, StyleSettings};
//!
//! let mut style = StyleSettings::new();
//! style.set("header_color", "#222222");
//! let css = compile_stylesheet(&style);
//! ```

pub mod dealer;
pub mod document;
pub mod error;
pub mod render;
pub mod settings;
pub mod stylesheet;
pub mod theme;
pub mod validator;

// --- Core types ---
pub use dealer::{DealerRecord, Flag, SubLocation};
pub use document::DirectoryDocument;
pub use error::{DirectoryError, DirectoryResult};
pub use settings::{Layout, LayoutSettings, StyleSettings};

// --- Render surface ---
pub use render::{generate_map_link, render_directory, RenderOptions, SortOrder, NO_DEALERS_MESSAGE};

// --- Stylesheet surface ---
pub use stylesheet::{compile_stylesheet, CssRule, BASE_STYLES};
pub use theme::THEME_INHERIT_STYLES;

/// Parse a YAML directory document (title, options, settings, style,
/// dealers).
pub fn load_directory(yaml: &str) -> DirectoryResult<DirectoryDocument> {
    DirectoryDocument::from_yaml(yaml)
}

/// Render a complete HTML page for a directory document.
pub fn render_page(
    title: &str,
    dealers: &[DealerRecord],
    options: &RenderOptions,
    settings: &LayoutSettings,
    style: &StyleSettings,
) -> String {
    document::render_page(title, dealers, options, settings, style)
}
