//! Folio web crate: the fetch → sort → render → inject pipeline.
//!
//! - `card`: HTML sanitizer and per-record card rendering.
//! - `loader`: the project collection endpoint (cache-bypassing GET,
//!   mockable for tests) and the single `LoadError` failure channel.
//! - `page`: page slots, the two grid controllers, the page-ready
//!   bootstrap and full-document assembly.
//! - `adapters::axum` (feature `axum`): the served `/` and `/projects`
//!   surface.

#[cfg(feature = "axum")]
pub mod adapters;
pub mod card;
pub mod loader;
pub mod page;

#[cfg(feature = "axum")]
pub use adapters::axum::PortfolioAdapter;
pub use card::{escape_html, render_card, render_cards};
pub use loader::{FetchPolicy, LoadError, LoadResult, MockResponse, ProjectSource};
pub use page::{
    fill_all_projects, fill_key_projects, hydrate, render_page, Container, ProjectsPage,
    SiteConfig, KEY_PROJECTS_LIMIT,
};

/// Starter data for a fresh portfolio, written out by `folio init-data`.
pub const SAMPLE_PROJECTS_JSON: &str = include_str!("sample-projects.json");
