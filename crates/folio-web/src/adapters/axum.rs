use crate::loader::ProjectSource;
use crate::page::{hydrate, render_page, ProjectsPage, SiteConfig};
use axum::extract::State as AxumState;
use axum::response::Html;
use axum::routing::get;
use axum::Router;
use std::sync::Arc;

/// Serves the two portfolio pages from a [`ProjectSource`]. Every request
/// hydrates a fresh page, so responses always reflect the origin.
#[derive(Debug, Clone)]
pub struct PortfolioAdapter {
    source: ProjectSource,
    site: SiteConfig,
}

impl PortfolioAdapter {
    pub fn new(source: ProjectSource) -> Self {
        Self {
            source,
            site: SiteConfig::default(),
        }
    }

    pub fn with_site(mut self, site: SiteConfig) -> Self {
        self.site = site;
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.site.title = title.into();
        self
    }

    pub fn source(&self) -> &ProjectSource {
        &self.source
    }

    /// Homepage document: key-projects grid only.
    pub async fn render_home(&self) -> String {
        let mut page = ProjectsPage::home();
        hydrate(&mut page, &self.source).await;
        render_page(&page, &self.site)
    }

    /// Listing document: every record.
    pub async fn render_archive(&self) -> String {
        let mut page = ProjectsPage::archive();
        hydrate(&mut page, &self.source).await;
        render_page(&page, &self.site)
    }

    pub fn router(self) -> Router {
        Router::new()
            .route("/", get(route_home))
            .route("/projects", get(route_archive))
            .with_state(Arc::new(self))
    }
}

async fn route_home(AxumState(adapter): AxumState<Arc<PortfolioAdapter>>) -> Html<String> {
    Html(adapter.render_home().await)
}

async fn route_archive(AxumState(adapter): AxumState<Arc<PortfolioAdapter>>) -> Html<String> {
    Html(adapter.render_archive().await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::MockResponse;

    const DATA_URL: &str = "http://localhost:8080/projects.json";

    #[tokio::test]
    async fn test_home_and_archive_documents() {
        let source = ProjectSource::new(DATA_URL).with_mock(
            DATA_URL,
            MockResponse::ok(
                r#"[
                    {"title": "p1", "date": "2025-01-01"},
                    {"title": "p2", "date": "2024-01-01"},
                    {"title": "p3", "date": "2023-01-01"},
                    {"title": "p4", "date": "2022-01-01"}
                ]"#,
            ),
        );
        let adapter = PortfolioAdapter::new(source).with_title("Demo");

        let home = adapter.render_home().await;
        assert!(home.contains("<title>Demo</title>"));
        assert!(home.contains("id=\"projectsGrid\""));
        assert_eq!(home.matches("<article").count(), 3);

        let archive = adapter.render_archive().await;
        assert!(archive.contains("id=\"allProjectsGrid\""));
        assert_eq!(archive.matches("<article").count(), 4);
    }
}
