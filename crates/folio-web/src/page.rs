use crate::card::{escape_html, render_cards};
use crate::loader::{LoadError, LoadResult, ProjectSource};
use folio_core::Project;

/// How many cards the homepage grid shows.
pub const KEY_PROJECTS_LIMIT: usize = 3;

/// A page slot whose entire inner markup is replaced on every write. The
/// pipeline only reads existence and writes content; it never creates or
/// removes slots.
#[derive(Debug, Clone, Default)]
pub struct Container {
    html: String,
}

impl Container {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_html(&mut self, html: impl Into<String>) {
        self.html = html.into();
    }

    pub fn html(&self) -> &str {
        &self.html
    }
}

#[derive(Debug, Clone)]
pub struct SiteConfig {
    pub title: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Portfolio".to_string(),
        }
    }
}

/// The set of grids present on the current page. Either may be absent; a
/// page carrying only one of the two triggers only the matching controller.
#[derive(Debug, Clone, Default)]
pub struct ProjectsPage {
    pub key_grid: Option<Container>,
    pub all_grid: Option<Container>,
}

impl ProjectsPage {
    /// Homepage: key-projects grid only.
    pub fn home() -> Self {
        Self {
            key_grid: Some(Container::new()),
            all_grid: None,
        }
    }

    /// Full listing page: all-projects grid only.
    pub fn archive() -> Self {
        Self {
            key_grid: None,
            all_grid: Some(Container::new()),
        }
    }
}

/// Page-ready entry point: run both controllers unconditionally. Each
/// controller owns a disjoint slot, so their fetches interleave freely.
pub async fn hydrate(page: &mut ProjectsPage, source: &ProjectSource) {
    tokio::join!(
        fill_key_projects(page.key_grid.as_mut(), source),
        fill_all_projects(page.all_grid.as_mut(), source),
    );
}

/// Fill the homepage grid with the newest records, up to
/// [`KEY_PROJECTS_LIMIT`]. A missing grid is a no-op, not an error.
pub async fn fill_key_projects(grid: Option<&mut Container>, source: &ProjectSource) {
    let Some(grid) = grid else {
        return;
    };

    match fetch_in_background(source).await {
        Ok(projects) => {
            let key: Vec<Project> = projects.into_iter().take(KEY_PROJECTS_LIMIT).collect();
            grid.set_html(render_cards(&key));
        }
        Err(err) => {
            eprintln!("[projects] {}", err.message);
            grid.set_html(fallback_markup(source.resource_name()));
        }
    }
}

/// Fill the listing grid with every record, newest first.
pub async fn fill_all_projects(grid: Option<&mut Container>, source: &ProjectSource) {
    let Some(grid) = grid else {
        return;
    };

    match fetch_in_background(source).await {
        Ok(projects) => grid.set_html(render_cards(&projects)),
        Err(err) => {
            eprintln!("[projects] {}", err.message);
            grid.set_html(fallback_markup(source.resource_name()));
        }
    }
}

async fn fetch_in_background(source: &ProjectSource) -> LoadResult<Vec<Project>> {
    let source = source.clone();
    tokio::task::spawn_blocking(move || source.fetch_sorted())
        .await
        .unwrap_or_else(|e| Err(LoadError::new(format!("project fetch task failed: {e}"))))
}

fn fallback_markup(resource: &str) -> String {
    format!(
        "<p style=\"opacity:.8\">Could not load projects. Check <b>{}</b>.</p>",
        escape_html(resource)
    )
}

/// Assemble a full document around whichever grids the page carries.
pub fn render_page(page: &ProjectsPage, site: &SiteConfig) -> String {
    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html>\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    html.push_str(&format!("<title>{}</title>\n", escape_html(&site.title)));
    html.push_str(&format!("<style>{}</style>\n", BASE_PAGE_CSS));
    html.push_str("</head>\n<body>\n");

    html.push_str("<header class=\"site-header\">\n");
    html.push_str(&format!("<h1>{}</h1>\n", escape_html(&site.title)));
    html.push_str("<nav><a href=\"/\">Home</a> <a href=\"/projects\">All projects</a></nav>\n");
    html.push_str("</header>\n<main>\n");

    if let Some(grid) = &page.key_grid {
        html.push_str(&format!(
            "<section class=\"projects-grid\" id=\"projectsGrid\">{}</section>\n",
            grid.html()
        ));
    }
    if let Some(grid) = &page.all_grid {
        html.push_str(&format!(
            "<section class=\"projects-grid\" id=\"allProjectsGrid\">{}</section>\n",
            grid.html()
        ));
    }

    html.push_str("</main>\n</body>\n</html>");
    html
}

const BASE_PAGE_CSS: &str = "\
body { margin: 0; font-family: system-ui, sans-serif; color: #0f172a; background: #f8fafc; }\
.site-header { display: flex; justify-content: space-between; align-items: baseline; padding: 16px 24px; }\
.site-header nav a { margin-left: 12px; color: #2563eb; text-decoration: none; }\
.projects-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(280px, 1fr)); gap: 16px; padding: 0 24px 24px; }\
.project-card { background: #ffffff; border-radius: 8px; overflow: hidden; box-shadow: 0 4px 12px rgba(0,0,0,0.08); }\
.project-thumb img { width: 100%; display: block; aspect-ratio: 16/9; object-fit: cover; }\
.project-body { padding: 12px 16px 16px; }\
.project-title { margin: 0 0 4px; font-size: 20px; }\
.project-desc { margin: 0 0 8px; color: #64748b; }\
.tag { display: inline-block; font-size: 12px; background: #e2e8f0; border-radius: 9999px; padding: 2px 8px; margin: 0 4px 4px 0; }\
.project-actions a { display: inline-block; margin: 4px 8px 0 0; padding: 6px 12px; border-radius: 4px; text-decoration: none; }\
.btn-primary { background: #2563eb; color: #ffffff; }\
.btn-ghost { border: 1px solid #2563eb; color: #2563eb; }";
