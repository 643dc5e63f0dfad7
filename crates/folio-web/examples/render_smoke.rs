use folio_core::{sort_newest_first, Project};
use folio_web::{render_cards, render_page, ProjectsPage, SiteConfig, SAMPLE_PROJECTS_JSON};
use std::fs;

fn main() -> Result<(), String> {
    let projects = Project::list_from_json(SAMPLE_PROJECTS_JSON)
        .map_err(|e| format!("sample data invalid: {e}"))?;
    let sorted = sort_newest_first(&projects);

    let mut page = ProjectsPage::archive();
    if let Some(grid) = page.all_grid.as_mut() {
        grid.set_html(render_cards(&sorted));
    }

    let html = render_page(
        &page,
        &SiteConfig {
            title: "Sample portfolio".to_string(),
        },
    );
    if !html.contains("id=\"allProjectsGrid\"") {
        return Err("expected the archive grid in the rendered document".to_string());
    }

    let out = std::env::temp_dir().join("folio-render-smoke.html");
    fs::write(&out, html).map_err(|e| format!("failed to write {}: {e}", out.display()))?;
    println!("wrote {}", out.display());
    Ok(())
}
