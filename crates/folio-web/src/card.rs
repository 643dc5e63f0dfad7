use folio_core::{Project, ResolvedAction, ResolvedCard};

/// Escape text for HTML element content or a double-quoted attribute.
/// `&` is replaced first so already-produced entities never double-escape.
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Render one record collection to concatenated card markup, in input order.
pub fn render_cards(projects: &[Project]) -> String {
    projects
        .iter()
        .map(|p| render_card(&p.resolve()))
        .collect::<Vec<_>>()
        .join("")
}

/// One self-contained card fragment. Pure over the resolved view; a record
/// missing every optional field still renders.
pub fn render_card(card: &ResolvedCard) -> String {
    let tags = card
        .tags
        .iter()
        .map(|tag| format!("<span class=\"tag\">{}</span>", escape_html(tag)))
        .collect::<Vec<_>>()
        .join("");

    let actions = card
        .actions
        .iter()
        .map(render_action)
        .collect::<Vec<_>>()
        .join("");

    format!(
        "<article class=\"project-card\"><div class=\"project-thumb\">{}</div>\
         <div class=\"project-body\"><h3 class=\"project-title\">{}</h3>\
         <p class=\"project-desc\">{}</p><div class=\"project-tags\">{}</div>\
         <div class=\"project-actions\">{}</div></div></article>",
        render_thumb(card),
        escape_html(&card.title),
        escape_html(&card.desc),
        tags,
        actions
    )
}

fn render_thumb(card: &ResolvedCard) -> String {
    format!(
        "<img src=\"{}\" alt=\"{}\" loading=\"lazy\" />",
        escape_html(&card.image),
        escape_html(card.alt_text())
    )
}

fn render_action(action: &ResolvedAction) -> String {
    let class = if action.is_primary() {
        "btn-primary"
    } else {
        "btn-ghost"
    };
    // External targets get a fresh browsing context without an opener.
    let target = if action.is_external() {
        " target=\"_blank\" rel=\"noopener\""
    } else {
        ""
    };

    format!(
        "<a class=\"{}\" href=\"{}\"{}><i class=\"solid-icon {}\"></i> {}</a>",
        class,
        escape_html(&action.url),
        target,
        escape_html(&action.icon),
        escape_html(&action.label)
    )
}
