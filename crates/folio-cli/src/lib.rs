use axum::extract::Path as AxumPath;
use axum::extract::State as AxumState;
use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use folio_core::{sort_newest_first, Project};
use folio_web::{render_cards, PortfolioAdapter, ProjectSource, SAMPLE_PROJECTS_JSON};
use std::env;
use std::fs;
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;

const DEFAULT_PORT: u16 = 8080;
const DATA_FILE: &str = "projects.json";

#[derive(Debug, Clone)]
enum CliCommand {
    Serve {
        dir: PathBuf,
        port: u16,
        data: Option<String>,
    },
    Render {
        file: PathBuf,
        limit: Option<usize>,
    },
    InitData {
        out: PathBuf,
    },
}

struct StaticSite {
    root: PathBuf,
}

pub async fn run_from_env() -> Result<(), String> {
    run_from_args(env::args().skip(1).collect()).await
}

pub async fn run_from_args(args: Vec<String>) -> Result<(), String> {
    let command = parse_command(args)?;

    match command {
        CliCommand::Serve { dir, port, data } => run_server(dir, port, data).await,
        CliCommand::Render { file, limit } => run_render(file, limit),
        CliCommand::InitData { out } => {
            fs::write(&out, SAMPLE_PROJECTS_JSON)
                .map_err(|e| format!("failed to write {}: {e}", out.display()))?;
            println!("wrote {}", out.display());
            Ok(())
        }
    }
}

fn parse_command(args: Vec<String>) -> Result<CliCommand, String> {
    if args.is_empty() {
        return Err(help_text());
    }

    let cmd = args[0].as_str();
    match cmd {
        "serve" => parse_serve(args),
        "render" => parse_render(args),
        "init-data" => parse_init_data(args),
        "help" | "--help" | "-h" => Err(help_text()),
        other => Err(format!("unknown command '{other}'\n\n{}", help_text())),
    }
}

fn parse_serve(args: Vec<String>) -> Result<CliCommand, String> {
    let mut dir: Option<PathBuf> = None;
    let mut port = DEFAULT_PORT;
    let mut data: Option<String> = None;

    let mut iter = args.into_iter().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--port" => {
                let value = iter
                    .next()
                    .ok_or_else(|| "--port requires a value".to_string())?;
                port = value
                    .parse()
                    .map_err(|_| format!("invalid port '{value}'"))?;
            }
            "--data" => {
                data = Some(
                    iter.next()
                        .ok_or_else(|| "--data requires a value".to_string())?,
                );
            }
            _ if arg.starts_with("--") => return Err(format!("unknown flag '{arg}'")),
            _ => {
                if dir.is_some() {
                    return Err("serve takes a single directory".to_string());
                }
                dir = Some(PathBuf::from(arg));
            }
        }
    }

    Ok(CliCommand::Serve {
        dir: dir.unwrap_or_else(|| PathBuf::from(".")),
        port,
        data,
    })
}

fn parse_render(args: Vec<String>) -> Result<CliCommand, String> {
    let mut file: Option<PathBuf> = None;
    let mut limit: Option<usize> = None;

    let mut iter = args.into_iter().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--limit" => {
                let value = iter
                    .next()
                    .ok_or_else(|| "--limit requires a value".to_string())?;
                limit = Some(
                    value
                        .parse()
                        .map_err(|_| format!("invalid limit '{value}'"))?,
                );
            }
            _ if arg.starts_with("--") => return Err(format!("unknown flag '{arg}'")),
            _ => {
                if file.is_some() {
                    return Err("render takes a single file".to_string());
                }
                file = Some(PathBuf::from(arg));
            }
        }
    }

    let file = file.ok_or_else(|| "render requires a projects file".to_string())?;
    Ok(CliCommand::Render { file, limit })
}

fn parse_init_data(args: Vec<String>) -> Result<CliCommand, String> {
    let mut iter = args.into_iter().skip(1);
    let out = iter
        .next()
        .map(PathBuf::from)
        .ok_or_else(|| "init-data requires an output path".to_string())?;
    if iter.next().is_some() {
        return Err("init-data takes a single output path".to_string());
    }
    Ok(CliCommand::InitData { out })
}

fn help_text() -> String {
    [
        "folio - portfolio project cards",
        "",
        "USAGE:",
        "  folio serve [dir] [--port N] [--data URL]   serve the portfolio pages and assets",
        "  folio render <file> [--limit N]             render cards from a local collection",
        "  folio init-data <path>                      write a starter projects.json",
    ]
    .join("\n")
}

async fn run_server(dir: PathBuf, port: u16, data: Option<String>) -> Result<(), String> {
    let root = dir
        .canonicalize()
        .map_err(|e| format!("failed to resolve {}: {e}", dir.display()))?;

    let data_url = data.unwrap_or_else(|| format!("http://localhost:{port}/{DATA_FILE}"));
    let title = root
        .file_name()
        .and_then(|s| s.to_str())
        .unwrap_or("Portfolio")
        .to_string();

    let pages = PortfolioAdapter::new(ProjectSource::new(data_url.clone()))
        .with_title(title)
        .router();
    let assets = Router::new()
        .route("/{*path}", get(route_static))
        .with_state(Arc::new(StaticSite { root: root.clone() }));
    let app = pages.merge(assets);

    let host = format!("0.0.0.0:{port}");
    println!("FOLIO serve");
    println!("Root: {}", root.display());
    println!("Data: {data_url}");
    println!("URL:  http://localhost:{port}");

    let listener = tokio::net::TcpListener::bind(&host)
        .await
        .map_err(|e| format!("failed to bind {host}: {e}"))?;
    axum::serve(listener, app)
        .await
        .map_err(|e| format!("server failed: {e}"))?;

    Ok(())
}

fn run_render(file: PathBuf, limit: Option<usize>) -> Result<(), String> {
    let source =
        fs::read_to_string(&file).map_err(|e| format!("failed to read {}: {e}", file.display()))?;
    let projects = Project::list_from_json(&source)
        .map_err(|e| format!("failed to parse {}: {e}", file.display()))?;

    let sorted = sort_newest_first(&projects);
    let shown: Vec<Project> = match limit {
        Some(n) => sorted.into_iter().take(n).collect(),
        None => sorted,
    };

    println!("{}", render_cards(&shown));
    Ok(())
}

async fn route_static(
    AxumPath(path): AxumPath<String>,
    AxumState(site): AxumState<Arc<StaticSite>>,
) -> Response {
    let rel = match sanitize_rel_path(&path) {
        Some(p) => p,
        None => return (StatusCode::BAD_REQUEST, "invalid path").into_response(),
    };

    match resolve_static_file(&site.root, &rel) {
        Some(file) => serve_static(&file).await,
        None => (StatusCode::NOT_FOUND, "not found").into_response(),
    }
}

fn sanitize_rel_path(path: &str) -> Option<PathBuf> {
    let trimmed = path.trim_start_matches('/');
    let rel = PathBuf::from(trimmed);
    for comp in rel.components() {
        if matches!(
            comp,
            Component::ParentDir | Component::RootDir | Component::Prefix(_)
        ) {
            return None;
        }
    }
    Some(rel)
}

fn resolve_static_file(root: &Path, rel: &Path) -> Option<PathBuf> {
    if rel.as_os_str().is_empty() {
        return None;
    }

    let full = root.join(rel);
    if !full.is_file() {
        return None;
    }

    Some(full)
}

async fn serve_static(path: &Path) -> Response {
    let bytes = match tokio::fs::read(path).await {
        Ok(v) => v,
        Err(e) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("failed to read {}: {e}", path.display()),
            )
                .into_response();
        }
    };

    let content_type = match path
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or_default()
    {
        "html" => "text/html; charset=utf-8",
        "css" => "text/css; charset=utf-8",
        "js" => "application/javascript; charset=utf-8",
        "json" => "application/json; charset=utf-8",
        "svg" => "image/svg+xml",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "webp" => "image/webp",
        "gif" => "image/gif",
        "ico" => "image/x-icon",
        "woff" => "font/woff",
        "woff2" => "font/woff2",
        _ => "application/octet-stream",
    };

    let mut response = bytes.into_response();
    if let Ok(value) = HeaderValue::from_str(content_type) {
        response.headers_mut().insert(header::CONTENT_TYPE, value);
    }
    response
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_serve_defaults() {
        let parsed = parse_command(argv(&["serve"])).expect("bare serve must parse");
        match parsed {
            CliCommand::Serve { dir, port, data } => {
                assert_eq!(dir, PathBuf::from("."));
                assert_eq!(port, DEFAULT_PORT);
                assert!(data.is_none());
            }
            other => panic!("expected serve, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_serve_with_flags() {
        let parsed = parse_command(argv(&[
            "serve",
            "site",
            "--port",
            "4000",
            "--data",
            "https://example.com/projects.json",
        ]))
        .expect("flagged serve must parse");
        match parsed {
            CliCommand::Serve { dir, port, data } => {
                assert_eq!(dir, PathBuf::from("site"));
                assert_eq!(port, 4000);
                assert_eq!(data.as_deref(), Some("https://example.com/projects.json"));
            }
            other => panic!("expected serve, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_render_with_limit() {
        let parsed = parse_command(argv(&["render", "projects.json", "--limit", "3"]))
            .expect("render must parse");
        match parsed {
            CliCommand::Render { file, limit } => {
                assert_eq!(file, PathBuf::from("projects.json"));
                assert_eq!(limit, Some(3));
            }
            other => panic!("expected render, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_rejects_unknown_input() {
        assert!(parse_command(argv(&["launch"])).is_err());
        assert!(parse_command(argv(&["serve", "--port"])).is_err());
        assert!(parse_command(argv(&["serve", "--port", "not-a-port"])).is_err());
        assert!(parse_command(argv(&["render"])).is_err(), "render needs a file");
        assert!(parse_command(argv(&["init-data"])).is_err(), "init-data needs a path");
    }

    #[test]
    fn test_sanitize_rel_path_refuses_traversal() {
        assert!(sanitize_rel_path("images/shot.png").is_some());
        assert!(sanitize_rel_path("/images/shot.png").is_some());
        assert!(sanitize_rel_path("../secrets.txt").is_none());
        assert!(sanitize_rel_path("images/../../secrets.txt").is_none());
    }
}
