//! Server-rendered HTML pages.
//!
//! Every page goes through [`layout`]. Interpolated values are escaped with
//! [`escape`]; query-string values are percent-encoded as well.

use std::fmt::Write;

use axum::http::StatusCode;
use axum::response::Html;
use catalog_db::models::project::ProjectWithSector;
use catalog_db::models::sector::Sector;

/// Where form-based routes live.
pub const PROJECTS_PATH: &str = "/solutions/projects";
pub const ADD_PROJECT_PATH: &str = "/solutions/addProject";
pub const EDIT_PROJECT_PATH: &str = "/solutions/editProject";
pub const DELETE_PROJECT_PATH: &str = "/solutions/deleteProject";

/// Escape text for HTML element content and quoted attribute values.
pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

fn layout(title: &str, body: &str) -> Html<String> {
    Html(format!(
        "<!doctype html>\
<html lang=\"en\"><head><meta charset=\"utf-8\">\
<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\
<title>{title} | Climate Solutions</title></head><body>\
<nav><a href=\"/\">Home</a> | <a href=\"/about\">About</a> | \
<a href=\"{PROJECTS_PATH}\">Projects</a> | <a href=\"{ADD_PROJECT_PATH}\">Add Project</a></nav>\
<main>{body}</main></body></html>",
        title = escape(title),
    ))
}

pub fn home() -> Html<String> {
    layout(
        "Home",
        &format!(
            "<h1>Climate Solutions</h1>\
<p>A catalog of projects working to reduce emissions, grouped by sector.</p>\
<p><a href=\"{PROJECTS_PATH}\">Browse all projects</a></p>"
        ),
    )
}

pub fn about() -> Html<String> {
    layout(
        "About",
        "<h1>About</h1>\
<p>This site collects climate projects, each described by a short summary, \
an introduction, its impact, and a link to the original source.</p>",
    )
}

fn sector_link(project: &ProjectWithSector) -> String {
    match &project.sector {
        Some(sector) => format!(
            "<a href=\"{PROJECTS_PATH}?sector={}\">{}</a>",
            escape(&urlencoding::encode(&sector.sector_name)),
            escape(&sector.sector_name)
        ),
        None => String::new(),
    }
}

/// The project listing.
pub fn projects(projects: &[ProjectWithSector], sector_filter: Option<&str>) -> Html<String> {
    let heading = match sector_filter {
        Some(sector) => format!("Projects in sectors matching \"{}\"", escape(sector)),
        None => "All Projects".to_string(),
    };

    let mut rows = String::new();
    for p in projects {
        let id = p.project.id;
        let _ = write!(
            rows,
            "<tr><td><a href=\"{PROJECTS_PATH}/{id}\">{title}</a></td><td>{sector}</td>\
<td><a href=\"{EDIT_PROJECT_PATH}/{id}\">Edit</a> \
<a href=\"{DELETE_PROJECT_PATH}/{id}\">Delete</a></td></tr>",
            title = escape(&p.project.title),
            sector = sector_link(p),
        );
    }
    if rows.is_empty() {
        rows.push_str("<tr><td colspan=\"3\">No projects yet.</td></tr>");
    }

    layout(
        "Projects",
        &format!(
            "<h1>{heading}</h1>\
<table><thead><tr><th>Title</th><th>Sector</th><th></th></tr></thead>\
<tbody>{rows}</tbody></table>"
        ),
    )
}

/// A single project's detail page.
pub fn project(project: &ProjectWithSector) -> Html<String> {
    let p = &project.project;
    let image = if p.feature_img_url.is_empty() {
        String::new()
    } else {
        format!(
            "<img src=\"{}\" alt=\"{}\">",
            escape(&p.feature_img_url),
            escape(&p.title)
        )
    };
    let source = if p.original_source_url.is_empty() {
        String::new()
    } else {
        format!(
            "<p><a href=\"{}\">Original source</a></p>",
            escape(&p.original_source_url)
        )
    };

    layout(
        &p.title,
        &format!(
            "<h1>{title}</h1><p>{sector}</p>{image}\
<h2>Summary</h2><p>{summary}</p>\
<h2>Introduction</h2><p>{intro}</p>\
<h2>Impact</h2><p>{impact}</p>{source}\
<p><a href=\"{EDIT_PROJECT_PATH}/{id}\">Edit</a> | \
<a href=\"{DELETE_PROJECT_PATH}/{id}\">Delete</a> | \
<a href=\"{PROJECTS_PATH}\">Back to projects</a></p>",
            id = p.id,
            title = escape(&p.title),
            sector = sector_link(project),
            summary = escape(&p.summary_short),
            intro = escape(&p.intro_short),
            impact = escape(&p.impact),
        ),
    )
}

fn sector_options(sectors: &[Sector], selected: Option<i32>) -> String {
    let mut options = String::from("<option value=\"\">(none)</option>");
    for sector in sectors {
        let marker = if selected == Some(sector.id) {
            " selected"
        } else {
            ""
        };
        let _ = write!(
            options,
            "<option value=\"{}\"{marker}>{}</option>",
            sector.id,
            escape(&sector.sector_name)
        );
    }
    options
}

/// Values pre-filled into the project form.
#[derive(Debug, Default)]
struct FormValues<'a> {
    id: Option<i32>,
    title: &'a str,
    feature_img_url: &'a str,
    summary_short: &'a str,
    intro_short: &'a str,
    impact: &'a str,
    original_source_url: &'a str,
    sector_id: Option<i32>,
}

fn project_form(action: &str, submit: &str, values: &FormValues<'_>, sectors: &[Sector]) -> String {
    let hidden_id = values
        .id
        .map(|id| format!("<input type=\"hidden\" name=\"id\" value=\"{id}\">"))
        .unwrap_or_default();
    format!(
        "<form method=\"post\" action=\"{action}\">{hidden_id}\
<label>Title <input name=\"title\" maxlength=\"255\" required value=\"{title}\"></label>\
<label>Feature image URL <input name=\"feature_img_url\" type=\"url\" maxlength=\"255\" value=\"{img}\"></label>\
<label>Sector <select name=\"sector_id\">{options}</select></label>\
<label>Summary <textarea name=\"summary_short\">{summary}</textarea></label>\
<label>Introduction <textarea name=\"intro_short\">{intro}</textarea></label>\
<label>Impact <textarea name=\"impact\">{impact}</textarea></label>\
<label>Original source URL <input name=\"original_source_url\" type=\"url\" maxlength=\"255\" value=\"{source}\"></label>\
<button type=\"submit\">{submit}</button></form>",
        title = escape(values.title),
        img = escape(values.feature_img_url),
        options = sector_options(sectors, values.sector_id),
        summary = escape(values.summary_short),
        intro = escape(values.intro_short),
        impact = escape(values.impact),
        source = escape(values.original_source_url),
    )
}

/// Empty creation form.
pub fn add_project(sectors: &[Sector]) -> Html<String> {
    let form = project_form(
        ADD_PROJECT_PATH,
        "Add Project",
        &FormValues::default(),
        sectors,
    );
    layout("Add Project", &format!("<h1>Add Project</h1>{form}"))
}

/// Edit form pre-filled from an existing project.
pub fn edit_project(project: &ProjectWithSector, sectors: &[Sector]) -> Html<String> {
    let p = &project.project;
    let values = FormValues {
        id: Some(p.id),
        title: &p.title,
        feature_img_url: &p.feature_img_url,
        summary_short: &p.summary_short,
        intro_short: &p.intro_short,
        impact: &p.impact,
        original_source_url: &p.original_source_url,
        sector_id: p.sector_id,
    };
    let form = project_form(EDIT_PROJECT_PATH, "Update Project", &values, sectors);
    layout(
        "Edit Project",
        &format!("<h1>Edit Project: {}</h1>{form}", escape(&p.title)),
    )
}

pub fn not_found(message: &str) -> Html<String> {
    layout(
        "Not Found",
        &format!(
            "<h1>404</h1><p class=\"message\">{}</p><p><a href=\"/\">Return home</a></p>",
            escape(message)
        ),
    )
}

/// Generic failure page. The heading shows the status the page is served with.
pub fn server_error(status: StatusCode, message: &str) -> Html<String> {
    layout(
        "Error",
        &format!(
            "<h1>{}</h1><p class=\"message\">{}</p><p><a href=\"/\">Return home</a></p>",
            status.as_u16(),
            escape(message)
        ),
    )
}
