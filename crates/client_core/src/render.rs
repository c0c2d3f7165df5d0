//! Table renderings of a [`ListView`].

use std::fmt::Write as _;

use askama::Template;

use crate::view::{ListView, PostRow};

pub const COLUMN_HEADERS: [&str; 3] = ["ID", "Title", "Body"];
pub const PAGE_HEADING: &str = "Loading Article:";
pub const TABLE_ID: &str = "article";

#[derive(Template)]
#[template(path = "posts_table.html")]
struct PostsTableTemplate<'a> {
    table_id: &'a str,
    id_header: &'a str,
    title_header: &'a str,
    body_header: &'a str,
    rows: Vec<PostRow<'a>>,
}

#[derive(Template)]
#[template(path = "posts_page.html")]
struct PostsPageTemplate<'a> {
    heading: &'a str,
    error_message: Option<&'a str>,
    table_id: &'a str,
    table: String,
}

/// The `<table>` element only: a clickable `ID` header cell, then one row per post.
pub fn render_html_table(view: &ListView) -> Result<String, askama::Error> {
    let [id_header, title_header, body_header] = COLUMN_HEADERS;
    PostsTableTemplate {
        table_id: TABLE_ID,
        id_header,
        title_header,
        body_header,
        rows: view.rows().collect(),
    }
    .render()
}

/// A standalone document with heading, optional error notice, table and the
/// script that reverses rows when `ID` is clicked.
pub fn render_html_page(view: &ListView) -> Result<String, askama::Error> {
    PostsPageTemplate {
        heading: PAGE_HEADING,
        error_message: view.error_message(),
        table_id: TABLE_ID,
        table: render_html_table(view)?,
    }
    .render()
}

/// Fixed-width text table. Line breaks inside cells are flattened to spaces.
pub fn render_text_table(view: &ListView) -> String {
    let cells: Vec<[String; 3]> = view.rows().map(text_cells).collect();

    let mut widths = COLUMN_HEADERS.map(|header| header.chars().count());
    for row in &cells {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_text_line(&mut out, &COLUMN_HEADERS.map(str::to_string), &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    let _ = writeln!(out, "{}", rule.join("-+-"));
    for row in &cells {
        push_text_line(&mut out, row, &widths);
    }
    out
}

fn text_cells(row: PostRow<'_>) -> [String; 3] {
    [row.id.to_string(), flatten(row.title), flatten(row.body)]
}

fn flatten(cell: &str) -> String {
    cell.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn push_text_line(out: &mut String, cells: &[String; 3], widths: &[usize; 3]) {
    let [id, title, body] = cells;
    let line = format!(
        "{id:>id_w$} | {title:<title_w$} | {body}",
        id_w = widths[0],
        title_w = widths[1],
    );
    let _ = writeln!(out, "{}", line.trim_end());
}
