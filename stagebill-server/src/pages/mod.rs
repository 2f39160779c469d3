//! Server-rendered HTML for the booking site
//!
//! Pages are plain strings assembled with `write!`; every value that came
//! from a user or the database goes through [`escape`].

pub mod artists;
pub mod errors;
pub mod forms;
pub mod shows;
pub mod venues;

use std::fmt::{self, Write};

/// Outcome message shown at the top of a page after a mutation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Success(String),
    Error(String),
}

impl Notice {
    fn class(&self) -> &'static str {
        match self {
            Self::Success(_) => "alert-success",
            Self::Error(_) => "alert-danger",
        }
    }

    fn text(&self) -> &str {
        match self {
            Self::Success(text) | Self::Error(text) => text,
        }
    }
}

/// Escape text for use in element content and quoted attributes.
pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escape an optional value, rendering None as an empty string.
pub(crate) fn escape_opt(raw: Option<&str>) -> String {
    raw.map(escape).unwrap_or_default()
}

/// Run a writer against a fresh buffer.
pub(crate) fn render(write: impl FnOnce(&mut String) -> fmt::Result) -> String {
    let mut out = String::new();
    // fmt::Write for String never fails
    let _ = write(&mut out);
    out
}

/// Wrap page content in the shared document chrome.
pub fn layout(title: &str, notice: Option<&Notice>, body: &str) -> String {
    render(|out| {
        writeln!(out, "<!doctype html>")?;
        writeln!(out, "<html lang=\"en\">")?;
        writeln!(out, "<head>")?;
        writeln!(out, "<meta charset=\"utf-8\">")?;
        writeln!(out, "<title>{} | Fyyur</title>", escape(title))?;
        writeln!(out, "</head>")?;
        writeln!(out, "<body>")?;
        writeln!(out, "<nav>")?;
        writeln!(out, "<a href=\"/\">Fyyur</a>")?;
        writeln!(out, "<a href=\"/venues\">Venues</a>")?;
        writeln!(out, "<a href=\"/artists\">Artists</a>")?;
        writeln!(out, "<a href=\"/shows\">Shows</a>")?;
        writeln!(out, "</nav>")?;
        if let Some(notice) = notice {
            writeln!(
                out,
                "<div class=\"alert {}\" role=\"alert\">{}</div>",
                notice.class(),
                escape(notice.text())
            )?;
        }
        writeln!(out, "<main>")?;
        out.push_str(body);
        writeln!(out, "</main>")?;
        writeln!(out, "</body>")?;
        write!(out, "</html>")
    })
}

/// Home page, optionally carrying the result of a create.
pub fn home(notice: Option<&Notice>) -> String {
    let body = render(|out| {
        writeln!(out, "<h1>Fyyur</h1>")?;
        writeln!(out, "<p>Book local talent at local venues.</p>")?;
        writeln!(out, "<ul>")?;
        writeln!(out, "<li><a href=\"/venues/create\">Post a venue</a></li>")?;
        writeln!(out, "<li><a href=\"/artists/create\">Post an artist</a></li>")?;
        writeln!(out, "<li><a href=\"/shows/create\">List a show</a></li>")?;
        writeln!(out, "</ul>")
    });
    layout("Home", notice, &body)
}

/// Search box posting `search_term` to `action`.
pub(crate) fn search_box(out: &mut String, action: &str, term: &str) -> fmt::Result {
    writeln!(out, "<form class=\"search\" method=\"post\" action=\"{}\">", action)?;
    writeln!(
        out,
        "<input type=\"search\" name=\"search_term\" value=\"{}\" placeholder=\"Search\">",
        escape(term)
    )?;
    writeln!(out, "</form>")
}

/// Upcoming-show count as a short phrase.
pub(crate) fn upcoming_label(count: i64) -> String {
    match count {
        1 => "1 upcoming show".to_owned(),
        n => format!("{} upcoming shows", n),
    }
}
