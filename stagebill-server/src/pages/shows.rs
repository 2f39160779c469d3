//! Show pages

use std::fmt::Write;

use chrono::{DateTime, Utc};

use super::forms::show_form;
use super::{escape, escape_opt, layout, render};
use crate::db::repos::ShowListing;
use crate::models::DateStyle;

pub fn list(shows: &[ShowListing]) -> String {
    let body = render(|out| {
        writeln!(out, "<h1>Shows</h1>")?;
        if shows.is_empty() {
            writeln!(out, "<p>No shows listed yet.</p>")?;
        }
        for show in shows {
            writeln!(out, "<div class=\"show\">")?;
            if let Some(image) = &show.artist_image_link {
                writeln!(out, "<img src=\"{}\" alt=\"\">", escape(image))?;
            }
            writeln!(out, "<time>{}</time>", DateStyle::Medium.format(show.start_time))?;
            writeln!(
                out,
                "<a href=\"/artists/{}\">{}</a> playing at <a href=\"/venues/{}\">{}</a>",
                show.artist_id,
                escape_opt(show.artist_name.as_deref()),
                show.venue_id,
                escape(&show.venue_name)
            )?;
            writeln!(out, "</div>")?;
        }
        Ok(())
    });
    layout("Shows", None, &body)
}

/// New-show form with the start time pre-filled to `now`.
pub fn create_form(now: DateTime<Utc>) -> String {
    let hint = now.format("%Y-%m-%d %H:%M:%S").to_string();
    layout("New Show", None, &show_form(&hint))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn list_formats_medium_dates() {
        let shows = vec![ShowListing {
            id: 1,
            venue_id: 3,
            venue_name: "Park Square Live Music & Coffee".into(),
            artist_id: 6,
            artist_name: Some("The Wild Sax Band".into()),
            artist_image_link: None,
            start_time: Utc.with_ymd_and_hms(2035, 4, 1, 20, 0, 0).unwrap(),
        }];
        let html = list(&shows);

        assert!(html.contains("<time>Sun 04, 01, 2035 8:00PM</time>"));
        assert!(html.contains("The Wild Sax Band</a> playing at"));
        assert!(html.contains("Park Square Live Music &amp; Coffee"));
    }

    #[test]
    fn create_form_prefills_now() {
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 12, 30, 0).unwrap();
        assert!(create_form(now).contains("value=\"2024-06-01 12:30:00\""));
    }
}
