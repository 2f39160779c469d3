//! Venue pages

use std::fmt::Write;

use super::forms::venue_form;
use super::{escape, escape_opt, layout, render, search_box, upcoming_label};
use crate::db::repos::{Venue, VenueShow, VenueSummary};
use crate::models::{Area, DateStyle, Genres, Partitioned, VenueInput};

/// Venues grouped by city and state.
pub fn list(areas: &[Area<VenueSummary>]) -> String {
    let body = render(|out| {
        search_box(out, "/venues/search", "")?;
        if areas.is_empty() {
            writeln!(out, "<p>No venues listed yet.</p>")?;
        }
        for area in areas {
            writeln!(out, "<section class=\"area\">")?;
            writeln!(out, "<h3>{}, {}</h3>", escape(&area.city), escape(&area.state))?;
            writeln!(out, "<ul>")?;
            for venue in &area.venues {
                writeln!(
                    out,
                    "<li><a href=\"/venues/{}\">{}</a> <small>{}</small></li>",
                    venue.id,
                    escape(&venue.name),
                    upcoming_label(venue.num_upcoming_shows)
                )?;
            }
            writeln!(out, "</ul>")?;
            writeln!(out, "</section>")?;
        }
        Ok(())
    });
    layout("Venues", None, &body)
}

/// Search results with match count.
pub fn search_results(term: &str, results: &[VenueSummary]) -> String {
    let body = render(|out| {
        search_box(out, "/venues/search", term)?;
        let noun = if results.len() == 1 { "result" } else { "results" };
        writeln!(
            out,
            "<h3>Number of search {noun} for \"{}\": {}</h3>",
            escape(term),
            results.len()
        )?;
        writeln!(out, "<ul>")?;
        for venue in results {
            writeln!(
                out,
                "<li><a href=\"/venues/{}\">{}</a> <small>{}</small></li>",
                venue.id,
                escape(&venue.name),
                upcoming_label(venue.num_upcoming_shows)
            )?;
        }
        writeln!(out, "</ul>")
    });
    layout("Venue Search", None, &body)
}

fn show_list(out: &mut String, heading: &str, shows: &[VenueShow]) -> std::fmt::Result {
    writeln!(out, "<section class=\"shows\">")?;
    writeln!(out, "<h2>{} {}</h2>", shows.len(), heading)?;
    for show in shows {
        writeln!(out, "<div class=\"show\">")?;
        if let Some(image) = &show.artist_image_link {
            writeln!(out, "<img src=\"{}\" alt=\"\">", escape(image))?;
        }
        writeln!(
            out,
            "<a href=\"/artists/{}\">{}</a>",
            show.artist_id,
            escape_opt(show.artist_name.as_deref())
        )?;
        writeln!(out, "<time>{}</time>", DateStyle::Full.format(show.start_time))?;
        writeln!(out, "</div>")?;
    }
    writeln!(out, "</section>")
}

/// Venue detail with its past and upcoming shows.
pub fn detail(venue: &Venue, shows: &Partitioned<VenueShow>) -> String {
    let body = render(|out| {
        writeln!(out, "<h1>{}</h1>", escape(&venue.name))?;
        writeln!(out, "<p class=\"subtitle\">ID: {}</p>", venue.id)?;
        let genres = Genres::parse(venue.genres.as_deref());
        writeln!(out, "<div class=\"genres\">")?;
        for genre in genres.iter() {
            writeln!(out, "<span class=\"genre\">{}</span>", escape(genre))?;
        }
        writeln!(out, "</div>")?;
        writeln!(out, "<p>{}, {}</p>", escape(&venue.city), escape(&venue.state))?;
        writeln!(out, "<p>{}</p>", escape(&venue.address))?;
        writeln!(out, "<p>{}</p>", escape(&venue.phone))?;
        if let Some(website) = &venue.website {
            writeln!(out, "<p><a href=\"{0}\">{0}</a></p>", escape(website))?;
        }
        if let Some(facebook) = &venue.facebook_link {
            writeln!(out, "<p><a href=\"{0}\">{0}</a></p>", escape(facebook))?;
        }
        if venue.seeking_talent {
            writeln!(out, "<div class=\"seeking\">")?;
            writeln!(out, "<p>Currently seeking talent</p>")?;
            writeln!(
                out,
                "<p>{}</p>",
                escape_opt(venue.seeking_description.as_deref())
            )?;
            writeln!(out, "</div>")?;
        } else {
            writeln!(out, "<p class=\"seeking\">Not currently seeking talent</p>")?;
        }
        if let Some(image) = &venue.image_link {
            writeln!(out, "<img src=\"{}\" alt=\"Venue Image\">", escape(image))?;
        }
        writeln!(out, "<a href=\"/venues/{}/edit\">Edit</a>", venue.id)?;
        show_list(out, "Upcoming Shows", &shows.upcoming)?;
        show_list(out, "Past Shows", &shows.past)
    });
    layout(&venue.name, None, &body)
}

pub fn create_form() -> String {
    layout(
        "New Venue",
        None,
        &venue_form("List a new venue", "/venues/create", &VenueInput::default()),
    )
}

/// Edit form pre-filled from the stored row.
pub fn edit_form(venue: &Venue) -> String {
    let heading = format!("Edit venue {}", venue.name);
    let action = format!("/venues/{}/edit", venue.id);
    layout(
        "Edit Venue",
        None,
        &venue_form(&heading, &action, &venue.to_input()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{group_by_area, partition_by_start};
    use chrono::{TimeZone, Utc};

    fn summary(id: i32, name: &str, city: &str, upcoming: i64) -> VenueSummary {
        VenueSummary {
            id,
            name: name.into(),
            city: city.into(),
            state: "CA".into(),
            num_upcoming_shows: upcoming,
        }
    }

    fn venue() -> Venue {
        Venue {
            id: 1,
            name: "The Musical Hop".into(),
            city: "San Francisco".into(),
            state: "CA".into(),
            address: "1015 Folsom Street".into(),
            phone: "123-123-1234".into(),
            genres: Some("{Jazz,Reggae,Swing}".into()),
            image_link: None,
            facebook_link: None,
            website: Some("https://www.themusicalhop.com".into()),
            seeking_talent: true,
            seeking_description: Some("We are on the lookout for a local artist".into()),
        }
    }

    #[test]
    fn list_groups_by_area() {
        let venues = vec![
            summary(1, "The Musical Hop", "San Francisco", 0),
            summary(2, "The Dueling Pianos Bar", "New York", 1),
            summary(3, "Park Square Live Music & Coffee", "San Francisco", 2),
        ];
        let areas = group_by_area(venues, |v| (v.city.as_str(), v.state.as_str()));
        let html = list(&areas);

        let sf = html.find("San Francisco, CA").unwrap();
        let ny = html.find("New York, CA").unwrap();
        assert!(sf < ny);
        assert!(html.contains("Park Square Live Music &amp; Coffee"));
        assert!(html.contains("1 upcoming show<"));
    }

    #[test]
    fn search_counts_results() {
        let html = search_results("Music", &[summary(1, "The Musical Hop", "San Francisco", 0)]);
        assert!(html.contains("Number of search result for \"Music\": 1"));
        assert!(html.contains("href=\"/venues/1\""));
    }

    #[test]
    fn detail_splits_shows() {
        let now = Utc.with_ymd_and_hms(2030, 1, 1, 0, 0, 0).unwrap();
        let shows = vec![
            VenueShow {
                artist_id: 4,
                artist_name: Some("Guns N Petals".into()),
                artist_image_link: None,
                start_time: Utc.with_ymd_and_hms(2019, 5, 21, 21, 30, 0).unwrap(),
            },
            VenueShow {
                artist_id: 5,
                artist_name: Some("Matt Quevedo".into()),
                artist_image_link: None,
                start_time: Utc.with_ymd_and_hms(2035, 4, 1, 20, 0, 0).unwrap(),
            },
        ];
        let html = detail(&venue(), &partition_by_start(shows, now, |s| s.start_time));

        assert!(html.contains("1 Upcoming Shows"));
        assert!(html.contains("1 Past Shows"));
        assert!(html.contains("<span class=\"genre\">Swing</span>"));
        assert!(html.contains("Currently seeking talent"));
        assert!(html.contains("Sunday April, 1, 2035 at 8:00PM"));
    }

    #[test]
    fn edit_form_targets_venue() {
        let html = edit_form(&venue());
        assert!(html.contains("action=\"/venues/1/edit\""));
        assert!(html.contains("<option value=\"Reggae\" selected>Reggae</option>"));
    }
}
