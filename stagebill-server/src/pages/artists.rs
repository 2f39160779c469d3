//! Artist pages

use std::fmt::{self, Write};

use super::forms::artist_form;
use super::{escape, escape_opt, layout, render, search_box, upcoming_label};
use crate::db::repos::{Artist, ArtistShow, ArtistSummary};
use crate::models::{ArtistInput, DateStyle, Genres, Partitioned};

const UNNAMED: &str = "(unnamed artist)";

fn display_name(name: Option<&str>) -> String {
    match name {
        Some(name) if !name.trim().is_empty() => escape(name),
        _ => UNNAMED.to_owned(),
    }
}

fn summary_items(out: &mut String, artists: &[ArtistSummary], with_counts: bool) -> fmt::Result {
    writeln!(out, "<ul>")?;
    for artist in artists {
        write!(
            out,
            "<li><a href=\"/artists/{}\">{}</a>",
            artist.id,
            display_name(artist.name.as_deref())
        )?;
        if with_counts {
            write!(out, " <small>{}</small>", upcoming_label(artist.num_upcoming_shows))?;
        }
        writeln!(out, "</li>")?;
    }
    writeln!(out, "</ul>")
}

/// Every artist, id order.
pub fn list(artists: &[ArtistSummary]) -> String {
    let body = render(|out| {
        search_box(out, "/artists/search", "")?;
        if artists.is_empty() {
            writeln!(out, "<p>No artists listed yet.</p>")?;
        }
        summary_items(out, artists, false)
    });
    layout("Artists", None, &body)
}

pub fn search_results(term: &str, results: &[ArtistSummary]) -> String {
    let body = render(|out| {
        search_box(out, "/artists/search", term)?;
        let noun = if results.len() == 1 { "result" } else { "results" };
        writeln!(
            out,
            "<h3>Number of search {noun} for \"{}\": {}</h3>",
            escape(term),
            results.len()
        )?;
        summary_items(out, results, true)
    });
    layout("Artist Search", None, &body)
}

fn show_list(out: &mut String, heading: &str, shows: &[ArtistShow]) -> fmt::Result {
    writeln!(out, "<section class=\"shows\">")?;
    writeln!(out, "<h2>{} {}</h2>", shows.len(), heading)?;
    for show in shows {
        writeln!(out, "<div class=\"show\">")?;
        if let Some(image) = &show.venue_image_link {
            writeln!(out, "<img src=\"{}\" alt=\"\">", escape(image))?;
        }
        writeln!(
            out,
            "<a href=\"/venues/{}\">{}</a>",
            show.venue_id,
            escape(&show.venue_name)
        )?;
        writeln!(out, "<time>{}</time>", DateStyle::Full.format(show.start_time))?;
        writeln!(out, "</div>")?;
    }
    writeln!(out, "</section>")
}

pub fn detail(artist: &Artist, shows: &Partitioned<ArtistShow>) -> String {
    let name = display_name(artist.name.as_deref());
    let body = render(|out| {
        writeln!(out, "<h1>{}</h1>", name)?;
        writeln!(out, "<p class=\"subtitle\">ID: {}</p>", artist.id)?;
        writeln!(out, "<div class=\"genres\">")?;
        for genre in Genres::parse(artist.genres.as_deref()).iter() {
            writeln!(out, "<span class=\"genre\">{}</span>", escape(genre))?;
        }
        writeln!(out, "</div>")?;
        writeln!(
            out,
            "<p>{}, {}</p>",
            escape_opt(artist.city.as_deref()),
            escape_opt(artist.state.as_deref())
        )?;
        if let Some(phone) = &artist.phone {
            writeln!(out, "<p>{}</p>", escape(phone))?;
        }
        for link in [&artist.website, &artist.facebook_link].into_iter().flatten() {
            writeln!(out, "<p><a href=\"{0}\">{0}</a></p>", escape(link))?;
        }
        if artist.seeking_venue {
            writeln!(out, "<div class=\"seeking\">")?;
            writeln!(out, "<p>Currently seeking performance venues</p>")?;
            writeln!(
                out,
                "<p>{}</p>",
                escape_opt(artist.seeking_description.as_deref())
            )?;
            writeln!(out, "</div>")?;
        } else {
            writeln!(out, "<p class=\"seeking\">Not currently seeking performance venues</p>")?;
        }
        if let Some(image) = &artist.image_link {
            writeln!(out, "<img src=\"{}\" alt=\"Artist Image\">", escape(image))?;
        }
        writeln!(out, "<a href=\"/artists/{}/edit\">Edit</a>", artist.id)?;
        show_list(out, "Upcoming Shows", &shows.upcoming)?;
        show_list(out, "Past Shows", &shows.past)
    });
    layout("Artist", None, &body)
}

pub fn create_form() -> String {
    layout(
        "New Artist",
        None,
        &artist_form("List a new artist", "/artists/create", &ArtistInput::default()),
    )
}

pub fn edit_form(artist: &Artist) -> String {
    let heading = match artist.name.as_deref() {
        Some(name) => format!("Edit artist {}", name),
        None => "Edit artist".to_owned(),
    };
    let action = format!("/artists/{}/edit", artist.id);
    layout(
        "Edit Artist",
        None,
        &artist_form(&heading, &action, &artist.to_input()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn artist() -> Artist {
        Artist {
            id: 4,
            name: Some("Guns N Petals".into()),
            city: Some("San Francisco".into()),
            state: Some("CA".into()),
            phone: Some("326-123-5000".into()),
            genres: Some("Rock n Roll".into()),
            image_link: None,
            facebook_link: Some("https://www.facebook.com/GunsNPetals".into()),
            website: None,
            seeking_venue: false,
            seeking_description: None,
        }
    }

    #[test]
    fn list_shows_names_without_counts() {
        let artists = vec![
            ArtistSummary {
                id: 4,
                name: Some("Guns N Petals".into()),
                num_upcoming_shows: 2,
            },
            ArtistSummary {
                id: 5,
                name: None,
                num_upcoming_shows: 0,
            },
        ];
        let html = list(&artists);

        assert!(html.contains("<a href=\"/artists/4\">Guns N Petals</a></li>"));
        assert!(html.contains(UNNAMED));
        assert!(!html.contains("upcoming show"));

        let html = search_results("petals", &artists[..1]);
        assert!(html.contains("2 upcoming shows"));
        assert!(html.contains("Number of search result for \"petals\": 1"));
    }

    #[test]
    fn detail_renders_venue_shows() {
        let now = Utc.with_ymd_and_hms(2030, 1, 1, 0, 0, 0).unwrap();
        let shows = Partitioned {
            past: vec![ArtistShow {
                venue_id: 1,
                venue_name: "The Musical Hop".into(),
                venue_image_link: None,
                start_time: Utc.with_ymd_and_hms(2019, 5, 21, 21, 30, 0).unwrap(),
            }],
            upcoming: Vec::new(),
        };
        assert!(shows.past[0].start_time < now);

        let html = detail(&artist(), &shows);
        assert!(html.contains("<h1>Guns N Petals</h1>"));
        assert!(html.contains("0 Upcoming Shows"));
        assert!(html.contains("1 Past Shows"));
        assert!(html.contains("href=\"/venues/1\""));
        assert!(html.contains("Not currently seeking performance venues"));
        assert!(html.contains("https://www.facebook.com/GunsNPetals"));
    }

    #[test]
    fn edit_form_keeps_genres() {
        let html = edit_form(&artist());
        assert!(html.contains("action=\"/artists/4/edit\""));
        assert!(html.contains("<option value=\"Rock n Roll\" selected>"));
    }
}
