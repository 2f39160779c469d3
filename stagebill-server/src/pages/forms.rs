//! Create/edit forms
//!
//! Field names match what `models::forms` reads back: repeated `genres`,
//! `website_link` for the website column and checkbox flags.

use std::fmt::{self, Write};

use super::{escape, escape_opt, render};
use crate::models::{ArtistInput, Genres, VenueInput};

pub const GENRE_CHOICES: [&str; 19] = [
    "Alternative",
    "Blues",
    "Classical",
    "Country",
    "Electronic",
    "Folk",
    "Funk",
    "Hip-Hop",
    "Heavy Metal",
    "Instrumental",
    "Jazz",
    "Musical Theatre",
    "Pop",
    "Punk",
    "R&B",
    "Reggae",
    "Rock n Roll",
    "Soul",
    "Other",
];

pub const STATE_CHOICES: [&str; 51] = [
    "AL", "AK", "AZ", "AR", "CA", "CO", "CT", "DE", "DC", "FL", "GA", "HI", "ID", "IL", "IN",
    "IA", "KS", "KY", "LA", "ME", "MT", "NE", "NV", "NH", "NJ", "NM", "NY", "NC", "ND", "OH",
    "OK", "OR", "MD", "MA", "MI", "MN", "MS", "MO", "PA", "RI", "SC", "SD", "TN", "TX", "UT",
    "VT", "VA", "WA", "WV", "WI", "WY",
];

fn text_field(out: &mut String, name: &str, label: &str, value: Option<&str>) -> fmt::Result {
    writeln!(
        out,
        "<label>{label} <input type=\"text\" name=\"{name}\" value=\"{}\"></label>",
        escape_opt(value)
    )
}

fn state_field(out: &mut String, selected: Option<&str>) -> fmt::Result {
    writeln!(out, "<label>State <select name=\"state\">")?;
    for state in STATE_CHOICES {
        let mark = if Some(state) == selected { " selected" } else { "" };
        writeln!(out, "<option value=\"{state}\"{mark}>{state}</option>")?;
    }
    writeln!(out, "</select></label>")
}

fn genres_field(out: &mut String, selected: &Genres) -> fmt::Result {
    writeln!(out, "<label>Genres <select name=\"genres\" multiple>")?;
    for genre in GENRE_CHOICES {
        let mark = if selected.contains(genre) { " selected" } else { "" };
        writeln!(
            out,
            "<option value=\"{0}\"{mark}>{0}</option>",
            escape(genre)
        )?;
    }
    // Stored genres outside the fixed list stay selectable
    for genre in selected.iter().filter(|g| !GENRE_CHOICES.contains(g)) {
        writeln!(out, "<option value=\"{0}\" selected>{0}</option>", escape(genre))?;
    }
    writeln!(out, "</select></label>")
}

fn checkbox(out: &mut String, name: &str, label: &str, checked: bool) -> fmt::Result {
    let mark = if checked { " checked" } else { "" };
    writeln!(
        out,
        "<label><input type=\"checkbox\" name=\"{name}\" value=\"y\"{mark}> {label}</label>"
    )
}

/// Venue form posting to `action`.
pub fn venue_form(heading: &str, action: &str, values: &VenueInput) -> String {
    render(|out| {
        writeln!(out, "<h1>{}</h1>", escape(heading))?;
        writeln!(out, "<form method=\"post\" action=\"{}\">", escape(action))?;
        text_field(out, "name", "Name", values.name.as_deref())?;
        text_field(out, "city", "City", values.city.as_deref())?;
        state_field(out, values.state.as_deref())?;
        text_field(out, "address", "Address", values.address.as_deref())?;
        text_field(out, "phone", "Phone", values.phone.as_deref())?;
        genres_field(out, &values.genres)?;
        text_field(out, "image_link", "Image Link", values.image_link.as_deref())?;
        text_field(out, "facebook_link", "Facebook Link", values.facebook_link.as_deref())?;
        text_field(out, "website_link", "Website Link", values.website.as_deref())?;
        checkbox(out, "seeking_talent", "Looking for talent", values.seeking_talent)?;
        text_field(
            out,
            "seeking_description",
            "Seeking Description",
            values.seeking_description.as_deref(),
        )?;
        writeln!(out, "<button type=\"submit\">Save Venue</button>")?;
        writeln!(out, "</form>")
    })
}

/// Artist form posting to `action`.
pub fn artist_form(heading: &str, action: &str, values: &ArtistInput) -> String {
    render(|out| {
        writeln!(out, "<h1>{}</h1>", escape(heading))?;
        writeln!(out, "<form method=\"post\" action=\"{}\">", escape(action))?;
        text_field(out, "name", "Name", values.name.as_deref())?;
        text_field(out, "city", "City", values.city.as_deref())?;
        state_field(out, values.state.as_deref())?;
        text_field(out, "phone", "Phone", values.phone.as_deref())?;
        genres_field(out, &values.genres)?;
        text_field(out, "image_link", "Image Link", values.image_link.as_deref())?;
        text_field(out, "facebook_link", "Facebook Link", values.facebook_link.as_deref())?;
        text_field(out, "website_link", "Website Link", values.website.as_deref())?;
        checkbox(out, "seeking_venue", "Looking for venues", values.seeking_venue)?;
        text_field(
            out,
            "seeking_description",
            "Seeking Description",
            values.seeking_description.as_deref(),
        )?;
        writeln!(out, "<button type=\"submit\">Save Artist</button>")?;
        writeln!(out, "</form>")
    })
}

/// New-show form. `start_time` defaults to `now_hint`.
pub fn show_form(now_hint: &str) -> String {
    render(|out| {
        writeln!(out, "<h1>List a new show</h1>")?;
        writeln!(out, "<form method=\"post\" action=\"/shows/create\">")?;
        text_field(out, "artist_id", "Artist ID", None)?;
        text_field(out, "venue_id", "Venue ID", None)?;
        text_field(out, "start_time", "Start Time", Some(now_hint))?;
        writeln!(out, "<button type=\"submit\">Create Show</button>")?;
        writeln!(out, "</form>")
    })
}
