//! Route handlers organized by resource
//!
//! Booking (HTML): home, venues, artists, shows.
//! Trivia (JSON): categories, questions, quizzes.
//! Both: health.

pub mod artists;
pub mod categories;
pub mod health;
pub mod home;
pub mod questions;
pub mod quizzes;
pub mod shows;
pub mod venues;
