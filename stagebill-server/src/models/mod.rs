//! Domain models and query helpers
//!
//! User input is validated when these types are constructed; invalid input
//! returns ValidationError, not panic. The helpers here are pure so the
//! aggregation rules (pagination, grouping, show timing, quiz selection) can
//! be tested without a database.

pub mod validation;
pub mod pagination;
pub mod genres;
pub mod schedule;
pub mod search;
pub mod forms;
pub mod trivia;
pub mod quiz;

pub use validation::ValidationError;
pub use pagination::{Page, Pagination, PaginationParams, PER_PAGE};
pub use genres::Genres;
pub use schedule::{group_by_area, partition_by_start, Area, DateStyle, Partitioned, ShowTiming};
pub use search::SearchTerm;
pub use forms::{ArtistInput, FormFields, ShowInput, VenueInput};
pub use trivia::{AnswerText, CategoryName, NewQuestion, QuestionText};
pub use quiz::{pick_question, QuizScope};
