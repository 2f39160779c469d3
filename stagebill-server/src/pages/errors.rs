//! Error pages

use super::layout;

pub fn not_found() -> String {
    layout(
        "Not Found",
        None,
        "<h1>404</h1>\n<p>Sorry, the page you requested could not be found.</p>\n",
    )
}

pub fn server_error() -> String {
    layout(
        "Server Error",
        None,
        "<h1>500</h1>\n<p>Something went wrong on our end. Please try again.</p>\n",
    )
}

pub fn not_implemented() -> String {
    layout(
        "Not Implemented",
        None,
        "<h1>501</h1>\n<p>This action is not available yet.</p>\n",
    )
}
