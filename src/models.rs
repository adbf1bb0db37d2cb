use serde::Deserialize;

/// A person record as returned by the `people` endpoint.
///
/// `films` holds the URLs of the film resources this person appears in; each
/// one can be passed to [`crate::SwapiService::fetch_film`]. Unknown fields in
/// the payload are ignored.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Person {
    pub name: String,
    pub films: Vec<String>,
}

/// A film record as returned by a film resource URL.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Film {
    pub title: String,
    pub opening_crawl: String,
    /// Release date as the API sends it (e.g. "1977-05-25"), left unparsed.
    pub release_date: String,
}
