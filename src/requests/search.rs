use serde::Deserialize;

use crate::models::fundraiser::SearchFilter;

#[derive(Debug, Default, Deserialize)]
pub struct SearchRequest {
    pub organizer: Option<String>,
    pub city: Option<String>,
    pub category: Option<String>,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.is_empty())
}

impl SearchRequest {
    /// Drops empty parameters so that `?city=` filters nothing.
    pub fn into_filter(self) -> SearchFilter {
        SearchFilter {
            organizer: non_empty(self.organizer),
            city: non_empty(self.city),
            category: non_empty(self.category),
        }
    }
}
