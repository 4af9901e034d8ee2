use crate::configuration::settings::CategoryMatch;
use crate::database::connection::DbPool;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, MySql, QueryBuilder};
use thiserror::Error;

const SELECT_WITH_CATEGORY: &str = "SELECT f.FUNDRAISER_ID, f.ORGANIZER, f.CAPTION, \
     f.TARGET_FUNDING, f.CURRENT_FUNDING, f.CITY, f.ACTIVE, f.IMAGE_URL, f.CATEGORY_ID, \
     c.NAME AS CATEGORY_NAME \
     FROM FUNDRAISER f \
     JOIN CATEGORY c ON f.CATEGORY_ID = c.CATEGORY_ID";

const ORDER_BY_ID: &str = " ORDER BY f.FUNDRAISER_ID";

#[derive(Error, Debug)]
pub enum FundraiserError {
    #[error("Fundraiser with ID {id} not found")]
    NotFound { id: i32 },
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// A fundraiser row joined with the name of its category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[sqlx(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct Fundraiser {
    pub fundraiser_id: i32,
    pub organizer: String,
    pub caption: String,
    pub target_funding: Decimal,
    pub current_funding: Decimal,
    pub city: String,
    pub active: bool,
    pub image_url: Option<String>,
    pub category_id: i32,
    pub category_name: String,
}

/// Search criteria. `None` means the criterion is not applied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchFilter {
    pub organizer: Option<String>,
    pub city: Option<String>,
    pub category: Option<String>,
}

impl SearchFilter {
    pub fn is_empty(&self) -> bool {
        self.organizer.is_none() && self.city.is_none() && self.category.is_none()
    }
}

fn contains_pattern(value: &str) -> String {
    format!("%{}%", value)
}

fn active_query<'args>() -> QueryBuilder<'args, MySql> {
    let mut query = QueryBuilder::new(SELECT_WITH_CATEGORY);
    query.push(" WHERE f.ACTIVE = TRUE");
    query
}

/// Builds the search statement: the active listing narrowed by every criterion present.
pub fn search_query<'args>(
    filter: &SearchFilter,
    category_match: CategoryMatch,
) -> QueryBuilder<'args, MySql> {
    let mut query = active_query();

    if let Some(organizer) = &filter.organizer {
        query.push(" AND f.ORGANIZER LIKE ");
        query.push_bind(contains_pattern(organizer));
    }

    if let Some(city) = &filter.city {
        query.push(" AND f.CITY LIKE ");
        query.push_bind(contains_pattern(city));
    }

    if let Some(category) = &filter.category {
        match category_match {
            CategoryMatch::Exact => {
                query.push(" AND c.NAME = ");
                query.push_bind(category.clone());
            }
            CategoryMatch::Substring => {
                query.push(" AND c.NAME LIKE ");
                query.push_bind(contains_pattern(category));
            }
        }
    }

    query.push(ORDER_BY_ID);
    query
}

impl Fundraiser {
    pub async fn find_active(pool: &DbPool) -> Result<Vec<Self>, FundraiserError> {
        let mut query = active_query();
        query.push(ORDER_BY_ID);

        let fundraisers = query.build_query_as::<Fundraiser>().fetch_all(pool).await?;

        Ok(fundraisers)
    }

    pub async fn search(
        pool: &DbPool,
        filter: &SearchFilter,
        category_match: CategoryMatch,
    ) -> Result<Vec<Self>, FundraiserError> {
        let mut query = search_query(filter, category_match);

        let fundraisers = query.build_query_as::<Fundraiser>().fetch_all(pool).await?;

        Ok(fundraisers)
    }

    pub async fn find_by_id(pool: &DbPool, id: i32) -> Result<Option<Self>, FundraiserError> {
        let fundraiser = sqlx::query_as::<_, Fundraiser>(&format!(
            "{} WHERE f.FUNDRAISER_ID = ?",
            SELECT_WITH_CATEGORY
        ))
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(fundraiser)
    }

    pub async fn get_by_id(pool: &DbPool, id: i32) -> Result<Self, FundraiserError> {
        Self::find_by_id(pool, id)
            .await?
            .ok_or(FundraiserError::NotFound { id })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::Execute;

    fn filter(organizer: Option<&str>, city: Option<&str>, category: Option<&str>) -> SearchFilter {
        SearchFilter {
            organizer: organizer.map(str::to_string),
            city: city.map(str::to_string),
            category: category.map(str::to_string),
        }
    }

    #[test]
    fn empty_search_is_the_active_listing() {
        let mut listing = active_query();
        listing.push(ORDER_BY_ID);

        let search = search_query(&SearchFilter::default(), CategoryMatch::Exact);

        assert_eq!(search.sql(), listing.sql());
        assert!(search.sql().contains("WHERE f.ACTIVE = TRUE"));
        assert!(!search.sql().contains(" AND "));
    }

    #[test]
    fn criteria_are_conjunctive_and_bound() {
        let mut query = search_query(
            &filter(Some("Jane"), Some("Sydney"), Some("Medical")),
            CategoryMatch::Exact,
        );
        let sql = query.sql().to_string();

        assert!(sql.ends_with(
            "WHERE f.ACTIVE = TRUE AND f.ORGANIZER LIKE ? AND f.CITY LIKE ? AND c.NAME = ? \
             ORDER BY f.FUNDRAISER_ID"
        ));
        assert!(!sql.contains("Jane"));

        let built = query.build();
        assert_eq!(built.sql(), sql);
    }

    #[test]
    fn only_present_criteria_are_applied() {
        let query = search_query(&filter(None, Some("Perth"), None), CategoryMatch::Exact);

        assert!(query.sql().contains(" AND f.CITY LIKE ?"));
        assert!(!query.sql().contains("ORGANIZER LIKE"));
        assert!(!query.sql().contains("c.NAME ="));
    }

    #[test]
    fn category_substring_mode_uses_like() {
        let query = search_query(&filter(None, None, Some("Med")), CategoryMatch::Substring);

        assert!(query.sql().contains(" AND c.NAME LIKE ?"));
        assert!(!query.sql().contains("c.NAME = ?"));
    }

    #[test]
    fn substring_patterns_wrap_the_value() {
        assert_eq!(contains_pattern("Smith"), "%Smith%");
        assert_eq!(contains_pattern(""), "%%");
    }

    #[test]
    fn filter_emptiness() {
        assert!(SearchFilter::default().is_empty());
        assert!(!filter(None, None, Some("Education")).is_empty());
    }

    #[test]
    fn serializes_with_column_names() {
        let fundraiser = Fundraiser {
            fundraiser_id: 7,
            organizer: "Jane Doe".to_string(),
            caption: "Help rebuild the library".to_string(),
            target_funding: Decimal::new(1000000, 2),
            current_funding: Decimal::new(250050, 2),
            city: "Sydney".to_string(),
            active: true,
            image_url: None,
            category_id: 2,
            category_name: "Education".to_string(),
        };

        let json = serde_json::to_value(&fundraiser).unwrap();

        assert_eq!(json["FUNDRAISER_ID"], 7);
        assert_eq!(json["CATEGORY_NAME"], "Education");
        assert_eq!(json["TARGET_FUNDING"], "10000.00");
        assert_eq!(json["CURRENT_FUNDING"], "2500.50");
        assert_eq!(json["ACTIVE"], true);
        assert!(json["IMAGE_URL"].is_null());
    }
}
