use crate::database::connection::DbPool;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CategoryError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[sqlx(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct Category {
    pub category_id: i32,
    pub name: String,
}

impl Category {
    pub async fn find_all(pool: &DbPool) -> Result<Vec<Self>, CategoryError> {
        let categories = sqlx::query_as::<_, Category>(
            "SELECT CATEGORY_ID, NAME FROM CATEGORY ORDER BY CATEGORY_ID",
        )
        .fetch_all(pool)
        .await?;

        Ok(categories)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_column_names() {
        let category = Category {
            category_id: 3,
            name: "Medical".to_string(),
        };

        assert_eq!(
            serde_json::to_string(&category).unwrap(),
            r#"{"CATEGORY_ID":3,"NAME":"Medical"}"#
        );
    }
}
