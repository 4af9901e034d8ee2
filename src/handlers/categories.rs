use crate::{database::connection::DbPool, models::category::Category, utils::helpers::ErrorResponse};
use actix_web::{HttpResponse, Result, web};
use tracing::{error, info};

pub async fn index(pool: web::Data<DbPool>) -> Result<HttpResponse> {
    info!("Getting all categories");

    match Category::find_all(&pool).await {
        Ok(categories) => Ok(HttpResponse::Ok().json(categories)),
        Err(e) => {
            error!("Error fetching categories: {}", e);
            Ok(ErrorResponse::internal("Error fetching categories"))
        }
    }
}
