use crate::{
    configuration::settings::SearchSettings,
    database::connection::DbPool,
    models::fundraiser::{Fundraiser, FundraiserError},
    requests::search::SearchRequest,
    utils::helpers::ErrorResponse,
};
use actix_web::{HttpResponse, Result, web};
use tracing::{error, info};

pub const NOT_FOUND_MESSAGE: &str = "Fundraiser not found";

pub async fn active(pool: web::Data<DbPool>) -> Result<HttpResponse> {
    info!("Getting active fundraisers");

    match Fundraiser::find_active(&pool).await {
        Ok(fundraisers) => Ok(HttpResponse::Ok().json(fundraisers)),
        Err(e) => {
            error!("Error fetching fundraisers: {}", e);
            Ok(ErrorResponse::internal("Error fetching fundraisers"))
        }
    }
}

pub async fn search(
    pool: web::Data<DbPool>,
    settings: web::Data<SearchSettings>,
    request: web::Query<SearchRequest>,
) -> Result<HttpResponse> {
    let filter = request.into_inner().into_filter();
    if filter.is_empty() {
        info!("Searching fundraisers without criteria");
    } else {
        info!(
            organizer = filter.organizer.as_deref(),
            city = filter.city.as_deref(),
            category = filter.category.as_deref(),
            "Searching fundraisers"
        );
    }

    match Fundraiser::search(&pool, &filter, settings.category_match).await {
        Ok(fundraisers) => Ok(HttpResponse::Ok().json(fundraisers)),
        Err(e) => {
            error!("Error searching fundraisers: {}", e);
            Ok(ErrorResponse::internal("Error searching fundraisers"))
        }
    }
}

pub async fn get_fundraiser(
    pool: web::Data<DbPool>,
    path: web::Path<i32>,
) -> Result<HttpResponse> {
    let fundraiser_id = path.into_inner();
    info!("Getting fundraiser {}", fundraiser_id);

    match Fundraiser::get_by_id(&pool, fundraiser_id).await {
        Ok(fundraiser) => Ok(HttpResponse::Ok().json(fundraiser)),
        Err(FundraiserError::NotFound { id }) => {
            info!("Fundraiser {} not found", id);
            Ok(ErrorResponse::not_found(NOT_FOUND_MESSAGE))
        }
        Err(FundraiserError::Database(e)) => {
            error!("Error fetching fundraiser {}: {}", fundraiser_id, e);
            Ok(ErrorResponse::internal("Error fetching fundraiser"))
        }
    }
}
