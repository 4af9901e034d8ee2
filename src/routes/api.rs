use actix_web::{HttpResponse, error::InternalError, web};

use crate::handlers;
use crate::utils::helpers::ErrorResponse;

fn fundraiser_path_config() -> web::PathConfig {
    // A non-numeric id can never match a row.
    web::PathConfig::default().error_handler(|err, _req| {
        InternalError::from_response(
            err,
            ErrorResponse::not_found(handlers::fundraisers::NOT_FOUND_MESSAGE),
        )
        .into()
    })
}

pub fn scoped_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .service(
                web::resource("/fundraisers")
                    .route(web::get().to(handlers::fundraisers::active))
                    .route(web::head().to(HttpResponse::MethodNotAllowed)),
            )
            .service(
                web::resource("/categories")
                    .route(web::get().to(handlers::categories::index))
                    .route(web::head().to(HttpResponse::MethodNotAllowed)),
            )
            .service(
                web::resource("/search")
                    .route(web::get().to(handlers::fundraisers::search))
                    .route(web::head().to(HttpResponse::MethodNotAllowed)),
            )
            .service(
                web::resource("/fundraiser/{id}")
                    .app_data(fundraiser_path_config())
                    .route(web::get().to(handlers::fundraisers::get_fundraiser)),
            ),
    );
}
