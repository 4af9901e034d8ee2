use std::path::Path;

use actix_cors::Cors;
use actix_files::Files;
use actix_web::{App, HttpServer, middleware::NormalizePath, web};
use anyhow::Context;
use tracing::{error, info, warn};
use tracing_actix_web::TracingLogger;

use crowdfund::configuration::settings::Settings;
use crowdfund::database::connection::{check_connection, create_lazy_pool, run_migrations};
use crowdfund::routes;
use crowdfund::utils::logging::initialize_tracing;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::load().context("Failed to load configuration.")?;

    initialize_tracing(&settings.logging.level).context("Failed to initialize tracing.")?;

    let pool = create_lazy_pool(&settings.database);

    // Requests answer 500 until the database becomes reachable.
    match check_connection(&pool, &settings.database).await {
        Ok(()) => {
            if settings.database.run_migrations {
                run_migrations(&pool)
                    .await
                    .context("Failed to run database migrations.")?;
            }
        }
        Err(e) => {
            error!("Error connecting to database {}: {}", settings.database.name, e);
            if settings.database.run_migrations {
                warn!("Skipping database migrations.");
            }
        }
    }

    let pool = web::Data::new(pool);
    let search_settings = web::Data::new(settings.search.clone());

    let static_directory = settings.static_files.directory.clone();
    let serve_static_files = Path::new(&static_directory).is_dir();
    if !serve_static_files {
        warn!(
            directory = static_directory.as_str(),
            "Static file directory not found, serving the API only."
        );
    }

    let server = HttpServer::new(move || {
        let mut app = App::new()
            .wrap(NormalizePath::trim())
            .wrap(Cors::permissive())
            .wrap(TracingLogger::default())
            .app_data(pool.clone())
            .app_data(search_settings.clone())
            .configure(routes::api::scoped_config);

        if serve_static_files {
            app = app.service(Files::new("/", &static_directory).index_file("index.html"));
        }

        app
    })
    .bind((settings.http.host.as_str(), settings.http.port))
    .with_context(|| {
        format!(
            "Failed to bind HTTP server to {}:{}.",
            settings.http.host, settings.http.port
        )
    })?;

    info!(
        host = settings.http.host.as_str(),
        port = settings.http.port,
        "Server running."
    );

    server
        .run()
        .await
        .context("Errored while running the HTTP server.")?;

    Ok(())
}
