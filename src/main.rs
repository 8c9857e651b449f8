use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::{App, HttpServer, cookie::Key, middleware, web};
use tokio::sync::Mutex;

use zruby::config::AppConfig;
use zruby::handlers;
use zruby::handlers::reservation_handlers::ReservationService;
use zruby::reservation::capacity::CapacityTable;
use zruby::reservation::controller::FormController;
use zruby::reservation::transport::SimulatedTransport;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let config = AppConfig::from_env();

    // Session encryption key — load from SESSION_KEY env var so flash banners
    // survive restarts
    let secret_key = match std::env::var("SESSION_KEY") {
        Ok(val) if val.len() >= 64 => {
            log::info!("Using SESSION_KEY from environment");
            Key::from(val.as_bytes())
        }
        Ok(val) => {
            log::warn!(
                "SESSION_KEY too short ({} bytes, need 64+) — generating random key",
                val.len()
            );
            Key::generate()
        }
        Err(_) => {
            log::warn!("No SESSION_KEY set — generating random key");
            Key::generate()
        }
    };

    let service = web::Data::new(ReservationService {
        controller: Mutex::new(FormController::new(CapacityTable::standard())),
        transport: SimulatedTransport::new(config.submit_delay_ms),
    });

    log::info!("Starting server at http://{}", config.bind_addr);

    HttpServer::new(move || {
        let session_mw = SessionMiddleware::builder(
            CookieSessionStore::default(),
            secret_key.clone(),
        )
        .cookie_secure(false)
        .cookie_http_only(true)
        .build();

        App::new()
            .wrap(session_mw)
            .wrap(middleware::Logger::default())
            .app_data(service.clone())
            // Static files
            .service(actix_files::Files::new("/static", "./static"))
            // Pages
            .route("/", web::get().to(handlers::page_handlers::index))
            .route("/galeria", web::get().to(handlers::gallery_handlers::page))
            .route(
                "/rezervacia",
                web::get().to(handlers::reservation_handlers::form::<SimulatedTransport>),
            )
            .route(
                "/rezervacia",
                web::post().to(handlers::reservation_handlers::submit::<SimulatedTransport>),
            )
            // Default 404 handler (must be registered last)
            .default_service(web::to(|| async {
                let html = include_str!("../templates/errors/404.html");
                actix_web::HttpResponse::NotFound()
                    .content_type("text/html; charset=utf-8")
                    .body(html)
            }))
    })
    .bind(config.bind_addr.as_str())?
    .run()
    .await
}
