//! HTTP adapter tests — page rendering, the reservation PRG flow, and the
//! checkin → checkout propagation as seen through the form endpoint.

use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::{App, cookie::Key, test, web};
use chrono::{Duration, Local};
use tokio::sync::Mutex;

use zruby::handlers;
use zruby::handlers::reservation_handlers::ReservationService;
use zruby::reservation::capacity::CapacityTable;
use zruby::reservation::controller::FormController;
use zruby::reservation::form::ReservationForm;
use zruby::reservation::transport::{
    FieldMap, SimulatedTransport, SubmissionTransport, TransportError,
};

/// Backend that always rejects, for exercising the failure re-render.
struct FailingTransport;

impl SubmissionTransport for FailingTransport {
    async fn send(&self, _fields: &FieldMap) -> Result<(), TransportError> {
        Err(TransportError("relay unavailable".to_string()))
    }
}

macro_rules! test_app {
    () => {
        test_app!(SimulatedTransport, SimulatedTransport::new(0))
    };
    ($transport_ty:ty, $transport:expr) => {{
        let service = web::Data::new(ReservationService {
            controller: Mutex::new(FormController::new(CapacityTable::standard())),
            transport: $transport,
        });
        test::init_service(
            App::new()
                .wrap(
                    SessionMiddleware::builder(
                        CookieSessionStore::default(),
                        Key::from(&[7u8; 64]),
                    )
                    .cookie_secure(false)
                    .build(),
                )
                .app_data(service)
                .route("/", web::get().to(handlers::page_handlers::index))
                .route("/galeria", web::get().to(handlers::gallery_handlers::page))
                .route(
                    "/rezervacia",
                    web::get().to(handlers::reservation_handlers::form::<$transport_ty>),
                )
                .route(
                    "/rezervacia",
                    web::post().to(handlers::reservation_handlers::submit::<$transport_ty>),
                ),
        )
        .await
    }};
}

fn date_in(days: i64) -> String {
    (Local::now().date_naive() + Duration::days(days))
        .format("%Y-%m-%d")
        .to_string()
}

fn valid_form() -> ReservationForm {
    ReservationForm {
        name: "Jana Nováková".to_string(),
        email: "jana@example.com".to_string(),
        phone: "0901234567".to_string(),
        checkin: date_in(7),
        checkout: date_in(10),
        accommodation: "chata1".to_string(),
        persons: "4".to_string(),
        message: String::new(),
    }
}

async fn body_text<B: actix_web::body::MessageBody>(
    resp: actix_web::dev::ServiceResponse<B>,
) -> String {
    let bytes = test::read_body(resp).await;
    String::from_utf8(bytes.to_vec()).expect("utf-8 body")
}

#[actix_rt::test]
async fn test_pages_render() {
    let app = test_app!();

    for (uri, needle) in [
        ("/", "Zruby Oščadnica"),
        ("/galeria", "gallery-grid"),
        ("/rezervacia", "Odoslať rezerváciu"),
    ] {
        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success(), "GET {uri}");
        let text = body_text(resp).await;
        assert!(text.contains(needle), "GET {uri} missing {needle:?}");
    }
}

#[actix_rt::test]
async fn test_empty_form_rerenders_with_required_errors() {
    let app = test_app!();

    let body = serde_urlencoded::to_string(ReservationForm::default()).expect("encode form");
    let req = test::TestRequest::post()
        .uri("/rezervacia")
        .insert_header(("Content-Type", "application/x-www-form-urlencoded"))
        .set_payload(body)
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert!(resp.status().is_success());
    let text = body_text(resp).await;
    assert!(text.contains("Toto pole je povinné."));
    assert!(text.contains("form-group error"));
}

#[actix_rt::test]
async fn test_valid_form_redirects_after_submit() {
    let app = test_app!();

    let req = test::TestRequest::post()
        .uri("/rezervacia")
        .set_form(valid_form())
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), actix_web::http::StatusCode::SEE_OTHER);
    let location = resp
        .headers()
        .get("Location")
        .and_then(|v| v.to_str().ok());
    assert_eq!(location, Some("/rezervacia"));
}

#[actix_rt::test]
async fn test_checkin_after_checkout_clears_checkout_and_raises_bound() {
    let app = test_app!();

    let mut form = valid_form();
    form.checkin = date_in(10);
    form.checkout = date_in(7);
    let req = test::TestRequest::post()
        .uri("/rezervacia")
        .set_form(form)
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert!(resp.status().is_success());
    let text = body_text(resp).await;
    // the stale checkout was dropped, so its required rule fires
    assert!(text.contains("Toto pole je povinné."));
    // and the lower bound moved to checkin + 1
    let raised_min = format!("min=\"{}\"", date_in(11));
    assert!(text.contains(&raised_min));
}

#[actix_rt::test]
async fn test_transport_failure_keeps_input_and_shows_error_banner() {
    let app = test_app!(FailingTransport, FailingTransport);

    let form = valid_form();
    let req = test::TestRequest::post()
        .uri("/rezervacia")
        .set_form(form.clone())
        .to_request();
    let resp = test::call_service(&app, req).await;

    // no redirect: the form re-renders so the visitor loses nothing
    assert!(resp.status().is_success());
    let text = body_text(resp).await;
    assert!(text.contains("Niečo sa pokazilo. Skúste to prosím znova."));
    assert!(text.contains("success-message show error"));
    assert!(text.contains(&form.email));
    assert!(text.contains(&form.checkin));
    assert!(text.contains("Odoslať rezerváciu"));
}

#[actix_rt::test]
async fn test_success_banner_carries_dismiss_timeout() {
    let app = test_app!();

    let req = test::TestRequest::post()
        .uri("/rezervacia")
        .set_form(valid_form())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), actix_web::http::StatusCode::SEE_OTHER);

    // follow the redirect with the session cookie to render the banner
    let cookies: Vec<_> = resp.response().cookies().map(|c| c.into_owned()).collect();
    let mut req = test::TestRequest::get().uri("/rezervacia");
    for cookie in cookies {
        req = req.cookie(cookie);
    }
    let resp = test::call_service(&app, req.to_request()).await;
    assert!(resp.status().is_success());

    let text = body_text(resp).await;
    assert!(text.contains("Vaša rezervácia bola úspešne odoslaná!"));
    assert!(text.contains("data-dismiss-ms=\"5000\""));
    // the dismiss script consumes the attribute
    assert!(text.contains("dataset.dismissMs"));
    assert!(text.contains("classList.remove('show')"));
}

#[actix_rt::test]
async fn test_gallery_lightbox_opens_from_query() {
    let app = test_app!();

    let req = test::TestRequest::get()
        .uri("/galeria?photo=1")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let text = body_text(resp).await;
    assert!(text.contains("lightbox active"));
    assert!(text.contains("2 / 7"));
    assert!(text.contains("photo=0"));
    assert!(text.contains("photo=2"));
}

#[actix_rt::test]
async fn test_gallery_lightbox_wraps_at_the_first_photo() {
    let app = test_app!();

    let req = test::TestRequest::get()
        .uri("/galeria?photo=0")
        .to_request();
    let resp = test::call_service(&app, req).await;
    let text = body_text(resp).await;

    assert!(text.contains("lightbox active"));
    assert!(text.contains("1 / 7"));
    // prev wraps to the last photo
    assert!(text.contains("photo=6"));
}

#[actix_rt::test]
async fn test_gallery_ignores_out_of_range_photo_index() {
    let app = test_app!();

    let req = test::TestRequest::get()
        .uri("/galeria?photo=99")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let text = body_text(resp).await;
    assert!(!text.contains("lightbox active"));
}

#[actix_rt::test]
async fn test_unknown_route_is_not_found() {
    let service = web::Data::new(ReservationService {
        controller: Mutex::new(FormController::new(CapacityTable::standard())),
        transport: SimulatedTransport::new(0),
    });
    let app = test::init_service(
        App::new()
            .app_data(service)
            .default_service(web::to(|| async {
                actix_web::HttpResponse::NotFound().body("Not Found")
            })),
    )
    .await;

    let req = test::TestRequest::get().uri("/pivnica").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), actix_web::http::StatusCode::NOT_FOUND);
}
