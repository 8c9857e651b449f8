use actix_session::Session;
use actix_web::{HttpResponse, web};
use serde::Deserialize;

use crate::errors::{AppError, render};
use crate::gallery::GalleryController;
use crate::templates_structs::{GalleryItemView, GalleryTemplate, LightboxView, PageContext};

#[derive(Deserialize)]
pub struct GalleryQuery {
    pub filter: Option<String>,
    /// Index into the full photo list; opens the lightbox when in range.
    pub photo: Option<usize>,
}

pub async fn page(
    session: Session,
    query: web::Query<GalleryQuery>,
) -> Result<HttpResponse, AppError> {
    let mut gallery = GalleryController::standard();
    let filter = query
        .filter
        .clone()
        .unwrap_or_else(|| "all".to_string());

    let images: Vec<GalleryItemView> = gallery
        .images()
        .iter()
        .enumerate()
        .filter(|(_, img)| filter == "all" || img.category == filter)
        .map(|(index, img)| GalleryItemView {
            index,
            src: img.src.clone(),
            alt: img.alt.clone(),
            category: img.category.clone(),
        })
        .collect();
    let categories = gallery
        .categories()
        .into_iter()
        .map(str::to_string)
        .collect();

    let lightbox = match query.photo {
        Some(index) if index < gallery.images().len() => {
            gallery.open(index);
            gallery.current_image().map(|img| LightboxView {
                src: img.src.clone(),
                alt: img.alt.clone(),
                counter: gallery.counter(),
                prev: gallery.prev_index(),
                next: gallery.next_index(),
            })
        }
        _ => None,
    };

    render(GalleryTemplate {
        ctx: PageContext::build(&session, "/galeria"),
        filter,
        categories,
        images,
        lightbox,
    })
}
