use actix_session::Session;
use actix_web::HttpResponse;

use crate::errors::{AppError, render};
use crate::reservation::capacity::CapacityTable;
use crate::templates_structs::{IndexTemplate, PageContext};

pub async fn index(session: Session) -> Result<HttpResponse, AppError> {
    let ctx = PageContext::build(&session, "/");
    let accommodations = CapacityTable::standard().entries().to_vec();
    render(IndexTemplate {
        ctx,
        accommodations,
    })
}
