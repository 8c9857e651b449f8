use actix_session::Session;
use actix_web::{HttpResponse, web};
use tokio::sync::Mutex;

use crate::errors::{AppError, render};
use crate::notify::{self, Flash};
use crate::reservation::controller::{FormController, SubmitRejection};
use crate::reservation::dates;
use crate::reservation::form::ReservationForm;
use crate::reservation::transport::{SimulatedTransport, SubmissionTransport};
use crate::templates_structs::{FieldErrors, PageContext, ReservationTemplate};

/// Shared reservation state. One controller behind a mutex guards the single
/// in-flight submission for the whole site; holding the lock across the
/// transport call serializes submissions at the HTTP layer too. Generic over
/// the backend so a real relay slots in without touching the handlers.
pub struct ReservationService<T: SubmissionTransport = SimulatedTransport> {
    pub controller: Mutex<FormController>,
    pub transport: T,
}

fn reservation_page(
    ctx: PageContext,
    controller: &FormController,
    form: ReservationForm,
    errors: FieldErrors,
) -> ReservationTemplate {
    let today = dates::today();
    let min_checkin = dates::format(dates::checkin_min(today));
    let min_checkout = dates::format(dates::checkout_min(&form.checkin, today));
    ReservationTemplate {
        ctx,
        accommodations: controller.capacities().entries().to_vec(),
        min_checkin,
        min_checkout,
        submit_label: controller.submit_label().to_string(),
        can_submit: controller.can_submit(),
        form,
        errors,
    }
}

pub async fn form<T: SubmissionTransport + 'static>(
    service: web::Data<ReservationService<T>>,
    session: Session,
) -> Result<HttpResponse, AppError> {
    let controller = service.controller.lock().await;
    let ctx = PageContext::build(&session, "/rezervacia");
    render(reservation_page(
        ctx,
        &controller,
        ReservationForm::default(),
        FieldErrors::default(),
    ))
}

pub async fn submit<T: SubmissionTransport + 'static>(
    service: web::Data<ReservationService<T>>,
    session: Session,
    form: web::Form<ReservationForm>,
) -> Result<HttpResponse, AppError> {
    let mut form = form.into_inner();
    // One-way propagation before validation: a checkout at or before the
    // chosen checkin is cleared and re-entered under the raised lower bound.
    form.checkout = dates::propagate_checkin(&form.checkin, &form.checkout);
    let today = dates::today();

    let mut controller = service.controller.lock().await;
    match controller.submit(&form, today, &service.transport).await {
        Err(SubmitRejection::InFlight) => {
            set_flash(&session, Flash::error("Rezervácia sa už odosiela."))?;
            Ok(redirect("/rezervacia"))
        }
        Err(SubmitRejection::Invalid(errors)) => {
            let ctx = PageContext::build(&session, "/rezervacia");
            render(reservation_page(
                ctx,
                &controller,
                form,
                FieldErrors::from_errors(&errors),
            ))
        }
        Ok(outcome) if outcome.succeeded => {
            // PRG: the redirect renders a fresh, empty form.
            set_flash(&session, Flash::success(outcome.message))?;
            Ok(redirect("/rezervacia"))
        }
        Ok(outcome) => {
            // Transport failure: keep the visitor's input, show the banner.
            let mut ctx = PageContext::build(&session, "/rezervacia");
            ctx.flash = Some(Flash::error(outcome.message));
            render(reservation_page(
                ctx,
                &controller,
                form,
                FieldErrors::default(),
            ))
        }
    }
}

fn set_flash(session: &Session, flash: Flash) -> Result<(), AppError> {
    notify::set_flash(session, &flash).map_err(|e| AppError::Session(e.to_string()))
}

fn redirect(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header(("Location", location))
        .finish()
}
