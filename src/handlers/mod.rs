pub mod gallery_handlers;
pub mod page_handlers;
pub mod reservation_handlers;
