mod availability;
mod errors;
mod rental_service;

pub use errors::{RentalApplicationError, Result};
pub use rental_service::{
    RentalView, create_rental, delete_rental, get_rental, list_rentals, update_rental,
};
