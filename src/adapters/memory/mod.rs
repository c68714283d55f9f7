pub mod book_store;
pub mod rental_store;

pub use book_store::BookStore as InMemoryBookStore;
pub use rental_store::RentalStore as InMemoryRentalStore;
