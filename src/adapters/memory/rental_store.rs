use crate::domain::{Rental, RentalId};
use crate::ports::rental_store::{RentalStore as RentalStoreTrait, Result};
use async_trait::async_trait;
use std::sync::Mutex;

/// RentalStoreのインメモリ実装
///
/// 書籍ストアとの参照整合性は検査しない。
pub struct RentalStore {
    rentals: Mutex<Vec<Rental>>,
}

impl RentalStore {
    pub fn new() -> Self {
        Self {
            rentals: Mutex::new(Vec::new()),
        }
    }
}

impl Default for RentalStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RentalStoreTrait for RentalStore {
    async fn get(&self, rental_id: RentalId) -> Result<Option<Rental>> {
        let rentals = self.rentals.lock().map_err(|e| e.to_string())?;
        Ok(rentals.iter().find(|r| r.id == rental_id).cloned())
    }

    async fn save(&self, rental: Rental) -> Result<Rental> {
        let mut rentals = self.rentals.lock().map_err(|e| e.to_string())?;
        match rentals.iter_mut().find(|r| r.id == rental.id) {
            Some(existing) => *existing = rental.clone(),
            None => rentals.push(rental.clone()),
        }
        Ok(rental)
    }

    async fn delete(&self, rental_id: RentalId) -> Result<bool> {
        let mut rentals = self.rentals.lock().map_err(|e| e.to_string())?;
        let before = rentals.len();
        rentals.retain(|r| r.id != rental_id);
        Ok(rentals.len() < before)
    }

    async fn list(&self) -> Result<Vec<Rental>> {
        let rentals = self.rentals.lock().map_err(|e| e.to_string())?;
        Ok(rentals.clone())
    }
}
