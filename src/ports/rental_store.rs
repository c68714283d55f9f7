use crate::domain::{Rental, RentalId};
use async_trait::async_trait;

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// 貸出記録ストアポート
///
/// 書籍ストアとは独立しており、両者をまたぐトランザクションは提供しない。
#[async_trait]
pub trait RentalStore: Send + Sync {
    /// IDで貸出記録を取得する
    async fn get(&self, rental_id: RentalId) -> Result<Option<Rental>>;

    /// 貸出記録を保存する（upsert）
    async fn save(&self, rental: Rental) -> Result<Rental>;

    /// 貸出記録を削除する
    ///
    /// 該当IDが存在しない場合は `false`。
    async fn delete(&self, rental_id: RentalId) -> Result<bool>;

    /// 全貸出記録を登録順に取得する
    async fn list(&self) -> Result<Vec<Rental>>;
}
