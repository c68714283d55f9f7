use crate::ports::{BookStore, RentalStore};
use std::sync::Arc;

/// サービスの依存関係
///
/// 振る舞いを持たないデータ構造として定義し、
/// アプリケーション層の各関数に明示的に渡す。
/// カタログ管理と貸出管理の両方が同じ構造を共有する。
#[derive(Clone)]
pub struct ServiceDependencies {
    pub book_store: Arc<dyn BookStore>,
    pub rental_store: Arc<dyn RentalStore>,
}
