use crate::domain::{Book, BookId};
use async_trait::async_trait;

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// 書籍カタログストアポート
///
/// 書籍レコードの永続化と取得を抽象化する。
/// 1回の `save` / `delete` 呼び出しが原子的であること以外の契約は求めない。
#[async_trait]
pub trait BookStore: Send + Sync {
    /// IDで書籍を取得する
    async fn get(&self, book_id: BookId) -> Result<Option<Book>>;

    /// 書籍を保存する
    ///
    /// 未登録のIDならINSERT、登録済みなら全フィールドを置き換える（upsert）。
    /// 保存後の書籍を返す。
    async fn save(&self, book: Book) -> Result<Book>;

    /// 書籍を削除する
    ///
    /// 削除できた場合は `true`、該当IDが存在しない場合は `false`。
    async fn delete(&self, book_id: BookId) -> Result<bool>;

    /// 全書籍を登録順に取得する
    async fn list(&self) -> Result<Vec<Book>>;

    /// 書籍が存在するか確認する
    async fn exists(&self, book_id: BookId) -> Result<bool>;
}
