use crate::domain::{Book, BookId};
use crate::ports::book_store::{BookStore as BookStoreTrait, Result};
use async_trait::async_trait;
use std::sync::Mutex;

/// BookStoreのインメモリ実装
///
/// 登録順を保持するため、`list`は登録順で並ぶデータベースと同じ結果を返す。
/// 各レコードへのアクセスはMutexで直列化される。
pub struct BookStore {
    books: Mutex<Vec<Book>>,
}

impl BookStore {
    pub fn new() -> Self {
        Self {
            books: Mutex::new(Vec::new()),
        }
    }
}

impl Default for BookStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BookStoreTrait for BookStore {
    async fn get(&self, book_id: BookId) -> Result<Option<Book>> {
        let books = self.books.lock().map_err(|e| e.to_string())?;
        Ok(books.iter().find(|b| b.id == book_id).cloned())
    }

    /// 同じIDがあればその位置で置き換え、なければ末尾に追加
    async fn save(&self, book: Book) -> Result<Book> {
        let mut books = self.books.lock().map_err(|e| e.to_string())?;
        match books.iter_mut().find(|b| b.id == book.id) {
            Some(existing) => *existing = book.clone(),
            None => books.push(book.clone()),
        }
        Ok(book)
    }

    async fn delete(&self, book_id: BookId) -> Result<bool> {
        let mut books = self.books.lock().map_err(|e| e.to_string())?;
        let before = books.len();
        books.retain(|b| b.id != book_id);
        Ok(books.len() < before)
    }

    async fn list(&self) -> Result<Vec<Book>> {
        let books = self.books.lock().map_err(|e| e.to_string())?;
        Ok(books.clone())
    }

    async fn exists(&self, book_id: BookId) -> Result<bool> {
        let books = self.books.lock().map_err(|e| e.to_string())?;
        Ok(books.iter().any(|b| b.id == book_id))
    }
}
