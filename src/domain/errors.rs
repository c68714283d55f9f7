/// 貸出作成のエラー
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RentBookError {
    /// 書籍が既に貸出中
    BookNotAvailable,
}
