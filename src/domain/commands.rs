use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{AvailabilityStatus, BookId, RentalId};

/// コマンド：書籍を登録する
///
/// `availability_status` 省略時は貸出可能として登録される。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateBook {
    pub title: String,
    pub author: String,
    pub genre: String,
    pub availability_status: Option<AvailabilityStatus>,
}

/// コマンド：書籍情報を更新する
///
/// タイトル・著者・ジャンルは全置換。
/// 貸出状態は指定された場合のみ上書きする。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateBook {
    pub book_id: BookId,
    pub title: String,
    pub author: String,
    pub genre: String,
    pub availability_status: Option<AvailabilityStatus>,
}

/// コマンド：書籍を貸し出す
///
/// 返却日は過去の貸出を記録する場合などに作成時点で指定できる。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateRental {
    pub renter_name: String,
    pub rental_date: NaiveDate,
    pub return_date: Option<NaiveDate>,
    pub book_id: BookId,
}

/// コマンド：貸出記録を部分更新する
///
/// 各フィールドは独立して「指定あり／なし」を持つ。
/// `return_date` は二重の Option で、外側が指定の有無、
/// 内側が値（`None` は明示的な null）を表す。
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UpdateRental {
    pub rental_id: RentalId,
    pub renter_name: Option<String>,
    pub rental_date: Option<NaiveDate>,
    pub return_date: Option<Option<NaiveDate>>,
}

impl UpdateRental {
    /// 返却日が更新対象に含まれているか
    pub fn touches_return_date(&self) -> bool {
        self.return_date.is_some()
    }
}
