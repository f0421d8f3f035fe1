//! User-facing strings (zh-TW)

use domain::DomainError;

pub const LOADING: &str = "載入中...";
pub const NO_LOCATIONS_CONFIGURED: &str = "未設定任何地點";
pub const WEATHER_FETCH_FAILED: &str = "無法取得天氣資料";
pub const SEARCH_FAILED: &str = "搜尋失敗，請稍後再試";
pub const NO_MATCHING_LOCATIONS: &str = "找不到符合的地點";
pub const ENTER_DISPLAY_NAME: &str = "請輸入顯示名稱";
pub const INVALID_LATITUDE: &str = "請輸入有效的緯度 (-90 到 90)";
pub const INVALID_LONGITUDE: &str = "請輸入有效的經度 (-180 到 180)";
pub const ADD_LOCATION_FIRST: &str = "請先新增地點";
pub const COPY_FAILED: &str = "複製失敗，請手動複製";
pub const URL_COPIED: &str = "已複製！";
pub const NO_LOCATIONS_YET: &str = "尚未新增任何地點";
pub const INVALID_UNIT: &str = "請選擇有效的溫度單位";

/// Alert text for a rejected location form
#[must_use]
pub const fn validation_message(error: &DomainError) -> &'static str {
    match error {
        DomainError::EmptyLocationName => ENTER_DISPLAY_NAME,
        DomainError::InvalidLatitude(_) => INVALID_LATITUDE,
        DomainError::InvalidLongitude(_) => INVALID_LONGITUDE,
        DomainError::InvalidTemperatureUnit(_) => INVALID_UNIT,
    }
}
