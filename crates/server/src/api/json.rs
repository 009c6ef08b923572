//! JSON 请求体提取器。
//!
//! 与 `axum::Json` 相同，但解析失败时返回 `{"message": "..."}` 而不是纯文本。

use axum::extract::FromRequest;

use super::error::ApiError;

#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct AppJson<T>(pub T);
