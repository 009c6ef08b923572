//! 请求字段校验。

use shopdesk_core::domain::{CompanyName, DomainError, PlainPassword, Username};

use super::error::ApiError;

pub const CREDENTIALS_REQUIRED: &str = "Username and password are required";
pub const COMPANY_FIELDS_REQUIRED: &str = "Name and password are required";
pub const COMPANY_ID_REQUIRED: &str = "company_id is required";

/// 缺失或空白的字段统一返回 `missing_message`；超长等其它问题返回具体原因。
pub fn credentials(
    username: Option<String>,
    password: Option<String>,
    missing_message: &str,
) -> Result<(Username, PlainPassword), ApiError> {
    let (Some(username), Some(password)) = (username, password) else {
        return Err(ApiError::bad_request(missing_message));
    };

    let username = Username::new(username).map_err(|err| missing_or(err, missing_message))?;
    let password = PlainPassword::new(password).map_err(|err| missing_or(err, missing_message))?;
    Ok((username, password))
}

pub fn company_registration(
    name: Option<String>,
    password: Option<String>,
) -> Result<(CompanyName, PlainPassword), ApiError> {
    let (Some(name), Some(password)) = (name, password) else {
        return Err(ApiError::bad_request(COMPANY_FIELDS_REQUIRED));
    };

    let name = CompanyName::new(name).map_err(|err| missing_or(err, COMPANY_FIELDS_REQUIRED))?;
    let password =
        PlainPassword::new(password).map_err(|err| missing_or(err, COMPANY_FIELDS_REQUIRED))?;
    Ok((name, password))
}

fn missing_or(err: DomainError, missing_message: &str) -> ApiError {
    match err {
        DomainError::EmptyUsername | DomainError::EmptyCompanyName | DomainError::EmptyPassword => {
            ApiError::bad_request(missing_message)
        }
        other => ApiError::from(other),
    }
}
