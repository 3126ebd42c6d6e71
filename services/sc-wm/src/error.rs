//! 服务错误定义

use invena_errors::AppError;

use crate::domain::value_objects::TitleError;

impl From<TitleError> for AppError {
    fn from(error: TitleError) -> Self {
        AppError::validation(error.to_string())
    }
}
