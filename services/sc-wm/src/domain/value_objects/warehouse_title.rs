//! 仓库名称值对象

use serde::{Deserialize, Serialize};
use std::fmt;

/// 名称长度下限
pub const TITLE_MIN_LEN: usize = 3;

/// 名称长度上限
pub const TITLE_MAX_LEN: usize = 50;

/// 仓库名称值对象
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WarehouseTitle(String);

impl WarehouseTitle {
    /// 创建新的仓库名称
    pub fn new(title: impl Into<String>) -> Result<Self, TitleError> {
        let title = title.into();

        Self::validate(&title)?;

        Ok(Self(title))
    }

    /// 验证名称长度
    fn validate(title: &str) -> Result<(), TitleError> {
        if title.len() < TITLE_MIN_LEN {
            return Err(TitleError::TooShort {
                min: TITLE_MIN_LEN,
                actual: title.len(),
            });
        }

        if title.len() > TITLE_MAX_LEN {
            return Err(TitleError::TooLong {
                max: TITLE_MAX_LEN,
                actual: title.len(),
            });
        }

        Ok(())
    }

    /// 获取字符串引用
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// 取出内部字符串
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for WarehouseTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 名称校验错误，携带字段名与边界信息
#[derive(Debug, thiserror::Error)]
pub enum TitleError {
    #[error("title is too short (minimum {min} characters, got {actual})")]
    TooShort { min: usize, actual: usize },

    #[error("title is too long (maximum {max} characters, got {actual})")]
    TooLong { max: usize, actual: usize },
}

impl TitleError {
    /// 出错的字段名
    pub fn field(&self) -> &'static str {
        "title"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_within_bounds() {
        assert!(WarehouseTitle::new("abc").is_ok());
        assert!(WarehouseTitle::new("a".repeat(50)).is_ok());
        assert_eq!(WarehouseTitle::new("Main Depot").unwrap().as_str(), "Main Depot");
    }

    #[test]
    fn test_title_too_short() {
        let err = WarehouseTitle::new("ab").unwrap_err();
        assert!(matches!(err, TitleError::TooShort { min: 3, actual: 2 }));
        assert_eq!(err.field(), "title");
    }

    #[test]
    fn test_title_too_long() {
        let err = WarehouseTitle::new("a".repeat(51)).unwrap_err();
        assert!(matches!(err, TitleError::TooLong { max: 50, actual: 51 }));
    }

    #[test]
    fn test_empty_title_rejected() {
        assert!(WarehouseTitle::new("").is_err());
    }
}
