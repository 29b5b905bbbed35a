use thiserror::Error;

// 轉換過程中可能出現的錯誤
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConvertError {
    #[error("Invalid number format.")]
    InvalidNumber(String),
    #[error("Unknown unit. Use 'in' or 'mm'.")]
    UnknownUnit(String),
}
