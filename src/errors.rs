use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChequeError {
    #[error("invalid amount {0:?}: expected a non-negative decimal number")]
    InvalidFormat(String),
    #[error("invalid amount {0:?}: at most two digits may follow the decimal point")]
    PrecisionExceeded(String),
    #[error("invalid amount {0:?}: amount must not be negative")]
    NegativeAmount(String),
    #[error("amount {0:?} is beyond the largest value a cheque can spell out")]
    RangeExceeded(String),
}

pub type Result<T> = std::result::Result<T, ChequeError>;
