use crate::{amount::ParsedAmount, numerals};

/// The two cheque lines rendered from one amount. Each rendering is derived
/// independently; the pair has no identity beyond its value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChequeWording {
    pub chinese: String,
    pub english: String,
}

pub fn compose(amount: ParsedAmount) -> ChequeWording {
    ChequeWording {
        chinese: numerals::chinese::amount_wording(amount.whole, amount.subunit),
        english: numerals::english::amount_wording(amount.whole, amount.subunit),
    }
}

impl ChequeWording {
    /// The line printed on the Chinese side of the cheque.
    pub fn chinese_line(&self) -> String {
        format!("中文：港幣{}", self.chinese)
    }

    /// The line printed on the English side of the cheque.
    pub fn english_line(&self) -> String {
        format!("English: Hong Kong Dollars {} only", self.english)
    }
}
