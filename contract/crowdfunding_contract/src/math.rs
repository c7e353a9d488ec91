use crate::storage_types::CrowdfundError;

/// Checked addition of two value amounts.
pub fn add(a: u64, b: u64) -> Result<u64, CrowdfundError> {
    a.checked_add(b).ok_or(CrowdfundError::ArithmeticOverflow)
}

/// Checked subtraction, fails instead of wrapping below zero.
pub fn subtract(a: u64, b: u64) -> Result<u64, CrowdfundError> {
    a.checked_sub(b).ok_or(CrowdfundError::ArithmeticUnderflow)
}

/// Widen a value amount to the token interface's amount type.
pub fn to_token_amount(amount: u64) -> i128 {
    i128::from(amount)
}
