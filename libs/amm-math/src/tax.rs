use soroban_fixed_point_math::FixedPoint;

/// Maximum tax rate in basis points (100%)
pub const MAX_TAX_BPS: u32 = 10_000;

/// Tax withheld from `amount` at `tax_bps` basis points (rounds down)
pub fn tax_amount(amount: i128, tax_bps: u32) -> i128 {
    if amount < 0 {
        panic!("Negative amount");
    }
    if tax_bps > MAX_TAX_BPS {
        panic!("Invalid tax rate");
    }
    if amount == 0 || tax_bps == 0 {
        return 0;
    }

    match amount.fixed_mul_floor(tax_bps as i128, MAX_TAX_BPS as i128) {
        Some(tax) => tax,
        None => panic!("Arithmetic overflow"),
    }
}

/// Splits a transfer into (amount delivered, tax withheld)
pub fn split_taxed(amount: i128, tax_bps: u32) -> (i128, i128) {
    let tax = tax_amount(amount, tax_bps);
    (amount - tax, tax)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tax_amount() {
        assert_eq!(tax_amount(1_000_000, 200), 20_000);
        assert_eq!(tax_amount(1_000_000, 0), 0);
        assert_eq!(tax_amount(0, 200), 0);
        assert_eq!(tax_amount(1_000_000, MAX_TAX_BPS), 1_000_000);
    }

    #[test]
    fn test_tax_rounds_down() {
        // 1% of 99 is 0.99
        assert_eq!(tax_amount(99, 100), 0);
    }

    #[test]
    fn test_split_taxed_conserves_amount() {
        let (net, tax) = split_taxed(1_000_000_000_000_000, 200);
        assert_eq!(tax, 20_000_000_000_000);
        assert_eq!(net + tax, 1_000_000_000_000_000);
    }

    #[test]
    #[should_panic(expected = "Invalid tax rate")]
    fn test_tax_rate_above_max() {
        tax_amount(1_000, MAX_TAX_BPS + 1);
    }

    #[test]
    #[should_panic(expected = "Negative amount")]
    fn test_negative_amount() {
        tax_amount(-1, 100);
    }
}
