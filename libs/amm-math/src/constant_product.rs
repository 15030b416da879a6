use soroban_fixed_point_math::FixedPoint;
use soroban_sdk::{Env, I256};

/// Pool fee numerator: 0.3% is kept by the pool on every input
pub const FEE_NUMERATOR: i128 = 997;

/// Pool fee denominator
pub const FEE_DENOMINATOR: i128 = 1000;

/// Output amount for an exact input against `x * y = k` reserves (rounds down)
///
/// # Arguments
/// * `amount_in` - Amount of the input asset actually received by the pool
/// * `reserve_in` - Pool reserve of the input asset before the swap
/// * `reserve_out` - Pool reserve of the output asset before the swap
pub fn get_amount_out(env: &Env, amount_in: i128, reserve_in: i128, reserve_out: i128) -> i128 {
    if amount_in <= 0 {
        panic!("Insufficient input amount");
    }
    if reserve_in <= 0 || reserve_out <= 0 {
        panic!("Insufficient liquidity");
    }

    let amount_in_with_fee = checked(amount_in.checked_mul(FEE_NUMERATOR));
    let denominator = checked(
        reserve_in
            .checked_mul(FEE_DENOMINATOR)
            .and_then(|scaled| scaled.checked_add(amount_in_with_fee)),
    );

    mul_div_floor(env, amount_in_with_fee, reserve_out, denominator)
}

/// floor(x * y / z) for non-negative operands, widened to I256 when the
/// i128 product overflows
fn mul_div_floor(env: &Env, x: i128, y: i128, z: i128) -> i128 {
    if let Some(result) = x.fixed_mul_floor(y, z) {
        return result;
    }

    let wide = I256::from_i128(env, x)
        .mul(&I256::from_i128(env, y))
        .div(&I256::from_i128(env, z));
    checked(wide.to_i128())
}

fn checked(value: Option<i128>) -> i128 {
    match value {
        Some(v) => v,
        None => panic!("Arithmetic overflow"),
    }
}
