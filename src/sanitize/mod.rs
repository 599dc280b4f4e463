//! Parameter Validation
//!
//! Precondition checks for the numeric parameters of weighters, samplers,
//! and weighted draws. Malformed values are rejected, never clamped.

use crate::error::{SamplingError, SamplingResult};

/// Distortion factor must lie strictly inside (0, 1)
pub fn check_distortion_factor(factor: f64) -> SamplingResult<f64> {
    if factor > 0.0 && factor < 1.0 {
        Ok(factor)
    } else {
        Err(SamplingError::InvalidParameter {
            name: "distortion factor",
            value: factor,
        })
    }
}

/// Finite and strictly positive
pub fn check_positive(name: &'static str, value: f64) -> SamplingResult<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(SamplingError::InvalidParameter { name, value })
    }
}

/// Finite and not negative
pub fn check_non_negative(name: &'static str, value: f64) -> SamplingResult<f64> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(SamplingError::InvalidParameter { name, value })
    }
}

/// 检查抽样权重: 允许 +Inf, 拒绝负数和 NaN
pub fn check_draw_weight(weight: f64) -> SamplingResult<f64> {
    if weight.is_nan() || weight < 0.0 {
        Err(SamplingError::InvalidWeight(weight))
    } else {
        Ok(weight)
    }
}
