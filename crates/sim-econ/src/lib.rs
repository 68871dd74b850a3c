#![deny(warnings)]

//! Pricing helpers for Silicon Wars.
//!
//! Turns a model's bill of materials and its evaluation scores into price
//! recommendations:
//! - Cost-plus pricing with a fixed margin
//! - A suggested shelf price whose margin grows with the overall score
//! - A price delta against a market reference score

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use thiserror::Error;

/// Margin at overall score 0.
pub const MIN_MARGIN: f32 = 0.10;
/// Margin at overall score 100.
pub const MAX_MARGIN: f32 = 0.60;
/// Largest price move recommended in either direction.
pub const MAX_PRICE_DELTA: f32 = 0.25;

/// Errors produced by pricing helpers.
#[derive(Debug, Error, PartialEq)]
pub enum EconError {
    /// Costs and prices must be non-negative.
    #[error("invalid price or cost value")]
    InvalidPrice,
    /// Scores are on a 0-100 scale.
    #[error("score {0} is above 100")]
    ScoreOutOfRange(u8),
    /// Numeric conversion to decimal failed.
    #[error("non-finite numeric conversion")]
    NonFinite,
}

/// Compute a price as cost plus a margin.
///
/// Example:
/// let cost = Decimal::new(100, 2); // 1.00
/// let margin = Decimal::new(50, 2); // 0.50
/// assert_eq!(cost_plus(cost, margin), Decimal::new(150, 2));
pub fn cost_plus(unit_cost: Decimal, margin: Decimal) -> Decimal {
    unit_cost * (Decimal::ONE + margin)
}

/// Margin earned by a model with the given overall score.
pub fn margin_for_score(overall: u8) -> Result<f32, EconError> {
    if overall > 100 {
        return Err(EconError::ScoreOutOfRange(overall));
    }
    Ok(MIN_MARGIN + (MAX_MARGIN - MIN_MARGIN) * f32::from(overall) / 100.0)
}

/// Suggested shelf price: cost plus a score-dependent margin, rounded to
/// whole currency units.
///
/// Example:
/// let p = suggested_price(Decimal::new(570, 0), 85).unwrap();
/// assert_eq!(p, Decimal::new(869, 0));
pub fn suggested_price(unit_cost: Decimal, overall: u8) -> Result<Decimal, EconError> {
    if unit_cost < Decimal::ZERO {
        return Err(EconError::InvalidPrice);
    }
    let margin = Decimal::from_f32(margin_for_score(overall)?).ok_or(EconError::NonFinite)?;
    Ok(cost_plus(unit_cost, margin).round())
}

/// Recommended relative price change for a model scoring `own` against a
/// market reference scoring `reference`. Positive means raise the price.
///
/// (own - reference) / 200, clamped to +/- MAX_PRICE_DELTA.
pub fn price_delta_frac(own: u8, reference: u8) -> Result<f32, EconError> {
    for s in [own, reference] {
        if s > 100 {
            return Err(EconError::ScoreOutOfRange(s));
        }
    }
    let raw = (f32::from(own) - f32::from(reference)) / 200.0;
    Ok(raw.clamp(-MAX_PRICE_DELTA, MAX_PRICE_DELTA))
}

/// Apply a relative delta to a price, never going below zero.
pub fn apply_delta(price: Decimal, delta_frac: f32) -> Result<Decimal, EconError> {
    if price < Decimal::ZERO {
        return Err(EconError::InvalidPrice);
    }
    if !delta_frac.is_finite() {
        return Err(EconError::NonFinite);
    }
    let f = Decimal::from_f32(1.0 + delta_frac).ok_or(EconError::NonFinite)?;
    Ok((price * f).max(Decimal::ZERO))
}
