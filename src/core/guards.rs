//! Runtime type guards.
//!
//! The dynamically typed value is [`serde_json::Value`]. Absence is either
//! `Value::Null` or `Option::None`; both are covered by the [`Nil`] trait.

use crate::domain::model::ApiResponse;
use serde_json::Value;

/// A value that may be the absence sentinel.
pub trait Nil {
    fn is_nil(&self) -> bool;
}

impl<T> Nil for Option<T> {
    fn is_nil(&self) -> bool {
        self.is_none()
    }
}

impl Nil for Value {
    fn is_nil(&self) -> bool {
        self.is_null()
    }
}

impl<T: Nil + ?Sized> Nil for &T {
    fn is_nil(&self) -> bool {
        (**self).is_nil()
    }
}

pub fn is_nil<T: Nil + ?Sized>(value: &T) -> bool {
    value.is_nil()
}

pub fn is_not_nil<T: Nil + ?Sized>(value: &T) -> bool {
    !value.is_nil()
}

pub fn is_string(value: &Value) -> bool {
    value.is_string()
}

/// `Value` cannot hold NaN, so only the raw float check can reject it.
pub fn is_number(value: &Value) -> bool {
    value.as_f64().is_some_and(is_number_f64)
}

pub fn is_number_f64(value: f64) -> bool {
    !value.is_nan()
}

/// 通過 `is_string` 時回傳收窄後的值
pub fn as_string(value: &Value) -> Option<&str> {
    value.as_str()
}

pub fn as_number(value: &Value) -> Option<f64> {
    value.as_f64().filter(|n| is_number_f64(*n))
}

pub fn is_success_response<T>(response: &ApiResponse<T>) -> bool {
    response.code == 200
}
