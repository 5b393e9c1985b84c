use crate::utils::error::{Result, ShippingError};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Shape {
    #[default]
    Box,
    Cylinder,
}

/// A measure derivable from the three package axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Measure {
    Axis(usize),
    Height,
    Width,
    Length,
    Girth,
    Volume,
    BoxVolume,
}

impl FromStr for Measure {
    type Err = ShippingError;

    fn from_str(s: &str) -> Result<Self> {
        let name = s.trim().to_ascii_lowercase();
        if let Ok(index) = name.parse::<usize>() {
            return Ok(Measure::Axis(index));
        }
        match name.as_str() {
            "x" | "max" | "length" | "long" => Ok(Measure::Length),
            "y" | "mid" | "width" | "wide" => Ok(Measure::Width),
            "z" | "min" | "height" | "depth" | "high" | "deep" => Ok(Measure::Height),
            "girth" | "around" | "circumference" => Ok(Measure::Girth),
            "volume" => Ok(Measure::Volume),
            "box_volume" | "box-volume" => Ok(Measure::BoxVolume),
            _ => Err(ShippingError::invalid_input(
                "measure",
                format!("unknown measure {:?}", s),
            )),
        }
    }
}

impl fmt::Display for Measure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Measure::Axis(index) => write!(f, "axis {}", index),
            Measure::Height => f.write_str("height"),
            Measure::Width => f.write_str("width"),
            Measure::Length => f.write_str("length"),
            Measure::Girth => f.write_str("girth"),
            Measure::Volume => f.write_str("volume"),
            Measure::BoxVolume => f.write_str("box_volume"),
        }
    }
}

/// Computes `measure` over `axes` ordered `[height, width, length]`.
///
/// Returns `None` when an axis the measure needs is missing. Derived measures
/// (girth and volumes) need the first three axes.
pub fn measure(axes: &[f64], shape: Shape, measure: Measure) -> Option<f64> {
    let axis = |index: usize| axes.get(index).copied();
    let first_three = || match axes {
        [a0, a1, a2, ..] => Some((*a0, *a1, *a2)),
        _ => None,
    };

    match measure {
        Measure::Axis(index) => axis(index),
        Measure::Height => axis(0),
        Measure::Width => axis(1),
        Measure::Length => axis(2),
        Measure::BoxVolume => first_three().map(|(a0, a1, a2)| box_volume(a0, a1, a2)),
        Measure::Girth => first_three().map(|(a0, a1, _)| match shape {
            Shape::Box => 2.0 * a0 + 2.0 * a1,
            Shape::Cylinder => PI * (a0 + a1) / 2.0,
        }),
        Measure::Volume => first_three().map(|(a0, a1, a2)| match shape {
            Shape::Box => box_volume(a0, a1, a2),
            Shape::Cylinder => (PI * (a0 + a1) / 4.0).powi(2) * a2,
        }),
    }
}

fn box_volume(a0: f64, a1: f64, a2: f64) -> f64 {
    a0 * a1 * a2
}
