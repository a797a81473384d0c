use nalgebra::{UnitQuaternion, Vector3};
use std::f64::consts::PI;

/// Convert degrees to radians
#[inline]
pub fn deg_to_rad(deg: f64) -> f64 {
    deg * PI / 180.0
}

/// Linear interpolation between two values
#[inline]
pub fn lerp(start: f64, end: f64, factor: f64) -> f64 {
    start + (end - start) * factor.clamp(0.0, 1.0)
}

/// Build an attitude from Euler angles in degrees.
///
/// Frame is x right, y up, z forward. Roll (about z) is applied first, then
/// pitch (about x), then yaw (about y): `R = Ry(yaw) * Rx(pitch) * Rz(roll)`.
/// Positive pitch lowers the nose.
pub fn attitude_from_euler_deg(pitch: f64, yaw: f64, roll: f64) -> UnitQuaternion<f64> {
    let yaw_rot = UnitQuaternion::from_axis_angle(&Vector3::y_axis(), deg_to_rad(yaw));
    let pitch_rot = UnitQuaternion::from_axis_angle(&Vector3::x_axis(), deg_to_rad(pitch));
    let roll_rot = UnitQuaternion::from_axis_angle(&Vector3::z_axis(), deg_to_rad(roll));
    yaw_rot * pitch_rot * roll_rot
}

/// Unit forward (+z body) axis of an attitude expressed in world space
#[inline]
pub fn forward_axis(attitude: &UnitQuaternion<f64>) -> Vector3<f64> {
    attitude * Vector3::z()
}

/// Format a value with at least `min_int_digits` integer digits and exactly
/// `decimals` fractional digits, e.g. `(5.5, 2, 2)` gives `"05.50"`.
///
/// Midpoints round away from zero (`0.25` to one place is `"0.3"`). The sign
/// sits in front of the zero padding and is dropped when the rounded value
/// is zero.
pub fn format_fixed(value: f64, min_int_digits: usize, decimals: usize) -> String {
    let scale = 10f64.powi(decimals as i32);
    let rounded = (value.abs() * scale).round() / scale;
    let body = format!("{:.*}", decimals, rounded);
    let int_len = body.find('.').unwrap_or(body.len());
    let padding = "0".repeat(min_int_digits.saturating_sub(int_len));
    let negative = value < 0.0 && body.chars().any(|c| c.is_ascii_digit() && c != '0');
    let sign = if negative { "-" } else { "" };
    format!("{sign}{padding}{body}")
}
