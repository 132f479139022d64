//! number and root rendering for the display buffer and the history log

use num_complex::Complex64;

/// Renders a number the way a calculator display does: integers without a
/// decimal point, everything else with up to six decimals and trailing zeros
/// trimmed.
pub fn format_value(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    if value.fract() == 0.0 && value.abs() < 1e15 {
        return format!("{}", value as i64);
    }
    let rendered = format!("{:.6}", value);
    let trimmed = rendered.trim_end_matches('0').trim_end_matches('.');
    trimmed.to_string()
}

/// Renders a root; pure-real and pure-imaginary roots print without the
/// redundant half.
pub fn format_root(root: &Complex64) -> String {
    if root.im == 0.0 {
        return format_value(root.re);
    }
    let imaginary = if root.im == 1.0 {
        "i".to_string()
    } else if root.im == -1.0 {
        "-i".to_string()
    } else {
        format!("{}*i", format_value(root.im))
    };
    if root.re == 0.0 {
        imaginary
    } else if root.im < 0.0 {
        format!("{} - {}", format_value(root.re), &imaginary[1..])
    } else {
        format!("{} + {}", format_value(root.re), imaginary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integers_have_no_decimal_point() {
        assert_eq!(format_value(11.0), "11");
        assert_eq!(format_value(-2.0), "-2");
        assert_eq!(format_value(0.0), "0");
    }

    #[test]
    fn test_fractions_are_trimmed() {
        assert_eq!(format_value(0.5), "0.5");
        assert_eq!(format_value(32.808399), "32.808399");
        assert_eq!(format_value(1.0 / 3.0), "0.333333");
    }

    #[test]
    fn test_negative_zero() {
        assert_eq!(format_value(-0.0), "0");
    }

    #[test]
    fn test_real_roots() {
        assert_eq!(format_root(&Complex64::new(-2.0, 0.0)), "-2");
        assert_eq!(format_root(&Complex64::new(1.5, 0.0)), "1.5");
    }

    #[test]
    fn test_imaginary_roots() {
        assert_eq!(format_root(&Complex64::new(0.0, 1.0)), "i");
        assert_eq!(format_root(&Complex64::new(0.0, -1.0)), "-i");
        assert_eq!(format_root(&Complex64::new(0.0, 2.0)), "2*i");
        assert_eq!(format_root(&Complex64::new(1.0, 2.0)), "1 + 2*i");
        assert_eq!(format_root(&Complex64::new(1.0, -2.0)), "1 - 2*i");
    }
}
