// tests/metric_bar.rs
//
// Metric bar fill: upstream values are free text, so anything unparsable
// must render as a zero fill rather than an error.

use dairyscan::core::text::leading_number;
use dairyscan::gui::components::metric_bar::fill_fraction;

#[test]
fn empty_value_fills_zero() {
    assert_eq!(fill_fraction("", 8.0), 0.0);
    assert_eq!(fill_fraction("   ", 8.0), 0.0);
}

#[test]
fn non_numeric_value_fills_zero() {
    assert_eq!(fill_fraction("N/A", 8.0), 0.0);
    assert_eq!(fill_fraction("pending", 8.0), 0.0);
}

#[test]
fn percentage_text_scales_to_fraction() {
    let frac = fill_fraction("6.2%", 8.0);
    assert!((frac - 6.2 / 8.0).abs() < 1e-6);
    // whitespace around the number is fine
    assert!(fill_fraction(" 4.0 % ", 8.0) > 0.0);
}

#[test]
fn values_above_scale_clamp_to_full() {
    assert_eq!(fill_fraction("12.5%", 8.0), 1.0);
}

#[test]
fn degenerate_scale_fills_zero() {
    assert_eq!(fill_fraction("6.2%", 0.0), 0.0);
    assert_eq!(fill_fraction("6.2%", -1.0), 0.0);
}

#[test]
fn leading_number_reads_display_strings() {
    assert_eq!(leading_number("6.2%"), Some(6.2));
    assert_eq!(leading_number(" 8.8 "), Some(8.8));
    // decimal comma: the integer part is close enough for a cosmetic bar
    assert_eq!(leading_number("8,8"), Some(8.0));
    assert_eq!(leading_number("PASS"), None);
    assert_eq!(leading_number(""), None);
}
