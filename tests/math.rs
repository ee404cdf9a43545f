use historian_utils::data::math::*;
use historian_utils::DataPoint;

const HOUR: i64 = 3_600_000;

#[test]
fn correlation_with_itself_is_one() {
    let x = [3.0, -1.0, 4.0, 1.0, 5.0, 9.0, 2.0, 6.0];
    let r = pearson_correlation(&x, &x);
    assert!((r - 1.0).abs() < 1e-12, "Got: {}", r);
}

#[test]
fn correlation_of_inverse_series_is_minus_one() {
    let x = [1.0, 2.0, 3.0, 4.0, 5.0];
    let y: Vec<f64> = x.iter().map(|v| 10.0 - 2.0 * v).collect();
    let r = pearson_correlation(&x, &y);
    assert!((r + 1.0).abs() < 1e-12, "Got: {}", r);
}

#[test]
fn correlation_of_constant_series_is_nan() {
    let x = [1.0, 2.0, 3.0];
    let y = [7.0, 7.0, 7.0];
    assert!(pearson_correlation(&x, &y).is_nan());
}

#[test]
fn derivative_has_one_entry_per_pair() {
    let data: Vec<DataPoint> = (0..6).map(|i| DataPoint::new(i * HOUR, (i * i) as f64)).collect();
    let d = generate_derivative(&data);
    assert_eq!(d.len(), data.len() - 1);
    assert_eq!(d[0].start_time, 0);
    assert_eq!(d[0].end_time, HOUR);
    assert!((d[2].value - 5.0).abs() < 1e-12, "Got: {}", d[2].value);
}

#[test]
fn derivative_is_per_hour() {
    // battery level drops 10 over 30 minutes -> -20 per hour
    let data = [DataPoint::new(0, 100.0), DataPoint::new(HOUR / 2, 90.0)];
    let d = generate_derivative(&data);
    assert!((d[0].value + 20.0).abs() < 1e-9, "Got: {}", d[0].value);
}

#[test]
fn derivative_of_zero_dx_is_zero() {
    let data = [DataPoint::new(1_000, 1.0), DataPoint::new(1_000, 5.0)];
    let d = generate_derivative(&data);
    assert_eq!(d[0].value, 0.0);
}

#[test]
fn derivative_of_short_input_is_empty() {
    assert!(generate_derivative(&[]).is_empty());
    assert!(generate_derivative(&[DataPoint::new(0, 1.0)]).is_empty());
}
