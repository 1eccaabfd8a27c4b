#[doc = r#"
    Formats an axis value: whole numbers with thousands separators (`12,345`),
    fractional values with two significant decimals (`0.25`, `1.5`, `0.001`).

    Values below one keep enough decimals to stay distinct, so neighbouring
    decades of a log axis never print the same label.
"#]
pub fn format_number(value: f64) -> String {
    if value.fract() != 0.0 && value.abs() < 1_000.0 {
        let decimals: usize = if value.abs() < 1.0 {
            (1 - value.abs().log10().floor() as i32).clamp(2, 15) as usize
        } else {
            2
        };
        let fixed: String = format!("{:.*}", decimals, value);
        return fixed.trim_end_matches('0').trim_end_matches('.').to_string();
    }

    let rounded: i64 = value.round() as i64;
    let digits: String = rounded.unsigned_abs().to_string();
    let mut result: String = String::new();
    let mut count: i32 = 0;

    for c in digits.chars().rev() {
        if count == 3 {
            result.push(',');
            count = 0;
        }
        result.push(c);
        count += 1;
    }

    if rounded < 0 {
        result.push('-');
    }

    result.chars().rev().collect()
}

#[doc = r#"
    Linear y-axis range with 10% padding above and below the data, never dipping
    below zero. An empty input gets `0..100`.
"#]
pub fn linear_y_range(values: &[f64]) -> (f64, f64) {
    if values.is_empty() {
        return (0.0, 100.0);
    }

    let min_val: f64 = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max_val: f64 = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    let padding: f64 = ((max_val - min_val) * 0.1).max(1.0);

    let y_min: f64 = (min_val - padding).max(0.0);
    let y_max: f64 = max_val + padding;

    (y_min, y_max)
}

#[doc = r#"
    Log y-axis range spanning whole decades around the positive values.

    Non-positive values cannot be placed on a log axis and are ignored. With no
    positive value at all the range is `1..10`.
"#]
pub fn log_y_range(values: &[f64]) -> (f64, f64) {
    let positives: Vec<f64> = values.iter().copied().filter(|v| *v > 0.0).collect();

    if positives.is_empty() {
        return (1.0, 10.0);
    }

    let min_val: f64 = positives.iter().copied().fold(f64::INFINITY, f64::min);
    let max_val: f64 = positives.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    let y_min: f64 = 10f64.powi(min_val.log10().floor() as i32);
    let mut y_max: f64 = 10f64.powi(max_val.log10().ceil() as i32);

    if y_max <= y_min {
        y_max = y_min * 10.0;
    }

    (y_min, y_max)
}

#[doc = "Whether `value` is an exact power of ten (a major tick of a log axis)"]
pub fn is_major_tick(value: f64) -> bool {
    if value <= 0.0 {
        return false;
    }

    let exponent: f64 = value.log10();
    (exponent - exponent.round()).abs() < 1e-9
}

#[doc = "Log-axis label that only names powers of ten and leaves minor ticks blank"]
pub fn major_tick_label(value: f64) -> String {
    if is_major_tick(value) {
        format_number(value)
    } else {
        String::new()
    }
}
