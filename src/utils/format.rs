//! Formatting utilities for status values (dates, money, temperatures).

use crate::models::{GameDate, Temperature, TemperatureScale, TimeOfDay};

/// Format a game date as `[2020/1/1 Monday]`.
pub fn format_date(date: &GameDate) -> String {
    format!("[{}/{}/{} {}]", date.year, date.month, date.day, date.dow)
}

/// Format a time of day as `09:23`.
pub fn format_time(time: &TimeOfDay) -> String {
    format!("{:02}:{:02}", time.hours, time.minutes)
}

/// Format a whole-dollar amount with thousands separators (e.g., "$1,234", "-$50").
pub fn format_money(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    if amount < 0 {
        format!("-${}", grouped)
    } else {
        format!("${}", grouped)
    }
}

/// Format a temperature (e.g., "-10°C").
pub fn format_temperature(temperature: &Temperature) -> String {
    let unit = match temperature.scale {
        TemperatureScale::Celsius => 'C',
        TemperatureScale::Fahrenheit => 'F',
    };
    format!("{}°{}", temperature.degrees, unit)
}

/// Format a percentage without trailing zeros (e.g., "7%", "2.5%").
pub fn format_percent(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}%", value as i64)
    } else {
        format!("{:.1}%", value)
    }
}

/// Capitalize the first character (e.g., "hopeful" → "Hopeful").
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
