//! Utilities for date and time formatting
//!
//! Provides consistent date/time formatting across the application

use chrono::{DateTime, Utc};

/// Format a UTC instant to DD.MM.YYYY HH:MM:SS
/// Example: 2024-03-15T14:02:26Z -> "15.03.2024 14:02:26"
pub fn format_datetime(value: DateTime<Utc>) -> String {
    value.format("%d.%m.%Y %H:%M:%S").to_string()
}

/// Format a UTC instant to DD.MM.YYYY
pub fn format_date(value: DateTime<Utc>) -> String {
    value.format("%d.%m.%Y").to_string()
}
