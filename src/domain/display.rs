// Display derivation helpers shared across sections
use chrono::{DateTime, Utc};

/// Relative-time string the way the dashboard renders timestamps.
pub fn format_time_ago(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(then);
    let mins = elapsed.num_minutes();
    if mins < 1 {
        return "Just now".to_string();
    }
    if mins < 60 {
        return format!("{mins}m ago");
    }
    let hours = elapsed.num_hours();
    if hours < 24 {
        return format!("{hours}h ago");
    }
    format!("{}d ago", elapsed.num_days())
}

pub fn battery_tone(percentage: u8) -> &'static str {
    if percentage > 60 {
        "emerald"
    } else if percentage > 30 {
        "amber"
    } else {
        "red"
    }
}

pub fn battery_text_class(percentage: u8) -> &'static str {
    match battery_tone(percentage) {
        "emerald" => "text-emerald-500",
        "amber" => "text-amber-500",
        _ => "text-red-500",
    }
}

pub fn battery_bar_class(percentage: u8) -> &'static str {
    match battery_tone(percentage) {
        "emerald" => "bg-emerald-500",
        "amber" => "bg-amber-500",
        _ => "bg-red-500",
    }
}

/// Stock bars use wider cutoffs than battery.
pub fn stock_level_class(level: u8) -> &'static str {
    if level > 70 {
        "bg-emerald-500"
    } else if level > 30 {
        "bg-amber-500"
    } else {
        "bg-red-500"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_format_time_ago() {
        let now = Utc::now();
        assert_eq!(format_time_ago(now - Duration::seconds(30), now), "Just now");
        assert_eq!(format_time_ago(now - Duration::minutes(12), now), "12m ago");
        assert_eq!(format_time_ago(now - Duration::hours(3), now), "3h ago");
        assert_eq!(format_time_ago(now - Duration::days(2), now), "2d ago");
    }

    #[test]
    fn test_battery_cutoffs() {
        assert_eq!(battery_tone(61), "emerald");
        assert_eq!(battery_tone(60), "amber");
        assert_eq!(battery_tone(31), "amber");
        assert_eq!(battery_tone(30), "red");
        assert_eq!(battery_text_class(75), "text-emerald-500");
        assert_eq!(battery_bar_class(25), "bg-red-500");
    }

    #[test]
    fn test_stock_cutoffs() {
        assert_eq!(stock_level_class(71), "bg-emerald-500");
        assert_eq!(stock_level_class(70), "bg-amber-500");
        assert_eq!(stock_level_class(30), "bg-red-500");
    }
}
