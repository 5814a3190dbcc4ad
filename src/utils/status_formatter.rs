use chrono::{DateTime, Local, Utc};

/// Lifecycle state in lowercase, for display only.
pub fn format_state(state: &str) -> String {
    state.to_lowercase()
}

/// CPU fraction as a percentage with one decimal.
pub fn format_cpu(cpu: f64) -> String {
    format!("{:.1}%", cpu * 100.0)
}

/// Creation time in the local time zone.
pub fn format_since(created_at: Option<DateTime<Utc>>) -> String {
    match created_at {
        Some(ts) if ts.timestamp() > 0 => ts
            .with_timezone(&Local)
            .format("%Y-%m-%d %I:%M:%S %p")
            .to_string(),
        _ => String::new(),
    }
}
