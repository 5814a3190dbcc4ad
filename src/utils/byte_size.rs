/// Format a byte count with the largest fitting binary unit, e.g. `32M`, `1.5G`.
pub fn byte_size(bytes: u64) -> String {
    const UNITS: [(u64, &str); 5] = [
        (1 << 50, "P"),
        (1 << 40, "T"),
        (1 << 30, "G"),
        (1 << 20, "M"),
        (1 << 10, "K"),
    ];

    for (size, unit) in UNITS {
        if bytes >= size {
            let value = format!("{:.1}", bytes as f64 / size as f64);
            let value = value.strip_suffix(".0").unwrap_or(&value);
            return format!("{}{}", value, unit);
        }
    }
    if bytes == 0 {
        "0".to_string()
    } else {
        format!("{}B", bytes)
    }
}
