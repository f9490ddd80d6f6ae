//! Small formatting helpers shared by the renderers.

const KIB: u64 = 1 << 10;
const MIB: u64 = 1 << 20;
const GIB: u64 = 1 << 30;
const TIB: u64 = 1 << 40;
const PIB: u64 = 1 << 50;

const UNITS: [(&str, u64); 5] = [
    ("PiB", PIB),
    ("TiB", TIB),
    ("GiB", GIB),
    ("MiB", MIB),
    ("KiB", KIB),
];

/// Human readable size in binary units, e.g. `11.06 MiB`.
///
/// Zero means the size is unknown and prints as `?? GiB`.
pub fn size_str(size_in_bytes: u64) -> String {
    if size_in_bytes == 0 {
        return "?? GiB".to_owned();
    }
    for (name, unit) in UNITS {
        if size_in_bytes >= unit {
            let value = size_in_bytes as f64 / unit as f64;
            return format!("{value:.2} {name}");
        }
    }
    format!("{size_in_bytes} bytes")
}

/// Integer with `,` thousands separators, e.g. `60,000`.
pub fn format_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
