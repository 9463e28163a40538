/// Canonicalizes a free-text station query before fuzzy matching.
///
/// Lowercases, collapses whitespace and abbreviates the words the NYC
/// subway uses short forms for ("street" → "st", "avenue"/"ave" → "av",
/// "square" → "sq"). None of the abbreviations is itself rewritten, so
/// applying this twice is the same as applying it once.
pub fn normalize_station_name(name: &str) -> String {
    name.to_lowercase()
        .split_whitespace()
        .map(|word| match word {
            "street" => "st",
            "avenue" | "ave" => "av",
            "square" => "sq",
            other => other,
        })
        .collect::<Vec<_>>()
        .join(" ")
}
