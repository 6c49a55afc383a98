// DietView - core/nutrition.rs
//
// Macro text parsing. The plan encodes macros as free text such as
// "25g Proteína"; the sorter needs the numeric gram value out of that.

use regex::Regex;
use std::sync::OnceLock;

/// Matches a decimal number immediately followed by the gram unit marker.
/// "25g Proteína" -> 25, "2.5g" -> 2.5. "25 g" does not match (the unit
/// must follow the number directly).
fn grams_pattern() -> &'static Regex {
    static GRAMS: OnceLock<Regex> = OnceLock::new();
    GRAMS.get_or_init(|| {
        Regex::new(r"([0-9]+(?:\.[0-9]+)?)g").expect("grams_pattern: invalid regex")
    })
}

/// Extract the gram quantity from a macro text.
///
/// Returns the first `<number>g` match in the text. Missing, empty, or
/// unparsable input yields 0.0 — the documented fallback, so items without
/// a readable protein value sort below everything else.
pub fn protein_grams(text: Option<&str>) -> f64 {
    let Some(text) = text else {
        return 0.0;
    };
    grams_pattern()
        .captures(text)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .unwrap_or(0.0)
}
