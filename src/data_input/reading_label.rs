// src/data_input/reading_label.rs

use std::path::Path;

/// Estimator name stored in fusion captures, shown under its filter's name.
const FUSION_TAG: &str = "fusion";
const FUSION_LABEL: &str = "complementary";

/// Derives a legend label from a capture file name.
///
/// `reading_acc.csv` -> `Acc`, `reading_gyr.csv` -> `Gyr`,
/// `reading_fusion.csv` -> `Complementary`. A stem without `_` is used whole,
/// and the tag stops at its first `.` (`reading_acc.v2.csv` -> `Acc`).
pub fn reading_label(path: &Path) -> String {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    let tag = stem.split('_').nth(1).unwrap_or(stem.as_str());
    // Anything after a dot is a version or variant suffix.
    let tag = tag.split('.').next().unwrap_or(tag);
    let tag = if tag == FUSION_TAG { FUSION_LABEL } else { tag };
    capitalize(tag)
}

/// Upper-cases the first character and lower-cases the rest.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}


// src/data_input/reading_label.rs
