//! English plural detection for alias names.

/// Singular/plural ending pairs, checked in order.
///
/// More specific endings come first so that, for example, `knives` is not
/// read as `knive` + `s`.
const ENDINGS: &[(&str, &str)] = &[
    ("fe", "ves"),
    ("axe", "axes"),
    ("x", "xes"),
    ("ay", "ays"),
    ("ey", "eys"),
    ("iy", "iys"),
    ("oy", "oys"),
    ("uy", "uys"),
    ("kie", "kies"),
    ("zombie", "zombies"),
    ("y", "ies"),
    ("h", "hes"),
    ("man", "men"),
    ("us", "i"),
    ("hoe", "hoes"),
    ("o", "oes"),
    ("", "s"),
];

/// Strips an English plural ending.
///
/// Returns the singular form and whether the input looked plural. The input
/// is compared case-insensitively; the returned singular is lowercase.
#[must_use]
pub fn english_plural(s: &str) -> (String, bool) {
    let lc = s.to_lowercase();
    for (singular, plural) in ENDINGS {
        if let Some(stem) = lc.strip_suffix(plural) {
            if !stem.is_empty() {
                return (format!("{stem}{singular}"), true);
            }
        }
        if !singular.is_empty() && lc.ends_with(singular) {
            return (lc, false);
        }
    }
    (lc, false)
}
