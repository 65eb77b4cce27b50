//! Locale-aware name collation.
//!
//! The name sort orders countries the way a user expects from their
//! browser's `localeCompare`: case-insensitively, with accented letters
//! grouped under their base letter ("Åland Islands" among the As,
//! "Côte d'Ivoire" among the Cs). Full ICU collation is out of scope;
//! a case/diacritic fold covers every name in the dataset.
//!
//! Folding is used for ordering only; filter matching stays exact.

/// Fold a single character to its lowercase, unaccented base form.
///
/// Covers the Latin-1 and Latin Extended-A letters that occur in country
/// names. Characters outside the map pass through lowercased.
fn fold_char(c: char) -> char {
    let c = c.to_ascii_lowercase();
    match c {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' | 'ā' | 'ă' | 'À' | 'Á' | 'Â' | 'Ã' | 'Ä' | 'Å'
        | 'Ā' => 'a',
        'ç' | 'ć' | 'č' | 'Ç' => 'c',
        'è' | 'é' | 'ê' | 'ë' | 'ē' | 'ė' | 'ę' | 'È' | 'É' | 'Ê' | 'Ë' => 'e',
        'ì' | 'í' | 'î' | 'ï' | 'ī' | 'ı' | 'Í' | 'Î' => 'i',
        'ñ' | 'ń' | 'Ñ' => 'n',
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ø' | 'ō' | 'Ó' | 'Ô' | 'Õ' | 'Ö' | 'Ø' => 'o',
        'ß' => 's',
        'ù' | 'ú' | 'û' | 'ü' | 'ū' | 'Ú' | 'Ü' => 'u',
        'ý' | 'ÿ' => 'y',
        'ž' | 'ź' | 'ż' => 'z',
        _ => c,
    }
}

/// Collation key for a display name: lowercase with diacritics folded.
///
/// The key alone is not injective ("São" and "Sao" collide), so callers
/// compare `(collation_key(name), name)` to keep the order total and
/// deterministic.
pub fn collation_key(name: &str) -> String {
    name.chars().map(fold_char).collect()
}

/// Compare two display names locale-aware, falling back to the raw strings
/// when the folded forms tie.
pub fn compare_names(a: &str, b: &str) -> std::cmp::Ordering {
    collation_key(a)
        .cmp(&collation_key(b))
        .then_with(|| a.cmp(b))
}
