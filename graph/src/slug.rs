//! URL-safe slugs for minting IRIs from free text.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Converts `text` into a lowercase ASCII token of `[a-z0-9-]`.
///
/// Diacritics are stripped after NFKD decomposition (`"kähmijä"` becomes
/// `"kahmija"`), a few letters without a decomposition are spelled out,
/// and every run of other characters collapses into a single hyphen.
/// Leading and trailing hyphens are removed, so the result may be empty.
///
/// ```
/// assert_eq!(csv2rdf_graph::slug::slugify("Rakennus-   työmies"), "rakennus-tyomies");
/// ```
#[must_use]
pub fn slugify(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pending_hyphen = false;

    for c in text.nfkd().filter(|c| !is_combining_mark(*c)) {
        let mut buf = [0; 4];
        let piece: &str = if c.is_ascii_alphanumeric() {
            c.to_ascii_lowercase().encode_utf8(&mut buf)
        } else if let Some(spelled) = transliterate(c) {
            spelled
        } else {
            pending_hyphen = true;
            continue;
        };
        if pending_hyphen && !out.is_empty() {
            out.push('-');
        }
        pending_hyphen = false;
        out.push_str(piece);
    }

    out
}

fn transliterate(c: char) -> Option<&'static str> {
    let s = match c {
        'ß' => "ss",
        'æ' | 'Æ' => "ae",
        'ø' | 'Ø' => "o",
        'œ' | 'Œ' => "oe",
        'đ' | 'Đ' | 'ð' | 'Ð' => "d",
        'ł' | 'Ł' => "l",
        'þ' | 'Þ' => "th",
        'ı' => "i",
        _ => return None,
    };
    Some(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_diacritics() {
        assert_eq!(slugify("näkki"), "nakki");
        assert_eq!(slugify("kähmijä"), "kahmija");
        assert_eq!(slugify("Åland"), "aland");
    }

    #[test]
    fn punctuation_runs_become_one_hyphen() {
        assert_eq!(slugify("aliupseeri (????)"), "aliupseeri");
        assert_eq!(slugify("a  /  b"), "a-b");
        assert_eq!(slugify("--x--"), "x");
    }

    #[test]
    fn spells_out_letters_without_decomposition() {
        assert_eq!(slugify("Straße"), "strasse");
        assert_eq!(slugify("Søren Kierkegaard"), "soren-kierkegaard");
    }

    #[test]
    fn lowercases_ascii() {
        assert_eq!(slugify("COL1"), "col1");
        assert_eq!(slugify(" COL2"), "col2");
    }

    #[test]
    fn empty_and_symbol_only_inputs_give_empty_slug() {
        assert_eq!(slugify(""), "");
        assert_eq!(slugify("?!"), "");
    }

    #[test]
    fn drops_unmapped_scripts() {
        assert_eq!(slugify("日本 x"), "x");
    }
}
