//! HTML character reference decoding.
//!
//! Decodes named references from a common subset of the HTML5 table
//! (`&amp;`, `&eacute;`, `&euro;`, ...) and numeric references in decimal
//! (`&#233;`) or hexadecimal (`&#xE9;`) form. References must end with `;`.
//! Unknown names and malformed references are kept verbatim.
//!
//! # Examples
//!
//! ```
//! use preprocessing::analysis::char_filter::CharFilter;
//! use preprocessing::analysis::char_filter::html_entity::HtmlEntityCharFilter;
//!
//! let filter = HtmlEntityCharFilter::new();
//! assert_eq!(filter.filter("caf&eacute; &amp; bar &#8364;5"), "café & bar €5");
//! ```

use super::CharFilter;

/// Longest reference body considered, e.g. `#x10FFFF` or `thetasym`.
const MAX_REFERENCE_LEN: usize = 10;

const NAMED_ENTITIES: &[(&str, char)] = &[
    ("amp", '&'),
    ("lt", '<'),
    ("gt", '>'),
    ("quot", '"'),
    ("apos", '\''),
    ("nbsp", '\u{00A0}'),
    ("iexcl", '¡'),
    ("cent", '¢'),
    ("pound", '£'),
    ("curren", '¤'),
    ("yen", '¥'),
    ("brvbar", '¦'),
    ("sect", '§'),
    ("uml", '¨'),
    ("copy", '©'),
    ("ordf", 'ª'),
    ("laquo", '«'),
    ("not", '¬'),
    ("shy", '\u{00AD}'),
    ("reg", '®'),
    ("macr", '¯'),
    ("deg", '°'),
    ("plusmn", '±'),
    ("sup2", '²'),
    ("sup3", '³'),
    ("acute", '´'),
    ("micro", 'µ'),
    ("para", '¶'),
    ("middot", '·'),
    ("cedil", '¸'),
    ("sup1", '¹'),
    ("ordm", 'º'),
    ("raquo", '»'),
    ("frac14", '¼'),
    ("frac12", '½'),
    ("frac34", '¾'),
    ("iquest", '¿'),
    ("Agrave", 'À'),
    ("Aacute", 'Á'),
    ("Acirc", 'Â'),
    ("Atilde", 'Ã'),
    ("Auml", 'Ä'),
    ("Aring", 'Å'),
    ("AElig", 'Æ'),
    ("Ccedil", 'Ç'),
    ("Egrave", 'È'),
    ("Eacute", 'É'),
    ("Ecirc", 'Ê'),
    ("Euml", 'Ë'),
    ("Igrave", 'Ì'),
    ("Iacute", 'Í'),
    ("Icirc", 'Î'),
    ("Iuml", 'Ï'),
    ("ETH", 'Ð'),
    ("Ntilde", 'Ñ'),
    ("Ograve", 'Ò'),
    ("Oacute", 'Ó'),
    ("Ocirc", 'Ô'),
    ("Otilde", 'Õ'),
    ("Ouml", 'Ö'),
    ("times", '×'),
    ("Oslash", 'Ø'),
    ("Ugrave", 'Ù'),
    ("Uacute", 'Ú'),
    ("Ucirc", 'Û'),
    ("Uuml", 'Ü'),
    ("Yacute", 'Ý'),
    ("THORN", 'Þ'),
    ("szlig", 'ß'),
    ("agrave", 'à'),
    ("aacute", 'á'),
    ("acirc", 'â'),
    ("atilde", 'ã'),
    ("auml", 'ä'),
    ("aring", 'å'),
    ("aelig", 'æ'),
    ("ccedil", 'ç'),
    ("egrave", 'è'),
    ("eacute", 'é'),
    ("ecirc", 'ê'),
    ("euml", 'ë'),
    ("igrave", 'ì'),
    ("iacute", 'í'),
    ("icirc", 'î'),
    ("iuml", 'ï'),
    ("eth", 'ð'),
    ("ntilde", 'ñ'),
    ("ograve", 'ò'),
    ("oacute", 'ó'),
    ("ocirc", 'ô'),
    ("otilde", 'õ'),
    ("ouml", 'ö'),
    ("divide", '÷'),
    ("oslash", 'ø'),
    ("ugrave", 'ù'),
    ("uacute", 'ú'),
    ("ucirc", 'û'),
    ("uuml", 'ü'),
    ("yacute", 'ý'),
    ("thorn", 'þ'),
    ("yuml", 'ÿ'),
    ("OElig", 'Œ'),
    ("oelig", 'œ'),
    ("Scaron", 'Š'),
    ("scaron", 'š'),
    ("Yuml", 'Ÿ'),
    ("fnof", 'ƒ'),
    ("circ", 'ˆ'),
    ("tilde", '˜'),
    ("ensp", '\u{2002}'),
    ("emsp", '\u{2003}'),
    ("thinsp", '\u{2009}'),
    ("zwnj", '\u{200C}'),
    ("zwj", '\u{200D}'),
    ("ndash", '–'),
    ("mdash", '—'),
    ("lsquo", '‘'),
    ("rsquo", '’'),
    ("sbquo", '‚'),
    ("ldquo", '“'),
    ("rdquo", '”'),
    ("bdquo", '„'),
    ("dagger", '†'),
    ("Dagger", '‡'),
    ("bull", '•'),
    ("hellip", '…'),
    ("permil", '‰'),
    ("prime", '′'),
    ("Prime", '″'),
    ("lsaquo", '‹'),
    ("rsaquo", '›'),
    ("euro", '€'),
    ("trade", '™'),
    ("larr", '←'),
    ("uarr", '↑'),
    ("rarr", '→'),
    ("darr", '↓'),
    ("minus", '−'),
    ("infin", '∞'),
    ("ne", '≠'),
    ("le", '≤'),
    ("ge", '≥'),
];

/// A char filter that decodes HTML character references.
#[derive(Clone, Debug, Default)]
pub struct HtmlEntityCharFilter;

impl HtmlEntityCharFilter {
    /// Create a new HTML entity char filter.
    pub fn new() -> Self {
        HtmlEntityCharFilter
    }
}

impl CharFilter for HtmlEntityCharFilter {
    fn filter(&self, input: &str) -> String {
        let mut output = String::with_capacity(input.len());
        let mut rest = input;

        while let Some(amp) = rest.find('&') {
            output.push_str(&rest[..amp]);
            let after = &rest[amp + 1..];

            match decode_reference(after) {
                Some((decoded, consumed)) => {
                    output.push(decoded);
                    rest = &after[consumed..];
                }
                None => {
                    output.push('&');
                    rest = after;
                }
            }
        }

        output.push_str(rest);
        output
    }

    fn name(&self) -> &'static str {
        "html_entity"
    }
}

/// Decode the reference at the start of `text` (just after the `&`).
///
/// Returns the decoded character and the number of bytes consumed,
/// including the closing `;`.
fn decode_reference(text: &str) -> Option<(char, usize)> {
    let end = text
        .char_indices()
        .take(MAX_REFERENCE_LEN + 1)
        .find(|&(_, c)| !(c.is_ascii_alphanumeric() || c == '#'))
        .filter(|&(_, c)| c == ';')
        .map(|(i, _)| i)?;
    let body = &text[..end];

    let decoded = match body.strip_prefix('#') {
        Some(number) => decode_numeric(number)?,
        None => NAMED_ENTITIES
            .iter()
            .find(|(name, _)| *name == body)
            .map(|&(_, c)| c)?,
    };

    Some((decoded, end + 1))
}

fn decode_numeric(number: &str) -> Option<char> {
    let code_point = match number.strip_prefix(['x', 'X']) {
        Some(hex) if !hex.is_empty() && hex.chars().all(|c| c.is_ascii_hexdigit()) => {
            u32::from_str_radix(hex, 16).ok()?
        }
        None if !number.is_empty() && number.chars().all(|c| c.is_ascii_digit()) => {
            number.parse::<u32>().ok()?
        }
        _ => return None,
    };

    // NUL, surrogates and out-of-range values decode to the replacement character.
    Some(match code_point {
        0 => char::REPLACEMENT_CHARACTER,
        _ => char::from_u32(code_point).unwrap_or(char::REPLACEMENT_CHARACTER),
    })
}
