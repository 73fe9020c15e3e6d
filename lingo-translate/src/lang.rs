//! Language-name to provider-code mapping.
//!
//! The translation endpoint addresses languages by short code (`yo`, `fr`,
//! `zh-cn`), while the catalog holds human-readable names. This table covers
//! every language the public endpoint serves.

/// English-name → provider-code pairs, in the provider's own ordering.
const LANGUAGE_CODES: &[(&str, &str)] = &[
    ("afrikaans", "af"),
    ("albanian", "sq"),
    ("amharic", "am"),
    ("arabic", "ar"),
    ("armenian", "hy"),
    ("azerbaijani", "az"),
    ("basque", "eu"),
    ("belarusian", "be"),
    ("bengali", "bn"),
    ("bosnian", "bs"),
    ("bulgarian", "bg"),
    ("catalan", "ca"),
    ("cebuano", "ceb"),
    ("chichewa", "ny"),
    ("chinese (simplified)", "zh-cn"),
    ("chinese (traditional)", "zh-tw"),
    ("corsican", "co"),
    ("croatian", "hr"),
    ("czech", "cs"),
    ("danish", "da"),
    ("dutch", "nl"),
    ("english", "en"),
    ("esperanto", "eo"),
    ("estonian", "et"),
    ("filipino", "tl"),
    ("finnish", "fi"),
    ("french", "fr"),
    ("frisian", "fy"),
    ("galician", "gl"),
    ("georgian", "ka"),
    ("german", "de"),
    ("greek", "el"),
    ("gujarati", "gu"),
    ("haitian creole", "ht"),
    ("hausa", "ha"),
    ("hawaiian", "haw"),
    ("hebrew", "he"),
    ("hindi", "hi"),
    ("hmong", "hmn"),
    ("hungarian", "hu"),
    ("icelandic", "is"),
    ("igbo", "ig"),
    ("indonesian", "id"),
    ("irish", "ga"),
    ("italian", "it"),
    ("japanese", "ja"),
    ("javanese", "jw"),
    ("kannada", "kn"),
    ("kazakh", "kk"),
    ("khmer", "km"),
    ("korean", "ko"),
    ("kurdish (kurmanji)", "ku"),
    ("kyrgyz", "ky"),
    ("lao", "lo"),
    ("latin", "la"),
    ("latvian", "lv"),
    ("lithuanian", "lt"),
    ("luxembourgish", "lb"),
    ("macedonian", "mk"),
    ("malagasy", "mg"),
    ("malay", "ms"),
    ("malayalam", "ml"),
    ("maltese", "mt"),
    ("maori", "mi"),
    ("marathi", "mr"),
    ("mongolian", "mn"),
    ("myanmar (burmese)", "my"),
    ("nepali", "ne"),
    ("norwegian", "no"),
    ("odia", "or"),
    ("pashto", "ps"),
    ("persian", "fa"),
    ("polish", "pl"),
    ("portuguese", "pt"),
    ("punjabi", "pa"),
    ("romanian", "ro"),
    ("russian", "ru"),
    ("samoan", "sm"),
    ("scots gaelic", "gd"),
    ("serbian", "sr"),
    ("sesotho", "st"),
    ("shona", "sn"),
    ("sindhi", "sd"),
    ("sinhala", "si"),
    ("slovak", "sk"),
    ("slovenian", "sl"),
    ("somali", "so"),
    ("spanish", "es"),
    ("sundanese", "su"),
    ("swahili", "sw"),
    ("swedish", "sv"),
    ("tajik", "tg"),
    ("tamil", "ta"),
    ("telugu", "te"),
    ("thai", "th"),
    ("turkish", "tr"),
    ("ukrainian", "uk"),
    ("urdu", "ur"),
    ("uyghur", "ug"),
    ("uzbek", "uz"),
    ("vietnamese", "vi"),
    ("welsh", "cy"),
    ("xhosa", "xh"),
    ("yiddish", "yi"),
    ("yoruba", "yo"),
    ("zulu", "zu"),
];

/// Looks up the provider code for a language.
///
/// Accepts the English name (`"yoruba"`) or the code itself (`"yo"`), in any
/// case and with surrounding whitespace. Returns `None` for languages the
/// provider does not serve.
#[must_use]
pub fn code_for(name: &str) -> Option<&'static str> {
    let needle = name.trim().to_lowercase();
    LANGUAGE_CODES
        .iter()
        .find(|(language, code)| *language == needle || *code == needle)
        .map(|(_, code)| *code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_common_names() {
        assert_eq!(code_for("yoruba"), Some("yo"));
        assert_eq!(code_for("hausa"), Some("ha"));
        assert_eq!(code_for("igbo"), Some("ig"));
        assert_eq!(code_for("english"), Some("en"));
        assert_eq!(code_for("chinese (simplified)"), Some("zh-cn"));
    }

    #[test]
    fn ignores_case_and_whitespace() {
        assert_eq!(code_for("Yoruba"), Some("yo"));
        assert_eq!(code_for("  FRENCH  "), Some("fr"));
    }

    #[test]
    fn accepts_codes_directly() {
        assert_eq!(code_for("yo"), Some("yo"));
        assert_eq!(code_for("zh-tw"), Some("zh-tw"));
    }

    #[test]
    fn unknown_language_is_none() {
        assert_eq!(code_for("klingon"), None);
        assert_eq!(code_for(""), None);
    }

    #[test]
    fn table_has_no_duplicate_names() {
        for (i, (name, _)) in LANGUAGE_CODES.iter().enumerate() {
            assert!(
                !LANGUAGE_CODES[i + 1..].iter().any(|(other, _)| other == name),
                "duplicate table entry: {name}"
            );
        }
    }
}
