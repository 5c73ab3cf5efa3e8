use language_tags::LanguageTag;
use smol_str::SmolStr;

#[inline(always)]
pub fn lower_case(s: &str) -> SmolStr {
    SmolStr::from(s.to_lowercase())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CaseRules {
    Default,
    // Dotted and dotless i are distinct letters.
    Turkic,
}

/// Lowercasing rules of one language, selected by its language code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locale {
    language: SmolStr,
    rules: CaseRules,
}

impl Locale {
    /// Accepts BCP 47 tags (`en-US`) as well as POSIX locale names
    /// (`en_US.UTF-8`, `tr_TR@euro`).
    pub fn from_code(code: &str) -> Locale {
        let base = code.split(|c| c == '.' || c == '@').next().unwrap_or("");
        let tag = base.replace('_', "-");

        let language = match LanguageTag::parse(&tag) {
            Ok(tag) => lower_case(tag.primary_language()),
            Err(_) => lower_case(tag.split('-').next().unwrap_or("")),
        };

        let rules = match language.as_str() {
            "tr" | "az" | "tt" | "crh" => CaseRules::Turkic,
            _ => CaseRules::Default,
        };

        Locale { language, rules }
    }

    /// Primary language subtag, lowercased.
    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn lower_case(&self, s: &str) -> SmolStr {
        match self.rules {
            CaseRules::Default => lower_case(s),
            CaseRules::Turkic => s
                .chars()
                .flat_map(|c| {
                    let lowered: Vec<char> = match c {
                        'I' => vec!['ı'],
                        'İ' => vec!['i'],
                        c => c.to_lowercase().collect(),
                    };
                    lowered
                })
                .collect::<SmolStr>(),
        }
    }
}

impl Default for Locale {
    fn default() -> Locale {
        Locale {
            language: SmolStr::new(""),
            rules: CaseRules::Default,
        }
    }
}
