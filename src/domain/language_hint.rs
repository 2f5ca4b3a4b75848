use std::fmt;
use std::str::FromStr;

use isolang::Language;

/// ISO 639-1 spoken-language hint forwarded to the transcription engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LanguageHint(Language);

impl LanguageHint {
    pub fn as_str(&self) -> &'static str {
        // Construction only succeeds from a 639-1 code, so one always exists.
        self.0.to_639_1().unwrap_or("")
    }
}

impl FromStr for LanguageHint {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().to_lowercase();
        Language::from_639_1(&code)
            .map(LanguageHint)
            .ok_or_else(|| format!("Invalid language hint: {}. Expected an ISO 639-1 code", s))
    }
}

impl fmt::Display for LanguageHint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
