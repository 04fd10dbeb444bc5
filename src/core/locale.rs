use std::{fmt, str::FromStr};

use crate::DbGenError;

/// Locales understood by the generator.
///
/// Codes are matched case-insensitively; an unknown code is a configuration
/// error rather than a silent fall-back.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Locale {
    Ar,
    ArAe,
    ArDz,
    ArEg,
    ArJo,
    ArOm,
    ArSy,
    ArYe,
    Cs,
    Da,
    De,
    DeAt,
    DeCh,
    El,
    #[default]
    En,
    EnAu,
    EnCa,
    EnGb,
    Es,
    EsMx,
    Et,
    Fa,
    Fi,
    Fr,
    Hr,
    Hu,
    Is,
    It,
    Ja,
    Kk,
    Ko,
    Nl,
    NlBe,
    No,
    Pl,
    Pt,
    PtBr,
    Ru,
    Sk,
    Sv,
    Tr,
    Uk,
    Zh,
}

/// (locale, code, language name)
const GLOSSARY: [(Locale, &str, &str); 43] = [
    (Locale::Ar, "ar", "Arabic"),
    (Locale::ArAe, "ar-ae", "Arabic U.A.E"),
    (Locale::ArDz, "ar-dz", "Arabic Algeria"),
    (Locale::ArEg, "ar-eg", "Arabic Egypt"),
    (Locale::ArJo, "ar-jo", "Arabic Jordan"),
    (Locale::ArOm, "ar-om", "Arabic Oman"),
    (Locale::ArSy, "ar-sy", "Arabic Syria"),
    (Locale::ArYe, "ar-ye", "Arabic Yemen"),
    (Locale::Cs, "cs", "Czech"),
    (Locale::Da, "da", "Danish"),
    (Locale::De, "de", "German"),
    (Locale::DeAt, "de-at", "Austrian German"),
    (Locale::DeCh, "de-ch", "Swiss German"),
    (Locale::El, "el", "Greek"),
    (Locale::En, "en", "English"),
    (Locale::EnAu, "en-au", "Australian English"),
    (Locale::EnCa, "en-ca", "Canadian English"),
    (Locale::EnGb, "en-gb", "British English"),
    (Locale::Es, "es", "Spanish"),
    (Locale::EsMx, "es-mx", "Mexican Spanish"),
    (Locale::Et, "et", "Estonian"),
    (Locale::Fa, "fa", "Farsi"),
    (Locale::Fi, "fi", "Finnish"),
    (Locale::Fr, "fr", "French"),
    (Locale::Hr, "hr", "Croatian"),
    (Locale::Hu, "hu", "Hungarian"),
    (Locale::Is, "is", "Icelandic"),
    (Locale::It, "it", "Italian"),
    (Locale::Ja, "ja", "Japanese"),
    (Locale::Kk, "kk", "Kazakh"),
    (Locale::Ko, "ko", "Korean"),
    (Locale::Nl, "nl", "Dutch"),
    (Locale::NlBe, "nl-be", "Belgium Dutch"),
    (Locale::No, "no", "Norwegian"),
    (Locale::Pl, "pl", "Polish"),
    (Locale::Pt, "pt", "Portuguese"),
    (Locale::PtBr, "pt-br", "Brazilian Portuguese"),
    (Locale::Ru, "ru", "Russian"),
    (Locale::Sk, "sk", "Slovak"),
    (Locale::Sv, "sv", "Swedish"),
    (Locale::Tr, "tr", "Turkish"),
    (Locale::Uk, "uk", "Ukrainian"),
    (Locale::Zh, "zh", "Chinese"),
];

impl Locale {
    /// Every supported locale, in glossary order.
    pub fn all() -> impl Iterator<Item = Locale> {
        GLOSSARY.iter().map(|(locale, _, _)| *locale)
    }

    pub fn code(&self) -> &'static str {
        self.entry().1
    }

    pub fn language(&self) -> &'static str {
        self.entry().2
    }

    /// Whether full names are written family name first.
    pub fn family_name_first(&self) -> bool {
        matches!(self, Locale::Ja | Locale::Ko | Locale::Zh | Locale::Hu)
    }

    fn entry(&self) -> &'static (Locale, &'static str, &'static str) {
        // GLOSSARY lists every variant exactly once
        GLOSSARY
            .iter()
            .find(|(locale, _, _)| locale == self)
            .unwrap_or(&GLOSSARY[14])
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = DbGenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().to_lowercase();
        GLOSSARY
            .iter()
            .find(|(_, candidate, _)| *candidate == code)
            .map(|(locale, _, _)| *locale)
            .ok_or_else(|| {
                DbGenError::Configuration(format!(
                    "unknown locale '{s}', use for example 'en' or 'ru'"
                ))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::Locale;

    #[test]
    fn codes_are_case_insensitive() {
        assert_eq!("RU".parse::<Locale>().unwrap(), Locale::Ru);
        assert_eq!("pt-BR".parse::<Locale>().unwrap(), Locale::PtBr);
        assert_eq!(" en ".parse::<Locale>().unwrap(), Locale::En);
    }

    #[test]
    fn unknown_codes_are_rejected() {
        let error = "xx".parse::<Locale>().unwrap_err();
        assert!(error.to_string().contains("unknown locale 'xx'"));
    }

    #[test]
    fn every_locale_round_trips_through_its_code() {
        assert_eq!(Locale::all().count(), 43);
        for locale in Locale::all() {
            assert_eq!(locale.code().parse::<Locale>().unwrap(), locale);
        }
        assert_eq!(Locale::DeCh.language(), "Swiss German");
    }
}
