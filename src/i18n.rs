//! Bilingual user-facing copy.
//!
//! Two fixed text sets (English and Hindi), toggled with one key. This is
//! deliberately not a full localization layer: every piece of copy is
//! written at its call site in both languages and selected here.

use std::str::FromStr;

/// Active display language.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Lang {
    #[default]
    En,
    Hi,
}

impl Lang {
    /// Pick the copy for the active language.
    pub fn text<'a>(self, en: &'a str, hi: &'a str) -> &'a str {
        match self {
            Lang::En => en,
            Lang::Hi => hi,
        }
    }

    pub fn toggle(self) -> Self {
        match self {
            Lang::En => Lang::Hi,
            Lang::Hi => Lang::En,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::Hi => "hi",
        }
    }

    /// Label for the toggle control: shows the language you would switch to.
    pub fn toggle_label(self) -> &'static str {
        match self {
            Lang::En => "हिं",
            Lang::Hi => "EN",
        }
    }
}

impl FromStr for Lang {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "en" | "english" => Ok(Lang::En),
            "hi" | "hindi" => Ok(Lang::Hi),
            _ => Err(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_selects_language() {
        assert_eq!(Lang::En.text("Dashboard", "डैशबोर्ड"), "Dashboard");
        assert_eq!(Lang::Hi.text("Dashboard", "डैशबोर्ड"), "डैशबोर्ड");
    }

    #[test]
    fn test_toggle_is_two_way() {
        assert_eq!(Lang::En.toggle(), Lang::Hi);
        assert_eq!(Lang::Hi.toggle(), Lang::En);
        assert_eq!(Lang::En.toggle().toggle(), Lang::En);
    }

    #[test]
    fn test_parsing() {
        assert_eq!("en".parse::<Lang>().unwrap(), Lang::En);
        assert_eq!("Hindi".parse::<Lang>().unwrap(), Lang::Hi);
        assert!("fr".parse::<Lang>().is_err());
    }

    #[test]
    fn test_toggle_label_shows_other_language() {
        assert_eq!(Lang::En.toggle_label(), "हिं");
        assert_eq!(Lang::Hi.toggle_label(), "EN");
    }

    #[test]
    fn test_default_is_english() {
        assert_eq!(Lang::default(), Lang::En);
    }
}
