// src/domain/language.rs

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Display language, passed explicitly into every renderer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Ar,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Ltr,
    Rtl,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::En, Language::Ar];

    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ar => "ar",
        }
    }

    pub fn direction(self) -> Direction {
        match self {
            Language::En => Direction::Ltr,
            Language::Ar => Direction::Rtl,
        }
    }

    /// First-name fallback used when a guest leaves the name blank.
    pub fn guest_fallback(self) -> &'static str {
        match self {
            Language::En => "Guest",
            Language::Ar => "ضيف",
        }
    }

    /// Picks between two hardcoded strings for page chrome.
    pub fn pick<'a>(self, en: &'a str, ar: &'a str) -> &'a str {
        match self {
            Language::En => en,
            Language::Ar => ar,
        }
    }

    /// Lenient parse used for the `lang` query parameter; anything unknown is English.
    pub fn from_param(value: Option<&str>) -> Self {
        value.and_then(|v| v.parse().ok()).unwrap_or_default()
    }
}

impl Direction {
    pub fn is_rtl(self) -> bool {
        self == Direction::Rtl
    }

    pub fn as_html(self) -> &'static str {
        match self {
            Direction::Ltr => "ltr",
            Direction::Rtl => "rtl",
        }
    }

    /// Alignment for the leading edge of a line.
    pub fn start(self) -> Align {
        match self {
            Direction::Ltr => Align::Left,
            Direction::Rtl => Align::Right,
        }
    }

    /// Alignment for the trailing edge of a line.
    pub fn end(self) -> Align {
        match self {
            Direction::Ltr => Align::Right,
            Direction::Rtl => Align::Left,
        }
    }
}

impl Align {
    pub fn as_css(self) -> &'static str {
        match self {
            Align::Left => "left",
            Align::Right => "right",
        }
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" => Ok(Language::En),
            "ar" => Ok(Language::Ar),
            other => Err(format!("unsupported language '{other}'")),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arabic_mirrors_alignment() {
        let dir = Language::Ar.direction();
        assert!(dir.is_rtl());
        assert_eq!(dir.start(), Align::Right);
        assert_eq!(dir.end(), Align::Left);
        assert_eq!(Language::En.direction().start(), Align::Left);
    }

    #[test]
    fn unknown_lang_param_falls_back_to_english() {
        assert_eq!(Language::from_param(Some("AR")), Language::Ar);
        assert_eq!(Language::from_param(Some("fr")), Language::En);
        assert_eq!(Language::from_param(None), Language::En);
    }
}
