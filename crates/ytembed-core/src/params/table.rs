//! Whitelisted embed parameter names.

use serde::Serialize;
use std::fmt;

/// An embed player parameter this crate is willing to forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ParamName {
    Autoplay,
    Controls,
    Loop,
    Mute,
    Start,
    End,
    Playlist,
    Modestbranding,
    Rel,
    CcLoadPolicy,
    Hl,
    CcLangPref,
}

/// Accepted author-facing names and the parameter each one sets.
///
/// Every entry currently maps a name to the parameter of the same name; an
/// alias only needs a new row here.
const PARAM_TABLE: &[(&str, ParamName)] = &[
    ("autoplay", ParamName::Autoplay),
    ("controls", ParamName::Controls),
    ("loop", ParamName::Loop),
    ("mute", ParamName::Mute),
    ("start", ParamName::Start),
    ("end", ParamName::End),
    ("playlist", ParamName::Playlist),
    ("modestbranding", ParamName::Modestbranding),
    ("rel", ParamName::Rel),
    ("cc_load_policy", ParamName::CcLoadPolicy),
    ("hl", ParamName::Hl),
    ("cc_lang_pref", ParamName::CcLangPref),
];

impl ParamName {
    /// Looks up an already normalized (trimmed, lower-cased) name.
    pub fn lookup(name: &str) -> Option<ParamName> {
        PARAM_TABLE
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, param)| *param)
    }

    /// Query-string key sent to the embed player.
    pub fn as_str(self) -> &'static str {
        match self {
            ParamName::Autoplay => "autoplay",
            ParamName::Controls => "controls",
            ParamName::Loop => "loop",
            ParamName::Mute => "mute",
            ParamName::Start => "start",
            ParamName::End => "end",
            ParamName::Playlist => "playlist",
            ParamName::Modestbranding => "modestbranding",
            ParamName::Rel => "rel",
            ParamName::CcLoadPolicy => "cc_load_policy",
            ParamName::Hl => "hl",
            ParamName::CcLangPref => "cc_lang_pref",
        }
    }
}

impl fmt::Display for ParamName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
