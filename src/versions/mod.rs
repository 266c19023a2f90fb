use std::fmt;
use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum VersionError {
    #[error("no versions given")]
    Empty,
    #[error("malformed panel version: '{0}'")]
    Malformed(String),
    #[error("could not decide the latest version among {0:?}")]
    Conflict(Vec<String>),
}

/// `major.minor`, ordered numerically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PanelVersion {
    pub major: u32,
    pub minor: u32,
}

impl FromStr for PanelVersion {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || VersionError::Malformed(s.to_string());
        let (major, minor) = s.trim().split_once('.').ok_or_else(malformed)?;
        Ok(PanelVersion {
            major: parse_number(major).ok_or_else(malformed)?,
            minor: parse_number(minor).ok_or_else(malformed)?,
        })
    }
}

impl fmt::Display for PanelVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

/// `2.1` (normal) or `2.1|1` (add-on layered on base 2.1).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionLabel {
    pub base: PanelVersion,
    pub addon: Option<u32>,
    pub raw: String,
}

impl VersionLabel {
    pub fn parse(raw: &str) -> Result<Self, VersionError> {
        let (base, addon) = match raw.split_once('|') {
            Some((base, addon)) => {
                let addon =
                    parse_number(addon).ok_or_else(|| VersionError::Malformed(raw.to_string()))?;
                (base, Some(addon))
            }
            None => (raw, None),
        };
        let base = base
            .parse::<PanelVersion>()
            .map_err(|_| VersionError::Malformed(raw.to_string()))?;
        Ok(VersionLabel {
            base,
            addon,
            raw: raw.to_string(),
        })
    }

    pub fn is_addon(&self) -> bool {
        self.addon.is_some()
    }
}

/// Latest label of one panel. The base decides first; the add-on number only
/// breaks ties between add-ons sharing the maximal base, and an add-on beats
/// the plain label of its own base. Returned verbatim.
pub fn latest_version<'a, I>(versions: I) -> Result<String, VersionError>
where
    I: IntoIterator<Item = &'a str>,
{
    let labels = versions
        .into_iter()
        .map(VersionLabel::parse)
        .collect::<Result<Vec<_>, _>>()?;

    let max_base = labels
        .iter()
        .map(|l| l.base)
        .max()
        .ok_or(VersionError::Empty)?;
    let at_max: Vec<&VersionLabel> = labels.iter().filter(|l| l.base == max_base).collect();

    let addons: Vec<&VersionLabel> = at_max.iter().copied().filter(|l| l.is_addon()).collect();
    let winners: Vec<&VersionLabel> = if addons.is_empty() {
        at_max
    } else {
        let max_addon = addons.iter().filter_map(|l| l.addon).max();
        addons
            .into_iter()
            .filter(|l| l.addon == max_addon)
            .collect()
    };

    match winners.as_slice() {
        [winner] => Ok(winner.raw.clone()),
        // a set repeats nothing, but "2.1" and "2.01" name the same base
        _ => Err(VersionError::Conflict(
            labels.iter().map(|l| l.raw.clone()).collect(),
        )),
    }
}

fn parse_number(s: &str) -> Option<u32> {
    let s = s.trim();
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

#[cfg(test)]
#[path = "../../tests/src_inline/versions/mod.rs"]
mod tests;
