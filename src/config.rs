//! The configuration string parser and the settings it populates.
//!
//! A configuration string is a list of `key=value` entries joined by
//! semicolons, e.g. `N1=1;FN=2;NS=FN;NN:youtube.com=1`. Keys are either one
//! of the five delimiter settings, one of the element-type codes in
//! [`Tag`](crate::Tag), or a nickname-network binding prefixed with `NN`.
//! The two separators that give the string its shape are fixed; the
//! delimiter settings they carry only affect the name string itself.

use crate::error::NameError;
use crate::tag::Tag;
use compact_str::CompactString;
use std::borrow::Cow;

/// Joins entries in a configuration string.
pub const CONFIG_SEP: char = ';';
/// Joins a key to its value within an entry.
pub const CONFIG_KV_SEP: char = '=';
/// Prefix of the open-ended nickname-network key namespace.
pub const NICKNAME_PREFIX: &str = "NN";
/// Joins the nickname prefix to a network label, as in `NN:youtube.com`.
pub const NICKNAME_NET_DELIM: char = ':';

/// A parsed configuration value: an element index for element-type and
/// nickname keys, free text for everything else.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigValue {
    Index(i64),
    Text(CompactString),
}

/// A parsed configuration string: key-value entries in their original order.
///
/// Entry order is observable. Alias resolution substitutes the target's
/// value *as of the aliasing entry's position*, so `NM=5;N1=NM` resolves
/// `N1` to `5` while `N1=NM;NM=5` leaves `N1` holding the literal `NM`
/// (which then fails integer validation, `N1` being an element-type key).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConfigMap {
    entries: Vec<(CompactString, ConfigValue)>,
}

impl ConfigMap {
    pub fn get(&self, key: &str) -> Option<&ConfigValue> {
        self.entries
            .iter()
            .find(|(k, _)| k.as_str() == key)
            .map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ConfigValue)> + '_ {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

/// Whether values under this key must be element indexes.
fn requires_index(key: &str) -> bool {
    Tag::from_code(key).is_some() || key.starts_with(NICKNAME_PREFIX)
}

/// Parses a configuration string into an ordered key-value map.
///
/// Fails with [`NameError::DuplicateKey`] when a key appears twice, with
/// [`NameError::MalformedEntry`] when an entry is not a single `key=value`
/// pair, and with [`NameError::MalformedIndex`] when an element-type or
/// nickname key does not end up holding an integer.
///
/// A value that names another key in the same string is an alias and is
/// substituted with that key's value, one hop only: if the target's value is
/// itself the name of a key (including the target's own), the literal is
/// kept. A key naming itself is also kept as a literal.
pub fn parse_config(config_str: &str) -> Result<ConfigMap, NameError> {
    let mut entries: Vec<(CompactString, ConfigValue)> = Vec::new();
    if config_str.is_empty() {
        return Ok(ConfigMap { entries });
    }

    for entry in config_str.split(CONFIG_SEP) {
        let mut halves = entry.split(CONFIG_KV_SEP);
        let (key, value) = match (halves.next(), halves.next(), halves.next()) {
            (Some(k), Some(v), None) => (k, v),
            _ => return Err(NameError::MalformedEntry(entry.to_string())),
        };
        if entries.iter().any(|(k, _)| k.as_str() == key) {
            return Err(NameError::DuplicateKey(key.to_string()));
        }
        entries.push((key.into(), ConfigValue::Text(value.into())));
    }

    for i in 0..entries.len() {
        let key = entries[i].0.clone();

        // Single-hop alias resolution, in entry order.
        let resolved = match &entries[i].1 {
            ConfigValue::Text(value) if *value != key => match lookup(&entries, value) {
                Some(target) => {
                    let target_is_alias = matches!(
                        target,
                        ConfigValue::Text(t) if lookup(&entries, t).is_some()
                    );
                    if target_is_alias {
                        None
                    } else {
                        Some(target.clone())
                    }
                }
                None => None,
            },
            _ => None,
        };
        if let Some(value) = resolved {
            entries[i].1 = value;
        }

        if requires_index(&key) {
            if let ConfigValue::Text(text) = &entries[i].1 {
                let index = text
                    .trim()
                    .parse()
                    .map_err(|_| NameError::MalformedIndex(key.to_string()))?;
                entries[i].1 = ConfigValue::Index(index);
            }
        }
    }

    Ok(ConfigMap { entries })
}

fn lookup<'a>(
    entries: &'a [(CompactString, ConfigValue)],
    key: &str,
) -> Option<&'a ConfigValue> {
    entries.iter().find(|(k, _)| k.as_str() == key).map(|(_, v)| v)
}

/// The five configurable delimiter characters of a name string.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Delimiters {
    /// `ALED` - closes the alternate-name list.
    pub alt_list_end: char,
    /// `ALSE` - separates alternate-name entries.
    pub alt_list_separator: char,
    /// `ALST` - opens the alternate-name list.
    pub alt_list_start: char,
    /// `MNSP` - separates presentation-form main-name words.
    pub space: char,
    /// `MNSU` - stands in for a space within a single element.
    pub space_substitute: char,
}

impl Delimiters {
    pub const DEFAULT: Delimiters = Delimiters {
        alt_list_end: ')',
        alt_list_separator: ',',
        alt_list_start: '(',
        space: ' ',
        space_substitute: '_',
    };

    /// Key-to-character pairs in the fixed key order used by
    /// `Settings::apply` and configuration regeneration.
    pub(crate) fn entries(&self) -> [(&'static str, char); 5] {
        [
            ("ALED", self.alt_list_end),
            ("ALSE", self.alt_list_separator),
            ("ALST", self.alt_list_start),
            ("MNSP", self.space),
            ("MNSU", self.space_substitute),
        ]
    }

    fn set(&mut self, key: &str, value: char) {
        match key {
            "ALED" => self.alt_list_end = value,
            "ALSE" => self.alt_list_separator = value,
            "ALST" => self.alt_list_start = value,
            "MNSP" => self.space = value,
            "MNSU" => self.space_substitute = value,
            _ => unreachable!("not a delimiter key: {}", key),
        }
    }
}

impl Default for Delimiters {
    fn default() -> Delimiters {
        Delimiters::DEFAULT
    }
}

/// A name's resolved configuration: delimiters, element-type index
/// assignments, and nickname-network bindings.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Settings {
    delimiters: Delimiters,
    indexes: [Option<i64>; Tag::ALL.len()],
    nicknames: Vec<(CompactString, i64)>,
}

impl Settings {
    /// Merges a parsed configuration into these settings.
    ///
    /// Delimiters mentioned in `config` are replaced; unmentioned ones keep
    /// their current value. Element-type assignments are replaced wholesale:
    /// any type `config` does not mention is reset to unset. Nickname
    /// bindings are additive; a re-seen key is overwritten, but no binding
    /// is ever cleared. Applying the same configuration twice is therefore
    /// idempotent for everything except nickname bindings carried over from
    /// an earlier application.
    pub fn apply(&mut self, config: &ConfigMap) -> Result<(), NameError> {
        for (key, _) in Delimiters::DEFAULT.entries() {
            match config.get(key) {
                None => {}
                Some(ConfigValue::Text(text)) => {
                    let mut chars = text.chars();
                    match (chars.next(), chars.next()) {
                        (Some(c), None) => self.delimiters.set(key, c),
                        _ => return Err(NameError::MalformedDelimiter(key.to_string())),
                    }
                }
                Some(ConfigValue::Index(_)) => {
                    return Err(NameError::MalformedDelimiter(key.to_string()))
                }
            }
        }

        for tag in Tag::ALL {
            self.indexes[tag as usize] = match config.get(tag.code()) {
                Some(ConfigValue::Index(i)) => Some(*i),
                Some(ConfigValue::Text(_)) => {
                    return Err(NameError::MalformedIndex(tag.code().to_string()))
                }
                None => None,
            };
        }

        for (key, value) in config.iter() {
            if !key.starts_with(NICKNAME_PREFIX) {
                continue;
            }
            let index = match value {
                ConfigValue::Index(i) => *i,
                ConfigValue::Text(_) => {
                    return Err(NameError::MalformedIndex(key.to_string()))
                }
            };
            match self.nicknames.iter_mut().find(|(k, _)| k.as_str() == key) {
                Some(binding) => binding.1 = index,
                None => self.nicknames.push((key.into(), index)),
            }
        }

        Ok(())
    }

    #[inline]
    pub fn delimiters(&self) -> &Delimiters {
        &self.delimiters
    }

    /// The element position assigned to `tag`, if any.
    #[inline]
    pub fn index(&self, tag: Tag) -> Option<i64> {
        self.indexes[tag as usize]
    }

    /// The alt-name index bound to a network label, if any.
    pub fn nickname(&self, network: &str) -> Option<i64> {
        let key = format!("{}{}{}", NICKNAME_PREFIX, NICKNAME_NET_DELIM, network);
        self.nicknames
            .iter()
            .find(|(k, _)| k.as_str() == key)
            .map(|(_, i)| *i)
    }

    /// All nickname bindings, in first-seen order.
    pub fn nicknames(&self) -> impl Iterator<Item = (&str, i64)> + '_ {
        self.nicknames.iter().map(|(k, i)| (k.as_str(), *i))
    }

    /// Returns `text` with every space substitute replaced by a space.
    pub(crate) fn spaced<'a>(&self, text: &'a str) -> Cow<'a, str> {
        translate(text, self.delimiters.space_substitute, self.delimiters.space)
    }

    /// Returns `text` with every space replaced by the space substitute.
    pub(crate) fn unspaced<'a>(&self, text: &'a str) -> Cow<'a, str> {
        translate(text, self.delimiters.space, self.delimiters.space_substitute)
    }
}

fn translate(text: &str, from: char, to: char) -> Cow<'_, str> {
    if from == to || !text.contains(from) {
        Cow::Borrowed(text)
    } else {
        Cow::Owned(
            text.chars()
                .map(|c| if c == from { to } else { c })
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty() {
        assert!(parse_config("").unwrap().is_empty());
    }

    #[test]
    fn simple_indexes() {
        let config = parse_config("N1=1;FN=2;NS=3").unwrap();
        assert_eq!(Some(&ConfigValue::Index(1)), config.get("N1"));
        assert_eq!(Some(&ConfigValue::Index(2)), config.get("FN"));
        assert_eq!(Some(&ConfigValue::Index(3)), config.get("NS"));
        assert_eq!(None, config.get("NM"));
    }

    #[test]
    fn delimiters_stay_text() {
        let config = parse_config("ALST=[;ALED=]").unwrap();
        assert_eq!(Some(&ConfigValue::Text("[".into())), config.get("ALST"));
        assert_eq!(Some(&ConfigValue::Text("]".into())), config.get("ALED"));
    }

    #[test]
    fn duplicate_key() {
        assert_eq!(
            Err(NameError::DuplicateKey("N1".to_string())),
            parse_config("N1=1;N1=2")
        );
    }

    #[test]
    fn malformed_entry() {
        assert_eq!(
            Err(NameError::MalformedEntry("N1".to_string())),
            parse_config("N1")
        );
        assert_eq!(
            Err(NameError::MalformedEntry("N1=1=2".to_string())),
            parse_config("N1=1=2")
        );
    }

    #[test]
    fn malformed_index() {
        assert_eq!(
            Err(NameError::MalformedIndex("NS".to_string())),
            parse_config("NS=two")
        );
        assert_eq!(
            Err(NameError::MalformedIndex("NN:x.com".to_string())),
            parse_config("NN:x.com=first")
        );
    }

    #[test]
    fn index_tolerates_whitespace_and_sign() {
        let config = parse_config("N1= 1 ;NS=+2").unwrap();
        assert_eq!(Some(&ConfigValue::Index(1)), config.get("N1"));
        assert_eq!(Some(&ConfigValue::Index(2)), config.get("NS"));
    }

    #[test]
    fn alias_single_hop() {
        let config = parse_config("FN=2;NS=FN").unwrap();
        assert_eq!(Some(&ConfigValue::Index(2)), config.get("NS"));
    }

    #[test]
    fn alias_respects_entry_order() {
        // NM is already resolved when N1 is processed.
        let config = parse_config("NM=NS;NS=5;N1=NM").unwrap();
        assert_eq!(Some(&ConfigValue::Index(5)), config.get("NM"));
        assert_eq!(Some(&ConfigValue::Index(5)), config.get("N1"));

        // Reversed, N1 sees NM still holding the alias NS, keeps the
        // literal NM, and fails integer validation.
        assert_eq!(
            Err(NameError::MalformedIndex("N1".to_string())),
            parse_config("N1=NM;NM=NS;NS=5")
        );
    }

    #[test]
    fn self_alias_is_literal() {
        assert_eq!(
            Err(NameError::MalformedIndex("NS".to_string())),
            parse_config("NS=NS")
        );
    }

    #[test]
    fn alias_to_non_index_key() {
        // An element-type key may alias a delimiter key; the substituted
        // value must still parse as an integer.
        assert_eq!(
            Err(NameError::MalformedIndex("NS".to_string())),
            parse_config("ALST=[;NS=ALST")
        );
    }

    #[test]
    fn apply_defaults() {
        let mut settings = Settings::default();
        settings.apply(&parse_config("").unwrap()).unwrap();
        assert_eq!(Delimiters::DEFAULT, *settings.delimiters());
        for tag in Tag::ALL {
            assert_eq!(None, settings.index(tag));
        }
    }

    #[test]
    fn apply_overrides_delimiters_and_keeps_unmentioned() {
        let mut settings = Settings::default();
        settings.apply(&parse_config("ALST=[").unwrap()).unwrap();
        settings.apply(&parse_config("ALED=]").unwrap()).unwrap();
        assert_eq!('[', settings.delimiters().alt_list_start);
        assert_eq!(']', settings.delimiters().alt_list_end);
        assert_eq!(',', settings.delimiters().alt_list_separator);
    }

    #[test]
    fn apply_resets_unmentioned_element_types() {
        let mut settings = Settings::default();
        settings.apply(&parse_config("N1=1;NS=2").unwrap()).unwrap();
        assert_eq!(Some(1), settings.index(Tag::FirstName));

        settings.apply(&parse_config("NS=1").unwrap()).unwrap();
        assert_eq!(None, settings.index(Tag::FirstName));
        assert_eq!(Some(1), settings.index(Tag::Surname));
    }

    #[test]
    fn apply_accumulates_nicknames() {
        let mut settings = Settings::default();
        settings
            .apply(&parse_config("NN:a.com=1").unwrap())
            .unwrap();
        settings
            .apply(&parse_config("NN:b.com=2").unwrap())
            .unwrap();
        assert_eq!(Some(1), settings.nickname("a.com"));
        assert_eq!(Some(2), settings.nickname("b.com"));

        settings
            .apply(&parse_config("NN:a.com=3").unwrap())
            .unwrap();
        assert_eq!(Some(3), settings.nickname("a.com"));
    }

    #[test]
    fn apply_is_idempotent_for_element_types() {
        let config = parse_config("N1=1;NS=2;MNSU=-").unwrap();
        let mut once = Settings::default();
        once.apply(&config).unwrap();
        let mut twice = once.clone();
        twice.apply(&config).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn malformed_delimiter() {
        let mut settings = Settings::default();
        assert_eq!(
            Err(NameError::MalformedDelimiter("ALST".to_string())),
            settings.apply(&parse_config("ALST=[[").unwrap())
        );
        assert_eq!(
            Err(NameError::MalformedDelimiter("ALST".to_string())),
            settings.apply(&parse_config("ALST=").unwrap())
        );
    }

    #[test]
    fn translation() {
        let settings = Settings::default();
        assert_eq!("Tsu Hong", settings.spaced("Tsu_Hong"));
        assert_eq!("Tsu_Hong", settings.unspaced("Tsu Hong"));
    }
}
