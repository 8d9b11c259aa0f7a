//! A library for handling personal names of varying formats.
//!
//! Names arrive as a single Unicode string plus a compact configuration
//! string that marks up which whitespace-delimited element plays which
//! semantic role:
//!
//! ```
//! use personal_name::PersonalName;
//!
//! let name = PersonalName::new("Andre Konstantinovich Geim", "N1=1;FN=2;NS=3").unwrap();
//! assert_eq!("Andre", name.main_name_element("N1").unwrap());
//! assert_eq!("Geim", name.main_name_element("NS").unwrap());
//! assert_eq!("Andre Geim", name.formatted_name("{N1} {NS}"));
//! ```
//!
//! A parenthesized, comma-separated list after the main name holds alternate
//! names (nicknames, handles), optionally bound to identity networks:
//!
//! ```
//! use personal_name::PersonalName;
//!
//! let name = PersonalName::new(
//!     "Maria Viktorovna (GentleWhispering, maria.gw)",
//!     "N1=1;FN=2;NS=FN;NN:youtube.com=1;NN:instagram.com=2",
//! ).unwrap();
//! assert_eq!("Viktorovna", name.main_name_element("NS").unwrap());
//! assert_eq!("maria.gw", name.alt_name("instagram.com").unwrap());
//! assert_eq!(2, name.count_alt_names());
//! ```
//!
//! Spaces inside a single element are written with a substitute character
//! (`_` by default) and converted back on retrieval. Elements are one-based;
//! negative indices count from the last element. A `PersonalName` never
//! changes after construction, so shared reads need no synchronization.

mod config;
mod element;
mod error;
mod format;
mod tag;

#[cfg(feature = "ffi")]
pub mod external;
#[cfg(feature = "serialization")]
mod serialization;

pub use crate::config::{
    parse_config, ConfigMap, ConfigValue, Delimiters, Settings, CONFIG_KV_SEP, CONFIG_SEP,
    NICKNAME_NET_DELIM, NICKNAME_PREFIX,
};
pub use crate::element::{AltRef, ElementRef};
pub use crate::error::NameError;
pub use crate::tag::Tag;

use compact_str::CompactString;
use std::fmt;
use std::fmt::Write;

/// A personal name: immutable Unicode text plus the configuration that maps
/// its elements to semantic roles.
#[derive(Clone, Debug)]
pub struct PersonalName {
    text: CompactString,
    settings: Settings,
    /// Byte offset of the alt-list start delimiter, or `text.len()` when
    /// the name has no alternate-name list.
    alt_list_start: usize,
    /// Byte offset of the alt-list end delimiter, or `text.len()`.
    alt_list_end: usize,
}

impl PersonalName {
    /// Parses `config` and indexes `name` against it.
    ///
    /// Fails when the configuration string is malformed (see
    /// [`parse_config`]) or when the name opens an alternate-name list it
    /// never closes.
    pub fn new(name: &str, config: &str) -> Result<PersonalName, NameError> {
        let mut settings = Settings::default();
        settings.apply(&parse_config(config)?)?;

        let text = CompactString::from(name);
        let mut alt_list_start = text.len();
        let mut alt_list_end = text.len();
        if let Some(start) = text.find(settings.delimiters().alt_list_start) {
            alt_list_start = start;
            alt_list_end = text[start..]
                .find(settings.delimiters().alt_list_end)
                .map(|offset| start + offset)
                .ok_or(NameError::UnterminatedAltList)?;
        }

        Ok(PersonalName {
            text,
            settings,
            alt_list_start,
            alt_list_end,
        })
    }

    /// The name text exactly as supplied.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// The resolved configuration this name was constructed with.
    #[inline]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// The main-name elements in presentation order, space substitutes
    /// intact.
    pub fn main_name_elements(&self) -> impl DoubleEndedIterator<Item = &str> + '_ {
        self.text[..self.alt_list_start].split_whitespace()
    }

    pub(crate) fn alt_name_entries(&self) -> impl Iterator<Item = &str> + '_ {
        let delimiters = self.settings.delimiters();
        let region = if self.alt_list_start >= self.text.len() {
            ""
        } else {
            let start = (self.alt_list_start + delimiters.alt_list_start.len_utf8())
                .min(self.alt_list_end);
            &self.text[start..self.alt_list_end]
        };
        region
            .split(delimiters.alt_list_separator)
            .filter(|entry| !entry.trim().is_empty())
    }

    /// Whether the name carries an alternate-name list.
    #[inline]
    pub fn has_alt_names(&self) -> bool {
        self.alt_list_start < self.text.len()
    }

    pub fn count_main_name_elements(&self) -> usize {
        self.main_name_elements().count()
    }

    pub fn count_alt_names(&self) -> usize {
        self.alt_name_entries().count()
    }

    /// The main name in presentation form: everything before the alternate
    /// name list, trimmed, with space substitutes converted to spaces.
    pub fn main_name(&self) -> String {
        let main = self.text[..self.alt_list_start].trim();
        self.settings.spaced(main).into_owned()
    }

    /// The main name with every space character removed.
    ///
    /// Intended for names written without spaces, such as Chinese and
    /// Korean names entered one element per word.
    pub fn main_name_unspaced(&self) -> String {
        let space = self.settings.delimiters().space;
        self.main_name().chars().filter(|&c| c != space).collect()
    }

    /// The shortest configuration string that reproduces this name's
    /// settings: non-default delimiters, then set element-type assignments
    /// in declaration order, then nickname bindings in first-seen order.
    ///
    /// Constructing a new `PersonalName` from the same text and this string
    /// behaves identically to `self`.
    pub fn config_str(&self) -> String {
        let mut out = String::new();
        for ((key, value), (_, default)) in self
            .settings
            .delimiters()
            .entries()
            .iter()
            .zip(Delimiters::DEFAULT.entries().iter())
        {
            if value != default {
                push_entry(&mut out, key, value);
            }
        }
        for tag in Tag::ALL {
            match self.settings.index(tag) {
                Some(index) if index != 0 => push_entry(&mut out, tag.code(), index),
                _ => {}
            }
        }
        for (key, index) in self.settings.nicknames() {
            push_entry(&mut out, key, index);
        }
        out
    }
}

fn push_entry(out: &mut String, key: &str, value: impl fmt::Display) {
    if !out.is_empty() {
        out.push(CONFIG_SEP);
    }
    let _ = write!(out, "{}{}{}", key, CONFIG_KV_SEP, value);
}

impl fmt::Display for PersonalName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
