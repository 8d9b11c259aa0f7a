//! Element extraction: resolving numeric, negative, and named indices into
//! presentation-formatted substrings of the main name and alt-name list.

use crate::config::{CONFIG_SEP, NICKNAME_PREFIX};
use crate::error::NameError;
use crate::tag::Tag;
use crate::PersonalName;
use smallvec::SmallVec;

/// A main-name element request: a one-based position (negative counts from
/// the end) or an element-type code.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ElementRef<'a> {
    Index(i64),
    Type(&'a str),
}

impl<'a> From<i64> for ElementRef<'a> {
    fn from(index: i64) -> Self {
        ElementRef::Index(index)
    }
}

impl<'a> From<i32> for ElementRef<'a> {
    fn from(index: i32) -> Self {
        ElementRef::Index(index.into())
    }
}

impl<'a> From<&'a str> for ElementRef<'a> {
    fn from(code: &'a str) -> Self {
        ElementRef::Type(code)
    }
}

impl From<Tag> for ElementRef<'static> {
    fn from(tag: Tag) -> Self {
        ElementRef::Type(tag.code())
    }
}

/// An alternate-name request: a one-based entry index or a
/// nickname-network label.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AltRef<'a> {
    Index(i64),
    Network(&'a str),
}

impl<'a> From<i64> for AltRef<'a> {
    fn from(index: i64) -> Self {
        AltRef::Index(index)
    }
}

impl<'a> From<i32> for AltRef<'a> {
    fn from(index: i32) -> Self {
        AltRef::Index(index.into())
    }
}

impl<'a> From<&'a str> for AltRef<'a> {
    fn from(network: &'a str) -> Self {
        AltRef::Network(network)
    }
}

impl PersonalName {
    /// Joins the main-name elements from `start` to `end` inclusive with a
    /// space, converting space substitutes to spaces.
    ///
    /// Both bounds are one-based; negative bounds count from the end, `-1`
    /// being the last element. Mixing positive and non-positive bounds is
    /// rejected, except for the "from `start` to the last element" idiom
    /// `end == -1`. Bounds past the available elements are clamped: the
    /// extraction stops at the data it has and returns what was collected.
    pub fn main_name_elements_as_str(&self, start: i64, end: i64) -> Result<String, NameError> {
        self.main_name_elements_joined(start, end, " ")
    }

    /// [`main_name_elements_as_str`](Self::main_name_elements_as_str) with a
    /// caller-chosen separator.
    pub fn main_name_elements_joined(
        &self,
        start: i64,
        end: i64,
        sep: &str,
    ) -> Result<String, NameError> {
        if start > end && end != -1 {
            return Err(NameError::InvertedRange);
        }
        if (start < 1 && end >= 1) || (start >= 1 && end < 1 && end != -1) {
            return Err(NameError::MixedIndexSigns);
        }

        let count = self.count_main_name_elements();
        let (lo, hi) = window(count, start, end);
        let joined = self
            .main_name_elements()
            .skip(lo)
            .take(hi - lo)
            .collect::<SmallVec<[&str; 4]>>()
            .join(sep);
        Ok(self.settings().spaced(&joined).into_owned())
    }

    /// Returns a single main-name element, requested by one-based position
    /// or by element-type code.
    ///
    /// A recognized type code that was never assigned a position (or was
    /// assigned position 0) yields an empty string. A numeric position of 0
    /// fails with [`NameError::ZeroIndex`]; positions past the available
    /// elements clamp to an empty result.
    pub fn main_name_element<'a>(
        &self,
        element: impl Into<ElementRef<'a>>,
    ) -> Result<String, NameError> {
        let index = match element.into() {
            ElementRef::Type(code) => {
                if code == NICKNAME_PREFIX {
                    return Err(NameError::NicknameViaElement(code.to_string()));
                }
                let tag = Tag::from_code(code)
                    .ok_or_else(|| NameError::UnknownTag(code.to_string()))?;
                match self.settings().index(tag) {
                    Some(index) if index != 0 => index,
                    _ => return Ok(String::new()),
                }
            }
            ElementRef::Index(0) => return Err(NameError::ZeroIndex),
            ElementRef::Index(index) => index,
        };
        self.main_name_elements_as_str(index, index)
    }

    /// Reverse lookup: all element-type codes assigned to the position of
    /// the first main-name element equal to `element`, joined by `;` in
    /// declaration order.
    ///
    /// Spaces in `element` are converted to space substitutes before the
    /// comparison. The scan is linear over the main-name elements;
    /// duplicates resolve to the first match. An element that matches but
    /// holds no type assignments yields an empty string; an element not
    /// present in the main name fails with [`NameError::ElementNotFound`].
    pub fn main_name_element_type(&self, element: &str) -> Result<String, NameError> {
        let needle = self.settings().unspaced(element);
        for (position, candidate) in self.main_name_elements().enumerate() {
            if candidate != needle {
                continue;
            }
            let position = (position + 1) as i64;
            let mut out = String::new();
            for tag in Tag::ALL {
                if self.settings().index(tag) == Some(position) {
                    if !out.is_empty() {
                        out.push(CONFIG_SEP);
                    }
                    out.push_str(tag.code());
                }
            }
            return Ok(out);
        }
        Err(NameError::ElementNotFound(element.to_string()))
    }

    /// Returns an alternate name, requested by one-based entry index or by
    /// nickname-network label. Entries are whitespace-trimmed.
    ///
    /// An unbound network label yields an empty string, even when the name
    /// has no alt list; a bound index below 1 degrades to the first entry.
    /// A numeric request fails with [`NameError::NoAltNames`] when the name
    /// has no alt list and with [`NameError::ZeroIndex`] when the index is
    /// below 1; an index past the available entries yields an empty string.
    pub fn alt_name<'a>(&self, alt: impl Into<AltRef<'a>>) -> Result<String, NameError> {
        let index = match alt.into() {
            AltRef::Network(network) => match self.settings().nickname(network) {
                Some(index) => index,
                None => return Ok(String::new()),
            },
            AltRef::Index(index) => {
                if !self.has_alt_names() {
                    return Err(NameError::NoAltNames);
                }
                if index < 1 {
                    return Err(NameError::ZeroIndex);
                }
                index
            }
        };
        let skip = if index > 1 { (index - 1) as usize } else { 0 };
        Ok(self
            .alt_name_entries()
            .nth(skip)
            .map(|entry| entry.trim().to_string())
            .unwrap_or_default())
    }
}

/// Resolves a validated one-based range into a forward half-open element
/// window, clamped to `count`.
fn window(count: usize, start: i64, end: i64) -> (usize, usize) {
    let count_i = count as i128;
    let take = (end as i128 - start as i128 + 1).clamp(0, count_i) as usize;
    if start < 1 {
        // Counting from the end: skip |end| - 1 elements off the back,
        // then take the requested span ahead of them.
        let skip_back = (-(end as i128) - 1).clamp(0, count_i) as usize;
        let hi = count - skip_back;
        (hi.saturating_sub(take), hi)
    } else {
        let lo = (start as i128 - 1).min(count_i) as usize;
        let hi = if end == -1 {
            count
        } else {
            (lo + take).min(count)
        };
        (lo, hi.max(lo))
    }
}
