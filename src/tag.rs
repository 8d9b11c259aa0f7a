use phf::phf_map;

/// The closed set of main-name element types.
///
/// Declaration order is significant: it is the order element types appear in
/// reverse lookups and in regenerated configuration strings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Tag {
    /// `N1` - first name
    FirstName,
    /// `NM` - middle name
    MiddleName,
    /// `NS` - surname
    Surname,
    /// `F1` - first parent's or father's first name
    FatherFirstName,
    /// `FD` - father's name delimiter (e.g. Anak, de, ibn, von)
    FatherDelimiter,
    /// `FN` - father's name as a single element
    FatherName,
    /// `FS` - father's surname
    FatherSurname,
    /// `M1` - mother's first name
    MotherFirstName,
    /// `MD` - mother's name delimiter (e.g. y)
    MotherDelimiter,
    /// `MN` - mother's name as a single element
    MotherName,
    /// `MS` - mother's surname
    MotherSurname,
    /// `OA` - absolute ordinal (I, II, III, ...)
    AbsoluteOrdinal,
    /// `OR` - relative ordinal (Jr., Sr.)
    RelativeOrdinal,
    /// `S1` - second parent's first name
    SecondParentFirstName,
    /// `SD` - second parent's name delimiter
    SecondParentDelimiter,
    /// `SN` - second parent's name as a single element
    SecondParentName,
    /// `SS` - second parent's surname
    SecondParentSurname,
    /// `SX` - suffix start (fallback only)
    SuffixStart,
}

static TAG_BY_CODE: phf::Map<&'static str, Tag> = phf_map! {
    "N1" => Tag::FirstName,
    "NM" => Tag::MiddleName,
    "NS" => Tag::Surname,
    "F1" => Tag::FatherFirstName,
    "FD" => Tag::FatherDelimiter,
    "FN" => Tag::FatherName,
    "FS" => Tag::FatherSurname,
    "M1" => Tag::MotherFirstName,
    "MD" => Tag::MotherDelimiter,
    "MN" => Tag::MotherName,
    "MS" => Tag::MotherSurname,
    "OA" => Tag::AbsoluteOrdinal,
    "OR" => Tag::RelativeOrdinal,
    "S1" => Tag::SecondParentFirstName,
    "SD" => Tag::SecondParentDelimiter,
    "SN" => Tag::SecondParentName,
    "SS" => Tag::SecondParentSurname,
    "SX" => Tag::SuffixStart,
};

impl Tag {
    /// Every element type, in declaration order.
    pub const ALL: [Tag; 18] = [
        Tag::FirstName,
        Tag::MiddleName,
        Tag::Surname,
        Tag::FatherFirstName,
        Tag::FatherDelimiter,
        Tag::FatherName,
        Tag::FatherSurname,
        Tag::MotherFirstName,
        Tag::MotherDelimiter,
        Tag::MotherName,
        Tag::MotherSurname,
        Tag::AbsoluteOrdinal,
        Tag::RelativeOrdinal,
        Tag::SecondParentFirstName,
        Tag::SecondParentDelimiter,
        Tag::SecondParentName,
        Tag::SecondParentSurname,
        Tag::SuffixStart,
    ];

    /// Looks up an element type by its two-letter configuration code.
    #[inline]
    pub fn from_code(code: &str) -> Option<Tag> {
        TAG_BY_CODE.get(code).copied()
    }

    /// The two-letter code used for this element type in configuration
    /// strings and format templates.
    pub fn code(self) -> &'static str {
        match self {
            Tag::FirstName => "N1",
            Tag::MiddleName => "NM",
            Tag::Surname => "NS",
            Tag::FatherFirstName => "F1",
            Tag::FatherDelimiter => "FD",
            Tag::FatherName => "FN",
            Tag::FatherSurname => "FS",
            Tag::MotherFirstName => "M1",
            Tag::MotherDelimiter => "MD",
            Tag::MotherName => "MN",
            Tag::MotherSurname => "MS",
            Tag::AbsoluteOrdinal => "OA",
            Tag::RelativeOrdinal => "OR",
            Tag::SecondParentFirstName => "S1",
            Tag::SecondParentDelimiter => "SD",
            Tag::SecondParentName => "SN",
            Tag::SecondParentSurname => "SS",
            Tag::SuffixStart => "SX",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_round_trip() {
        for tag in Tag::ALL {
            assert_eq!(Some(tag), Tag::from_code(tag.code()));
        }
    }

    #[test]
    fn unknown_codes() {
        assert_eq!(None, Tag::from_code("NN"));
        assert_eq!(None, Tag::from_code("n1"));
        assert_eq!(None, Tag::from_code(""));
        assert_eq!(None, Tag::from_code("XX"));
    }

    #[test]
    fn discriminants_match_declaration_order() {
        for (i, tag) in Tag::ALL.iter().enumerate() {
            assert_eq!(i, *tag as usize);
        }
    }
}
