//! Template rendering: expanding `{TAG}` placeholders into element values.

use crate::tag::Tag;
use crate::PersonalName;

const TAG_OPEN: char = '{';
const TAG_CLOSE: char = '}';

impl PersonalName {
    /// Renders the name through a template containing `{TAG}` placeholders.
    ///
    /// ```
    /// use personal_name::PersonalName;
    ///
    /// let name = PersonalName::new("Andre Konstantinovich Geim", "N1=1;FN=2;NS=3").unwrap();
    /// assert_eq!("Geim, Andre", name.formatted_name("{NS}, {N1}"));
    /// ```
    ///
    /// A placeholder naming a recognized element type is replaced with that
    /// element's value, or an empty string when the type is unset. Any other
    /// bracketed content passes through to the output unchanged, braces
    /// included, as does everything outside placeholders. Brace matching
    /// pairs each close brace with the nearest open brace before it, so
    /// nested or stray braces resolve to the innermost well-formed pair.
    /// Alternate names are not addressable from templates.
    pub fn formatted_name(&self, template: &str) -> String {
        let mut out = String::with_capacity(template.len());
        let mut emitted = 0;
        let mut search_from = 0;
        while emitted < template.len() {
            let open = match template[search_from..].find(TAG_OPEN) {
                Some(offset) => search_from + offset,
                None => break,
            };
            let close = match template[open..].find(TAG_CLOSE) {
                Some(offset) => open + offset,
                None => break,
            };
            // The innermost pair: the last open brace before this close.
            let open = open + template[open..close].rfind(TAG_OPEN).unwrap_or(0);

            out.push_str(&template[emitted..open]);
            let code = &template[open + TAG_OPEN.len_utf8()..close];
            match Tag::from_code(code) {
                Some(tag) => {
                    out.push_str(&self.main_name_element(tag).unwrap_or_default())
                }
                None => out.push_str(&template[open..=close]),
            }
            emitted = close + TAG_CLOSE.len_utf8();
            search_from = emitted;
        }
        out.push_str(&template[emitted..]);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn geim() -> PersonalName {
        PersonalName::new("Andre Konstantinovich Geim", "N1=1;FN=2;NS=3").unwrap()
    }

    #[test]
    fn substitutes_recognized_tags() {
        let name = geim();
        assert_eq!("Andre Geim", name.formatted_name("{N1} {NS}"));
        assert_eq!("Geim, Andre", name.formatted_name("{NS}, {N1}"));
        assert_eq!(
            "Andre Konstantinovich Geim",
            name.formatted_name("{N1} {FN} {NS}")
        );
    }

    #[test]
    fn unset_tags_become_empty() {
        let name = geim();
        assert_eq!("Andre  Geim", name.formatted_name("{N1} {NM} {NS}"));
    }

    #[test]
    fn unknown_tags_pass_through() {
        let name = geim();
        assert_eq!(
            "Andre {unknown} Geim",
            name.formatted_name("{N1} {unknown} {NS}")
        );
        assert_eq!("{NN}", name.formatted_name("{NN}"));
        assert_eq!("{}", name.formatted_name("{}"));
        assert_eq!("{n1}", name.formatted_name("{n1}"));
    }

    #[test]
    fn nested_braces_resolve_innermost() {
        let name = geim();
        assert_eq!("a{bAndrec", name.formatted_name("a{b{N1}c"));
        assert_eq!("{{Andre", name.formatted_name("{{{N1}"));
    }

    #[test]
    fn stray_braces_pass_through() {
        let name = geim();
        assert_eq!("}Andre", name.formatted_name("}{N1}"));
        assert_eq!("Andre{", name.formatted_name("{N1}{"));
        assert_eq!("no tags here", name.formatted_name("no tags here"));
        assert_eq!("{N1", name.formatted_name("{N1"));
        assert_eq!("N1}", name.formatted_name("N1}"));
    }

    #[test]
    fn remainder_appended_verbatim() {
        let name = geim();
        assert_eq!("Andre, esq.", name.formatted_name("{N1}, esq."));
    }

    #[test]
    fn empty_template() {
        assert_eq!("", geim().formatted_name(""));
    }

    #[test]
    fn substituted_values_are_space_converted() {
        let name = PersonalName::new("Soo Tsu_Hong (Lisa)", "NS=1;N1=2").unwrap();
        assert_eq!("Tsu Hong Soo", name.formatted_name("{N1} {NS}"));
    }
}
