use super::{PersonalName, Tag};
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::BTreeMap;

impl Serialize for PersonalName {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut elements = BTreeMap::new();
        for tag in Tag::ALL {
            if matches!(self.settings().index(tag), Some(i) if i != 0) {
                elements.insert(tag.code(), self.main_name_element(tag).unwrap_or_default());
            }
        }
        let alt_names: Vec<String> = (1..=self.count_alt_names() as i64)
            .map(|i| self.alt_name(i).unwrap_or_default())
            .collect();

        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("name", self.as_str())?;
        map.serialize_entry("config", &self.config_str())?;
        map.serialize_entry("main_name", &self.main_name())?;
        if !elements.is_empty() {
            map.serialize_entry("elements", &elements)?;
        }
        if !alt_names.is_empty() {
            map.serialize_entry("alt_names", &alt_names)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use crate::PersonalName;

    #[test]
    fn serializes_elements_and_alt_names() {
        let name =
            PersonalName::new("Gauri Nanda (clocky)", "N1=1;NS=2").unwrap();
        let json = serde_json::to_value(&name).unwrap();
        assert_eq!("Gauri Nanda (clocky)", json["name"]);
        assert_eq!("N1=1;NS=2", json["config"]);
        assert_eq!("Gauri Nanda", json["main_name"]);
        assert_eq!("Gauri", json["elements"]["N1"]);
        assert_eq!("Nanda", json["elements"]["NS"]);
        assert_eq!("clocky", json["alt_names"][0]);
    }

    #[test]
    fn empty_sections_are_omitted() {
        let name = PersonalName::new("Gauri Nanda", "").unwrap();
        let json = serde_json::to_value(&name).unwrap();
        assert!(json.get("elements").is_none());
        assert!(json.get("alt_names").is_none());
    }
}
