#![no_main]
use libfuzzer_sys::fuzz_target;
use personal_name::PersonalName;

fuzz_target!(|data: [String; 2]| {
    let [name, config] = data;
    if let Ok(name) = PersonalName::new(&name, &config) {
        let rebuilt = PersonalName::new(name.as_str(), &name.config_str()).unwrap();
        assert_eq!(name.config_str(), rebuilt.config_str());
        name.main_name();
        name.count_main_name_elements();
        name.count_alt_names();
    }
});
