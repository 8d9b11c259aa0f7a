#![no_main]
use libfuzzer_sys::fuzz_target;
use personal_name::PersonalName;

fuzz_target!(|data: [String; 3]| {
    let [name, config, template] = data;
    if let Ok(name) = PersonalName::new(&name, &config) {
        name.formatted_name(&template);
    }
});
