#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let s = String::from_utf8_lossy(data);
    if let Ok(config) = jobform::WizardConfig::from_yaml(&s) {
        assert!(config.check().is_ok(), "from_yaml returned an unchecked config");
    }
});
