#![no_main]

use jobform::{FormValues, SubmitAction};
use libfuzzer_sys::fuzz_target;
use serde_json::Value;

fuzz_target!(|data: &[u8]| {
    let Ok(Value::Object(map)) = serde_json::from_slice::<Value>(data) else {
        return;
    };
    let values: FormValues = map.into_iter().collect();

    let payload = jobform::normalize(&values, SubmitAction::Draft);
    let json = match jobform::serialize(&payload) {
        Ok(j) => j,
        Err(_) => return,
    };

    // Whatever normalize produced must be valid JSON again.
    if serde_json::from_str::<Value>(&json).is_err() {
        panic!(
            "Roundtrip failure: serialized payload is not JSON.\nPayload:\n{}",
            json.get(..500).unwrap_or(&json),
        );
    }
});
