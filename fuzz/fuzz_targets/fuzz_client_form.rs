#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Arbitrary JSON: errors are fine, panics are bugs.
        if let Ok(form) = serde_json::from_str::<ibercheck::client::ClientForm>(s) {
            let _ = ibercheck::client::validate_client_form(&form);
            let _ = form.submit(chrono::Utc::now());
        }
    }
});
