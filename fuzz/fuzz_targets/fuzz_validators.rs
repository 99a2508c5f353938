#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Must not panic: every validator is total.
        let _ = ibercheck::validate_dni_or_nie(s);
        let _ = ibercheck::validate_spanish_iban(s);
        let _ = ibercheck::bank_name_from_iban(s);
        let _ = ibercheck::validate_spanish_phone(s);

        let formatted = ibercheck::format_iban(s);
        assert_eq!(ibercheck::format_iban(&formatted), formatted);
    }
});
