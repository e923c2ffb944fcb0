#![no_main]

use libfuzzer_sys::fuzz_target;
use rationals::Rational;

fuzz_target!(|data: &[u8]| {
    if data.len() > 4 * 1024 {
        return;
    }
    let text = String::from_utf8_lossy(data);
    if let Ok(value) = Rational::parse(&text) {
        let rendered = value.to_string();
        let reparsed = Rational::parse(&rendered).expect("rendered text parses");
        assert_eq!(reparsed, value);
        assert_eq!(reparsed.to_string(), rendered);
    }
});
