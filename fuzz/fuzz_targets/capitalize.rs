#![no_main]
use libfuzzer_sys::fuzz_target;
use nomen::capitalize;

fuzz_target!(|data: &str| {
    let once = capitalize(data);
    assert_eq!(once, capitalize(&once));
});
