#![no_main]

use coachwatch::demo::DemoParser;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Arbitrary bytes must end in an event stream or an error, never a panic
    let mut parser = DemoParser::new(data);
    while let Ok(Some(_)) = parser.next_event() {}
});
