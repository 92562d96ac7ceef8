#![no_main]

use coachwatch::analysis::analyze;
use coachwatch::detect::DetectorConfig;
use coachwatch::report::ReportEmitter;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let mut emitter = ReportEmitter::new(Box::new(std::io::sink()));
    let _ = analyze(data, DetectorConfig::default(), &mut emitter);
});
