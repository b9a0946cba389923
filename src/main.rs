//! tidalscript — demo session generator.
//!
//! Builds the two-synth example session (a supersaw layered with a
//! double-speed superpwm on `d1`, 140 BPM) and prints the resulting Tidal
//! script to stdout.

use tidalscript::synth::{SUPERPWM, SUPERSAW};
use tidalscript::{Pattern, Synth, TidalSession, TidalTranspiler, TidalValue, TranspilerConfig};

const BPM: f64 = 140.0;

fn build_session() -> Result<TidalSession, Box<dyn std::error::Error>> {
    let supersaw = Synth::new(
        &SUPERSAW,
        [
            ("cutoff", TidalValue::Int(1200)),
            ("detune", TidalValue::Float(0.4)),
        ],
    )?
    .to_pattern();
    let pwm = Synth::new(&SUPERPWM, [("pwidth", 0.7)])?.to_pattern().fast(2);

    let mut session = TidalSession::new();
    session.set_bpm(BPM);
    session.set_stream("d1", Pattern::stack([&supersaw, &pwm]));
    Ok(session)
}

fn main() {
    eprintln!("tidalscript v{} — demo session", env!("CARGO_PKG_VERSION"));

    let session = match build_session() {
        Ok(s) => s,
        Err(e) => {
            eprintln!("failed to build session: {e}");
            std::process::exit(1);
        }
    };

    let transpiler = TidalTranspiler::with_config(TranspilerConfig {
        header: Some(format!("-- generated by tidalscript ({BPM} BPM)")),
        footer: None,
    });

    println!("{}", transpiler.transpile(&session));
}
