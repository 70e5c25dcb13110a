//! Candidate list compiled in by `build.rs`

include!(concat!(env!("OUT_DIR"), "/wordle.rs"));
