// word-neighbours: collect nearest neighbours for every word in a word
// vector model.
//
// This is the library root. The binary in main.rs is a thin CLI over
// `pipeline::run`; everything testable lives here.

pub mod error;
pub mod extract;
pub mod model;
pub mod output;
pub mod pipeline;
pub mod similarity;
