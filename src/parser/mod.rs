pub mod lines;
pub mod structure;

use lines::{classify_lines, Line};
use structure::Structure;

/// Two-pass view of a document: raw lines → classified lines → structure.
pub fn parse(raw: &[&str]) -> (Vec<Line>, Structure) {
    let lines = classify_lines(raw);
    let structure = structure::detect(&lines);
    (lines, structure)
}
