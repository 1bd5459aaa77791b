use heapless::Vec;

use crate::Error;

/// Split `line` on runs of spaces and tabs.
///
/// All or nothing: a line with more than `A` tokens yields
/// [`Error::TooManyArguments`] and no partial result. An empty or blank line
/// gives an empty vector.
pub fn tokenize<const A: usize>(line: &str) -> Result<Vec<&str, A>, Error> {
    let mut argv = Vec::new();
    for token in line.split([' ', '\t']).filter(|t| !t.is_empty()) {
        argv.push(token).map_err(|_| Error::TooManyArguments)?;
    }
    Ok(argv)
}
