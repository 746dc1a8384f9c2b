use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use log::debug;

use crate::{text::extend_from_line, LoadError};

/// Read every whitespace-separated integer from the file at `path`.
///
/// The file is read line by line and closed before this returns, whatever
/// the outcome. A [`LoadError::Parse`] still carries the integers read before
/// the bad token, see [`LoadError::parsed`].
pub fn load_ints<P>(path: P) -> Result<Vec<i64>, LoadError>
where
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let io_error = |source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    };
    let file = File::open(path).map_err(io_error)?;
    let mut reader = BufReader::new(file);

    let mut parsed = Vec::new();
    let mut line = Vec::new();
    let mut line_no = 0;
    // Raw bytes, so a non-UTF-8 token is a bad token rather than a read failure.
    while reader.read_until(b'\n', &mut line).map_err(io_error)? > 0 {
        line_no += 1;
        extend_from_line(&mut parsed, &line, line_no).map_err(|error| LoadError::Parse {
            path: path.to_path_buf(),
            error,
        })?;
        line.clear();
    }
    debug!("loaded {} integers from {}", parsed.len(), path.display());
    Ok(parsed)
}
