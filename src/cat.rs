//! Copy a file to the output with its close registered as a scope-exit action.

use std::fs::File;
use std::io::{ErrorKind, Read, Write};
use std::path::Path;
use std::rc::Rc;

use anyhow::{Context, Result, bail};
use tracing::debug;

use crate::defer::DeferStack;

pub const CHUNK_SIZE: usize = 2048;

/// Open `path`, register its close on `scope`, then stream it to the scope's
/// sink in [`CHUNK_SIZE`] reads until end-of-stream. Returns the number of
/// bytes copied.
///
/// The handle is released exactly once, by the registered action, whenever
/// `scope` unwinds: at normal completion or on the error path.
pub fn cat_file<W: Write>(scope: &mut DeferStack<'_, W>, path: Option<&Path>) -> Result<u64> {
    let Some(path) = path else {
        bail!("no file was specified");
    };
    let file = File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    debug!(path = %path.display(), "opened file");

    let handle = Rc::new(file);
    let guard = Rc::clone(&handle);
    let shown = path.display().to_string();
    scope.defer(move |out| {
        writeln!(out, "Defer in main() is called here")?;
        writeln!(out)?;
        drop(guard);
        debug!(path = %shown, "closed file");
        Ok(())
    });

    copy_chunks(&*handle, scope.out())
        .with_context(|| format!("failed to read {}", path.display()))
}

/// Copy `reader` into `out` one fixed-size read at a time. Interrupted reads
/// are retried; any other read error ends the copy.
pub fn copy_chunks<R: Read, W: Write>(mut reader: R, out: &mut W) -> std::io::Result<u64> {
    let mut data = [0u8; CHUNK_SIZE];
    let mut total = 0u64;
    loop {
        let count = match reader.read(&mut data) {
            Ok(count) => count,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        if count == 0 {
            return Ok(total);
        }
        out.write_all(&data[..count])?;
        total += count as u64;
    }
}
