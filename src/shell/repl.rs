//! Line-mode read-eval-print loop over any reader/writer pair.

use std::io::{self, BufRead, Write};

use super::Shell;

pub const BANNER: &str = "\
AtomVM Interactive REPL
Commands: zero, set <path> <value>, get <path>, dump, exit
";

/// Run until `exit`/`quit` or end of input.
///
/// Command output goes to `out`; `ERROR:` lines, warnings and path
/// diagnostics go to `err`. The prompt is written to `out` before each
/// line is read. A line that is not valid UTF-8 is reported on `err` and
/// skipped.
pub fn run<R, W, E>(shell: &mut Shell, mut input: R, mut out: W, mut err: E) -> io::Result<()>
where
    R: BufRead,
    W: Write,
    E: Write,
{
    writeln!(out, "{}", BANNER)?;
    let mut buf = Vec::new();
    loop {
        write!(out, "{}", shell.config().prompt)?;
        out.flush()?;
        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        let line = match std::str::from_utf8(&buf) {
            Ok(line) => line.trim_end_matches(['\n', '\r']),
            Err(e) => {
                tracing::debug!(error = %e, "undecodable input line");
                writeln!(err, "Error: input line is not valid UTF-8 ({})", e)?;
                continue;
            }
        };
        let reply = shell.execute_line(line);
        out.write_all(reply.stdout.as_bytes())?;
        err.write_all(reply.stderr.as_bytes())?;
        if let Some(error) = &reply.error {
            let diag = error.to_diagnostic();
            err.write_all(diag.render_to_string("<path>", error.path()).as_bytes())?;
        }
        if reply.exit {
            break;
        }
    }
    Ok(())
}
