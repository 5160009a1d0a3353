use std::io::{self, Write};
use std::process::{Child, Command, ExitStatus, Output, Stdio};

use crate::error::JqError;

fn spawn_with_input(mut command: Command, input: &[u8]) -> io::Result<Child> {
    let mut child = command.stdin(Stdio::piped()).spawn()?;
    write_input(&mut child, input)?;
    Ok(child)
}

/// Write `input` to the child's stdin and close it. On a failed write the
/// child is reaped before the error is returned.
fn write_input(child: &mut Child, input: &[u8]) -> io::Result<()> {
    // Dropping stdin closes the pipe so the child sees EOF
    if let Some(mut stdin) = child.stdin.take()
        && let Err(e) = stdin.write_all(input)
    {
        drop(stdin);
        let _ = child.wait();
        return Err(e);
    }
    Ok(())
}

/// Run `program`, feed `input` on stdin, and collect its output
pub(crate) fn pipe_through(program: &str, args: &[&str], input: &[u8]) -> io::Result<Output> {
    let mut command = Command::new(program);
    command
        .args(args)
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());
    spawn_with_input(command, input)?.wait_with_output()
}

/// Run `program` with `input` on stdin and discard its output.
///
/// Only the direct child is awaited. Tools that fork a daemon to keep
/// serving the data (xclip, wl-copy) would otherwise hold captured pipes open.
pub(crate) fn feed(program: &str, args: &[&str], input: &[u8]) -> io::Result<ExitStatus> {
    let mut command = Command::new(program);
    command.args(args).stdout(Stdio::null()).stderr(Stdio::null());
    spawn_with_input(command, input)?.wait()
}

/// Pipe JSON through jq with the given filter expression
pub(crate) fn filter_json(json: &str, filter: &str) -> Result<String, JqError> {
    let output = pipe_through("jq", &[filter], json.as_bytes()).map_err(|e| {
        if e.kind() == io::ErrorKind::NotFound {
            JqError::NotFound
        } else {
            JqError::Io(e)
        }
    })?;

    if output.status.success() {
        String::from_utf8(output.stdout).map_err(JqError::Utf8)
    } else {
        let stderr = String::from_utf8_lossy(&output.stderr);
        Err(JqError::Filter(stderr.trim().to_string()))
    }
}
