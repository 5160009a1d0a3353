use std::io;
use std::sync::Mutex;
use std::thread::{self, JoinHandle};

use crate::utils::{debug_enabled, feed};

/// Host clipboard facility. Writes are fire-and-forget: failures never reach
/// the caller.
pub(crate) trait Clipboard {
    fn write_text(&self, text: String);
}

#[cfg(target_os = "macos")]
const COPY_TOOLS: &[(&str, &[&str])] = &[("pbcopy", &[])];

#[cfg(windows)]
const COPY_TOOLS: &[(&str, &[&str])] = &[("clip", &[])];

#[cfg(not(any(target_os = "macos", windows)))]
const COPY_TOOLS: &[(&str, &[&str])] = &[
    ("wl-copy", &[]),
    ("xclip", &["-selection", "clipboard"]),
    ("xsel", &["--clipboard", "--input"]),
];

/// Writes through the platform's clipboard command on a background thread
#[derive(Debug, Default)]
pub(crate) struct SystemClipboard {
    pending: Mutex<Vec<JoinHandle<()>>>,
}

impl SystemClipboard {
    /// Let in-flight writes finish before the process exits
    pub(crate) fn flush(&self) {
        let handles = match self.pending.lock() {
            Ok(mut pending) => std::mem::take(&mut *pending),
            Err(_) => return,
        };
        for handle in handles {
            let _ = handle.join();
        }
    }
}

impl Clipboard for SystemClipboard {
    fn write_text(&self, text: String) {
        let handle = thread::spawn(move || {
            if let Err(e) = copy_with_tools(COPY_TOOLS, &text)
                && debug_enabled()
            {
                eprintln!("[DEBUG] clipboard write failed: {e}");
            }
        });
        if let Ok(mut pending) = self.pending.lock() {
            pending.retain(|h| !h.is_finished());
            pending.push(handle);
        }
    }
}

/// Try each tool in order until one accepts the text
fn copy_with_tools(tools: &[(&str, &[&str])], text: &str) -> io::Result<()> {
    let mut last_err = io::Error::new(io::ErrorKind::NotFound, "no clipboard tool available");
    for (program, args) in tools {
        match feed(program, args, text.as_bytes()) {
            Ok(status) if status.success() => return Ok(()),
            Ok(status) => last_err = io::Error::other(format!("{program} exited with {status}")),
            Err(e) => last_err = e,
        }
    }
    Err(last_err)
}
