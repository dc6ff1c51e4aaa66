//! Copying the result to the system clipboard.
//!
//! The clipboard is a convenience: when it cannot be reached the user is told
//! so and the program still succeeds.

use std::io::{self, Write};

/// Puts `text` on the system clipboard as plain text.
///
/// On X11 and Wayland the clipboard is owned by this process, so the text
/// only outlives `wt` if a clipboard manager takes it over before exit.
/// Without one, the copy is lost when the program ends even though it was
/// reported as successful.
pub fn copy_to_system(text: &str) -> Result<(), arboard::Error> {
    let mut clipboard = arboard::Clipboard::new()?;
    clipboard.set_text(text)
}

/// Tells the user whether the copy worked.
pub fn report<W: Write>(writer: &mut W, outcome: Result<(), arboard::Error>) -> io::Result<()> {
    match outcome {
        Ok(()) => writeln!(writer, "The result has been copied to your clipboard."),
        Err(e) => {
            tracing::debug!(error = %e, "clipboard unavailable");
            writeln!(writer, "Clipboard functionality is not available :(")
        }
    }
}
