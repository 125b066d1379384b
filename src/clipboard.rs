use log::debug;

use crate::errors::ClipboardError;

pub fn copy(text: &str) -> Result<(), ClipboardError> {
    let mut ctx = copypasta_ext::try_context().ok_or(ClipboardError::Unavailable)?;

    ctx.set_contents(text.to_string())
        .map_err(|e| ClipboardError::Copy(e.to_string()))?;
    debug!("copied {} characters to clipboard", text.chars().count());

    Ok(())
}
