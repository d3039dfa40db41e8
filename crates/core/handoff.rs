use bookworm::Email;

use clipboard::{ClipboardContext, ClipboardProvider};
use eyre::{eyre, Context, Result};
use log::trace;

/// Write `text` to the system clipboard.
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    let mut ctx: ClipboardContext =
        ClipboardProvider::new().map_err(|e| eyre!("Cannot access the clipboard: {e}"))?;
    ctx.set_contents(text.to_owned())
        .map_err(|e| eyre!("Cannot write to the clipboard: {e}"))
}

/// Hand the email to the default mail client as a `mailto:` link.
pub fn open_mail_client(email: &Email) -> Result<()> {
    let uri = email.mailto_uri();
    trace!("Opening {uri}");
    open::that_detached(&uri).wrap_err("Cannot open the default mail client")
}
