use dialoguer::{theme::ColorfulTheme, Confirm, Editor, Input, MultiSelect};
use eyre::{eyre, Context, Result};

pub fn user_select<S: ToString>(prompt: &str, items: &[S], default: usize) -> Result<usize> {
    let selection = dialoguer::Select::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .default(default)
        .items(items)
        .interact_opt()
        .wrap_err_with(|| eyre!("User selection cancelled"))?;

    if let Some(index) = selection {
        Ok(index)
    } else {
        Err(eyre!("No selection made - cancelling operation"))
    }
}

pub fn user_multi_select<S: ToString>(prompt: &str, items: &[S]) -> Result<Vec<usize>> {
    MultiSelect::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .items(items)
        .interact()
        .wrap_err_with(|| eyre!("User selection cancelled"))
}

/// Single line input, prefilled with `initial` which the user may edit or clear.
pub fn user_input(prompt: &str, initial: &str) -> Result<String> {
    Input::<String>::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .with_initial_text(initial)
        .allow_empty(true)
        .interact_text()
        .wrap_err_with(|| eyre!("User input cancelled"))
}

/// Multi line input through the user's editor, an unsaved edit keeps `initial`.
pub fn user_text(prompt: &str, initial: &str) -> Result<String> {
    if !user_confirm(&format!("Edit {prompt}?"), initial.is_empty())? {
        return Ok(initial.to_owned());
    }

    let text = Editor::new()
        .edit(initial)
        .wrap_err_with(|| eyre!("Cannot open an editor for the {prompt}"))?;

    Ok(text.map_or_else(|| initial.to_owned(), |t| t.trim_end().to_owned()))
}

pub fn user_confirm(prompt: &str, default: bool) -> Result<bool> {
    Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .default(default)
        .interact()
        .wrap_err_with(|| eyre!("User input cancelled"))
}
