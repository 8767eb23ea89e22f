use anyhow::{Context, Result};
use dialoguer::{theme::ColorfulTheme, Input};
use moviediff::rename::{Answer, Confirm, RenameProposal};

/// Asks on the terminal before each rename.
#[derive(Default)]
pub struct TerminalConfirm {
    theme: ColorfulTheme,
}

impl Confirm for TerminalConfirm {
    fn confirm(&mut self, proposal: &RenameProposal) -> Result<Answer> {
        let input: String = Input::with_theme(&self.theme)
            .with_prompt(prompt_text(proposal))
            .validate_with(validate_answer)
            .interact_text()
            .context("Failed to read answer (use --yes or --dry-run outside a terminal)")?;

        Answer::parse(&input).with_context(|| format!("Invalid answer: {:?}", input))
    }
}

fn prompt_text(proposal: &RenameProposal) -> String {
    format!(
        "Rename\n\t{}\nto\t{}\n? [y/j/n/c] (yes/ja/no/nein/cancel)",
        proposal.from.display(),
        proposal.to.display()
    )
}

#[allow(clippy::ptr_arg)]
fn validate_answer(input: &String) -> Result<(), &'static str> {
    Answer::parse(input).map(|_| ()).ok_or("Invalid answer.")
}
