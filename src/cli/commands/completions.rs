//! Shell completions generation.

use clap::CommandFactory;
use clap_complete::Shell;

use crate::cli::args::Cli;
use crate::error::DeskError;

/// Execute the completions command.
///
/// # Errors
///
/// Returns an error if the generated script is not valid UTF-8.
pub fn completions(shell: Shell, install: bool) -> Result<String, DeskError> {
    if install {
        Ok(install_instructions(shell))
    } else {
        generate_completions(shell)
    }
}

/// Generate the completion script for `shell`.
///
/// # Errors
///
/// Returns an error if the generated script is not valid UTF-8.
pub fn generate_completions(shell: Shell) -> Result<String, DeskError> {
    let mut cmd = Cli::command();
    let mut buf = Vec::new();
    clap_complete::generate(shell, &mut cmd, "focusdesk", &mut buf);
    String::from_utf8(buf).map_err(|e| DeskError::Parse(format!("UTF-8 error: {e}")))
}

/// How to load the completion script in `shell`.
#[must_use]
pub fn install_instructions(shell: Shell) -> String {
    match shell {
        Shell::Bash => "# Add to ~/.bashrc:
source <(focusdesk completions bash)"
            .to_string(),
        Shell::Zsh => "# Save to your fpath, then restart the shell:
focusdesk completions zsh > ~/.zsh/completions/_focusdesk
# In ~/.zshrc, before compinit:
fpath=(~/.zsh/completions $fpath)"
            .to_string(),
        Shell::Fish => {
            "focusdesk completions fish > ~/.config/fish/completions/focusdesk.fish".to_string()
        }
        Shell::PowerShell => "# Add to your PowerShell profile ($PROFILE):
focusdesk completions powershell | Out-String | Invoke-Expression"
            .to_string(),
        Shell::Elvish => "focusdesk completions elvish > ~/.config/elvish/lib/focusdesk.elv
# Then in rc.elv:
use focusdesk"
            .to_string(),
        _ => format!("focusdesk completions {shell} > <your completions directory>"),
    }
}
