//! Theme command implementation.

use crate::cli::{ThemeAction, ThemeArgs};
use crate::error::Result;
use crate::output::Formatter;
use kubecompass_domain::{Theme, ThemeStore};

/// Execute the theme command.
pub fn execute_theme(args: ThemeArgs, store: &mut dyn ThemeStore, formatter: &Formatter) -> Result<()> {
    let theme = apply(args.action, store)?;
    println!("{}", formatter.theme(theme));
    Ok(())
}

fn apply(action: ThemeAction, store: &mut dyn ThemeStore) -> Result<Theme> {
    match action {
        ThemeAction::Show => Ok(store.get()),
        ThemeAction::Toggle => Ok(store.toggle()?),
        ThemeAction::Set { theme } => {
            let theme: Theme = theme.parse()?;
            store.set(theme)?;
            Ok(theme)
        }
    }
}
