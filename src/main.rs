//! filebatch - An interactive terminal file manager with batch operations.
//!
//! Usage:
//!   fbatch [PATH]                   Browse PATH (defaults to the home directory)
//!   fbatch --trash                  Send deletions to the system trash
//!   fbatch --ignore-all-scope batch Forget "ignore all" after each batch
//!   fbatch --help                   Show help

mod console;
mod logging;
mod menu;
mod settings;

use std::io;
use std::num::NonZeroUsize;
use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};
use color_eyre::eyre::{Context, Result};

use filebatch_core::IgnoreAllScope;
use filebatch_ops::{BatchEngine, DirectoryExplorer, FileSelector, StdFilesystem};

use crate::console::Console;
use crate::menu::Menu;
use crate::settings::Settings;

#[derive(Parser)]
#[command(
    name = "filebatch",
    version,
    about = "An interactive file manager with batch copy, move and delete",
    long_about = "filebatch lets you browse directories, select entries by index \
                  and copy, move or delete them in one go.\n\n\
                  When an item fails you choose to ignore it, ignore every later \
                  failure, or stop the batch."
)]
struct Cli {
    /// Directory to start in (defaults to the home directory)
    path: Option<PathBuf>,

    /// Move deleted items to the system trash
    #[arg(long)]
    trash: bool,

    /// How long an "ignore all errors" answer stays in effect
    #[arg(long, value_enum)]
    ignore_all_scope: Option<ScopeArg>,

    /// Reject paths longer than this many characters
    #[arg(long)]
    max_path_len: Option<NonZeroUsize>,

    /// Hide entries starting with a dot
    #[arg(long)]
    no_hidden: bool,

    /// Disable colored error output
    #[arg(long)]
    no_color: bool,

    /// Settings file (defaults to the user config directory)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ScopeArg {
    /// Until filebatch exits
    Engine,
    /// Only for the current batch
    Batch,
}

impl From<ScopeArg> for IgnoreAllScope {
    fn from(arg: ScopeArg) -> Self {
        match arg {
            ScopeArg::Engine => IgnoreAllScope::Engine,
            ScopeArg::Batch => IgnoreAllScope::Batch,
        }
    }
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    logging::init(cli.verbose)?;

    let mut settings = match &cli.config {
        Some(path) => Settings::load_from(path)?,
        None => Settings::load(),
    };
    apply_overrides(&mut settings, &cli);

    let start = cli
        .path
        .clone()
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."));
    let explorer = DirectoryExplorer::open_with_hidden(&start, settings.show_hidden)
        .with_context(|| format!("Cannot open {}", start.display()))?;

    let gateway = if settings.use_trash {
        StdFilesystem::with_trash()
    } else {
        StdFilesystem::new()
    };
    let console = Console::new(io::stdin().lock(), io::stdout()).with_color(settings.color);
    let engine = BatchEngine::with_config(FileSelector::new(), gateway, console, settings.engine);

    Menu::new(explorer, engine).run()?;

    Ok(())
}

/// Command-line flags win over the settings file.
fn apply_overrides(settings: &mut Settings, cli: &Cli) {
    if cli.trash {
        settings.use_trash = true;
    }
    if cli.no_hidden {
        settings.show_hidden = false;
    }
    if cli.no_color {
        settings.color = false;
    }
    if let Some(scope) = cli.ignore_all_scope {
        settings.engine.ignore_all_scope = scope.into();
    }
    if let Some(max) = cli.max_path_len {
        settings.engine.max_path_len = max.get();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_overrides_settings() {
        let cli = Cli::parse_from([
            "fbatch",
            "/tmp",
            "--trash",
            "--ignore-all-scope",
            "batch",
            "--max-path-len",
            "512",
            "--no-color",
        ]);
        let mut settings = Settings::default();
        apply_overrides(&mut settings, &cli);

        assert_eq!(cli.path, Some(PathBuf::from("/tmp")));
        assert!(settings.use_trash);
        assert!(!settings.color);
        assert!(settings.show_hidden);
        assert_eq!(settings.engine.ignore_all_scope, IgnoreAllScope::Batch);
        assert_eq!(settings.engine.max_path_len, 512);
    }

    #[test]
    fn test_cli_defaults_keep_settings() {
        let cli = Cli::parse_from(["fbatch"]);
        let mut settings = Settings::default();
        apply_overrides(&mut settings, &cli);

        assert!(cli.path.is_none());
        assert_eq!(settings.engine, filebatch_core::EngineConfig::default());
        assert!(!settings.use_trash);
    }

    #[test]
    fn test_cli_rejects_zero_max_path_len() {
        assert!(Cli::try_parse_from(["fbatch", "--max-path-len", "0"]).is_err());
    }
}
