//! Interactive main menu.

use std::io::{BufRead, Write};
use std::path::Path;

use color_eyre::eyre::Result;
use filebatch_ops::{BatchEngine, DirectoryExplorer, FileSelector, FilesystemGateway, Navigation};

use crate::console::Console;

const MENU: &str = "\n--- File Explorer ---\n\
                    1. Display Directory\n\
                    2. Navigate\n\
                    3. Go to Parent Directory\n\
                    4. Select Files\n\
                    5. Copy\n\
                    6. Move\n\
                    7. Delete\n\
                    8. Quit";

/// What the loop does after an action.
enum Flow {
    Continue,
    Quit,
}

/// Ties the explorer, the selection and the batch engine to the console.
pub struct Menu<F, R, W> {
    explorer: DirectoryExplorer,
    engine: BatchEngine<FileSelector, F, Console<R, W>>,
}

impl<F, R, W> Menu<F, R, W>
where
    F: FilesystemGateway,
    R: BufRead,
    W: Write,
{
    pub fn new(
        explorer: DirectoryExplorer,
        engine: BatchEngine<FileSelector, F, Console<R, W>>,
    ) -> Self {
        Self { explorer, engine }
    }

    /// Run until the user quits or input ends.
    pub fn run(&mut self) -> Result<()> {
        loop {
            self.console().say(MENU)?;
            let Some(choice) = self.console().ask("Your choice: ")? else {
                self.console().say("\nGoodbye!")?;
                return Ok(());
            };

            match self.dispatch(choice.trim()) {
                Ok(Flow::Continue) => {}
                Ok(Flow::Quit) => {
                    self.console().say("Goodbye!")?;
                    return Ok(());
                }
                Err(e) => self.console().say(format!("An error occurred: {e}"))?,
            }
        }
    }

    fn dispatch(&mut self, choice: &str) -> Result<Flow> {
        match choice {
            "1" => self.display()?,
            "2" => self.navigate()?,
            "3" => self.parent()?,
            "4" => self.select()?,
            "5" => {
                if let Some(dest) = self.ask_destination("copying")? {
                    let count = self.engine.copy_files(&dest);
                    self.after_batch(format!("{count} file(s) copied"))?;
                }
            }
            "6" => {
                if let Some(dest) = self.ask_destination("moving")? {
                    let count = self.engine.move_files(&dest);
                    self.after_batch(format!("{count} file(s) moved"))?;
                }
            }
            "7" => {
                let count = self.engine.delete_files();
                self.after_batch(format!("{count} file(s)/folder(s) deleted"))?;
            }
            "8" => return Ok(Flow::Quit),
            _ => self.console().say("Invalid choice")?,
        }
        Ok(Flow::Continue)
    }

    fn console(&mut self) -> &mut Console<R, W> {
        self.engine.interaction_mut()
    }

    fn display(&mut self) -> Result<()> {
        let current = self.explorer.current_path().display().to_string();
        let rows: Vec<String> = self
            .explorer
            .entries()
            .iter()
            .enumerate()
            .map(|(index, entry)| {
                let icon = if entry.is_dir { "📁" } else { "📄" };
                format!("{index}. {icon} {}: {}", entry.kind_label(), entry.name)
            })
            .collect();

        let console = self.console();
        console.say(format!("\nCurrent Directory: {current}"))?;
        console.say("-".repeat(50))?;
        for row in rows {
            console.say(row)?;
        }
        Ok(())
    }

    fn navigate(&mut self) -> Result<()> {
        let Some(answer) = self.console().ask("Enter navigation index: ")? else {
            return Ok(());
        };
        let Ok(index) = answer.trim().parse::<usize>() else {
            self.console().say(format!("Not a valid index: {}", answer.trim()))?;
            return Ok(());
        };

        match self.explorer.navigate(index)? {
            Navigation::Entered(_) => self.display()?,
            Navigation::NotADirectory(name) => {
                self.console().say(format!("Cannot open file {name}"))?
            }
            Navigation::OutOfRange => {}
        }
        Ok(())
    }

    fn parent(&mut self) -> Result<()> {
        if !self.explorer.go_to_parent()? {
            self.console().say("Already at the filesystem root")?;
        }
        self.display()
    }

    fn select(&mut self) -> Result<()> {
        self.display()?;
        let Some(answer) = self
            .console()
            .ask("Enter file indices to select (comma-separated): ")?
        else {
            return Ok(());
        };

        let (indices, rejected) = parse_indices(&answer);
        if !rejected.is_empty() {
            self.console()
                .say(format!("Ignoring invalid indices: {}", rejected.join(", ")))?;
        }

        let names: Vec<String> = self
            .engine
            .selection_mut()
            .select_by_indices(&indices, &self.explorer)
            .iter()
            .map(|path| display_name(path))
            .collect();

        let console = self.console();
        console.say("Selected files:")?;
        for name in names {
            console.say(format!(" - {name}"))?;
        }
        Ok(())
    }

    fn ask_destination(&mut self, verb: &str) -> Result<Option<String>> {
        let answer = self
            .console()
            .ask(&format!("Enter destination path for {verb}: "))?;
        Ok(answer.map(|a| a.trim().to_string()))
    }

    fn after_batch(&mut self, summary: String) -> Result<()> {
        self.console().say(summary)?;
        // Copies, moves and deletes may have changed the listing
        self.explorer.refresh()?;
        Ok(())
    }
}

/// Split comma/whitespace separated indices, returning the unparsable tokens.
fn parse_indices(input: &str) -> (Vec<usize>, Vec<String>) {
    let mut indices = Vec::new();
    let mut rejected = Vec::new();

    for token in input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|t| !t.is_empty())
    {
        match token.parse() {
            Ok(index) => indices.push(index),
            Err(_) => rejected.push(token.to_string()),
        }
    }

    (indices, rejected)
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
