//! The interactive menu loop.

use std::io::{self, BufRead, Write};

use rescue::{AnimalFile, DuplicateError, InvalidInputError, PersistenceError, Repository};
use tracing::{debug, instrument};

use super::{
    prompt::{Prompt, PromptError},
    terminal::Palette,
};

const MENU: &[&str] = &[
    "[1] Intake a new dog",
    "[2] Intake a new monkey",
    "[3] Reserve an animal",
    "[4] Print a list of all dogs",
    "[5] Print a list of all monkeys",
    "[6] Print a list of all animals that are not reserved",
    "[7] Search animal by name, type, or acquisition country",
    "[8] Save animal data to file",
    "[9] Load animal data from file",
    "[q] Quit application",
];

/// Why a command did not complete.
///
/// Everything except a closed or broken console is reported to the user and
/// the menu is shown again.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error(transparent)]
    Duplicate(#[from] DuplicateError),
    #[error(transparent)]
    Input(#[from] InvalidInputError),
    #[error("Error saving data: {0}")]
    Save(#[source] PersistenceError),
    #[error("Error loading data: {0}")]
    Load(#[source] PersistenceError),
    #[error(transparent)]
    Prompt(#[from] PromptError),
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// A menu entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Selection {
    IntakeDog,
    IntakeMonkey,
    Reserve,
    PrintDogs,
    PrintMonkeys,
    PrintAvailable,
    Search,
    Save,
    Load,
    Quit,
}

impl Selection {
    fn parse(input: &str) -> Option<Self> {
        let selection = match input.trim() {
            "1" => Self::IntakeDog,
            "2" => Self::IntakeMonkey,
            "3" => Self::Reserve,
            "4" => Self::PrintDogs,
            "5" => Self::PrintMonkeys,
            "6" => Self::PrintAvailable,
            "7" => Self::Search,
            "8" => Self::Save,
            "9" => Self::Load,
            q if q.eq_ignore_ascii_case("q") => Self::Quit,
            _ => return None,
        };
        Some(selection)
    }
}

/// One user's session: the animals, where they are saved, and the console.
pub struct Session<R, W> {
    pub(super) repository: Repository,
    pub(super) store: AnimalFile,
    pub(super) prompt: Prompt<R, W>,
    pub(super) palette: Palette,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub const fn new(
        repository: Repository,
        store: AnimalFile,
        prompt: Prompt<R, W>,
        palette: Palette,
    ) -> Self {
        Self {
            repository,
            store,
            prompt,
            palette,
        }
    }

    /// Shows the menu and runs commands until the user quits or input ends.
    ///
    /// # Errors
    ///
    /// Only fails if the console cannot be read or written.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            self.show_menu()?;
            let answer = match self.prompt.ask("Enter a menu selection: ") {
                Ok(answer) => answer,
                Err(PromptError::Closed) => {
                    debug!("input closed");
                    return Ok(());
                }
                Err(PromptError::Io(error)) => return Err(error),
            };

            let Some(selection) = Selection::parse(&answer) else {
                self.warn("Invalid option.")?;
                continue;
            };

            if selection == Selection::Quit {
                self.prompt.say("Goodbye.")?;
                return Ok(());
            }

            match self.dispatch(selection) {
                Ok(()) => {}
                Err(CommandError::Prompt(PromptError::Closed)) => {
                    debug!("input closed mid-command");
                    return Ok(());
                }
                Err(CommandError::Prompt(PromptError::Io(error)) | CommandError::Io(error)) => {
                    return Err(error);
                }
                Err(error) => {
                    debug!(%error, "command failed");
                    self.warn(&error.to_string())?;
                }
            }
        }
    }

    fn show_menu(&mut self) -> io::Result<()> {
        self.prompt.say("\n\n")?;
        let title = self.palette.heading("\t\t\t\tRescue Animal System Menu");
        self.prompt.say(title)?;
        for entry in MENU {
            self.prompt.say(entry)?;
        }
        self.prompt.say("")
    }

    #[instrument(level = "debug", skip(self))]
    fn dispatch(&mut self, selection: Selection) -> Result<(), CommandError> {
        match selection {
            Selection::IntakeDog => self.intake_dog(),
            Selection::IntakeMonkey => self.intake_monkey(),
            Selection::Reserve => self.reserve_animal(),
            Selection::PrintDogs => self.print_animals("dog"),
            Selection::PrintMonkeys => self.print_animals("monkey"),
            Selection::PrintAvailable => self.print_animals("available"),
            Selection::Search => self.search_animals(),
            Selection::Save => self.save_animals(),
            Selection::Load => self.load_animals(),
            Selection::Quit => Ok(()),
        }
    }

    pub(super) fn success(&mut self, message: &str) -> io::Result<()> {
        let message = self.palette.success(message);
        self.prompt.say(message)
    }

    pub(super) fn warn(&mut self, message: &str) -> io::Result<()> {
        let message = self.palette.warning(message);
        self.prompt.say(message)
    }

    #[cfg(test)]
    pub(super) const fn repository(&self) -> &Repository {
        &self.repository
    }

    #[cfg(test)]
    pub(super) fn into_output(self) -> W {
        self.prompt.into_output()
    }
}
