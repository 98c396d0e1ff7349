use std::io::{BufRead, Write};

use rescue::SearchField;
use tracing::{debug, instrument};

use super::session::{CommandError, Session};

impl<R: BufRead, W: Write> Session<R, W> {
    /// Searches both lists by name, type or acquisition country.
    #[instrument(level = "debug", skip(self))]
    pub(super) fn search_animals(&mut self) -> Result<(), CommandError> {
        let field: SearchField = self.prompt.ask("Search by (name/type/country): ")?.parse()?;
        let value = self.prompt.ask("Enter value to search: ")?;

        let matches: Vec<String> = self
            .repository
            .search(field, &value)
            .map(|animal| {
                format!(
                    "{}: {} | {} | {}",
                    animal.category().label(),
                    animal.name(),
                    animal.profile.training_status,
                    animal.profile.acquisition_country
                )
            })
            .collect();
        debug!(?field, count = matches.len(), "search complete");

        if matches.is_empty() {
            self.warn("No matching animal found.")?;
        }
        for line in matches {
            self.prompt.say(line)?;
        }
        Ok(())
    }
}
