use std::io::{BufRead, Write};

use rescue::Category;
use tracing::{info, instrument};

use super::session::{CommandError, Session};

impl<R: BufRead, W: Write> Session<R, W> {
    /// Reserves the first unreserved animal of a type serving in a country.
    #[instrument(level = "debug", skip(self))]
    pub(super) fn reserve_animal(&mut self) -> Result<(), CommandError> {
        let category = self.prompt.ask("Enter animal type (dog/monkey): ")?;
        let country = self.prompt.ask("Enter in-service country: ")?;
        let category: Category = category.parse()?;

        let reserved = self
            .repository
            .reserve(category, &country)
            .map(|animal| animal.name().to_string());

        match reserved {
            Some(name) => {
                info!(%name, %category, "reserved");
                self.success(&format!("{} {name} has been reserved.", category.label()))?;
            }
            None => {
                self.warn(&format!("No available {category} found for {country}."))?;
            }
        }
        Ok(())
    }
}
