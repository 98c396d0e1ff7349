use std::io::{BufRead, Write};

use tracing::{info, instrument};

use super::session::{CommandError, Session};

impl<R: BufRead, W: Write> Session<R, W> {
    /// Overwrites the data file with the current animals.
    #[instrument(level = "debug", skip(self))]
    pub(super) fn save_animals(&mut self) -> Result<(), CommandError> {
        let count = self.store.save(&self.repository).map_err(CommandError::Save)?;
        info!(count, "saved");
        let message = format!("Animal data saved to {}", self.store.path().display());
        self.success(&message)?;
        Ok(())
    }

    /// Replaces the current animals with the contents of the data file.
    ///
    /// The current animals are kept if the file cannot be read in full.
    #[instrument(level = "debug", skip(self))]
    pub(super) fn load_animals(&mut self) -> Result<(), CommandError> {
        let staged = self.store.load().map_err(CommandError::Load)?;
        info!(count = staged.len(), "loaded");
        self.repository.reload(staged);
        self.success("Animal data loaded successfully.")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use rescue::{Category, Repository};

    use crate::cli::session::tests::run_script;

    #[test]
    fn save_then_load_restores_saved_state() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("animals.txt");

        // Save, reserve Spot, then load: Spot is unreserved again.
        let (repository, output) = run_script(
            Repository::with_samples(),
            &path,
            "8\n3\ndog\nUnited States\n9\nq\n",
        );

        assert!(output.contains("Animal data saved to"));
        assert!(output.contains("Dog Spot has been reserved."));
        assert!(output.contains("Animal data loaded successfully."));
        assert_eq!(repository, Repository::with_samples());
        assert_eq!(fs::read_to_string(&path).unwrap().lines().count(), 6);
    }

    #[test]
    fn load_replaces_current_animals() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("animals.txt");
        fs::write(
            &path,
            "Monkey,Abu,Capuchin,1,2,3,male,4,5.5,01-02-2003,India,intake,true,India\n",
        )
        .unwrap();

        let (repository, _) = run_script(Repository::with_samples(), &path, "9\nq\n");

        assert!(repository.list(Category::Dog).is_empty());
        assert_eq!(repository.len(), 1);
        assert!(
            repository
                .find_by_name(Category::Monkey, "abu")
                .unwrap()
                .is_reserved()
        );
    }

    #[test]
    fn missing_file_keeps_current_animals() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.txt");

        let (repository, output) = run_script(Repository::with_samples(), &path, "9\nq\n");

        assert!(output.contains("Error loading data:"));
        assert!(output.contains("not found"));
        assert_eq!(repository, Repository::with_samples());
    }

    #[test]
    fn malformed_file_keeps_current_animals() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("animals.txt");
        fs::write(&path, "Dog,Fido,Pug\n").unwrap();

        let (repository, output) = run_script(Repository::with_samples(), &path, "9\nq\n");

        assert!(output.contains("Error loading data: line 1: expected 11 fields, found 3"));
        assert_eq!(repository, Repository::with_samples());
    }

    #[test]
    fn empty_repository_round_trips_through_empty_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("animals.txt");

        let (repository, _) = run_script(Repository::new(), &path, "8\n9\nq\n");

        assert_eq!(fs::read_to_string(&path).unwrap(), "");
        assert!(repository.is_empty());
    }

    #[test]
    fn unwritable_destination_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        // A directory cannot be written as a file.
        let (repository, output) = run_script(Repository::with_samples(), dir.path(), "8\nq\n");

        assert!(output.contains("Error saving data:"));
        assert_eq!(repository, Repository::with_samples());
        assert!(output.ends_with("Goodbye.\n"));
    }
}
