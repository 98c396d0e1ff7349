//! A data file holding every animal, one per line.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use tracing::{debug, info, instrument};

use crate::{
    Repository,
    storage::{EncodeError, Format, ParseLineError},
};

/// Errors raised while saving or loading the data file.
///
/// A failed operation never changes the in-memory repository.
#[derive(Debug, thiserror::Error)]
pub enum PersistenceError {
    /// The data file does not exist.
    #[error("{} not found", .0.display())]
    NotFound(PathBuf),
    /// The data file could not be read or written.
    #[error("{}: {source}", .path.display())]
    Io {
        /// The data file.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: io::Error,
    },
    /// A line in the data file is malformed.
    #[error("line {line}: {source}")]
    Malformed {
        /// 1-based line number.
        line: usize,
        /// What was wrong with it.
        #[source]
        source: ParseLineError,
    },
    /// An animal cannot be represented in the file format.
    #[error("cannot save {name}: {source}")]
    Unencodable {
        /// The animal's name.
        name: String,
        /// Why it cannot be encoded.
        #[source]
        source: EncodeError,
    },
}

/// The file animals are saved to and loaded from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnimalFile {
    path: PathBuf,
    format: Format,
}

impl AnimalFile {
    /// A data file at `path`, stored in `format`.
    #[must_use]
    pub const fn new(path: PathBuf, format: Format) -> Self {
        Self { path, format }
    }

    /// The location of the data file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The format of the data file.
    #[must_use]
    pub const fn format(&self) -> Format {
        self.format
    }

    /// Overwrites the file with every animal: dogs, then monkeys.
    ///
    /// Every animal is encoded before the file is touched, so an animal that
    /// cannot be encoded leaves the previous file intact.
    ///
    /// Returns the number of animals written.
    ///
    /// # Errors
    ///
    /// Returns an error if an animal cannot be encoded or the file cannot be
    /// written.
    #[instrument(level = "debug", skip(self, repository), fields(path = %self.path.display()))]
    pub fn save(&self, repository: &Repository) -> Result<usize, PersistenceError> {
        let codec = self.format.codec();
        let mut content = String::new();
        for animal in repository.iter() {
            let line = codec
                .encode(animal)
                .map_err(|source| PersistenceError::Unencodable {
                    name: animal.name().to_string(),
                    source,
                })?;
            content.push_str(&line);
            content.push('\n');
        }

        fs::write(&self.path, content).map_err(|source| PersistenceError::Io {
            path: self.path.clone(),
            source,
        })?;

        info!(count = repository.len(), format = %self.format, "saved animals");
        Ok(repository.len())
    }

    /// Reads every animal from the file into a new repository.
    ///
    /// Blank lines are skipped. Duplicate names are not checked; the file is
    /// trusted.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing or unreadable, or if any line is
    /// malformed. Nothing is returned for a partially valid file.
    #[instrument(level = "debug", skip(self), fields(path = %self.path.display()))]
    pub fn load(&self) -> Result<Repository, PersistenceError> {
        let content = fs::read_to_string(&self.path).map_err(|source| match source.kind() {
            io::ErrorKind::NotFound => PersistenceError::NotFound(self.path.clone()),
            _ => PersistenceError::Io {
                path: self.path.clone(),
                source,
            },
        })?;

        let codec = self.format.codec();
        let mut staged = Repository::new();
        for (index, line) in content.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let animal = codec
                .decode(line)
                .map_err(|source| PersistenceError::Malformed {
                    line: index + 1,
                    source,
                })?;
            staged.push(animal);
        }

        debug!(count = staged.len(), "parsed data file");
        Ok(staged)
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;
    use crate::domain::Category;

    fn file_in(dir: &TempDir, format: Format) -> AnimalFile {
        AnimalFile::new(dir.path().join("animals.txt"), format)
    }

    #[test]
    fn save_then_load_reproduces_repository() {
        let dir = tempfile::tempdir().unwrap();
        for format in [Format::Delimited, Format::JsonLines] {
            let file = file_in(&dir, format);
            let mut repository = Repository::with_samples();
            repository.reserve(Category::Dog, "United States");

            assert_eq!(file.save(&repository).unwrap(), 6);
            let loaded = file.load().unwrap();

            assert_eq!(loaded, repository);
        }
    }

    #[test]
    fn save_writes_dogs_then_monkeys() {
        let dir = tempfile::tempdir().unwrap();
        let file = file_in(&dir, Format::Delimited);
        file.save(&Repository::with_samples()).unwrap();

        let content = fs::read_to_string(file.path()).unwrap();
        let tags: Vec<_> = content
            .lines()
            .map(|line| line.split(',').next().unwrap())
            .collect();
        assert_eq!(tags, ["Dog", "Dog", "Dog", "Monkey", "Monkey", "Monkey"]);
    }

    #[test]
    fn empty_repository_saves_empty_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = file_in(&dir, Format::Delimited);
        fs::write(file.path(), "stale content\n").unwrap();

        assert_eq!(file.save(&Repository::new()).unwrap(), 0);

        assert_eq!(fs::read_to_string(file.path()).unwrap(), "");
        assert!(file.load().unwrap().is_empty());
    }

    #[test]
    fn missing_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let file = file_in(&dir, Format::Delimited);

        assert!(matches!(file.load(), Err(PersistenceError::NotFound(_))));
    }

    #[test]
    fn malformed_line_fails_whole_load() {
        let dir = tempfile::tempdir().unwrap();
        let file = file_in(&dir, Format::Delimited);
        fs::write(
            file.path(),
            "Dog,Spot,German Shepherd,male,1,25.6,05-12-2019,United States,intake,false,United \
             States\nDog,Rex,Great Dane,male,three\n",
        )
        .unwrap();

        let error = file.load().unwrap_err();
        assert!(matches!(
            error,
            PersistenceError::Malformed {
                line: 2,
                source: ParseLineError::FieldCount { .. }
            }
        ));
    }

    #[test]
    fn blank_lines_are_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let file = file_in(&dir, Format::Delimited);
        fs::write(
            file.path(),
            "\nDog,Spot,German Shepherd,male,1,25.6,05-12-2019,United States,intake,false,United \
             States\n\n",
        )
        .unwrap();

        assert_eq!(file.load().unwrap().len(), 1);
    }

    #[test]
    fn unencodable_animal_leaves_file_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let file = file_in(&dir, Format::Delimited);
        fs::write(file.path(), "previous\n").unwrap();

        let mut repository = Repository::new();
        let mut animal = Repository::with_samples()
            .find_by_name(Category::Dog, "Rex")
            .cloned()
            .unwrap();
        animal.profile.acquisition_country = "Korea, Republic of".to_string();
        repository.add(animal).unwrap();

        assert!(matches!(
            file.save(&repository),
            Err(PersistenceError::Unencodable { .. })
        ));
        assert_eq!(fs::read_to_string(file.path()).unwrap(), "previous\n");
    }
}
