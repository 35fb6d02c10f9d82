//! TOML-based FavoritesRepository implementation

use crate::dto::{FavoritesFile, LineRecord, StoreFile};
use crate::storage::{AtomicTomlFile, run_blocking};
use async_trait::async_trait;
use std::path::PathBuf;
use transit_core::error::{Result, TransitError};
use transit_core::{FavoritesRepository, Line};

/// Stores favorite lines in `favorites.toml`.
///
/// Saving a line that is already stored is a confirmed no-op, so the file
/// never holds the same code twice.
pub struct TomlFavoritesRepository {
    file: AtomicTomlFile<FavoritesFile>,
}

impl TomlFavoritesRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            file: AtomicTomlFile::new(path),
        }
    }
}

#[async_trait]
impl FavoritesRepository for TomlFavoritesRepository {
    async fn get_all(&self) -> Result<Vec<Line>> {
        let file = self.file.clone();
        run_blocking(move || {
            let stored = file.load_or_default()?;
            stored.ensure_supported(file.path())?;
            Ok(stored.favorites.into_iter().map(Line::from).collect())
        })
        .await
    }

    async fn save(&self, line: &Line) -> Result<bool> {
        let file = self.file.clone();
        let record = LineRecord::from(line);
        run_blocking(move || {
            file.update(|stored: &mut FavoritesFile| {
                stored.ensure_supported(file.path())?;
                if !stored.favorites.iter().any(|fav| fav.code == record.code) {
                    stored.favorites.push(record);
                }
                Ok::<_, TransitError>(true)
            })
        })
        .await
    }

    async fn remove(&self, line: &Line) -> Result<bool> {
        let file = self.file.clone();
        let code = line.code.clone();
        let removed = run_blocking(move || {
            file.update(|stored: &mut FavoritesFile| {
                stored.ensure_supported(file.path())?;
                let index = stored.favorites.iter().position(|fav| fav.code == code);
                if let Some(index) = index {
                    stored.favorites.remove(index);
                }
                Ok::<_, TransitError>(index.is_some())
            })
        })
        .await?;
        if !removed {
            tracing::debug!("[Favorites] Line {} was not stored", line.code);
        }
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn repository(dir: &TempDir) -> TomlFavoritesRepository {
        TomlFavoritesRepository::new(dir.path().join("favorites.toml"))
    }

    #[tokio::test]
    async fn test_save_then_get_all() {
        let temp_dir = TempDir::new().unwrap();
        let repo = repository(&temp_dir);

        assert!(repo.save(&Line::new("10", "Downtown")).await.unwrap());
        assert!(repo.save(&Line::new("20", "Uptown")).await.unwrap());

        let favorites = repo.get_all().await.unwrap();
        assert_eq!(favorites, vec![Line::new("10", ""), Line::new("20", "")]);
        assert_eq!(favorites[0].description, "Downtown");
    }

    #[tokio::test]
    async fn test_save_is_idempotent() {
        let temp_dir = TempDir::new().unwrap();
        let repo = repository(&temp_dir);

        repo.save(&Line::new("10", "Downtown")).await.unwrap();
        assert!(repo.save(&Line::new("10", "Downtown")).await.unwrap());

        assert_eq!(repo.get_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_remove_reports_whether_anything_was_removed() {
        let temp_dir = TempDir::new().unwrap();
        let repo = repository(&temp_dir);
        repo.save(&Line::new("10", "Downtown")).await.unwrap();

        assert!(repo.remove(&Line::new("10", "")).await.unwrap());
        assert!(!repo.remove(&Line::new("10", "")).await.unwrap());
        assert!(repo.get_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_newer_store_version_is_left_untouched() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("favorites.toml");
        let newer = "version = 2\n\n[[favorite]]\ncode = \"10\"\n";
        std::fs::write(&path, newer).unwrap();
        let repo = repository(&temp_dir);

        assert!(repo.get_all().await.unwrap_err().is_serialization());
        assert!(repo.save(&Line::new("20", "Uptown")).await.is_err());
        assert!(repo.remove(&Line::new("10", "")).await.is_err());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), newer);
    }

    #[tokio::test]
    async fn test_persists_across_instances() {
        let temp_dir = TempDir::new().unwrap();
        repository(&temp_dir)
            .save(&Line::new("10", "Downtown"))
            .await
            .unwrap();

        let reopened = repository(&temp_dir).get_all().await.unwrap();
        assert_eq!(reopened, vec![Line::new("10", "Downtown")]);
    }
}
