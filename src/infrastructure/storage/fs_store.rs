use crate::domain::{ArtistStats, DashboardReport, SocialInsights, Storage, StorageKeys, Track};
use crate::error::{DashError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Clone)]
pub struct FileSystemStore {
    data_dir: PathBuf,
    output_dir: PathBuf,
}

impl FileSystemStore {
    pub fn new(data_dir: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            output_dir: output_dir.into(),
        }
    }

    fn get_path_for_key(&self, key: &str, use_data_dir: bool) -> PathBuf {
        let base_dir = if use_data_dir {
            &self.data_dir
        } else {
            &self.output_dir
        };

        base_dir.join(format!("{}.json", key))
    }

    fn ensure_dir(&self, dir: &Path) -> Result<()> {
        if !dir.exists() {
            fs::create_dir_all(dir)?;
        }
        Ok(())
    }

    fn write_json_file<T: serde::Serialize + ?Sized>(&self, key: &str, data: &T) -> Result<PathBuf> {
        self.ensure_dir(&self.output_dir)?;

        let path = self.get_path_for_key(key, false);
        let content = serde_json::to_string_pretty(data)?;
        fs::write(&path, content)?;
        Ok(path)
    }

    fn read_json_file<T: serde::de::DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        let path = self.get_path_for_key(key, true);
        if path.exists() {
            debug!("Reading fixture {:?}", path);
            let content = fs::read_to_string(path)?;
            Ok(Some(serde_json::from_str(&content)?))
        } else {
            Ok(None)
        }
    }

    fn read_fixture<T: serde::de::DeserializeOwned>(&self, key: &str) -> Result<T> {
        self.read_json_file(key)?
            .ok_or_else(|| DashError::MissingFixture(format!("{}.json", key)))
    }
}

impl Storage for FileSystemStore {
    fn load_artist_stats(&self) -> Result<ArtistStats> {
        self.read_fixture(StorageKeys::ARTIST_STATS)
    }

    fn load_tracks(&self) -> Result<Vec<Track>> {
        self.read_fixture(StorageKeys::TRACKS)
    }

    fn load_social_insights(&self) -> Result<SocialInsights> {
        self.read_fixture(StorageKeys::SOCIAL_INSIGHTS)
    }

    fn load_side_project_stats(&self) -> Result<Option<ArtistStats>> {
        self.read_json_file(StorageKeys::SIDE_PROJECT_STATS)
    }

    fn save_report(&self, report: &DashboardReport) -> Result<PathBuf> {
        self.write_json_file(StorageKeys::REPORT, report)
    }
}
