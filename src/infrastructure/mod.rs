mod clients;
mod storage;

pub use clients::songstats::SongstatsClient;
pub use storage::fs_store::FileSystemStore;
