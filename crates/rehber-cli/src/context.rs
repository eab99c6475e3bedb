use crate::config::Config;
use once_cell::unsync::OnceCell;
use rehber_store::DirectoryRepository;

pub struct ExecutionContext {
    config: Config,
    repository: OnceCell<DirectoryRepository>,
}

impl ExecutionContext {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            repository: OnceCell::new(),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Repository over the configured data directory, opened on first use
    pub fn repository(&self) -> &DirectoryRepository {
        self.repository
            .get_or_init(|| DirectoryRepository::open(&self.config.data_dir))
    }
}
