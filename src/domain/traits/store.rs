use crate::domain::entities::ResponseTable;
use crate::application::errors::ConfigError;

/// Backing source of the static response table.
///
/// Every call re-reads the source; callers decide how long to keep the result.
pub trait ResponseSource: Send + Sync {
    fn load(&self) -> Result<ResponseTable, ConfigError>;
}
