use thiserror::Error;

use crate::config::ConfigError;
use crate::model::DataError;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Data(#[from] DataError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}
