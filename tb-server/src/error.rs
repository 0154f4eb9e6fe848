use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Config error: {0}")]
    Config(#[from] tb_config::ConfigError),

    #[error("Environment variable error: {message}")]
    EnvVar { message: String },
}

pub type Result<T> = std::result::Result<T, ServerError>;
