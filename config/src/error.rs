#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IOError(#[from] std::io::Error),

    #[error("device list error: {0}")]
    XmlError(#[from] xmltree::ParseError),
}
