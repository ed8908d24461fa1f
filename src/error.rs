#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("environment variable {0} is not set")]
    MissingVar(&'static str),
    #[error("response is missing field `{0}`")]
    MissingField(&'static str),
    #[error("no lyrics container found on {url}")]
    LyricsContainerMissing { url: String },
    #[error("invalid css selector: {0}")]
    Selector(String),
}
