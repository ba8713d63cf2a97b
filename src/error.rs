use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("missing required configuration: {0}")]
    Config(&'static str),

    #[error("slack api error: {0}")]
    Api(String),

    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("page limit of {0} reached before history was exhausted")]
    PageLimit(usize),

    #[error("message timestamp missing or malformed: {0:?}")]
    Timestamp(String),

    #[error("failed to write workbook: {0}")]
    Workbook(#[from] rust_xlsxwriter::XlsxError),
}
