use thiserror::Error;

/// Convenient alias for fallible results returned throughout the crate.
pub type Res<T> = std::result::Result<T, Error>;

/// Failure cases of the credential, request, normalization, and export layers.
#[derive(Debug, Error)]
pub enum Error {
    /// The token endpoint rejected the client-credentials exchange.
    #[error("token exchange rejected with status {status}: {body}")]
    Authentication { status: u16, body: String },

    /// A catalog request returned a non-success status after the single
    /// authentication retry.
    #[error("request to {path} failed with status {status}")]
    ApiRequest { status: u16, path: String },

    /// The top-level shape of a response is missing.
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    /// Caller input was rejected before any network call.
    #[error("invalid input: {0}")]
    Validation(String),

    /// Required configuration is absent.
    #[error("configuration error: {0}")]
    Config(String),

    /// Transport failures, including timeouts.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Excel write error: {0}")]
    ExcelWrite(#[from] rust_xlsxwriter::XlsxError),

    #[error("PDF write error: {0}")]
    PdfWrite(String),
}

impl Error {
    /// Status code carried by authentication and request failures.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Authentication { status, .. } | Error::ApiRequest { status, .. } => {
                Some(*status)
            }
            _ => None,
        }
    }
}
