//! Document and job-key domain types

use std::fmt;

use thiserror::Error;

/// Errors raised when constructing a [`Document`] or [`JobKey`]
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DocumentError {
    /// The file name was empty
    #[error("file name cannot be empty")]
    EmptyFileName,

    /// The document payload was empty
    #[error("document payload cannot be empty")]
    EmptyPayload,
}

/// A document selected for analysis
///
/// An opaque binary payload plus the file name it was selected under. The
/// payload is immutable once constructed; ownership stays with the caller
/// until it is handed to the client for upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    file_name: String,
    bytes: Vec<u8>,
}

impl Document {
    /// Creates a new document, rejecting empty file names and empty payloads
    ///
    /// # Arguments
    /// * `file_name` - The name the document was selected under
    /// * `bytes` - The raw document contents
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Result<Self, DocumentError> {
        let file_name = file_name.into();

        if file_name.is_empty() {
            return Err(DocumentError::EmptyFileName);
        }
        if bytes.is_empty() {
            return Err(DocumentError::EmptyPayload);
        }

        Ok(Self { file_name, bytes })
    }

    /// The file name the document was selected under
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// The raw document contents
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Size of the document payload in bytes
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Whether the payload is empty (never true for a validated document)
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// The job key this document will be tracked under after submission
    ///
    /// Derived deterministically from the file name: two documents uploaded
    /// under the same name collide on the same key. Keeping the keys unique
    /// is the caller's responsibility.
    pub fn job_key(&self) -> JobKey {
        JobKey(self.file_name.clone())
    }
}

/// Correlation key for a submitted analysis job
///
/// The analysis service keys jobs by the uploaded file name, so the key is
/// just the file name with a URL-safe encoding applied when it goes on the
/// wire.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct JobKey(String);

impl JobKey {
    /// Creates a job key from a file name, rejecting empty names
    pub fn new(file_name: impl Into<String>) -> Result<Self, DocumentError> {
        let file_name = file_name.into();

        if file_name.is_empty() {
            return Err(DocumentError::EmptyFileName);
        }

        Ok(Self(file_name))
    }

    /// The raw (unencoded) key
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The URL-safe form used as a query parameter on the status endpoint
    pub fn encoded(&self) -> String {
        urlencoding::encode(&self.0).into_owned()
    }
}

impl fmt::Display for JobKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
