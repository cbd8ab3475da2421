//! Domain entities: request descriptors and the server's reply

use std::fmt;
use std::str::FromStr;

use serde_json::Value;

use crate::domain::error::{DomainError, DomainResult};

/// Output format understood by the server's export endpoint.
///
/// The discriminant is the integer code sent on the wire.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ExportFormat {
    #[default]
    Pdf = 0,
    Png = 1,
    Svg = 2,
    RmBundle = 3,
    RmHtml = 4,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 5] = [
        ExportFormat::Pdf,
        ExportFormat::Png,
        ExportFormat::Svg,
        ExportFormat::RmBundle,
        ExportFormat::RmHtml,
    ];

    /// Wire code of this format.
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Look up a format by wire code.
    pub fn from_code(code: i64) -> DomainResult<Self> {
        Self::ALL
            .into_iter()
            .find(|f| i64::from(f.code()) == code)
            .ok_or(DomainError::InvalidFormat(code))
    }

    pub fn name(self) -> &'static str {
        match self {
            ExportFormat::Pdf => "PDF",
            ExportFormat::Png => "PNG",
            ExportFormat::Svg => "SVG",
            ExportFormat::RmBundle => "RmBundle",
            ExportFormat::RmHtml => "RmHtml",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.code(), self.name())
    }
}

/// Parses the integer wire code, e.g. `"2"` -> `Svg`.
impl FromStr for ExportFormat {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code: i64 = s
            .trim()
            .parse()
            .map_err(|_| DomainError::UnparsableFormat(s.to_string()))?;
        Self::from_code(code)
    }
}

/// Ask the server to render a stored document to a target location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportRequest {
    /// UUID of the document to export
    pub document_id: String,
    /// Target URI, usually `file://...`
    pub target_path: String,
    pub format: ExportFormat,
    /// Export with grayscale pens
    pub grayscale: bool,
    /// Keep password protection (PDF only)
    pub keep_password: bool,
    pub password: String,
    /// Zero-based page indices; `None` exports all pages. Never `Some(vec![])`.
    page_selection: Option<Vec<u32>>,
}

impl ExportRequest {
    /// Create an export request with server defaults: PDF, colour,
    /// password protection kept, empty password, all pages.
    pub fn new(document_id: impl Into<String>, target_path: impl Into<String>) -> Self {
        Self {
            document_id: document_id.into(),
            target_path: target_path.into(),
            format: ExportFormat::default(),
            grayscale: false,
            keep_password: true,
            password: String::new(),
            page_selection: None,
        }
    }

    pub fn with_format(mut self, format: ExportFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_grayscale(mut self, grayscale: bool) -> Self {
        self.grayscale = grayscale;
        self
    }

    pub fn with_keep_password(mut self, keep_password: bool) -> Self {
        self.keep_password = keep_password;
        self
    }

    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.password = password.into();
        self
    }

    /// Restrict the export to the given pages. An empty list means all pages.
    pub fn with_pages(mut self, pages: Vec<u32>) -> Self {
        self.page_selection = if pages.is_empty() { None } else { Some(pages) };
        self
    }

    pub fn page_selection(&self) -> Option<&[u32]> {
        self.page_selection.as_deref()
    }
}

/// Ask the server to ingest an external file into a directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportRequest {
    /// Source URI, usually `file://...`
    pub file_url: String,
    /// UUID of the target directory
    pub directory_id: String,
    pub password: String,
    /// Opaque server flag, passed through as-is
    pub flag1: bool,
    /// Opaque server flag, passed through as-is
    pub flag2: bool,
}

impl ImportRequest {
    pub fn new(file_url: impl Into<String>, directory_id: impl Into<String>) -> Self {
        Self {
            file_url: file_url.into(),
            directory_id: directory_id.into(),
            password: String::new(),
            flag1: false,
            flag2: false,
        }
    }

    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.password = password.into();
        self
    }

    pub fn with_flags(mut self, flag1: bool, flag2: bool) -> Self {
        self.flag1 = flag1;
        self.flag2 = flag2;
        self
    }
}

/// Which operation a request performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestKind {
    Export,
    Import,
}

impl RequestKind {
    /// Endpoint path relative to the base URL.
    pub fn endpoint(self) -> &'static str {
        match self {
            RequestKind::Export => "/exportFile",
            RequestKind::Import => "/documentAccepted",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RequestKind::Export => "Export",
            RequestKind::Import => "Import",
        }
    }
}

/// A single call against the server: one of the two document operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentRequest {
    Export(ExportRequest),
    Import(ImportRequest),
}

impl DocumentRequest {
    pub fn kind(&self) -> RequestKind {
        match self {
            DocumentRequest::Export(_) => RequestKind::Export,
            DocumentRequest::Import(_) => RequestKind::Import,
        }
    }

    pub fn endpoint(&self) -> &'static str {
        self.kind().endpoint()
    }
}

impl From<ExportRequest> for DocumentRequest {
    fn from(request: ExportRequest) -> Self {
        DocumentRequest::Export(request)
    }
}

impl From<ImportRequest> for DocumentRequest {
    fn from(request: ImportRequest) -> Self {
        DocumentRequest::Import(request)
    }
}

/// Status and decoded JSON body of one server reply.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status_code: u16,
    pub body: Value,
}

impl ApiResponse {
    pub fn new(status_code: u16, body: Value) -> Self {
        Self { status_code, body }
    }

    /// Only a plain 200 counts; 201/204 are failures for this server.
    pub fn is_success(&self) -> bool {
        self.status_code == 200
    }

    /// Body rendered as indented JSON.
    pub fn pretty_body(&self) -> String {
        serde_json::to_string_pretty(&self.body).unwrap_or_else(|_| self.body.to_string())
    }
}
