//! Console report of one server exchange and the exit-code policy.
//!
//! Writes to any `io::Write` so the whole report can be captured in tests.

use std::io::{self, Write};

use colored::Colorize;

use crate::application::ApplicationResult;
use crate::domain::{ApiResponse, DocumentRequest, RequestKind};
use crate::exitcode;

pub struct Reporter<W: Write> {
    out: W,
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Ruled section title.
    pub fn title(&mut self, title: &str) -> io::Result<()> {
        let rule = "=".repeat(60);
        writeln!(self.out, "{}", rule)?;
        writeln!(self.out, "{}", title.cyan().bold())?;
        writeln!(self.out, "{}", rule)
    }

    pub fn plain(&mut self, msg: &str) -> io::Result<()> {
        writeln!(self.out, "{}", msg)
    }

    /// Describe the request before it is sent.
    pub fn announce(&mut self, request: &DocumentRequest) -> io::Result<()> {
        match request {
            DocumentRequest::Export(export) => {
                writeln!(self.out, "\nExporting document {}...", export.document_id)?;
                writeln!(self.out, "Target: {}", export.target_path)?;
                writeln!(self.out, "Format: {}", export.format)?;
                if let Some(pages) = export.page_selection() {
                    writeln!(self.out, "Pages: {:?}", pages)?;
                }
            }
            DocumentRequest::Import(import) => {
                writeln!(self.out, "\nImporting document from {}...", import.file_url)?;
                writeln!(self.out, "Target directory: {}", import.directory_id)?;
            }
        }
        Ok(())
    }

    /// Print status and body, or the error. Returns whether the call succeeded.
    pub fn outcome(&mut self, result: &ApplicationResult<ApiResponse>) -> io::Result<bool> {
        match result {
            Ok(response) => {
                writeln!(self.out, "{} {}", "Status:".bold(), response.status_code)?;
                writeln!(self.out, "{} {}", "Response:".bold(), response.pretty_body())?;
                Ok(response.is_success())
            }
            Err(e) => {
                if let Some(status) = e.status() {
                    writeln!(self.out, "{} {}", "Status:".bold(), status)?;
                }
                writeln!(self.out, "{} {}", "Error:".red().bold(), e)?;
                Ok(false)
            }
        }
    }

    /// Final success/failure line for a document request.
    pub fn banner(&mut self, kind: RequestKind, success: bool) -> io::Result<()> {
        if success {
            let msg = format!("✅ {} request sent successfully!", kind.label());
            writeln!(self.out, "\n{}", msg.green())
        } else {
            let msg = format!("❌ {} request failed!", kind.label());
            writeln!(self.out, "\n{}", msg.red())
        }
    }

    /// Outcome plus banner; returns the exit code.
    pub fn report(
        &mut self,
        kind: RequestKind,
        result: &ApplicationResult<ApiResponse>,
    ) -> io::Result<i32> {
        let success = self.outcome(result)?;
        self.banner(kind, success)?;
        Ok(exitcode::from_success(success))
    }

    /// Report a health check. Returns whether the server is up.
    pub fn health(&mut self, result: &ApplicationResult<ApiResponse>) -> io::Result<bool> {
        writeln!(self.out, "Testing /health endpoint...")?;
        let healthy = self.outcome(result)?;
        if healthy {
            writeln!(self.out, "\n{}", "✅ Server is running!".green())?;
        } else {
            writeln!(
                self.out,
                "\n{}",
                "❌ Health check failed. Is the server running?".red()
            )?;
            writeln!(
                self.out,
                "Make sure the reMarkable app is running with the hook injected."
            )?;
        }
        Ok(healthy)
    }
}
