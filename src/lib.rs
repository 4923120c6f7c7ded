//! wp-recon - WordPress reconnaissance tool
//!
//! Probes a single target for WordPress fingerprints: HTTP headers,
//! version markers, exposed sensitive files, directory listings, and
//! installed themes/plugins inferred from well-known paths.
//!
//! # Example
//!
//! ```no_run
//! use wp_recon::Scanner;
//!
//! #[tokio::main]
//! async fn main() -> wp_recon::Result<()> {
//!     let scanner = Scanner::new("https://example.com")?;
//!     let report = scanner.run().await;
//!     if let Some(version) = &report.version {
//!         println!("WordPress {}", version.version);
//!     }
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod output;
pub mod report;
pub mod scanner;

pub use error::{Error, Result};
pub use output::{DISCLAIMER, output_report, print_banner};
pub use report::{
    ComponentHit, DirAccess, DirFinding, FileAccess, FileFinding, HeaderReport, RequestFailure,
    ScanReport, UserInfo, UserReport, UserSource, VersionFinding,
};
pub use scanner::{DEFAULT_TIMEOUT_SECS, Scanner, ScannerBuilder};
