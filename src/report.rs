//! Structured results produced by the reconnaissance probes
//!
//! Probes return typed findings instead of printing; rendering lives in
//! [`crate::output`].

use url::Url;

/// Full report for one scan invocation
#[derive(Debug, Clone)]
pub struct ScanReport {
    /// Target base URL
    pub target: Url,
    /// Findings from the header probe
    pub headers: HeaderReport,
    /// Detected core version, if any
    pub version: Option<VersionFinding>,
    /// Enumerated users
    pub users: UserReport,
    /// Sensitive-file findings
    pub files: Vec<FileFinding>,
    /// Content-directory findings
    pub directories: Vec<DirFinding>,
    /// Themes confirmed present
    pub themes: Vec<ComponentHit>,
    /// Plugins confirmed present
    pub plugins: Vec<ComponentHit>,
    /// Requests that failed at the network level
    pub failures: Vec<RequestFailure>,
}

impl ScanReport {
    /// Create an empty report for the given target
    pub fn new(target: Url) -> Self {
        Self {
            target,
            headers: HeaderReport::default(),
            version: None,
            users: UserReport::default(),
            files: Vec::new(),
            directories: Vec::new(),
            themes: Vec::new(),
            plugins: Vec::new(),
            failures: Vec::new(),
        }
    }

    /// Count of sensitive files reported accessible
    pub fn accessible_file_count(&self) -> usize {
        self.files
            .iter()
            .filter(|f| matches!(f.access, FileAccess::Accessible { .. }))
            .count()
    }

    /// Count of sensitive files that exist but are protected
    pub fn protected_file_count(&self) -> usize {
        self.files
            .iter()
            .filter(|f| matches!(f.access, FileAccess::Protected))
            .count()
    }

    /// Count of directories with listing enabled
    pub fn listing_enabled_count(&self) -> usize {
        self.directories
            .iter()
            .filter(|d| matches!(d.access, DirAccess::ListingEnabled))
            .count()
    }
}

/// Findings from the HTTP header probe
#[derive(Debug, Clone, Default)]
pub struct HeaderReport {
    /// Observed headers, in probe order
    pub headers: Vec<(String, String)>,
    /// Whether the X-Pingback header was present
    pub pingback_exposed: bool,
}

/// A detected core version and the path that revealed it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionFinding {
    /// Version string (first capture of the matching pattern)
    pub version: String,
    /// Probe path that produced the match
    pub source: String,
}

/// How the user list was obtained
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserSource {
    /// WordPress REST API user listing
    RestApi,
    /// Author-ID redirect enumeration
    AuthorScan,
}

/// Enumerated users and the method that found them
#[derive(Debug, Clone, Default)]
pub struct UserReport {
    /// Users found, in discovery order
    pub users: Vec<UserInfo>,
    /// Method used; `None` when nothing was found
    pub source: Option<UserSource>,
}

/// One enumerated user; any field may be absent in the upstream data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserInfo {
    /// Numeric user ID
    pub id: Option<u64>,
    /// Login slug
    pub slug: Option<String>,
    /// Display name
    pub name: Option<String>,
}

/// Access classification for a sensitive file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileAccess {
    /// HTTP 200 with the given raw body length
    Accessible {
        /// Body length in bytes
        bytes: usize,
    },
    /// HTTP 403
    Protected,
}

/// Finding for one sensitive-file path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileFinding {
    /// Probed path
    pub path: String,
    /// Classification
    pub access: FileAccess,
}

/// Access classification for a content directory
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirAccess {
    /// HTTP 200 with an "Index of" body
    ListingEnabled,
    /// HTTP 200 without a listing
    Accessible,
    /// HTTP 403
    Protected,
}

/// Finding for one content-directory path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirFinding {
    /// Probed path
    pub path: String,
    /// Classification
    pub access: DirAccess,
}

/// A theme or plugin confirmed present on the target
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentHit {
    /// Component slug
    pub slug: String,
    /// Version extracted from its metadata file, if reachable
    pub version: Option<String>,
}

/// One failed request, recorded and reported but never fatal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestFailure {
    /// Path that was being requested
    pub path: String,
    /// Human-readable cause
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report_with_files(files: Vec<FileFinding>) -> ScanReport {
        let mut report = ScanReport::new(Url::parse("http://example.com/").unwrap());
        report.files = files;
        report
    }

    #[test]
    fn file_counts_split_by_access() {
        let report = report_with_files(vec![
            FileFinding {
                path: "/readme.html".into(),
                access: FileAccess::Accessible { bytes: 7278 },
            },
            FileFinding {
                path: "/xmlrpc.php".into(),
                access: FileAccess::Accessible { bytes: 42 },
            },
            FileFinding {
                path: "/wp-config.php".into(),
                access: FileAccess::Protected,
            },
        ]);

        assert_eq!(report.accessible_file_count(), 2);
        assert_eq!(report.protected_file_count(), 1);
    }

    #[test]
    fn empty_report_counts_zero() {
        let report = ScanReport::new(Url::parse("http://example.com/").unwrap());
        assert_eq!(report.accessible_file_count(), 0);
        assert_eq!(report.protected_file_count(), 0);
        assert_eq!(report.listing_enabled_count(), 0);
    }

    #[test]
    fn listing_count_ignores_plain_access() {
        let mut report = ScanReport::new(Url::parse("http://example.com/").unwrap());
        report.directories = vec![
            DirFinding {
                path: "/wp-content/uploads/".into(),
                access: DirAccess::ListingEnabled,
            },
            DirFinding {
                path: "/wp-content/".into(),
                access: DirAccess::Accessible,
            },
            DirFinding {
                path: "/wp-admin/".into(),
                access: DirAccess::Protected,
            },
        ];
        assert_eq!(report.listing_enabled_count(), 1);
    }
}
