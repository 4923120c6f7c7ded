//! Presentation for scan reports
//!
//! Renders the structured findings as human-readable text: section
//! banners, per-probe finding lines, and a closing summary table.

use crate::error::{Error, Result};
use crate::report::{ComponentHit, DirAccess, FileAccess, ScanReport, UserInfo, UserSource};
use comfy_table::{Attribute, Cell, ContentArrangement, Table, presets::UTF8_FULL};
use std::io::Write;

/// Placeholder for fields absent in upstream data
const NOT_AVAILABLE: &str = "N/A";

/// Width of the banner and section rules
const BANNER_WIDTH: usize = 60;

/// Fixed legal-use disclaimer printed before every scan
pub const DISCLAIMER: &str = "\
WARNING: This tool is intended solely for authorized security testing
of systems you own or have explicit permission to assess.
Unauthorized use may be illegal.";

/// Print the scan banner for the given target
pub fn print_banner<W: Write>(target: &str, writer: &mut W) -> Result<()> {
    let rule = "=".repeat(BANNER_WIDTH);
    writeln!(writer, "{}", rule).map_err(Error::OutputFailed)?;
    writeln!(writer, "wp-recon v{}", env!("CARGO_PKG_VERSION")).map_err(Error::OutputFailed)?;
    writeln!(writer, "Target: {}", target).map_err(Error::OutputFailed)?;
    writeln!(writer, "{}", rule).map_err(Error::OutputFailed)?;
    Ok(())
}

/// Render the full report
pub fn output_report<W: Write>(report: &ScanReport, writer: &mut W) -> Result<()> {
    output_headers(report, writer)?;
    output_version(report, writer)?;
    output_users(report, writer)?;
    output_files(report, writer)?;
    output_directories(report, writer)?;
    output_components(
        "Theme enumeration",
        &report.themes,
        "No common theme detected",
        writer,
    )?;
    output_components(
        "Plugin enumeration",
        &report.plugins,
        "No common plugin detected",
        writer,
    )?;
    output_failures(report, writer)?;
    output_summary(report, writer)
}

fn section<W: Write>(title: &str, writer: &mut W) -> Result<()> {
    writeln!(writer).map_err(Error::OutputFailed)?;
    writeln!(writer, "[*] {}", title).map_err(Error::OutputFailed)?;
    writeln!(writer, "{}", "-".repeat(40)).map_err(Error::OutputFailed)
}

fn output_headers<W: Write>(report: &ScanReport, writer: &mut W) -> Result<()> {
    section("HTTP response headers", writer)?;

    for (name, value) in &report.headers.headers {
        writeln!(writer, "  {}: {}", name, value).map_err(Error::OutputFailed)?;
    }
    if report.headers.pingback_exposed {
        writeln!(writer, "  [!] XML-RPC pingback exposed").map_err(Error::OutputFailed)?;
    }
    Ok(())
}

fn output_version<W: Write>(report: &ScanReport, writer: &mut W) -> Result<()> {
    section("Core version detection", writer)?;

    match &report.version {
        Some(finding) => writeln!(
            writer,
            "  [+] Version detected: {} (via {})",
            finding.version, finding.source
        )
        .map_err(Error::OutputFailed),
        None => writeln!(writer, "  [-] Version not detected").map_err(Error::OutputFailed),
    }
}

fn output_users<W: Write>(report: &ScanReport, writer: &mut W) -> Result<()> {
    section("User enumeration", writer)?;

    match report.users.source {
        Some(UserSource::RestApi) => {
            writeln!(
                writer,
                "  [+] {} user(s) found via REST API:",
                report.users.users.len()
            )
            .map_err(Error::OutputFailed)?;
            for user in &report.users.users {
                writeln!(writer, "    - {}", format_rest_user(user))
                    .map_err(Error::OutputFailed)?;
            }
        }
        Some(UserSource::AuthorScan) => {
            writeln!(
                writer,
                "  [+] {} user(s) found via author-ID enumeration:",
                report.users.users.len()
            )
            .map_err(Error::OutputFailed)?;
            for user in &report.users.users {
                let id = user
                    .id
                    .map(|id| id.to_string())
                    .unwrap_or_else(|| NOT_AVAILABLE.to_string());
                let slug = user.slug.as_deref().unwrap_or(NOT_AVAILABLE);
                writeln!(writer, "    - ID {}: {}", id, slug).map_err(Error::OutputFailed)?;
            }
        }
        None => {
            writeln!(writer, "  [-] No users enumerated").map_err(Error::OutputFailed)?;
        }
    }
    Ok(())
}

/// REST user line; absent fields render as N/A
fn format_rest_user(user: &UserInfo) -> String {
    let id = user
        .id
        .map(|id| id.to_string())
        .unwrap_or_else(|| NOT_AVAILABLE.to_string());
    let slug = user.slug.as_deref().unwrap_or(NOT_AVAILABLE);
    let name = user.name.as_deref().unwrap_or(NOT_AVAILABLE);
    format!("ID: {}, Login: {}, Name: {}", id, slug, name)
}

fn output_files<W: Write>(report: &ScanReport, writer: &mut W) -> Result<()> {
    section("Sensitive files", writer)?;

    for finding in &report.files {
        match finding.access {
            FileAccess::Accessible { bytes } => writeln!(
                writer,
                "  [+] {} - accessible ({} bytes)",
                finding.path, bytes
            )
            .map_err(Error::OutputFailed)?,
            FileAccess::Protected => {
                writeln!(writer, "  [!] {} - exists but protected", finding.path)
                    .map_err(Error::OutputFailed)?
            }
        }
    }
    Ok(())
}

fn output_directories<W: Write>(report: &ScanReport, writer: &mut W) -> Result<()> {
    section("Content directories", writer)?;

    for finding in &report.directories {
        match finding.access {
            DirAccess::ListingEnabled => writeln!(
                writer,
                "  [+] {} - directory listing enabled",
                finding.path
            )
            .map_err(Error::OutputFailed)?,
            DirAccess::Accessible => writeln!(writer, "  [i] {} - accessible", finding.path)
                .map_err(Error::OutputFailed)?,
            DirAccess::Protected => {
                writeln!(writer, "  [!] {} - exists but protected", finding.path)
                    .map_err(Error::OutputFailed)?
            }
        }
    }
    Ok(())
}

fn output_components<W: Write>(
    title: &str,
    hits: &[ComponentHit],
    empty_message: &str,
    writer: &mut W,
) -> Result<()> {
    section(title, writer)?;

    if hits.is_empty() {
        return writeln!(writer, "  [-] {}", empty_message).map_err(Error::OutputFailed);
    }
    for hit in hits {
        writeln!(writer, "  [+] {}", hit.slug).map_err(Error::OutputFailed)?;
        if let Some(version) = &hit.version {
            writeln!(writer, "      Version: {}", version).map_err(Error::OutputFailed)?;
        }
    }
    Ok(())
}

fn output_failures<W: Write>(report: &ScanReport, writer: &mut W) -> Result<()> {
    if report.failures.is_empty() {
        return Ok(());
    }

    section("Request failures", writer)?;
    for failure in &report.failures {
        writeln!(writer, "  [!] {}: {}", failure.path, failure.message)
            .map_err(Error::OutputFailed)?;
    }
    Ok(())
}

fn output_summary<W: Write>(report: &ScanReport, writer: &mut W) -> Result<()> {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Check").add_attribute(Attribute::Bold),
            Cell::new("Result").add_attribute(Attribute::Bold),
        ]);

    table.add_row(vec![
        "Headers".to_string(),
        format!("{} observed", report.headers.headers.len()),
    ]);
    table.add_row(vec![
        "Pingback".to_string(),
        if report.headers.pingback_exposed {
            "exposed".to_string()
        } else {
            "not exposed".to_string()
        },
    ]);
    table.add_row(vec![
        "Core version".to_string(),
        report
            .version
            .as_ref()
            .map(|f| format!("{} (via {})", f.version, f.source))
            .unwrap_or_else(|| "not detected".to_string()),
    ]);
    table.add_row(vec![
        "Users".to_string(),
        format!("{} found", report.users.users.len()),
    ]);
    table.add_row(vec![
        "Sensitive files".to_string(),
        format!(
            "{} accessible, {} protected",
            report.accessible_file_count(),
            report.protected_file_count()
        ),
    ]);
    table.add_row(vec![
        "Directory listings".to_string(),
        format!("{} enabled", report.listing_enabled_count()),
    ]);
    table.add_row(vec![
        "Themes".to_string(),
        format!("{} found", report.themes.len()),
    ]);
    table.add_row(vec![
        "Plugins".to_string(),
        format!("{} found", report.plugins.len()),
    ]);

    writeln!(writer).map_err(Error::OutputFailed)?;
    writeln!(writer, "{}", table).map_err(Error::OutputFailed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::{ComponentHit, DirFinding, FileFinding, VersionFinding};
    use url::Url;

    fn render(report: &ScanReport) -> String {
        let mut buffer = Vec::new();
        output_report(report, &mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    fn empty_report() -> ScanReport {
        ScanReport::new(Url::parse("http://example.com/").unwrap())
    }

    #[test]
    fn pingback_exposure_is_warned() {
        let mut report = empty_report();
        report.headers.pingback_exposed = true;
        report.headers.headers.push((
            "X-Pingback".to_string(),
            "http://example.com/xmlrpc.php".to_string(),
        ));

        let text = render(&report);
        assert!(text.contains("X-Pingback: http://example.com/xmlrpc.php"));
        assert!(text.contains("XML-RPC pingback exposed"));
    }

    #[test]
    fn no_pingback_no_warning() {
        let text = render(&empty_report());
        assert!(!text.contains("XML-RPC pingback exposed"));
    }

    #[test]
    fn listing_and_plain_access_render_differently() {
        let mut report = empty_report();
        report.directories = vec![
            DirFinding {
                path: "/wp-content/uploads/".to_string(),
                access: DirAccess::ListingEnabled,
            },
            DirFinding {
                path: "/wp-content/".to_string(),
                access: DirAccess::Accessible,
            },
        ];

        let text = render(&report);
        assert!(text.contains("/wp-content/uploads/ - directory listing enabled"));
        assert!(text.contains("/wp-content/ - accessible"));
        assert!(!text.contains("/wp-content/ - directory listing enabled"));
    }

    #[test]
    fn accessible_file_reports_byte_count() {
        let mut report = empty_report();
        report.files = vec![FileFinding {
            path: "/readme.html".to_string(),
            access: FileAccess::Accessible { bytes: 7278 },
        }];

        let text = render(&report);
        assert!(text.contains("/readme.html - accessible (7278 bytes)"));
    }

    #[test]
    fn rest_user_missing_fields_render_na() {
        let user = UserInfo {
            id: Some(3),
            slug: None,
            name: None,
        };
        assert_eq!(format_rest_user(&user), "ID: 3, Login: N/A, Name: N/A");
    }

    #[test]
    fn version_line_names_source() {
        let mut report = empty_report();
        report.version = Some(VersionFinding {
            version: "6.4.2".to_string(),
            source: "/readme.html".to_string(),
        });

        let text = render(&report);
        assert!(text.contains("Version detected: 6.4.2 (via /readme.html)"));
    }

    #[test]
    fn component_hit_renders_version_indented() {
        let mut report = empty_report();
        report.themes = vec![ComponentHit {
            slug: "astra".to_string(),
            version: Some("4.6.2".to_string()),
        }];

        let text = render(&report);
        assert!(text.contains("[+] astra"));
        assert!(text.contains("Version: 4.6.2"));
        assert!(text.contains("No common plugin detected"));
    }
}
