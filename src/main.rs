//! wp-recon CLI - probe a WordPress site for common exposures

use clap::Parser;
use std::process::ExitCode;
use std::time::Duration;

use wp_recon::{DISCLAIMER, Scanner, output_report, print_banner};

/// Exit status when the scan is interrupted by the user
const EXIT_INTERRUPTED: u8 = 130;

/// WordPress reconnaissance - probes headers, versions, users, files, themes, and plugins
#[derive(Parser, Debug)]
#[command(name = "wp-recon")]
#[command(version, about, long_about = None)]
struct Args {
    /// URL of the WordPress site to probe (http:// is assumed if no scheme given)
    url: String,

    /// Request timeout in seconds
    #[arg(long, default_value_t = wp_recon::DEFAULT_TIMEOUT_SECS)]
    timeout: u64,

    /// Allow scanning private/internal IP addresses (localhost, 192.168.x.x, etc.)
    #[arg(long = "allow-private")]
    allow_private: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    println!("{}", DISCLAIMER);
    println!();

    let scanner = match Scanner::builder(&args.url)
        .timeout(Duration::from_secs(args.timeout))
        .allow_private(args.allow_private)
        .build()
    {
        Ok(scanner) => scanner,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let stdout = std::io::stdout();
    let mut writer = stdout.lock();
    if let Err(e) = print_banner(scanner.target().as_str(), &mut writer) {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }

    // Ctrl-C aborts the remaining probes at the next await point
    tokio::select! {
        report = scanner.run() => {
            if let Err(e) = output_report(&report, &mut writer) {
                eprintln!("Error: {}", e);
                return ExitCode::FAILURE;
            }
            ExitCode::SUCCESS
        }
        _ = tokio::signal::ctrl_c() => {
            eprintln!("\nScan interrupted");
            ExitCode::from(EXIT_INTERRUPTED)
        }
    }
}
