//! skillmap - Community curated learning roadmaps

mod cli;

use anyhow::Result;
use clap::{Parser, Subcommand};
use skillmap_core::{ContentStore, DegradedState};
use std::path::PathBuf;
use std::sync::Arc;

/// Default port for the web server
const DEFAULT_PORT: u16 = 3333;

#[derive(Parser)]
#[command(
    name = "skillmap",
    version,
    about = "Community curated learning roadmaps",
    long_about = "Serves community curated learning roadmaps over HTTP.\n\
                  \n\
                  Loads roadmap descriptors and site configuration from a content directory\n\
                  and serves them as a single-page app plus a JSON API, with terminal\n\
                  commands for inspecting and validating the content tree.\n\
                  \n\
                  Examples:\n\
                    skillmap                         # Serve on the default port\n\
                    skillmap serve --port 8080       # Custom port\n\
                    skillmap serve --open            # Open the browser once ready\n\
                    skillmap list                    # List loaded roadmaps\n\
                    skillmap show frontend           # Show one roadmap in detail\n\
                    skillmap check                   # Validate the content directory\n\
                  \n\
                  Web Frontend Workflow:\n\
                    # Option 1: Production (single command)\n\
                    trunk build --release            # Compile frontend once\n\
                    skillmap serve                   # Serves API + static frontend\n\
                    \n\
                    # Option 2: Development (hot reload)\n\
                    skillmap serve --port 8080       # Terminal 1: API server\n\
                    trunk serve --port 3333          # Terminal 2: Frontend dev server\n\
                  \n\
                  Environment Variables:\n\
                    SKILLMAP_CONTENT_DIR             # Override content directory\n\
                    SKILLMAP_NO_COLOR                # Disable ANSI colors (log-friendly)\n\
                    RUST_LOG                         # Log filter (default: skillmap=info)"
)]
struct Cli {
    #[command(subcommand)]
    mode: Option<Mode>,

    /// Path to the content directory (site.json + roadmaps/)
    #[arg(long, env = "SKILLMAP_CONTENT_DIR", default_value = "content")]
    content_dir: PathBuf,

    /// Disable ANSI colors (log-friendly)
    #[arg(long, env = "SKILLMAP_NO_COLOR")]
    no_color: bool,
}

#[derive(Subcommand)]
enum Mode {
    /// Serve the web app and JSON API (default)
    Serve {
        /// Port for the web server
        #[arg(long, default_value_t = DEFAULT_PORT)]
        port: u16,
        /// Open the browser once the server is ready
        #[arg(long)]
        open: bool,
    },
    /// List loaded roadmaps
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show detailed roadmap info
    Show {
        /// Roadmap id or unique prefix
        id: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Validate the content directory and exit
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing();

    let content_dir = cli.content_dir;
    let no_color = cli.no_color;

    tracing::debug!("content directory: {}", content_dir.display());

    match cli.mode.unwrap_or(Mode::Serve {
        port: DEFAULT_PORT,
        open: false,
    }) {
        Mode::Serve { port, open } => {
            run_serve(content_dir, port, open).await?;
        }
        Mode::List { json } => {
            run_list(content_dir, json, no_color)?;
        }
        Mode::Show { id, json } => {
            run_show(content_dir, id, json)?;
        }
        Mode::Check => {
            run_check(content_dir)?;
        }
    }

    Ok(())
}

fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("skillmap=info"));

    fmt().with_env_filter(env_filter).with_target(false).init();
}

async fn run_serve(content_dir: PathBuf, port: u16, open_browser: bool) -> Result<()> {
    use indicatif::{ProgressBar, ProgressStyle};
    use std::time::Instant;

    let start = Instant::now();

    // Create spinner
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );
    spinner.enable_steady_tick(std::time::Duration::from_millis(80));

    // Load content
    spinner.set_message("Loading roadmaps and site configuration...");
    let store = Arc::new(ContentStore::new(content_dir));
    let report = store.load();

    if report.has_fatal_errors() {
        spinner.finish_and_clear();
        eprintln!("Fatal errors during content load:");
        for error in report.errors.iter() {
            eprintln!("  - {}: {}", error.source, error.message);
        }
        return Ok(());
    }

    let elapsed = start.elapsed();
    spinner.finish_with_message(format!(
        "✓ Ready in {:.2}s ({} roadmaps loaded)",
        elapsed.as_secs_f64(),
        store.roadmap_count()
    ));

    // Check if frontend dist/ exists
    let dist_path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("../skillmap-web/dist");
    if dist_path.exists() && dist_path.join("index.html").exists() {
        println!("\n🌐 Backend API + Frontend: http://localhost:{}", port);
        println!("   API endpoints:          http://localhost:{}/api/*", port);
    } else {
        println!(
            "\n🌐 Backend API only:       http://localhost:{}/api/*",
            port
        );
        println!("   💡 Run 'trunk build' to compile frontend");
    }

    if open_browser {
        let url = format!("http://localhost:{}", port);
        if let Err(e) = open::that(&url) {
            eprintln!("Could not open browser: {}", e);
        }
    }

    skillmap_web::run(store, port).await
}

fn run_list(content_dir: PathBuf, json: bool, no_color: bool) -> Result<()> {
    let store = ContentStore::new(content_dir);

    if !json {
        eprint!("Loading content... ");
    }

    let report = store.load();

    if report.has_fatal_errors() {
        if !json {
            eprintln!();
        }
        eprintln!("Fatal errors during content load:");
        for error in report.errors.iter() {
            eprintln!("  - {}: {}", error.source, error.message);
        }
        anyhow::bail!("content load failed");
    }

    if !json {
        eprintln!("✓ {} roadmaps", store.roadmap_count());
    }

    println!(
        "{}",
        cli::format_roadmap_table(&store.roadmaps(), json, no_color)
    );

    Ok(())
}

fn run_show(content_dir: PathBuf, id: String, json: bool) -> Result<()> {
    let store = ContentStore::new(content_dir);

    if !json {
        eprint!("Loading content... ");
    }

    let report = store.load();

    if report.has_fatal_errors() {
        if !json {
            eprintln!();
        }
        eprintln!("Fatal errors during content load:");
        for error in report.errors.iter() {
            eprintln!("  - {}: {}", error.source, error.message);
        }
        anyhow::bail!("content load failed");
    }

    if !json {
        eprintln!("✓");
    }

    let roadmap = cli::find_roadmap(&store.roadmaps(), &id)?;

    println!("{}", cli::format_roadmap_info(&roadmap, &store.site(), json));

    Ok(())
}

fn run_check(content_dir: PathBuf) -> Result<()> {
    let store = ContentStore::new(content_dir);
    let report = store.load();

    println!("skillmap - Content Check");
    println!("========================");
    println!();
    println!("Content directory: {}", store.content_dir().display());
    println!(
        "Site config:       {}",
        if report.site_loaded {
            "ok"
        } else {
            "missing (defaults in use)"
        }
    );
    println!("Roadmaps scanned:  {}", report.roadmaps_scanned);
    println!("Roadmaps loaded:   {}", store.roadmap_count());
    println!("Roadmaps failed:   {}", report.roadmaps_failed);

    if let DegradedState::Partial { missing, .. } = store.degraded_state() {
        println!("Degraded:          missing {}", missing.join(", "));
    }

    if report.has_errors() {
        let (warnings, errors, fatal) = report.error_count();
        println!();
        println!(
            "Problems ({} warnings, {} errors, {} fatal):",
            warnings, errors, fatal
        );
        for error in report.errors.iter() {
            println!("  - {}: {}", error.source, error.message);
        }
    }

    println!();
    if report.has_fatal_errors() {
        println!("❌ Content check failed");
        std::process::exit(1);
    } else if report.has_errors() {
        println!("✓ Servable (some content was skipped, see problems above)");
    } else {
        println!("✓ Content is valid");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_serve_uses_shared_default_port() {
        let cli = Cli::parse_from(["skillmap", "serve"]);
        match cli.mode {
            Some(Mode::Serve { port, open }) => {
                assert_eq!(port, DEFAULT_PORT);
                assert!(!open);
            }
            _ => panic!("expected serve mode"),
        }
    }

    #[test]
    fn test_show_fails_on_fatal_load() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("nonexistent");

        let err = run_show(missing, "frontend".to_string(), true).unwrap_err();
        assert_eq!(err.to_string(), "content load failed");
    }

    #[test]
    fn test_show_reports_unknown_id_when_content_loads() {
        let dir = tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("roadmaps")).unwrap();

        let err = run_show(dir.path().to_path_buf(), "frontend".to_string(), true).unwrap_err();
        assert!(err.to_string().contains("Roadmap not found: frontend"));
    }
}
