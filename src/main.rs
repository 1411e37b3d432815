use clap::{Parser, Subcommand};
use folio::sim::{PageLayout, Session, Viewport, parse_steps};
use folio::{config, content, generate, output};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

fn version_string() -> &'static str {
    let on_tag = env!("ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "Single-page personal profile site generator")]
#[command(long_about = "\
Single-page personal profile site generator

One page: a hero, then About, Experience, Projects and Contact sections.
The nav bar condenses once the page is scrolled, sections fade in as they
enter the viewport, and menu links smooth-scroll to their section.

Content structure:

  content/
  ├── config.toml       # Site config (optional)
  ├── profile.toml      # Profile text (optional, sparse over a sample profile)
  └── assets/           # Copied verbatim to the output root

Simulation steps (folio simulate):
  scroll=<px>   user scrolls to an absolute offset
  toggle        press the menu toggle
  nav=<id>      click an in-page link (about, #contact, #)
  wait=<ms>     let smooth scrolling run

Run 'folio gen-config' to generate a documented config.toml.")]
#[command(version = version_string())]
struct Cli {
    /// Content directory
    #[arg(long, default_value = "content", global = true)]
    source: PathBuf,

    /// Output directory
    #[arg(long, default_value = "dist", global = true)]
    output: PathBuf,

    /// Log debug output to stderr (RUST_LOG overrides)
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render the profile page into the output directory
    Build,
    /// Validate config.toml and profile.toml without writing anything
    Check,
    /// Print a stock config.toml with all options documented
    GenConfig,
    /// Drive the view layer through a scripted session
    Simulate {
        /// Steps to run, in order
        #[arg(required = true, value_name = "STEP")]
        steps: Vec<String>,
        /// Print the trace as JSON
        #[arg(long)]
        json: bool,
        /// Write the page as rendered after the last step
        #[arg(long, value_name = "FILE")]
        html: Option<PathBuf>,
    },
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "folio=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Command::Build => {
            println!("==> Building {}", cli.source.display());
            let report = generate::generate(&cli.source, &cli.output)?;
            output::print_build_output(&report, &cli.output);
            println!("==> Build complete: {}", cli.output.display());
        }
        Command::Check => {
            println!("==> Checking {}", cli.source.display());
            let site_config = config::load_config(&cli.source)?;
            let profile = content::load_profile(&cli.source)?;
            output::print_check_output(&profile, &site_config);
            println!("==> Content is valid");
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
        Command::Simulate { steps, json, html } => {
            let steps = parse_steps(steps.as_slice())?;
            let site_config = config::load_config(&cli.source)?;
            let profile = content::load_profile(&cli.source)?;
            let viewport = Viewport {
                width: f64::from(site_config.viewport.width),
                height: f64::from(site_config.viewport.height),
            };
            let layout = PageLayout::from_profile(&profile, viewport);

            let mut session = Session::start(layout, site_config.scroll)?;
            let mut trace = Vec::with_capacity(steps.len());
            for step in steps {
                session.apply(&step);
                trace.push((step, session.snapshot()));
            }

            if let Some(path) = html {
                let last = session.snapshot();
                let page = generate::render_page(&profile, &site_config, last.render_state());
                std::fs::write(&path, page.into_string())?;
                tracing::info!(path = %path.display(), "wrote rendered page");
            }
            session.finish();

            if json {
                let entries: Vec<_> = trace
                    .iter()
                    .map(|(step, snap)| serde_json::json!({ "step": step.to_string(), "state": snap }))
                    .collect();
                println!("{}", serde_json::to_string_pretty(&entries)?);
            } else {
                output::print_simulate_output(&trace);
            }
        }
    }

    Ok(())
}
