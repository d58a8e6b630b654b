use anyhow::Context;
use clap::{Parser, Subcommand};
use comfort_engine::{score_comfort, BackgroundIndex, ComfortOptions, Srgb};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use colorcomfort::models::{
    parse_palette_list, resolve_ambient, AppConfig, ComfortResponse, ContrastResponse,
    GridResponse,
};
use colorcomfort::server;
use colorcomfort::services::{GridOptions, PaletteGrid};

#[derive(Parser)]
#[command(name = "colorcomfort")]
#[command(about = "Color Comfort - WCAG contrast and reading comfort for color palettes")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Contrast ratio and WCAG level of two colors
    Contrast {
        /// First color (e.g. "#7f42ff", "rgb(0, 0, 0)", "white")
        a: String,

        /// Second color
        b: String,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Reading comfort score of a background/foreground pair
    Comfort {
        /// Background color
        bg: String,

        /// Foreground (text) color
        fg: String,

        /// Ambient light: dark, dim, medium, bright or a number in 0..1
        #[arg(short, long)]
        ambient: Option<String>,

        /// Treat the second color as the background
        #[arg(long)]
        swap: bool,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Contrast grid for a palette
    Grid {
        /// Palette as comma-separated color[:role] items (e.g. "#f8f8f8:bg,#000:fg").
        /// Defaults to the configured palette.
        #[arg(short, long)]
        colors: Option<String>,

        /// Ambient light: dark, dim, medium, bright or a number in 0..1
        #[arg(short, long)]
        ambient: Option<String>,

        /// Skip comfort scores
        #[arg(long)]
        no_comfort: bool,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Start the HTTP server
    Serve,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Contrast { a, b, json }) => {
            init_tracing("colorcomfort=warn", false);
            run_contrast_command(&a, &b, json)
        }
        Some(Commands::Comfort {
            bg,
            fg,
            ambient,
            swap,
            json,
        }) => {
            init_tracing("colorcomfort=warn", false);
            run_comfort_command(&bg, &fg, ambient.as_deref(), swap, json)
        }
        Some(Commands::Grid {
            colors,
            ambient,
            no_comfort,
            json,
        }) => {
            init_tracing("colorcomfort=warn", false);
            run_grid_command(colors.as_deref(), ambient.as_deref(), no_comfort, json)
        }
        Some(Commands::Serve) => {
            init_tracing("colorcomfort=info,tower_http=debug", true);
            run_server().await
        }
        None => {
            run_status_command();
            Ok(())
        }
    }
}

/// Initialize tracing with `RUST_LOG`, or `default_filter` when unset
fn init_tracing(default_filter: &str, with_time: bool) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_filter.into());
    let registry = tracing_subscriber::registry().with(filter);
    if with_time {
        registry.with(tracing_subscriber::fmt::layer()).init();
    } else {
        // Minimal logging for CLI
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .without_time()
                    .with_writer(std::io::stderr),
            )
            .init();
    }
}

fn load_config() -> AppConfig {
    let config_file = std::env::var("CONFIG_FILE").ok().map(PathBuf::from);
    AppConfig::load(config_file.as_deref())
}

fn parse_color(label: &str, value: &str) -> anyhow::Result<Srgb> {
    value
        .parse()
        .with_context(|| format!("Invalid {label} color {value:?}"))
}

fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Print contrast ratio and level for two colors
fn run_contrast_command(a: &str, b: &str, json: bool) -> anyhow::Result<()> {
    let a = parse_color("first", a)?;
    let b = parse_color("second", b)?;
    let report = ContrastResponse::new(&a, &b);

    if json {
        return print_json(&report);
    }

    println!("{} vs {}", a.to_hex(), b.to_hex());
    println!("  Ratio: {:.2}:1", report.ratio);
    println!("  Level: {}", report.level);
    println!(
        "  Labels: {} on {}, {} on {}",
        report.text_color_a,
        a.to_hex(),
        report.text_color_b,
        b.to_hex()
    );
    Ok(())
}

/// Print the comfort score and its breakdown for a pair
fn run_comfort_command(
    bg: &str,
    fg: &str,
    ambient: Option<&str>,
    swap: bool,
    json: bool,
) -> anyhow::Result<()> {
    let config = load_config();
    let bg = parse_color("background", bg)?;
    let fg = parse_color("foreground", fg)?;

    let background = if swap {
        BackgroundIndex::Second
    } else {
        BackgroundIndex::First
    };
    let options = ComfortOptions::new()
        .maybe_ambient(resolve_ambient(ambient, config.ambient.as_ref()))
        .background(background);

    let result = score_comfort(&bg, &fg, &options);
    let report = ComfortResponse::new(&result, options.ambient_luminance());

    if json {
        return print_json(&report);
    }

    let (surface, text) = background.split(&bg, &fg);
    println!("{} on {}", text.to_hex(), surface.to_hex());
    println!("  Score:   {} ({})", report.score, report.label);
    println!("  Ambient: {:.2}", report.ambient);
    println!("  {}", report.description);
    println!();
    for factor in &report.factors {
        println!("  {:<26} {:>7.2}", factor.label, factor.penalty);
    }
    Ok(())
}

/// Print a contrast grid for a palette
fn run_grid_command(
    colors: Option<&str>,
    ambient: Option<&str>,
    no_comfort: bool,
    json: bool,
) -> anyhow::Result<()> {
    let config = load_config();
    let entries = match colors {
        Some(list) => parse_palette_list(list)?,
        None => config.palette.clone(),
    };
    let options = GridOptions {
        ambient: resolve_ambient(ambient, config.ambient.as_ref()),
        comfort_enabled: config.comfort_enabled && !no_comfort,
    };

    let grid = PaletteGrid::build(&entries, &options)?;
    let report = GridResponse::from(&grid);

    if json {
        return print_json(&report);
    }

    const WIDTH: usize = 18;
    let title = |i: usize| {
        let header = &report.headers[i];
        format!("{} {}", header.color.to_uppercase(), header.role.abbrev())
    };

    print!("{:WIDTH$}", "");
    for i in 0..report.headers.len() {
        print!("{:<WIDTH$}", title(i));
    }
    println!();

    for row in 0..report.headers.len() {
        print!("{:<WIDTH$}", title(row));
        for column in 0..report.headers.len() {
            let text = match report
                .cells
                .iter()
                .find(|cell| cell.row == row && cell.column == column)
            {
                None => "-".to_string(),
                Some(cell) => match &cell.comfort {
                    Some(comfort) => {
                        format!("{:.2} {} ({})", cell.ratio, cell.level, comfort.score)
                    }
                    None => format!("{:.2} {}", cell.ratio, cell.level),
                },
            };
            print!("{text:<WIDTH$}");
        }
        println!();
    }

    println!();
    println!("AAA  >= 7:1     AA  >= 4.5:1     AA18  >= 3:1 (large text only)");
    if report.comfort_enabled {
        println!(
            "(n)  comfort score for bg/fg pairs, ambient {:.2}",
            report.ambient
        );
    }
    Ok(())
}

/// Display status and configuration information
fn run_status_command() {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    // Read environment variables
    let bind_addr = std::env::var("BIND_ADDR").ok();
    let config_file = std::env::var("CONFIG_FILE").ok();

    // Header
    println!("Color Comfort v{VERSION}");
    println!("WCAG contrast and reading comfort for color palettes\n");

    // Environment variables section
    println!("Environment Variables:");
    println!(
        "  BIND_ADDR   = {}",
        bind_addr.as_deref().unwrap_or("0.0.0.0:3000 (default)")
    );
    println!(
        "  CONFIG_FILE = {}",
        config_file.as_deref().unwrap_or("(not set)")
    );

    // Config source
    let config_source = match config_file {
        Some(ref path) if PathBuf::from(path).exists() => path.to_string(),
        Some(_) => "defaults (file not found)".to_string(),
        None => "defaults".to_string(),
    };
    println!("\nConfig:  {config_source}");

    // Commands section
    println!("\nCommands:");
    println!("  colorcomfort contrast   Contrast ratio and WCAG level of two colors");
    println!("  colorcomfort comfort    Reading comfort score of a color pair");
    println!("  colorcomfort grid       Contrast grid for a palette");
    println!("  colorcomfort serve      Start the HTTP server");
    println!("\nRun 'colorcomfort --help' for more details.");
}

/// Run the HTTP server
async fn run_server() -> anyhow::Result<()> {
    let config_file = std::env::var("CONFIG_FILE").ok().map(PathBuf::from);
    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());

    tracing::info!(
        config = ?config_file.as_ref().map(|p| p.display().to_string()).unwrap_or_else(|| "defaults".to_string()),
        "Configuration source"
    );

    let config = AppConfig::load(config_file.as_deref());
    let state = server::create_app_state(config);
    let app = server::build_router(state);

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("Failed to bind {bind_addr}"))?;
    tracing::info!(addr = %bind_addr, "Color Comfort server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
