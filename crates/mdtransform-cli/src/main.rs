mod page;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use mdtransform_config::Config;
use mdtransform_engine::parse_document;
use std::path::{Path, PathBuf};
use xi_rope::Rope;

#[derive(Parser)]
#[command(
    name = "mdtransform",
    version,
    about = "Convert Markdown to HTML with a table of contents"
)]
struct Cli {
    /// Markdown file to convert
    input: PathBuf,

    /// Directory to write the HTML page to
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Config file (default: ~/.config/mdtransform/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Prefix table of contents entries with section numbers
    #[arg(long)]
    numbered_toc: bool,

    /// Reject lines longer than this many bytes
    #[arg(long)]
    max_line_length: Option<usize>,

    /// Also write the table of contents as JSON
    #[arg(long)]
    toc_json: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let cli = Cli::parse();
    let config = load_config(&cli)?;
    run(&cli, &config).map(|_| ())
}

fn load_config(cli: &Cli) -> Result<Config> {
    let (config_path, loaded) = match &cli.config {
        Some(path) => (path.clone(), Config::load_from_path(path)?),
        None => (Config::config_path(), Config::load()?),
    };
    let mut config = match loaded {
        Some(config) => {
            info!("Loaded config from {}", config_path.display());
            config
        }
        None => {
            info!("No config at {}, using defaults", config_path.display());
            Config::default()
        }
    };

    if let Some(dir) = &cli.output_dir {
        config.output_dir = dir.clone();
    }
    if let Some(limit) = cli.max_line_length {
        config.max_line_length = limit;
    }
    if cli.numbered_toc {
        config.numbered_toc = true;
    }
    Ok(config)
}

/// Converts the input file and returns the path of the written page.
fn run(cli: &Cli, config: &Config) -> Result<PathBuf> {
    info!("Converting {}", cli.input.display());
    let source = std::fs::read_to_string(&cli.input)
        .with_context(|| format!("Failed to read {}", cli.input.display()))?;

    let doc = parse_document(&Rope::from(source), &config.parse_options())
        .with_context(|| format!("Failed to parse {}", cli.input.display()))?;
    let rendered = doc.render(&config.render_options());

    std::fs::create_dir_all(&config.output_dir).with_context(|| {
        format!(
            "Failed to create output directory {}",
            config.output_dir.display()
        )
    })?;
    let out_path = output_path(&config.output_dir, &cli.input);
    std::fs::write(&out_path, page::html_page(&config.title, &rendered))
        .with_context(|| format!("Failed to write {}", out_path.display()))?;
    info!("Wrote {}", out_path.display());

    if let Some(json_path) = &cli.toc_json {
        let json = serde_json::to_string_pretty(doc.toc())?;
        std::fs::write(json_path, json)
            .with_context(|| format!("Failed to write {}", json_path.display()))?;
        info!("Wrote table of contents to {}", json_path.display());
    }

    Ok(out_path)
}

/// `<dir>/<input stem>.html`
fn output_path(dir: &Path, input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "index".to_string());
    dir.join(format!("{stem}.html"))
}
