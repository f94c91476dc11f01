use std::path::PathBuf;

use anyhow::{Context, bail};
use clap::Parser;
use curtains_config::Config;
use curtains_render::Theme;

/// Compile a markdown slide source into a self-contained HTML presentation.
#[derive(Debug, Parser)]
#[command(name = "curtains", version, about)]
struct Cli {
    /// Presentation source file
    input: PathBuf,

    /// Output HTML file (default: input path with .html extension)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Page theme: light or dark
    #[arg(long)]
    theme: Option<String>,

    /// Print the parsed slide trees as JSON instead of writing HTML
    #[arg(long)]
    ast: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = Config::load_beside(&cli.input)
        .context("failed to load curtains.toml")?
        .unwrap_or_default();

    let raw = std::fs::read_to_string(&cli.input)
        .with_context(|| format!("failed to read {}", cli.input.display()))?;

    let presentation = curtains_engine::compile(&raw, &config.limits())
        .with_context(|| format!("failed to parse {}", cli.input.display()))?;

    if cli.ast {
        println!("{}", serde_json::to_string_pretty(&presentation)?);
        return Ok(());
    }

    // Flags win over the config file.
    let theme_name = cli
        .theme
        .or(config.theme)
        .unwrap_or_else(|| "light".to_string());
    let Some(theme) = Theme::from_name(&theme_name) else {
        bail!("unknown theme {theme_name:?}, expected \"light\" or \"dark\"");
    };

    let title = cli
        .input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "presentation".to_string());
    let page = curtains_render::render_presentation(&presentation, &title, theme);

    let output = cli
        .output
        .or(config.output)
        .unwrap_or_else(|| cli.input.with_extension("html"));
    std::fs::write(&output, page)
        .with_context(|| format!("failed to write {}", output.display()))?;

    println!(
        "{} -> {} ({} slides)",
        cli.input.display(),
        output.display(),
        presentation.slides.len()
    );
    Ok(())
}
