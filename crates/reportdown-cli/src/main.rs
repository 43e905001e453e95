use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use reportdown_config::Config;
use reportdown_engine::{RenderOptions, Renderer};
use std::fs;
use std::path::{Path, PathBuf};

/// Render a threat-assessment Markdown report to HTML.
#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    /// Input report (Markdown)
    input: PathBuf,

    /// Output file (default: input with .html extension, or the
    /// configured output directory)
    output: Option<PathBuf>,

    /// Escape HTML-significant characters from the source text
    #[arg(long, action = ArgAction::SetTrue)]
    escape: bool,

    /// Skip the severity badge pass
    #[arg(long = "no-highlight", action = ArgAction::SetTrue)]
    no_highlight: bool,

    /// Discard an unterminated code fence instead of rendering it
    #[arg(long = "drop-unclosed-fences", action = ArgAction::SetTrue)]
    drop_unclosed_fences: bool,

    /// Emit a complete standalone HTML page instead of a fragment
    #[arg(long, action = ArgAction::SetTrue)]
    standalone: bool,

    /// Page title for --standalone (default: input file stem)
    #[arg(long)]
    title: Option<String>,

    /// Config file (default: ~/.config/reportdown/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from_path(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => Config::load().context("failed to load config")?,
    }
    .unwrap_or_default();

    // CLI flags override configured defaults.
    let options = RenderOptions {
        escape_text: cli.escape || config.render.escape_text,
        drop_unclosed_fence: cli.drop_unclosed_fences || config.render.drop_unclosed_fence,
        highlight_severity: !cli.no_highlight && config.render.highlight_severity,
    };

    let source = fs::read_to_string(&cli.input)
        .with_context(|| format!("failed to read {}", cli.input.display()))?;

    let html = Renderer::new(options).render(&source);
    let html = if cli.standalone {
        let title = cli
            .title
            .clone()
            .unwrap_or_else(|| file_stem(&cli.input).to_string());
        standalone_page(&title, &html)
    } else {
        html
    };

    let out_path = output_path(&cli.input, cli.output.as_deref(), config.output_dir.as_deref());
    if let Some(parent) = out_path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    fs::write(&out_path, html)
        .with_context(|| format!("failed to write {}", out_path.display()))?;

    println!("rendered {} -> {}", cli.input.display(), out_path.display());
    Ok(())
}

fn file_stem(path: &Path) -> &str {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("report")
}

/// Precedence: explicit output argument, then the configured output
/// directory (keeping the input's stem), then a sibling .html file.
fn output_path(input: &Path, output: Option<&Path>, output_dir: Option<&Path>) -> PathBuf {
    if let Some(output) = output {
        return output.to_path_buf();
    }
    if let Some(dir) = output_dir {
        return dir.join(format!("{}.html", file_stem(input)));
    }
    input.with_extension("html")
}

fn standalone_page(title: &str, content: &str) -> String {
    format!(
        "<!doctype html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{title}</title>\n</head>\n\
         <body style=\"margin: 0; background: #f8fafc;\">\n\
         <main style=\"max-width: 900px; margin: 0 auto; padding: 2rem; \
         font-family: system-ui, sans-serif; line-height: 1.6; background: #ffffff;\">\n\
         {content}\n</main>\n</body>\n</html>\n"
    )
}
