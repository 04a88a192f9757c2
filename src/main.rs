use clap::{Parser, ValueEnum};
use docpage::{DocpageError, MarkdownOptions, PackageIdPolicy, PageRenderer, loader};
use log::info;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// The rendered `<article>` fragment.
    Html,
    /// A standalone HTML document.
    Document,
    /// The markup tree as JSON.
    Json,
}

/// Render a native plugin documentation page from its page-data JSON.
#[derive(Debug, Parser)]
#[command(name = "docpage", version)]
struct Cli {
    /// Path to the page-data JSON file.
    page: PathBuf,

    /// Write output here instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Html)]
    format: OutputFormat,

    /// Fail when the package identifier is not of the form `scope/name`.
    #[arg(long)]
    strict_package_ids: bool,

    /// Do not add `id` anchors to markdown headings.
    #[arg(long)]
    no_heading_anchors: bool,
}

fn main() -> Result<(), DocpageError> {
    env_logger::init();
    let cli = Cli::parse();

    let policy = if cli.strict_package_ids {
        PackageIdPolicy::Reject
    } else {
        PackageIdPolicy::FallbackToFullId
    };
    let renderer = PageRenderer::builder()
        .with_package_id_policy(policy)
        .with_markdown_options(MarkdownOptions {
            heading_anchors: !cli.no_heading_anchors,
            ..Default::default()
        })
        .build();

    info!("Loading page data from {}", cli.page.display());
    let page = loader::load_page(&cli.page)?;

    let rendered = match cli.format {
        OutputFormat::Html => renderer.render_html(&page)?,
        OutputFormat::Document => renderer.render_document(&page)?,
        OutputFormat::Json => serde_json::to_string_pretty(&renderer.render(&page)?)?,
    };

    match &cli.output {
        Some(path) => {
            fs::write(path, rendered)?;
            info!("Wrote {}", path.display());
        }
        None => io::stdout().write_all(rendered.as_bytes())?,
    }
    Ok(())
}
