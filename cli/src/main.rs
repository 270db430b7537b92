//! resumedocx CLI - render resume JSON files into Word documents

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use colored::Colorize;

use resumedocx::render::{self, JsonFormat, StyleConfig};
use resumedocx::{ResumeDocument, ResumeRenderer};

#[derive(Parser)]
#[command(name = "resumedocx")]
#[command(author = "iyulab")]
#[command(version)]
#[command(about = "Render resume JSON files into Word documents", long_about = None)]
struct Cli {
    /// Input resume JSON file
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output .docx file
    #[arg(value_name = "OUTPUT")]
    output: Option<PathBuf>,

    /// Style configuration JSON file
    #[arg(long, value_name = "STYLE")]
    style: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a resume to .docx
    Render {
        /// Input resume JSON file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (input name with .docx extension if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Style configuration JSON file
        #[arg(long, value_name = "STYLE")]
        style: Option<PathBuf>,
    },

    /// Print a plain text preview of the rendered resume
    Preview {
        /// Input resume JSON file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Style configuration JSON file
        #[arg(long, value_name = "STYLE")]
        style: Option<PathBuf>,

        /// Line width
        #[arg(short, long, default_value_t = render::DEFAULT_TEXT_WIDTH)]
        width: usize,
    },

    /// Validate a resume and show layout statistics
    Info {
        /// Input resume JSON file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Print statistics as JSON
        #[arg(long)]
        json: bool,
    },

    /// Re-emit a resume as normalized JSON
    Json {
        /// Input resume JSON file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Print the default style configuration
    Style,

    /// Show version information
    Version,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Render {
            input,
            output,
            style,
        }) => cmd_render(&input, output.as_deref(), style.as_deref()),
        Some(Commands::Preview {
            input,
            style,
            width,
        }) => cmd_preview(&input, style.as_deref(), width),
        Some(Commands::Info { input, json }) => cmd_info(&input, json),
        Some(Commands::Json {
            input,
            output,
            compact,
        }) => cmd_json(&input, output.as_deref(), compact),
        Some(Commands::Style) => cmd_style(),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            // Default behavior: render if input is provided
            if let Some(input) = cli.input {
                cmd_render(&input, cli.output.as_deref(), cli.style.as_deref())
            } else {
                println!("{}", "Usage: resumedocx <FILE> [OUTPUT]".yellow());
                println!("       resumedocx --help for more information");
                Ok(())
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn load_style(path: Option<&Path>) -> Result<StyleConfig, Box<dyn std::error::Error>> {
    match path {
        Some(path) => Ok(StyleConfig::from_json_file(path)?),
        None => Ok(StyleConfig::default()),
    }
}

fn default_output(input: &Path) -> PathBuf {
    input.with_extension("docx")
}

fn cmd_render(
    input: &Path,
    output: Option<&Path>,
    style: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let doc = render::from_json_file(input)?;
    let style = load_style(style)?;

    let output = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| default_output(input));

    resumedocx::render_to_file(&doc, &style, &output)?;
    println!("{} {}", "Resume saved to:".green(), output.display());

    Ok(())
}

fn cmd_preview(
    input: &Path,
    style: Option<&Path>,
    width: usize,
) -> Result<(), Box<dyn std::error::Error>> {
    let doc = render::from_json_file(input)?;
    let style = load_style(style)?;

    let layout = ResumeRenderer::new(style).layout(&doc)?;
    println!("{}", render::to_text_with_width(&layout, width));

    Ok(())
}

fn cmd_info(input: &Path, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let doc: ResumeDocument = render::from_json_file(input)?;
    let (_, stats) = ResumeRenderer::default().layout_with_stats(&doc)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }

    println!("{}", "Resume Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "File".bold(), input.display());
    println!("{}: {}", "Name".bold(), doc.display_name());
    println!("{}: {}", "Valid".bold(), "Yes".green());
    for section in &doc.sections {
        println!(
            "  {} {} ({} entries)",
            "├─".dimmed(),
            section.title,
            section.entries.len()
        );
    }

    println!();
    println!("{}", "Layout Statistics".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "Paragraphs".bold(), stats.paragraph_count);
    println!("{}: {}", "Tables".bold(), stats.table_count);
    println!("{}: {}", "Banners".bold(), stats.banner_count);
    println!("{}: {}", "Bullets".bold(), stats.bullet_count);
    println!("{}: {}", "Words".bold(), stats.word_count);
    println!("{}: {}", "Characters".bold(), stats.char_count);

    Ok(())
}

fn cmd_json(
    input: &Path,
    output: Option<&Path>,
    compact: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let doc = render::from_json_file(input)?;

    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };

    let json = render::to_json(&doc, format)?;

    if let Some(path) = output {
        fs::write(path, &json)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", json);
    }

    Ok(())
}

fn cmd_style() -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", StyleConfig::default().to_json()?);
    Ok(())
}

fn cmd_version() {
    println!("{} {}", "resumedocx".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Resume to Word document renderer");
    println!();
    println!(
        "Repository: {}",
        "https://github.com/iyulab/resumedocx".dimmed()
    );
    println!("License: MIT");
}
