//! prosemirror2html CLI - ProseMirror JSON to HTML tool

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use colored::Colorize;

use prosemirror2html::{Node, RenderOptions, Renderer};

#[derive(Parser)]
#[command(name = "prosemirror2html")]
#[command(version)]
#[command(about = "Render ProseMirror JSON documents to HTML", long_about = None)]
struct Cli {
    /// Input JSON file ("-" for stdin)
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output file (stdout if not specified)
    #[arg(value_name = "OUTPUT")]
    output: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a document to HTML
    Render {
        /// Input JSON file ("-" for stdin)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Maximum node nesting depth (0 = unlimited)
        #[arg(long, env = "PROSEMIRROR2HTML_MAX_DEPTH")]
        max_depth: Option<usize>,
    },

    /// Check that a document renders without errors
    Check {
        /// Input JSON file ("-" for stdin)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Maximum node nesting depth (0 = unlimited)
        #[arg(long, env = "PROSEMIRROR2HTML_MAX_DEPTH")]
        max_depth: Option<usize>,
    },

    /// List the supported node and mark types
    Types,

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
            max_depth,
        }) => cmd_render(&input, output.as_deref(), max_depth),
        Some(Commands::Check { input, max_depth }) => cmd_check(&input, max_depth),
        Some(Commands::Types) => {
            cmd_types();
            Ok(())
        }
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            // Default behavior: render if input is provided
            if let Some(input) = cli.input {
                cmd_render(&input, cli.output.as_deref(), None)
            } else {
                println!("{}", "Usage: prosemirror2html <FILE> [OUTPUT]".yellow());
                println!("       prosemirror2html --help for more information");
                Ok(())
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn build_renderer(max_depth: Option<usize>) -> Renderer {
    let options = match max_depth {
        Some(0) => RenderOptions::new().without_depth_limit(),
        Some(depth) => RenderOptions::new().with_max_depth(depth),
        None => RenderOptions::default(),
    };
    Renderer::new().with_options(options)
}

fn read_input(input: &Path) -> io::Result<Vec<u8>> {
    if input == Path::new("-") {
        let mut data = Vec::new();
        io::stdin().read_to_end(&mut data)?;
        Ok(data)
    } else {
        fs::read(input)
    }
}

fn cmd_render(
    input: &Path,
    output: Option<&Path>,
    max_depth: Option<usize>,
) -> Result<(), Box<dyn std::error::Error>> {
    let data = read_input(input)?;
    log::debug!("Read {} bytes from {}", data.len(), input.display());
    let html = build_renderer(max_depth).render(&data)?;

    if let Some(path) = output {
        fs::write(path, &html)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", html);
    }

    Ok(())
}

fn cmd_check(input: &Path, max_depth: Option<usize>) -> Result<(), Box<dyn std::error::Error>> {
    let data = read_input(input)?;
    let renderer = build_renderer(max_depth);
    let root: Node = renderer.parse_node(&data)?;
    let html = renderer.render_document(&root)?;

    println!("{} {}", "OK".green().bold(), input.display());
    println!(
        "  {} {} top-level node(s), depth {}",
        "├─".dimmed(),
        root.content.len(),
        root.depth()
    );
    println!("  {} {} bytes of HTML", "└─".dimmed(), html.len());

    Ok(())
}

fn cmd_types() {
    let renderer = Renderer::new();
    let registry = renderer.registry();

    println!("{}", "Node types".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());
    for name in registry.node_types() {
        println!("  {}", name);
    }

    println!();
    println!("{}", "Mark types".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());
    for name in registry.mark_types() {
        println!("  {}", name);
    }
}

fn cmd_version() {
    println!(
        "{} {}",
        "prosemirror2html".cyan().bold(),
        env!("CARGO_PKG_VERSION")
    );
    println!("ProseMirror JSON to HTML renderer");
    println!();
    println!("License: MIT");
}
