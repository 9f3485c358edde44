mod audit;
mod parser;

use std::io::Read;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};

use parser::{process_input, PipelineOutput, DEFAULT_TOPIC};

#[derive(Parser)]
#[command(
    name = "listening-blocks",
    about = "Generador de bloques de búsqueda de listening a partir de texto pegado"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate search blocks from pasted post metadata
    Generate {
        /// Input file (reads stdin when omitted)
        input: Option<PathBuf>,
        /// Write the export (.md, blocks joined with OR) to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Topic used in block headers
        #[arg(short, long, default_value = DEFAULT_TOPIC)]
        topic: String,
    },
    /// Generate blocks, then audit that no identifier was silently dropped
    Audit {
        /// Input file (reads stdin when omitted)
        input: Option<PathBuf>,
        /// Emit findings as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show pipeline counts for an input
    Stats {
        /// Input file (reads stdin when omitted)
        input: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            input,
            output,
            topic,
        } => {
            let raw = read_input(input.as_deref())?;
            let out = process_input(&raw, &topic);
            eprintln!("{}", out.status());

            if out.blocks.is_empty() {
                return Ok(());
            }
            match output {
                Some(path) => {
                    std::fs::write(&path, out.export())
                        .with_context(|| format!("no se pudo escribir {}", path.display()))?;
                    eprintln!("Bloques guardados en {}", path.display());
                }
                None => println!("{}", out.export()),
            }
            Ok(())
        }
        Commands::Audit { input, json } => {
            let raw = read_input(input.as_deref())?;
            let out = process_input(&raw, DEFAULT_TOPIC);
            eprintln!("{}", out.status());

            let findings = audit::verify(&out.rows, &out.block_identifiers);
            if json {
                println!("{}", serde_json::to_string_pretty(&findings)?);
            } else {
                for finding in &findings {
                    match finding {
                        audit::AuditFinding::Success { message } => println!("Éxito: {}", message),
                        audit::AuditFinding::MissingIdentifier {
                            title,
                            message,
                            original_link,
                        } => {
                            println!("Identificador ausente: {}", title);
                            println!("  {}", message);
                            println!("  Enlace original: {}", original_link);
                        }
                    }
                }
            }
            Ok(())
        }
        Commands::Stats { input } => {
            let raw = read_input(input.as_deref())?;
            let out = process_input(&raw, DEFAULT_TOPIC);
            print_stats(&out);
            Ok(())
        }
    }
}

fn read_input(path: Option<&std::path::Path>) -> anyhow::Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("no se pudo leer {}", path.display())),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("no se pudo leer la entrada estándar")?;
            Ok(buf)
        }
    }
}

fn print_stats(out: &PipelineOutput) {
    use parser::extract::platform::Platform;

    let count_for = |p: Platform| out.rows.iter().filter(|r| r.platform == p).count();
    let resolved = out.rows.iter().filter(|r| r.identifier.is_some()).count();

    println!("Enlaces:       {}", out.links_found);
    println!("Filas:         {}", out.rows.len());
    println!("LinkedIn:      {}", out.skipped_linkedin);
    println!("Facebook:      {}", count_for(Platform::Facebook));
    println!("TikTok:        {}", count_for(Platform::TikTok));
    println!("Instagram:     {}", count_for(Platform::Instagram));
    println!("Desconocidas:  {}", count_for(Platform::Unknown));
    println!("Con ID:        {}", resolved);
    println!("Bloques:       {}", out.blocks.len());
}
