//! infinitus-report CLI - writes the INFINITUS strategic analysis DOCX

use std::fmt::Display;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use log::debug;

use infinitus_report::{
    detect_format_from_path, inspect_file, inspect_properties, GeneratedReport, OUTPUT_FILENAME,
};

/// Exit status after a failed generation.
const EXIT_FAILURE: i32 = 1;

/// Suggestions printed after a failed generation.
const REMEDIATION_HINTS: &[&str] = &[
    "Reinstalar a ferramenta: cargo install --path cli",
    "Verificar permissões de escrita na pasta atual",
    "Tentar executar como administrador se necessário",
];

#[derive(Parser)]
#[command(name = "infinitus-report")]
#[command(author = "INFINITUS Sistemas Inteligentes")]
#[command(version)]
#[command(about = "Gera o documento Word da análise estratégica INFINITUS", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the structure of an existing DOCX file
    Verify {
        /// DOCX file to inspect
        #[arg(value_name = "FILE", default_value = OUTPUT_FILENAME)]
        file: PathBuf,
    },

    /// Show version information
    Version,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Verify { file }) => {
            if let Err(e) = cmd_verify(&file) {
                println!("{}: {}", "Erro".red().bold(), e);
                std::process::exit(1);
            }
        }
        Some(Commands::Version) => cmd_version(),
        None => {
            if let Err(e) = cmd_generate() {
                let mut stdout = io::stdout().lock();
                let code = report_failure(&mut stdout, &e).unwrap_or(EXIT_FAILURE);
                std::process::exit(code);
            }
        }
    }
}

/// Print a failed generation with the remediation list and return the exit status.
fn report_failure<W: Write>(out: &mut W, err: &dyn Display) -> io::Result<i32> {
    writeln!(out, "❌ Erro ao criar documento: {}", err.to_string().red())?;
    writeln!(out, "\n{}", "🔧 Soluções:".yellow().bold())?;
    for (i, hint) in REMEDIATION_HINTS.iter().enumerate() {
        writeln!(out, "{}. {}", i + 1, hint)?;
    }
    out.flush()?;
    Ok(EXIT_FAILURE)
}

fn cmd_generate() -> Result<(), Box<dyn std::error::Error>> {
    println!(
        "{}",
        "🚀 INFINITUS Sistemas Inteligentes - Gerador de Documento Word"
            .cyan()
            .bold()
    );
    println!("{}", "=".repeat(60).dimmed());
    println!("📝 Criando documento de análise estratégica...\n");

    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
    pb.enable_steady_tick(Duration::from_millis(80));
    pb.set_message("Montando e salvando o documento...");

    let report = match infinitus_report::create_report() {
        Ok(report) => report,
        Err(e) => {
            pb.finish_and_clear();
            return Err(e.into());
        }
    };
    pb.finish_and_clear();

    print_success(&report)?;
    Ok(())
}

fn print_success(report: &GeneratedReport) -> Result<(), Box<dyn std::error::Error>> {
    let name = report.file_name();
    debug!("report stats: {:?}", report.stats);

    println!(
        "{} {}",
        "✅ Documento Word criado com sucesso:".green(),
        name.bold()
    );
    println!("📁 Localização: {}", report.absolute_path()?.display());
    println!(
        "📄 Páginas: ~{} páginas aproximadamente",
        report.stats.estimated_pages()
    );

    println!("\n{}", "🎯 Para abrir o documento:".bold());
    println!("   • Windows: start {}", name);
    println!("   • Mac: open {}", name);
    println!("   • Linux: xdg-open {}", name);

    println!(
        "\n{} Documento {} criado e pronto para download!",
        "🎉 Sucesso!".green().bold(),
        name
    );
    println!("\n{}", "💡 Este documento pode ser:".bold());
    println!("   • Editado no Microsoft Word");
    println!("   • Convertido para PDF");
    println!("   • Compartilhado com investidores");
    println!("   • Usado em apresentações");

    Ok(())
}

fn cmd_verify(file: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let format = detect_format_from_path(file)?;
    let outline = inspect_file(file)?;
    let properties = inspect_properties(&std::fs::read(file)?)?;

    println!("{}", "Estrutura do Documento".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());
    println!("{}: {}", "Arquivo".bold(), file.display());
    println!(
        "{}: {} ({})",
        "Formato".bold(),
        format,
        if format.deflated { "compactado" } else { "sem compressão" }
    );
    if let Some(title) = properties.get("title") {
        println!("{}: {}", "Título".bold(), title);
    }
    println!("{}: {}", "Parágrafos".bold(), outline.body_paragraphs);
    println!("{}: {}", "Títulos".bold(), outline.headings);
    println!("{}: {}", "Tabelas".bold(), outline.tables);
    println!("{}: {}", "Linhas de tabela".bold(), outline.table_rows);

    let expected = infinitus_report::build_report().stats();
    println!("{}: {}", "Palavras (relatório)".bold(), expected.words);
    if outline.matches(&expected) {
        println!("\n{}", "✅ Estrutura confere com o relatório".green());
    } else {
        println!(
            "\n{}",
            "⚠️  Estrutura difere do relatório gerado por esta versão".yellow()
        );
    }

    Ok(())
}

fn cmd_version() {
    println!(
        "{} {}",
        "infinitus-report".cyan().bold(),
        env!("CARGO_PKG_VERSION")
    );
    println!("Gerador da análise estratégica INFINITUS (DOCX)");
    println!();
    println!("Saída: {}", OUTPUT_FILENAME.dimmed());
    println!("License: MIT");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn failure_output(err: &dyn Display) -> (String, i32) {
        let mut out = Vec::new();
        let code = report_failure(&mut out, err).unwrap();
        (String::from_utf8(out).unwrap(), code)
    }

    #[test]
    fn test_failure_prints_error_and_hints() {
        let err = infinitus_report::Error::Io(io::Error::new(
            io::ErrorKind::PermissionDenied,
            "read-only folder",
        ));
        let (output, code) = failure_output(&err);

        assert_eq!(code, 1);
        assert!(output.starts_with("❌ Erro ao criar documento: "));
        assert!(output.contains("I/O error: read-only folder"));
        assert!(output.contains("🔧 Soluções:"));
        assert!(output.contains("1. Reinstalar a ferramenta: cargo install --path cli"));
        assert!(output.contains("2. Verificar permissões de escrita na pasta atual"));
        assert!(output.contains("3. Tentar executar como administrador se necessário"));
    }

    #[test]
    fn test_failure_when_output_path_is_a_directory() {
        let err = infinitus_report::write_report_to(std::env::temp_dir()).unwrap_err();
        assert!(matches!(err, infinitus_report::Error::Io(_)));

        let (output, code) = failure_output(&err);
        assert_eq!(code, EXIT_FAILURE);
        assert!(output.contains("I/O error: "));
        assert_eq!(output.lines().filter(|l| l.starts_with(char::is_numeric)).count(), 3);
    }

    #[test]
    fn test_cli_parses_default_and_subcommands() {
        let cli = Cli::try_parse_from(["infinitus-report"]).unwrap();
        assert!(cli.command.is_none());

        let cli = Cli::try_parse_from(["infinitus-report", "verify"]).unwrap();
        match cli.command {
            Some(Commands::Verify { file }) => assert_eq!(file, PathBuf::from(OUTPUT_FILENAME)),
            _ => panic!("expected verify"),
        }
    }
}
