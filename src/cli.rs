use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use lexigen::{
    analyze, find_sample, prepare_clause, preview, DocumentStatus, ExtractionResult,
    ExtractorRegistry, MediaType, Upload, DEFAULT_MAX_UPLOAD_BYTES, EMPTY_CLAUSE_WARNING, SAMPLES,
};
use std::path::PathBuf;

/// Plain-language explanations of legal clauses
#[derive(Parser, Debug)]
#[command(name = "lexigen", version, about)]
pub struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Explain a clause from a document, pasted text or a sample
    Explain(ExplainArgs),

    /// Extract and show the text of a PDF or DOCX document
    Extract(ExtractArgs),

    /// List the built-in sample clauses
    Samples,
}

/// Media types accepted on the command line
#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum MediaArg {
    Pdf,
    Docx,
}

impl From<MediaArg> for MediaType {
    fn from(arg: MediaArg) -> Self {
        match arg {
            MediaArg::Pdf => MediaType::Pdf,
            MediaArg::Docx => MediaType::Docx,
        }
    }
}

#[derive(Args, Debug)]
pub struct DocumentArgs {
    /// PDF or DOCX file to read
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// Declared media type (defaults to the file extension)
    #[arg(long, value_enum, requires = "file")]
    pub media_type: Option<MediaArg>,

    /// Largest accepted upload in bytes
    #[arg(long, default_value_t = DEFAULT_MAX_UPLOAD_BYTES)]
    pub max_upload_bytes: u64,
}

#[derive(Args, Debug)]
pub struct ExplainArgs {
    #[command(flatten)]
    pub document: DocumentArgs,

    /// Clause text to analyze (takes precedence over --file)
    #[arg(long)]
    pub text: Option<String>,

    /// Built-in sample to analyze (takes precedence over everything else)
    #[arg(long)]
    pub sample: Option<String>,

    /// Print the analyzed clause after the explanation
    #[arg(long)]
    pub show_clause: bool,
}

#[derive(Args, Debug)]
pub struct ExtractArgs {
    #[command(flatten)]
    pub document: DocumentArgs,

    /// Print the whole text instead of a preview
    #[arg(long)]
    pub full: bool,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Explain(args) => run_explain(args),
            Commands::Extract(args) => run_extract(args),
            Commands::Samples => {
                for sample in &SAMPLES {
                    println!("{}:\n  {}\n", sample.name, sample.text);
                }
                Ok(())
            }
        }
    }
}

/// Read and extract the document named by `args`, if any
///
/// Returns the uploaded file name with its extraction result; upload
/// failures (unreadable, wrong type, too large) are errors.
fn load_document(args: &DocumentArgs) -> Result<Option<(String, ExtractionResult)>> {
    let Some(path) = &args.file else {
        return Ok(None);
    };

    let upload = Upload::from_path(path, args.media_type.map(Into::into), args.max_upload_bytes)
        .with_context(|| format!("Failed to load {}", path.display()))?;

    let result = upload.extract(&ExtractorRegistry::new());
    Ok(Some((upload.file_name, result)))
}

fn print_status(status: &DocumentStatus) {
    match status {
        DocumentStatus::Extracted(_) => println!("{}", status),
        DocumentStatus::Failed(_) => eprintln!("{}", status),
    }
}

fn run_explain(args: ExplainArgs) -> Result<()> {
    let sample = match args.sample.as_deref() {
        Some(name) => Some(find_sample(name).with_context(|| {
            let names: Vec<_> = SAMPLES.iter().map(|s| s.name).collect();
            format!("Unknown sample {:?} (available: {})", name, names.join(", "))
        })?),
        None => None,
    };

    let document = load_document(&args.document)?;
    let prepared = prepare_clause(
        sample,
        args.text.as_deref(),
        document.as_ref().map(|(name, result)| (name.as_str(), result)),
    );

    if let Some(status) = &prepared.status {
        print_status(status);
    }

    let Some(analysis) = analyze(&prepared.clause) else {
        bail!(EMPTY_CLAUSE_WARNING);
    };

    println!("LexiGen's Analysis:\n");
    println!("{}", analysis.explanation);

    if args.show_clause {
        println!("\nOriginal Clause:\n{}", analysis.clause);
    }

    Ok(())
}

fn run_extract(args: ExtractArgs) -> Result<()> {
    let Some((file_name, result)) = load_document(&args.document)? else {
        bail!("--file is required");
    };

    if let Some(status) = DocumentStatus::from_result(&file_name, &result) {
        print_status(&status);
    }

    match result {
        Ok(text) if text.is_empty() => bail!("No text found in {}", file_name),
        Ok(text) if args.full => println!("{}", text),
        Ok(text) => println!("{}", preview(&text)),
        Err(_) => bail!("No text could be extracted"),
    }

    Ok(())
}
