//! CLI command definitions and handlers

use anyhow::Context;
use clap::Subcommand;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::core::client::TranslateClient;
use crate::core::models::*;
use crate::core::validation::Validate;
use crate::core::wire::{Operation, OPERATION_NAMES};

/// Commands for the translate CLI
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Translate a piece of text
    Text {
        /// Text to translate; read from --file when omitted
        text: Option<String>,

        /// Read the text from a file
        #[arg(short, long, conflicts_with = "text")]
        file: Option<PathBuf>,

        /// Source language (default: auto)
        #[arg(short, long, default_value = "auto")]
        source_lang: String,

        /// Target language
        #[arg(short, long)]
        target_lang: String,

        /// Custom terminology to apply (repeatable)
        #[arg(long = "terminology")]
        terminologies: Vec<String>,

        /// FORMAL or INFORMAL
        #[arg(long)]
        formality: Option<Formality>,

        /// Mask profane words
        #[arg(long)]
        mask_profanity: bool,

        /// Shorten the translation
        #[arg(long)]
        brief: bool,
    },

    /// Translate a small document (text/plain, text/html or docx)
    Document {
        /// Input file (required)
        #[arg(short, long)]
        file: PathBuf,

        /// Output file; the translation is printed when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Content type; guessed from the file extension when omitted
        #[arg(long)]
        content_type: Option<String>,

        /// Source language (default: auto)
        #[arg(short, long, default_value = "auto")]
        source_lang: String,

        /// Target language
        #[arg(short, long)]
        target_lang: String,
    },

    /// List supported languages
    Languages {
        /// Language used for the language names
        #[arg(long)]
        display_language: Option<DisplayLanguageCode>,
    },

    /// List or show custom terminologies
    Terminologies {
        /// Show a single terminology instead of listing
        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        max_results: Option<i64>,
    },

    /// List or show parallel data resources
    ParallelData {
        /// Show a single resource instead of listing
        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        max_results: Option<i64>,
    },

    /// Describe a batch translation job
    DescribeJob {
        job_id: String,
    },

    /// List batch translation jobs
    ListJobs {
        /// Only jobs with this status
        #[arg(long)]
        status: Option<JobStatus>,

        #[arg(long)]
        max_results: Option<i64>,
    },

    /// Stop a running batch translation job
    StopJob {
        job_id: String,
    },

    /// Validate a JSON request file offline
    Validate {
        /// Operation name, e.g. TranslateText
        #[arg(short, long)]
        operation: String,

        /// Path to the JSON request body
        #[arg(short, long)]
        file: PathBuf,
    },
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Handle text translation command
#[allow(clippy::too_many_arguments)]
pub async fn handle_text(
    client: &TranslateClient,
    text: Option<String>,
    file: Option<PathBuf>,
    source_lang: String,
    target_lang: String,
    terminologies: Vec<String>,
    formality: Option<Formality>,
    mask_profanity: bool,
    brief: bool,
) -> anyhow::Result<()> {
    let text = match (text, file) {
        (Some(text), _) => text,
        (None, Some(path)) => std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        (None, None) => anyhow::bail!("either TEXT or --file is required"),
    };

    let mut request = TranslateTextRequest::new(text, source_lang, target_lang);
    if !terminologies.is_empty() {
        request = request.with_terminology_names(terminologies);
    }

    let mut settings = TranslationSettings::new();
    if let Some(formality) = formality {
        settings = settings.with_formality(formality);
    }
    if mask_profanity {
        settings = settings.with_profanity(Profanity::Mask);
    }
    if brief {
        settings = settings.with_brevity(Brevity::On);
    }
    if settings != TranslationSettings::default() {
        request = request.with_settings(settings);
    }

    let result = client.translate_text(&request).await?;
    print_json(&result)
}

fn guess_content_type(path: &Path) -> &'static str {
    match path.extension().and_then(|e| e.to_str()) {
        Some("html") | Some("htm") => "text/html",
        Some("docx") => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        _ => "text/plain",
    }
}

/// Handle document translation command
pub async fn handle_document(
    client: &TranslateClient,
    file: PathBuf,
    output: Option<PathBuf>,
    content_type: Option<String>,
    source_lang: String,
    target_lang: String,
) -> anyhow::Result<()> {
    let content =
        std::fs::read(&file).with_context(|| format!("failed to read {}", file.display()))?;
    let content_type = content_type.unwrap_or_else(|| guess_content_type(&file).to_string());

    info!("Translating {} ({})", file.display(), content_type);

    let request = TranslateDocumentRequest::new(
        Document::new(content, content_type),
        source_lang,
        target_lang,
    );
    let result = client.translate_document(&request).await?;

    let translated = result
        .translated_document
        .and_then(|d| d.content)
        .context("response did not include a translated document")?;

    match output {
        Some(path) => {
            std::fs::write(&path, translated.as_bytes())?;
            info!("Translation written to {}", path.display());
        }
        None => println!("{}", String::from_utf8_lossy(translated.as_bytes())),
    }
    Ok(())
}

/// Handle language listing command
pub async fn handle_languages(
    client: &TranslateClient,
    display_language: Option<DisplayLanguageCode>,
) -> anyhow::Result<()> {
    let mut request = ListLanguagesRequest::default();
    if let Some(code) = display_language {
        request = request.with_display_language_code(code);
    }

    let languages = client.list_all_languages(&request).await?;
    info!("{} languages supported", languages.len());
    print_json(&languages)
}

/// Handle terminology command
pub async fn handle_terminologies(
    client: &TranslateClient,
    name: Option<String>,
    max_results: Option<i64>,
) -> anyhow::Result<()> {
    match name {
        Some(name) => {
            let result = client.get_terminology(&GetTerminologyRequest::new(name)).await?;
            print_json(&result)
        }
        None => {
            let mut request = ListTerminologiesRequest::default();
            if let Some(max_results) = max_results {
                request = request.with_max_results(max_results);
            }
            print_json(&client.list_terminologies(&request).await?)
        }
    }
}

/// Handle parallel data command
pub async fn handle_parallel_data(
    client: &TranslateClient,
    name: Option<String>,
    max_results: Option<i64>,
) -> anyhow::Result<()> {
    match name {
        Some(name) => {
            let result = client.get_parallel_data(&GetParallelDataRequest::new(name)).await?;
            print_json(&result)
        }
        None => {
            let mut request = ListParallelDataRequest::default();
            if let Some(max_results) = max_results {
                request = request.with_max_results(max_results);
            }
            print_json(&client.list_parallel_data(&request).await?)
        }
    }
}

pub async fn handle_describe_job(client: &TranslateClient, job_id: String) -> anyhow::Result<()> {
    let request = DescribeTextTranslationJobRequest::new(job_id);
    print_json(&client.describe_text_translation_job(&request).await?)
}

pub async fn handle_list_jobs(
    client: &TranslateClient,
    status: Option<JobStatus>,
    max_results: Option<i64>,
) -> anyhow::Result<()> {
    let mut request = ListTextTranslationJobsRequest::default();
    if let Some(status) = status {
        request = request.with_filter(TextTranslationJobFilter::default().with_job_status(status));
    }
    if let Some(max_results) = max_results {
        request = request.with_max_results(max_results);
    }
    print_json(&client.list_text_translation_jobs(&request).await?)
}

pub async fn handle_stop_job(client: &TranslateClient, job_id: String) -> anyhow::Result<()> {
    let request = StopTextTranslationJobRequest::new(job_id);
    print_json(&client.stop_text_translation_job(&request).await?)
}

fn check_request<O>(json: &str) -> anyhow::Result<()>
where
    O: Operation + DeserializeOwned,
{
    let mut request: O = serde_json::from_str(json)
        .with_context(|| format!("not a valid {} request", O::NAME))?;
    request.prepare();
    request.validate()?;
    Ok(())
}

/// Validate a JSON request body against the rules of `operation`.
pub fn validate_request(operation: &str, json: &str) -> anyhow::Result<()> {
    macro_rules! dispatch {
        ($($request:ty),+ $(,)?) => {
            $(
                if operation == <$request as Operation>::NAME {
                    return check_request::<$request>(json);
                }
            )+
        };
    }

    dispatch!(
        TranslateTextRequest,
        TranslateDocumentRequest,
        StartTextTranslationJobRequest,
        StopTextTranslationJobRequest,
        DescribeTextTranslationJobRequest,
        ListTextTranslationJobsRequest,
        ImportTerminologyRequest,
        GetTerminologyRequest,
        DeleteTerminologyRequest,
        ListTerminologiesRequest,
        CreateParallelDataRequest,
        GetParallelDataRequest,
        UpdateParallelDataRequest,
        DeleteParallelDataRequest,
        ListParallelDataRequest,
        ListLanguagesRequest,
        TagResourceRequest,
        UntagResourceRequest,
        ListTagsForResourceRequest,
    );

    anyhow::bail!(
        "unknown operation {}; expected one of: {}",
        operation,
        OPERATION_NAMES.join(", ")
    )
}

/// Handle offline validation command
pub fn handle_validate(operation: String, file: PathBuf) -> anyhow::Result<()> {
    let json = std::fs::read_to_string(&file)
        .with_context(|| format!("failed to read {}", file.display()))?;
    validate_request(&operation, &json)?;
    println!("{}: valid {} request", file.display(), operation);
    Ok(())
}
