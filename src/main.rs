// file: src/main.rs
// description: commandline application entry point with command handling
// reference: application bootstrap and orchestration

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use doc_insight::utils::logging::{format_error, format_info, format_success, format_warning};
use doc_insight::{
    ApiClient, Config, ExtendedTldrResponse, FinancialFlowResponse, FinancialSummary,
    HistoryEntry, JobProgress, JsonExporter, ProcessingStatus, ProgressRenderer, StatusPoller,
    StatusReport, Validator, or_placeholder,
};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "doc_insight")]
#[command(version = "0.1.0")]
#[command(about = "Client for the Document Analysis API", long_about = None)]
struct Cli {
    #[arg(
        short,
        long,
        value_name = "FILE",
        default_value = "config/default.toml"
    )]
    config: PathBuf,

    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    color: bool,

    #[arg(short, long, action = ArgAction::SetTrue)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Upload a financial report and track its background analysis
    Upload {
        file: PathBuf,

        /// Do not wait for background processing to finish
        #[arg(long)]
        no_watch: bool,
    },

    /// Show the processing status of a document
    Status {
        id: String,

        /// Keep polling until the job reaches a terminal status
        #[arg(long)]
        watch: bool,
    },

    /// Fetch the AI-generated financial summary
    Summary {
        id: String,

        /// Fetch the extended TLDR instead of the basic summary
        #[arg(long)]
        extended: bool,

        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        #[arg(short, long)]
        pretty: bool,
    },

    /// Fetch financial flow data for Sankey visualization
    Flow {
        id: String,

        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        #[arg(short, long)]
        pretty: bool,
    },

    /// Search uploaded documents by semantic similarity
    Search {
        query: String,

        #[arg(short, long, default_value_t = 5)]
        limit: usize,
    },

    /// Run sentiment/summary/topic analysis on ad-hoc text
    Analyze {
        text: Option<String>,

        /// Read the text to analyze from a file
        #[arg(long, value_name = "PATH", conflicts_with = "text")]
        file: Option<PathBuf>,
    },

    /// List previously analyzed documents
    History {
        #[arg(long, default_value_t = 10)]
        limit: usize,

        #[arg(long, default_value_t = 0)]
        offset: usize,
    },

    /// Check that the Document Analysis service is reachable
    Verify,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    doc_insight::utils::logging::init_logger(cli.color, cli.verbose);

    info!("Document Insight client");
    info!("Loading configuration from: {}", cli.config.display());

    let config = if cli.config.exists() {
        Config::load(Some(cli.config.as_path())).context("Failed to load configuration")?
    } else {
        warn!(
            "Config file {} not found, using default configuration",
            cli.config.display()
        );
        Config::load(None).unwrap_or_else(|e| {
            warn!("Falling back to built-in defaults: {}", e);
            Config::default_config()
        })
    };

    match cli.command {
        Commands::Upload { file, no_watch } => {
            cmd_upload(&config, file, no_watch, cli.color).await?;
        }
        Commands::Status { id, watch } => {
            cmd_status(&config, &id, watch, cli.color).await?;
        }
        Commands::Summary {
            id,
            extended,
            output,
            pretty,
        } => {
            cmd_summary(&config, &id, extended, output, pretty).await?;
        }
        Commands::Flow { id, output, pretty } => {
            cmd_flow(&config, &id, output, pretty).await?;
        }
        Commands::Search { query, limit } => {
            cmd_search(&config, &query, limit).await?;
        }
        Commands::Analyze { text, file } => {
            cmd_analyze(&config, text, file).await?;
        }
        Commands::History { limit, offset } => {
            cmd_history(&config, limit, offset).await?;
        }
        Commands::Verify => {
            cmd_verify(&config).await?;
        }
    }

    Ok(())
}

async fn cmd_upload(config: &Config, file: PathBuf, no_watch: bool, colored: bool) -> Result<()> {
    Validator::validate_upload_file(&file, &config.upload)?;

    let client = ApiClient::new(&config.api)?;

    info!("Uploading {}", file.display());
    let response = client
        .upload_document(&file)
        .await
        .context("Document upload failed")?;

    println!(
        "{}",
        format_success(&format!(
            "Uploaded \"{}\" as document {}",
            response.title, response.id
        ))
    );

    if !response.processing_status.is_background() {
        println!("{}", format_info("Processing finished synchronously"));
        report_analysis_results(&client, config, response.id.as_str()).await?;
        return Ok(());
    }

    if no_watch {
        println!(
            "{}",
            format_info(&format!(
                "Background processing started. Check it with: doc_insight status {} --watch",
                response.id
            ))
        );
        return Ok(());
    }

    println!("{}", format_info("Background processing started, waiting..."));
    let progress = watch_job(&client, config, response.id.as_str(), colored).await;

    match progress.status {
        ProcessingStatus::Complete => {
            report_analysis_results(&client, config, response.id.as_str()).await?;
        }
        ProcessingStatus::Error => {
            let detail = progress
                .error_detail
                .unwrap_or_else(|| "processing failed".to_string());
            println!("{}", format_error(&format!("Analysis failed: {}", detail)));
            println!(
                "{}",
                format_info("The job will not be retried; re-upload the document to try again.")
            );
        }
        _ => {}
    }

    Ok(())
}

/// Drive a poller to its terminal state while rendering a progress bar.
async fn watch_job(client: &ApiClient, config: &Config, id: &str, colored: bool) -> JobProgress {
    let poller = StatusPoller::new(Arc::new(client.clone()), config.poll_interval());
    let handle = poller.start(id);

    let renderer = ProgressRenderer::new(colored);
    let mut updates = handle.subscribe();

    loop {
        let current = updates.borrow_and_update().clone();

        if !current.is_processing {
            renderer.finish(&current);
            return current;
        }

        renderer.update(&current);

        if updates.changed().await.is_err() {
            let last = updates.borrow().clone();
            renderer.finish(&last);
            return last;
        }
    }
}

async fn report_analysis_results(client: &ApiClient, config: &Config, id: &str) -> Result<()> {
    let fallback = config.api.placeholder_fallback;

    let (summary, flow) = futures::future::join(
        or_placeholder(
            "Financial summary",
            fallback,
            client.financial_summary(id),
            FinancialSummary::placeholder,
        ),
        or_placeholder(
            "Financial flow",
            fallback,
            client.financial_flow(id),
            FinancialFlowResponse::placeholder,
        ),
    )
    .await;

    let summary = summary.context("Failed to fetch financial summary")?;
    let flow = flow.context("Failed to fetch financial flow")?;

    let sections = summary.section_names();
    println!(
        "{}",
        format_success(&format!(
            "Extracted {} financial section(s): {}",
            sections.len(),
            sections.join(", ")
        ))
    );
    println!(
        "{}",
        format_info(&format!(
            "Flow chart data ready: {} nodes, {} links",
            flow.flow_data.nodes.len(),
            flow.flow_data.links.len()
        ))
    );

    if !summary.summary.executive_summary.is_empty() {
        println!("\nExecutive summary:\n  {}", summary.summary.executive_summary);
    }

    Ok(())
}

async fn cmd_status(config: &Config, id: &str, watch: bool, colored: bool) -> Result<()> {
    Validator::validate_document_id(id)?;

    let client = ApiClient::new(&config.api)?;

    if watch {
        let progress = watch_job(&client, config, id, colored).await;
        println!(
            "Status: {} ({}%)",
            progress.status.label(),
            progress.progress_percent
        );
        if let Some(detail) = progress.error_detail {
            println!("{}", format_error(&format!("Error detail: {}", detail)));
        }
        return Ok(());
    }

    let report = or_placeholder(
        "Processing status",
        config.api.placeholder_fallback,
        client.processing_status(id),
        || StatusReport {
            status: ProcessingStatus::Complete,
            error: None,
        },
    )
    .await?;

    let percent = report.status.progress_percent().unwrap_or(0);
    println!("Status: {} ({}%)", report.status.label(), percent);

    match report.status {
        ProcessingStatus::Error => {
            let detail = report.error.unwrap_or_else(|| "processing failed".to_string());
            println!("{}", format_error(&format!("Error detail: {}", detail)));
        }
        ProcessingStatus::Complete => {
            println!("{}", format_success("Document processing is complete"));
        }
        _ => {
            println!(
                "{}",
                format_info("Document is still being processed. This may take a few minutes.")
            );
        }
    }

    Ok(())
}

async fn cmd_summary(
    config: &Config,
    id: &str,
    extended: bool,
    output: Option<PathBuf>,
    pretty: bool,
) -> Result<()> {
    Validator::validate_document_id(id)?;

    let client = ApiClient::new(&config.api)?;
    let fallback = config.api.placeholder_fallback;

    if extended {
        let response = or_placeholder(
            "Extended TLDR",
            fallback,
            client.extended_tldr(id),
            ExtendedTldrResponse::placeholder,
        )
        .await
        .context("Failed to fetch extended TLDR")?;

        print_extended_tldr(&response);

        if let Some(path) = output {
            JsonExporter::new(pretty).write(&response, &path)?;
            println!("{}", format_success(&format!("Saved to {}", path.display())));
        }
        return Ok(());
    }

    let summary = or_placeholder(
        "Financial summary",
        fallback,
        client.financial_summary(id),
        FinancialSummary::placeholder,
    )
    .await
    .context("Failed to fetch financial summary")?;

    println!("\nExecutive summary:\n  {}\n", summary.summary.executive_summary);
    for (name, text) in &summary.summary.sections {
        println!("{}:\n  {}\n", name.replace('_', " "), text);
    }
    if !summary.financial_data.is_empty() {
        println!(
            "Financial statements: {}",
            summary.section_names().join(", ")
        );
    }

    if let Some(path) = output {
        JsonExporter::new(pretty).write(&summary, &path)?;
        println!("{}", format_success(&format!("Saved to {}", path.display())));
    }

    Ok(())
}

fn print_extended_tldr(response: &ExtendedTldrResponse) {
    let tldr = &response.extended_tldr;

    println!("\nExecutive summary:\n  {}\n", tldr.executive_summary);

    if !tldr.highlights.is_empty() {
        println!("Highlights:");
        for highlight in &tldr.highlights {
            println!("  - {}", highlight);
        }
        println!();
    }

    if !tldr.key_metrics.is_empty() {
        println!("Key metrics:");
        for (name, value) in &tldr.key_metrics {
            println!("  {}: {}", name.replace('_', " "), value);
        }
        println!();
    }

    for (name, text) in &tldr.sections {
        println!("{}:\n  {}\n", name.replace('_', " "), text);
    }
}

async fn cmd_flow(
    config: &Config,
    id: &str,
    output: Option<PathBuf>,
    pretty: bool,
) -> Result<()> {
    Validator::validate_document_id(id)?;

    let client = ApiClient::new(&config.api)?;

    let response = or_placeholder(
        "Financial flow",
        config.api.placeholder_fallback,
        client.financial_flow(id),
        FinancialFlowResponse::placeholder,
    )
    .await
    .context("Failed to fetch financial flow")?;

    println!(
        "Flow data: {} nodes, {} links",
        response.flow_data.nodes.len(),
        response.flow_data.links.len()
    );
    for (idx, node) in response.flow_data.nodes.iter().enumerate() {
        let outflow = response.flow_data.total_outflow(idx);
        if outflow > 0.0 {
            println!("  {} -> {:.0} total outflow", node.name, outflow);
        } else {
            println!("  {}", node.name);
        }
    }

    if !response.insights.is_empty() {
        println!("\nInsights:");
        for insight in &response.insights {
            println!("  - {}", insight);
        }
    }

    if let Some(path) = output {
        JsonExporter::new(pretty).write(&response, &path)?;
        println!("{}", format_success(&format!("Saved to {}", path.display())));
    }

    Ok(())
}

async fn cmd_search(config: &Config, query: &str, limit: usize) -> Result<()> {
    Validator::validate_query_not_empty(query)?;

    let client = ApiClient::new(&config.api)?;

    info!("Searching for: {}", query);
    let response = client
        .search(query, limit)
        .await
        .context("Search request failed")?;

    if response.results.is_empty() {
        println!("\nNo results found for query: \"{}\"\n", query);
        println!("Try:");
        println!("  - Using different search terms");
        println!("  - Uploading more documents first");
        return Ok(());
    }

    println!("\nSearch Results for: \"{}\"\n", query);
    println!("Found {} result(s)\n", response.results.len());
    println!("{}", "=".repeat(80));

    for (idx, hit) in response.results.iter().enumerate() {
        println!(
            "\n{}. {} (document {}, distance {:.4})",
            idx + 1,
            hit.document_title,
            hit.document_id,
            hit.distance
        );
        println!("   Preview:");
        for line in hit.preview(300).lines().take(5) {
            println!("     {}", line);
        }
    }

    println!("\n{}", "=".repeat(80));
    info!("Search complete");

    Ok(())
}

async fn cmd_analyze(
    config: &Config,
    text: Option<String>,
    file: Option<PathBuf>,
) -> Result<()> {
    let text = match (text, file) {
        (Some(text), _) => text,
        (None, Some(path)) => std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        (None, None) => anyhow::bail!("Provide text to analyze, or --file PATH"),
    };
    Validator::validate_query_not_empty(&text)?;

    let client = ApiClient::new(&config.api)?;

    let analysis = client
        .analyze_text(&text)
        .await
        .context("Text analysis failed")?;

    println!(
        "\nSentiment: {} ({:.1}% confidence)",
        analysis.sentiment.label,
        analysis.sentiment.score * 100.0
    );
    println!("\nSummary:\n  {}", analysis.summary.summary);

    if !analysis.topics.topics.is_empty() {
        println!("\nTop topics:");
        for topic in &analysis.topics.topics {
            println!("  {} ({})", topic.word, topic.frequency);
        }
    }

    Ok(())
}

async fn cmd_history(config: &Config, limit: usize, offset: usize) -> Result<()> {
    let client = ApiClient::new(&config.api)?;

    let entries = or_placeholder(
        "Analysis history",
        config.api.placeholder_fallback,
        client.analysis_history(limit, offset),
        HistoryEntry::placeholder_entries,
    )
    .await
    .context("Failed to fetch analysis history")?;

    if entries.is_empty() {
        println!("No analyzed documents yet.");
        return Ok(());
    }

    println!("\nAnalysis history ({} entries)\n", entries.len());
    for entry in &entries {
        println!(
            "  [{}] {} - {} ({})",
            entry.id,
            entry.title,
            entry.processing_status.label(),
            entry.created_at
        );
        if !entry.sections.is_empty() {
            println!("        sections: {}", entry.sections.join(", "));
        }
    }

    Ok(())
}

async fn cmd_verify(config: &Config) -> Result<()> {
    let client = ApiClient::new(&config.api)?;

    info!("Checking service at {}", config.api.base_url);

    if client.ping().await {
        println!("{}", format_success("Document Analysis service is reachable"));
    } else {
        println!(
            "{}",
            format_warning(&format!(
                "Service at {} is not reachable; data commands will fall back to placeholders",
                config.api.base_url
            ))
        );
    }

    Ok(())
}
