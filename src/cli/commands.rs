//! Command implementations for the Sahayak CLI.

use std::fs;
use std::io::{self, Read};

use log::{debug, info};

use crate::classifier::{QueryClassifier, RuleBasedClassifier, classify_batch};
use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::SahayakConfig;
use crate::error::Result;
use crate::prompt::{DEFAULT_TEMPLATE_KEY, PromptEngine};
use crate::tutor::TutorService;

/// Execute a CLI command.
pub fn execute_command(args: SahayakArgs) -> Result<()> {
    let config = load_config(&args)?;
    match &args.command {
        Command::Classify(query_args) => classify_query(query_args, &config, &args),
        Command::Prompt(query_args) => build_prompt(query_args, &config, &args),
        Command::Ask(ask_args) => ask(ask_args, &config, &args),
        Command::FormatResponse(format_args) => format_output(format_args, &config, &args),
        Command::Templates(templates_args) => list_templates(templates_args, &config, &args),
        Command::Batch(batch_args) => batch_classify(batch_args, &config, &args),
    }
}

/// Load the configuration file named on the command line, or defaults.
fn load_config(args: &SahayakArgs) -> Result<SahayakConfig> {
    match &args.config {
        Some(path) => {
            info!("Loading configuration from: {}", path.display());
            SahayakConfig::from_file(path)
        }
        None => Ok(SahayakConfig::default()),
    }
}

/// Classify a single query.
fn classify_query(args: &QueryArgs, config: &SahayakConfig, cli_args: &SahayakArgs) -> Result<()> {
    let classifier = RuleBasedClassifier::with_config(config.classifier.clone());
    let classification = classifier.classify(&args.query);
    output_result("Classification", &classification, cli_args)
}

/// Build and print the generation prompt for a query.
fn build_prompt(args: &QueryArgs, config: &SahayakConfig, cli_args: &SahayakArgs) -> Result<()> {
    let classifier = RuleBasedClassifier::with_config(config.classifier.clone());
    let engine = PromptEngine::from_config(&config.prompt)?;

    let classification = classifier.classify(&args.query);
    let template = engine.resolve_template(&classification).name.clone();
    let prompt = engine.build_prompt(&args.query, &classification);
    debug!("Selected template: {template}");

    let result = PromptOutput {
        template,
        classification,
        prompt,
    };
    output_text(&result.prompt, &result, cli_args)
}

/// Answer a query with the offline generator.
fn ask(args: &AskArgs, config: &SahayakConfig, cli_args: &SahayakArgs) -> Result<()> {
    let service = TutorService::from_config(config)?;
    let reply = service.process_query(&args.student, &args.query)?;

    if cli_args.verbosity() > 1 && cli_args.output_format == OutputFormat::Human {
        println!(
            "[{} | {} | {} | {} | template: {}]",
            reply.classification.intent.display_label(),
            reply.classification.language,
            reply.classification.age_group,
            reply.classification.subject,
            reply.response.template_used
        );
        println!();
    }
    output_text(&reply.response.response_text, &reply, cli_args)
}

/// Format raw model output read from a file or stdin.
fn format_output(
    args: &FormatResponseArgs,
    config: &SahayakConfig,
    cli_args: &SahayakArgs,
) -> Result<()> {
    let raw = match &args.input {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    let engine = PromptEngine::from_config(&config.prompt)?;
    let result = FormattedOutput {
        text: engine.format_response(&raw),
    };
    output_text(&result.text, &result, cli_args)
}

/// List the template catalogue.
fn list_templates(
    args: &TemplatesArgs,
    config: &SahayakConfig,
    cli_args: &SahayakArgs,
) -> Result<()> {
    let engine = PromptEngine::from_config(&config.prompt)?;
    let listings: Vec<TemplateListing> = engine
        .catalogue()
        .iter()
        .map(|(key, template)| TemplateListing {
            name: template.name.clone(),
            intent: key.intent.to_string(),
            language: key.language.to_string(),
            bucket: key.bucket.as_str().to_string(),
            is_default: *key == DEFAULT_TEMPLATE_KEY,
            body: args.show_body.then(|| template.body.clone()),
        })
        .collect();

    output_result(
        &format!("{} templates", listings.len()),
        &listings,
        cli_args,
    )
}

/// Classify every non-blank line of a file.
fn batch_classify(args: &BatchArgs, config: &SahayakConfig, cli_args: &SahayakArgs) -> Result<()> {
    let content = fs::read_to_string(&args.file)?;
    let lines: Vec<(usize, &str)> = content
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(index, line)| (index + 1, line))
        .collect();
    let queries: Vec<&str> = lines.iter().map(|(_, line)| *line).collect();

    let classifier = RuleBasedClassifier::with_config(config.classifier.clone());
    let classifications = classify_batch(&classifier, &queries);
    info!(
        "Classified {} queries from {}",
        queries.len(),
        args.file.display()
    );

    let entries: Vec<BatchEntry> = lines
        .into_iter()
        .zip(classifications)
        .map(|((line, query), classification)| BatchEntry {
            line,
            query: query.to_string(),
            classification,
        })
        .collect();

    output_result(
        &format!("Classified {} queries", entries.len()),
        &entries,
        cli_args,
    )
}
