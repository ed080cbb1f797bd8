//! Charm-style CLI prompts using cliclack

use crate::config::{ProjectLayout, PROJECT_CONFIG_FILE};
use crate::generator::{
    check_aggregators, plan_generation, AggregatorStatus, GenerationPlan, GenerationReport,
    WidgetGenerator,
};
use crate::identity::github::lookup_author;
use crate::identity::{AuthorLookup, IdentityConfig, IdentityLookupError};
use crate::product::ProductConfig;
use crate::request::{
    GenerationRequest, WidgetCategory, DEFAULT_AUTHOR_HANDLE, DEFAULT_SUPER_CLASS,
    DEFAULT_WIDGET_NAME,
};
use crate::splice::SpliceOutcome;
use crate::templates::{TemplateRenderer, TemplateSource};
use anyhow::{Context, Result};
use colored::Colorize;
use std::path::{Path, PathBuf};

/// CLI arguments for the create command
#[derive(Debug, Clone, Default)]
pub struct CreateArgs {
    /// Project root to generate into (defaults to the current directory)
    pub directory: Option<PathBuf>,

    /// Author's GitHub handle
    pub author: Option<String>,

    /// Widget class name, e.g. `ProgressBar`
    pub name: Option<String>,

    /// Class the widget extends
    pub super_class: Option<String>,

    /// Widget type, parsed case-insensitively
    pub category: Option<String>,

    /// One-line description placed in the generated doc comment
    pub description: Option<String>,

    /// Local directory whose templates override the built-in ones
    pub template_dir: Option<PathBuf>,

    /// Do not contact GitHub for author details
    pub skip_lookup: bool,

    /// Print what would be generated without touching the project
    pub dry_run: bool,

    /// Auto-confirm all prompts (non-interactive mode)
    pub yes: bool,
}

/// Run the CLI with interactive prompts
pub async fn run<C: ProductConfig>(config: &C, args: CreateArgs) -> Result<()> {
    cliclack::intro(config.display_name())?;

    // Step 1: Locate the project and its layout
    let project_dir = select_directory(args.directory.as_deref(), args.yes)?;
    let layout = load_layout(config, &project_dir).await?;

    // Step 2: Collect the request
    let request = collect_request(&args)?;

    // Step 3: Resolve the author
    let author = resolve_author(config, &request.author_handle, args.skip_lookup).await?;

    // Step 4: Plan; unsupported categories stop here with nothing written
    let plan = match plan_generation(&request, &layout) {
        Ok(plan) => plan,
        Err(e) => {
            cliclack::log::error(format!("{}", e))?;
            anyhow::bail!("Nothing was generated.");
        }
    };

    // Step 5: Load templates
    let renderer = setup_renderer(&args.template_dir).await?;
    let generator = WidgetGenerator::new(&project_dir, layout, renderer);

    // Step 6: Make sure every aggregator the plan touches can be patched
    check_plan_aggregators(&generator, &plan, args.yes).await?;

    if args.dry_run {
        print_plan(&plan);
        cliclack::outro("Dry run complete, no files were written.")?;
        return Ok(());
    }

    // Step 7: Generate
    let report = generate(&generator, &plan, &request, &author).await?;

    // Step 8: Show next steps
    print_report(&report);
    print_next_steps(config, &project_dir, &report)?;

    Ok(())
}

/// Report the readiness of every aggregator file in a project
pub async fn check<C: ProductConfig>(config: &C, directory: Option<PathBuf>) -> Result<()> {
    cliclack::intro(format!("{} project check", config.display_name()))?;

    let project_dir = select_directory(directory.as_deref(), true)?;
    let layout = load_layout(config, &project_dir).await?;

    let statuses = check_aggregators(&project_dir, &layout).await;
    print_statuses(&statuses);

    let problems = statuses.iter().filter(|s| !s.status.is_ready()).count();
    if problems > 0 {
        anyhow::bail!(
            "{} aggregator file{} cannot be patched.",
            problems,
            if problems == 1 { "" } else { "s" }
        );
    }

    cliclack::outro("Project is ready for new widgets.")?;
    Ok(())
}

fn select_directory(directory: Option<&Path>, yes: bool) -> Result<PathBuf> {
    let current_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

    let path = match directory {
        Some(dir) => {
            let p = current_dir.join(dir);
            cliclack::log::info(format!("Using project: {}", p.display()))?;
            p
        }
        None if yes => current_dir,
        None => {
            let input: String = cliclack::input("Project directory")
                .placeholder(".")
                .default_input(".")
                .interact()?;

            if input.is_empty() || input == "." {
                current_dir
            } else {
                current_dir.join(input)
            }
        }
    };

    if !path.is_dir() {
        anyhow::bail!("Project directory does not exist: {}", path.display());
    }

    Ok(path)
}

async fn load_layout<C: ProductConfig>(config: &C, project_dir: &Path) -> Result<ProjectLayout> {
    let layout = ProjectLayout::load(project_dir, config.layout())
        .await
        .context("Failed to load project layout")?;

    if project_dir.join(PROJECT_CONFIG_FILE).exists() {
        cliclack::log::info(format!("Layout overrides from {}", PROJECT_CONFIG_FILE))?;
    }

    Ok(layout)
}

/// Use the flag if given, the default under `--yes`, otherwise ask
fn prompt_text(label: &str, given: &Option<String>, default: &str, yes: bool) -> Result<String> {
    if let Some(value) = given {
        return Ok(value.clone());
    }
    if yes {
        return Ok(default.to_string());
    }

    let mut input = cliclack::input(label);
    if default.is_empty() {
        input = input.required(false);
    } else {
        input = input.placeholder(default).default_input(default);
    }
    let value: String = input.interact()?;
    Ok(value)
}

fn select_category(given: Option<&str>, yes: bool) -> Result<WidgetCategory> {
    if let Some(value) = given {
        return Ok(value.parse::<WidgetCategory>()?);
    }
    if yes {
        return Ok(WidgetCategory::default());
    }

    let mut select = cliclack::select("Widget type").initial_value(WidgetCategory::default());
    for category in WidgetCategory::ALL {
        let hint = if category == WidgetCategory::DataView {
            "not available yet"
        } else {
            ""
        };
        select = select.item(category, category.name(), hint);
    }

    Ok(select.interact()?)
}

fn collect_request(args: &CreateArgs) -> Result<GenerationRequest> {
    let author_handle = prompt_text(
        "Your GitHub username",
        &args.author,
        DEFAULT_AUTHOR_HANDLE,
        args.yes,
    )?;
    let widget_name = prompt_text("Widget name", &args.name, DEFAULT_WIDGET_NAME, args.yes)?;
    let widget_super_class = prompt_text(
        "Widget superclass",
        &args.super_class,
        DEFAULT_SUPER_CLASS,
        args.yes,
    )?;
    let widget_category = select_category(args.category.as_deref(), args.yes)?;
    let widget_description = prompt_text("Description", &args.description, "", args.yes)?;

    Ok(GenerationRequest {
        author_handle,
        widget_name,
        widget_super_class,
        widget_category,
        widget_description,
    })
}

async fn resolve_author<C: ProductConfig>(
    config: &C,
    handle: &str,
    skip_lookup: bool,
) -> Result<AuthorLookup> {
    if skip_lookup {
        cliclack::log::info("Skipping author lookup")?;
        return Ok(AuthorLookup::Unavailable(IdentityLookupError::Skipped));
    }

    let spinner = cliclack::spinner();
    spinner.start(format!("Looking up {}...", handle));

    let author = lookup_author(IdentityConfig::from_env(config), handle).await;

    match &author {
        AuthorLookup::Found(profile) if profile.display_name.is_empty() => {
            spinner.stop(format!("Author: {}", handle));
        }
        AuthorLookup::Found(profile) => {
            spinner.stop(format!("Author: {}", profile.display_name));
        }
        AuthorLookup::Unavailable(e) => {
            spinner.stop("Author lookup failed");
            cliclack::log::warning(format!("{}, attribution will be left empty", e))?;
        }
    }

    Ok(author)
}

async fn check_plan_aggregators(
    generator: &WidgetGenerator,
    plan: &GenerationPlan,
    yes: bool,
) -> Result<()> {
    let needed = plan.aggregators();
    let problems: Vec<AggregatorStatus> = generator
        .check_project()
        .await
        .into_iter()
        .filter(|s| needed.contains(&s.path.as_path()) && !s.status.is_ready())
        .collect();

    if problems.is_empty() {
        return Ok(());
    }

    for problem in &problems {
        cliclack::log::warning(format!(
            "{}: {} ({})",
            problem.path.display(),
            problem.status,
            problem.marker
        ))?;
    }

    // Generation would stop part-way with files already written
    if yes {
        anyhow::bail!("Aggregator files are not ready, fix them and try again.");
    }

    let confirm: bool = cliclack::confirm("Continue anyway?")
        .initial_value(false)
        .interact()?;

    if !confirm {
        anyhow::bail!("Generation cancelled.");
    }

    Ok(())
}

async fn setup_renderer(template_dir: &Option<PathBuf>) -> Result<TemplateRenderer> {
    let source = match template_dir {
        Some(path) => {
            cliclack::log::info(format!("Using local templates from {}", path.display()))?;
            TemplateSource::local(path.clone())
        }
        None => TemplateSource::Embedded,
    };

    let overridden = source.overridden();
    if !overridden.is_empty() {
        cliclack::log::info(format!("Overriding: {}", overridden.join(", ")))?;
    }

    TemplateRenderer::from_source(&source)
        .await
        .context("Failed to load templates")
}

async fn generate(
    generator: &WidgetGenerator,
    plan: &GenerationPlan,
    request: &GenerationRequest,
    author: &AuthorLookup,
) -> Result<GenerationReport> {
    let spinner = cliclack::spinner();
    spinner.start("Generating widget...");

    match generator.execute(plan, request, author).await {
        Ok(report) => {
            let added = report.inserted().count();
            spinner.stop(format!(
                "Created {} {}, {} reference{} added",
                request.widget_name,
                format!("({})", request.widget_category).dimmed(),
                added,
                if added == 1 { "" } else { "s" }
            ));
            Ok(report)
        }
        Err(failure) => {
            spinner.stop("Generation halted");
            cliclack::log::error(format!("{}", failure.error))?;

            if failure.error.is_pre_write() {
                cliclack::log::info("Nothing was written.")?;
            } else if !failure.completed.is_empty() {
                println!();
                println!("  {}", "Already written, not rolled back:".yellow());
                print_report_lines(&failure.completed);
            }

            anyhow::bail!("Widget generation did not complete.");
        }
    }
}

fn print_plan(plan: &GenerationPlan) {
    println!();
    println!("  {}", "Files to create".bold());
    for file in &plan.files {
        println!(
            "  {} {} {}",
            "+".green(),
            file.path.display(),
            format!("({})", file.template.file_name()).dimmed()
        );
    }

    println!();
    println!("  {}", "References to add".bold());
    for splice in &plan.splices {
        println!("  {} {}", "~".blue(), splice.path.display());
        println!("      {}", splice.line.dimmed());
    }
    println!();
}

fn print_report_lines(report: &GenerationReport) {
    for path in &report.created {
        println!("  {} {}", "+".green(), path.display());
    }
    for entry in &report.spliced {
        match entry.outcome {
            SpliceOutcome::Inserted => println!("  {} {}", "~".blue(), entry.path.display()),
            SpliceOutcome::AlreadyPresent => println!(
                "  {} {} {}",
                "=".dimmed(),
                entry.path.display(),
                "(already referenced)".dimmed()
            ),
        }
    }
}

fn print_report(report: &GenerationReport) {
    println!();
    print_report_lines(report);
}

fn print_statuses(statuses: &[AggregatorStatus]) {
    println!();
    for status in statuses {
        if status.status.is_ready() {
            println!("  {} {}", "●".green(), status.path.display());
        } else {
            println!(
                "  {} {} {}",
                "✗".red(),
                status.path.display(),
                format!("({}, expected {})", status.status, status.marker).dimmed()
            );
        }
    }
    println!();
}

fn print_next_steps<C: ProductConfig>(
    config: &C,
    project_dir: &Path,
    report: &GenerationReport,
) -> Result<()> {
    let steps = config.next_steps(project_dir, report);

    println!();
    println!("  Next steps");
    println!();

    for (i, step) in steps.iter().enumerate() {
        println!("  {}.  {}", i + 1, step);
    }

    cliclack::outro(format!("Docs: {}", config.docs_url()))?;

    Ok(())
}
