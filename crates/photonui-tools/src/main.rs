//! PhotonUI CLI - Widget scaffolding for PhotonUI projects

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use widget_scaffolder::tui::CreateArgs;
use widget_scaffolder::{GenerationReport, ProductConfig, ProjectLayout};

/// PhotonUI product configuration
#[derive(Clone)]
pub struct PhotonuiConfig;

impl ProductConfig for PhotonuiConfig {
    fn name(&self) -> &'static str {
        "photonui-tools"
    }

    fn display_name(&self) -> &'static str {
        "PhotonUI Widget"
    }

    fn layout(&self) -> ProjectLayout {
        ProjectLayout::default()
    }

    fn identity_api_env(&self) -> &'static str {
        "PHOTONUI_GITHUB_API_URL"
    }

    fn docs_url(&self) -> &'static str {
        "http://wanadev.github.io/PhotonUI/"
    }

    fn cli_description(&self) -> &'static str {
        "CLI for scaffolding new PhotonUI widgets"
    }

    fn next_steps(&self, dir: &Path, report: &GenerationReport) -> Vec<String> {
        let mut steps = Vec::new();
        let current = std::env::current_dir().ok();

        // Step 1: cd to the project if not current
        if current.as_deref() != Some(dir) {
            steps.push(format!("cd {}", dir.display()));
        }

        // Step 2: Fill in the generated sources
        if let Some(module) = report.created.first() {
            steps.push(format!("Implement the widget in {}", module.display()));
        }

        // Step 3: Rebuild the bundle and stylesheets
        steps.push("npx grunt".to_string());

        // Step 4: Run the specs
        steps.push("npm test".to_string());

        steps
    }
}

#[derive(Parser, Debug)]
#[command(name = "photonui-tools")]
#[command(about = "CLI for scaffolding new PhotonUI widgets")]
#[command(version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate a new widget in a PhotonUI project
    Create(CliCreateArgs),
    /// Check that the project's aggregator files carry their generator markers
    Check(CheckArgs),
}

#[derive(Parser, Debug)]
pub struct CliCreateArgs {
    /// Project root (defaults to the current directory)
    #[arg(short, long)]
    pub directory: Option<PathBuf>,

    /// Your GitHub username, used to fill in the author header
    #[arg(short, long)]
    pub author: Option<String>,

    /// Widget class name (e.g. ProgressBar)
    #[arg(short, long)]
    pub name: Option<String>,

    /// Class the widget extends
    #[arg(short, long = "super-class")]
    pub super_class: Option<String>,

    /// Widget type: Composite, Container, DataView, Interactive, Layout, NonVisual or Visual
    #[arg(short, long)]
    pub category: Option<String>,

    /// Short description of the widget
    #[arg(long)]
    pub description: Option<String>,

    /// Local directory whose templates override the built-in ones (for development use)
    #[arg(long = "template-dir")]
    pub template_dir: Option<PathBuf>,

    /// Do not query GitHub for the author's name and email
    #[arg(long = "skip-lookup")]
    pub skip_lookup: bool,

    /// Show the files and references that would be written, then exit
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Auto-confirm all prompts (non-interactive mode)
    #[arg(short, long)]
    pub yes: bool,
}

impl From<CliCreateArgs> for CreateArgs {
    fn from(args: CliCreateArgs) -> Self {
        CreateArgs {
            directory: args.directory,
            author: args.author,
            name: args.name,
            super_class: args.super_class,
            category: args.category,
            description: args.description,
            template_dir: args.template_dir,
            skip_lookup: args.skip_lookup,
            dry_run: args.dry_run,
            yes: args.yes,
        }
    }
}

#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Project root (defaults to the current directory)
    #[arg(short, long)]
    pub directory: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    let args = Args::parse();
    let config = PhotonuiConfig;

    let result = match args.command {
        Some(Command::Create(create_args)) => {
            widget_scaffolder::run(&config, create_args.into()).await
        }
        Some(Command::Check(check_args)) => {
            widget_scaffolder::tui::check(&config, check_args.directory).await
        }
        // No subcommand provided, default to create behavior (interactive mode)
        None => widget_scaffolder::run(&config, CreateArgs::default()).await,
    };

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_args_conversion() {
        let args = Args::parse_from([
            "photonui-tools",
            "create",
            "--name",
            "ProgressBar",
            "--super-class",
            "Base",
            "--category",
            "layout",
            "--skip-lookup",
            "--yes",
        ]);

        let Some(Command::Create(cli)) = args.command else {
            panic!("expected create command");
        };
        let create: CreateArgs = cli.into();
        assert_eq!(create.name.as_deref(), Some("ProgressBar"));
        assert_eq!(create.super_class.as_deref(), Some("Base"));
        assert_eq!(create.category.as_deref(), Some("layout"));
        assert!(create.skip_lookup);
        assert!(create.yes);
        assert!(!create.dry_run);
    }

    #[test]
    fn test_no_subcommand_defaults_to_create() {
        let args = Args::parse_from(["photonui-tools"]);
        assert!(args.command.is_none());
    }

    #[test]
    fn test_check_directory() {
        let args = Args::parse_from(["photonui-tools", "check", "-d", "../photonui"]);
        match args.command {
            Some(Command::Check(check)) => {
                assert_eq!(check.directory, Some(PathBuf::from("../photonui")))
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_next_steps_name_module() {
        let report = GenerationReport {
            created: vec![PathBuf::from("src/visual/progressbar.js")],
            spliced: Vec::new(),
        };
        let steps = PhotonuiConfig.next_steps(Path::new("/nonexistent/photonui"), &report);
        assert_eq!(steps[0], "cd /nonexistent/photonui");
        assert_eq!(steps[1], "Implement the widget in src/visual/progressbar.js");
        assert_eq!(steps.last().map(String::as_str), Some("npm test"));
    }
}
