use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{ArgAction, Parser};
use easel_core::{Easel, EaselConfig, EaselPlan, Size};
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "ez-easel",
    about = "Compute enlarger easel slot and blade settings for a print",
    version,
    author
)]
struct Cli {
    // Print
    /// Paper height
    #[arg(allow_negative_numbers = true, help_heading = "Print")]
    paper_height: f64,
    /// Paper width
    #[arg(allow_negative_numbers = true, help_heading = "Print")]
    paper_width: f64,
    /// Aspect ratio: 135F | 135H | 135FP | 6x4.5 | 6x6 | 6x7 | 6x8 | 6x9 | 4x5 (prefix '-' to rotate, e.g. -4x5).
    /// Flags such as -v must not be placed here.
    #[arg(allow_hyphen_values = true, value_parser = parse_ratio_name, help_heading = "Print")]
    aspect_ratio: String,
    /// Border width around the image
    #[arg(allow_negative_numbers = true, help_heading = "Print")]
    border: f64,

    // Image
    /// Use this image height instead of fitting one (requires --image-width)
    #[arg(long, requires = "image_width", help_heading = "Image")]
    image_height: Option<f64>,
    /// Use this image width instead of fitting one (requires --image-height)
    #[arg(long, requires = "image_height", help_heading = "Image")]
    image_width: Option<f64>,

    // Config/Output
    /// YAML config file path (extra aspect ratios, custom slots)
    #[arg(long, help_heading = "Config/Output")]
    config: Option<PathBuf>,
    /// Output format: text | json
    #[arg(long, default_value = "text", value_parser = ["text", "json"], help_heading = "Config/Output")]
    format: String,
    /// Print the effective configuration (built-in tables plus YAML additions) and exit
    #[arg(long, default_value_t = false, help_heading = "Config/Output")]
    print_config: bool,
    /// Output format for --print-config: json|yaml
    #[arg(long, default_value = "json", value_parser = ["json", "yaml"], help_heading = "Config/Output")]
    print_config_format: String,

    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action=ArgAction::Count, help_heading = "Logging")]
    verbose: u8,
    /// Quiet mode (overrides verbose)
    #[arg(short, long, default_value_t = false, help_heading = "Logging")]
    quiet: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing_with_level(cli.quiet, cli.verbose);
    let stdout = io::stdout();
    run(&cli, &mut stdout.lock())
}

fn run(cli: &Cli, out: &mut impl Write) -> anyhow::Result<()> {
    let cfg = match &cli.config {
        Some(path) => load_config(path)?,
        None => EaselConfig::default(),
    };
    let easel = Easel::from_config(&cfg).context("invalid easel configuration")?;

    if cli.print_config {
        let effective = easel.to_config();
        match cli.print_config_format.as_str() {
            "yaml" => write!(out, "{}", serde_yaml::to_string(&effective)?)?,
            _ => writeln!(out, "{}", serde_json::to_string_pretty(&effective)?)?,
        }
        return Ok(());
    }

    let plan = compute_plan(cli, &easel)?;
    match cli.format.as_str() {
        "json" => {
            let json = serde_json::to_string_pretty(&easel_core::to_json(&plan))?;
            writeln!(out, "{json}")?
        }
        _ => write!(out, "{}", render_text(&plan))?,
    }
    Ok(())
}

fn load_config(path: &Path) -> anyhow::Result<EaselConfig> {
    let file =
        fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
    let cfg: EaselConfig =
        serde_yaml::from_str(&file).with_context(|| format!("parse config {}", path.display()))?;
    info!(
        path = %path.display(),
        ratios = cfg.ratios.len(),
        custom_slots = cfg.slots.is_some(),
        "config loaded"
    );
    Ok(cfg)
}

/// Short flags this command defines. A ratio argument made only of these after the
/// leading '-' is a misplaced flag, not a rotated format.
const SHORT_FLAGS: [char; 4] = ['v', 'q', 'h', 'V'];

fn parse_ratio_name(s: &str) -> Result<String, String> {
    let misplaced_flag = s.starts_with("--")
        || s.strip_prefix('-').is_some_and(|rest| {
            !rest.is_empty() && rest.chars().all(|c| SHORT_FLAGS.contains(&c))
        });
    if misplaced_flag {
        return Err(format!(
            "'{s}' is a flag, not an aspect ratio (flags go before or after the four positionals)"
        ));
    }
    Ok(s.to_string())
}

fn compute_plan(cli: &Cli, easel: &Easel) -> anyhow::Result<EaselPlan> {
    let plan = match (cli.image_height, cli.image_width) {
        (Some(h), Some(w)) => {
            // The ratio still has to name a known format even when the image is given.
            easel.ratios().get(&cli.aspect_ratio)?;
            easel.plan_with_image(cli.paper_height, cli.paper_width, Size::new(h, w))?
        }
        (None, None) => easel.plan(
            cli.paper_height,
            cli.paper_width,
            &cli.aspect_ratio,
            cli.border,
        )?,
        _ => anyhow::bail!("--image-height and --image-width must be given together"),
    };
    info!(
        slot_height = plan.slot.height,
        slot_width = plan.slot.width,
        "plan ready"
    );
    Ok(plan)
}

fn render_text(plan: &EaselPlan) -> String {
    let b = &plan.blades;
    format!(
        "use the easel's slot for {} x {}\n\
         image size: {:.2} x {:.2}\n\
         set the easel's blades to:\n  \
         left: {:.2} right: {:.2}, top: {:.2}, bottom: {:.2}\n",
        plan.slot.height,
        plan.slot.width,
        plan.image.height,
        plan.image.width,
        b.left,
        b.right,
        b.top,
        b.bottom,
    )
}

fn init_tracing_with_level(quiet: bool, verbose: u8) {
    let level = if quiet {
        "error".to_string()
    } else {
        match verbose {
            0 => "warn".into(),
            1 => "debug".into(),
            _ => "trace".into(),
        }
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
