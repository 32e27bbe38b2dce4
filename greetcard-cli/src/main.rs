use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "greetcard", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the built-in templates.
    Templates,
    /// Render a template card as a PNG.
    Template(TemplateArgs),
    /// Render a card over an AI-generated background as a PNG.
    Ai(AiArgs),
}

#[derive(Parser, Debug)]
struct OutputArgs {
    /// Output PNG path (defaults to the suggested download name).
    #[arg(long)]
    out: Option<PathBuf>,

    /// Print share text and a WhatsApp share link after writing.
    #[arg(long, default_value_t = false)]
    share: bool,
}

#[derive(Parser, Debug)]
struct TemplateArgs {
    /// Template id (see `greetcard templates`).
    #[arg(long)]
    id: u32,

    /// Photo path, URL or data: URL.
    #[arg(long)]
    photo: String,

    /// Name shown on the card.
    #[arg(long)]
    name: String,

    #[command(flatten)]
    output: OutputArgs,
}

#[derive(Parser, Debug)]
struct AiArgs {
    /// Photo path, URL or data: URL.
    #[arg(long)]
    photo: String,

    /// Personal wish printed under the title.
    #[arg(long, default_value = "")]
    wish: String,

    /// Name shown on the card.
    #[arg(long)]
    name: String,

    /// Skip background generation and use the local gradient.
    #[arg(long, default_value_t = false)]
    offline: bool,

    #[command(flatten)]
    output: OutputArgs,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Templates => cmd_templates(),
        Command::Template(args) => cmd_template(args),
        Command::Ai(args) => cmd_ai(args),
    }
}

fn cmd_templates() -> anyhow::Result<()> {
    for t in greetcard::catalog() {
        let overlay = if t.has_overlay() { "overlay" } else { "-" };
        println!("{:>3}  {:<28} {}  {}", t.id, t.name, t.accent_color, overlay);
    }
    Ok(())
}

fn cmd_template(args: TemplateArgs) -> anyhow::Result<()> {
    let name = greetcard::DisplayName::parse(&args.name)?;
    let config = greetcard::CardConfig::from_env();
    let renderer = greetcard::TemplateRenderer::from_config(&config)?;

    let card = renderer
        .render_by_id(args.id, &greetcard::PhotoSource::from(args.photo), &name)
        .map_err(|e| render_error(e, &format!("render template {}", args.id)))?;
    write_card(&card, &name, &args.output)
}

fn cmd_ai(args: AiArgs) -> anyhow::Result<()> {
    let name = greetcard::DisplayName::parse(&args.name)?;
    let config = greetcard::CardConfig::from_env();
    let mut renderer = greetcard::AiCompositeRenderer::from_config(&config)?;
    if args.offline {
        renderer = renderer.with_generator(Arc::new(greetcard::DisabledGenerator));
    }

    let card = renderer
        .render(&greetcard::PhotoSource::from(args.photo), &args.wish, &name)
        .map_err(|e| render_error(e, "render ai card"))?;
    write_card(&card, &name, &args.output)
}

fn render_error(err: greetcard::CardError, what: &str) -> anyhow::Error {
    let hint = if err.is_photo() {
        format!("{what}: the photo could not be used, check --photo")
    } else {
        what.to_string()
    };
    anyhow::Error::new(err).context(hint)
}

fn write_card(
    card: &greetcard::RenderedCard,
    name: &greetcard::DisplayName,
    output: &OutputArgs,
) -> anyhow::Result<()> {
    let out = output
        .out
        .clone()
        .unwrap_or_else(|| PathBuf::from(greetcard::download_filename(name)));
    card.save(&out)?;

    tracing::info!(origin = ?card.origin, bytes = card.png.len(), "card rendered");
    eprintln!("wrote {}", out.display());

    if output.share {
        let msg = greetcard::ShareMessage::default();
        println!("{}", msg.title);
        println!("{}", msg.text);
        println!("{}", greetcard::whatsapp_share_url()?);
    }
    Ok(())
}
