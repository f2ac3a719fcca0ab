//! Bot action commands: annotations, chat, moves, resignation.

use anyhow::Result;
use clap::Args;
use console::Style;

use fourpc_client::DEFAULT_PROMOTION;

use super::Context;

/// Arguments for the arrow command.
#[derive(Args, Debug)]
pub struct ArrowArgs {
    /// Start square (e.g. a1)
    pub from: String,

    /// End square (e.g. h8)
    pub to: String,

    /// Arrow opacity (e.g. 80)
    #[arg(short, long)]
    pub opacity: Option<String>,
}

/// Arguments for the circle command.
#[derive(Args, Debug)]
pub struct CircleArgs {
    /// Square to circle
    pub square: String,
}

/// Arguments for the chat command.
#[derive(Args, Debug)]
pub struct ChatArgs {
    /// Message to send (words are joined with spaces)
    #[arg(required = true, num_args = 1..)]
    pub message: Vec<String>,
}

/// Arguments for the play command.
#[derive(Args, Debug)]
pub struct PlayArgs {
    /// From square
    pub from: String,

    /// To square
    pub to: String,

    /// Promotion piece code
    #[arg(short, long, default_value = DEFAULT_PROMOTION)]
    pub promotion: String,
}

pub fn arrow(args: ArrowArgs, ctx: &Context) -> Result<()> {
    let client = ctx.client()?;
    let result = client.try_arrow(&args.from, &args.to, args.opacity.as_deref());
    report("arrow", &format!("{}{}", args.from, args.to), result, ctx)
}

pub fn circle(args: CircleArgs, ctx: &Context) -> Result<()> {
    let client = ctx.client()?;
    let result = client.try_circle(&args.square);
    report("circle", &args.square, result, ctx)
}

pub fn chat(args: ChatArgs, ctx: &Context) -> Result<()> {
    let client = ctx.client()?;
    let message = args.message.join(" ");
    let result = client.try_chat(&message);
    report("chat", &message, result, ctx)
}

pub fn clear(ctx: &Context) -> Result<()> {
    let client = ctx.client()?;
    report("clear", "all annotations", client.try_clear(), ctx)
}

pub fn play(args: PlayArgs, ctx: &Context) -> Result<()> {
    let client = ctx.client()?;
    let result = client.try_play(&args.from, &args.to, &args.promotion);
    report(
        "play",
        &format!("{}{}{}", args.from, args.to, args.promotion),
        result,
        ctx,
    )
}

pub fn resign(ctx: &Context) -> Result<()> {
    let client = ctx.client()?;
    report("resign", "game", client.try_resign(), ctx)
}

/// Print the outcome of an action; a rejection becomes the command's error.
fn report(
    action: &str,
    subject: &str,
    result: fourpc_client::Result<String>,
    ctx: &Context,
) -> Result<()> {
    match result {
        Ok(body) => {
            let green = Style::new().green();
            let dim = Style::new().dim();
            println!("{} {} {}", green.apply_to("✓"), action, subject);
            if ctx.verbose {
                println!("  {} {}", dim.apply_to("Response:"), body.trim_end());
            }
            Ok(())
        }
        Err(e) => anyhow::bail!("{action} rejected: {e}"),
    }
}
