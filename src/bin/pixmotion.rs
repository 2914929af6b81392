use std::{
    fs::File,
    io::BufWriter,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "pixmotion", version)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the frame count and delay of a widget tree.
    Info(InfoArgs),
    /// Render every frame as a numbered PNG.
    Frames(FramesArgs),
    /// Render an animated GIF.
    Gif(GifArgs),
}

#[derive(Args, Debug)]
struct InfoArgs {
    /// Input widget tree JSON.
    #[arg(long = "in")]
    in_path: PathBuf,
}

#[derive(Args, Debug)]
struct DisplayArgs {
    /// Display width in pixels.
    #[arg(long, default_value_t = pixmotion::DEFAULT_DISPLAY_WIDTH)]
    width: u32,

    /// Display height in pixels.
    #[arg(long, default_value_t = pixmotion::DEFAULT_DISPLAY_HEIGHT)]
    height: u32,

    /// Paint a solid black background.
    #[arg(long)]
    background: bool,

    /// Worker threads for frame rendering (default: one per core).
    #[arg(long)]
    threads: Option<usize>,

    /// Stop after this many frames.
    #[arg(long, default_value_t = pixmotion::DEFAULT_MAX_FRAME_COUNT)]
    max_frames: usize,
}

impl DisplayArgs {
    fn render_opts(&self) -> anyhow::Result<pixmotion::RenderOpts> {
        Ok(pixmotion::RenderOpts {
            display: pixmotion::Display::new(self.width, self.height)?,
            solid_background: self.background,
            max_frame_count: self.max_frames,
            max_parallel_frames: self.threads,
        })
    }
}

#[derive(Args, Debug)]
struct FramesArgs {
    /// Input widget tree JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output directory for `frame_0000.png`, ...
    #[arg(long)]
    out_dir: PathBuf,

    /// File name prefix.
    #[arg(long, default_value = "frame")]
    stem: String,

    #[command(flatten)]
    display: DisplayArgs,
}

#[derive(Args, Debug)]
struct GifArgs {
    /// Input widget tree JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output GIF path.
    #[arg(long)]
    out: PathBuf,

    #[command(flatten)]
    display: DisplayArgs,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Info(args) => cmd_info(args),
        Command::Frames(args) => cmd_frames(args),
        Command::Gif(args) => cmd_gif(args),
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn load_root(path: &Path) -> anyhow::Result<pixmotion::Root> {
    pixmotion::root_from_path(path).with_context(|| format!("load widget tree '{}'", path.display()))
}

fn cmd_info(args: InfoArgs) -> anyhow::Result<()> {
    let root = load_root(&args.in_path)?;
    println!("frames: {}", root.child.frame_count());
    println!("delay_ms: {}", root.delay_ms);
    if root.max_age > 0 {
        println!("max_age: {}", root.max_age);
    }
    if root.show_full_animation {
        println!("show_full_animation: true");
    }
    Ok(())
}

fn cmd_frames(args: FramesArgs) -> anyhow::Result<()> {
    let root = load_root(&args.in_path)?;
    let opts = args.display.render_opts()?;
    let frames = root.render(&opts).context("render frames")?;
    let paths = pixmotion::write_png_frames(&frames, &args.out_dir, &args.stem)?;
    tracing::info!(frames = paths.len(), "wrote png frames");
    eprintln!("wrote {} frames to {}", paths.len(), args.out_dir.display());
    Ok(())
}

fn cmd_gif(args: GifArgs) -> anyhow::Result<()> {
    let root = load_root(&args.in_path)?;
    let opts = args.display.render_opts()?;
    let frames = root.render(&opts).context("render frames")?;

    if let Some(parent) = args.out.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    let file = File::create(&args.out)
        .with_context(|| format!("create gif '{}'", args.out.display()))?;
    pixmotion::write_gif(&frames, root.delay_ms, BufWriter::new(file))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}
