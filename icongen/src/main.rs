use anyhow::Result;
use clap::{Parser, Subcommand};
use console::style;
use iconpack::{ImageSource, Platform};
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::path::{Path, PathBuf};

const MAX_IMAGE_SIZE: u64 = 10 * 1024 * 1024;
const IMAGE_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "gif", "webp"];

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Args {
    #[clap(subcommand)]
    command: Commands,
}

fn main() -> Result<()> {
    use tracing_subscriber::{fmt::format::FmtSpan, EnvFilter};
    tracing_log::LogTracer::init().ok();
    let env = std::env::var("ICONGEN_LOG").unwrap_or_else(|_| "error".into());
    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_span_events(FmtSpan::ACTIVE | FmtSpan::CLOSE)
        .with_env_filter(EnvFilter::new(env))
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).ok();
    log_panics::init();
    let args = Args::parse();
    args.command.run()
}

#[derive(Subcommand)]
enum Commands {
    /// Generate all icon sizes for a platform and pack them into a zip
    Generate {
        /// Source image (png, jpeg, gif or webp, at most 10 MiB)
        image: PathBuf,
        /// Target platform (chrome, ios or android)
        #[clap(long)]
        platform: Platform,
        /// Output path, defaults to <platform>-icons.zip
        #[clap(long, short)]
        output: Option<PathBuf>,
    },
    /// List the icon sizes required by each platform
    Sizes {
        /// Only list a single platform
        #[clap(long)]
        platform: Option<Platform>,
    },
}

impl Commands {
    fn run(self) -> Result<()> {
        match self {
            Self::Generate {
                image,
                platform,
                output,
            } => generate(&image, platform, output),
            Self::Sizes { platform } => {
                sizes(platform);
                Ok(())
            }
        }
    }
}

fn generate(image: &Path, platform: Platform, output: Option<PathBuf>) -> Result<()> {
    validate_image(image)?;
    let bytes = std::fs::read(image)?;
    let total = platform.sizes().len() as u64;
    let pb = ProgressBar::with_draw_target(Some(total), ProgressDrawTarget::stdout()).with_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold} {wide_bar:.green} {pos}/{len} {msg}")?
            .progress_chars("█▇▆▅▄▃▂▁  "),
    );
    pb.set_prefix(platform.to_string());
    pb.set_message("resizing");
    let icons = iconpack::generate(&ImageSource::Bytes(&bytes), platform, |completed, _| {
        pb.set_position(completed as u64);
    })?;
    pb.finish_with_message("resized");
    let archive = iconpack::pack(&icons, platform)?;
    let output = output.unwrap_or_else(|| PathBuf::from(format!("{}-icons.zip", platform)));
    std::fs::write(&output, &archive)?;
    println!(
        "{} {} ({} icons, {})",
        style("[DONE]").green(),
        output.display(),
        icons.len(),
        format_size(archive.len() as u64),
    );
    Ok(())
}

fn sizes(platform: Option<Platform>) {
    let platforms = match platform {
        Some(platform) => vec![platform],
        None => Platform::ALL.to_vec(),
    };
    for platform in platforms {
        println!("{}", style(platform.to_string()).bold());
        for spec in platform.sizes() {
            match spec.density {
                Some(density) => println!(
                    "  {:>4}px  {:<32} {} ({})",
                    spec.size, spec.name, spec.description, density
                ),
                None => println!("  {:>4}px  {:<32} {}", spec.size, spec.name, spec.description),
            }
        }
    }
}

fn validate_image(path: &Path) -> Result<()> {
    let ext = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());
    match ext.as_deref() {
        Some(ext) if IMAGE_EXTENSIONS.contains(&ext) => {}
        _ => anyhow::bail!("unsupported image type {}", path.display()),
    }
    let len = std::fs::metadata(path)?.len();
    anyhow::ensure!(
        len <= MAX_IMAGE_SIZE,
        "{} is larger than the 10 MiB limit ({})",
        path.display(),
        format_size(len)
    );
    Ok(())
}

fn format_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];
    let mut size = bytes as f64;
    let mut unit = 0;
    while size >= 1024.0 && unit < UNITS.len() - 1 {
        size /= 1024.0;
        unit += 1;
    }
    if unit == 0 {
        format!("{} {}", bytes, UNITS[0])
    } else {
        format!("{:.2} {}", size, UNITS[unit])
    }
}
