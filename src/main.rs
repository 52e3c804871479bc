mod config;
mod error;

use clap::Parser;
use config::AppConfig;
use error::AppError;
use gallery_library::{Gallery, GalleryLibrary, Image, LibraryEvent, LibrarySnapshot};
use masonry_layout::{MasonryLayout, Placement, Size};
use serde::Serialize;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "image-gallery")]
#[command(about = "Import images into a new gallery and print its masonry layout")]
struct Args {
    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Image files to import, in display order
    images: Vec<PathBuf>,
}

/// What gets printed for the gallery that was just saved
#[derive(Serialize)]
struct LayoutReport<'a> {
    title: &'a str,
    active_galleries: usize,
    deleted_galleries: usize,
    content_size: Size,
    placements: &'a [Placement],
}

fn main() {
    env_logger::init();

    let args = Args::parse();

    if let Err(e) = run(args) {
        log::error!("{}", e);
        eprintln!("{}", e.user_message());
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), AppError> {
    let config = AppConfig::load(args.config.as_deref())?;

    let mut library = load_library(config.library.snapshot_path.as_deref())?;
    library.subscribe(|event: LibraryEvent, library: &GalleryLibrary| {
        log::info!(
            "Library changed: {} ({} active, {} deleted)",
            event.as_str(),
            library.active().len(),
            library.deleted().len()
        )
    });

    let runtime = tokio::runtime::Builder::new_current_thread().build()?;
    let gallery = runtime.block_on(build_gallery(&config.library.default_title, &args.images))?;
    let aspect_ratios = gallery.aspect_ratios();
    let title = gallery.title().to_string();
    library.save(gallery);

    let mut layout = MasonryLayout::new(config.layout.clone());
    layout.prepare(&aspect_ratios)?;

    let report = LayoutReport {
        title: &title,
        active_galleries: library.active().len(),
        deleted_galleries: library.deleted().len(),
        content_size: layout.content_size(),
        placements: layout.placements(),
    };
    println!("{}", serde_json::to_string_pretty(&report)?);

    if let Some(path) = config.library.snapshot_path.as_deref() {
        std::fs::write(path, library.snapshot().to_json()?)?;
        log::info!("Library written to {}", path);
    }

    Ok(())
}

/// Loads the library from its snapshot file, or starts empty
fn load_library(snapshot_path: Option<&str>) -> Result<GalleryLibrary, AppError> {
    match snapshot_path {
        Some(path) if Path::new(path).exists() => {
            let json = std::fs::read_to_string(path)?;
            let snapshot = LibrarySnapshot::from_json(&json)?;
            Ok(GalleryLibrary::from_snapshot(snapshot)?)
        }
        _ => Ok(GalleryLibrary::new()),
    }
}

/// New gallery holding the given image files, or a placeholder when none
async fn build_gallery(title: &str, images: &[PathBuf]) -> Result<Gallery, AppError> {
    if images.is_empty() {
        return Ok(Gallery::with_placeholder(title));
    }

    let mut gallery = Gallery::new(title);
    for path in images {
        let bytes = tokio::task::spawn_blocking({
            let path = path.clone();
            move || std::fs::read(path)
        })
        .await
        .map_err(|e| AppError::Filesystem(std::io::Error::other(e)))??;

        let url = format!("file://{}", path.display());
        let image = Image::from_bytes_async(url, bytes).await?;
        if image.is_placeholder() {
            log::warn!("{} is not a readable image", path.display());
        }
        gallery.append_image(image);
    }

    Ok(gallery)
}
