use std::path::{Path, PathBuf};

use iced::widget::image::Handle;

use super::PendingImage;

pub const IMAGE_EXTENSIONS: [&str; 6] = ["jpg", "jpeg", "png", "webp", "bmp", "tiff"];

pub fn is_image_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            IMAGE_EXTENSIONS
                .iter()
                .any(|known| known.eq_ignore_ascii_case(ext))
        })
}

pub fn load_image(path: PathBuf) -> Result<PendingImage, String> {
    log::info!("Loading image file: {}", path.display());
    let bytes = std::fs::read(&path).map_err(|err| {
        let message = format!("{}: failed to read image file ({err})", path.display());
        log::error!("{message}");
        message
    })?;

    let decoded = image::load_from_memory(&bytes).map_err(|err| {
        let message = format!("{}: failed to decode image ({err})", path.display());
        log::error!("{message}");
        message
    })?;

    let rgba = decoded.to_rgba8();
    let (width, height) = rgba.dimensions();

    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("image")
        .to_string();

    Ok(PendingImage {
        file_name,
        bytes,
        preview: Handle::from_rgba(width, height, rgba.into_raw()),
    })
}
