use anyhow::Context;
use std::path::Path;
use std::sync::Arc;

/// Sucht das Screenshot-Ergebnis eines vorherigen `ViewportCommand::Screenshot`.
pub fn take_screenshot_event(ctx: &egui::Context) -> Option<Arc<egui::ColorImage>> {
    ctx.input(|i| {
        i.raw.events.iter().find_map(|event| match event {
            egui::Event::Screenshot { image, .. } => Some(image.clone()),
            _ => None,
        })
    })
}

/// Speichert ein egui-Bild als PNG.
pub fn save_color_image(image: &egui::ColorImage, path: &Path) -> anyhow::Result<()> {
    let [width, height] = image.size;
    let bytes: Vec<u8> = image.pixels.iter().flat_map(|c| c.to_array()).collect();
    let buffer = image::RgbaImage::from_raw(width as u32, height as u32, bytes)
        .context("Screenshot-Puffer passt nicht zur Bildgröße")?;
    buffer
        .save_with_format(path, image::ImageFormat::Png)
        .with_context(|| format!("Screenshot konnte nicht gespeichert werden: {}", path.display()))?;
    log::info!("Screenshot gespeichert: {}", path.display());
    Ok(())
}
