use crate::catalog::{Platform, SizeSpec};
use crate::scaler::{ImageSource, Scaler};
use crate::Result;

/// A single generated icon.
#[derive(Debug)]
pub struct IconRecord {
    spec: &'static SizeSpec,
    data: Vec<u8>,
}

impl IconRecord {
    pub fn name(&self) -> &'static str {
        self.spec.name
    }

    pub fn size(&self) -> u32 {
        self.spec.size
    }

    pub fn description(&self) -> &'static str {
        self.spec.description
    }

    pub fn density(&self) -> Option<&'static str> {
        self.spec.density
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }
}

/// Generates the full icon set for `platform`.
///
/// The source is decoded once and every size in the platform's catalog is
/// resampled from the same decoded image, in catalog order. `on_progress`
/// is invoked after each completed icon with `(completed, total)`.
pub fn generate(
    source: &ImageSource<'_>,
    platform: Platform,
    mut on_progress: impl FnMut(usize, usize),
) -> Result<Vec<IconRecord>> {
    let scaler = Scaler::load(source)?;
    let (width, height) = scaler.dimensions();
    tracing::debug!(%platform, width, height, "generating icon set");
    let specs = platform.sizes();
    let total = specs.len();
    let mut icons = Vec::with_capacity(total);
    for (i, spec) in specs.iter().enumerate() {
        let data = scaler.to_png(spec.size)?;
        tracing::debug!(name = spec.name, size = spec.size, "generated icon");
        icons.push(IconRecord { spec, data });
        on_progress(i + 1, total);
    }
    Ok(icons)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scaler::tests::png_bytes;
    use crate::Error;
    use image::GenericImageView;

    #[test]
    fn chrome_records_match_catalog() {
        let bytes = png_bytes(512, 512);
        let icons = generate(&ImageSource::Bytes(&bytes), Platform::Chrome, |_, _| {}).unwrap();
        let sizes: Vec<_> = icons.iter().map(|i| i.size()).collect();
        assert_eq!(sizes, [16, 32, 48, 128]);
        for icon in &icons {
            let img = image::load_from_memory(icon.data()).unwrap();
            assert_eq!(img.dimensions(), (icon.size(), icon.size()));
        }
    }

    #[test]
    fn record_count_matches_catalog_for_every_platform() {
        let bytes = png_bytes(64, 64);
        for platform in Platform::ALL {
            let icons = generate(&ImageSource::Bytes(&bytes), platform, |_, _| {}).unwrap();
            assert_eq!(icons.len(), platform.sizes().len());
            for (icon, spec) in icons.iter().zip(platform.sizes()) {
                assert_eq!(icon.size(), spec.size);
                assert_eq!(icon.name(), spec.name);
            }
        }
    }

    #[test]
    fn progress_is_strictly_increasing() {
        let bytes = png_bytes(64, 64);
        for platform in Platform::ALL {
            let mut calls = vec![];
            generate(&ImageSource::Bytes(&bytes), platform, |completed, total| {
                calls.push((completed, total));
            })
            .unwrap();
            let total = platform.sizes().len();
            let expected: Vec<_> = (1..=total).map(|i| (i, total)).collect();
            assert_eq!(calls, expected);
        }
    }

    #[test]
    fn decode_failure_reports_no_progress() {
        let mut calls = 0;
        let err = generate(&ImageSource::Bytes(&[]), Platform::Chrome, |_, _| calls += 1)
            .unwrap_err();
        assert!(matches!(err, Error::Decode(_)));
        assert_eq!(calls, 0);
    }

    #[test]
    fn data_url_source() {
        use base64::prelude::{Engine as _, BASE64_STANDARD};
        let url = format!(
            "data:image/png;base64,{}",
            BASE64_STANDARD.encode(png_bytes(256, 256))
        );
        let icons = generate(&ImageSource::DataUrl(&url), Platform::Android, |_, _| {}).unwrap();
        assert_eq!(icons.len(), 6);
    }
}
