use crate::{Error, Result};
use base64::prelude::{Engine as _, BASE64_STANDARD};
use image::imageops::FilterType;
use image::{DynamicImage, GenericImageView, ImageFormat, ImageReader};
use std::io::{Cursor, Seek, Write};
use std::path::Path;

/// A source image supplied by the caller.
pub enum ImageSource<'a> {
    /// Raw bytes of an encoded image file.
    Bytes(&'a [u8]),
    /// A `data:<mime>;base64,` url, as produced by a prior crop step.
    DataUrl(&'a str),
}

#[derive(Debug)]
pub struct Scaler {
    img: DynamicImage,
}

impl Scaler {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let img = ImageReader::open(path)?.decode()?;
        Ok(Self { img })
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let img = ImageReader::new(Cursor::new(bytes))
            .with_guessed_format()?
            .decode()?;
        Ok(Self { img })
    }

    pub fn from_data_url(url: &str) -> Result<Self> {
        let payload = url
            .strip_prefix("data:")
            .and_then(|rest| rest.split_once(','))
            .filter(|(meta, _)| meta.ends_with(";base64"))
            .map(|(_, payload)| payload)
            .ok_or(Error::DataUrl)?;
        let bytes = BASE64_STANDARD.decode(payload)?;
        Self::from_bytes(&bytes)
    }

    pub fn load(source: &ImageSource<'_>) -> Result<Self> {
        match source {
            ImageSource::Bytes(bytes) => Self::from_bytes(bytes),
            ImageSource::DataUrl(url) => Self::from_data_url(url),
        }
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.img.dimensions()
    }

    /// Writes the image as a png of exactly `size`x`size` pixels. Non square
    /// sources are stretched to fit, not letterboxed.
    pub fn write<W: Write + Seek>(&self, w: &mut W, size: u32) -> Result<()> {
        assert!(size > 0, "icon size must be positive");
        self.img
            .resize_exact(size, size, FilterType::Lanczos3)
            .write_to(w, ImageFormat::Png)?;
        Ok(())
    }

    pub fn to_png(&self, size: u32) -> Result<Vec<u8>> {
        let mut buf = vec![];
        self.write(&mut Cursor::new(&mut buf), size)?;
        Ok(buf)
    }
}
