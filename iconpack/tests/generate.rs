use iconpack::{generate, pack, ImageSource, Platform};
use image::{DynamicImage, GenericImageView, ImageFormat, RgbaImage};
use std::io::Cursor;
use zip::ZipArchive;

fn opaque_png(size: u32) -> Vec<u8> {
    let img = RgbaImage::from_pixel(size, size, image::Rgba([0, 128, 255, 255]));
    let mut buf = vec![];
    DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)
        .unwrap();
    buf
}

#[test]
fn chrome_end_to_end() {
    let source = opaque_png(512);
    let mut progress = vec![];
    let icons = generate(&ImageSource::Bytes(&source), Platform::Chrome, |c, t| {
        progress.push((c, t))
    })
    .unwrap();

    let sizes: Vec<_> = icons.iter().map(|i| i.size()).collect();
    assert_eq!(sizes, [16, 32, 48, 128]);
    assert_eq!(progress, [(1, 4), (2, 4), (3, 4), (4, 4)]);

    let archive = pack(&icons, Platform::Chrome).unwrap();
    let mut zip = ZipArchive::new(Cursor::new(archive)).unwrap();
    let names: Vec<_> = (0..zip.len())
        .map(|i| zip.by_index(i).unwrap().name().to_string())
        .collect();
    assert_eq!(
        names,
        [
            "chrome-icons/icon16.png",
            "chrome-icons/icon32.png",
            "chrome-icons/icon48.png",
            "chrome-icons/icon128.png",
        ]
    );

    let mut entry = zip.by_name("chrome-icons/icon128.png").unwrap();
    let mut data = vec![];
    std::io::copy(&mut entry, &mut data).unwrap();
    let img = image::load_from_memory(&data).unwrap();
    assert_eq!(img.dimensions(), (128, 128));
}

#[test]
fn every_platform_end_to_end() {
    let source = opaque_png(512);
    for platform in Platform::ALL {
        let expected = platform.sizes().len();
        let mut calls = 0;
        let icons = generate(&ImageSource::Bytes(&source), platform, |completed, total| {
            calls += 1;
            assert_eq!(completed, calls);
            assert_eq!(total, expected);
        })
        .unwrap();
        assert_eq!(calls, expected);
        assert_eq!(icons.len(), expected);
        for (icon, spec) in icons.iter().zip(platform.sizes()) {
            assert_eq!(icon.size(), spec.size);
        }
        let archive = pack(&icons, platform).unwrap();
        let zip = ZipArchive::new(Cursor::new(archive)).unwrap();
        assert_eq!(zip.len(), expected);
    }
}
