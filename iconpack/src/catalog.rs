use crate::Error;
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Platform {
    Chrome,
    Ios,
    Android,
}

impl Platform {
    pub const ALL: [Self; 3] = [Self::Chrome, Self::Ios, Self::Android];

    /// Returns the ordered list of icon sizes the platform requires.
    pub fn sizes(self) -> &'static [SizeSpec] {
        match self {
            Self::Chrome => CHROME,
            Self::Ios => IOS,
            Self::Android => ANDROID,
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Chrome => write!(f, "chrome"),
            Self::Ios => write!(f, "ios"),
            Self::Android => write!(f, "android"),
        }
    }
}

impl FromStr for Platform {
    type Err = Error;

    fn from_str(platform: &str) -> Result<Self, Error> {
        Ok(match platform {
            "chrome" => Self::Chrome,
            "ios" => Self::Ios,
            "android" => Self::Android,
            _ => return Err(Error::UnsupportedPlatform(platform.to_string())),
        })
    }
}

/// One required icon size. `name` may contain a `/` to place the icon in a
/// subdirectory of the archive, as android density buckets do.
#[derive(Debug)]
pub struct SizeSpec {
    pub size: u32,
    pub name: &'static str,
    pub description: &'static str,
    pub density: Option<&'static str>,
}

const fn spec(size: u32, name: &'static str, description: &'static str) -> SizeSpec {
    SizeSpec {
        size,
        name,
        description,
        density: None,
    }
}

const fn density(
    size: u32,
    density: &'static str,
    name: &'static str,
    description: &'static str,
) -> SizeSpec {
    SizeSpec {
        size,
        name,
        description,
        density: Some(density),
    }
}

const CHROME: &[SizeSpec] = &[
    spec(16, "icon16.png", "favicon, toolbar"),
    spec(32, "icon32.png", "windows taskbar"),
    spec(48, "icon48.png", "extensions page"),
    spec(128, "icon128.png", "chrome web store"),
];

const IOS: &[SizeSpec] = &[
    spec(20, "Icon-20.png", "Notification iOS 1x"),
    spec(40, "Icon-20@2x.png", "Notification iOS 2x"),
    spec(60, "Icon-20@3x.png", "Notification iOS 3x"),
    spec(29, "Icon-29.png", "Settings iOS 1x"),
    spec(58, "Icon-29@2x.png", "Settings iOS 2x"),
    spec(87, "Icon-29@3x.png", "Settings iOS 3x"),
    spec(40, "Icon-40@2x.png", "Spotlight iOS 2x"),
    spec(80, "Icon-40@3x.png", "Spotlight iOS 3x"),
    spec(120, "Icon-60@2x.png", "App Icon iPhone 2x"),
    spec(180, "Icon-60@3x.png", "App Icon iPhone 3x"),
    spec(76, "Icon-76.png", "App Icon iPad 1x"),
    spec(152, "Icon-76@2x.png", "App Icon iPad 2x"),
    spec(167, "Icon-83.5@2x.png", "App Icon iPad Pro"),
    spec(1024, "Icon-1024.png", "App Store"),
];

const ANDROID: &[SizeSpec] = &[
    density(48, "mdpi", "mipmap-mdpi/ic_launcher.png", "baseline density (1x)"),
    density(72, "hdpi", "mipmap-hdpi/ic_launcher.png", "high density (1.5x)"),
    density(96, "xhdpi", "mipmap-xhdpi/ic_launcher.png", "extra high density (2x)"),
    density(
        144,
        "xxhdpi",
        "mipmap-xxhdpi/ic_launcher.png",
        "extra extra high density (3x)",
    ),
    density(
        192,
        "xxxhdpi",
        "mipmap-xxxhdpi/ic_launcher.png",
        "extra extra extra high density (4x)",
    ),
    spec(512, "playstore-icon.png", "Play Store listing"),
];
