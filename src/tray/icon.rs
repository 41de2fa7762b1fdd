//! Tray icon management

use thiserror::Error;
use tray_icon::Icon;

/// Embedded icons for dark menu bar (white icons)
const SLEEP_ALLOWED_DARK_DATA: &[u8] = include_bytes!("../../assets/icons/tray_sleep_allowed.png");
const AWAKE_DARK_DATA: &[u8] = include_bytes!("../../assets/icons/tray_awake.png");

/// Embedded icons for light menu bar (black icons)
const SLEEP_ALLOWED_LIGHT_DATA: &[u8] =
    include_bytes!("../../assets/icons/tray_sleep_allowed_light.png");
const AWAKE_LIGHT_DATA: &[u8] = include_bytes!("../../assets/icons/tray_awake_light.png");

/// Errors while turning embedded PNG data into a tray icon
#[derive(Debug, Error)]
pub enum IconError {
    #[error("failed to decode PNG: {0}")]
    Decode(#[from] png::DecodingError),

    #[error("unsupported PNG color type {0:?}")]
    UnsupportedColor(png::ColorType),

    #[error("failed to create icon: {0}")]
    Icon(#[from] tray_icon::BadIcon),
}

/// Tray icons with support for light/dark menu bars
pub struct TrayIcons {
    sleep_allowed_dark: Icon,
    awake_dark: Icon,
    sleep_allowed_light: Icon,
    awake_light: Icon,
}

impl TrayIcons {
    /// Create tray icons from embedded data
    pub fn new() -> Result<Self, IconError> {
        Ok(Self {
            sleep_allowed_dark: load_icon_from_png(SLEEP_ALLOWED_DARK_DATA)?,
            awake_dark: load_icon_from_png(AWAKE_DARK_DATA)?,
            sleep_allowed_light: load_icon_from_png(SLEEP_ALLOWED_LIGHT_DATA)?,
            awake_light: load_icon_from_png(AWAKE_LIGHT_DATA)?,
        })
    }

    /// Icon for the given toggle state, matching the current menu bar appearance
    pub fn for_state(&self, sleep_allowed: bool) -> &Icon {
        match (sleep_allowed, is_dark_mode()) {
            (true, true) => &self.sleep_allowed_dark,
            (true, false) => &self.sleep_allowed_light,
            (false, true) => &self.awake_dark,
            (false, false) => &self.awake_light,
        }
    }
}

/// Detect if macOS is in dark mode
#[cfg(target_os = "macos")]
#[allow(deprecated)]
pub fn is_dark_mode() -> bool {
    use cocoa::base::{id, nil};
    use cocoa::foundation::NSString;
    use objc::{msg_send, sel, sel_impl};

    unsafe {
        let user_defaults: id = msg_send![objc::class!(NSUserDefaults), standardUserDefaults];
        let key = NSString::alloc(nil).init_str("AppleInterfaceStyle");
        let value: id = msg_send![user_defaults, stringForKey: key];

        if value == nil {
            // No value means light mode
            false
        } else {
            let utf8: *const i8 = msg_send![value, UTF8String];
            if utf8.is_null() {
                false
            } else {
                let style = std::ffi::CStr::from_ptr(utf8).to_string_lossy();
                style == "Dark"
            }
        }
    }
}

#[cfg(not(target_os = "macos"))]
pub fn is_dark_mode() -> bool {
    true
}

/// Decoded RGBA pixels of a PNG
fn decode_rgba(data: &[u8]) -> Result<(Vec<u8>, u32, u32), IconError> {
    let decoder = png::Decoder::new(std::io::Cursor::new(data));
    let mut reader = decoder.read_info()?;

    let mut buf = vec![0; reader.output_buffer_size()];
    let info = reader.next_frame(&mut buf)?;
    buf.truncate(info.buffer_size());

    let rgba = match info.color_type {
        png::ColorType::Rgba => buf,
        png::ColorType::Rgb => {
            let mut rgba = Vec::with_capacity(buf.len() * 4 / 3);
            for chunk in buf.chunks(3) {
                rgba.extend_from_slice(chunk);
                rgba.push(255);
            }
            rgba
        }
        png::ColorType::GrayscaleAlpha => {
            let mut rgba = Vec::with_capacity(buf.len() * 2);
            for chunk in buf.chunks(2) {
                rgba.extend_from_slice(&[chunk[0], chunk[0], chunk[0], chunk[1]]);
            }
            rgba
        }
        png::ColorType::Grayscale => {
            let mut rgba = Vec::with_capacity(buf.len() * 4);
            for &gray in &buf {
                rgba.extend_from_slice(&[gray, gray, gray, 255]);
            }
            rgba
        }
        other => return Err(IconError::UnsupportedColor(other)),
    };

    Ok((rgba, info.width, info.height))
}

/// Load an icon from PNG data
fn load_icon_from_png(data: &[u8]) -> Result<Icon, IconError> {
    let (rgba, width, height) = decode_rgba(data)?;
    Ok(Icon::from_rgba(rgba, width, height)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_icons_decode_to_rgba() {
        for data in [
            SLEEP_ALLOWED_DARK_DATA,
            AWAKE_DARK_DATA,
            SLEEP_ALLOWED_LIGHT_DATA,
            AWAKE_LIGHT_DATA,
        ] {
            let (rgba, width, height) = decode_rgba(data).unwrap();
            assert_eq!(width, 44);
            assert_eq!(height, 44);
            assert_eq!(rgba.len(), (width * height * 4) as usize);
        }
    }

    #[test]
    fn test_dark_icons_are_white_light_icons_are_black() {
        let (dark, _, _) = decode_rgba(AWAKE_DARK_DATA).unwrap();
        let (light, _, _) = decode_rgba(AWAKE_LIGHT_DATA).unwrap();
        assert!(dark.chunks(4).all(|px| px[0] == 255));
        assert!(light.chunks(4).all(|px| px[0] == 0));
    }

    #[cfg(not(target_os = "macos"))]
    #[test]
    fn test_for_state_picks_icon_per_toggle() {
        let icons = TrayIcons::new().unwrap();
        assert!(std::ptr::eq(icons.for_state(true), &icons.sleep_allowed_dark));
        assert!(std::ptr::eq(icons.for_state(false), &icons.awake_dark));
        assert!(!std::ptr::eq(icons.for_state(true), icons.for_state(false)));
    }

    #[test]
    fn test_invalid_png_is_decode_error() {
        let err = decode_rgba(b"not a png").unwrap_err();
        assert!(matches!(err, IconError::Decode(_)));
    }
}
