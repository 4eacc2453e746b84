use anyhow::Result;
use tray_icon::Icon;

const ICON_SIZE: u32 = 64;

const FACE: [u8; 4] = [250, 200, 40, 255];
const OUTLINE: [u8; 4] = [150, 100, 0, 255];
const FEATURE: [u8; 4] = [60, 40, 20, 255];

pub fn create_icon() -> Result<Icon> {
    let data = render_smiley(ICON_SIZE);
    Ok(Icon::from_rgba(data, ICON_SIZE, ICON_SIZE)?)
}

/// RGBA pixels of a round smiling face on a transparent background.
pub fn render_smiley(size: u32) -> Vec<u8> {
    let mut data = vec![0u8; (size * size * 4) as usize];
    let s = size as f32;
    let center = s / 2.0;
    let radius = s / 2.0 - 2.0;
    let outline = (s / 32.0).max(1.0);

    let eye_radius = s / 12.0;
    let eyes = [(center - s / 6.0, center - s / 8.0), (center + s / 6.0, center - s / 8.0)];
    let smile_radius = s / 4.0;
    let smile_width = (s / 20.0).max(1.0);

    for y in 0..size {
        for x in 0..size {
            let (px, py) = (x as f32 + 0.5, y as f32 + 0.5);
            let dist = ((px - center).powi(2) + (py - center).powi(2)).sqrt();
            if dist > radius {
                continue;
            }

            let on_eye = eyes
                .iter()
                .any(|&(ex, ey)| ((px - ex).powi(2) + (py - ey).powi(2)).sqrt() <= eye_radius);
            let on_smile = py > center + s / 16.0 && (dist - smile_radius).abs() <= smile_width;

            let color = if dist > radius - outline {
                OUTLINE
            } else if on_eye || on_smile {
                FEATURE
            } else {
                FACE
            };

            let idx = ((y * size + x) * 4) as usize;
            data[idx..idx + 4].copy_from_slice(&color);
        }
    }
    data
}
