//! Status-bar icon
//!
//! macOS shows the text title only; other platforms need a bitmap, which is
//! drawn here instead of shipping image assets.

use tray_icon::Icon;

const SIZE: u32 = 32;

/// Speech-bubble blue
const FILL: [u8; 4] = [0x00, 0x84, 0xFF, 0xFF];

/// Round bubble with a tail at the lower left
#[cfg_attr(target_os = "macos", allow(dead_code))]
pub fn status_icon() -> anyhow::Result<Icon> {
    Icon::from_rgba(bubble_rgba(), SIZE, SIZE)
        .map_err(|e| anyhow::anyhow!("Failed to create icon: {}", e))
}

fn bubble_rgba() -> Vec<u8> {
    let mut rgba = Vec::with_capacity((SIZE * SIZE * 4) as usize);
    let center = (SIZE as f32 - 1.0) / 2.0;
    let radius = SIZE as f32 * 0.42;

    for y in 0..SIZE {
        for x in 0..SIZE {
            let dx = x as f32 - center;
            let dy = y as f32 - center;
            let in_bubble = dx * dx + dy * dy <= radius * radius;
            // Tail: small triangle below the circle's lower-left edge
            let in_tail = x < SIZE / 3 && y >= SIZE * 2 / 3 && (SIZE - 1 - y) + x >= SIZE / 6;

            if in_bubble || in_tail {
                rgba.extend_from_slice(&FILL);
            } else {
                rgba.extend_from_slice(&[0, 0, 0, 0]);
            }
        }
    }

    rgba
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bubble_dimensions() {
        let rgba = bubble_rgba();
        assert_eq!(rgba.len(), (SIZE * SIZE * 4) as usize);
    }

    #[test]
    fn test_bubble_is_filled_in_the_middle_and_clear_at_corner() {
        let rgba = bubble_rgba();
        let pixel = |x: u32, y: u32| {
            let i = ((y * SIZE + x) * 4) as usize;
            [rgba[i], rgba[i + 1], rgba[i + 2], rgba[i + 3]]
        };
        assert_eq!(pixel(SIZE / 2, SIZE / 2), FILL);
        assert_eq!(pixel(SIZE - 1, 0)[3], 0);
    }
}
