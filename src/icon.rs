use std::io::Write;
use std::path::Path;

use image::{ImageFormat, Rgb, RgbImage};

use crate::config::Palette;
use crate::error::IconError;
use crate::geometry::{Bounds, Geometry, Point, point_in_polygon};

/// Largest side length `render_icon` will allocate.
pub const MAX_SIZE: u32 = 8192;

// Lightning bolt over a calendar outline on a flat blue square.
pub fn render_icon(size: u32, palette: &Palette) -> Result<RgbImage, IconError> {
    if size == 0 || size > MAX_SIZE {
        return Err(IconError::InvalidSize);
    }
    (size as usize)
        .checked_mul(size as usize)
        .and_then(|n| n.checked_mul(3))
        .ok_or(IconError::InvalidSize)?;
    let geo = Geometry::for_size(size);
    let mut img = RgbImage::from_pixel(size, size, palette.background);

    fill_polygon(&mut img, &geo.bolt, palette.foreground);
    stroke_rect(&mut img, &geo.calendar, geo.stroke, palette.foreground);

    tracing::debug!(size, stroke = geo.stroke, "icon rendered");
    Ok(img)
}

/// Encodes `img` as PNG at `path`, replacing whatever was there.
pub fn save_icon(img: &RgbImage, path: &Path) -> Result<(), IconError> {
    img.save_with_format(path, ImageFormat::Png)
        .map_err(|source| IconError::Save { path: path.to_path_buf(), source })
}

/// Renders, saves and reports one icon using the default palette.
pub fn create_icon<W: Write>(size: u32, filename: impl AsRef<Path>, out: &mut W) -> Result<(), IconError> {
    create_icon_with(size, filename, &Palette::default(), out)
}

pub fn create_icon_with<W: Write>(
    size: u32,
    filename: impl AsRef<Path>,
    palette: &Palette,
    out: &mut W,
) -> Result<(), IconError> {
    let path = filename.as_ref();
    let img = render_icon(size, palette)?;
    save_icon(&img, path)?;
    tracing::info!(size, path = %path.display(), "icon written");
    writeln!(out, "Created {}", path.display())?;
    Ok(())
}

// Vertices round to whole pixels. A pixel is covered when its integer
// coordinate is inside the polygon or lies on one of its edges.
fn fill_polygon(img: &mut RgbImage, poly: &[Point], color: Rgb<u8>) {
    let snapped: Vec<Point> = poly.iter().map(|p| p.rounded()).collect();

    for (x, y, pixel) in img.enumerate_pixels_mut() {
        if point_in_polygon(x as f64, y as f64, &snapped) {
            *pixel = color;
        }
    }

    let mut prev = match snapped.last() {
        Some(p) => *p,
        None => return,
    };
    for &p in &snapped {
        draw_line(img, (prev.x as i64, prev.y as i64), (p.x as i64, p.y as i64), color);
        prev = p;
    }
}

// Bresenham, endpoints included.
fn draw_line(img: &mut RgbImage, from: (i64, i64), to: (i64, i64), color: Rgb<u8>) {
    let (mut x, mut y) = from;
    let dx = (to.0 - x).abs();
    let dy = -(to.1 - y).abs();
    let sx = if x < to.0 { 1 } else { -1 };
    let sy = if y < to.1 { 1 } else { -1 };
    let mut err = dx + dy;
    loop {
        put_clipped(img, x, y, color);
        if (x, y) == to {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }
}

// Corners truncate to whole pixels, edges are inclusive and the stroke grows inward.
fn stroke_rect(img: &mut RgbImage, bounds: &Bounds, width: u32, color: Rgb<u8>) {
    let (x0, y0) = (bounds.min.x as i64, bounds.min.y as i64);
    let (x1, y1) = (bounds.max.x as i64, bounds.max.y as i64);

    for i in 0..width as i64 {
        let (l, t, r, b) = (x0 + i, y0 + i, x1 - i, y1 - i);
        if l > r || t > b {
            break;
        }
        for x in l..=r {
            put_clipped(img, x, t, color);
            put_clipped(img, x, b, color);
        }
        for y in t..=b {
            put_clipped(img, l, y, color);
            put_clipped(img, r, y, color);
        }
    }
}

#[inline]
fn put_clipped(img: &mut RgbImage, x: i64, y: i64, color: Rgb<u8>) {
    if x >= 0 && y >= 0 && (x as u64) < img.width() as u64 && (y as u64) < img.height() as u64 {
        img.put_pixel(x as u32, y as u32, color);
    }
}
