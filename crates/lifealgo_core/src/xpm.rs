//! Decoding of the XPM text images backends use for their icon strips.
//!
//! Only the subset needed for icons is understood: a `"w h ncolors cpp"`
//! header, `c` color keys given as `#RRGGBB` or `None`, then `h` pixel rows.

use crate::error::{AlgoError, Result};
use image::{Rgba, RgbaImage};
use std::collections::HashMap;

const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// Decodes XPM rows into an RGBA image.
pub fn decode(rows: &[&str]) -> Result<RgbaImage> {
    let (header, rest) = rows
        .split_first()
        .ok_or_else(|| AlgoError::xpm("missing header"))?;
    let (width, height, ncolors, cpp) = parse_header(header)?;

    if rest.len() < ncolors + height as usize {
        return Err(AlgoError::xpm(format!(
            "expected {} color and {} pixel rows, found {}",
            ncolors,
            height,
            rest.len()
        )));
    }
    let (color_rows, pixel_rows) = rest.split_at(ncolors);

    let mut palette = HashMap::with_capacity(ncolors);
    for row in color_rows {
        let (key, color) = parse_color(row, cpp)?;
        palette.insert(key, color);
    }

    let mut img = RgbaImage::new(width, height);
    for (y, row) in pixel_rows.iter().take(height as usize).enumerate() {
        if row.len() < width as usize * cpp {
            return Err(AlgoError::xpm(format!("pixel row {y} is too short")));
        }
        for x in 0..width as usize {
            let key = row
                .get(x * cpp..(x + 1) * cpp)
                .ok_or_else(|| AlgoError::xpm(format!("pixel row {y} is not ASCII")))?;
            let color = palette
                .get(key)
                .ok_or_else(|| AlgoError::xpm(format!("unknown color key {key:?}")))?;
            img.put_pixel(x as u32, y as u32, *color);
        }
    }
    Ok(img)
}

fn parse_header(header: &str) -> Result<(u32, u32, usize, usize)> {
    let fields: Vec<usize> = header
        .split_whitespace()
        .take(4)
        .map(str::parse)
        .collect::<std::result::Result<_, _>>()
        .map_err(|_| AlgoError::xpm(format!("bad header {header:?}")))?;
    match fields[..] {
        [w, h, n, cpp] if cpp > 0 => Ok((w as u32, h as u32, n, cpp)),
        _ => Err(AlgoError::xpm(format!("bad header {header:?}"))),
    }
}

fn parse_color(row: &str, cpp: usize) -> Result<(&str, Rgba<u8>)> {
    let key = row
        .get(..cpp)
        .ok_or_else(|| AlgoError::xpm(format!("bad color row {row:?}")))?;
    let mut tokens = row[cpp..].split_whitespace();
    while let Some(token) = tokens.next() {
        if token != "c" {
            continue;
        }
        let value = tokens
            .next()
            .ok_or_else(|| AlgoError::xpm(format!("missing color in {row:?}")))?;
        return Ok((key, parse_value(value)?));
    }
    Err(AlgoError::xpm(format!("no color key in {row:?}")))
}

fn parse_value(value: &str) -> Result<Rgba<u8>> {
    if value.eq_ignore_ascii_case("none") {
        return Ok(TRANSPARENT);
    }
    let hex = value
        .strip_prefix('#')
        .filter(|h| h.len() == 6)
        .ok_or_else(|| AlgoError::xpm(format!("unsupported color {value:?}")))?;
    let channel = |i: usize| {
        u8::from_str_radix(&hex[i..i + 2], 16)
            .map_err(|_| AlgoError::xpm(format!("unsupported color {value:?}")))
    };
    Ok(Rgba([channel(0)?, channel(2)?, channel(4)?, 255]))
}
