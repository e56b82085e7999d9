use crate::errors::CalendarError;
use crate::models::{Colors, PaletteMap};

/// Picks the palettes for one render. A known palette name narrows the set to that palette;
/// anything else falls back to every stored palette.
pub fn resolve(overrides: Option<&Colors>, stored: &PaletteMap) -> PaletteMap {
    match overrides {
        Some(Colors::Named(name)) => match stored.get(name) {
            Some(palette) => PaletteMap::from([(name.clone(), palette.clone())]),
            None => stored.clone(),
        },
        Some(Colors::Palettes(palettes)) if !palettes.is_empty() => palettes.clone(),
        _ => stored.clone(),
    }
}

/// Palette for an entry's color key, or the first palette when the key is unknown.
pub fn palette_for<'a>(palettes: &'a PaletteMap, key: &str) -> Option<&'a [String]> {
    palettes
        .get(key)
        .or_else(|| palettes.values().next())
        .map(Vec::as_slice)
}

/// Color at the 1-based `shade`, clamped into the palette.
pub fn shade_color(palette: &[String], shade: usize) -> Option<&str> {
    if palette.is_empty() {
        return None;
    }
    let index = shade.clamp(1, palette.len()) - 1;
    palette.get(index).map(String::as_str)
}

pub fn validate(palettes: &PaletteMap) -> Result<(), CalendarError> {
    if palettes.is_empty() {
        return Err(CalendarError::NoPalettes);
    }
    match palettes.iter().find(|(_, colors)| colors.is_empty()) {
        Some((name, _)) => Err(CalendarError::EmptyPalette(name.clone())),
        None => Ok(()),
    }
}
