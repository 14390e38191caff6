//! Normalizes raw model output into bullet lines.

use std::fmt;

/// Prefix put in front of every kept line.
pub const BULLET_GLYPH: &str = "• ";

/// Lines starting with this character are markdown emphasis or heading artifacts and are dropped.
pub const MARKUP_MARKER: char = '*';

/// One cleaned summary line, already prefixed with [`BULLET_GLYPH`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bullet(String);

impl Bullet {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Bullet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<&str> for Bullet {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Splits `raw` into lines, trims each one, drops blank lines and lines starting with
/// [`MARKUP_MARKER`], and prefixes the rest with [`BULLET_GLYPH`]. Order is preserved.
pub fn format_bullets(raw: &str) -> Vec<Bullet> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with(MARKUP_MARKER))
        .map(|line| Bullet(format!("{}{}", BULLET_GLYPH, line)))
        .collect()
}
