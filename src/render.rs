//! Plain-text rendering of a site matrix.

use crate::SiteView;

pub const OPEN_GLYPH: char = '.';
pub const CLOSED_GLYPH: char = '#';

/// Render one line per row, `.` for open sites and `#` for closed ones.
pub fn render(sites: &SiteView<'_>) -> String {
    render_with(sites, OPEN_GLYPH, CLOSED_GLYPH)
}

/// Render with caller-chosen glyphs. No newline follows the last row.
pub fn render_with(sites: &SiteView<'_>, open: char, closed: char) -> String {
    let side = sites.side();
    let mut out = String::with_capacity(side * (side + 1));
    for (r, row) in sites.rows().enumerate() {
        if r > 0 {
            out.push('\n');
        }
        out.extend(row.iter().map(|&is_open| if is_open { open } else { closed }));
    }
    out
}
