//! Map code text: header and run-length body
//!
//! A map code is `header:body`. The header is seven dot-separated fields,
//! `{m}x{n}.c{checkpoints}.r{rocks}.w{walls}.t{teleporters}.{name}.`, the last
//! one always empty. The body lists every non-empty cell in row-major order as
//! `{gap}{symbol}`, where `gap` is the number of empty cells skipped since the
//! previous token, followed by a trailing empty token.
//!
//! ```text
//! 13x7.c1.r10.w9.t0.Simple.:0s.0r.10f.0s.5r.5f.
//! ```

use std::str::FromStr;

use crate::io::error::{MapError, Result, malformed};
use crate::spatial::grid::{MapGrid, check_dimensions};
use crate::spatial::tiles::{EMPTY, Tile};

/// Separator between header and body
const SECTION_DELIMITER: char = ':';
/// Separator between header fields and between body tokens
const FIELD_DELIMITER: char = '.';
/// Separator between width and height in the first header field
const DIMENSION_DELIMITER: char = 'x';
/// Header fields up to and including the name
const REQUIRED_HEADER_FIELDS: usize = 6;

/// Parsed map code header
///
/// The declared counts are informational; decoding always rebuilds them from
/// the body. `None` means the field had its prefix but no number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapHeader {
    /// Columns
    pub width: usize,
    /// Rows
    pub height: usize,
    /// Declared checkpoint groups
    pub checkpoints: Option<usize>,
    /// Declared rocks
    pub rocks: Option<usize>,
    /// Wall budget
    pub walls: usize,
    /// Declared teleporter groups
    pub teleporters: Option<usize>,
    /// Map name
    pub name: String,
}

/// Encode a grid as map code text
pub fn encode(grid: &MapGrid) -> String {
    let counts = grid.header_counts();
    let header = [
        format!("{}{DIMENSION_DELIMITER}{}", grid.width(), grid.height()),
        format!("c{}", counts.checkpoints),
        format!("r{}", counts.rocks),
        format!("w{}", grid.walls()),
        format!("t{}", counts.teleporters),
        grid.name().to_string(),
        String::new(),
    ]
    .join(".");

    let mut tokens = Vec::new();
    let mut gap = 0;
    for tile in grid.tiles() {
        if tile.is_empty() {
            gap += 1;
        } else {
            tokens.push(format!("{gap}{tile}"));
            gap = 0;
        }
    }
    tokens.push(String::new());
    let body = tokens.join(".");

    format!("{header}{SECTION_DELIMITER}{body}")
}

/// Decode map code text into a grid
///
/// Line breaks anywhere in the text are ignored, so forum-wrapped codes decode
/// directly.
///
/// # Errors
///
/// Returns `MalformedEncoding` if the header or body cannot be parsed, a token
/// lands outside the grid, or a symbol is not in the tile catalog. Headers
/// declaring more than `MAX_GRID_CELLS` cells are rejected before the grid is
/// allocated.
pub fn decode(code: &str) -> Result<MapGrid> {
    let code = strip_line_breaks(code);
    let (header_text, body) = code
        .split_once(SECTION_DELIMITER)
        .ok_or_else(|| malformed("map code", &"missing ':' between header and body"))?;

    let header = parse_header_fields(header_text)?;
    let tiles = parse_body(body, header.width, header.height)?;

    MapGrid::from_tiles(header.width, header.height, header.walls, header.name, tiles)
        .map_err(|error| malformed("header", &error))
}

/// Parse only the header of a map code
///
/// # Errors
///
/// Returns `MalformedEncoding` if a field is missing, lacks its prefix, or has
/// a non-numeric dimension or wall budget
pub fn parse_header(code: &str) -> Result<MapHeader> {
    let code = strip_line_breaks(code);
    let header_text = code
        .split_once(SECTION_DELIMITER)
        .map_or(code.as_str(), |(header, _)| header);
    parse_header_fields(header_text)
}

impl MapGrid {
    /// Encode this grid as map code text
    pub fn to_map_code(&self) -> String {
        encode(self)
    }
}

impl FromStr for MapGrid {
    type Err = MapError;

    fn from_str(code: &str) -> Result<Self> {
        decode(code)
    }
}

fn strip_line_breaks(code: &str) -> String {
    code.chars().filter(|&c| c != '\n' && c != '\r').collect()
}

fn parse_header_fields(header: &str) -> Result<MapHeader> {
    let fields: Vec<&str> = header.split(FIELD_DELIMITER).collect();
    if fields.len() < REQUIRED_HEADER_FIELDS {
        return Err(malformed(
            "header",
            &format!(
                "expected at least {REQUIRED_HEADER_FIELDS} fields, found {}",
                fields.len()
            ),
        ));
    }
    let field = |index: usize| fields.get(index).copied().unwrap_or_default();

    let (width_text, height_text) = field(0)
        .split_once(DIMENSION_DELIMITER)
        .ok_or_else(|| malformed("dimensions", &format!("'{}' is not {{m}}x{{n}}", field(0))))?;
    let width = parse_number("dimensions", width_text)?;
    let height = parse_number("dimensions", height_text)?;
    check_dimensions(width, height).map_err(|error| malformed("dimensions", &error))?;

    let checkpoints = strip_prefix("checkpoints", field(1), 'c')?.parse().ok();
    let rocks = strip_prefix("rocks", field(2), 'r')?.parse().ok();
    let walls = parse_number("walls", strip_prefix("walls", field(3), 'w')?)?;
    let teleporters = strip_prefix("teleporters", field(4), 't')?.parse().ok();

    Ok(MapHeader {
        width,
        height,
        checkpoints,
        rocks,
        walls,
        teleporters,
        name: field(5).to_string(),
    })
}

fn strip_prefix<'a>(name: &'static str, field: &'a str, prefix: char) -> Result<&'a str> {
    field
        .strip_prefix(prefix)
        .ok_or_else(|| malformed(name, &format!("'{field}' should start with '{prefix}'")))
}

fn parse_number(name: &'static str, text: &str) -> Result<usize> {
    if text.is_empty() || !text.bytes().all(|byte| byte.is_ascii_digit()) {
        return Err(malformed(name, &format!("'{text}' is not a non-negative integer")));
    }
    text.parse()
        .map_err(|error| malformed(name, &format!("'{text}': {error}")))
}

fn parse_body(body: &str, width: usize, height: usize) -> Result<Vec<Tile>> {
    let cell_count = width * height;
    let mut tiles = vec![EMPTY; cell_count];

    let mut tokens: Vec<&str> = body.split(FIELD_DELIMITER).collect();
    match tokens.pop() {
        Some("") => {}
        _ => {
            return Err(malformed("body", &"missing trailing '.' terminator"));
        }
    }

    // Cursor is one past the last tile written
    let mut next = 0_usize;
    for token in tokens {
        let mut chars = token.chars();
        let symbol = chars
            .next_back()
            .ok_or_else(|| malformed("body", &"empty token"))?;
        let gap = parse_number("body", chars.as_str())?;

        let tile = Tile::from_symbol(symbol)
            .filter(|tile| !tile.is_empty())
            .ok_or_else(|| malformed("body", &format!("unknown tile symbol {symbol:?}")))?;

        let index = next
            .checked_add(gap)
            .filter(|&index| index < cell_count)
            .ok_or_else(|| {
                malformed(
                    "body",
                    &format!("token '{token}' runs past the {cell_count} cells of the grid"),
                )
            })?;

        if let Some(cell) = tiles.get_mut(index) {
            *cell = tile;
        }
        next = index + 1;
    }

    Ok(tiles)
}
