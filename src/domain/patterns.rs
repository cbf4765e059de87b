use thiserror::Error;

use super::{Cell, Coord, Generation};

/// Failure to read a pattern from RLE text
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PatternError {
    #[error("missing `x = .., y = ..` header line")]
    MissingHeader,
    #[error("invalid header `{0}`")]
    InvalidHeader(String),
    #[error("unsupported rule `{0}`, only B3/S23 is simulated")]
    UnsupportedRule(String),
    #[error("unexpected symbol `{symbol}` on line {line}")]
    UnexpectedSymbol { symbol: char, line: usize },
    #[error("cell ({x}, {y}) lies outside the declared {width}x{height} bounds")]
    OutOfBounds { x: i64, y: i64, width: i64, height: i64 },
    #[error("run of {run} on line {line} runs past the declared {width}x{height} bounds")]
    RunTooLong { run: i64, line: usize, width: i64, height: i64 },
}

/// A named set of live cells, positioned relative to its top-left corner
#[derive(Clone, Debug, PartialEq)]
pub struct Pattern {
    pub name: String,
    pub description: String,
    pub width: i64,
    pub height: i64,
    pub cells: Vec<Coord>,
}

impl Pattern {
    /// Create a pattern from relative live cell offsets
    pub fn new(name: impl Into<String>, description: impl Into<String>, cells: &[(i64, i64)]) -> Self {
        let cells: Vec<Coord> = cells.iter().map(|&c| Coord::from(c)).collect();
        let width = cells.iter().map(|c| c.x).max().map_or(0, |x| x + 1);
        let height = cells.iter().map(|c| c.y).max().map_or(0, |y| y + 1);
        Self {
            name: name.into(),
            description: description.into(),
            width,
            height,
            cells,
        }
    }

    /// Mark every pattern cell alive with its top-left corner at `origin`.
    /// Cells already tracked keep their key; nothing else is touched.
    pub fn place_on(&self, generation: &mut Generation, origin: Coord) {
        for cell in &self.cells {
            generation.set(origin.offset(cell.x, cell.y), Cell::Alive);
        }
    }

    /// Origin that centres the pattern on `coord`
    pub fn centered_at(&self, coord: Coord) -> Coord {
        coord.offset(-self.width / 2, -self.height / 2)
    }

    /// Parse a pattern in the run-length encoded format used by most Life tools:
    ///
    /// ```text
    /// #C optional comments
    /// x = 3, y = 3, rule = B3/S23
    /// bo$2bo$3o!
    /// ```
    pub fn from_rle(name: impl Into<String>, text: &str) -> Result<Self, PatternError> {
        let mut lines = text
            .lines()
            .enumerate()
            .map(|(i, l)| (i + 1, l.trim()))
            .filter(|(_, l)| !l.is_empty() && !l.starts_with('#'));

        let (_, header) = lines.next().ok_or(PatternError::MissingHeader)?;
        let (width, height) = parse_header(header)?;

        let mut cells = Vec::new();
        let (mut x, mut y) = (0i64, 0i64);
        let mut run: Option<i64> = None;

        'body: for (line_no, line) in lines {
            for symbol in line.chars() {
                match symbol {
                    '0'..='9' => {
                        let digit = i64::from(symbol as u8 - b'0');
                        run = Some(run.unwrap_or(0).saturating_mul(10).saturating_add(digit));
                    }
                    'b' | '.' => {
                        let n = run.take().unwrap_or(1);
                        x = x
                            .checked_add(n)
                            .filter(|&next| next <= width)
                            .ok_or(PatternError::RunTooLong { run: n, line: line_no, width, height })?;
                    }
                    'o' | 'A' => {
                        for _ in 0..run.take().unwrap_or(1) {
                            if x >= width || y >= height {
                                return Err(PatternError::OutOfBounds { x, y, width, height });
                            }
                            cells.push(Coord::new(x, y));
                            x += 1;
                        }
                    }
                    '$' => {
                        let n = run.take().unwrap_or(1);
                        y = y
                            .checked_add(n)
                            .filter(|&next| next <= height)
                            .ok_or(PatternError::RunTooLong { run: n, line: line_no, width, height })?;
                        x = 0;
                    }
                    '!' => break 'body,
                    c if c.is_whitespace() => {}
                    other => {
                        return Err(PatternError::UnexpectedSymbol { symbol: other, line: line_no });
                    }
                }
            }
        }

        Ok(Self {
            name: name.into(),
            description: String::from("Loaded from RLE"),
            width,
            height,
            cells,
        })
    }
}

/// Parse `x = W, y = H[, rule = R]`
fn parse_header(header: &str) -> Result<(i64, i64), PatternError> {
    let invalid = || PatternError::InvalidHeader(header.to_string());
    let mut width = None;
    let mut height = None;

    for field in header.split(',') {
        let (key, value) = field.split_once('=').ok_or_else(invalid)?;
        let value = value.trim();
        match key.trim() {
            "x" => width = Some(value.parse::<i64>().map_err(|_| invalid())?),
            "y" => height = Some(value.parse::<i64>().map_err(|_| invalid())?),
            "rule" => {
                let rule = value.to_ascii_uppercase();
                if rule != "B3/S23" && rule != "23/3" {
                    return Err(PatternError::UnsupportedRule(value.to_string()));
                }
            }
            _ => return Err(invalid()),
        }
    }

    match (width, height) {
        (Some(w), Some(h)) if w >= 0 && h >= 0 => Ok((w, h)),
        _ => Err(invalid()),
    }
}

/// Classic Game of Life patterns library
pub mod presets {
    use super::*;

    /// Glider - simplest spaceship, moves (+1, +1) every 4 generations
    pub fn glider() -> Pattern {
        Pattern::new(
            "Glider",
            "Moves diagonally (period 4)",
            &[
                (1, 0),
                (2, 1),
                (0, 2), (1, 2), (2, 2),
            ],
        )
    }

    /// Block - smallest still life
    pub fn block() -> Pattern {
        Pattern::new("Block", "Still life", &[(0, 0), (1, 0), (0, 1), (1, 1)])
    }

    /// Blinker - period 2 oscillator
    pub fn blinker() -> Pattern {
        Pattern::new("Blinker", "Oscillator (period 2)", &[(0, 1), (1, 1), (2, 1)])
    }

    /// Toad - period 2 oscillator
    pub fn toad() -> Pattern {
        Pattern::new(
            "Toad",
            "Oscillator (period 2)",
            &[
                (1, 0), (2, 0), (3, 0),
                (0, 1), (1, 1), (2, 1),
            ],
        )
    }

    /// Beacon - period 2 oscillator
    pub fn beacon() -> Pattern {
        Pattern::new(
            "Beacon",
            "Oscillator (period 2)",
            &[
                (0, 0), (1, 0),
                (0, 1),
                (3, 2),
                (2, 3), (3, 3),
            ],
        )
    }

    /// Lightweight Spaceship (LWSS)
    pub fn lwss() -> Pattern {
        Pattern::new(
            "LWSS",
            "Lightweight Spaceship (period 4)",
            &[
                (1, 0), (4, 0),
                (0, 1),
                (0, 2), (4, 2),
                (0, 3), (1, 3), (2, 3), (3, 3),
            ],
        )
    }

    /// R-pentomino - methuselah, stabilizes after 1103 generations
    pub fn r_pentomino() -> Pattern {
        Pattern::new(
            "R-pentomino",
            "Methuselah - stabilizes at gen 1103",
            &[
                (1, 0), (2, 0),
                (0, 1), (1, 1),
                (1, 2),
            ],
        )
    }

    /// Acorn - methuselah, stabilizes after 5206 generations
    pub fn acorn() -> Pattern {
        Pattern::new(
            "Acorn",
            "Methuselah - stabilizes at gen 5206",
            &[
                (1, 0),
                (3, 1),
                (0, 2), (1, 2), (4, 2), (5, 2), (6, 2),
            ],
        )
    }

    /// Gosper Glider Gun - emits a glider every 30 generations
    pub fn glider_gun() -> Pattern {
        Pattern::new(
            "Gosper Glider Gun",
            "Produces gliders (period 30)",
            &[
                (0, 4), (0, 5), (1, 4), (1, 5),
                (10, 4), (10, 5), (10, 6),
                (11, 3), (11, 7),
                (12, 2), (12, 8),
                (13, 2), (13, 8),
                (14, 5),
                (15, 3), (15, 7),
                (16, 4), (16, 5), (16, 6),
                (17, 5),
                (20, 2), (20, 3), (20, 4),
                (21, 2), (21, 3), (21, 4),
                (22, 1), (22, 5),
                (24, 0), (24, 1), (24, 5), (24, 6),
                (34, 2), (34, 3), (35, 2), (35, 3),
            ],
        )
    }

    /// Every preset, in menu order
    pub fn all_patterns() -> Vec<Pattern> {
        vec![
            glider(),
            block(),
            blinker(),
            toad(),
            beacon(),
            lwss(),
            r_pentomino(),
            acorn(),
            glider_gun(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn live(generation: &Generation) -> BTreeSet<Coord> {
        generation.live_cells().collect()
    }

    #[test]
    fn test_pattern_dimensions() {
        let glider = presets::glider();
        assert_eq!((glider.width, glider.height), (3, 3));
        assert_eq!(glider.cells.len(), 5);
        assert_eq!(presets::glider_gun().width, 36);
    }

    #[test]
    fn test_place_on_negative_origin() {
        let mut g = Generation::new();
        presets::block().place_on(&mut g, Coord::new(-3, -3));
        let expected: BTreeSet<Coord> = [(-3, -3), (-2, -3), (-3, -2), (-2, -2)]
            .into_iter()
            .map(Coord::from)
            .collect();
        assert_eq!(live(&g), expected);
    }

    #[test]
    fn test_centered_at() {
        let glider = presets::glider();
        assert_eq!(glider.centered_at(Coord::new(10, 10)), Coord::new(9, 9));
    }

    #[test]
    fn test_rle_glider_matches_preset() {
        let text = "#N Glider\n#C comment\nx = 3, y = 3, rule = B3/S23\nbob$2bo$3o!\n";
        let parsed = Pattern::from_rle("Glider", text).unwrap();
        let expected: BTreeSet<Coord> = presets::glider().cells.into_iter().collect();
        let actual: BTreeSet<Coord> = parsed.cells.into_iter().collect();
        assert_eq!(actual, expected);
        assert_eq!((parsed.width, parsed.height), (3, 3));
    }

    #[test]
    fn test_rle_multiline_and_row_runs() {
        let text = "x = 4, y = 4\n2o\n2b$\n2$o!";
        let parsed = Pattern::from_rle("p", text).unwrap();
        assert_eq!(parsed.cells, vec![Coord::new(0, 0), Coord::new(1, 0), Coord::new(0, 3)]);
    }

    #[test]
    fn test_rle_huge_runs_are_errors() {
        assert_eq!(
            Pattern::from_rle("p", "x = 1, y = 1\n99999999999999999999999b2b!"),
            Err(PatternError::RunTooLong { run: i64::MAX, line: 2, width: 1, height: 1 })
        );
        assert_eq!(
            Pattern::from_rle("p", "x = 2, y = 2\no99999999999999999999$o!"),
            Err(PatternError::RunTooLong { run: i64::MAX, line: 2, width: 2, height: 2 })
        );
        assert!(matches!(
            Pattern::from_rle("p", "x = 3, y = 1\n4b!"),
            Err(PatternError::RunTooLong { run: 4, .. })
        ));
        // A huge alive run stops at the first cell past the bounds
        assert_eq!(
            Pattern::from_rle("p", "x = 2, y = 1\n99999999999999999999o!"),
            Err(PatternError::OutOfBounds { x: 2, y: 0, width: 2, height: 1 })
        );
    }

    #[test]
    fn test_rle_missing_header() {
        assert_eq!(Pattern::from_rle("p", "# only comments\n"), Err(PatternError::MissingHeader));
    }

    #[test]
    fn test_rle_bad_header() {
        assert!(matches!(
            Pattern::from_rle("p", "x = three, y = 3\no!"),
            Err(PatternError::InvalidHeader(_))
        ));
    }

    #[test]
    fn test_rle_rejects_other_rules() {
        assert_eq!(
            Pattern::from_rle("p", "x = 1, y = 1, rule = B36/S23\no!"),
            Err(PatternError::UnsupportedRule("B36/S23".to_string()))
        );
    }

    #[test]
    fn test_rle_unexpected_symbol() {
        assert_eq!(
            Pattern::from_rle("p", "x = 2, y = 1\noz!"),
            Err(PatternError::UnexpectedSymbol { symbol: 'z', line: 2 })
        );
    }

    #[test]
    fn test_rle_out_of_bounds() {
        assert_eq!(
            Pattern::from_rle("p", "x = 2, y = 1\n3o!"),
            Err(PatternError::OutOfBounds { x: 2, y: 0, width: 2, height: 1 })
        );
    }
}
