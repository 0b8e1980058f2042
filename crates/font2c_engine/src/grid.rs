//! Rectangular bit grid with the geometric operations needed for glyph
//! conversion: padding/trimming, mirroring, transposition, quarter-turn
//! rotation and serialization into packed hex elements.

use serde::{Deserialize, Serialize};

const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

/// Element order used when flattening the packed output.
///
/// Only makes a difference when a glyph column packs into more than one
/// element (e.g. fonts taller than 8 pixels with 1-byte elements).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ByteOrder {
    /// Flatten the element matrix as produced by the packing rotation,
    /// one output row per original glyph column.
    #[default]
    RowMajor,
    /// Transpose the element matrix before flattening, so all first elements
    /// of every column come before all second elements.
    ColumnMajor,
}

/// A rectangular 2-D grid of bits, `width` columns by `height` rows.
///
/// Every row has identical length. All transforms mutate the grid in place;
/// [`PixelGrid::pack`] works on a private clone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    width: usize,
    rows: Vec<Vec<bool>>,
}

impl PixelGrid {
    /// Create a grid with all pixels off.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            rows: vec![vec![false; width]; height],
        }
    }

    /// Build a grid from a textual pattern, one string per row.
    /// `'1'` and `'#'` are set pixels, everything else is clear.
    /// All rows must have the same length.
    pub fn from_pattern(pattern: &[&str]) -> Self {
        let width = pattern.first().map_or(0, |row| row.chars().count());
        let rows = pattern
            .iter()
            .map(|row| {
                debug_assert_eq!(row.chars().count(), width);
                row.chars().map(|ch| ch == '1' || ch == '#').collect()
            })
            .collect();
        Self { width, rows }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// `true` if either dimension is zero.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.rows.is_empty()
    }

    /// Get a pixel value. Returns `false` for out-of-bounds coordinates.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> bool {
        self.rows.get(y).and_then(|row| row.get(x)).copied().unwrap_or(false)
    }

    /// Set a pixel value. Does nothing for out-of-bounds coordinates.
    #[inline]
    pub fn set(&mut self, x: usize, y: usize, value: bool) {
        if let Some(cell) = self.rows.get_mut(y).and_then(|row| row.get_mut(x)) {
            *cell = value;
        }
    }

    /// Add blank rows/columns to an edge (positive amount) or trim rows/columns
    /// from it (negative amount). Edges are applied in the fixed order top,
    /// bottom, left, right; each step only touches its own edge, so the order
    /// among the four does not change the result.
    ///
    /// Trimming past the current dimension clamps to an empty grid. Trimming
    /// discards pixel data irreversibly: `pad(+k)` then `pad(-k)` on the same
    /// edge is the identity, the reverse order replaces lost data with zeros.
    pub fn pad(&mut self, top: i32, bottom: i32, left: i32, right: i32) {
        if top > 0 {
            let blank = vec![false; self.width];
            self.rows.splice(0..0, std::iter::repeat(blank).take(top as usize));
        } else if top < 0 {
            let n = self.rows.len().min(top.unsigned_abs() as usize);
            self.rows.drain(..n);
        }

        if bottom > 0 {
            let blank = vec![false; self.width];
            self.rows.extend(std::iter::repeat(blank).take(bottom as usize));
        } else if bottom < 0 {
            let n = self.rows.len().saturating_sub(bottom.unsigned_abs() as usize);
            self.rows.truncate(n);
        }

        if left > 0 {
            let n = left as usize;
            for row in &mut self.rows {
                row.splice(0..0, std::iter::repeat(false).take(n));
            }
            self.width += n;
        } else if left < 0 {
            let n = self.width.min(left.unsigned_abs() as usize);
            for row in &mut self.rows {
                row.drain(..n);
            }
            self.width -= n;
        }

        if right > 0 {
            let n = right as usize;
            for row in &mut self.rows {
                row.extend(std::iter::repeat(false).take(n));
            }
            self.width += n;
        } else if right < 0 {
            let n = self.width.min(right.unsigned_abs() as usize);
            for row in &mut self.rows {
                row.truncate(row.len() - n);
            }
            self.width -= n;
        }
    }

    /// Reverse the bit order within every row (left-right mirror).
    pub fn flip_horizontal(&mut self) {
        for row in &mut self.rows {
            row.reverse();
        }
    }

    /// Reverse the order of rows (top-bottom mirror).
    pub fn flip_vertical(&mut self) {
        self.rows.reverse();
    }

    /// Reflect the grid about the top-left corner: new cell (r,c) = old cell
    /// (c,r). Swaps width and height.
    pub fn transpose(&mut self) {
        let new_width = self.rows.len();
        let new_rows: Vec<Vec<bool>> = (0..self.width)
            .map(|r| (0..new_width).map(|c| self.rows[c][r]).collect())
            .collect();
        self.width = new_width;
        self.rows = new_rows;
    }

    /// Rotate a quarter turn clockwise. Four applications are the identity.
    pub fn rotate_cw(&mut self) {
        self.transpose();
        self.flip_horizontal();
    }

    /// Rotate a quarter turn counter-clockwise.
    pub fn rotate_ccw(&mut self) {
        self.transpose();
        self.flip_vertical();
    }

    /// Serialize the grid into packed hex elements.
    ///
    /// Works on a private clone, rotated one quarter turn clockwise first so
    /// that each output row corresponds to one original column read bottom to
    /// top, most significant bit first: the top-most pixel of a column lands
    /// in the lowest-order bit, the original top-left pixel in the
    /// least-significant bit of the first output row.
    /// Each rotated row is rendered as a hex string (zero-extended on the
    /// most-significant side to a whole number of digits), split left to right
    /// into chunks of `element_size * 2` digits, and the chunk order within
    /// the row is reversed: the first element of a row holds the
    /// lowest-numbered bits of that row. With [`ByteOrder::ColumnMajor`] the
    /// 2-D element matrix is transposed before flattening in row-major
    /// reading order.
    ///
    /// Every returned string is exactly `element_size * 2` uppercase hex
    /// digits. An empty grid produces an empty sequence. Dimensions are not
    /// required to be multiples of 8; zero-extension pads implicitly.
    ///
    /// `element_size` must be in `[1, 4]`; this is enforced when the
    /// configuration is created, not here.
    pub fn pack(&self, element_size: u32, byte_order: ByteOrder) -> Vec<String> {
        let mut rotated = self.clone();
        rotated.rotate_cw();

        let nibbles = element_size as usize * 2;
        let mut elements: Vec<Vec<String>> = Vec::with_capacity(rotated.height());
        for row in &rotated.rows {
            let digits = row_to_hex(row);
            let mut row_elements: Vec<String> = digits
                .chunks(nibbles)
                .map(|chunk| {
                    let mut element = String::with_capacity(nibbles);
                    for _ in chunk.len()..nibbles {
                        element.push('0');
                    }
                    element.extend(chunk.iter().map(|&d| d as char));
                    element
                })
                .collect();
            row_elements.reverse();
            elements.push(row_elements);
        }

        if byte_order == ByteOrder::ColumnMajor {
            elements = transpose_elements(&elements);
        }

        elements.into_iter().flatten().collect()
    }
}

/// Render a row of bits as uppercase hex digits, zero-extended on the left
/// so the digit count is `ceil(bits / 4)`.
fn row_to_hex(row: &[bool]) -> Vec<u8> {
    let digit_count = row.len().div_ceil(4);
    let mut digits = Vec::with_capacity(digit_count);
    let mut nibble = 0u8;
    let mut filled = digit_count * 4 - row.len();
    for &bit in row {
        nibble = (nibble << 1) | u8::from(bit);
        filled += 1;
        if filled == 4 {
            digits.push(HEX_DIGITS[nibble as usize]);
            nibble = 0;
            filled = 0;
        }
    }
    digits
}

fn transpose_elements(elements: &[Vec<String>]) -> Vec<Vec<String>> {
    let columns = elements.first().map_or(0, Vec::len);
    (0..columns)
        .map(|c| elements.iter().map(|row| row[c].clone()).collect())
        .collect()
}
