//! BASIC listing generation.
//!
//! The listing is a fixed loop that walks the 40x25 screen, pokes a reversed
//! space (code 160) into screen RAM at 1024 and the next DATA value into
//! color RAM at 55296. The DATA lines follow at 1000, 1010, ...

use std::fmt::Write as _;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::ConvertError;

/// Fixed program header, one statement per line.
pub const PROGRAM_HEADER: &str = "\
10 for y = 0 to 24
20 for x = 0 to 39
30 o = 40 * y + x
40 poke 1024 + o, 160
45 read c
50 poke 55296 + o, c
60 next x,y
70 goto 70
";

/// Number of values per DATA line
pub const DATA_ROW_SIZE: usize = 20;

/// Line number of the first DATA line
pub const FIRST_DATA_LINE: u32 = 1000;

/// Increment between DATA line numbers
pub const DATA_LINE_STEP: u32 = 10;

/// Split `points` into consecutive rows of `row_size`.
///
/// All rows are full except possibly the last, which holds the remainder.
/// Empty input yields no rows.
///
/// # Panics
///
/// Panics if `row_size` is 0.
pub fn split_into_rows<T>(points: &[T], row_size: usize) -> Vec<&[T]> {
    points.chunks(row_size).collect()
}

/// Format one `DATA` line, e.g. `1000 data 0,1,2`.
pub fn data_line(line_number: u32, row: &[u8]) -> String {
    let mut line = format!("{line_number} data ");
    for (i, value) in row.iter().enumerate() {
        if i > 0 {
            line.push(',');
        }
        let _ = write!(line, "{value}");
    }
    line
}

/// Render the full listing for a row-major sequence of palette indices.
pub fn render_program(indices: &[u8]) -> String {
    let mut program = String::from(PROGRAM_HEADER);
    let mut line_number = FIRST_DATA_LINE;
    for row in split_into_rows(indices, DATA_ROW_SIZE) {
        program.push_str(&data_line(line_number, row));
        program.push('\n');
        line_number += DATA_LINE_STEP;
    }
    program
}

/// Write the listing to `path`.
pub fn write_program(indices: &[u8], path: &Path) -> Result<(), ConvertError> {
    let program = render_program(indices);
    let mut writer = BufWriter::new(File::create(path)?);
    writer.write_all(program.as_bytes())?;
    writer.flush()?;
    tracing::info!(
        path = %path.display(),
        values = indices.len(),
        lines = program.lines().count(),
        "Wrote BASIC program"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_split_even() {
        let rows = split_into_rows(&[1, 2, 3, 4, 5, 6], 3);
        assert_eq!(rows, vec![&[1, 2, 3][..], &[4, 5, 6][..]]);
    }

    #[test]
    fn test_split_uneven() {
        let rows = split_into_rows(&[1, 2, 3, 4, 5], 3);
        assert_eq!(rows, vec![&[1, 2, 3][..], &[4, 5][..]]);
    }

    #[test]
    fn test_split_single_row() {
        let rows = split_into_rows(&[1, 2, 3], 5);
        assert_eq!(rows, vec![&[1, 2, 3][..]]);
    }

    #[test]
    fn test_split_empty() {
        let rows = split_into_rows::<u8>(&[], 3);
        assert!(rows.is_empty());
    }

    #[test]
    fn test_split_row_size_one() {
        let rows = split_into_rows(&[1, 2, 3], 1);
        assert_eq!(rows, vec![&[1][..], &[2][..], &[3][..]]);
    }

    #[test]
    fn test_split_counts() {
        for (n, r) in [(1000, 20), (999, 20), (21, 20), (7, 3), (1, 1)] {
            let points: Vec<u32> = (0..n).collect();
            let rows = split_into_rows(&points, r);
            assert_eq!(rows.len(), (n as usize).div_ceil(r));
            let (last, full) = rows.split_last().unwrap();
            assert!(full.iter().all(|row| row.len() == r));
            let rem = n as usize % r;
            assert_eq!(last.len(), if rem == 0 { r } else { rem });
        }
    }

    #[test]
    fn test_header_has_eight_lines() {
        assert_eq!(PROGRAM_HEADER.lines().count(), 8);
        assert!(PROGRAM_HEADER.ends_with("70 goto 70\n"));
    }

    #[test]
    fn test_data_line_format() {
        assert_eq!(data_line(1000, &[0, 1, 15]), "1000 data 0,1,15");
    }

    #[test]
    fn test_render_short_program() {
        let indices: Vec<u8> = (0..10).collect();
        let program = render_program(&indices);
        assert_eq!(
            program,
            format!("{PROGRAM_HEADER}1000 data 0,1,2,3,4,5,6,7,8,9\n")
        );
    }

    #[test]
    fn test_render_full_screen_line_numbers() {
        let indices = vec![3u8; 1000];
        let program = render_program(&indices);
        let data: Vec<&str> = program.lines().skip(8).collect();

        assert_eq!(data.len(), 50);
        assert!(data[0].starts_with("1000 data "));
        assert!(data[49].starts_with("1490 data "));
        for line in &data {
            let values = line.split_once(" data ").unwrap().1;
            assert_eq!(values.split(',').count(), 20);
        }
    }

    #[test]
    fn test_data_lines_never_collide_with_header() {
        let program = render_program(&[0u8; 1000]);
        let numbers: Vec<u32> = program
            .lines()
            .map(|l| l.split_whitespace().next().unwrap().parse().unwrap())
            .collect();
        let mut sorted = numbers.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), numbers.len());
        assert_eq!(numbers, sorted);
    }

    #[test]
    fn test_write_program() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("test.basic");

        write_program(&[0, 1, 2, 3, 4, 5, 6, 7, 8, 9], &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("10 for y = 0 to 24"));
        assert!(content.contains("1000 data"));
        assert!(content.contains("0,1,2,3,4,5,6,7,8,9"));
        assert!(content.ends_with('\n'));
    }

    #[test]
    fn test_write_program_bad_path() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("missing-dir").join("test.basic");
        assert!(matches!(
            write_program(&[0], &path),
            Err(ConvertError::Io(_))
        ));
    }
}
