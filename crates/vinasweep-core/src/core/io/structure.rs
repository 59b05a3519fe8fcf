use crate::core::models::bounding_box::BoundingBox;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use thiserror::Error;
use tracing::trace;

const ATOM_TAG: &str = "ATOM";
const HETATM_TAG: &str = "HETATM";

const X_COLUMNS: (usize, usize) = (30, 38);
const Y_COLUMNS: (usize, usize) = (38, 46);
const Z_COLUMNS: (usize, usize) = (46, 54);

#[derive(Debug, Error)]
pub enum StructureError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("No usable ATOM/HETATM records found")]
    Empty,
}

/// Atomic coordinates in file order, split per axis.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Coordinates {
    pub xs: Vec<f64>,
    pub ys: Vec<f64>,
    pub zs: Vec<f64>,
}

impl Coordinates {
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    /// The box spanned by these coordinates, or `None` when there are none.
    pub fn bounding_box(&self) -> Option<BoundingBox> {
        BoundingBox::from_extremes(&self.xs, &self.ys, &self.zs)
    }
}

/// Defines the interface for extracting atomic coordinates from a structure file.
pub trait StructureFile {
    /// Reads all atom coordinates from a buffered reader.
    ///
    /// # Errors
    ///
    /// Returns an error if reading fails or no atom records are found.
    fn read_from(reader: &mut impl BufRead) -> Result<Coordinates, StructureError>;

    /// Reads all atom coordinates from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened, reading fails, or no atom
    /// records are found.
    fn read_from_path<P: AsRef<Path>>(path: P) -> Result<Coordinates, StructureError> {
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);
        Self::read_from(&mut reader)
    }
}

/// Fixed-column PDB-style files (PDB and PDBQT share the coordinate columns).
///
/// Only `ATOM` and `HETATM` records are considered. A record whose coordinate
/// columns are missing or do not parse is skipped rather than rejected.
pub struct PdbFile;

impl StructureFile for PdbFile {
    fn read_from(reader: &mut impl BufRead) -> Result<Coordinates, StructureError> {
        let mut coords = Coordinates::default();

        for (line_num, line_res) in reader.lines().enumerate() {
            let line = line_res?;
            if !is_atom_record(&line) {
                continue;
            }
            match parse_xyz(&line) {
                Some([x, y, z]) => {
                    coords.xs.push(x);
                    coords.ys.push(y);
                    coords.zs.push(z);
                }
                None => trace!(
                    "Skipping atom record with unusable coordinates on line {}",
                    line_num + 1
                ),
            }
        }

        if coords.is_empty() {
            return Err(StructureError::Empty);
        }
        Ok(coords)
    }
}

fn is_atom_record(line: &str) -> bool {
    line.starts_with(ATOM_TAG) || line.starts_with(HETATM_TAG)
}

fn parse_column(line: &str, (start, end): (usize, usize)) -> Option<f64> {
    line.get(start..end)?.trim().parse().ok()
}

fn parse_xyz(line: &str) -> Option<[f64; 3]> {
    Some([
        parse_column(line, X_COLUMNS)?,
        parse_column(line, Y_COLUMNS)?,
        parse_column(line, Z_COLUMNS)?,
    ])
}
