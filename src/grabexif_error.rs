use std::{io, path::PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GrabExifError {
    #[error("Error: {} -> opening input: {source}", path.display())]
    OpenInput { path: PathBuf, source: io::Error },
    #[error("Error: {} -> reading input: {source}", path.display())]
    ReadInput { path: PathBuf, source: io::Error },
    #[error("Error: {} -> opening output: {source}", path.display())]
    OpenOutput { path: PathBuf, source: io::Error },
    #[error("Error: {} -> writing output: {source}", path.display())]
    WriteOutput { path: PathBuf, source: io::Error },
}
