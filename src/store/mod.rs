// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Strata-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Strata and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Persistence for matrix documents on disk.
//!
//! A document is a single JSON file (see [`MatrixFile`]). Writes go through a temp file that is
//! renamed into place, so a crash never leaves a half-written document behind.

use std::fmt;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::model::Matrix;

mod document;

pub use document::{
    EdgeRecord, MatrixFile, NodeRecord, ObjectRecord, PhaseRecord, DOCUMENT_VERSION,
};

#[derive(Debug)]
pub enum StoreError {
    Io { path: PathBuf, source: io::Error },
    Json { path: PathBuf, source: serde_json::Error },
    SymlinkRefused { path: PathBuf },
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "io error at {path:?}: {source}"),
            Self::Json { path, source } => write!(f, "json error at {path:?}: {source}"),
            Self::SymlinkRefused { path } => write!(f, "refusing to write through symlink {path:?}"),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Json { source, .. } => Some(source),
            Self::SymlinkRefused { .. } => None,
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum WriteDurability {
    /// Temp file plus atomic rename, no fsync.
    #[default]
    BestEffort,
    /// Like `BestEffort`, but fsyncs the file before the rename and the directory after it.
    Durable,
}

/// A matrix document at a fixed path.
#[derive(Debug, Clone)]
pub struct DocumentStore {
    path: PathBuf,
    durability: WriteDurability,
}

impl DocumentStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into(), durability: WriteDurability::default() }
    }

    pub fn with_durability(mut self, durability: WriteDurability) -> Self {
        self.durability = durability;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn durability(&self) -> WriteDurability {
        self.durability
    }

    pub fn load_file(&self) -> Result<MatrixFile, StoreError> {
        let raw = fs::read_to_string(&self.path)
            .map_err(|source| StoreError::Io { path: self.path.clone(), source })?;
        serde_json::from_str(&raw)
            .map_err(|source| StoreError::Json { path: self.path.clone(), source })
    }

    /// Loads the document as a matrix named after the file stem, at revision 0.
    pub fn load(&self) -> Result<Matrix, StoreError> {
        let file = self.load_file()?;
        let graph = file.to_graph();
        tracing::debug!(
            path = %self.path.display(),
            units = graph.units().len(),
            relations = graph.relations().len(),
            phases = graph.phases().len(),
            objects = graph.objects().len(),
            "loaded matrix document"
        );
        Ok(Matrix::new(self.matrix_name(), graph))
    }

    pub fn save(&self, matrix: &Matrix) -> Result<(), StoreError> {
        self.save_file(&MatrixFile::from_graph(matrix.graph()))
    }

    pub fn save_file(&self, file: &MatrixFile) -> Result<(), StoreError> {
        let mut contents = serde_json::to_vec_pretty(file)
            .map_err(|source| StoreError::Json { path: self.path.clone(), source })?;
        contents.push(b'\n');
        write_atomic(&self.path, &contents, self.durability)?;
        tracing::debug!(
            path = %self.path.display(),
            bytes = contents.len(),
            durability = ?self.durability,
            "saved matrix document"
        );
        Ok(())
    }

    fn matrix_name(&self) -> String {
        self.path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| "matrix".to_owned())
    }
}

/// JSON Schema of the document format.
pub fn document_schema() -> Result<serde_json::Value, serde_json::Error> {
    serde_json::to_value(schemars::schema_for!(MatrixFile))
}

fn rename_overwrite(from: &Path, to: &Path) -> io::Result<()> {
    #[cfg(windows)]
    {
        match fs::rename(from, to) {
            Ok(()) => Ok(()),
            Err(err)
                if matches!(
                    err.kind(),
                    io::ErrorKind::AlreadyExists | io::ErrorKind::PermissionDenied
                ) =>
            {
                let _ = fs::remove_file(to);
                fs::rename(from, to)
            }
            Err(err) => Err(err),
        }
    }

    #[cfg(not(windows))]
    {
        fs::rename(from, to)
    }
}

fn write_atomic(path: &Path, contents: &[u8], durability: WriteDurability) -> Result<(), StoreError> {
    let io_err = |path: &Path| {
        let path = path.to_path_buf();
        move |source| StoreError::Io { path, source }
    };

    match fs::symlink_metadata(path) {
        Ok(md) if md.file_type().is_symlink() => {
            return Err(StoreError::SymlinkRefused { path: path.to_path_buf() });
        }
        Ok(_) => {}
        Err(err) if err.kind() == io::ErrorKind::NotFound => {}
        Err(source) => return Err(StoreError::Io { path: path.to_path_buf(), source }),
    }

    let Some(file_name) = path.file_name() else {
        return Err(io_err(path)(io::Error::other("path has no file name")));
    };
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent).map_err(io_err(parent))?;

    let nanos = SystemTime::now().duration_since(UNIX_EPOCH).unwrap_or_default().as_nanos();
    let tmp_path = parent.join(format!(".strata.tmp.{}.{}", file_name.to_string_lossy(), nanos));

    let mut file = fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&tmp_path)
        .map_err(io_err(&tmp_path))?;

    let written = file.write_all(contents).and_then(|()| {
        if durability == WriteDurability::Durable {
            file.sync_all()
        } else {
            Ok(())
        }
    });
    drop(file);
    if let Err(source) = written {
        let _ = fs::remove_file(&tmp_path);
        return Err(StoreError::Io { path: tmp_path, source });
    }

    if let Err(source) = rename_overwrite(&tmp_path, path) {
        let _ = fs::remove_file(&tmp_path);
        return Err(StoreError::Io { path: path.to_path_buf(), source });
    }

    if durability == WriteDurability::Durable {
        #[cfg(unix)]
        {
            let dir = fs::File::open(parent).map_err(io_err(parent))?;
            dir.sync_all().map_err(io_err(parent))?;
        }
    }

    Ok(())
}
