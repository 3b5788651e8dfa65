use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::QcError;
use crate::models::histogram1d::Histogram1D;
use crate::models::histogram2d::Histogram2D;
use crate::utils::get_dynamic_reader;

///
/// The payload of a monitor object: the actual histogram the QC task
/// produced.
///
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum QcObject {
    Hist1D(Histogram1D),
    Hist2D(Histogram2D),
}

///
/// A named wrapper around one QC payload, the unit of lookup inside a
/// collection.
///
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonitorObject {
    pub name: String,
    pub object: QcObject,
}

///
/// An ordered bag of monitor objects with lookup by exact name.
///
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MonitorCollection {
    pub objects: Vec<MonitorObject>,
}

impl MonitorCollection {
    pub fn find(&self, name: &str) -> Option<&MonitorObject> {
        self.objects.iter().find(|mo| mo.name == name)
    }

    pub fn add(&mut self, name: &str, object: QcObject) {
        self.objects.push(MonitorObject {
            name: name.to_string(),
            object,
        });
    }

    ///
    /// Typed accessor for a wrapped 1D histogram. Absence and a present
    /// object of the wrong shape are distinct failures.
    ///
    pub fn hist1d(&self, name: &str) -> Result<&Histogram1D, QcError> {
        match self.find(name) {
            None => Err(QcError::ObjectNotFound(name.to_string())),
            Some(mo) => match &mo.object {
                QcObject::Hist1D(hist) => Ok(hist),
                QcObject::Hist2D(_) => Err(QcError::TypeMismatch(name.to_string(), "a 1D histogram")),
            },
        }
    }

    /// Typed accessor for a wrapped 2D histogram.
    pub fn hist2d(&self, name: &str) -> Result<&Histogram2D, QcError> {
        match self.find(name) {
            None => Err(QcError::ObjectNotFound(name.to_string())),
            Some(mo) => match &mo.object {
                QcObject::Hist2D(hist) => Ok(hist),
                QcObject::Hist1D(_) => Err(QcError::TypeMismatch(name.to_string(), "a 2D histogram")),
            },
        }
    }
}

///
/// A file-backed store of monitor collections, keyed by a
/// detector/category path such as `"FT0/AgingLaser"`.
///
/// Archives are JSON documents, read through a gzip-transparent reader
/// so both `.json` and `.json.gz` work.
///
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QcArchive {
    pub collections: BTreeMap<String, MonitorCollection>,
}

impl QcArchive {
    pub fn from_file(path: &Path) -> Result<Self, QcError> {
        let reader = get_dynamic_reader(path)?;
        let archive = serde_json::from_reader(reader)?;
        Ok(archive)
    }

    pub fn to_file(&self, path: &Path) -> Result<(), QcError> {
        let file = File::create(path)
            .map_err(|_| QcError::FileWriteError(path.display().to_string()))?;
        let writer = BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    pub fn collection(&self, path: &str) -> Result<&MonitorCollection, QcError> {
        self.collections
            .get(path)
            .ok_or_else(|| QcError::CollectionNotFound(path.to_string()))
    }

    pub fn insert(&mut self, path: &str, collection: MonitorCollection) {
        self.collections.insert(path.to_string(), collection);
    }
}
