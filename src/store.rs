//! store.rs — in-memory report collection with one-JSON-file-per-report
//! persistence.
//!
//! The collection is shared mutable state behind a `Mutex` because the axum
//! host serves requests concurrently. Reports are never deleted within a
//! running process. Startup seeds the collection from the reports directory;
//! malformed files are skipped and logged, never fatal.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing::{info, warn};
use uuid::Uuid;

use crate::report::{DashboardSummary, EmergencyReport};

#[derive(Debug)]
pub struct ReportStore {
    inner: Mutex<Vec<EmergencyReport>>,
    dir: PathBuf,
}

impl ReportStore {
    /// Empty store persisting into `dir`. The directory is created lazily on
    /// the first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            inner: Mutex::new(Vec::new()),
            dir: dir.into(),
        }
    }

    /// Seed the in-memory collection from every `*.json` file in the reports
    /// directory. Returns the number of reports loaded. A missing directory
    /// is an empty store, not an error.
    pub fn load_from_dir(&self) -> usize {
        let entries = match fs::read_dir(&self.dir) {
            Ok(e) => e,
            Err(_) => return 0,
        };

        let mut loaded = Vec::new();
        for entry in entries.flatten() {
            let path = entry.path();
            if path.extension().and_then(|s| s.to_str()) != Some("json") {
                continue;
            }
            match read_report(&path) {
                Ok(report) => loaded.push(report),
                Err(e) => {
                    warn!(file = %path.display(), error = %e, "skipping malformed report file");
                }
            }
        }

        let n = loaded.len();
        let mut v = self.inner.lock().expect("report store mutex poisoned");
        v.extend(loaded);
        info!(count = n, dir = %self.dir.display(), "loaded persisted reports");
        n
    }

    /// Append a processed report to the in-memory collection, re-stamping it
    /// with the arrival time. Returns the stamped report so callers persist
    /// exactly what the dashboard will show. Reports seeded from disk bypass
    /// this and keep their persisted timestamps.
    pub fn add(&self, mut report: EmergencyReport) -> EmergencyReport {
        report.timestamp = chrono::Utc::now();
        let mut v = self.inner.lock().expect("report store mutex poisoned");
        v.push(report.clone());
        report
    }

    /// Durably write one report as a pretty-printed JSON file with a unique
    /// name. Returns the report id (the filename's uuid).
    pub fn persist(&self, report: &EmergencyReport) -> Result<String> {
        fs::create_dir_all(&self.dir)
            .with_context(|| format!("creating reports dir {}", self.dir.display()))?;

        let id = Uuid::new_v4().to_string();
        let path = self.dir.join(format!("emergency_{id}.json"));
        let json = serde_json::to_string_pretty(report).context("encoding report")?;
        fs::write(&path, json).with_context(|| format!("writing {}", path.display()))?;
        Ok(id)
    }

    /// Recompute the dashboard summary with a single full pass. O(n) per
    /// call; no caching, so counts can never go stale.
    pub fn summary(&self) -> DashboardSummary {
        let v = self.inner.lock().expect("report store mutex poisoned");
        DashboardSummary::compute(&v)
    }

    /// Newest-first view of the last `n` reports. Stable sort: timestamp
    /// ties keep the original insertion order.
    pub fn recent(&self, n: usize) -> Vec<EmergencyReport> {
        let v = self.inner.lock().expect("report store mutex poisoned");
        let mut all: Vec<EmergencyReport> = v.clone();
        all.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        all.truncate(n);
        all
    }

    pub fn len(&self) -> usize {
        self.inner.lock().expect("report store mutex poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn read_report(path: &Path) -> Result<EmergencyReport> {
    let s = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let report = serde_json::from_str(&s).with_context(|| format!("parsing {}", path.display()))?;
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::severity::Severity;
    use crate::taxonomy::Category;
    use chrono::{TimeZone, Utc};

    fn report_at(ts_secs: i64, text: &str) -> EmergencyReport {
        EmergencyReport {
            original_text: text.into(),
            summary: text.into(),
            emergency_type: Category::General,
            location: "Location not specified".into(),
            severity: Severity::Medium,
            recommended_actions: vec!["Assess situation".into()],
            timestamp: Utc.timestamp_opt(ts_secs, 0).unwrap(),
            caller_number: None,
            call_sid: None,
        }
    }

    /// Insert without re-stamping, as the disk loader does.
    fn seed(store: &ReportStore, r: EmergencyReport) {
        store
            .inner
            .lock()
            .expect("report store mutex poisoned")
            .push(r);
    }

    #[test]
    fn recent_returns_newest_first() {
        let store = ReportStore::new("unused");
        let r1 = report_at(100, "first");
        let r2 = report_at(200, "second");
        seed(&store, r1.clone());
        seed(&store, r2.clone());

        let recent = store.recent(10);
        assert_eq!(recent, vec![r2, r1]);
    }

    #[test]
    fn recent_ties_keep_insertion_order() {
        let store = ReportStore::new("unused");
        let a = report_at(100, "a");
        let b = report_at(100, "b");
        seed(&store, a.clone());
        seed(&store, b.clone());

        let recent = store.recent(10);
        assert_eq!(recent, vec![a, b]);
    }

    #[test]
    fn recent_truncates_to_n() {
        let store = ReportStore::new("unused");
        for i in 0..5 {
            seed(&store, report_at(i, "r"));
        }
        assert_eq!(store.recent(3).len(), 3);
        assert_eq!(store.recent(3)[0].timestamp.timestamp(), 4);
    }

    #[test]
    fn add_stamps_the_arrival_time() {
        let store = ReportStore::new("unused");
        let before = Utc::now();
        let stamped = store.add(report_at(0, "x"));
        assert!(stamped.timestamp >= before);
        assert_eq!(store.recent(1), vec![stamped]);
    }

    #[test]
    fn summary_total_tracks_adds() {
        let store = ReportStore::new("unused");
        assert_eq!(store.summary().total, 0);
        store.add(report_at(1, "x"));
        store.add(report_at(2, "y"));
        assert_eq!(store.summary().total, 2);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn persist_and_reload_roundtrip() {
        let tmp = tempfile::tempdir().unwrap();
        let store = ReportStore::new(tmp.path());
        let r = store.add(report_at(42, "fire at Westlands"));
        let id = store.persist(&r).unwrap();
        assert_eq!(id.len(), 36); // uuid v4

        let fresh = ReportStore::new(tmp.path());
        assert_eq!(fresh.load_from_dir(), 1);
        assert_eq!(fresh.recent(1), vec![r]);
    }

    #[test]
    fn malformed_files_are_skipped() {
        let tmp = tempfile::tempdir().unwrap();
        let store = ReportStore::new(tmp.path());
        let r = report_at(7, "ok");
        store.persist(&r).unwrap();
        fs::write(tmp.path().join("emergency_broken.json"), "{ not json").unwrap();
        fs::write(tmp.path().join("notes.txt"), "ignored").unwrap();

        let fresh = ReportStore::new(tmp.path());
        assert_eq!(fresh.load_from_dir(), 1);
        assert_eq!(fresh.summary().total, 1);
    }

    #[test]
    fn missing_directory_loads_nothing() {
        let store = ReportStore::new("/definitely/missing/dir");
        assert_eq!(store.load_from_dir(), 0);
        assert!(store.is_empty());
    }
}
