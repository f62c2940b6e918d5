use std::sync::{Mutex, Once};
use std::thread::{self, ThreadId};

use log::{Level, LevelFilter, Log, Metadata, Record};

use crate::matrix::{Matrix, MatrixError};

/// Keeps every record with the thread that emitted it; tests run in parallel.
struct CaptureLogger {
    records: Mutex<Vec<(ThreadId, Level, String)>>,
}

impl Log for CaptureLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= Level::Warn
    }

    fn log(&self, record: &Record<'_>) {
        if self.enabled(record.metadata()) {
            self.records.lock().unwrap().push((
                thread::current().id(),
                record.level(),
                record.args().to_string(),
            ));
        }
    }

    fn flush(&self) {}
}

static LOGGER: CaptureLogger = CaptureLogger {
    records: Mutex::new(Vec::new()),
};
static INSTALL: Once = Once::new();

fn warnings_during(f: impl FnOnce()) -> Vec<String> {
    INSTALL.call_once(|| {
        log::set_logger(&LOGGER).expect("no other logger in unit tests");
        log::set_max_level(LevelFilter::Warn);
    });
    let me = thread::current().id();
    let before = LOGGER.records.lock().unwrap().len();
    f();
    LOGGER.records.lock().unwrap()[before..]
        .iter()
        .filter(|(thread, level, _)| *thread == me && *level == Level::Warn)
        .map(|(_, _, message)| message.clone())
        .collect()
}

#[test]
fn singular_inverse_emits_warning() {
    let a = Matrix::from_rows(&[[1.0, 2.0], [2.0, 4.0]]).unwrap();
    let warnings = warnings_during(|| {
        assert_eq!(a.inverse(), Err(MatrixError::Singular));
    });
    assert_eq!(warnings, vec!["inverse: the determinant of the matrix is zero"]);
}

#[test]
fn dimension_mismatch_emits_warning() {
    let warnings = warnings_during(|| {
        assert!(Matrix::zeros(2, 3).multiply(&Matrix::zeros(2, 3)).is_err());
        assert!(Matrix::zeros(2, 2).add(&Matrix::zeros(3, 2)).is_err());
    });
    assert_eq!(warnings.len(), 2);
    assert!(warnings[0].starts_with("multiply: dimension mismatch between 2x3 and 2x3"));
    assert!(warnings[1].starts_with("add: dimension mismatch"));
}

#[test]
fn non_square_emits_warning() {
    let warnings = warnings_during(|| {
        assert!(Matrix::zeros(2, 3).determinant().is_err());
    });
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].contains("must be square, got 2x3"));
}

#[test]
fn successful_operations_stay_quiet() {
    let a = Matrix::from_rows(&[[4.0, 7.0], [2.0, 6.0]]).unwrap();
    let warnings = warnings_during(|| {
        assert!(a.inverse().is_ok());
        assert!(a.multiply(&a).is_ok());
    });
    assert!(warnings.is_empty());
}
