mod common;

use assert2::{check, let_assert};
use common::{Corpus, TempWorkspace, corpus};
use docrank::{BuildError, CloseError, DocumentHandle, DocumentStore, OpenError};
use rstest::rstest;

/// Test: a path held by a live handle cannot be opened again.
#[rstest]
fn open_locked_path_fails(corpus: Corpus) {
    let _held = DocumentHandle::open(&corpus.paths[0]).expect("first open");

    let_assert!(Err(OpenError::AlreadyLocked { path }) = DocumentHandle::open(&corpus.paths[0]));
    check!(path == corpus.paths[0]);
}

/// Test: a store holds every lock until teardown.
#[rstest]
fn store_holds_locks_for_its_lifetime(corpus: Corpus) {
    let store = DocumentStore::build(&corpus.paths).expect("build should succeed");

    for path in &corpus.paths {
        let_assert!(Err(OpenError::AlreadyLocked { .. }) = DocumentHandle::open(path));
    }

    let report = store.teardown();
    check!(report.is_clean());
    check!(report.closed == corpus.paths.len());

    for path in &corpus.paths {
        let_assert!(Ok(_) = DocumentHandle::open(path));
    }
}

/// Test: dropping a store without teardown still releases every lock.
#[rstest]
fn dropped_store_releases_locks(corpus: Corpus) {
    {
        let _store = DocumentStore::build(&corpus.paths).expect("build should succeed");
    }
    let_assert!(Ok(_) = DocumentStore::build(&corpus.paths));
}

/// Test: a missing path at position N releases paths 1..N-1.
#[test]
fn failed_build_releases_opened_handles() {
    let workspace = TempWorkspace::new();
    let first = workspace.create_file("one.txt", "one");
    let second = workspace.create_file("two.txt", "two");
    let missing = workspace.path().join("missing.txt");
    let last = workspace.create_file("four.txt", "four");

    let paths = vec![first.clone(), second.clone(), missing.clone(), last.clone()];
    let_assert!(Err(error) = DocumentStore::build(&paths));
    let_assert!(
        BuildError::Open {
            position: 2,
            total: 4,
            source: OpenError::NotFound { .. },
        } = &error
    );
    check!(error.path() == Some(missing.as_path()));
    check!(error.to_string().contains("missing.txt"));

    // nothing leaked: each earlier document can be locked again
    for path in [&first, &second, &last] {
        let_assert!(Ok(_) = DocumentHandle::open(path));
    }
}

/// Test: contention on a later path aborts the build and rolls back.
#[test]
fn contended_build_rolls_back() {
    let workspace = TempWorkspace::new();
    let first = workspace.create_file("one.txt", "one");
    let locked = workspace.create_file("two.txt", "two");
    let _holder = DocumentHandle::open(&locked).expect("holder takes the lock");

    let_assert!(
        Err(BuildError::Open {
            source: OpenError::AlreadyLocked { .. },
            ..
        }) = DocumentStore::build([&first, &locked])
    );
    let_assert!(Ok(_) = DocumentHandle::open(&first));
}

/// Test: a directory in the path list is rejected as not a file.
#[test]
fn directory_path_rejected() {
    let workspace = TempWorkspace::new();
    let file = workspace.create_file("one.txt", "one");
    let dir = workspace.create_dir("nested");

    let_assert!(
        Err(BuildError::Open {
            position: 1,
            source: OpenError::NotAFile { .. },
            ..
        }) = DocumentStore::build([&file, &dir])
    );
}

/// Test: double close surfaces as an error instead of being ignored.
#[rstest]
fn double_close_detected(corpus: Corpus) {
    let mut handle = DocumentHandle::open(&corpus.paths[1]).expect("open");
    let_assert!(Ok(()) = handle.close());
    let_assert!(Err(CloseError::AlreadyClosed) = handle.close());
}

/// Test: reset makes consecutive reads identical.
#[rstest]
fn reset_rereads_full_content(corpus: Corpus) {
    let mut handle = DocumentHandle::open(&corpus.paths[0]).expect("open");

    handle.reset_to_start().expect("reset");
    let first = handle.read_all().expect("first read");
    handle.reset_to_start().expect("reset");
    let second = handle.read_all().expect("second read");

    check!(first == "some text to find and rank.");
    check!(first == second);
}

/// Test: teardown keeps going after a failed close and reports it.
#[rstest]
fn teardown_aggregates_failures(corpus: Corpus) {
    let mut store = DocumentStore::build(&corpus.paths).expect("build should succeed");
    for handle in store.documents_mut().iter_mut().take(2) {
        handle.close().expect("early close");
    }

    let report = store.teardown();
    check!(report.closed == 1);
    check!(report.failures.len() == 2);
    check!(report.to_string().contains("2 failed"));
}
