use console::style;
use std::path::{Path, PathBuf};
use tracing::error;

use crate::s3::UploadError;

/// One file to transmit. Built during traversal, consumed by [`run`],
/// never persisted.
#[derive(Debug, Clone)]
pub struct UploadTask {
    pub local_path: PathBuf,
    pub key: String,
    pub content_type: String,
}

/// Outcome of a single task, consumed only for logging.
#[derive(Debug)]
pub enum UploadOutcome {
    Uploaded,
    Failed(UploadError),
}

/// The one storage operation this tool needs from a client.
pub trait ObjectStore {
    fn bucket(&self) -> &str;

    async fn put_file(
        &self,
        key: &str,
        local_path: &Path,
        content_type: &str,
    ) -> Result<(), UploadError>;
}

/// Drive all tasks sequentially, printing one line per file. A failed
/// task is logged and skipped; the batch always runs to the end.
pub async fn run<S: ObjectStore>(store: &S, tasks: impl IntoIterator<Item = UploadTask>) {
    for task in tasks {
        let outcome = process_task(store, &task).await;
        report(store.bucket(), &task, &outcome);
    }
}

async fn process_task<S: ObjectStore>(store: &S, task: &UploadTask) -> UploadOutcome {
    match store
        .put_file(&task.key, &task.local_path, &task.content_type)
        .await
    {
        Ok(()) => UploadOutcome::Uploaded,
        Err(e) => UploadOutcome::Failed(e),
    }
}

fn report(bucket: &str, task: &UploadTask, outcome: &UploadOutcome) {
    match outcome {
        UploadOutcome::Uploaded => {
            println!(
                "{} {} -> s3://{}/{}",
                style("✓").green(),
                task.local_path.display(),
                bucket,
                task.key
            );
        }
        UploadOutcome::Failed(e) => {
            error!("Upload failed for {}: {}", task.local_path.display(), e);
            println!(
                "{} {} - {}",
                style("✗").red(),
                style(task.local_path.display()).red(),
                style(e).red()
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::sync::Mutex;

    /// Records every attempted key; fails the one it was told to fail.
    struct FlakyStore {
        fail_key: Option<String>,
        calls: Mutex<Vec<String>>,
    }

    impl FlakyStore {
        fn new(fail_key: Option<&str>) -> Self {
            Self {
                fail_key: fail_key.map(String::from),
                calls: Mutex::new(Vec::new()),
            }
        }
    }

    impl ObjectStore for FlakyStore {
        fn bucket(&self) -> &str {
            "test-bucket"
        }

        async fn put_file(
            &self,
            key: &str,
            _local_path: &Path,
            _content_type: &str,
        ) -> Result<(), UploadError> {
            self.calls.lock().unwrap().push(key.to_string());

            if self.fail_key.as_deref() == Some(key) {
                return Err(UploadError::Api {
                    message: "simulated transport error".to_string(),
                });
            }
            Ok(())
        }
    }

    fn task(key: &str) -> UploadTask {
        UploadTask {
            local_path: PathBuf::from(key),
            key: key.to_string(),
            content_type: "application/octet-stream".to_string(),
        }
    }

    #[tokio::test]
    async fn test_every_task_is_attempted() {
        let store = FlakyStore::new(None);
        let tasks = vec![task("a/app.js"), task("a/style.css"), task("b.png")];

        run(&store, tasks).await;

        let calls: HashSet<String> = store.calls.lock().unwrap().iter().cloned().collect();
        let expected: HashSet<String> = ["a/app.js", "a/style.css", "b.png"]
            .into_iter()
            .map(String::from)
            .collect();
        assert_eq!(calls, expected);
    }

    #[tokio::test]
    async fn test_failure_does_not_abort_the_batch() {
        let store = FlakyStore::new(Some("a/style.css"));
        let tasks = vec![task("a/app.js"), task("a/style.css"), task("b.png")];

        run(&store, tasks).await;

        // The failed file is attempted and everything after it still runs
        assert_eq!(store.calls.lock().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_exactly_one_failure_outcome() {
        let store = FlakyStore::new(Some("b.png"));
        let tasks = vec![task("a/app.js"), task("b.png"), task("c.css")];

        let mut failures = Vec::new();
        for t in &tasks {
            if let UploadOutcome::Failed(e) = process_task(&store, t).await {
                failures.push((t.key.clone(), e.to_string()));
            }
        }

        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].0, "b.png");
        assert!(failures[0].1.contains("simulated transport error"));
    }
}
