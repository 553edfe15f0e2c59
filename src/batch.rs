//! Sequential document -> post batch runner.
use crate::documents::Document;
use crate::generate::{generate_post, PostGenerator};
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Extension given to generated post files.
pub const POST_EXTENSION: &str = "txt";

/// Paths written by a completed batch, in processing order.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub written: Vec<PathBuf>,
}

/// Output path for a document stem.
pub fn post_path(output_dir: &Path, stem: &str) -> PathBuf {
    output_dir.join(format!("{stem}.{POST_EXTENSION}"))
}

/// Generate and persist one post per document, one at a time.
///
/// The first failure aborts the batch; documents after it are not sent to
/// the generator. The output directory is only created when there is at
/// least one document.
pub fn run_batch<G: PostGenerator + ?Sized>(
    documents: &[Document],
    generator: &G,
    output_dir: &Path,
) -> Result<BatchReport> {
    let mut report = BatchReport::default();
    if documents.is_empty() {
        return Ok(report);
    }

    fs::create_dir_all(output_dir)
        .with_context(|| format!("create {}", output_dir.display()))?;

    for document in documents {
        let post = generate_post(generator, &document.content)
            .with_context(|| format!("generate post for {}.md", document.stem))?;
        let dest = post_path(output_dir, &document.stem);
        fs::write(&dest, post.as_bytes()).with_context(|| format!("write {}", dest.display()))?;
        println!("{}.md -> {}", document.stem, dest.display());
        tracing::info!(stem = %document.stem, bytes = post.len(), "post written");
        report.written.push(dest);
    }
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;
    use std::cell::Cell;

    fn doc(stem: &str, content: &str) -> Document {
        Document {
            stem: stem.to_string(),
            content: content.to_string(),
        }
    }

    #[test]
    fn writes_one_post_per_document_named_by_stem() {
        let temp = tempfile::tempdir().expect("create temp dir");
        let out = temp.path().join("outputs");
        let docs = [doc("a", "Hello world"), doc("b", "Second post")];
        let generator = |_: &str, user: &str| -> Result<String> { Ok(format!("POST:{user}")) };

        let report = run_batch(&docs, &generator, &out).expect("run batch");

        assert_eq!(report.written, vec![out.join("a.txt"), out.join("b.txt")]);
        assert_eq!(
            fs::read_to_string(out.join("a.txt")).expect("read a"),
            "POST:Hello world"
        );
        assert_eq!(
            fs::read_to_string(out.join("b.txt")).expect("read b"),
            "POST:Second post"
        );
        assert_eq!(fs::read_dir(&out).expect("list outputs").count(), 2);
    }

    #[test]
    fn empty_batch_makes_no_calls_and_creates_nothing() {
        let temp = tempfile::tempdir().expect("create temp dir");
        let out = temp.path().join("outputs");
        let calls = Cell::new(0);
        let generator = |_: &str, _: &str| -> Result<String> {
            calls.set(calls.get() + 1);
            Ok("unused".to_string())
        };

        let report = run_batch(&[], &generator, &out).expect("run batch");

        assert!(report.written.is_empty());
        assert_eq!(calls.get(), 0);
        assert!(!out.exists());
    }

    #[test]
    fn empty_reply_stops_the_batch() {
        let temp = tempfile::tempdir().expect("create temp dir");
        let out = temp.path().join("outputs");
        let docs = [doc("a", "one"), doc("b", ""), doc("c", "three")];
        let calls = Cell::new(0);
        let generator = |_: &str, user: &str| -> Result<String> {
            calls.set(calls.get() + 1);
            Ok(user.to_string())
        };

        let err = run_batch(&docs, &generator, &out).unwrap_err();

        assert!(format!("{err:#}").contains("empty post"));
        assert!(format!("{err:#}").contains("b.md"));
        assert_eq!(calls.get(), 2);
        assert!(out.join("a.txt").exists());
        assert!(!out.join("b.txt").exists());
        assert!(!out.join("c.txt").exists());
    }

    #[test]
    fn backend_failure_propagates() {
        let temp = tempfile::tempdir().expect("create temp dir");
        let docs = [doc("only", "text")];
        let generator =
            |_: &str, _: &str| -> Result<String> { Err(anyhow!("503 from upstream")) };

        let err = run_batch(&docs, &generator, temp.path()).unwrap_err();
        assert!(format!("{err:#}").contains("503 from upstream"));
    }

    #[test]
    fn existing_output_is_overwritten() {
        let temp = tempfile::tempdir().expect("create temp dir");
        fs::write(temp.path().join("a.txt"), "stale").expect("seed stale output");
        let generator = |_: &str, _: &str| -> Result<String> { Ok("fresh".to_string()) };

        run_batch(&[doc("a", "x")], &generator, temp.path()).expect("run batch");
        assert_eq!(
            fs::read_to_string(temp.path().join("a.txt")).expect("read"),
            "fresh"
        );
    }
}
