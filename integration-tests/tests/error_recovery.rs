//! Integration tests for failure handling.
//!
//! Covers malformed input, unreadable paths during preview, and writes that
//! fail part way through an apply.

use anyhow::Result;
use paster_kernel::host::{HostError, HostRequest, HostResponse, NotifyLevel, PasterHost};
use paster_kernel::parser::FormatError;
use paster_kernel::reconcile::ReconcileError;
use paster_kernel::vfs::PathPolicy;

mod common;
use common::{TestWorkspace, paste};

/// Malformed text is rejected before anything is read or written.
#[tokio::test]
async fn test_malformed_text_writes_nothing() -> Result<()> {
    let ws = TestWorkspace::new()?;

    let err = ws
        .host
        .update_files("File: a.txt\nnot content")
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        HostError::Format(FormatError::MissingContent { line: 2 })
    ));
    assert!(!ws.path("a.txt").exists());
    Ok(())
}

/// A path that names a directory aborts the whole preview.
#[tokio::test]
async fn test_preview_aborts_on_directory_path() -> Result<()> {
    let ws = TestWorkspace::new()?;
    std::fs::create_dir(ws.path("folder"))?;

    let text = paste(&[("ok.txt", "1"), ("folder", "2")]);
    let err = ws.host.preview_changes(&text).await.unwrap_err();

    match err {
        HostError::Reconcile(ReconcileError::Read { path, .. }) => assert_eq!(path, "folder"),
        other => panic!("unexpected error: {other:?}"),
    }
    Ok(())
}

/// A write failure stops the apply; earlier files stay written.
#[tokio::test]
async fn test_apply_stops_without_rollback() -> Result<()> {
    let ws = TestWorkspace::new()?;
    ws.seed("blocker", "i am a file")?;

    let text = paste(&[
        ("first.txt", "1"),
        ("blocker/child.txt", "2"),
        ("third.txt", "3"),
    ]);
    let err = ws.host.update_files(&text).await.unwrap_err();

    match err {
        HostError::Reconcile(ReconcileError::Write { ref path, .. }) => {
            assert_eq!(path, "blocker/child.txt");
        }
        ref other => panic!("unexpected error: {other:?}"),
    }
    assert!(err.to_string().contains("blocker/child.txt"));
    assert_eq!(ws.read("first.txt")?, "1");
    assert!(!ws.path("third.txt").exists());
    Ok(())
}

/// Failures reach the front end as error notifications with a prefix.
#[tokio::test]
async fn test_failures_become_notifications() -> Result<()> {
    let ws = TestWorkspace::new()?;
    ws.seed("blocker", "file")?;

    let response = ws
        .host
        .handle(HostRequest::UpdateFiles {
            text: paste(&[("blocker/x.txt", "x")]),
        })
        .await;
    match response {
        HostResponse::Notify { level, message } => {
            assert_eq!(level, NotifyLevel::Error);
            assert!(message.starts_with("Error updating files: "));
            assert!(message.contains("blocker/x.txt"));
        }
        other => panic!("unexpected response: {other:?}"),
    }
    Ok(())
}

/// Without a workspace, well-formed text reports the missing folder.
#[tokio::test]
async fn test_no_workspace_message() {
    let host = PasterHost::without_workspace();

    let response = host
        .handle(HostRequest::PreviewChanges {
            text: paste(&[("a.txt", "x")]),
        })
        .await;
    assert_eq!(
        response,
        HostResponse::error(
            "Error parsing for preview: You must have a folder open in your workspace."
        )
    );
}

/// The unrestricted policy lets a paste write next to the root.
#[tokio::test]
async fn test_unrestricted_policy_allows_parent_paths() -> Result<()> {
    let outer = tempfile::tempdir()?;
    let inner = outer.path().join("inner");
    std::fs::create_dir(&inner)?;

    let fs = paster_kernel::vfs::WorkspaceFs::open(Some(inner.as_path()), PathPolicy::unrestricted())?;
    let host = PasterHost::new(std::sync::Arc::new(fs), "inner");

    host.update_files(&paste(&[("../sibling.txt", "out")])).await?;
    assert_eq!(std::fs::read_to_string(outer.path().join("sibling.txt"))?, "out");
    Ok(())
}
