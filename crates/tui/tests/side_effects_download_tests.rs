//! Documentation download side effect handler tests.

mod common;

use common::*;
use docgen_client::Tier;

fn download(repo_name: &str, tier: Tier, content: &str) -> Action {
    Action::DownloadDocumentation {
        repo_name: repo_name.to_string(),
        tier,
        content: content.to_string(),
    }
}

#[tokio::test]
async fn test_download_writes_raw_markdown() {
    let mut harness = SideEffectsTestHarness::new().await;
    let content = "# Express for Beginners\n\n```bash\nnpm install express\n```\n";

    let actions = harness
        .handle_and_collect(download("express", Tier::Beginner, content), 2)
        .await;

    let expected = harness.output_dir().join("express-beginner-docs.md");
    match &actions[..] {
        [Action::DocumentationDownloaded(Ok(path))] => assert_eq!(path, &expected),
        other => panic!("unexpected actions: {:?}", other),
    }
    assert_eq!(std::fs::read_to_string(&expected).unwrap(), content);
}

#[tokio::test]
async fn test_download_overwrites_existing_file() {
    let mut harness = SideEffectsTestHarness::new().await;

    harness
        .handle_and_collect(download("vscode", Tier::Advanced, "old"), 2)
        .await;
    harness
        .handle_and_collect(download("vscode", Tier::Advanced, "new"), 2)
        .await;

    let path = harness.output_dir().join("vscode-advanced-docs.md");
    assert_eq!(std::fs::read_to_string(path).unwrap(), "new");
}

#[tokio::test]
async fn test_download_each_tier_gets_its_own_file() {
    let mut harness = SideEffectsTestHarness::new().await;

    for tier in Tier::ALL {
        harness
            .handle_and_collect(download("axios", tier, tier.label()), 2)
            .await;
    }

    for tier in Tier::ALL {
        let path = harness
            .output_dir()
            .join(format!("axios-{}-docs.md", tier.as_str()));
        assert_eq!(std::fs::read_to_string(path).unwrap(), tier.label());
    }
}

#[tokio::test]
async fn test_download_failure_is_reported() {
    let mut harness = SideEffectsTestHarness::new().await;
    // A regular file where the output directory should be.
    std::fs::write(harness.output_dir(), "not a directory").unwrap();

    let actions = harness
        .handle_and_collect(download("express", Tier::Beginner, "# Docs"), 2)
        .await;

    assert!(
        matches!(&actions[..], [Action::DocumentationDownloaded(Err(_))]),
        "unexpected actions: {:?}",
        actions
    );
}
