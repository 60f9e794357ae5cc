use std::fs;
use std::path::Path;

use journal_tidy::{index, rewrite, Settings};
use tempfile::TempDir;

fn fixture(name: &str) -> String {
    fs::read_to_string(format!("tests/fixtures/{}.md", name)).unwrap()
}

fn put(root: &Path, rel: &str, text: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, text).unwrap();
}

fn journal() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path();
    put(root, "Months/Jan/daily_standup.md", &fixture("daily_standup"));
    put(root, "Notes/complete.md", &fixture("complete"));
    put(root, "top.md", "Just a short line");
    put(root, "README.md", "old index\n");
    put(root, ".git/ignored.md", "not a document");
    fs::create_dir_all(root.join("scripts")).unwrap();
    tmp
}

#[test]
fn dry_run_writes_nothing() {
    let tmp = journal();
    let root = tmp.path();
    let before = fs::read_to_string(root.join("Months/Jan/daily_standup.md")).unwrap();

    let run = index::run(&Settings::new(root)).unwrap();

    assert!(!run.applied);
    assert_eq!(run.total, 3);
    let changed: Vec<String> = run
        .changed
        .iter()
        .map(|p| journal_tidy::corpus::display_rel(p))
        .collect();
    assert_eq!(changed, vec!["Months/Jan/daily_standup.md", "top.md"]);
    assert_eq!(
        fs::read_to_string(root.join("Months/Jan/daily_standup.md")).unwrap(),
        before
    );
    assert_eq!(fs::read_to_string(root.join("README.md")).unwrap(), "old index\n");
    assert!(!root.join("md_backups").exists());
}

#[test]
fn apply_backs_up_then_rewrites() {
    let tmp = journal();
    let root = tmp.path();
    let original = fixture("daily_standup");

    let run = index::run(&Settings::new(root).with_apply(true)).unwrap();
    assert_eq!(run.changed.len(), 2);

    let backup = fs::read_to_string(root.join("md_backups/Months/Jan/daily_standup.md")).unwrap();
    assert_eq!(backup, original);

    let live = fs::read_to_string(root.join("Months/Jan/daily_standup.md")).unwrap();
    assert!(live.starts_with("# Daily Standup\n\n## Summary\n\n- Morning sync with the platform team.\n"));
    assert!(live.contains(
        "## Highlights\n\n\
         - **The release deadline moved to Friday.**\n\
         - **We agreed to meet again after lunch.**\n\
         - **Longer notes follow here.**\n\n\
         Tags: #journal\n\n"
    ));
    assert!(live.ends_with(&original));

    assert!(!root.join("md_backups/Notes/complete.md").exists());
    assert_eq!(
        fs::read_to_string(root.join("Notes/complete.md")).unwrap(),
        fixture("complete")
    );

    assert_eq!(
        fs::read_to_string(root.join("md_backups/README.md.bak")).unwrap(),
        "old index\n"
    );
    let readme = fs::read_to_string(root.join("README.md")).unwrap();
    assert_eq!(readme, run.index_text);
    assert!(readme.contains("- **Total Markdown files:** 3\n- **Files updated in this run:** 2\n"));
    assert!(readme.contains("- **Months/** — 1 markdown files\n- **Notes/** — 1 markdown files\n- **scripts/** — 0 markdown files\n"));
    assert!(!readme.contains(".git/"));
    assert!(readme.contains(
        "- **The release deadline moved to Friday.** — [Months/Jan/daily_standup.md](Months/Jan/daily_standup.md)\n"
    ));
    assert!(readme.contains("- **Ship the beta.** — [Notes/complete.md](Notes/complete.md)\n"));
}

#[test]
fn second_apply_changes_nothing() {
    let tmp = journal();
    let settings = Settings::new(tmp.path()).with_apply(true);
    index::run(&settings).unwrap();
    let first = fs::read_to_string(tmp.path().join("top.md")).unwrap();

    let again = index::run(&settings).unwrap();
    assert!(again.changed.is_empty());
    assert_eq!(fs::read_to_string(tmp.path().join("top.md")).unwrap(), first);
    assert!(again.index_text.contains("- **Files updated in this run:** 0\n"));
}

#[test]
fn index_never_rewritten_as_document() {
    let tmp = journal();
    let run = index::run(&Settings::new(tmp.path()).with_apply(true)).unwrap();
    let readme = fs::read_to_string(tmp.path().join("README.md")).unwrap();
    assert!(readme.starts_with("# Journal — Organized\n"));
    assert!(!readme.contains("\n## Summary\n"));
    assert!(run.changed.iter().all(|p| p != Path::new("README.md")));
}

#[test]
fn highlights_capped_at_ten() {
    let tmp = TempDir::new().unwrap();
    for i in 0..6 {
        put(
            tmp.path(),
            &format!("day{:02}.md", i),
            "Big event. Team meeting. Launch prep.",
        );
    }
    let run = index::run(&Settings::new(tmp.path())).unwrap();
    let featured = run
        .index_text
        .split("## Featured highlights\n\n")
        .nth(1)
        .unwrap()
        .split("\n\n")
        .next()
        .unwrap();
    assert_eq!(featured.lines().count(), 10);
    assert!(featured.lines().last().unwrap().contains("day03.md"));
}

#[test]
fn empty_corpus_still_produces_index() {
    let tmp = TempDir::new().unwrap();
    let run = index::run(&Settings::new(tmp.path()).with_apply(true)).unwrap();
    assert_eq!(run.total, 0);
    let readme = fs::read_to_string(tmp.path().join("README.md")).unwrap();
    assert!(readme.contains("- **Total Markdown files:** 0\n"));
    assert!(readme.contains("- No highlights found yet. Run the formatter to extract them.\n"));
}

#[test]
fn rewrite_is_pure_and_idempotent_on_fixtures() {
    for name in ["daily_standup", "complete", "lint_sample"] {
        let text = fixture(name);
        let path = Path::new("x").join(format!("{}.md", name));
        let once = rewrite(&path, &text);
        let twice = rewrite(&path, &once.text);
        assert_eq!(once.text, twice.text, "{}", name);
        assert!(!twice.changed, "{}", name);
    }
}
