use git_devtags::git::{MockTagStore, TagStore};
use git_devtags::prune::{execute_plan, plan_prune, PrunePlan};
use git_devtags::version::VersionKey;

fn tags(names: &[&str]) -> Vec<String> {
    names.iter().map(|t| t.to_string()).collect()
}

#[test]
fn prunes_only_dev_tags_of_old_lineages() {
    let store = MockTagStore::new(&[
        "1.0.0",
        "1.1.0",
        "1.2.0",
        "1.0.0-dev.1",
        "1.1.0-dev.1",
        "1.2.0-dev.1",
        "1.2.0-dev.2",
    ]);

    let all_tags = store.list_tags().unwrap();
    let plan = plan_prune(&all_tags, 2).unwrap();
    assert_eq!(plan.doomed, vec!["1.0.0-dev.1"]);

    execute_plan(&store, &plan, "origin").unwrap();

    assert_eq!(store.deleted_local(), vec!["1.0.0-dev.1"]);
    assert_eq!(
        store.deleted_remote(),
        vec![("origin".to_string(), "1.0.0-dev.1".to_string())]
    );
}

#[test]
fn deletes_locally_before_remotely_per_tag() {
    let store = MockTagStore::new(&["1.0.0", "2.0.0", "3.0.0", "1.0.0-dev.1", "1.0.0-dev.2"]);

    let all_tags = store.list_tags().unwrap();
    let plan = plan_prune(&all_tags, 2).unwrap();
    execute_plan(&store, &plan, "origin").unwrap();

    assert_eq!(store.deleted_local(), vec!["1.0.0-dev.1", "1.0.0-dev.2"]);
    assert_eq!(store.deleted_remote().len(), 2);
}

#[test]
fn aborts_on_first_failed_deletion() {
    let store = MockTagStore::new(&["1.0.0", "2.0.0", "3.0.0", "1.0.0-dev.1", "1.0.0-dev.2"])
        .fail_on_delete("1.0.0-dev.2");

    let all_tags = store.list_tags().unwrap();
    let plan = plan_prune(&all_tags, 2).unwrap();
    let err = execute_plan(&store, &plan, "origin").unwrap_err();

    // The failing subprocess status propagates; the first tag stays
    // deleted, nothing after the failure is attempted.
    assert_eq!(err.exit_status(), 128);
    assert_eq!(store.deleted_local(), vec!["1.0.0-dev.1"]);
    assert_eq!(store.deleted_remote().len(), 1);
}

#[test]
fn no_official_releases_means_nothing_to_do() {
    let store = MockTagStore::new(&["1.0.0-dev.1", "1.0.0-dev.2", "nightly"]);
    let all_tags = store.list_tags().unwrap();
    assert_eq!(plan_prune(&all_tags, 2), None);
}

#[test]
fn custom_keep_count_protects_more_lineages() {
    let all_tags = tags(&[
        "1.0.0",
        "1.1.0",
        "1.2.0",
        "1.3.0",
        "1.0.0-dev.1",
        "1.1.0-dev.1",
        "1.2.0-dev.1",
    ]);

    let plan = plan_prune(&all_tags, 3).unwrap();
    assert_eq!(
        plan.protected,
        vec![
            VersionKey::new(1, 1, 0),
            VersionKey::new(1, 2, 0),
            VersionKey::new(1, 3, 0),
        ]
    );
    assert_eq!(plan.doomed, vec!["1.0.0-dev.1"]);
}

#[test]
fn empty_plan_executes_without_touching_store() {
    let store = MockTagStore::new(&["1.0.0", "2.0.0"]);
    let plan = PrunePlan {
        official: vec![VersionKey::new(1, 0, 0), VersionKey::new(2, 0, 0)],
        protected: vec![VersionKey::new(1, 0, 0), VersionKey::new(2, 0, 0)],
        doomed: vec![],
    };

    execute_plan(&store, &plan, "origin").unwrap();
    assert!(store.deleted_local().is_empty());
    assert!(store.deleted_remote().is_empty());
}
