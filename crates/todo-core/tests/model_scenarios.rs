//! End-to-end model scenarios: a model backed by an in-memory store,
//! driven through the controller the way the views drive it.

use proptest::prelude::*;
use todo_core::{
    dispatch, Dispatch, EditCommit, Filter, ItemEditor, MemoryStore, ModelConfig, Todo, TodoId,
    TodoModel, ViewEvent,
};

fn setup_model(store: &MemoryStore, fragment: &str) -> TodoModel<MemoryStore> {
    TodoModel::new(store.clone(), &ModelConfig::default(), fragment)
}

fn todo(id: u64, title: &str, completed: bool) -> Todo {
    Todo {
        id: TodoId(id),
        completed,
        title: title.to_string(),
    }
}

fn visible(model: &TodoModel<MemoryStore>) -> Vec<Todo> {
    model.filtered_todos().cloned().collect()
}

#[test]
fn test_filtered_views_after_completing_first_item() {
    let store = MemoryStore::new();
    let mut model = setup_model(&store, "");
    model.add("buy milk");
    model.add("feed cat");
    model.mark_complete(TodoId(0));

    model.navigate("#/active");
    assert_eq!(visible(&model), vec![todo(1, "feed cat", false)]);

    model.navigate("#/completed");
    assert_eq!(visible(&model), vec![todo(0, "buy milk", true)]);

    model.navigate("#/");
    assert_eq!(visible(&model).len(), 2);
}

#[test]
fn test_filter_follows_fragment_changes() {
    let store = MemoryStore::new();
    let mut model = setup_model(&store, "");
    model.add("a");
    model.add("b");
    model.mark_complete(TodoId(1));

    let steps = [
        ("#/active", Filter::Active, 1),
        ("#/completed", Filter::Completed, 1),
        ("", Filter::All, 2),
    ];
    for (fragment, filter, shown) in steps {
        assert_eq!(model.navigate(fragment), filter);
        assert_eq!(model.filtered_todos().count(), shown);
    }
}

#[test]
fn test_reload_restores_list() {
    let store = MemoryStore::new();
    let mut model = setup_model(&store, "");
    model.add("buy some cheese");
    model.add("feed the cat");
    model.add("book a doctors appointment");
    model.mark_complete(TodoId(0));
    model.update(&todo_core::TodoPatch::title(TodoId(2), "book a dentist"));

    let reloaded = setup_model(&store, "");

    assert_eq!(reloaded.todos(), model.todos());
}

#[test]
fn test_reload_from_corrupt_storage_starts_empty() {
    for raw in ["", "{", "{\"id\":1}", "\"todos\"", "17"] {
        let store = MemoryStore::with_entry("todos", raw);
        let model = setup_model(&store, "");
        assert!(!model.has_todos(), "expected empty list for {raw:?}");
    }
}

#[test]
fn test_toggle_all_round_trip() {
    let store = MemoryStore::new();
    let mut model = setup_model(&store, "");
    assert!(!model.is_all_complete());

    for title in ["a", "b", "c"] {
        model.add(title);
    }
    model.mark_all_complete();
    assert!(model.is_all_complete());

    model.mark_all_incomplete();
    assert!(model.todos().iter().all(|t| !t.completed));
    assert!(!model.is_all_complete());
}

#[test]
fn test_empty_edit_deletes_item() {
    let store = MemoryStore::new();
    let mut model = setup_model(&store, "");
    model.add("buy milk");
    model.add("feed cat");
    let before = model.todo_count();

    let mut editor = ItemEditor::new();
    let target = model.get(TodoId(1)).cloned().unwrap();
    editor.open(&target);
    let commit = editor.commit("").unwrap();
    dispatch(&mut model, ViewEvent::Edit(commit));

    assert_eq!(model.todo_count(), before - 1);
    assert_eq!(model.todos(), &[todo(0, "buy milk", false)]);
    assert_eq!(setup_model(&store, "").todo_count(), before - 1);
}

#[test]
fn test_cancelled_edit_changes_nothing() {
    let store = MemoryStore::new();
    let mut model = setup_model(&store, "");
    model.add("feed the cat");

    let mut editor = ItemEditor::new();
    let target = model.todos()[0].clone();
    editor.open(&target);
    editor.close();

    assert_eq!(editor.commit("foo"), None);
    assert_eq!(model.todos()[0].title, "feed the cat");
}

#[test]
fn test_add_box_flow() {
    let store = MemoryStore::new();
    let mut model = setup_model(&store, "");

    let result = dispatch(&mut model, ViewEvent::Add("  x  ".to_string()));

    assert_eq!(result, Dispatch::ClearInput);
    assert_eq!(model.todos(), &[todo(0, "x", false)]);
}

#[test]
fn test_commit_after_clear_completed() {
    let store = MemoryStore::new();
    let mut model = setup_model(&store, "");
    model.add("a");
    model.add("b");
    model.mark_complete(TodoId(0));
    model.delete_completed();
    let id = model.add("c");

    let commit = EditCommit {
        id: TodoId(1),
        title: "b2".to_string(),
    };
    dispatch(&mut model, ViewEvent::Edit(commit));

    assert_eq!(model.get(TodoId(1)).map(|t| t.title.as_str()), Some("b2"));
    assert_eq!(model.get(id).map(|t| t.title.as_str()), Some("c"));
}

proptest! {
    #[test]
    fn prop_add_preserves_count_and_order(titles in prop::collection::vec("[a-z]{1,12}", 0..20)) {
        let store = MemoryStore::new();
        let mut model = setup_model(&store, "");
        for title in &titles {
            model.add(title.clone());
        }

        prop_assert_eq!(model.todo_count(), titles.len());
        let stored: Vec<_> = model.todos().iter().map(|t| t.title.clone()).collect();
        prop_assert_eq!(stored, titles);
    }

    #[test]
    fn prop_delete_completed_keeps_active_in_order(flags in prop::collection::vec(any::<bool>(), 0..20)) {
        let store = MemoryStore::new();
        let mut model = setup_model(&store, "");
        for (i, completed) in flags.iter().enumerate() {
            let id = model.add(format!("todo {i}"));
            if *completed {
                model.mark_complete(id);
            }
        }
        let expected: Vec<Todo> = model.todos().iter().filter(|t| !t.completed).cloned().collect();

        let removed = model.delete_completed();

        prop_assert_eq!(removed, flags.iter().filter(|c| **c).count());
        prop_assert_eq!(model.todos(), expected.as_slice());
        prop_assert!(!model.has_completed());
    }

    #[test]
    fn prop_ids_stay_unique(ops in prop::collection::vec(0u8..3, 1..40)) {
        let store = MemoryStore::new();
        let mut model = setup_model(&store, "");
        for op in ops {
            match op {
                0 | 1 => {
                    model.add("x");
                }
                _ => {
                    if let Some(first) = model.todos().first().map(|t| t.id) {
                        model.delete(first);
                    }
                }
            }
        }
        let mut ids: Vec<_> = model.todos().iter().map(|t| t.id).collect();
        let total = ids.len();
        ids.sort();
        ids.dedup();
        prop_assert_eq!(ids.len(), total);
    }
}
