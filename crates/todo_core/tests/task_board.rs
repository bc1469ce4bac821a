use todo_core::view::board::{
    ACTIVE_SECTION_TITLE, ADD_BUTTON_LABEL, APP_TITLE, COMPLETED_SECTION_TITLE, INPUT_PLACEHOLDER,
    NO_ACTIVE_MESSAGE, NO_COMPLETED_MESSAGE,
};
use todo_core::{TaskBoard, TaskListModel};

#[test]
fn empty_list_shows_only_active_placeholder() {
    let model = TaskListModel::new();
    let board = TaskBoard::from_tasks(model.tasks());

    assert_eq!(board.active.title, ACTIVE_SECTION_TITLE);
    assert_eq!(board.active.empty_message, Some(NO_ACTIVE_MESSAGE));
    assert_eq!(board.completed.title, COMPLETED_SECTION_TITLE);
    assert_eq!(board.completed.empty_message, None);
    assert_eq!(board.total(), 0);
}

#[test]
fn open_tasks_show_completed_placeholder() {
    let mut model = TaskListModel::new();
    model.add("Buy milk");

    let board = TaskBoard::from_tasks(model.tasks());
    assert_eq!(board.active.empty_message, None);
    assert_eq!(board.active.tasks.len(), 1);
    assert_eq!(board.completed.empty_message, Some(NO_COMPLETED_MESSAGE));
}

#[test]
fn sections_keep_sequence_order() {
    let mut model = TaskListModel::new();
    let a = model.add("a").unwrap();
    let b = model.add("b").unwrap();
    let c = model.add("c").unwrap();
    let d = model.add("d").unwrap();
    model.toggle(c);
    model.toggle(a);

    let board = TaskBoard::from_tasks(model.tasks());
    let active: Vec<_> = board.active.tasks.iter().map(|task| task.id).collect();
    let completed: Vec<_> = board.completed.tasks.iter().map(|task| task.id).collect();
    assert_eq!(active, vec![b, d]);
    assert_eq!(completed, vec![a, c]);
    assert_eq!(board.total(), 4);
}

#[test]
fn all_done_shows_active_placeholder_only() {
    let mut model = TaskListModel::new();
    let id = model.add("done already").unwrap();
    model.toggle(id);

    let board = TaskBoard::from_tasks(model.tasks());
    assert_eq!(board.active.empty_message, Some(NO_ACTIVE_MESSAGE));
    assert_eq!(board.completed.empty_message, None);
}

#[test]
fn board_serialization_uses_expected_wire_fields() {
    let mut model = TaskListModel::new();
    let milk = model.add("Buy milk").unwrap();
    model.add("Walk dog");
    model.toggle(milk);

    let json = serde_json::to_value(TaskBoard::from_tasks(model.tasks())).unwrap();
    assert_eq!(json["active"]["title"], "Items");
    assert_eq!(json["active"]["empty_message"], serde_json::Value::Null);
    assert_eq!(json["active"]["tasks"][0]["text"], "Walk dog");
    assert_eq!(json["active"]["tasks"][0]["is_done"], false);
    assert_eq!(json["completed"]["title"], "Completed Items");
    assert_eq!(json["completed"]["tasks"][0]["id"], milk.get());
    assert_eq!(json["completed"]["tasks"][0]["is_done"], true);
}

#[test]
fn screen_labels_are_fixed() {
    assert_eq!(APP_TITLE, "To-Do App");
    assert_eq!(INPUT_PLACEHOLDER, "Add task");
    assert_eq!(ADD_BUTTON_LABEL, "Add");
}
