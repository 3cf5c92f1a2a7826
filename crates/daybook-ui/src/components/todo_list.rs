use daybook_core::task::Task;
use uuid::Uuid;
use yew::{Callback, Html, Properties, function_component, html};

use super::TodoItem;

#[derive(Properties, PartialEq)]
pub struct TodoListProps {
    pub todos: Vec<Task>,
    pub empty_label: String,
    pub on_toggle: Callback<Uuid>,
    pub on_delete: Callback<Uuid>,
    pub on_edit: Callback<Uuid>,
}

#[function_component(TodoList)]
pub fn todo_list(props: &TodoListProps) -> Html {
    if props.todos.is_empty() {
        return html! {
            <div class="todo-empty">{ &props.empty_label }</div>
        };
    }

    html! {
        <div class="todo-list">
            {
                for props.todos.iter().cloned().map(|task| html! {
                    <TodoItem
                        key={task.id.to_string()}
                        task={task.clone()}
                        on_toggle={props.on_toggle.clone()}
                        on_delete={props.on_delete.clone()}
                        on_edit={props.on_edit.clone()}
                    />
                })
            }
        </div>
    }
}
