use daybook_core::task::Task;
use uuid::Uuid;
use web_sys::{MouseEvent, PointerEvent};
use yew::{Callback, Html, Properties, classes, function_component, html, use_state};

/// Horizontal displacement past which releasing the pointer deletes the task.
const DELETE_DRAG_THRESHOLD_PX: f64 = 100.0;

#[derive(Properties, PartialEq)]
pub struct TodoItemProps {
    pub task: Task,
    pub on_toggle: Callback<Uuid>,
    pub on_delete: Callback<Uuid>,
    pub on_edit: Callback<Uuid>,
}

#[function_component(TodoItem)]
pub fn todo_item(props: &TodoItemProps) -> Html {
    let drag_origin = use_state(|| None::<f64>);
    let drag_dx = use_state(|| 0.0_f64);

    let id = props.task.id;

    let onpointerdown = {
        let drag_origin = drag_origin.clone();
        Callback::from(move |event: PointerEvent| {
            drag_origin.set(Some(f64::from(event.client_x())));
        })
    };

    let onpointermove = {
        let drag_origin = drag_origin.clone();
        let drag_dx = drag_dx.clone();
        Callback::from(move |event: PointerEvent| {
            if let Some(origin) = *drag_origin {
                drag_dx.set(f64::from(event.client_x()) - origin);
            }
        })
    };

    let onpointerup = {
        let drag_origin = drag_origin.clone();
        let drag_dx = drag_dx.clone();
        let on_delete = props.on_delete.clone();
        Callback::from(move |_: PointerEvent| {
            let past_threshold =
                drag_origin.is_some() && (*drag_dx).abs() >= DELETE_DRAG_THRESHOLD_PX;
            drag_origin.set(None);
            drag_dx.set(0.0);
            if past_threshold {
                tracing::debug!(%id, "drag-delete threshold crossed");
                on_delete.emit(id);
            }
        })
    };

    // Leaving or losing the pointer abandons the gesture without deleting.
    let reset_drag = {
        let drag_origin = drag_origin.clone();
        let drag_dx = drag_dx.clone();
        Callback::from(move |_: PointerEvent| {
            drag_origin.set(None);
            drag_dx.set(0.0);
        })
    };

    let on_toggle_click = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |event: MouseEvent| {
            event.stop_propagation();
            on_toggle.emit(id);
        })
    };

    let on_edit_click = {
        let on_edit = props.on_edit.clone();
        Callback::from(move |event: MouseEvent| {
            event.stop_propagation();
            on_edit.emit(id);
        })
    };

    let on_delete_click = {
        let on_delete = props.on_delete.clone();
        Callback::from(move |event: MouseEvent| {
            event.stop_propagation();
            on_delete.emit(id);
        })
    };

    let dx = if drag_origin.is_some() { *drag_dx } else { 0.0 };
    let armed = dx.abs() >= DELETE_DRAG_THRESHOLD_PX;
    let style = (dx != 0.0).then(|| format!("transform: translateX({dx}px);"));

    html! {
        <div
            class={classes!(
                "todo-item",
                props.task.completed.then_some("done"),
                armed.then_some("armed")
            )}
            style={style}
            {onpointerdown}
            {onpointermove}
            {onpointerup}
            onpointercancel={reset_drag.clone()}
            onpointerleave={reset_drag}
        >
            <button class="todo-toggle" onclick={on_toggle_click} title="Toggle complete">
                { if props.task.completed { "\u{2713}" } else { "" } }
            </button>
            <div class="todo-body">
                <div class="todo-title">{ &props.task.title }</div>
                {
                    if props.task.description.trim().is_empty() {
                        html! {}
                    } else {
                        html! { <div class="todo-desc">{ &props.task.description }</div> }
                    }
                }
            </div>
            <div class="todo-actions">
                <button class="icon-btn" onclick={on_edit_click} title="Edit">
                    { "\u{270e}" }
                </button>
                <button class="icon-btn delete" onclick={on_delete_click} title="Delete">
                    { "\u{2715}" }
                </button>
            </div>
        </div>
    }
}
