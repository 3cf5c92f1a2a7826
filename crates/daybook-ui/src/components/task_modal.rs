use web_sys::{HtmlInputElement, KeyboardEvent, MouseEvent};
use yew::{Callback, Html, Properties, TargetCast, UseStateHandle, function_component, html};

use crate::app::{ModalMode, ModalState};

#[derive(Properties, PartialEq)]
pub struct TaskModalProps {
    pub modal_state: UseStateHandle<Option<ModalState>>,
    pub on_submit: Callback<ModalState>,
    pub on_close: Callback<MouseEvent>,
}

/// The add/edit overlay. Renders nothing while closed; a click on the
/// backdrop closes it, a click inside does not.
#[function_component(TaskModal)]
pub fn task_modal(props: &TaskModalProps) -> Html {
    let modal_state = props.modal_state.clone();
    let Some(state) = (*modal_state).clone() else {
        return html! {};
    };

    let on_save_click = {
        let on_submit = props.on_submit.clone();
        let submit_state = state.clone();
        Callback::from(move |_: MouseEvent| on_submit.emit(submit_state.clone()))
    };

    let on_title_input = {
        let modal_state = modal_state.clone();
        Callback::from(move |event: web_sys::InputEvent| {
            let input: HtmlInputElement = event.target_unchecked_into();
            if let Some(mut current) = (*modal_state).clone() {
                current.draft_title = input.value();
                current.error = None;
                modal_state.set(Some(current));
            }
        })
    };

    let on_desc_input = {
        let modal_state = modal_state.clone();
        Callback::from(move |event: web_sys::InputEvent| {
            let input: HtmlInputElement = event.target_unchecked_into();
            if let Some(mut current) = (*modal_state).clone() {
                current.draft_desc = input.value();
                current.error = None;
                modal_state.set(Some(current));
            }
        })
    };

    let on_enter_submit = {
        let modal_state = modal_state.clone();
        let on_submit = props.on_submit.clone();
        Callback::from(move |event: KeyboardEvent| {
            if event.key() == "Enter"
                && let Some(current) = (*modal_state).clone()
            {
                on_submit.emit(current);
            }
        })
    };

    let swallow_click = Callback::from(|event: MouseEvent| event.stop_propagation());

    html! {
        <div class="modal-backdrop" onclick={props.on_close.clone()}>
            <div class="modal" onclick={swallow_click}>
                <div class="modal-header">
                    <span>
                        {
                            match state.mode {
                                ModalMode::Add => "Add Task",
                                ModalMode::Edit(_) => "Edit Task",
                            }
                        }
                    </span>
                    <button class="icon-btn" onclick={props.on_close.clone()} title="Close (Esc)">
                        { "\u{2715}" }
                    </button>
                </div>
                <div class="modal-content">
                    {
                        if let Some(error) = state.error.clone() {
                            html! { <div class="form-error">{ error }</div> }
                        } else {
                            html! {}
                        }
                    }
                    <div class="field">
                        <label>{ "Title" }</label>
                        <input
                            value={state.draft_title.clone()}
                            placeholder="What needs to be done?"
                            autofocus=true
                            oninput={on_title_input}
                            onkeydown={on_enter_submit}
                        />
                    </div>
                    <div class="field">
                        <label>{ "Description (optional)" }</label>
                        <input
                            value={state.draft_desc.clone()}
                            placeholder="Add a description"
                            oninput={on_desc_input}
                        />
                    </div>
                </div>
                <div class="modal-footer">
                    <button class="btn" onclick={props.on_close.clone()}>{ "Cancel" }</button>
                    <button class="btn primary" onclick={on_save_click}>{ "Save" }</button>
                </div>
            </div>
        </div>
    }
}
