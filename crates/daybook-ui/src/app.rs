use chrono::{Local, NaiveDate};
use daybook_core::filter::tasks_for_day;
use daybook_core::store::TodoStore;
use daybook_core::task::TaskPatch;
use gloo::events::EventListener;
use uuid::Uuid;
use wasm_bindgen::JsCast;
use web_sys::{KeyboardEvent, MouseEvent};
use yew::{Callback, Html, classes, function_component, html, use_effect_with, use_state};

use crate::components::{TaskModal, TodoList, WeekStrip};
use crate::storage;

/// Draft state of the task overlay while it is open.
#[derive(Clone, PartialEq)]
pub struct ModalState {
    pub mode: ModalMode,
    pub draft_title: String,
    pub draft_desc: String,
    pub error: Option<String>,
}

#[derive(Clone, Copy, PartialEq)]
pub enum ModalMode {
    Add,
    Edit(Uuid),
}

impl ModalState {
    pub fn add() -> Self {
        Self {
            mode: ModalMode::Add,
            draft_title: String::new(),
            draft_desc: String::new(),
            error: None,
        }
    }

    pub fn edit(task: &daybook_core::task::Task) -> Self {
        Self {
            mode: ModalMode::Edit(task.id),
            draft_title: task.title.clone(),
            draft_desc: task.description.clone(),
            error: None,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ThemeMode {
    Day,
    Night,
}

impl ThemeMode {
    pub fn as_class(self) -> &'static str {
        match self {
            Self::Day => "theme-day",
            Self::Night => "theme-night",
        }
    }

    pub fn next(self) -> Self {
        match self {
            Self::Day => Self::Night,
            Self::Night => Self::Day,
        }
    }

    pub fn storage_value(self) -> &'static str {
        match self {
            Self::Day => "day",
            Self::Night => "night",
        }
    }

    pub fn toggle_label(self) -> &'static str {
        match self {
            Self::Day => "Night",
            Self::Night => "Day",
        }
    }
}

#[function_component(App)]
pub fn app() -> Html {
    let store = use_state(storage::load_store);
    let theme = use_state(storage::load_theme_mode);
    let selected_day = use_state(|| Local::now().date_naive());
    let modal_state = use_state(|| None::<ModalState>);

    // Mirror every snapshot change into the persistence slot.
    use_effect_with((*store).clone(), |snapshot: &TodoStore| {
        storage::save_store(snapshot);
        tracing::debug!(count = snapshot.len(), "persisted todos");
        || ()
    });

    use_effect_with(*theme, |theme: &ThemeMode| {
        storage::save_theme_mode(*theme);
        || ()
    });

    // Global shortcuts: `n` opens the add overlay, Escape closes it. The
    // listener is re-registered when the overlay opens or closes so the two
    // keys never fight over the same state.
    {
        let modal_state = modal_state.clone();
        use_effect_with((*modal_state).is_some(), move |modal_open| {
            let modal_open = *modal_open;
            let listener = EventListener::new(&gloo::utils::document(), "keydown", move |event| {
                let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                    return;
                };
                if modal_open {
                    if event.key() == "Escape" {
                        tracing::debug!("closing task overlay via Escape");
                        modal_state.set(None);
                    }
                } else if event.key() == "n"
                    && !event.ctrl_key()
                    && !event.meta_key()
                    && !event.alt_key()
                {
                    tracing::debug!("opening add overlay via shortcut");
                    modal_state.set(Some(ModalState::add()));
                }
            });
            move || drop(listener)
        });
    }

    let on_select_day = {
        let selected_day = selected_day.clone();
        Callback::from(move |day: NaiveDate| {
            tracing::debug!(day = %day, "selected day");
            selected_day.set(day);
        })
    };

    let on_toggle = {
        let store = store.clone();
        Callback::from(move |id: Uuid| {
            let mut next = (*store).clone();
            next.toggle(id);
            store.set(next);
        })
    };

    let on_delete = {
        let store = store.clone();
        Callback::from(move |id: Uuid| {
            let mut next = (*store).clone();
            next.delete(id);
            store.set(next);
        })
    };

    let on_edit_request = {
        let store = store.clone();
        let modal_state = modal_state.clone();
        Callback::from(move |id: Uuid| {
            if let Some(task) = (*store).get(id) {
                modal_state.set(Some(ModalState::edit(task)));
            }
        })
    };

    let open_add_modal = {
        let modal_state = modal_state.clone();
        Callback::from(move |_: MouseEvent| {
            modal_state.set(Some(ModalState::add()));
        })
    };

    let on_modal_close = {
        let modal_state = modal_state.clone();
        Callback::from(move |_: MouseEvent| {
            modal_state.set(None);
        })
    };

    let on_modal_submit = {
        let store = store.clone();
        let modal_state = modal_state.clone();
        let selected_day = selected_day.clone();
        Callback::from(move |state: ModalState| {
            let title = state.draft_title.trim().to_string();
            if title.is_empty() {
                // Overlay stays open; the store never sees the draft.
                let mut next = state;
                next.error = Some("Title is required.".to_string());
                modal_state.set(Some(next));
                return;
            }

            let description = state.draft_desc.trim().to_string();
            let mut next_store = (*store).clone();
            match state.mode {
                ModalMode::Add => {
                    next_store.add(&title, *selected_day, &description);
                }
                ModalMode::Edit(id) => {
                    next_store.update(
                        id,
                        TaskPatch {
                            title: Some(title),
                            description: Some(description),
                            completed: None,
                        },
                    );
                }
            }
            store.set(next_store);
            modal_state.set(None);
        })
    };

    let on_toggle_theme = {
        let theme = theme.clone();
        Callback::from(move |_: MouseEvent| {
            theme.set(theme.next());
        })
    };

    let today = Local::now().date_naive();
    let visible = tasks_for_day((*store).todos(), *selected_day);

    let day_label = if *selected_day == today {
        "today".to_string()
    } else {
        (*selected_day).format("%B %-d").to_string()
    };
    let subtitle = if *selected_day == today {
        "Today".to_string()
    } else {
        (*selected_day).format("%B %-d").to_string()
    };
    let empty_label = format!("No tasks for {day_label}. Add one below!");

    html! {
        <main class={classes!("app-shell", theme.as_class())}>
            <button class="theme-toggle" onclick={on_toggle_theme}>
                { theme.toggle_label() }
            </button>
            <div class="day-view">
                <WeekStrip
                    selected={*selected_day}
                    today={today}
                    todos={(*store).todos().to_vec()}
                    on_select={on_select_day}
                />
                <header class="day-heading">
                    <div class="day-subtitle">{ subtitle }</div>
                    <h1 class="day-title">{ (*selected_day).format("%A").to_string() }</h1>
                </header>
                <TodoList
                    todos={visible}
                    empty_label={empty_label}
                    on_toggle={on_toggle}
                    on_delete={on_delete}
                    on_edit={on_edit_request}
                />
            </div>
            <button class="add-fab" onclick={open_add_modal} title="Add task (n)">
                { "+" }
            </button>
            <TaskModal
                modal_state={modal_state.clone()}
                on_submit={on_modal_submit}
                on_close={on_modal_close}
            />
        </main>
    }
}
