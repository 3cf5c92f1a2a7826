use chrono::{Datelike, Duration, NaiveDate, Weekday};
use daybook_core::day::week_of;
use daybook_core::filter::count_for_day;
use daybook_core::task::Task;
use web_sys::MouseEvent;
use yew::{Callback, Html, Properties, classes, function_component, html};

#[derive(Properties, PartialEq)]
pub struct WeekStripProps {
    pub selected: NaiveDate,
    pub today: NaiveDate,
    pub todos: Vec<Task>,
    pub on_select: Callback<NaiveDate>,
}

/// Seven-day picker for the week containing the selected day, Sunday first,
/// with chevrons to step a whole week at a time.
#[function_component(WeekStrip)]
pub fn week_strip(props: &WeekStripProps) -> Html {
    let days = week_of(props.selected);

    let shift_week = |delta: i64| {
        let on_select = props.on_select.clone();
        let selected = props.selected;
        Callback::from(move |_: MouseEvent| {
            if let Some(next) = selected.checked_add_signed(Duration::days(delta)) {
                on_select.emit(next);
            }
        })
    };

    html! {
        <div class="week-strip">
            <button class="week-nav" onclick={shift_week(-7)} title="Previous week">
                { "\u{2039}" }
            </button>
            {
                for days.iter().copied().map(|date| {
                    let is_selected = date == props.selected;
                    let is_past = date < props.today;
                    let count = count_for_day(&props.todos, date);
                    let on_select = props.on_select.clone();

                    html! {
                        <button
                            class={classes!(
                                "week-day",
                                is_selected.then_some("selected"),
                                is_past.then_some("past")
                            )}
                            onclick={Callback::from(move |_: MouseEvent| on_select.emit(date))}
                        >
                            <span class="week-day-letter">{ weekday_letter(date.weekday()) }</span>
                            <span class="week-day-number">{ date.day() }</span>
                            {
                                if count > 0 {
                                    html! { <span class="week-day-count">{ count }</span> }
                                } else {
                                    html! {}
                                }
                            }
                        </button>
                    }
                })
            }
            <button class="week-nav" onclick={shift_week(7)} title="Next week">
                { "\u{203a}" }
            </button>
        </div>
    }
}

fn weekday_letter(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "M",
        Weekday::Tue => "T",
        Weekday::Wed => "W",
        Weekday::Thu => "T",
        Weekday::Fri => "F",
        Weekday::Sat => "S",
        Weekday::Sun => "S",
    }
}
