//! Picker form and wasm entry point.

use crate::components::bulk_action_bar::BulkActionBar;
use crate::components::checkbox::Checkbox;
use crate::core::catalog::{COMPANIES, selected_count, selected_tickers};
use crate::core::config::ToggleConfig;
use crate::core::dates::{DateRange, END_FIELD, START_FIELD};
use crate::core::toggle::{ToggleLabel, toggle_all};
use crate::dom;
use gloo::console;
use web_sys::Element;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct PortfolioFormProps {
    pub button_id: AttrValue,
    pub group_name: AttrValue,
}

impl From<&ToggleConfig> for PortfolioFormProps {
    fn from(config: &ToggleConfig) -> Self {
        Self {
            button_id: AttrValue::from(config.button_id.clone()),
            group_name: AttrValue::from(config.group_name.clone()),
        }
    }
}

#[function_component(PortfolioForm)]
pub(crate) fn portfolio_form(props: &PortfolioFormProps) -> Html {
    let checked = use_state(|| vec![false; COMPANIES.len()]);
    let label = use_state(ToggleLabel::initial);
    let start = use_state(String::new);
    let end = use_state(String::new);

    let on_toggle_all = {
        let checked = checked.clone();
        let label = label.clone();
        Callback::from(move |_event: MouseEvent| {
            let mut next = (*checked).clone();
            let outcome = toggle_all(&mut next);
            checked.set(next);
            label.set(outcome.label());
        })
    };

    let on_check = {
        let checked = checked.clone();
        Callback::from(move |(index, value): (usize, bool)| {
            let mut next = (*checked).clone();
            if let Some(slot) = next.get_mut(index) {
                *slot = value;
            }
            checked.set(next);
        })
    };

    let date_input = |field: &'static str, state: &UseStateHandle<String>| {
        let oninput = {
            let state = state.clone();
            Callback::from(move |event: InputEvent| {
                if let Some(input) = event.target_dyn_into::<web_sys::HtmlInputElement>() {
                    state.set(input.value());
                }
            })
        };
        html! {
            <label class="label gap-2">
                <span>{field}</span>
                <input type="date" class="input" id={field} name={field} value={(**state).clone()} {oninput} />
            </label>
        }
    };

    let count = selected_count(&checked);
    let tickers = selected_tickers(COMPANIES, &checked);
    let ticker_summary = if tickers.is_empty() {
        Html::default()
    } else {
        html! { <p class="muted selected-tickers">{tickers.join(", ")}</p> }
    };
    let range = DateRange::parse(&start, &end);
    let range_error = match &range {
        Err(err) if !start.is_empty() && !end.is_empty() => {
            html! { <p class="text-error">{err.to_string()}</p> }
        }
        _ => Html::default(),
    };
    let can_submit = range.is_ok() && count > 0;

    html! {
        <form method="post" action="/" class="portfolio-form">
            <BulkActionBar
                button_id={props.button_id.clone()}
                select_label={AttrValue::from(label.as_str())}
                selected_count={count}
                {on_toggle_all}
            >
                <button type="submit" class="btn btn-primary" disabled={!can_submit}>
                    {"Optimize"}
                </button>
            </BulkActionBar>
            { ticker_summary }
            <div class="company-grid">
                { for COMPANIES.iter().enumerate().map(|(index, company)| {
                    let on_check = on_check.clone();
                    html! {
                        <Checkbox
                            key={company.ticker}
                            name={props.group_name.clone()}
                            value={company.ticker}
                            label={AttrValue::from(company.name)}
                            checked={checked.get(index).copied().unwrap_or(false)}
                            onchange={Callback::from(move |value: bool| on_check.emit((index, value)))}
                        />
                    }
                }) }
            </div>
            <div class="date-range">
                { date_input(START_FIELD, &start) }
                { date_input(END_FIELD, &end) }
                { range_error }
            </div>
        </form>
    }
}

fn mount(root: Element, config: &ToggleConfig) {
    yew::Renderer::<PortfolioForm>::with_root_and_props(root, PortfolioFormProps::from(config))
        .render();
}

/// Entrypoint invoked by Trunk for wasm32 builds.
///
/// Mounts the picker form when the configured mount element exists; otherwise binds the
/// toggle to checkboxes already rendered by the server.
pub fn start() {
    console_error_panic_hook::set_once();
    let document = match dom::document() {
        Ok(document) => document,
        Err(err) => {
            console::error!("picker start failed", err.to_string());
            return;
        }
    };
    dom::when_ready(&document, |document| {
        let config = dom::page_config(&document);
        if let Some(root) = document.get_element_by_id(&config.mount_id) {
            mount(root, &config);
            return;
        }
        match dom::attach(&document, &config) {
            Ok(binding) => binding.forget(),
            Err(err) => console::error!("select-all toggle attach failed", err.to_string()),
        }
    });
}
