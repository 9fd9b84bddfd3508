//! Toolbar holding the select/deselect-all button and the selection count.
//!
//! # Design
//! - Label and count are fully prop-driven; the parent owns the toggle state.
//! - The button is `type="button"` so clicking it never submits the surrounding form.

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct BulkActionBarProps {
    pub button_id: AttrValue,
    pub select_label: AttrValue,
    pub selected_count: usize,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub on_toggle_all: Callback<MouseEvent>,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(BulkActionBar)]
pub(crate) fn bulk_action_bar(props: &BulkActionBarProps) -> Html {
    html! {
        <div class={classes!("bulk-actions", props.class.clone())}>
            <button
                id={props.button_id.clone()}
                type="button"
                class="btn btn-ghost"
                onclick={props.on_toggle_all.clone()}
            >
                {props.select_label.clone()}
            </button>
            <span class="muted">{format!("{} selected", props.selected_count)}</span>
            <div class="bulk-buttons">
                { for props.children.iter() }
            </div>
        </div>
    }
}
