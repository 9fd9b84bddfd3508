//! Named checkbox input that submits with its form.

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct CheckboxProps {
    pub name: AttrValue,
    pub value: AttrValue,
    #[prop_or_default]
    pub label: Option<AttrValue>,
    #[prop_or_default]
    pub checked: bool,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub onchange: Callback<bool>,
}

#[function_component(Checkbox)]
pub(crate) fn checkbox(props: &CheckboxProps) -> Html {
    let onchange = {
        let onchange = props.onchange.clone();
        Callback::from(move |event: Event| {
            if let Some(input) = event.target_dyn_into::<web_sys::HtmlInputElement>() {
                onchange.emit(input.checked());
            }
        })
    };

    html! {
        <label class="label cursor-pointer gap-2">
            <input
                type="checkbox"
                class={classes!("checkbox", props.class.clone())}
                name={props.name.clone()}
                value={props.value.clone()}
                checked={props.checked}
                onchange={onchange}
            />
            {props.label.clone().map(|text| html! { <span>{text}</span> }).unwrap_or_default()}
        </label>
    }
}
