//! Yew building blocks for the picker form.
pub(crate) mod bulk_action_bar;
pub(crate) mod checkbox;
