use yew::prelude::*;

#[derive(Clone, PartialEq)]
pub enum ButtonVariant {
    Primary,
    Secondary,
    Gold,
}

#[derive(Properties, PartialEq)]
pub struct MagicalButtonProps {
    #[prop_or(ButtonVariant::Primary)]
    pub variant: ButtonVariant,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub onclick: Callback<MouseEvent>,
    pub children: Children,
}

#[function_component(MagicalButton)]
pub fn magical_button(props: &MagicalButtonProps) -> Html {
    let variant_class = match props.variant {
        ButtonVariant::Primary => "btn-mystical-primary",
        ButtonVariant::Secondary => "btn-mystical-secondary",
        ButtonVariant::Gold => "btn-mystical-gold",
    };

    html! {
        <button
            class={classes!("btn-mystical", variant_class, props.class.clone())}
            onclick={props.onclick.clone()}
        >
            { for props.children.iter() }
        </button>
    }
}
