use yew::prelude::*;

#[derive(Clone, PartialEq)]
pub enum CardVariant {
    Mystical,
    Grimoire,
    Scroll,
}

#[derive(Properties, PartialEq)]
pub struct SectionCardProps {
    #[prop_or(CardVariant::Mystical)]
    pub variant: CardVariant,
    #[prop_or(true)]
    pub hover: bool,
    #[prop_or_default]
    pub class: Classes,
    pub children: Children,
}

#[function_component(SectionCard)]
pub fn section_card(props: &SectionCardProps) -> Html {
    let variant_class = match props.variant {
        CardVariant::Mystical => "card-mystical",
        CardVariant::Grimoire => "card-grimoire",
        CardVariant::Scroll => "card-scroll",
    };

    html! {
        <div class={classes!(variant_class, props.hover.then_some("card-hover"), props.class.clone())}>
            <div class="card-content">
                { for props.children.iter() }
            </div>
        </div>
    }
}
