use yew::prelude::*;

#[derive(Clone, PartialEq)]
pub enum MeshVariant {
    Light,
    Dark,
}

#[derive(Properties, PartialEq)]
pub struct MeshBackgroundProps {
    #[prop_or(MeshVariant::Light)]
    pub variant: MeshVariant,
    #[prop_or_default]
    pub class: Classes,
    pub children: Children,
}

#[function_component(MeshBackground)]
pub fn mesh_background(props: &MeshBackgroundProps) -> Html {
    let variant_class = match props.variant {
        MeshVariant::Light => "mesh-bg",
        MeshVariant::Dark => "mesh-bg-dark",
    };

    html! {
        <div class={classes!(variant_class, props.class.clone())}>
            { for props.children.iter() }
        </div>
    }
}
