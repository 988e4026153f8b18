pub mod about;
pub mod hero;
pub mod mission;
pub mod partners;
pub mod services;
pub mod testimonials;

use yew::prelude::*;

use crate::hooks::use_reveal;

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    pub id: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    pub children: Children,
}

/// A landing `<section>` that fades in the first time it scrolls into view.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let revealed = use_reveal(node.clone());

    html! {
        <section
            id={props.id.clone()}
            ref={node}
            class={classes!("reveal", props.class.clone(), revealed.then_some("visible"))}
        >
            { for props.children.iter() }
        </section>
    }
}
