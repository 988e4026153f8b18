use yew::prelude::*;

use crate::contact::intent::use_contact_intent;

fn cta_class() -> Classes {
    classes!("cta-button")
}

#[derive(Properties, PartialEq)]
pub struct ContactButtonProps {
    /// Pre-filled message; `None` keeps whatever the modal last used.
    #[prop_or_default]
    pub message: Option<String>,
    #[prop_or_else(cta_class)]
    pub class: Classes,
    pub children: Children,
}

#[function_component(ContactButton)]
pub fn contact_button(props: &ContactButtonProps) -> Html {
    let intent = use_contact_intent();
    let onclick = {
        let message = props.message.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            intent.open(message.clone());
        })
    };

    html! {
        <button type="button" class={props.class.clone()} {onclick}>
            { for props.children.iter() }
        </button>
    }
}
