use yew::prelude::*;

const BUTTON_BG: &str = "#f8f9fa";
const BUTTON_BG_HOVER: &str = "#e9ecef";

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub label: AttrValue,
    #[prop_or_default]
    pub onclick: Callback<MouseEvent>,
}

/// One action button in the panel.
///
/// The hover shading lives here and is purely cosmetic; clicking is the only
/// gesture with any effect.
#[function_component(PanelButton)]
pub fn panel_button(p: &Props) -> Html {
    let hovered = use_state(|| false);
    let onmouseenter = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(true))
    };
    let onmouseleave = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(false))
    };

    let background = if *hovered { BUTTON_BG_HOVER } else { BUTTON_BG };
    let style = format!(
        "padding: 8px 12px; background-color: {background}; border: 1px solid #dee2e6; \
         border-radius: 5px; cursor: pointer; transition: background-color 0.3s; width: 100%;"
    );
    let onclick = p.onclick.clone();
    html! {
        <button {style} {onclick} {onmouseenter} {onmouseleave}>{ p.label.clone() }</button>
    }
}
