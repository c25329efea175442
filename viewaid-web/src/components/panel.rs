use crate::components::panel_button::PanelButton;
use viewaid_core::Setting;
use yew::prelude::*;

/// Horizontal distance the container is shifted while closed. Matches the
/// panel width plus its padding and border, so only the toggle button stays
/// on screen.
const CLOSED_OFFSET_PX: u32 = 222;

const PANEL_STYLE: &str = "background-color: #ffffff; border-radius: 0 0 0 5px; \
    border: 2px solid #1e232f; border-right: none; box-shadow: 0 0 10px rgba(0,0,0,0.1); \
    width: 200px; display: flex; flex-direction: column; gap: 10px; padding: 10px;";

const TOGGLE_STYLE: &str = "background-color: #1e232f; border: none; color: white; \
    padding: 10px; border-radius: 5px 0 0 5px; cursor: pointer; display: flex; \
    align-items: center; justify-content: center; width: 48px; height: 48px; \
    position: absolute; right: 222px; top: 0; transition: transform 0.3s ease-in-out;";

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    #[prop_or_default]
    pub on_increase: Callback<MouseEvent>,
    #[prop_or_default]
    pub on_decrease: Callback<MouseEvent>,
    #[prop_or_default]
    pub on_reset: Callback<MouseEvent>,
    #[prop_or_default]
    pub on_toggle: Callback<Setting>,
}

/// The slide-out panel and its always-visible toggle affordance.
///
/// Purely presentational: every gesture is forwarded through the callbacks
/// in [`Props`], one store operation per button. The open/closed state is
/// UI-only and never reaches the accessibility state.
#[function_component(AccessibilityPanel)]
pub fn accessibility_panel(p: &Props) -> Html {
    let is_open = use_state(|| false);
    let on_toggle_panel = {
        let is_open = is_open.clone();
        Callback::from(move |_: MouseEvent| is_open.set(!*is_open))
    };

    let offset = if *is_open { 0 } else { CLOSED_OFFSET_PX };
    let container_style = format!(
        "position: fixed; top: 100px; right: 0px; z-index: 9999; \
         font-family: Arial, sans-serif; display: flex; align-items: flex-start; \
         transition: transform 0.3s ease-in-out; transform: translateX({offset}px);"
    );

    html! {
        <div id="viewaid-container" style={container_style}>
            <div style={PANEL_STYLE}>
                <PanelButton label="Increase Text Size" onclick={p.on_increase.clone()} />
                <PanelButton label="Decrease Text Size" onclick={p.on_decrease.clone()} />
                <PanelButton label="Reset text size" onclick={p.on_reset.clone()} />
                { for Setting::ALL.iter().map(|setting| {
                    let setting = *setting;
                    let on_toggle = p.on_toggle.clone();
                    let onclick = Callback::from(move |_: MouseEvent| on_toggle.emit(setting));
                    html! { <PanelButton label={setting.label()} {onclick} /> }
                }) }
            </div>
            <button
                aria-label="Toggle accessibility options"
                style={TOGGLE_STYLE}
                onclick={on_toggle_panel}
            >
                { accessibility_icon() }
            </button>
        </div>
    }
}

fn accessibility_icon() -> Html {
    html! {
        <svg xmlns="http://www.w3.org/2000/svg" width="64" height="64" viewBox="0 0 512 512" aria-hidden="true">
            <path fill="currentColor" d="M256 112a56 56 0 1 1 56-56a56.06 56.06 0 0 1-56 56"/>
            <path fill="currentColor" d="m432 112.8l-.45.12l-.42.13c-1 .28-2 .58-3 .89c-18.61 5.46-108.93 30.92-172.56 30.92c-59.13 0-141.28-22-167.56-29.47a74 74 0 0 0-8-2.58c-19-5-32 14.3-32 31.94c0 17.47 15.7 25.79 31.55 31.76v.28l95.22 29.74c9.73 3.73 12.33 7.54 13.6 10.84c4.13 10.59.83 31.56-.34 38.88l-5.8 45l-32.19 176.19q-.15.72-.27 1.47l-.23 1.27c-2.32 16.15 9.54 31.82 32 31.82c19.6 0 28.25-13.53 32-31.94s28-157.57 42-157.57s42.84 157.57 42.84 157.57c3.75 18.41 12.4 31.94 32 31.94c22.52 0 34.38-15.74 32-31.94a57 57 0 0 0-.76-4.06L329 301.27l-5.79-45c-4.19-26.21-.82-34.87.32-36.9a1 1 0 0 0 .08-.15c1.08-2 6-6.48 17.48-10.79l89.28-31.21a17 17 0 0 0 1.62-.52c16-6 32-14.3 32-31.93S451 107.81 432 112.8"/>
        </svg>
    }
}
