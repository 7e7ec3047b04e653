use stylist::yew::styled_component;
use yew::prelude::*;

pub const PRIMARY: &str = "#C5A059";
pub const PRIMARY_HOVER: &str = "#B48F4A";
pub const DARK: &str = "#0B1120";

#[derive(Clone, Copy, PartialEq, Default)]
pub enum Variant {
    #[default]
    Primary,
    Secondary,
}

#[derive(Properties, PartialEq)]
pub struct CtaButtonProps {
    pub children: Children,
    #[prop_or_default]
    pub onclick: Callback<MouseEvent>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub variant: Variant,
}

#[styled_component(CtaButton)]
pub fn cta_button(props: &CtaButtonProps) -> Html {
    let (background, color, hover) = match props.variant {
        Variant::Primary => (PRIMARY, "#ffffff", PRIMARY_HOVER),
        Variant::Secondary => ("#ffffff", DARK, "#f3f4f6"),
    };

    let style = css!(
        r#"
        display: flex;
        align-items: center;
        justify-content: center;
        gap: 0.5rem;
        padding: 1rem 2rem;
        border: none;
        border-radius: 9999px;
        font-weight: 700;
        cursor: pointer;
        background: ${background};
        color: ${color};
        box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.2);
        transition: all 0.3s ease;

        &:hover {
            background: ${hover};
            transform: scale(1.05);
        }

        &:active {
            transform: scale(0.95);
        }
        "#,
        background = background,
        color = color,
        hover = hover
    );

    html! {
        <button class={classes!(style, props.class.clone())} onclick={props.onclick.clone()}>
            { for props.children.iter() }
        </button>
    }
}
