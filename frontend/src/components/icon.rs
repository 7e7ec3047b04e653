use yew::prelude::*;

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Glyph {
    Arrow,
    Book,
    Calendar,
    Check,
    ChevronDown,
    Clock,
    Heart,
    Layers,
    Message,
    Palette,
    Shield,
    Star,
    Target,
    Users,
}

impl Glyph {
    pub fn symbol(self) -> &'static str {
        match self {
            Glyph::Arrow => "→",
            Glyph::Book => "📖",
            Glyph::Calendar => "📅",
            Glyph::Check => "✔",
            Glyph::ChevronDown => "⌄",
            Glyph::Clock => "⏱",
            Glyph::Heart => "♥",
            Glyph::Layers => "🧩",
            Glyph::Message => "💬",
            Glyph::Palette => "🎨",
            Glyph::Shield => "🛡",
            Glyph::Star => "★",
            Glyph::Target => "🎯",
            Glyph::Users => "👥",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct IconProps {
    pub glyph: Glyph,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(Icon)]
pub fn icon(props: &IconProps) -> Html {
    html! {
        <span class={classes!("icon", props.class.clone())} aria-hidden="true">
            {props.glyph.symbol()}
        </span>
    }
}
