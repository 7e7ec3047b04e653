use yew::prelude::*;

#[derive(Clone, Copy, PartialEq, Default)]
pub enum Align {
    #[default]
    Center,
    Left,
    Right,
}

impl Align {
    fn class(self) -> &'static str {
        match self {
            Align::Center => "align-center",
            Align::Left => "align-left",
            Align::Right => "align-right",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct SectionTitleProps {
    pub title: Html,
    #[prop_or_default]
    pub subtitle: Option<AttrValue>,
    #[prop_or_default]
    pub align: Align,
    /// White text for dark sections.
    #[prop_or_default]
    pub light: bool,
    #[prop_or_default]
    pub hide_bar: bool,
}

#[function_component(SectionTitle)]
pub fn section_title(props: &SectionTitleProps) -> Html {
    html! {
        <div class={classes!("section-title", props.align.class(), props.light.then(|| "light"))}>
            <h2>{props.title.clone()}</h2>
            {
                match &props.subtitle {
                    Some(subtitle) => html! {
                        <>
                            if !props.hide_bar {
                                <div class="section-title__bar"></div>
                            }
                            <p>{subtitle.clone()}</p>
                        </>
                    },
                    None => html! {},
                }
            }
        </div>
    }
}
