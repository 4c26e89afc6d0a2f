use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub open: bool,
    pub id: AttrValue,
    pub title: AttrValue,
    #[prop_or_default]
    pub description: Option<AttrValue>,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Modal)]
pub fn modal(props: &Props) -> Html {
    if !props.open {
        return Html::default();
    }
    let title_id = format!("{}-title", props.id);
    let desc_id = props
        .description
        .as_ref()
        .map(|_| format!("{}-desc", props.id));

    html! {
        <div class="popup-overlay" role="presentation">
            <div
                id={props.id.clone()}
                class="popup"
                role="dialog"
                aria-modal="true"
                aria-labelledby={title_id.clone()}
                aria-describedby={desc_id.clone().unwrap_or_default()}
            >
                <h2 id={title_id}>{ props.title.clone() }</h2>
                { props.description.as_ref().map(|desc| html! {
                    <p id={desc_id.clone().unwrap_or_default()} class="popup__description">{ desc.clone() }</p>
                }).unwrap_or_default() }
                <div class="popup__body">
                    { for props.children.iter() }
                </div>
            </div>
        </div>
    }
}
