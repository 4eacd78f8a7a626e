use shared::Occasion;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct OccasionRadioGroupProps {
    pub value: Occasion,
    pub on_change: Callback<Occasion>,
}

#[function_component(OccasionRadioGroup)]
pub fn occasion_radio_group(props: &OccasionRadioGroupProps) -> Html {
    html! {
        <div class="occasion-radio-container">
            <div id="occasion" class="occasion-radio-group" role="radiogroup" aria-label="Select occasion">
                {for Occasion::ALL.iter().map(|&occasion| {
                    let id = format!("occasion-{}", occasion.value());
                    let onchange = props.on_change.reform(move |_: Event| occasion);
                    html! {
                        <div key={occasion.value()} class="radio-item-wrapper">
                            <input
                                type="radio"
                                class="radio-item"
                                name="occasion"
                                id={id.clone()}
                                value={occasion.value()}
                                checked={props.value == occasion}
                                {onchange}
                            />
                            <label for={id} class="radio-label">{occasion.label()}</label>
                        </div>
                    }
                })}
            </div>
        </div>
    }
}
