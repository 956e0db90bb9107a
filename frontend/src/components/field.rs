use web_sys::{File, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct TextFieldProps {
    pub name: AttrValue,
    pub label: AttrValue,
    pub value: AttrValue,
    pub on_change: Callback<String>,
    #[prop_or(AttrValue::Static("text"))]
    pub input_type: AttrValue,
    #[prop_or(true)]
    pub required: bool,
    #[prop_or_default]
    pub min: Option<AttrValue>,
    #[prop_or_default]
    pub class: Classes,
}

/// Input with a label that floats above the text once focused or filled.
#[function_component(TextField)]
pub fn text_field(props: &TextFieldProps) -> Html {
    let oninput = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_change.emit(input.value());
        })
    };

    // Date and time inputs always render their own placeholder text.
    let pinned = matches!(props.input_type.as_str(), "date" | "time");

    html! {
        <div class={classes!("field", pinned.then(|| "field-pinned"), props.class.clone())}>
            <input
                id={props.name.clone()}
                name={props.name.clone()}
                type={props.input_type.clone()}
                value={props.value.clone()}
                placeholder=" "
                required={props.required}
                min={props.min.clone()}
                {oninput}
            />
            <label for={props.name.clone()}>{&*props.label}</label>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct SelectFieldProps {
    pub name: AttrValue,
    pub label: AttrValue,
    pub prompt: AttrValue,
    pub options: &'static [&'static str],
    pub value: AttrValue,
    pub on_change: Callback<String>,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(SelectField)]
pub fn select_field(props: &SelectFieldProps) -> Html {
    let onchange = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            on_change.emit(select.value());
        })
    };

    html! {
        <div class={classes!("field", "field-pinned", props.class.clone())}>
            <select id={props.name.clone()} name={props.name.clone()} required=true {onchange}>
                <option value="" selected={props.value.is_empty()}>{&*props.prompt}</option>
                { for props.options.iter().map(|option| html! {
                    <option value={*option} selected={props.value.as_str() == *option}>{*option}</option>
                }) }
            </select>
            <label for={props.name.clone()}>{&*props.label}</label>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct TextAreaFieldProps {
    pub name: AttrValue,
    pub label: AttrValue,
    pub value: AttrValue,
    pub on_change: Callback<String>,
    #[prop_or(4)]
    pub rows: u32,
    #[prop_or(false)]
    pub required: bool,
}

#[function_component(TextAreaField)]
pub fn text_area_field(props: &TextAreaFieldProps) -> Html {
    let oninput = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            on_change.emit(area.value());
        })
    };

    html! {
        <div class="field">
            <textarea
                id={props.name.clone()}
                name={props.name.clone()}
                rows={props.rows.to_string()}
                value={props.value.clone()}
                placeholder=" "
                required={props.required}
                {oninput}
            />
            <label for={props.name.clone()}>{&*props.label}</label>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct FileFieldProps {
    pub name: AttrValue,
    pub label: AttrValue,
    pub accept: AttrValue,
    /// Name of the file currently held in this slot.
    pub selected: Option<AttrValue>,
    pub on_select: Callback<File>,
}

#[function_component(FileField)]
pub fn file_field(props: &FileFieldProps) -> Html {
    let onchange = {
        let on_select = props.on_select.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            if let Some(file) = input.files().and_then(|files| files.get(0)) {
                on_select.emit(file);
            }
            // Allows picking the same file again after a rejection.
            input.set_value("");
        })
    };

    html! {
        <label class={classes!("file-field", props.selected.is_some().then(|| "has-file"))}>
            <span class="file-label">{&*props.label}</span>
            <span class="file-name">
                { props.selected.as_deref().unwrap_or("Choose file") }
            </span>
            <input type="file" name={props.name.clone()} accept={props.accept.clone()} {onchange} />
        </label>
    }
}

/// Styles shared by every form on the site.
#[function_component(FormStyles)]
pub fn form_styles() -> Html {
    html! {
        <style>
            {r#"
                .form-card {
                    background: #ffffff;
                    border-radius: 16px;
                    padding: 48px;
                    box-shadow: 0 20px 40px rgba(29, 53, 87, 0.12);
                }
                .form-grid {
                    display: grid;
                    grid-template-columns: repeat(2, minmax(0, 1fr));
                    gap: 24px;
                    margin-bottom: 24px;
                }
                .form-grid .span-2 { grid-column: span 2; }
                .field { position: relative; margin-bottom: 24px; }
                .form-grid .field { margin-bottom: 0; }
                .field input,
                .field select,
                .field textarea {
                    width: 100%;
                    padding: 32px 16px 12px;
                    border: 2px solid #e5e5e5;
                    border-radius: 12px;
                    font-size: 1rem;
                    color: #1d3557;
                    background: #ffffff;
                    outline: none;
                    transition: border-color 0.3s, box-shadow 0.3s;
                    box-sizing: border-box;
                    resize: none;
                }
                .field input:focus,
                .field select:focus,
                .field textarea:focus {
                    border-color: #a8dadc;
                    box-shadow: 0 0 0 3px rgba(168, 218, 220, 0.1);
                }
                .field label {
                    position: absolute;
                    left: 16px;
                    top: 20px;
                    color: #457b9d;
                    pointer-events: none;
                    transition: all 0.3s;
                }
                .field-pinned label,
                .field input:focus + label,
                .field input:not(:placeholder-shown) + label,
                .field textarea:focus + label,
                .field textarea:not(:placeholder-shown) + label {
                    top: 8px;
                    font-size: 0.75rem;
                }
                .field input:focus + label,
                .field textarea:focus + label,
                .field select:focus + label { color: #1d3557; }
                .file-field {
                    display: flex;
                    flex-direction: column;
                    gap: 6px;
                    padding: 16px;
                    border: 2px dashed #a8dadc;
                    border-radius: 12px;
                    cursor: pointer;
                    color: #457b9d;
                }
                .file-field.has-file { border-style: solid; color: #1d3557; }
                .file-field input { display: none; }
                .file-label { font-size: 0.75rem; }
                .file-name { overflow: hidden; text-overflow: ellipsis; white-space: nowrap; }
                .submit-button {
                    width: 100%;
                    padding: 16px;
                    border: none;
                    border-radius: 12px;
                    background: #1d3557;
                    color: #ffffff;
                    font-size: 1rem;
                    cursor: pointer;
                    box-shadow: 0 8px 16px rgba(29, 53, 87, 0.2);
                    transition: transform 0.2s, box-shadow 0.3s;
                }
                .submit-button:hover { transform: scale(1.02); }
                .submit-button:disabled { opacity: 0.6; cursor: wait; transform: none; }
                .confirmation {
                    background: #ffffff;
                    border-radius: 16px;
                    padding: 48px;
                    text-align: center;
                    box-shadow: 0 20px 40px rgba(29, 53, 87, 0.12);
                    animation: pop 0.4s ease-out;
                }
                .confirmation-icon {
                    width: 96px;
                    height: 96px;
                    margin: 0 auto 24px;
                    border-radius: 50%;
                    background: #a8dadc;
                    color: #1d3557;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-size: 3rem;
                }
                @keyframes pop {
                    from { transform: scale(0.8); opacity: 0; }
                    to { transform: scale(1); opacity: 1; }
                }
                @media (max-width: 768px) {
                    .form-card { padding: 32px 20px; }
                    .form-grid { grid-template-columns: 1fr; }
                    .form-grid .span-2 { grid-column: auto; }
                }
            "#}
        </style>
    }
}
