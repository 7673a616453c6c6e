use log::debug;
use web_sys::KeyboardEvent;
use yew::prelude::*;
use yew_hooks::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ImageModalProps {
    pub open: bool,
    pub src: AttrValue,
    pub on_close: Callback<()>,
}

/// Full-screen viewer for a single screenshot.
#[function_component(ImageModal)]
pub fn image_modal(props: &ImageModalProps) -> Html {
    {
        let on_close = props.on_close.clone();
        use_event_with_window("keydown", move |e: KeyboardEvent| {
            if e.key() == "Escape" {
                debug!("Escape pressed, closing image modal");
                on_close.emit(());
            }
        });
    }

    let close = props.on_close.reform(|_: MouseEvent| ());
    let keep_open = Callback::from(|e: MouseEvent| e.stop_propagation());

    html! {
        <div
            id="imageModal"
            class={classes!("modal", props.open.then_some("active"))}
            onclick={close.clone()}
        >
            <span class="modal-close" onclick={close}>{"×"}</span>
            <img id="modalImage" class="modal-content" src={props.src.clone()} alt="Screenshot" onclick={keep_open} />
        </div>
    }
}
