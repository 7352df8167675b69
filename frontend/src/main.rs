use pages::landing::Landing;
use yew::prelude::*;

mod components {
    pub mod carousel;
    pub mod waitlist_form;
}
mod pages {
    pub mod landing;
}
mod utils {
    pub mod api;
}
mod config;
mod logging;

#[function_component]
fn App() -> Html {
    html! { <Landing /> }
}

fn main() {
    logging::init();
    tracing::info!("Starting JobTrackPath landing page");
    yew::Renderer::<App>::new().render();
}
