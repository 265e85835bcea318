use leptos::prelude::*;

#[component]
pub fn Icon(
    /// Icon name (file name under `/icons` without `.svg`)
    name: &'static str,
    /// CSS classes for sizing and colour
    #[prop(default = "w-5 h-5")]
    class: &'static str,
) -> impl IntoView {
    let icon_path = format!("/icons/{}.svg", name);

    view! {
        <img
            src=icon_path
            class=class
            alt=name
            draggable=false
        />
    }
}

/// Icons referenced directly by the page markup.
///
/// Content records carry their own icon names.
pub mod icons {
    pub const ARROW_RIGHT: &str = "arrow-right";
    pub const CHEVRON_DOWN: &str = "chevron-down";
    pub const EXTERNAL_LINK: &str = "external-link";
    pub const QUOTE: &str = "quote";
    pub const COMPASS: &str = "compass";
    pub const SPARKLES: &str = "sparkles";
    pub const CHECK: &str = "check";
}
