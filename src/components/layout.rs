use leptos::prelude::*;

/// Centered, width-capped content column.
#[component]
pub fn Container(children: Children) -> impl IntoView {
    view! {
        <div class="mx-auto w-full max-w-6xl px-4 sm:px-6 lg:px-8">
            {children()}
        </div>
    }
}

#[component]
pub fn Pill(children: Children) -> impl IntoView {
    view! {
        <span class="inline-flex items-center rounded-full border border-neutral-200 dark:border-neutral-800 px-3 py-1 text-sm text-neutral-600 dark:text-neutral-300 bg-white/70 dark:bg-neutral-900/60 backdrop-blur-sm">
            {children()}
        </span>
    }
}

#[component]
pub fn Card(children: Children, #[prop(optional, into)] class: String) -> impl IntoView {
    let container = format!(
        "rounded-3xl border border-neutral-200 dark:border-neutral-800 bg-neutral-50/70 dark:bg-neutral-900/50 shadow-sm hover:shadow-md transition-shadow {class}"
    );

    view! { <div class=container>{children()}</div> }
}

/// Card with a section heading, used for each block on the content pages.
#[component]
pub fn SectionCard(title: &'static str, children: Children) -> impl IntoView {
    view! {
        <Card>
            <div class="p-6 md:p-8">
                <h2 class="text-xl md:text-2xl font-semibold tracking-tight text-neutral-900 dark:text-white">
                    {title}
                </h2>
                {children()}
            </div>
        </Card>
    }
}

/// Page heading with an optional lead paragraph.
#[component]
pub fn PageHeading(
    title: &'static str,
    #[prop(optional)] lead: &'static str,
) -> impl IntoView {
    view! {
        <div class="mb-6 md:mb-8">
            <h1 class="text-xl md:text-2xl font-semibold text-neutral-900 dark:text-white">{title}</h1>
            {(!lead.is_empty()).then(|| view! {
                <p class="mt-2 text-neutral-600 dark:text-neutral-300 max-w-3xl">{lead}</p>
            })}
        </div>
    }
}

#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Ghost,
    Outline,
}

impl ButtonVariant {
    fn class(self) -> &'static str {
        match self {
            Self::Primary => "bg-neutral-900 text-white hover:bg-neutral-800 focus:ring-neutral-300 dark:bg-white dark:text-neutral-900 dark:hover:bg-neutral-100 dark:focus:ring-neutral-700",
            Self::Ghost => "bg-transparent text-neutral-700 hover:bg-neutral-100 dark:text-neutral-200 dark:hover:bg-neutral-800",
            Self::Outline => "border border-neutral-300 dark:border-neutral-700 text-neutral-800 dark:text-neutral-100 hover:bg-neutral-50 dark:hover:bg-neutral-800",
        }
    }
}

const BUTTON_BASE: &str = "inline-flex items-center gap-2 rounded-xl px-4 py-2 text-sm font-medium transition-all focus:outline-none focus:ring-2 focus:ring-offset-2 disabled:opacity-60";

/// Renders an external link when `href` is set, otherwise a `<button>`.
#[component]
pub fn Button(
    children: Children,
    #[prop(optional)] href: &'static str,
    #[prop(optional)] on_click: Option<Callback<()>>,
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional)] icon: Option<fn() -> AnyView>,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let classes = format!("{BUTTON_BASE} {} {class}", variant.class());
    let content = view! {
        <span class="inline-flex items-center gap-2">
            {icon.map(|f| f())}
            {children()}
        </span>
    };

    if href.is_empty() {
        view! {
            <button
                class=classes
                on:click=move |_| {
                    if let Some(cb) = on_click {
                        cb.run(());
                    }
                }
            >
                {content}
            </button>
        }
        .into_any()
    } else {
        view! {
            <a href=href class=classes target="_blank" rel="noreferrer">
                {content}
            </a>
        }
        .into_any()
    }
}
