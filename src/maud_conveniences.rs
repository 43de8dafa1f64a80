use maud::{Escaper, Markup, PreEscaped, Render, html};
use std::fmt::Write;

pub fn render_table<const N: usize>(
    header: Markup,
    titles: [&'static str; N],
    items: Vec<[Markup; N]>,
) -> Markup {
    html! {
        div class="container mx-auto" {
            (header)
            div class="overflow-x-auto" {
                table class="min-w-full bg-gray-800 rounded shadow-md" {
                    thead class="bg-gray-700" {
                        tr {
                            @for title in titles {
                                th class="py-2 px-4 text-left font-semibold text-gray-300" {(title)}
                            }
                        }
                    }
                    tbody {
                        @for row in items {
                            tr {
                                @for col in row {
                                    td class="py-2 px-4 border-b border-gray-600 text-gray-200" {(col)}
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

pub fn escape(s: impl AsRef<str>) -> PreEscaped<String> {
    let mut output = String::new();
    Escaper::new(&mut output).write_str(s.as_ref()).unwrap(); //this method always succeeds - strange api!
    PreEscaped(output)
}

pub fn title(s: impl Render) -> Markup {
    html! {
        h1 class="text-2xl font-semibold mb-4" {(s)}
    }
}

pub fn form_element(name: &'static str, label: &'static str, inner: Markup) -> Markup {
    html! {
        div class="mb-4" {
            label for=(name) class="block text-sm font-bold mb-2 text-gray-300" {(label)}
            (inner)
        }
    }
}

pub fn simple_form_element(
    name: &'static str,
    label: &'static str,
    required: bool,
    input_type: Option<&'static str>,
    value: Option<&str>,
) -> Markup {
    form_element(name, label, html! {
        input required[required] type=(input_type.unwrap_or("text")) id=(name) name=(name) value=[value] placeholder={"Please enter student " (label.to_lowercase())} class="shadow appearance-none border rounded w-full py-2 px-3 leading-tight focus:outline-none focus:shadow-outline bg-gray-700 border-gray-600" {}
    })
}

/// Transient alert reporting the outcome of a user action. Rendered with
/// `hx-swap-oob` so fragment responses can drop it into the page-level
/// `#notifications` area regardless of what their main swap targets.
pub fn notification(is_error: bool, heading: &str, body: &str) -> Markup {
    let colours = if is_error {
        "bg-red-100 border-red-400 text-red-700"
    } else {
        "bg-green-100 border-green-400 text-green-700"
    };

    html! {
        div hx-swap-oob="afterbegin:#notifications" {
            div class={"border px-4 py-3 rounded relative mb-2 " (colours)} role="alert" {
                strong class="font-bold mr-2" {(escape(heading))}
                span {(escape(body))}
            }
        }
    }
}

pub fn success_notification(heading: &str, body: &str) -> Markup {
    notification(false, heading, body)
}

pub fn error_notification(heading: &str, body: &str) -> Markup {
    notification(true, heading, body)
}

/// Initials badge, or the generic placeholder when there is nothing to
/// derive initials from.
pub fn avatar_badge(label: Option<String>) -> Markup {
    html! {
        @if let Some(label) = label {
            span class="inline-flex items-center justify-center w-10 h-10 rounded-full bg-slate-600 font-semibold" {(label)}
        } @else {
            span class="inline-flex items-center justify-center w-10 h-10 rounded-full bg-slate-600" aria-label="No name" {"?"}
        }
    }
}

pub fn spinner() -> Markup {
    html! {
        div class="flex justify-center p-8" {
            div class="animate-spin rounded-full h-10 w-10 border-b-2 border-blue-400" {}
        }
    }
}
