use console_core::{DocumentState, SaveStatus};
use dioxus::prelude::*;

/// Name shown above the buffer; the backend serves a single document.
pub const DOCUMENT_LABEL: &str = "aws_support.yaml";

pub fn status_color(status: &SaveStatus) -> &'static str {
    if status.is_error() {
        "#f87171"
    } else {
        "#86efac"
    }
}

#[component]
pub fn DslEditor(
    state: Signal<DocumentState>,
    on_edit: EventHandler<String>,
    on_save: EventHandler<()>,
) -> Element {
    let (content, saving, status) = {
        let s = state.read();
        (s.content.clone(), s.saving, s.status.clone())
    };
    let status_banner = status.map(|status| {
        let title = match &status {
            SaveStatus::Failed { reason } => reason.clone(),
            _ => String::new(),
        };
        (status.label(), status_color(&status), title)
    });

    rsx! {
        div {
            class: "editor-area",
            style: "flex: 1; display: flex; flex-direction: column; padding: 20px; gap: 10px; min-height: 0;",

            div {
                class: "editor-toolbar",
                style: "display: flex; justify-content: space-between; align-items: center;",
                span { style: "color: #94a3b8; font-size: 0.9rem;", "{DOCUMENT_LABEL}" }
                div {
                    style: "display: flex; align-items: center; gap: 10px;",
                    if let Some((label, color, title)) = status_banner {
                        span {
                            style: "font-size: 0.9rem; color: {color};",
                            title: "{title}",
                            "{label}"
                        }
                    }
                    button {
                        disabled: saving,
                        onclick: move |_| on_save.call(()),
                        if saving { "◐ " } else { "💾 " }
                        "Save & Reload"
                    }
                }
            }

            textarea {
                value: "{content}",
                spellcheck: "false",
                style: "flex: 1; background-color: #1e1e1e; color: #d4d4d4; font-family: monospace; font-size: 14px; padding: 15px; border: 1px solid #334155; border-radius: 8px; resize: none; outline: none; line-height: 1.5;",
                oninput: move |e| on_edit.call(e.value()),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failures_render_in_error_colour() {
        let failed = SaveStatus::Failed {
            reason: "HTTP error: 400".to_string(),
        };
        assert_eq!(status_color(&failed), "#f87171");
        assert_eq!(status_color(&SaveStatus::Saved), "#86efac");
        assert_eq!(status_color(&SaveStatus::Saving), "#86efac");
    }
}
