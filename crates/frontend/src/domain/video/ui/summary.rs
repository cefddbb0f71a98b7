use contracts::summary::{ProcessVideoRequest, SummaryLength};
use contracts::video::VideoId;
use leptos::prelude::*;
use thaw::*;

use crate::domain::video::api::process_video;
use crate::shared::config::use_app_config;
use crate::shared::load::{spawn_load, Load, LoadTracker, LOADING_TEXT};

const DEFAULT_WORD_LENGTH: &str = "100";

/// Build the summarizer request from the raw form values.
///
/// `word_length` is only read for [`SummaryLength::Custom`].
pub fn build_request(
    id: &str,
    option: &str,
    word_length: &str,
    check_grammar: bool,
) -> Result<ProcessVideoRequest, String> {
    let id = VideoId::parse(id).map_err(|e| e.to_string())?;
    let option = option
        .parse::<u8>()
        .map_err(|_| format!("unknown summary option {}", option))
        .and_then(SummaryLength::try_from)?;
    let word_length = match option {
        SummaryLength::Custom => match word_length.trim().parse::<u32>() {
            Ok(n) if n > 0 => n,
            _ => return Err("Word count must be a positive number".to_string()),
        },
        _ => 0,
    };

    Ok(ProcessVideoRequest {
        url: id.watch_url(),
        option,
        word_length,
        check_grammar,
    })
}

/// Summary form for the selected video.
#[component]
pub fn SummaryPanel(#[prop(into)] id: String) -> impl IntoView {
    let api = use_app_config().api;

    let length = RwSignal::new(SummaryLength::default().option().to_string());
    let word_length = RwSignal::new(DEFAULT_WORD_LENGTH.to_string());
    let check_grammar = RwSignal::new(true);
    let tracker = RwSignal::new(LoadTracker::<String>::new());

    let is_custom = move || length.get() == SummaryLength::Custom.option().to_string();
    let busy = Signal::derive(move || tracker.with(|t| t.state().is_pending()));

    let on_summarize = move |_: leptos::ev::MouseEvent| {
        let request = build_request(
            &id,
            &length.get_untracked(),
            &word_length.get_untracked(),
            check_grammar.get_untracked(),
        );
        let api = api.clone();
        spawn_load(tracker, async move {
            let request = request?;
            process_video(&api, &request).await.map(|r| r.summary)
        });
    };

    view! {
        <div class="summary-panel">
            <div class="summary-panel__controls">
                <Select value=length>
                    {SummaryLength::ALL
                        .into_iter()
                        .map(|l| {
                            view! { <option value=l.option().to_string()>{l.label()}</option> }
                        })
                        .collect_view()}
                </Select>
                <Show when=is_custom>
                    <Input value=word_length placeholder="Words" />
                </Show>
                <Checkbox checked=check_grammar label="Check grammar" />
                <Button appearance=ButtonAppearance::Primary disabled=busy on_click=on_summarize>
                    "Summarize"
                </Button>
            </div>
            {move || tracker.with(|t| match t.state() {
                Load::Idle => ().into_any(),
                Load::Pending => {
                    view! { <p class="summary-panel__loading">{LOADING_TEXT}</p> }.into_any()
                }
                Load::Resolved(summary) => {
                    view! { <p class="summary-panel__text">{summary.clone()}</p> }.into_any()
                }
                Load::Failed(e) => {
                    let message = format!("Could not summarize: {}", e);
                    view! { <p class="summary-panel__error">{message}</p> }.into_any()
                }
            })}
        </div>
    }
}
