use log::{debug, info};
use storyline_core::render::{IndicatorState, NavigatorView};

pub fn log_frame(view: &NavigatorView<'_>, with_content: bool) {
    let step = view.current();
    info!(
        "trace: {} {} {} summary=\"{}\" back={} forward={}",
        view.position_label,
        step.display_icon(),
        step.label,
        view.summary,
        view.can_retreat(),
        view.can_advance()
    );

    if let Some(hint) = view.hint {
        info!("trace: hint \"{hint}\"");
    }
    if let Some(frame) = view.animation {
        debug!("trace: animation {:?} {}%", frame.kind, frame.progress_pct);
    }
    if !with_content {
        return;
    }

    let done = view
        .indicators()
        .filter(|indicator| indicator.state == IndicatorState::Done)
        .count();
    debug!("trace: progress {}/{} done={done}", view.filled_segments(), view.total());
    for line in view.content() {
        debug!("trace:   {:?} {}", line.tone, line.text);
    }
}
