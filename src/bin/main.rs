use std::{cell::Cell, env, error::Error, rc::Rc};

use log::{debug, info};
use storyline_core::{
    app::{NavigatorConfig, StepNavigator, TickResult},
    constellation::Constellation,
    input::ScriptedInput,
    playback::{COVERAGE_RAMP, FLOW_INTERVAL_MS, Playback},
    sections::{ActiveSectionTracker, DotState, SECTIONS, scroll_fraction},
    text::{self, AppMode, CannedText, OfflineSource, TextRequest},
    viewport::{LazyMount, ThresholdWatcher, ViewportWatcher},
};

#[path = "main/frame_log.rs"]
mod frame_log;
#[path = "main/story.rs"]
mod story;
#[path = "main/timeline.rs"]
mod timeline;

const API_KEY_ENV: &str = "STORYLINE_API_KEY";
const FRAME_INTERVAL_MS: u64 = 16;
const PLAYBACK_POLL_MS: u64 = 100;
const FLOW_STEPS: usize = 5;
const PAGE_HEIGHT_PX: f32 = 12_000.0;
const VIEWPORT_HEIGHT_PX: f32 = 900.0;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mode = AppMode::from_credential(env::var(API_KEY_ENV).ok().as_deref());
    info!("Storyline started: mode={} api_key_env={}", mode.as_str(), API_KEY_ENV);

    let field = Constellation::default();
    info!(
        "hero: constellation stars={} edges={} accents={}",
        field.stars.len(),
        field.edges.len(),
        field.stars.iter().filter(|star| star.accent).count()
    );

    let mut sections = ActiveSectionTracker::default();
    sections.observe("story-claudemd-trace", true);
    let lit = SECTIONS
        .iter()
        .filter(|section| sections.dot_state(section.id) != DotState::Inactive);
    for section in lit {
        info!(
            "nav: section={} state={:?} expanded={} progress={:.2}",
            section.label,
            sections.dot_state(section.id),
            sections.expanded(section),
            scroll_fraction(1_800.0, PAGE_HEIGHT_PX, VIEWPORT_HEIGHT_PX)
        );
    }

    run_trace()?;
    run_playbacks()?;

    let response = text::query(
        mode,
        &mut OfflineSource,
        &CannedText::default(),
        &TextRequest::new("hs3-mcp-flow", "Trace the database timeout incident"),
    );
    info!(
        "text: mode={} lines={} first=\"{}\"",
        response.mode.as_str(),
        response.output.lines().count(),
        response.output.lines().next().unwrap_or("")
    );

    Ok(())
}

fn run_trace() -> Result<(), Box<dyn Error>> {
    let config = NavigatorConfig::default();
    let mut nav = StepNavigator::new(&story::CLAUDEMD_TRACE, config)?;
    let mut watcher = ThresholdWatcher::default();
    nav.watch_viewport(&mut watcher);
    let interactive = LazyMount::new(&mut watcher);

    let changed = Rc::new(Cell::new(true));
    let sink = Rc::clone(&changed);
    nav.subscribe(move |index| {
        debug!("trace: listener index={index}");
        sink.set(true);
    });

    info!(
        "trace: steps={} debounce_ms={} wheel_threshold={} touch_threshold={}",
        nav.len(),
        config.debounce_ms,
        config.wheel_threshold,
        config.touch_threshold
    );

    let mut input = ScriptedInput::new(&timeline::SCRIPT);
    let mut mounted_logged = false;
    let mut now_ms = 0u64;
    while now_ms <= timeline::END_MS {
        watcher.observe(timeline::visibility_at(now_ms));
        if interactive.is_mounted() && !mounted_logged {
            info!("trace: interactive mounted at {now_ms}ms");
            mounted_logged = true;
        }

        let Ok(_) = nav.process_inputs_with(&mut input, now_ms, |event, disposition| {
            debug!("input: {:?} -> {:?}", event, disposition);
            if !disposition.is_consumed() {
                debug!("input: host keeps default scrolling");
            }
        });

        if nav.tick(now_ms) == TickResult::RenderRequested {
            let with_content = changed.replace(false);
            nav.with_view(now_ms, |view| frame_log::log_frame(&view, with_content));
        }

        now_ms += FRAME_INTERVAL_MS;
    }

    nav.dispose();
    watcher.dispose();
    info!("trace: disposed at index={}", nav.index());
    Ok(())
}

fn run_playbacks() -> Result<(), Box<dyn Error>> {
    let mut suite = Playback::test_run()?;
    let mut flow = Playback::uniform(FLOW_STEPS, FLOW_INTERVAL_MS)?;
    suite.start(0);
    flow.start(0);

    let mut now_ms = 0u64;
    while !(suite.is_finished() && flow.is_finished()) {
        now_ms += PLAYBACK_POLL_MS;
        if suite.tick(now_ms) {
            info!(
                "tests: lines={}/{} coverage={}%",
                suite.revealed(),
                suite.cue_count(),
                COVERAGE_RAMP.value_at(now_ms)
            );
        }
        if flow.tick(now_ms) {
            match flow.current() {
                Some(step) => info!("mcp: flow step={}", step + 1),
                None => info!("mcp: flow complete at {now_ms}ms"),
            }
        }
    }

    Ok(())
}
