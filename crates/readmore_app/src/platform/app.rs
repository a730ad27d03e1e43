use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use anyhow::{anyhow, Result};
use ratatui::crossterm::event::{self, Event, KeyEventKind};
use ratatui::DefaultTerminal;
use readmore_core::{update, AppState, AppViewModel, Effect, Msg};
use readmore_logging::{readmore_debug, readmore_info};

use super::config::AppConfig;
use super::effects::EffectRunner;
use super::input::{map_key, Action, Cursor};
use super::ui;

const FRAME_INTERVAL: Duration = Duration::from_millis(16);
const INPUT_POLL: Duration = Duration::from_millis(50);

pub(crate) fn run_app(config: AppConfig) -> Result<()> {
    readmore_logging::initialize(&config.log);
    readmore_info!("ReadMore starting");

    let runner = EffectRunner::new(config.search)?;
    let mut app = App::new(runner);

    let mut terminal = ratatui::init();
    let result = app.run(&mut terminal);
    ratatui::restore();

    readmore_info!("ReadMore exiting");
    result
}

struct App {
    state: AppState,
    view: AppViewModel,
    cursor: Cursor,
    runner: EffectRunner,
    needs_redraw: bool,
}

impl App {
    fn new(runner: EffectRunner) -> Self {
        let state = AppState::new();
        let view = state.view();
        Self {
            state,
            view,
            cursor: Cursor::default(),
            runner,
            needs_redraw: true,
        }
    }

    /// Pump terminal input and engine results until the user quits.
    fn run(&mut self, terminal: &mut DefaultTerminal) -> Result<()> {
        terminal.clear()?;

        let (event_tx, event_rx) = mpsc::channel();
        let input_running = Arc::new(AtomicBool::new(true));
        let input_flag = Arc::clone(&input_running);

        let input_thread = thread::spawn(move || -> Result<()> {
            while input_flag.load(Ordering::Relaxed) {
                if event::poll(INPUT_POLL)? {
                    let event = event::read()?;
                    if event_tx.send(event).is_err() {
                        break;
                    }
                }
            }
            Ok(())
        });

        let mut pending_events = VecDeque::new();

        let result: Result<()> = 'event_loop: loop {
            for msg in self.runner.poll() {
                self.dispatch_msg(msg);
            }

            loop {
                match event_rx.try_recv() {
                    Ok(event) => pending_events.push_back(event),
                    Err(mpsc::TryRecvError::Empty) => break,
                    Err(mpsc::TryRecvError::Disconnected) => {
                        break 'event_loop Err(anyhow!("input event channel disconnected"));
                    }
                }
            }

            while let Some(event) = pending_events.pop_front() {
                match event {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        let action = map_key(key, &self.cursor);
                        if self.handle_action(action) {
                            break 'event_loop Ok(());
                        }
                    }
                    Event::Resize(_, _) => self.needs_redraw = true,
                    _ => {}
                }
            }

            if self.needs_redraw {
                let view = &self.view;
                let cursor = &mut self.cursor;
                if let Err(err) = terminal.draw(|frame| {
                    cursor.columns = ui::layout::grid_columns(frame.area().width);
                    ui::render::draw(frame, view, cursor);
                }) {
                    break 'event_loop Err(err.into());
                }
                self.needs_redraw = false;
            }

            thread::sleep(FRAME_INTERVAL);
        };

        input_running.store(false, Ordering::Relaxed);
        match input_thread.join() {
            Ok(join_result) => join_result?,
            Err(err) => std::panic::resume_unwind(err),
        }

        result
    }

    /// Applies one user action; returns `true` when the app should quit.
    fn handle_action(&mut self, action: Action) -> bool {
        match action {
            Action::Quit => return true,
            Action::Dispatch(msg) => self.dispatch_msg(msg),
            Action::MoveTag(delta) => {
                self.cursor.move_tag(delta);
                self.needs_redraw = true;
            }
            Action::MoveCard(delta) => {
                self.cursor.move_card(delta, self.view.cards.len());
                self.needs_redraw = true;
            }
            Action::SwitchFocus => {
                self.cursor.switch_focus();
                self.needs_redraw = true;
            }
            Action::Ignore => {}
        }
        false
    }

    fn dispatch_msg(&mut self, msg: Msg) {
        readmore_debug!("dispatch {:?}", msg);
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        if state.consume_dirty() {
            self.view = state.view();
            self.cursor.clamp_cards(self.view.cards.len());
            self.needs_redraw = true;
        }
        self.state = state;
        self.run_effects(effects);
    }

    fn run_effects(&self, effects: Vec<Effect>) {
        if !effects.is_empty() {
            self.runner.enqueue(effects);
        }
    }
}
