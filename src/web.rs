//! Browser glue: canvas sizing, the animation-frame loop, input listeners,
//! the periodic progress-bar timer and reward navigation.
//!
//! All game state lives in the [`GameSession`] inside the thread-local shell;
//! this module only translates between DOM events and session calls. Missing
//! DOM elements (canvas, progress bar) are startup errors, not recoverable
//! game conditions.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    CanvasRenderingContext2d, Document, HtmlCanvasElement, HtmlElement, KeyboardEvent, TouchEvent,
    Window, console, window,
};

use crate::config::GameConfig;
use crate::render::{self, CanvasPainter};
use crate::session::{Command, GamePhase, GameSession, InputEvent};

struct Shell {
    session: GameSession,
    painter: CanvasPainter,
    canvas: HtmlCanvasElement,
    progress_el: HtmlElement,
    progress_timer: Option<i32>,
    progress_cb: Closure<dyn FnMut()>,
}

thread_local! {
    static SHELL: RefCell<Option<Shell>> = const { RefCell::new(None) };
}

pub(crate) fn boot(config: GameConfig) -> Result<(), JsValue> {
    let win = window().ok_or_else(|| JsValue::from_str("no window"))?;
    let doc = win.document().ok_or_else(|| JsValue::from_str("no document"))?;

    let canvas: HtmlCanvasElement = doc
        .get_element_by_id(&config.canvas_id)
        .ok_or_else(|| JsValue::from_str("missing game canvas element"))?
        .dyn_into()?;
    let ctx: CanvasRenderingContext2d = canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("no 2d context"))?
        .dyn_into()?;
    // The progress bar is an injected dependency; its absence is fatal here
    // rather than a per-tick surprise in the sampling timer.
    let progress_el: HtmlElement = doc
        .get_element_by_id(&config.progress_bar_id)
        .ok_or_else(|| JsValue::from_str("missing progress bar element"))?
        .dyn_into()?;

    let scale = scale_ratio(&win, &doc, config.game_width, config.game_height);
    canvas.set_width((config.game_width * scale) as u32);
    canvas.set_height((config.game_height * scale) as u32);
    let painter = CanvasPainter::new(ctx, scale, config.game_width, config.game_height);

    let seed = win.performance().map(|p| p.now().to_bits()).unwrap_or(0);
    let session = GameSession::new(config, seed);

    let progress_cb = Closure::wrap(Box::new(|| {
        SHELL.with(|cell| {
            if let Some(shell) = cell.borrow_mut().as_mut() {
                let ratio = shell.session.sample_progress();
                let style = shell.progress_el.style();
                let _ = style.set_property("width", &format!("{:.2}%", ratio * 100.0));
                let _ = style.set_property("opacity", "1");
            }
        });
    }) as Box<dyn FnMut()>);

    SHELL.with(|cell| {
        cell.replace(Some(Shell {
            session,
            painter,
            canvas,
            progress_el,
            progress_timer: None,
            progress_cb,
        }))
    });

    install_input_listeners(&win)?;
    install_resize_listeners(&win)?;
    start_frame_loop();
    console::log_1(&"dino-dash: ready".into());
    Ok(())
}

// --- Frame loop ---------------------------------------------------------------

fn start_frame_loop() {
    let f: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let g = f.clone();
    *g.borrow_mut() = Some(Closure::wrap(Box::new(move |ts: f64| {
        SHELL.with(|cell| {
            if let Some(shell) = cell.borrow_mut().as_mut() {
                shell_tick(shell, ts);
            }
        });
        if let Some(w) = window() {
            let _ = w.request_animation_frame(f.borrow().as_ref().unwrap().as_ref().unchecked_ref());
        }
    }) as Box<dyn FnMut(f64)>));
    if let Some(w) = window() {
        let _ = w.request_animation_frame(g.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}

fn shell_tick(shell: &mut Shell, now_ms: f64) {
    shell.session.frame(now_ms);
    sync_progress_timer(shell);
    render::draw_frame(&shell.session, &mut shell.painter);
}

/// Start-once / stop lifecycle for the 1 Hz sampling interval, keyed off the
/// game phase so the timer is never re-armed while already active.
fn sync_progress_timer(shell: &mut Shell) {
    let running = shell.session.phase() == GamePhase::Running;
    match (running, shell.progress_timer) {
        (true, None) => {
            if let Some(w) = window() {
                if let Ok(handle) = w.set_interval_with_callback_and_timeout_and_arguments_0(
                    shell.progress_cb.as_ref().unchecked_ref(),
                    shell.session.config.progress_interval_ms,
                ) {
                    shell.progress_timer = Some(handle);
                }
            }
        }
        (false, Some(handle)) => {
            if let Some(w) = window() {
                w.clear_interval_with_handle(handle);
            }
            shell.progress_timer = None;
        }
        _ => {}
    }
}

// --- Input --------------------------------------------------------------------

fn now_ms() -> f64 {
    window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or(0.0)
}

fn dispatch(event: InputEvent) {
    let now = now_ms();
    let cmd = SHELL.with(|cell| {
        cell.borrow_mut()
            .as_mut()
            .and_then(|shell| shell.session.handle_input(event, now))
    });
    if let Some(Command::Navigate(url)) = cmd {
        if let Some(w) = window() {
            let _ = w.location().set_href(&url);
        }
    }
}

fn install_input_listeners(win: &Window) -> Result<(), JsValue> {
    let keydown = Closure::wrap(Box::new(move |e: KeyboardEvent| {
        match e.key().as_str() {
            // Space/arrows scroll the page if the default is left in place.
            "w" | "W" | " " | "ArrowUp" => {
                e.prevent_default();
                if !e.repeat() {
                    dispatch(InputEvent::PrimaryDown);
                }
            }
            "y" | "Y" | "Enter" => {
                e.prevent_default();
                dispatch(InputEvent::Accept);
            }
            "n" | "N" | "Escape" => {
                e.prevent_default();
                dispatch(InputEvent::Decline);
            }
            _ => {}
        }
    }) as Box<dyn FnMut(KeyboardEvent)>);
    win.add_event_listener_with_callback("keydown", keydown.as_ref().unchecked_ref())?;
    keydown.forget();

    let keyup = Closure::wrap(Box::new(move |e: KeyboardEvent| {
        if matches!(e.key().as_str(), "w" | "W" | " " | "ArrowUp") {
            dispatch(InputEvent::PrimaryUp);
        }
    }) as Box<dyn FnMut(KeyboardEvent)>);
    win.add_event_listener_with_callback("keyup", keyup.as_ref().unchecked_ref())?;
    keyup.forget();

    // Touch carries its horizontal position so a pending reward prompt can be
    // answered by tapping the left (yes) or right (no) half of the canvas.
    let touchstart = Closure::wrap(Box::new(move |e: TouchEvent| {
        let frac_x = SHELL.with(|cell| {
            cell.borrow().as_ref().and_then(|shell| {
                let rect = shell.canvas.get_bounding_client_rect();
                if rect.width() <= 0.0 {
                    return None;
                }
                e.touches().get(0).map(|touch| {
                    ((f64::from(touch.client_x()) - rect.left()) / rect.width()).clamp(0.0, 1.0)
                })
            })
        });
        match frac_x {
            Some(frac_x) => dispatch(InputEvent::TapDown { frac_x }),
            None => dispatch(InputEvent::PrimaryDown),
        }
    }) as Box<dyn FnMut(TouchEvent)>);
    win.add_event_listener_with_callback("touchstart", touchstart.as_ref().unchecked_ref())?;
    touchstart.forget();

    let touchend = Closure::wrap(Box::new(move || {
        dispatch(InputEvent::PrimaryUp);
    }) as Box<dyn FnMut()>);
    win.add_event_listener_with_callback("touchend", touchend.as_ref().unchecked_ref())?;
    touchend.forget();

    Ok(())
}

// --- Viewport scaling ---------------------------------------------------------

fn scale_ratio(win: &Window, doc: &Document, game_w: f64, game_h: f64) -> f64 {
    let inner_w = win.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(game_w);
    let inner_h = win.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(game_h);
    let (client_w, client_h) = doc
        .document_element()
        .map(|e| (e.client_width() as f64, e.client_height() as f64))
        .unwrap_or((inner_w, inner_h));
    let screen_w = if client_w > 0.0 { inner_w.min(client_w) } else { inner_w };
    let screen_h = if client_h > 0.0 { inner_h.min(client_h) } else { inner_h };
    if screen_w / screen_h < game_w / game_h {
        screen_w / game_w
    } else {
        screen_h / game_h
    }
}

/// Recomputes the scale and resizes the canvas. The simulation runs in
/// logical coordinates, so no entity state is touched here.
fn rescale() {
    let Some(win) = window() else { return };
    let Some(doc) = win.document() else { return };
    SHELL.with(|cell| {
        if let Some(shell) = cell.borrow_mut().as_mut() {
            let scale = scale_ratio(
                &win,
                &doc,
                shell.session.config.game_width,
                shell.session.config.game_height,
            );
            shell.canvas.set_width((shell.session.config.game_width * scale) as u32);
            shell.canvas.set_height((shell.session.config.game_height * scale) as u32);
            shell.painter.set_scale(scale);
        }
    });
}

fn install_resize_listeners(win: &Window) -> Result<(), JsValue> {
    // Safari fires resize before the rotated viewport settles; debounce with
    // a timeout like the orientation handling expects.
    let debounce_ms = SHELL.with(|cell| {
        cell.borrow()
            .as_ref()
            .map(|s| s.session.config.resize_debounce_ms)
            .unwrap_or(500)
    });
    let rescale_cb = Rc::new(Closure::wrap(Box::new(rescale) as Box<dyn FnMut()>));

    let deferred = rescale_cb.clone();
    let resize = Closure::wrap(Box::new(move || {
        if let Some(w) = window() {
            let _ = w.set_timeout_with_callback_and_timeout_and_arguments_0(
                deferred.as_ref().as_ref().unchecked_ref(),
                debounce_ms,
            );
        }
    }) as Box<dyn FnMut()>);
    win.add_event_listener_with_callback("resize", resize.as_ref().unchecked_ref())?;
    resize.forget();

    if let Ok(screen) = win.screen() {
        let orientation = screen.orientation();
        let change = Closure::wrap(Box::new(rescale) as Box<dyn FnMut()>);
        orientation.add_event_listener_with_callback("change", change.as_ref().unchecked_ref())?;
        change.forget();
    }

    Ok(())
}
