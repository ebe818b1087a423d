//! Message composer: a plain text area or a freehand drawing canvas.
//!
//! The imperative `canvas::Engine` is created once the `<canvas>` element is
//! mounted and lives for the page's lifetime. DOM events are translated to
//! client-space points here and handed to the engine; everything about
//! strokes, clearing and sizing is decided by the engine.
//!
//! Switching to draw mode re-fits the canvas on the next tick, after the
//! canvas has been made visible and its container has been laid out.

#[cfg(feature = "csr")]
use std::cell::RefCell;
#[cfg(feature = "csr")]
use std::rc::Rc;

#[cfg(feature = "csr")]
use canvas::engine::Engine;
use canvas::input::Mode;
#[cfg(feature = "csr")]
use canvas::render::CanvasSurface;
use leptos::ev::{MouseEvent, TouchEvent};
use leptos::prelude::*;

use crate::config::PageConfig;
use crate::state::ui::UiState;

/// Handle shared by the pad's event handlers.
#[derive(Clone)]
struct Pad {
    canvas_ref: NodeRef<leptos::html::Canvas>,
    #[cfg(feature = "csr")]
    engine: Rc<RefCell<Option<Engine<CanvasSurface>>>>,
}

impl Pad {
    fn new(canvas_ref: NodeRef<leptos::html::Canvas>) -> Self {
        Self {
            canvas_ref,
            #[cfg(feature = "csr")]
            engine: Rc::new(RefCell::new(None)),
        }
    }

    #[cfg(feature = "csr")]
    fn with_engine<T>(&self, f: impl FnOnce(&mut Engine<CanvasSurface>) -> T) -> Option<T> {
        self.engine.borrow_mut().as_mut().map(f)
    }

    /// Bind the engine to the mounted canvas. Later calls are no-ops.
    fn mount(&self, color: &str) {
        #[cfg(feature = "csr")]
        {
            if self.engine.borrow().is_some() {
                return;
            }
            let Some(el) = self.canvas_ref.get_untracked() else {
                return;
            };
            let mut engine = match CanvasSurface::new(el) {
                Ok(surface) => Engine::new(surface),
                Err(e) => {
                    log::warn!("drawing disabled: {e}");
                    return;
                }
            };
            if let Err(e) = engine.set_color(color) {
                log::warn!("ignoring stroke color: {e}");
            }
            *self.engine.borrow_mut() = Some(engine);
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (self.canvas_ref, color);
        }
    }

    fn pointer_down(&self, ev: &MouseEvent) {
        #[cfg(feature = "csr")]
        {
            let at = crate::util::canvas_input::mouse_point(ev);
            self.with_engine(|e| e.pointer_down(at));
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = ev;
        }
    }

    fn pointer_move(&self, ev: &MouseEvent) {
        #[cfg(feature = "csr")]
        {
            let to = crate::util::canvas_input::mouse_point(ev);
            if let Some(Err(e)) = self.with_engine(|e| e.pointer_move(to)) {
                log::warn!("stroke failed: {e}");
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = ev;
        }
    }

    fn pointer_up(&self) {
        #[cfg(feature = "csr")]
        self.with_engine(Engine::pointer_up);
    }

    fn touch_start(&self, ev: &TouchEvent) {
        ev.prevent_default();
        #[cfg(feature = "csr")]
        {
            let touches = crate::util::canvas_input::touch_points(ev);
            self.with_engine(|e| e.touch_start(&touches));
        }
    }

    fn touch_move(&self, ev: &TouchEvent) {
        ev.prevent_default();
        #[cfg(feature = "csr")]
        {
            let touches = crate::util::canvas_input::touch_points(ev);
            if let Some(Err(e)) = self.with_engine(|e| e.touch_move(&touches)) {
                log::warn!("stroke failed: {e}");
            }
        }
    }

    fn touch_end(&self, ev: &TouchEvent) {
        ev.prevent_default();
        #[cfg(feature = "csr")]
        self.with_engine(Engine::touch_end);
    }

    /// Apply a picker value. Invalid colors keep the previous one.
    fn set_color(&self, raw: &str) {
        #[cfg(feature = "csr")]
        if let Some(Err(e)) = self.with_engine(|e| e.set_color(raw)) {
            log::warn!("ignoring stroke color: {e}");
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = raw;
        }
    }

    fn clear(&self) {
        #[cfg(feature = "csr")]
        if let Some(Err(e)) = self.with_engine(Engine::clear) {
            log::warn!("clear failed: {e}");
        }
    }

    fn download(&self, filename: &str) {
        #[cfg(feature = "csr")]
        {
            let Some(exported) = self.with_engine(|e| e.export()) else {
                return;
            };
            let result = exported
                .map_err(|e| e.to_string())
                .and_then(|url| crate::util::download::save_data_url(&url, filename).map_err(|e| format!("{e:?}")));
            if let Err(e) = result {
                log::warn!("download failed: {e}");
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = filename;
        }
    }

    /// Sync the engine with a mode the UI just switched to.
    ///
    /// A deferred re-fit is dropped if the user has left draw mode again by
    /// the time it runs.
    fn set_mode(&self, mode: Mode, ui: RwSignal<UiState>) {
        #[cfg(feature = "csr")]
        {
            use canvas::geom::Size;
            use gloo_timers::callback::Timeout;

            match mode {
                Mode::Write => {
                    if let Some(Err(e)) = self.with_engine(|e| e.set_mode(Mode::Write, Size::default())) {
                        log::warn!("leaving draw mode failed: {e}");
                    }
                }
                Mode::Draw => {
                    let pad = self.clone();
                    Timeout::new(0, move || {
                        if ui.get_untracked().mode != Mode::Draw {
                            return;
                        }
                        let result = pad.with_engine(|e| {
                            let container = crate::util::canvas_input::container_size(e.surface().element());
                            e.set_mode(Mode::Draw, container)
                        });
                        if let Some(Err(e)) = result {
                            log::warn!("resizing drawing surface failed: {e}");
                        }
                    })
                    .forget();
                }
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (mode, ui);
        }
    }

    #[cfg(feature = "csr")]
    fn viewport_changed(&self) {
        let result = self.with_engine(|e| {
            let container = crate::util::canvas_input::container_size(e.surface().element());
            e.viewport_changed(container)
        });
        if let Some(Err(e)) = result {
            log::warn!("resizing drawing surface failed: {e}");
        }
    }
}

/// Composer with write/draw tool buttons.
///
/// Write mode shows `#textArea`; draw mode shows `#drawingCanvas` together
/// with the color picker and the clear and download buttons.
#[component]
pub fn DrawingPad() -> impl IntoView {
    let config = expect_context::<PageConfig>();
    let ui = expect_context::<RwSignal<UiState>>();
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
    let pad = Pad::new(canvas_ref);

    Effect::new({
        let pad = pad.clone();
        move || {
            if canvas_ref.get().is_some() {
                pad.mount(&ui.get_untracked().color);
            }
        }
    });

    #[cfg(feature = "csr")]
    {
        let pad = pad.clone();
        // Never removed; the pad lives as long as the page.
        let _ = window_event_listener(leptos::ev::resize, move |_| pad.viewport_changed());
    }

    let switch_to = {
        let pad = pad.clone();
        move |mode: Mode| {
            ui.update(|u| u.mode = mode);
            pad.set_mode(mode, ui);
        }
    };
    let write = switch_to.clone();
    let draw = switch_to;

    let surface_display = move || if ui.get().mode.shows_surface() { "block" } else { "none" };
    let text_display = move || if ui.get().mode.shows_surface() { "none" } else { "block" };

    let on_color = {
        let pad = pad.clone();
        move |ev: leptos::ev::Event| {
            let value = event_target_value(&ev);
            pad.set_color(&value);
            ui.update(|u| u.color = value);
        }
    };
    let on_clear = {
        let pad = pad.clone();
        move |_| pad.clear()
    };
    let on_download = {
        let pad = pad.clone();
        let filename = config.export_filename.clone();
        move |_| pad.download(&filename)
    };
    let on_mousedown = {
        let pad = pad.clone();
        move |ev: MouseEvent| pad.pointer_down(&ev)
    };
    let on_mousemove = {
        let pad = pad.clone();
        move |ev: MouseEvent| pad.pointer_move(&ev)
    };
    let on_mouseup = {
        let pad = pad.clone();
        move |_| pad.pointer_up()
    };
    let on_mouseout = {
        let pad = pad.clone();
        move |_| pad.pointer_up()
    };
    let on_touchstart = {
        let pad = pad.clone();
        move |ev: TouchEvent| pad.touch_start(&ev)
    };
    let on_touchmove = {
        let pad = pad.clone();
        move |ev: TouchEvent| pad.touch_move(&ev)
    };
    let on_touchend = move |ev: TouchEvent| pad.touch_end(&ev);

    view! {
        <div class="composer">
            <div class="composer__tools">
                <button
                    class="tool-btn"
                    class:active=move || ui.get().mode == Mode::Write
                    on:click=move |_| write(Mode::Write)
                >
                    "\u{270D}\u{FE0F} Escribir"
                </button>
                <button
                    class="tool-btn"
                    class:active=move || ui.get().mode == Mode::Draw
                    on:click=move |_| draw(Mode::Draw)
                >
                    "\u{1F3A8} Dibujar"
                </button>
                <input
                    type="color"
                    id="colorPicker"
                    class="color-picker"
                    style:display=surface_display
                    prop:value=move || ui.get().color
                    on:input=on_color
                />
                <button class="tool-btn" id="clearBtn" style:display=surface_display on:click=on_clear>
                    "Borrar"
                </button>
                <button class="tool-btn" id="downloadBtn" style:display=surface_display on:click=on_download>
                    "Descargar"
                </button>
            </div>
            <div class="composer__area">
                <textarea
                    id="textArea"
                    class="text-area"
                    placeholder="Escribe aquí tu mensaje..."
                    style:display=text_display
                ></textarea>
                <canvas
                    id="drawingCanvas"
                    class="drawing-canvas"
                    node_ref=canvas_ref
                    style:display=surface_display
                    on:mousedown=on_mousedown
                    on:mousemove=on_mousemove
                    on:mouseup=on_mouseup
                    on:mouseout=on_mouseout
                    on:touchstart=on_touchstart
                    on:touchmove=on_touchmove
                    on:touchend=on_touchend
                ></canvas>
            </div>
        </div>
    }
}
