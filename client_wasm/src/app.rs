//! Browser host: DOM wiring, timer-driven ticking and the WASM exports

use crate::frame::{surface_size, Frame};
use crate::fsm::{ScreenAction, ScreenFsm};
use crate::input::{field_y, first_changed_touch_y, get_key_from_event, key_command, KeyCommand};
use crate::renderer::Renderer;
use game_core::{
    Config, Environment, GameError, GameLoop, PlayField, ScoreDisplay, Side, TickOutcome,
};
use js_sys::Date;
use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, HtmlCanvasElement, HtmlElement, KeyboardEvent, MouseEvent, TouchEvent,
    Window,
};

// Abstract environment backed by the browser
struct BrowserEnv;

impl Environment for BrowserEnv {
    fn now(&self) -> f64 {
        Date::now()
    }

    fn log(&self, msg: String) {
        web_sys::console::log_1(&JsValue::from_str(&msg));
    }
}

/// Score counters in the page header
struct DomScores {
    computer: Option<Element>,
    player: Option<Element>,
}

impl DomScores {
    fn find(document: &Document) -> Self {
        Self {
            computer: document.get_element_by_id("computerScore"),
            player: document.get_element_by_id("playerScore"),
        }
    }

    fn reset(&mut self) {
        self.update(Side::Computer, 0);
        self.update(Side::Player, 0);
    }
}

impl ScoreDisplay for DomScores {
    fn update(&mut self, side: Side, score: u32) {
        let element = match side {
            Side::Computer => &self.computer,
            Side::Player => &self.player,
        };
        if let Some(element) = element {
            element.set_inner_html(&score.to_string());
        }
    }
}

struct App {
    game_loop: GameLoop,
    renderer: Renderer,
    frame: Frame,
    fsm: ScreenFsm,
    scores: DomScores,
    document: Document,
    container: HtmlElement,
    canvas: HtmlCanvasElement,
    tick_armed: bool,
}

thread_local! {
    static APP: RefCell<Option<App>> = RefCell::new(None);
}

fn with_app<R>(f: impl FnOnce(&mut App) -> R) -> Option<R> {
    APP.with(|slot| slot.borrow_mut().as_mut().map(f))
}

fn to_js(err: GameError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn window() -> Result<Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("No window"))
}

fn element<T: JsCast>(document: &Document, id: &str) -> Result<T, JsValue> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("Missing #{id}")))?
        .dyn_into::<T>()
        .map_err(|_| JsValue::from_str(&format!("#{id} has the wrong element type")))
}

fn viewport_size(window: &Window) -> Result<(f32, f32), JsValue> {
    let width = window
        .inner_width()?
        .as_f64()
        .ok_or_else(|| JsValue::from_str("innerWidth is not a number"))?;
    let height = window
        .inner_height()?
        .as_f64()
        .ok_or_else(|| JsValue::from_str("innerHeight is not a number"))?;
    Ok((width as f32, height as f32))
}

/// Size the container, its font and the canvas to the field
fn layout(
    container: &HtmlElement,
    canvas: &HtmlCanvasElement,
    field: &PlayField,
) -> Result<(), JsValue> {
    let style = container.style();
    style.set_property("width", &format!("{}px", field.width))?;
    style.set_property("height", &format!("{}px", field.height))?;
    style.set_property("font-size", &format!("{}px", field.font_size))?;

    let (width, height) = surface_size((field.width, field.height));
    canvas.set_width(width);
    canvas.set_height(height);
    Ok(())
}

fn random_seed() -> u64 {
    let random = (js_sys::Math::random() * u32::MAX as f64) as u64;
    (random << 32) ^ Date::now() as u64
}

impl App {
    async fn new() -> Result<Self, JsValue> {
        let window = window()?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("No document"))?;
        let container: HtmlElement = element(&document, "game-container")?;
        let canvas: HtmlCanvasElement = element(&document, "gameCanvas")?;

        let (width, height) = viewport_size(&window)?;
        let game_loop =
            GameLoop::new(Box::new(BrowserEnv), Config::new(), width, height).map_err(to_js)?;
        let field = *game_loop.field();
        layout(&container, &canvas, &field)?;

        let renderer = Renderer::new(canvas.clone(), (field.width, field.height))
            .await
            .map_err(|e| JsValue::from_str(&e))?;
        let scores = DomScores::find(&document);

        game_loop.env.log(format!(
            "Pong: Client ready, viewport={width}x{height}, unit={:.3}",
            field.unit
        ));

        Ok(Self {
            game_loop,
            renderer,
            frame: Frame::new(),
            fsm: ScreenFsm::new(),
            scores,
            document,
            container,
            canvas,
            tick_armed: false,
        })
    }

    /// Swap to the play screen and start a fresh game. Returns true if the
    /// tick timer needs arming.
    fn play(&mut self) -> Result<bool, JsValue> {
        if !self.fsm.transition(ScreenAction::Play).success() {
            return Ok(false);
        }

        if let Some(title) = self.document.get_element_by_id("titleScreen") {
            title.class_list().add_1("hidden")?;
        }
        if let Some(play) = self.document.get_element_by_id("playScreen") {
            play.class_list().remove_1("hidden")?;
        }

        self.game_loop.start(random_seed()).map_err(to_js)?;
        self.scores.reset();

        let arm = !self.tick_armed;
        self.tick_armed = true;
        Ok(arm)
    }

    fn tick(&mut self) -> TickOutcome {
        let outcome = self.game_loop.tick(&mut self.frame, &mut self.scores);
        match outcome {
            TickOutcome::Reschedule { .. } => {
                if let Err(e) = self.renderer.draw(&self.frame) {
                    self.game_loop.env.log(format!("Pong: Draw failed: {e}"));
                }
            }
            TickOutcome::Idle | TickOutcome::Stopped => self.tick_armed = false,
        }
        outcome
    }

    fn resize(&mut self) -> Result<(), JsValue> {
        let (width, height) = viewport_size(&window()?)?;
        match self.game_loop.resize(width, height) {
            Ok(_) | Err(GameError::ResizeBeforeStart) => {}
            // Logged by the loop; the previous layout stays
            Err(_) => return Ok(()),
        }

        let field = *self.game_loop.field();
        layout(&self.container, &self.canvas, &field)?;
        self.renderer.resize((field.width, field.height));

        if self.fsm.is_playing() && self.game_loop.render(&mut self.frame).is_ok() {
            self.renderer.draw(&self.frame).map_err(|e| JsValue::from_str(&e))?;
        }
        Ok(())
    }

    fn pointer(&mut self, page_y: f64) {
        let scroll_y = window().and_then(|w| w.scroll_y()).unwrap_or(0.0);
        let canvas_top = self.canvas.get_bounding_client_rect().top() + scroll_y;
        match self.game_loop.pointer_move(field_y(page_y, canvas_top)) {
            Ok(()) | Err(GameError::InputOutOfRange { .. }) | Err(GameError::NotRunning) => {}
            Err(err) => self.game_loop.env.log(format!("Pong: {err}")),
        }
    }

    fn key(&mut self, key: &str) {
        let result = match key_command(key) {
            Some(KeyCommand::TogglePause) => self.game_loop.toggle_pause(),
            Some(KeyCommand::ToggleSound) => self.game_loop.toggle_sound(),
            None => return,
        };
        if let Err(err) = result {
            if err != GameError::NotRunning {
                self.game_loop.env.log(format!("Pong: {err}"));
            }
        }
    }

    fn stop(&mut self) {
        self.game_loop.stop_handle().stop();
        self.fsm.transition(ScreenAction::Stop);
    }
}

fn schedule_tick(delay_ms: u32) -> Result<(), JsValue> {
    let callback = Closure::once_into_js(run_tick);
    window()?.set_timeout_with_callback_and_timeout_and_arguments_0(
        callback.unchecked_ref(),
        delay_ms as i32,
    )?;
    Ok(())
}

fn run_tick() {
    if let Some(TickOutcome::Reschedule { delay_ms }) = with_app(|app| app.tick()) {
        if let Err(e) = schedule_tick(delay_ms) {
            web_sys::console::error_1(&e);
        }
    }
}

fn report(result: Result<(), JsValue>) {
    if let Err(e) = result {
        web_sys::console::error_1(&e);
    }
}

fn register_handlers() -> Result<(), JsValue> {
    let window = window()?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("No document"))?;

    // Viewport resize
    {
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            if let Some(result) = with_app(|app| app.resize()) {
                report(result);
            }
        });
        window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    // Play button
    {
        let button: HtmlElement = element(&document, "playButton")?;
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
            match with_app(|app| app.play()) {
                Some(Ok(true)) => report(schedule_tick(0)),
                Some(Ok(false)) | None => {}
                Some(Err(e)) => web_sys::console::error_1(&e),
            }
        });
        button.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    // Mouse move
    {
        let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
            with_app(|app| app.pointer(event.page_y() as f64));
        });
        document
            .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    // Touch start / move
    for kind in ["touchstart", "touchmove"] {
        let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
            if let Some(page_y) = first_changed_touch_y(&event) {
                with_app(|app| app.pointer(page_y));
            }
        });
        document.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    // Keyboard
    {
        let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
            let key = get_key_from_event(&event);
            with_app(|app| app.key(&key));
        });
        window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    Ok(())
}

/// Set up the renderer, size the page and wire the event handlers
#[wasm_bindgen]
pub fn init_game() -> js_sys::Promise {
    wasm_bindgen_futures::future_to_promise(async move {
        console_error_panic_hook::set_once();

        let app = App::new().await?;
        APP.with(|slot| *slot.borrow_mut() = Some(app));
        register_handlers()?;
        Ok(JsValue::UNDEFINED)
    })
}

/// Stop ticking; the current frame stays on screen
#[wasm_bindgen]
pub fn stop_game() -> Result<(), JsValue> {
    with_app(|app| app.stop()).ok_or_else(|| JsValue::from_str("Game not initialized"))
}
