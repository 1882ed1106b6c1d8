//! Sparkle Poster entry point
//!
//! Handles platform-specific initialization and wires the three page
//! behaviors: poster fitter, sparkle emitter, particle field.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_page {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use glam::Vec2;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;
    use wasm_bindgen::prelude::*;
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{
        CanvasRenderingContext2d, Document, HtmlCanvasElement, HtmlElement, HtmlImageElement,
        MouseEvent, TouchEvent,
    };

    use sparkle_poster::SceneConfig;
    use sparkle_poster::sim::{FrameInput, SceneState, SparkleSpec, fit_viewport, sparkle_burst, step};

    /// Everything the page mutates after startup
    struct Page {
        state: SceneState,
        /// Event inputs carried into the next frame
        input: FrameInput,
        /// Sparkle jitter RNG, a separate stream from the field seed
        sparkle_rng: Pcg32,
        /// Loaded image pool, indexed by `Particle::image`
        images: Vec<HtmlImageElement>,
        ctx: CanvasRenderingContext2d,
        canvas: HtmlCanvasElement,
        /// Frame loop advances only while set; toggled on tab visibility
        running: Rc<Cell<bool>>,
    }

    impl Page {
        /// Clear the canvas and redraw every particle
        fn draw(&self) {
            let w = self.canvas.width() as f64;
            let h = self.canvas.height() as f64;
            self.ctx.clear_rect(0.0, 0.0, w, h);

            for p in &self.state.particles {
                if let Some(img) = self.images.get(p.image) {
                    let _ = self.ctx.draw_image_with_html_image_element_and_dw_and_dh(
                        img,
                        p.pos.x as f64,
                        p.pos.y as f64,
                        p.size as f64,
                        p.size as f64,
                    );
                }
            }
        }
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Sparkle Poster starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let config = SceneConfig::load();

        // Poster fitter: fit now, refit on resize and (after the settle
        // delay) on orientation change
        apply_poster_fit(&document);
        setup_fit_handlers(&config);

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("bg-canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        let bounds = viewport_size(&window);
        canvas.set_width(bounds.x as u32);
        canvas.set_height(bounds.y as u32);

        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .expect("no 2d context")
            .dyn_into()
            .expect("not a 2d context");

        let seed = config.seed.unwrap_or_else(|| js_sys::Date::now() as u64);
        log::info!("Scene seeded with {}", seed);

        let sparkle_rng = Pcg32::seed_from_u64(seed.wrapping_add(1));
        let state = SceneState::new(config, bounds, seed);
        let running = Rc::new(Cell::new(true));

        let page = Rc::new(RefCell::new(Page {
            state,
            input: FrameInput::default(),
            sparkle_rng,
            images: Vec::new(),
            ctx,
            canvas,
            running: running.clone(),
        }));

        // Sparkles and pointer tracking are live before the field is
        setup_sparkle_handlers(page.clone());
        setup_pointer_tracking(page.clone());
        setup_resize_handler(page.clone());
        setup_visibility_pause(page.clone());

        // The field only exists once the whole image pool has settled
        let sources = page.borrow().state.config.image_sources.clone();
        let images = load_images(&sources).await;
        if images.is_empty() {
            log::error!("No images loaded; particle field disabled");
            return;
        }
        log::info!("Loaded {}/{} images", images.len(), sources.len());

        {
            let mut p = page.borrow_mut();
            let count = images.len();
            p.images = images;
            p.state.populate(count);
        }

        request_animation_frame(page);

        log::info!("Sparkle Poster running!");
    }

    /// Current viewport size in CSS pixels
    fn viewport_size(window: &web_sys::Window) -> Vec2 {
        let w = window
            .inner_width()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0);
        let h = window
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0);
        Vec2::new(w as f32, h as f32)
    }

    /// Fit the poster to the viewport and scale the root font with it
    fn apply_poster_fit(document: &Document) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let fit = fit_viewport(viewport_size(&window));

        if let Some(el) = document
            .get_element_by_id("poster")
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        {
            let style = el.style();
            let _ = style.set_property("width", &format!("{}px", fit.width));
            let _ = style.set_property("height", &format!("{}px", fit.height));
        }

        // Couples all rem-sized text to the poster scale
        if let Some(root) = document
            .document_element()
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        {
            let _ = root
                .style()
                .set_property("font-size", &format!("{}px", fit.font_size));
        }
    }

    fn setup_fit_handlers(config: &SceneConfig) {
        let window = web_sys::window().unwrap();
        let document = window.document().unwrap();

        // Refit on every viewport resize
        {
            let document = document.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                apply_poster_fit(&document);
            });
            let _ =
                window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Orientation changes refit after a short settle delay so the
        // viewport numbers are stable
        {
            let settle_ms = config.orientation_settle_ms;
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                let Some(window) = web_sys::window() else {
                    return;
                };
                let Some(document) = window.document() else {
                    return;
                };
                let refit = Closure::once_into_js(move || apply_poster_fit(&document));
                let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
                    refit.unchecked_ref(),
                    settle_ms,
                );
            });
            let _ = window.add_event_listener_with_callback(
                "orientationchange",
                closure.as_ref().unchecked_ref(),
            );
            closure.forget();
        }
    }

    fn setup_sparkle_handlers(page: Rc<RefCell<Page>>) {
        let document = web_sys::window().unwrap().document().unwrap();

        // Mouse trail
        {
            let page = page.clone();
            let document_clone = document.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let origin = Vec2::new(event.client_x() as f32, event.client_y() as f32);
                emit_sparkles(&page, &document_clone, origin);
            });
            let _ = document
                .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch trail - first touch point only; an empty touch list means
        // there is no usable coordinate, so nothing spawns
        {
            let page = page.clone();
            let document_clone = document.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                if let Some(touch) = event.touches().get(0) {
                    let origin = Vec2::new(touch.client_x() as f32, touch.client_y() as f32);
                    emit_sparkles(&page, &document_clone, origin);
                }
            });
            let _ = document
                .add_event_listener_with_callback("touchmove", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    /// Spawn one burst of sparkle markers around `origin`
    fn emit_sparkles(page: &Rc<RefCell<Page>>, document: &Document, origin: Vec2) {
        let mut p = page.borrow_mut();
        let Page {
            state, sparkle_rng, ..
        } = &mut *p;

        let lifetime_ms = state.config.sparkle_lifetime_ms;
        for spec in sparkle_burst(origin, &state.config, sparkle_rng) {
            spawn_sparkle(document, &spec, lifetime_ms);
        }
    }

    /// Insert a sparkle marker and schedule its one-shot removal
    fn spawn_sparkle(document: &Document, spec: &SparkleSpec, lifetime_ms: i32) {
        let Ok(el) = document.create_element("span") else {
            return;
        };
        el.set_class_name("sparkle");

        let Ok(el) = el.dyn_into::<HtmlElement>() else {
            return;
        };
        let style = el.style();
        let _ = style.set_property("left", &format!("{}px", spec.pos.x));
        let _ = style.set_property("top", &format!("{}px", spec.pos.y));
        let _ = style.set_property("--rot", &format!("{}deg", spec.rotation_deg));

        if let Some(body) = document.body() {
            let _ = body.append_child(&el);
        }

        // Fire-and-forget deletion; once_into_js frees the closure after it
        // runs, so rapid pointer movement cannot leak markers
        let marker = el.clone();
        let remove = Closure::once_into_js(move || marker.remove());
        if let Some(window) = web_sys::window() {
            let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
                remove.unchecked_ref(),
                lifetime_ms,
            );
        }
    }

    fn setup_pointer_tracking(page: Rc<RefCell<Page>>) {
        let document = web_sys::window().unwrap().document().unwrap();

        // Mouse position feeds the shared pointer state, last write wins
        {
            let page = page.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                page.borrow_mut().input.pointer =
                    Some(Vec2::new(event.client_x() as f32, event.client_y() as f32));
            });
            let _ = document
                .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // First touch point stands in for the mouse
        {
            let page = page.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                if let Some(touch) = event.touches().get(0) {
                    page.borrow_mut().input.pointer =
                        Some(Vec2::new(touch.client_x() as f32, touch.client_y() as f32));
                }
            });
            let _ = document
                .add_event_listener_with_callback("touchmove", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_resize_handler(page: Rc<RefCell<Page>>) {
        let window = web_sys::window().unwrap();

        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            let Some(window) = web_sys::window() else {
                return;
            };
            let bounds = viewport_size(&window);
            let mut p = page.borrow_mut();
            // Resetting the backing store also wipes the drawn frame; the
            // loop clears and redraws anyway
            p.canvas.set_width(bounds.x as u32);
            p.canvas.set_height(bounds.y as u32);
            p.input.resize = Some(bounds);
        });
        let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_visibility_pause(page: Rc<RefCell<Page>>) {
        let document = web_sys::window().unwrap().document().unwrap();

        let document_clone = document.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            let hidden = document_clone.visibility_state() == web_sys::VisibilityState::Hidden;
            let p = page.borrow();
            p.running.set(!hidden);
            if hidden {
                log::info!("Paused (tab hidden)");
            }
        });
        let _ = document
            .add_event_listener_with_callback("visibilitychange", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    /// Load the image pool, skipping failures with a warning instead of
    /// stalling the field forever
    async fn load_images(sources: &[String]) -> Vec<HtmlImageElement> {
        let mut images = Vec::with_capacity(sources.len());
        for src in sources {
            let Ok(img) = HtmlImageElement::new() else {
                continue;
            };
            img.set_src(src);
            match JsFuture::from(img.decode()).await {
                Ok(_) => images.push(img),
                Err(_) => log::warn!("Image failed to load, skipping: {}", src),
            }
        }
        images
    }

    fn request_animation_frame(page: Rc<RefCell<Page>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |time: f64| {
            frame(page, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn frame(page: Rc<RefCell<Page>>, _time: f64) {
        {
            let mut p = page.borrow_mut();
            if p.running.get() {
                let input = std::mem::take(&mut p.input);
                step(&mut p.state, &input);
                p.draw();
            }
        }

        request_animation_frame(page);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_page::run().await;
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Sparkle Poster (native) starting...");
    log::info!("The page needs a browser - run with `trunk serve` for the web version");

    println!("\nRunning poster fit check...");
    check_poster_fit();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn check_poster_fit() {
    use glam::Vec2;
    use sparkle_poster::sim::fit_viewport;

    let fit = fit_viewport(Vec2::new(1000.0, 2000.0));
    assert_eq!(fit.width, 1000.0, "narrow viewport pins the width");
    assert_eq!(fit.height, 1556.0, "height follows the poster ratio");
    println!("✓ Poster fit checks passed!");
}
