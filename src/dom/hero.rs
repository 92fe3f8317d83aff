// hero.rs - Canvas frame loop and pointer parallax
//
// Owns the requestAnimationFrame loop. The world ticks, the encoder
// fills the output buffers, and the 2d context draws them additively.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, MouseEvent, Window};

use crate::render::{LINE_ALPHA, LINE_STRIDE, POINT_STRIDE};
use crate::sim::HeroWorld;

pub fn init(window: &Window, document: &Document) {
    let Some(canvas) = document.get_element_by_id("hero-canvas") else { return };
    let Ok(canvas) = canvas.dyn_into::<HtmlCanvasElement>() else { return };

    let (w, h) = viewport(window);
    canvas.set_width(w);
    canvas.set_height(h);

    let Some(ctx) = context_2d(&canvas) else { return };

    let world = Rc::new(RefCell::new(HeroWorld::new(w, h)));

    attach_pointer(document, world.clone());
    attach_resize(window, world.clone(), canvas);
    run_frame_loop(window, world, ctx);
}

fn viewport(window: &Window) -> (u32, u32) {
    let w = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(1280.0) as u32;
    let h = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(720.0) as u32;
    (w.max(1), h.max(1))
}

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok())
}

fn attach_pointer(document: &Document, world: Rc<RefCell<HeroWorld>>) {
    let closure = Closure::wrap(Box::new(move |event: MouseEvent| {
        world
            .borrow_mut()
            .pointer_moved(event.client_x() as f32, event.client_y() as f32);
    }) as Box<dyn FnMut(MouseEvent)>);

    let _ = document.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn attach_resize(window: &Window, world: Rc<RefCell<HeroWorld>>, canvas: HtmlCanvasElement) {
    let win = window.clone();
    let closure = Closure::wrap(Box::new(move |_: web_sys::Event| {
        let (w, h) = viewport(&win);
        canvas.set_width(w);
        canvas.set_height(h);
        world.borrow_mut().resize(w, h);
    }) as Box<dyn FnMut(web_sys::Event)>);

    let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn run_frame_loop(window: &Window, world: Rc<RefCell<HeroWorld>>, ctx: CanvasRenderingContext2d) {
    let slot: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let next = slot.clone();
    let win = window.clone();

    *slot.borrow_mut() = Some(Closure::wrap(Box::new(move |now_ms: f64| {
        {
            let mut world = world.borrow_mut();
            world.tick(now_ms);
            draw(&ctx, &world);
        }
        if let Some(frame) = next.borrow().as_ref() {
            let _ = win.request_animation_frame(frame.as_ref().unchecked_ref());
        }
    }) as Box<dyn FnMut(f64)>));

    if let Some(frame) = slot.borrow().as_ref() {
        let _ = window.request_animation_frame(frame.as_ref().unchecked_ref());
    }
}

fn draw(ctx: &CanvasRenderingContext2d, world: &HeroWorld) {
    let w = world.width() as f64;
    let h = world.height() as f64;

    ctx.set_global_composite_operation("source-over").ok();
    ctx.clear_rect(0.0, 0.0, w, h);

    // Additive blending for the particle glow
    ctx.set_global_composite_operation("lighter").ok();

    for rec in world.points().chunks_exact(POINT_STRIDE) {
        let &[x, y, size, r, g, b, a] = rec else { continue };
        ctx.set_fill_style_str(&format!(
            "rgba({},{},{},{})",
            (r * 255.0) as u8,
            (g * 255.0) as u8,
            (b * 255.0) as u8,
            a
        ));
        ctx.begin_path();
        let _ = ctx.arc(x as f64, y as f64, size.max(0.3) as f64, 0.0, std::f64::consts::TAU);
        ctx.fill();
    }

    // Wireframe shapes in one stroke pass
    ctx.set_stroke_style_str(&format!("rgba(255,255,255,{LINE_ALPHA})"));
    ctx.begin_path();
    for rec in world.lines().chunks_exact(LINE_STRIDE) {
        let &[x0, y0, x1, y1] = rec else { continue };
        ctx.move_to(x0 as f64, y0 as f64);
        ctx.line_to(x1 as f64, y1 as f64);
    }
    ctx.stroke();
}
