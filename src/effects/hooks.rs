use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_timers::callback::{Interval, Timeout};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use super::dom::DomSurface;
use super::particles::{DustField, SparkleTrail, Surface, DUST, DUST_TAG, SPARKLE_TAG};

/// Sparkle trail following the pointer. Attaches a document `mousemove`
/// listener on mount; on unmount the listener is detached and every sparkle
/// still on screen is swept, pending expiry timers included.
#[hook]
pub fn use_magic_cursor() {
    use_effect_with_deps(
        move |_| {
            let document = web_sys::window().unwrap().document().unwrap();
            let surface = DomSurface::new(document.clone());
            let trail = Rc::new(RefCell::new(SparkleTrail::new(SmallRng::from_entropy())));

            let move_surface = surface.clone();
            let on_move = Closure::wrap(Box::new(move |event: web_sys::MouseEvent| {
                let burst = trail
                    .borrow_mut()
                    .pointer_moved(event.client_x() as f64, event.client_y() as f64);
                for sparkle in burst {
                    move_surface.place(sparkle.id, SPARKLE_TAG, &sparkle.style());
                    let expiry_surface = move_surface.clone();
                    let id = sparkle.id;
                    Timeout::new(sparkle.lifetime_ms, move || {
                        expiry_surface.clear(id, SPARKLE_TAG);
                    })
                    .forget();
                }
            }) as Box<dyn FnMut(web_sys::MouseEvent)>);

            document
                .add_event_listener_with_callback("mousemove", on_move.as_ref().unchecked_ref())
                .unwrap();

            move || {
                document
                    .remove_event_listener_with_callback(
                        "mousemove",
                        on_move.as_ref().unchecked_ref(),
                    )
                    .unwrap();
                surface.sweep(SPARKLE_TAG);
            }
        },
        (),
    );
}

/// Ambient dust field. Starts the spawn interval on mount; on unmount the
/// interval stops, deferred spawns are disarmed and every mote still on
/// screen is swept.
#[hook]
pub fn use_magic_dust() {
    use_effect_with_deps(
        move |_| {
            let document = web_sys::window().unwrap().document().unwrap();
            let surface = DomSurface::new(document);
            let field = Rc::new(RefCell::new(DustField::new(SmallRng::from_entropy())));
            let active = Rc::new(Cell::new(true));

            let tick_surface = surface.clone();
            let tick_active = active.clone();
            let interval = Interval::new(DUST.tick_ms, move || {
                for mote in field.borrow_mut().tick() {
                    let surface = tick_surface.clone();
                    let active = tick_active.clone();
                    let style = mote.style();
                    let lifetime_ms = mote.lifetime_ms();
                    let id = mote.id;
                    Timeout::new(mote.stagger_ms, move || {
                        // A teardown between the tick and this deferred spawn
                        // must not leave a particle behind.
                        if !active.get() {
                            return;
                        }
                        surface.place(id, DUST_TAG, &style);
                        Timeout::new(lifetime_ms, move || {
                            surface.clear(id, DUST_TAG);
                        })
                        .forget();
                    })
                    .forget();
                }
            });

            move || {
                drop(interval);
                active.set(false);
                surface.sweep(DUST_TAG);
            }
        },
        (),
    );
}
