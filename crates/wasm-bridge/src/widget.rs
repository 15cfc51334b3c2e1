//! Widget actions shared by the JS API and the DOM listeners
//!
//! Every action borrows its instance through [`InstanceManager`] and returns
//! before any follow-up (fetch spawn, DOM events) touches the registry again.

use std::rc::Rc;

use price_chart_renderer::{CanvasSurface, ChartLayout};
use price_chart_shared::{
    ChartError, ChartResult, ErrorResponse, PhysicalPosition, PointerEvent, TimeRange,
};
use uuid::Uuid;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Event, MouseEvent, Window};

use crate::dom::WidgetDom;
use crate::fullscreen::{toggle_fullscreen as toggle, FullscreenApi, WebFullscreen};
use crate::instance_manager::{ChartInstance, InstanceManager, MountedView};
use crate::listeners::EventListener;

fn window() -> ChartResult<Window> {
    web_sys::window().ok_or_else(|| ChartError::Dom {
        message: "No window object available".to_string(),
    })
}

fn document(window: &Window) -> ChartResult<Document> {
    window.document().ok_or_else(|| ChartError::Dom {
        message: "No document available".to_string(),
    })
}

impl ChartInstance {
    /// Bring the DOM in line with the engine and redraw the canvas if needed.
    pub fn redraw(&mut self) -> ChartResult<()> {
        let Some(view) = self.view.as_mut() else {
            return Ok(());
        };

        view.dom.update_header(&self.engine.header())?;
        view.dom.update_selection(&self.engine.store().ui())?;

        if self.engine.needs_render() {
            let summary = self.engine.render(&mut view.surface);
            log::trace!(
                "Rendered {} layers, {} time labels",
                summary.layers_drawn,
                summary.time_labels.len()
            );
        }
        Ok(())
    }

    /// Fit the canvas to the measured plot size.
    pub fn sync_size(&mut self) -> ChartResult<()> {
        let Some(view) = self.view.as_mut() else {
            return Ok(());
        };
        let Some((width, height)) = view.dom.measure_plot() else {
            return Ok(());
        };
        self.engine.resized(width, height);
        resize_surface(&mut view.surface, self.engine.canvas_size())
    }
}

fn resize_surface(surface: &mut CanvasSurface, (width, height): (f64, f64)) -> ChartResult<()> {
    let pixel_ratio = web_sys::window()
        .map(|w| w.device_pixel_ratio())
        .unwrap_or(1.0);
    surface.resize(width, height, pixel_ratio)
}

/// Fetch `range` and apply it to the instance once it resolves.
///
/// Loads are not cancelled: overlapping loads apply in completion order.
pub fn spawn_load(id: Uuid, range: TimeRange) {
    let Some(loader) = InstanceManager::with_instance(&id, |i| Rc::clone(&i.loader)) else {
        return;
    };

    spawn_local(async move {
        let result = loader.load(range).await;
        let outcome = InstanceManager::with_instance_mut(&id, |instance| {
            instance.engine.apply(result);
            instance.redraw()
        });
        match outcome {
            Some(Err(e)) => log::error!("Redraw after loading {range} failed: {e}"),
            Some(Ok(())) => {}
            None => log::debug!("Chart {id} was destroyed before {range} data arrived"),
        }
    });
}

/// Build the DOM, attach listeners and issue the initial load.
pub fn mount(id: Uuid) -> ChartResult<()> {
    let window = window()?;
    let document = document(&window)?;

    let initial = InstanceManager::try_with_instance_mut(&id, |instance| {
        if instance.view.is_some() {
            return Ok(None);
        }

        let root = document
            .get_element_by_id(&instance.root_id)
            .ok_or_else(|| ChartError::Dom {
                message: format!("No element with id '{}'", instance.root_id),
            })?;

        let layout = instance.engine.config().layout.clone();
        let dom = WidgetDom::build(&document, &root, &ChartLayout::new(&layout))?;
        let mut surface = CanvasSurface::new(dom.canvas.clone())?;
        resize_surface(&mut surface, instance.engine.canvas_size())?;
        let fullscreen = WebFullscreen::new(document.clone(), dom.container.clone().into());
        let listeners = attach_listeners(id, &window, &document, &dom)?;

        let minutes_west = js_sys::Date::new_0().get_timezone_offset();
        instance.engine.set_timezone_offset_minutes(minutes_west as i32);

        instance.view = Some(MountedView {
            dom,
            surface,
            fullscreen,
            listeners,
        });
        instance.sync_size()?;
        instance.redraw()?;
        Ok(instance.engine.mount())
    })?;

    if let Some(range) = initial {
        spawn_load(id, range);
    }
    Ok(())
}

pub fn select_range(id: Uuid, label: &str) -> ChartResult<()> {
    let due = InstanceManager::try_with_instance_mut(&id, |instance| {
        let due = instance.engine.select_range(label)?;
        instance.redraw()?;
        Ok(due)
    })?;

    if let Some(range) = due {
        spawn_load(id, range);
    }
    Ok(())
}

pub fn select_tab(id: Uuid, label: &str) -> ChartResult<()> {
    InstanceManager::try_with_instance_mut(&id, |instance| {
        if instance.engine.select_tab(label)? {
            instance.redraw()?;
        }
        Ok(())
    })
}

/// Request or exit fullscreen; the state flips on `fullscreenchange`.
pub fn toggle_fullscreen(id: Uuid) -> ChartResult<bool> {
    InstanceManager::try_with_instance_mut(&id, |instance| {
        let view = instance.view.as_ref().ok_or_else(|| ChartError::Dom {
            message: "Chart is not mounted".to_string(),
        })?;
        toggle(&view.fullscreen)
    })
}

fn on_fullscreen_change(id: Uuid) -> ChartResult<()> {
    InstanceManager::try_with_instance_mut(&id, |instance| {
        let Some(view) = instance.view.as_ref() else {
            return Ok(());
        };
        let fullscreen = view.fullscreen.is_fullscreen();
        view.dom.apply_fullscreen_layout(
            fullscreen,
            ChartLayout::new(&instance.engine.config().layout).height,
        )?;
        if instance.engine.set_fullscreen(fullscreen) {
            log::info!("Fullscreen {}", if fullscreen { "entered" } else { "exited" });
        }
        instance.sync_size()?;
        instance.redraw()
    })
}

pub fn handle_pointer(id: Uuid, event: PointerEvent) -> ChartResult<()> {
    InstanceManager::try_with_instance_mut(&id, |instance| {
        if instance.engine.handle_cursor_event(event) {
            instance.redraw()?;
        }
        Ok(())
    })
}

/// Resize to an explicit width, keeping the current height.
pub fn resize(id: Uuid, width: f64) -> ChartResult<()> {
    InstanceManager::try_with_instance_mut(&id, |instance| {
        let (_, height) = instance.engine.canvas_size();
        instance.engine.resized(width, height);
        if let Some(view) = instance.view.as_mut() {
            resize_surface(&mut view.surface, instance.engine.canvas_size())?;
        }
        instance.redraw()
    })
}

pub fn render(id: Uuid) -> ChartResult<()> {
    InstanceManager::try_with_instance_mut(&id, |instance| {
        instance.engine.invalidate();
        instance.redraw()
    })
}

/// Drop the instance, its listeners and its DOM.
pub fn destroy(id: Uuid) {
    if let Some(instance) = InstanceManager::remove_instance(&id) {
        if let Some(view) = instance.view {
            view.dom.remove();
            log::debug!("Detached {} listeners", view.listeners.len());
        }
        log::info!("Destroyed chart {id}");
    }
}

fn report(action: &str, result: ChartResult<()>) {
    if let Err(e) = result {
        log::error!(
            "{}",
            ErrorResponse::new(e)
                .with_context("FinancialChart", action)
                .to_json()
        );
    }
}

fn pointer_position(event: &Event) -> Option<PhysicalPosition> {
    let event = event.dyn_ref::<MouseEvent>()?;
    let target = event.current_target()?.dyn_into::<web_sys::Element>().ok()?;
    let rect = target.get_bounding_client_rect();
    Some(PhysicalPosition::new(
        event.client_x() as f64 - rect.left(),
        event.client_y() as f64 - rect.top(),
    ))
}

fn attach_listeners(
    id: Uuid,
    window: &Window,
    document: &Document,
    dom: &WidgetDom,
) -> ChartResult<Vec<EventListener>> {
    let mut listeners = Vec::new();

    for (range, element) in &dom.range_buttons {
        let label = range.label();
        listeners.push(EventListener::new(element, "click", move |_| {
            report("Selecting range", select_range(id, label));
        })?);
    }

    for (tab, element) in &dom.tab_buttons {
        let label = tab.label();
        listeners.push(EventListener::new(element, "click", move |_| {
            report("Selecting tab", select_tab(id, label));
        })?);
    }

    listeners.push(EventListener::new(&dom.fullscreen_button, "click", move |_| {
        report("Toggling fullscreen", toggle_fullscreen(id).map(|_| ()));
    })?);

    listeners.push(EventListener::new(&dom.compare_button, "click", |_| {
        log::debug!("Compare is not implemented");
    })?);

    listeners.push(EventListener::new(&dom.canvas, "mousemove", move |event| {
        if let Some(position) = pointer_position(&event) {
            report(
                "Pointer move",
                handle_pointer(id, PointerEvent::CursorMoved { position }),
            );
        }
    })?);

    listeners.push(EventListener::new(&dom.canvas, "mouseleave", move |_| {
        report("Pointer leave", handle_pointer(id, PointerEvent::CursorLeft));
    })?);

    listeners.push(EventListener::new(document, "fullscreenchange", move |_| {
        report("Fullscreen change", on_fullscreen_change(id));
    })?);

    listeners.push(EventListener::new(window, "resize", move |_| {
        report(
            "Window resize",
            InstanceManager::try_with_instance_mut(&id, |instance| {
                instance.sync_size()?;
                instance.redraw()
            }),
        );
    })?);

    log::debug!("Attached {} listeners to chart {id}", listeners.len());
    Ok(listeners)
}
