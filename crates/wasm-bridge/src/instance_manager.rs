//! Thread-local registry of live widgets keyed by id

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use price_chart_data::{DataLoader, FetchClient};
use price_chart_renderer::CanvasSurface;
use price_chart_shared::{ChartError, ChartResult};
use uuid::Uuid;

use crate::chart_engine::ChartEngine;
use crate::dom::WidgetDom;
use crate::fullscreen::WebFullscreen;
use crate::listeners::EventListener;

/// DOM-side resources of a mounted widget.
pub struct MountedView {
    pub dom: WidgetDom,
    pub surface: CanvasSurface,
    pub fullscreen: WebFullscreen,
    pub listeners: Vec<EventListener>,
}

/// A single widget with all its associated state
pub struct ChartInstance {
    pub root_id: String,
    pub engine: ChartEngine,
    pub loader: Rc<DataLoader<FetchClient>>,
    pub view: Option<MountedView>,
}

thread_local! {
    static CHART_INSTANCES: RefCell<HashMap<Uuid, ChartInstance>> = RefCell::new(HashMap::new());
}

/// Owns every widget instance. Callers must not call back into the manager
/// from inside a `with_instance*` closure.
pub struct InstanceManager;

impl InstanceManager {
    pub fn create_instance(instance: ChartInstance) -> Uuid {
        let id = Uuid::new_v4();
        CHART_INSTANCES.with(|instances| {
            instances.borrow_mut().insert(id, instance);
        });
        log::debug!("Created chart instance {id}");
        id
    }

    pub fn with_instance<F, R>(id: &Uuid, f: F) -> Option<R>
    where
        F: FnOnce(&ChartInstance) -> R,
    {
        CHART_INSTANCES.with(|instances| instances.borrow().get(id).map(f))
    }

    pub fn with_instance_mut<F, R>(id: &Uuid, f: F) -> Option<R>
    where
        F: FnOnce(&mut ChartInstance) -> R,
    {
        CHART_INSTANCES.with(|instances| instances.borrow_mut().get_mut(id).map(f))
    }

    /// Like [`InstanceManager::with_instance_mut`] but a missing instance is an error.
    pub fn try_with_instance_mut<F, R>(id: &Uuid, f: F) -> ChartResult<R>
    where
        F: FnOnce(&mut ChartInstance) -> ChartResult<R>,
    {
        Self::with_instance_mut(id, f).unwrap_or_else(|| Err(not_found(id)))
    }

    pub fn instance_exists(id: &Uuid) -> bool {
        CHART_INSTANCES.with(|instances| instances.borrow().contains_key(id))
    }

    pub fn remove_instance(id: &Uuid) -> Option<ChartInstance> {
        CHART_INSTANCES.with(|instances| instances.borrow_mut().remove(id))
    }

    pub fn instance_count() -> usize {
        CHART_INSTANCES.with(|instances| instances.borrow().len())
    }

    pub fn clear_all() {
        // Take the map first so listener teardown never runs under the borrow.
        let drained =
            CHART_INSTANCES.with(|instances| std::mem::take(&mut *instances.borrow_mut()));
        drop(drained);
    }
}

pub fn not_found(id: &Uuid) -> ChartError {
    ChartError::JsInterop {
        message: format!("Chart instance {id} not found"),
    }
}
