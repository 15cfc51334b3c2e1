//! DOM scaffold for one widget: header, toolbar and canvas

use price_chart_renderer::ChartLayout;
use price_chart_shared::{ChartError, ChartResult, MenuTab, TimeRange, UiState};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlCanvasElement, HtmlElement};

use crate::header::HeaderView;

const STYLES: &str = "\
.fc-container{box-sizing:border-box;display:flex;flex-direction:column;width:800px;\
padding:24px;background:#fff;border-radius:8px;box-shadow:0 10px 15px -3px rgba(0,0,0,.1);\
font-family:'Circular Std',sans-serif}\
.fc-container.fc-fullscreen{width:100%;height:100%;border-radius:0}\
.fc-header{margin-bottom:32px}\
.fc-price{margin:0;font-size:50px;font-weight:300;line-height:88.56px;color:#1E2329}\
.fc-currency{font-size:30px;font-weight:400;color:#58667E}\
.fc-change{font-size:18px}\
.fc-toolbar{display:flex;justify-content:space-between;align-items:center;margin-bottom:16px;\
border-bottom:1px solid #EAECEF}\
.fc-tabs,.fc-actions{display:flex;gap:8px}\
.fc-button{border:0;background:none;padding:6px 10px;border-radius:4px;color:#707A8A;\
cursor:pointer;font:inherit;font-size:14px}\
.fc-tab.active{color:#1E2329;border-bottom:2px solid #4A55A2;border-radius:0}\
.fc-range.active{background:#4A55A2;color:#fff}\
.fc-plot{position:relative;width:100%}\
.fc-fullscreen .fc-plot{flex:1;min-height:0}";

fn create(document: &Document, tag: &str, class: &str) -> ChartResult<Element> {
    let element = document.create_element(tag)?;
    element.set_class_name(class);
    Ok(element)
}

fn button(document: &Document, class: &str, label: &str) -> ChartResult<Element> {
    let element = create(document, "button", &format!("fc-button {class}"))?;
    element.set_attribute("type", "button")?;
    element.set_text_content(Some(label));
    Ok(element)
}

fn html(element: Element) -> ChartResult<HtmlElement> {
    element.dyn_into::<HtmlElement>().map_err(|_| ChartError::Dom {
        message: "expected an HTML element".to_string(),
    })
}

pub struct WidgetDom {
    pub container: HtmlElement,
    pub plot: HtmlElement,
    pub canvas: HtmlCanvasElement,
    pub fullscreen_button: Element,
    pub compare_button: Element,
    pub tab_buttons: Vec<(MenuTab, Element)>,
    pub range_buttons: Vec<(TimeRange, Element)>,
    price_value: Element,
    currency: Element,
    change: HtmlElement,
}

impl WidgetDom {
    /// Build the widget inside `root`, replacing its children.
    pub fn build(document: &Document, root: &Element, layout: &ChartLayout) -> ChartResult<Self> {
        root.set_inner_html("");

        let container = html(create(document, "div", "fc-container")?)?;
        let style = create(document, "style", "")?;
        style.set_text_content(Some(STYLES));
        container.append_child(&style)?;

        let header = create(document, "div", "fc-header")?;
        let price = create(document, "h2", "fc-price")?;
        let price_value = create(document, "span", "fc-price-value")?;
        let currency = create(document, "sup", "fc-currency")?;
        price.append_child(&price_value)?;
        price.append_child(&document.create_text_node(" "))?;
        price.append_child(&currency)?;
        let change = html(create(document, "div", "fc-change")?)?;
        header.append_child(&price)?;
        header.append_child(&change)?;
        container.append_child(&header)?;

        let toolbar = create(document, "div", "fc-toolbar")?;
        let tabs = create(document, "div", "fc-tabs")?;
        let mut tab_buttons = Vec::with_capacity(MenuTab::ALL.len());
        for tab in MenuTab::ALL {
            let element = button(document, "fc-tab", tab.label())?;
            element.set_attribute("data-tab", tab.label())?;
            tabs.append_child(&element)?;
            tab_buttons.push((tab, element));
        }

        let actions = create(document, "div", "fc-actions")?;
        let fullscreen_button = button(document, "fc-fullscreen-toggle", "Fullscreen")?;
        let compare_button = button(document, "fc-compare", "Compare")?;
        actions.append_child(&fullscreen_button)?;
        actions.append_child(&compare_button)?;
        let mut range_buttons = Vec::with_capacity(TimeRange::ALL.len());
        for range in TimeRange::ALL {
            let element = button(document, "fc-range", range.label())?;
            element.set_attribute("data-range", range.label())?;
            actions.append_child(&element)?;
            range_buttons.push((range, element));
        }
        toolbar.append_child(&tabs)?;
        toolbar.append_child(&actions)?;
        container.append_child(&toolbar)?;

        let plot = html(create(document, "div", "fc-plot")?)?;
        plot.style()
            .set_property("height", &format!("{}px", layout.height))?;
        let canvas = create(document, "canvas", "fc-canvas")?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| ChartError::Dom {
                message: "canvas element could not be created".to_string(),
            })?;
        plot.append_child(&canvas)?;
        container.append_child(&plot)?;

        root.append_child(&container)?;
        log::debug!("Widget DOM built under #{}", root.id());

        Ok(Self {
            container,
            plot,
            canvas,
            fullscreen_button,
            compare_button,
            tab_buttons,
            range_buttons,
            price_value,
            currency,
            change,
        })
    }

    pub fn update_header(&self, view: &HeaderView) -> ChartResult<()> {
        self.price_value.set_text_content(Some(&view.price_text));
        self.currency.set_text_content(Some(&view.currency));
        self.change.set_text_content(Some(&view.change_text));
        self.change.style().set_property("color", &view.change_color)?;
        Ok(())
    }

    pub fn update_selection(&self, ui: &UiState) -> ChartResult<()> {
        for (tab, element) in &self.tab_buttons {
            element
                .class_list()
                .toggle_with_force("active", *tab == ui.menu_tab)?;
        }
        for (range, element) in &self.range_buttons {
            element
                .class_list()
                .toggle_with_force("active", *range == ui.time_range)?;
        }
        self.container
            .class_list()
            .toggle_with_force("fc-fullscreen", ui.fullscreen)?;
        Ok(())
    }

    /// Switch the plot between its fixed height and filling the container.
    ///
    /// Takes effect immediately so the plot can be measured right after.
    pub fn apply_fullscreen_layout(&self, fullscreen: bool, fixed_height: f64) -> ChartResult<()> {
        self.container
            .class_list()
            .toggle_with_force("fc-fullscreen", fullscreen)?;
        let style = self.plot.style();
        if fullscreen {
            style.remove_property("height")?;
        } else {
            style.set_property("height", &format!("{fixed_height}px"))?;
        }
        Ok(())
    }

    /// Current plot size in CSS pixels, `None` while not laid out.
    pub fn measure_plot(&self) -> Option<(f64, f64)> {
        let width = self.plot.client_width();
        let height = self.plot.client_height();
        (width > 0 && height > 0).then(|| (width as f64, height as f64))
    }

    pub fn remove(&self) {
        self.container.remove();
    }
}
