//! Browser wiring for the project detail dialog.
//!
//! `DomModal` resolves the dialog's element ids once at mount and implements
//! `ModalHost` over them. `mount` installs the three listeners (document
//! click for triggers, root click for backdrop/close, document keydown for
//! Escape) and runs scheduled steps on `gloo_timers` timeouts.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, KeyboardEvent};

use super::dialog::{DialogTimings, ScheduledStep};
use super::host::{ModalHost, Section, TextSlot};
use super::labels::Language;
use super::project_modal::{Dismissal, ProjectModal};
use super::record::ProjectRecord;
use super::router::nearest_trigger;
use crate::error::MountError;
use crate::util::dom::{event_element, html_element_by_id, listen, set_style};

pub const ROOT_ID: &str = "discordModal";
pub const TITLE_ID: &str = "discordModalTitle";
pub const DESCRIPTION_ID: &str = "discordModalDescription";
pub const FEATURES_ID: &str = "discordModalFeatures";
pub const FEATURES_LIST_ID: &str = "discordModalFeaturesList";
pub const TECH_ID: &str = "discordModalTech";
pub const TECH_TAGS_ID: &str = "discordModalTechTags";
pub const STATS_ID: &str = "discordModalStats";
pub const STATS_GRID_ID: &str = "discordModalStatsGrid";
pub const CLOSE_ID: &str = "discordModalClose";

const OPEN_CLASS: &str = "open";
const FEATURE_ICON_CLASS: &str = "fas fa-check";
const TECH_TAG_CLASS: &str = "tech-tag";
const STAT_ITEM_CLASS: &str = "stat-item";
const STAT_VALUE_CLASS: &str = "stat-value";
const STAT_LABEL_CLASS: &str = "stat-label";

struct SectionHooks {
    wrapper: Option<HtmlElement>,
    container: Option<Element>,
}

pub struct DomModal {
    document: Document,
    root: HtmlElement,
    title: Option<Element>,
    description: Option<Element>,
    features: SectionHooks,
    tech: SectionHooks,
    stats: SectionHooks,
    /// Trigger that opened the dialog; focus returns here on close.
    opener: Option<HtmlElement>,
}

impl DomModal {
    /// Resolve every hook. Only the root is required.
    pub fn resolve(document: &Document) -> Result<Self, MountError> {
        let root = html_element_by_id(document, ROOT_ID)?;
        let hooks = |wrapper: &str, container: &str| SectionHooks {
            wrapper: html_element_by_id(document, wrapper).ok(),
            container: document.get_element_by_id(container),
        };
        Ok(Self {
            document: document.clone(),
            root,
            title: document.get_element_by_id(TITLE_ID),
            description: document.get_element_by_id(DESCRIPTION_ID),
            features: hooks(FEATURES_ID, FEATURES_LIST_ID),
            tech: hooks(TECH_ID, TECH_TAGS_ID),
            stats: hooks(STATS_ID, STATS_GRID_ID),
            opener: None,
        })
    }

    pub fn remember_opener(&mut self, trigger: &Element) {
        self.opener = trigger.clone().dyn_into::<HtmlElement>().ok();
    }

    fn section(&self, section: Section) -> &SectionHooks {
        match section {
            Section::Features => &self.features,
            Section::Tech => &self.tech,
            Section::Stats => &self.stats,
        }
    }

    fn classed(&self, tag: &str, class: &str) -> Result<Element, JsValue> {
        let element = self.document.create_element(tag)?;
        element.set_class_name(class);
        Ok(element)
    }

    fn feature_item(&self, text: &str) -> Result<Element, JsValue> {
        let item = self.document.create_element("li")?;
        let icon = self.classed("i", FEATURE_ICON_CLASS)?;
        item.append_child(&icon)?;
        item.append_child(&self.document.create_text_node(&format!(" {text}")))?;
        Ok(item)
    }

    fn tech_tag(&self, text: &str) -> Result<Element, JsValue> {
        let tag = self.classed("span", TECH_TAG_CLASS)?;
        tag.set_text_content(Some(text));
        Ok(tag)
    }

    fn stat_cell(&self, value: &str, label: &str) -> Result<Element, JsValue> {
        let cell = self.classed("div", STAT_ITEM_CLASS)?;
        let value_el = self.classed("span", STAT_VALUE_CLASS)?;
        value_el.set_text_content(Some(value));
        let label_el = self.classed("span", STAT_LABEL_CLASS)?;
        label_el.set_text_content(Some(label));
        cell.append_child(&value_el)?;
        cell.append_child(&label_el)?;
        Ok(cell)
    }

    fn append_to(&self, section: Section, built: Result<Element, JsValue>) {
        let Some(container) = self.section(section).container.as_ref() else {
            return;
        };
        if let Err(err) = built.and_then(|child| container.append_child(&child).map(|_| ())) {
            log::warn!("failed to append {section:?} entry: {err:?}");
        }
    }
}

impl ModalHost for DomModal {
    fn set_text(&mut self, slot: TextSlot, text: &str) {
        let target = match slot {
            TextSlot::Title => self.title.as_ref(),
            TextSlot::Description => self.description.as_ref(),
        };
        if let Some(element) = target {
            element.set_text_content(Some(text));
        }
    }

    fn clear_section(&mut self, section: Section) -> bool {
        match self.section(section).container.as_ref() {
            Some(container) => {
                container.set_text_content(None);
                true
            }
            None => false,
        }
    }

    fn append_feature(&mut self, text: &str) {
        self.append_to(Section::Features, self.feature_item(text));
    }

    fn append_tech_tag(&mut self, text: &str) {
        self.append_to(Section::Tech, self.tech_tag(text));
    }

    fn append_stat(&mut self, value: &str, label: &str) {
        self.append_to(Section::Stats, self.stat_cell(value, label));
    }

    fn set_section_visible(&mut self, section: Section, visible: bool) {
        if let Some(wrapper) = self.section(section).wrapper.as_ref() {
            set_style(wrapper, "display", if visible { "" } else { "none" });
        }
    }

    fn set_root_visible(&mut self, visible: bool) {
        set_style(&self.root, "display", if visible { "block" } else { "none" });
    }

    fn set_open_class(&mut self, present: bool) {
        let classes = self.root.class_list();
        let result = if present { classes.add_1(OPEN_CLASS) } else { classes.remove_1(OPEN_CLASS) };
        if let Err(err) = result {
            log::warn!("failed to toggle .{OPEN_CLASS}: {err:?}");
        }
    }

    fn body_overflow(&self) -> String {
        self.document
            .body()
            .and_then(|body| body.style().get_property_value("overflow").ok())
            .unwrap_or_default()
    }

    fn set_body_overflow(&mut self, value: &str) {
        if let Some(body) = self.document.body() {
            set_style(&body, "overflow", value);
        }
    }

    fn release_focus(&mut self) {
        if let Some(opener) = self.opener.take() {
            if opener.is_connected() {
                let _ = opener.focus();
            }
        }
    }
}

type SharedModal = Rc<RefCell<ProjectModal<DomModal>>>;

/// Timer handle for the in-flight transition. Replacing it drops (and so
/// cancels) the previous timeout.
type PendingStep = Rc<RefCell<Option<Timeout>>>;

fn schedule(modal: &SharedModal, pending: &PendingStep, step: Option<ScheduledStep>) {
    let Some(step) = step else {
        return;
    };
    let modal = Rc::clone(modal);
    let timeout = Timeout::new(step.delay_ms, move || {
        modal.borrow_mut().complete(step);
    });
    *pending.borrow_mut() = Some(timeout);
}

fn document_language(document: &Document) -> Language {
    let lang = document.document_element().and_then(|root| root.get_attribute("lang"));
    Language::from_document_lang(lang.as_deref())
}

/// Wire the dialog into the page. Fails only when the root is absent, in
/// which case triggers keep their default click behaviour.
pub fn mount(document: &Document, timings: DialogTimings) -> Result<(), MountError> {
    let host = DomModal::resolve(document)?;
    let root = host.root.clone();
    let modal: SharedModal = Rc::new(RefCell::new(ProjectModal::new(host, timings)));
    let pending: PendingStep = Rc::new(RefCell::new(None));

    {
        let modal = Rc::clone(&modal);
        let pending = Rc::clone(&pending);
        let document_for_lang = document.clone();
        listen(document, "click", move |event| {
            let Some(trigger) = event_element(&event).and_then(nearest_trigger) else {
                return;
            };
            event.prevent_default();
            let record = ProjectRecord::decode(&trigger);
            let language = document_language(&document_for_lang);
            let step = {
                let mut modal = modal.borrow_mut();
                modal.host_mut().remember_opener(&trigger);
                modal.show(&record, language)
            };
            schedule(&modal, &pending, step);
        })?;
    }

    if let Ok(close) = html_element_by_id(document, CLOSE_ID) {
        let modal = Rc::clone(&modal);
        let pending = Rc::clone(&pending);
        listen(&close, "click", move |_| {
            let step = modal.borrow_mut().dismiss(Dismissal::CloseButton);
            schedule(&modal, &pending, step);
        })?;
    } else {
        log::debug!("#{CLOSE_ID} missing; close button dismissal unavailable");
    }

    {
        let modal = Rc::clone(&modal);
        let pending = Rc::clone(&pending);
        let root_value = JsValue::from(root.clone());
        listen(&root, "click", move |event| {
            let target_is_root = event.target().is_some_and(|target| JsValue::from(target) == root_value);
            let step = modal.borrow_mut().root_clicked(target_is_root);
            schedule(&modal, &pending, step);
        })?;
    }

    listen(document, "keydown", move |event| {
        let Some(key) = event.dyn_ref::<KeyboardEvent>().map(KeyboardEvent::key) else {
            return;
        };
        let step = modal.borrow_mut().key_pressed(&key);
        schedule(&modal, &pending, step);
    })?;

    log::debug!("project modal mounted");
    Ok(())
}
